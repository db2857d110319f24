//! The two mutation models under comparison.

use super::clock::Clock;
use super::genome::TargetSpace;
use super::sampler::{joint_trial, progressive_trial, ReplicateResult};
use super::source::RandomSource;
use crate::constants::DIGIT_BASE;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Model {
    /// Every gene must be right in the same draw
    Joint,
    /// Genes are matched one at a time and kept once matched
    Progressive,
}

impl Model {
    pub const ALL: [Model; 2] = [Model::Joint, Model::Progressive];

    /// Heading used in reports
    pub fn label(&self) -> &'static str {
        match self {
            Model::Joint => "DEPENDENT",
            Model::Progressive => "INDEPENDENT",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Model::Joint => "the whole genome mutates at once; one wrong gene fails the draw",
            Model::Progressive => "each gene mutates on its own; a matched gene is kept",
        }
    }

    /// Mean number of draws per replicate.
    ///
    /// Joint: size of the joint range, `9 * 10^(L-1)`. Progressive: ten
    /// draws per gene.
    pub fn expected_trials(&self, num_positions: u32) -> f64 {
        match self {
            Model::Joint => {
                (DIGIT_BASE - 1) as f64 * (DIGIT_BASE as f64).powi(num_positions as i32 - 1)
            }
            Model::Progressive => DIGIT_BASE as f64 * num_positions as f64,
        }
    }

    /// Run one replicate of this model.
    pub fn sample<R, C>(&self, space: &TargetSpace, rng: &mut R, clock: &C) -> ReplicateResult
    where
        R: RandomSource + ?Sized,
        C: Clock + ?Sized,
    {
        match self {
            Model::Joint => joint_trial(space, rng, clock),
            Model::Progressive => progressive_trial(space, rng, clock),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//! Experiment configuration.

use super::error::SimError;
use super::model::Model;
use crate::constants::{
    DEFAULT_MUTATION_TIME_YEARS, DEFAULT_NUM_GENES, DEFAULT_REPLICATES, MAX_JOINT_GENES,
};
use serde::Serialize;

/// Configuration for an experiment run. Fixed before the first replicate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExperimentConfig {
    /// Number of genes (digit positions) in the target genome
    pub num_positions: u32,

    /// Number of independent replicates to average over
    pub replicate_count: u32,

    /// Years for one successful mutation to prevail in a population
    pub mutation_time_years: f64,

    /// Base seed; replicate `i` runs on `seed + i` (None = one base seed drawn from the OS)
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            num_positions: DEFAULT_NUM_GENES,
            replicate_count: DEFAULT_REPLICATES,
            mutation_time_years: DEFAULT_MUTATION_TIME_YEARS,
            seed: None,
        }
    }
}

impl ExperimentConfig {
    /// Small genome, few replicates: finishes quickly for both models
    pub fn quick(num_positions: u32) -> Self {
        Self {
            num_positions,
            replicate_count: 20,
            ..Default::default()
        }
    }

    /// Same configuration with a fixed seed
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }

    /// Check the configuration before running `model`.
    ///
    /// A zero replicate count is rejected here so the running means are
    /// never divided by zero.
    pub fn validate(&self, model: Model) -> Result<(), SimError> {
        if self.replicate_count == 0 {
            return Err(SimError::NoReplicates);
        }
        if self.num_positions == 0 {
            return Err(SimError::NoGenes);
        }
        if model == Model::Joint && self.num_positions > MAX_JOINT_GENES {
            return Err(SimError::TooManyGenes {
                requested: self.num_positions,
                max: MAX_JOINT_GENES,
            });
        }
        if !self.mutation_time_years.is_finite() || self.mutation_time_years < 0.0 {
            return Err(SimError::InvalidMutationTime(self.mutation_time_years));
        }
        Ok(())
    }
}

//! Trial samplers: draw until the target genome is matched.
//!
//! Both loops are unbounded. They terminate with probability one, and the
//! cost of the joint loop growing as `10^L` is what the experiment measures.

use super::clock::Clock;
use super::genome::{Genome, TargetSpace};
use super::source::RandomSource;
use std::time::Duration;

/// Outcome of one replicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplicateResult {
    /// Wall time for the whole replicate, target draw included
    pub elapsed: Duration,
    /// Number of candidate draws, always at least 1
    pub trial_count: u64,
}

impl ReplicateResult {
    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Count whole-genome draws until one equals `target`.
pub fn joint_search<R>(space: &TargetSpace, target: u64, rng: &mut R) -> u64
where
    R: RandomSource + ?Sized,
{
    let mut trials = 0u64;
    loop {
        let candidate = space.draw_joint(rng);
        trials += 1;
        if candidate == target {
            break trials;
        }
    }
}

/// One joint replicate: draw a target, then search for it.
pub fn joint_trial<R, C>(space: &TargetSpace, rng: &mut R, clock: &C) -> ReplicateResult
where
    R: RandomSource + ?Sized,
    C: Clock + ?Sized,
{
    let start = clock.now();
    let target = space.draw_joint(rng);
    let trial_count = joint_search(space, target, rng);
    ReplicateResult {
        elapsed: clock.now().saturating_sub(start),
        trial_count,
    }
}

/// Count single-digit draws until every gene of `target` is matched.
///
/// Genes are matched left to right. A matched gene is locked and never
/// drawn again.
pub fn progressive_search<R: RandomSource + ?Sized>(target: &Genome, rng: &mut R) -> u64 {
    let mut trials = 0u64;
    for &wanted in target.digits() {
        loop {
            trials += 1;
            if rng.uniform_digit() == wanted {
                break;
            }
        }
    }
    trials
}

/// One progressive replicate: draw a target genome, then match it gene by gene.
pub fn progressive_trial<R, C>(space: &TargetSpace, rng: &mut R, clock: &C) -> ReplicateResult
where
    R: RandomSource + ?Sized,
    C: Clock + ?Sized,
{
    let start = clock.now();
    let target = space.draw_genome(rng);
    let trial_count = progressive_search(&target, rng);
    ReplicateResult {
        elapsed: clock.now().saturating_sub(start),
        trial_count,
    }
}

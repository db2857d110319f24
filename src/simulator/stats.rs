//! Running statistics over replicates.

use super::sampler::ReplicateResult;
use serde::Serialize;

/// Derived metric: years for the mean number of mutations to prevail.
pub fn evolution_years(mean_trial_count: f64, mutation_time_years: f64) -> u64 {
    (mean_trial_count * mutation_time_years).round() as u64
}

/// Online mean/total accumulator owned by one driver run.
///
/// After `i` recorded replicates the means equal the arithmetic mean of
/// the `i` values seen, updated with `new = (old * (i - 1) + value) / i`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunningAggregate {
    pub replicates: u32,
    pub mean_elapsed_secs: f64,
    pub total_elapsed_secs: f64,
    pub mean_trial_count: f64,
    pub total_trials: u128,
    pub min_trial_count: u64,
    pub max_trial_count: u64,
}

impl RunningAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: &ReplicateResult) {
        let seen = self.replicates as f64;
        let count = seen + 1.0;
        let elapsed = result.elapsed_secs();
        let trials = result.trial_count;

        self.mean_elapsed_secs = (self.mean_elapsed_secs * seen + elapsed) / count;
        self.total_elapsed_secs += elapsed;
        self.mean_trial_count = (self.mean_trial_count * seen + trials as f64) / count;
        self.total_trials += trials as u128;

        if self.replicates == 0 {
            self.min_trial_count = trials;
            self.max_trial_count = trials;
        } else {
            self.min_trial_count = self.min_trial_count.min(trials);
            self.max_trial_count = self.max_trial_count.max(trials);
        }
        self.replicates += 1;
    }

    pub fn evolution_time_years(&self, mutation_time_years: f64) -> u64 {
        evolution_years(self.mean_trial_count, mutation_time_years)
    }
}

/// Snapshot emitted after each replicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// 0-based replicate index
    pub index: u32,
    pub result: ReplicateResult,
    pub mean_elapsed_secs: f64,
    pub mean_trial_count: f64,
}

impl Progress {
    pub fn after(index: u32, result: ReplicateResult, aggregate: &RunningAggregate) -> Self {
        Self {
            index,
            result,
            mean_elapsed_secs: aggregate.mean_elapsed_secs,
            mean_trial_count: aggregate.mean_trial_count,
        }
    }
}

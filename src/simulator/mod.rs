//! Monte Carlo comparison of two mutation models.
//!
//! A target genome of `L` decimal genes is drawn at random, then mutation
//! searches for it:
//! - Joint: whole genomes are drawn until one matches exactly (`~10^L` draws)
//! - Progressive: each gene is drawn until it matches, then locked (`10 * L` draws)
//!
//! Many independent replicates are averaged, and the mean number of
//! mutations is turned into years with a fixed time per successful mutation.

mod clock;
mod config;
mod error;
mod genome;
mod model;
mod report;
mod runner;
mod sampler;
mod source;
mod stats;

pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::ExperimentConfig;
pub use error::SimError;
pub use genome::{Genome, TargetSpace};
pub use model::Model;
pub use report::{progress_line, ComparisonReport, ExperimentReport};
pub use runner::{
    run_comparison, run_experiment, run_experiment_parallel, run_experiment_with, run_replicates,
};
pub use sampler::{
    joint_search, joint_trial, progressive_search, progressive_trial, ReplicateResult,
};
pub use source::{entropy_seed, RandomSource, ScriptedSource, SeededSource};
pub use stats::{evolution_years, Progress, RunningAggregate};

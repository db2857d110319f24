//! Replicate drivers.
//!
//! Every replicate draws its own target from its own ChaCha8 stream, seeded
//! with `base_seed + index`. Replicates are therefore independent, and the
//! sequential and parallel drivers see the same draws for the same seed.

use super::clock::{Clock, MonotonicClock};
use super::config::ExperimentConfig;
use super::error::SimError;
use super::genome::TargetSpace;
use super::model::Model;
use super::report::{ComparisonReport, ExperimentReport};
use super::sampler::ReplicateResult;
use super::source::{entropy_seed, SeededSource};
use super::stats::{Progress, RunningAggregate};
use crate::constants::SLOW_JOINT_GENES;
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Run `sampler` once per replicate, in order, and accumulate the results.
///
/// `sampler` receives the 0-based replicate index. `on_progress` sees a
/// snapshot after every replicate.
pub fn run_replicates<F, P>(
    config: &ExperimentConfig,
    mut sampler: F,
    mut on_progress: P,
) -> Result<RunningAggregate, SimError>
where
    F: FnMut(u32) -> ReplicateResult,
    P: FnMut(&Progress),
{
    if config.replicate_count == 0 {
        return Err(SimError::NoReplicates);
    }

    let mut aggregate = RunningAggregate::new();
    for index in 0..config.replicate_count {
        let result = sampler(index);
        aggregate.record(&result);

        debug!(
            index,
            trials = result.trial_count,
            elapsed_secs = result.elapsed_secs(),
            mean_trials = aggregate.mean_trial_count,
            "replicate finished"
        );
        on_progress(&Progress::after(index, result, &aggregate));
    }

    Ok(aggregate)
}

/// Run the full experiment for `model` on the wall clock.
pub fn run_experiment(
    config: &ExperimentConfig,
    model: Model,
) -> Result<ExperimentReport, SimError> {
    run_experiment_with(config, model, &MonotonicClock::new(), |_| {})
}

/// Run the full experiment for `model` with an explicit clock and progress observer.
pub fn run_experiment_with<C, P>(
    config: &ExperimentConfig,
    model: Model,
    clock: &C,
    on_progress: P,
) -> Result<ExperimentReport, SimError>
where
    C: Clock + ?Sized,
    P: FnMut(&Progress),
{
    let seed = prepare(config, model)?;
    let space = TargetSpace::new(config.num_positions);

    let aggregate = run_replicates(
        config,
        |index| {
            let mut rng = SeededSource::for_replicate(seed, index);
            model.sample(&space, &mut rng, clock)
        },
        on_progress,
    )?;

    Ok(finish(config, model, seed, &aggregate))
}

/// Run the experiment on the rayon pool.
///
/// Replicates are sampled concurrently, then recorded in index order so
/// the aggregate goes through the same recurrence as [`run_experiment`].
/// Trial statistics are identical for the same seed; elapsed times are
/// wall-clock and differ.
pub fn run_experiment_parallel(
    config: &ExperimentConfig,
    model: Model,
) -> Result<ExperimentReport, SimError> {
    let seed = prepare(config, model)?;
    let space = TargetSpace::new(config.num_positions);
    let clock = MonotonicClock::new();

    let results: Vec<ReplicateResult> = (0..config.replicate_count)
        .into_par_iter()
        .map(|index| {
            let mut rng = SeededSource::for_replicate(seed, index);
            model.sample(&space, &mut rng, &clock)
        })
        .collect();

    let aggregate = run_replicates(config, |index| results[index as usize], |_| {})?;

    Ok(finish(config, model, seed, &aggregate))
}

/// Run the joint experiment, then the progressive one, on the same configuration.
///
/// `on_finished` receives each report as soon as its experiment completes,
/// so the joint summary is available before the progressive run starts.
pub fn run_comparison<P, F>(
    config: &ExperimentConfig,
    mut on_progress: P,
    mut on_finished: F,
) -> Result<ComparisonReport, SimError>
where
    P: FnMut(Model, &Progress),
    F: FnMut(&ExperimentReport),
{
    // Validate both up front so a bad config fails before the slow joint run
    for model in Model::ALL {
        config.validate(model)?;
    }

    let clock = MonotonicClock::new();
    let joint = run_experiment_with(config, Model::Joint, &clock, |p| {
        on_progress(Model::Joint, p)
    })?;
    on_finished(&joint);

    let progressive = run_experiment_with(config, Model::Progressive, &clock, |p| {
        on_progress(Model::Progressive, p)
    })?;
    on_finished(&progressive);

    Ok(ComparisonReport::new(joint, progressive))
}

fn prepare(config: &ExperimentConfig, model: Model) -> Result<u64, SimError> {
    config.validate(model)?;
    let seed = match config.seed {
        Some(seed) => seed,
        None => entropy_seed()?,
    };

    if model == Model::Joint && config.num_positions > SLOW_JOINT_GENES {
        warn!(
            genes = config.num_positions,
            expected_trials = model.expected_trials(config.num_positions),
            "joint experiment will take a very long time"
        );
    }
    info!(
        %model,
        genes = config.num_positions,
        replicates = config.replicate_count,
        seed,
        "starting experiment"
    );

    Ok(seed)
}

fn finish(
    config: &ExperimentConfig,
    model: Model,
    seed: u64,
    aggregate: &RunningAggregate,
) -> ExperimentReport {
    let report = ExperimentReport::new(model, config, seed, aggregate);
    info!(
        %model,
        mean_trials = report.mean_trial_count,
        mean_elapsed_secs = report.mean_elapsed_secs,
        total_elapsed_secs = report.total_elapsed_secs,
        evolution_years = report.evolution_time_years,
        "experiment finished"
    );
    report
}

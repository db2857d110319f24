//! Integration test: scripted sampler scenarios
//!
//! Replays fixed draw sequences through the public sampler API and checks
//! the exact trial counts.

use evolution::simulator::{
    joint_search, joint_trial, progressive_search, progressive_trial, Genome, ManualClock,
    ScriptedSource, TargetSpace,
};
use std::time::Duration;

#[test]
fn test_joint_first_draw_matches() {
    let space = TargetSpace::new(1);
    let mut rng = ScriptedSource::new().with_values([3, 7, 9, 3]);
    assert_eq!(joint_search(&space, 3, &mut rng), 1);
}

#[test]
fn test_joint_third_draw_matches() {
    let space = TargetSpace::new(1);
    let mut rng = ScriptedSource::new().with_values([3, 7, 9, 3]);
    assert_eq!(joint_search(&space, 9, &mut rng), 3);
}

#[test]
fn test_progressive_two_genes() {
    // target "47": gene 0 sees 1, 4; gene 1 sees 0, 9, 7
    let target = Genome::new(vec![4, 7]);
    let mut rng = ScriptedSource::new().with_digits([1, 4, 0, 9, 7]);
    assert_eq!(progressive_search(&target, &mut rng), 5);
}

#[test]
fn test_progressive_never_revisits_a_gene() {
    // Gene 0 matches at once; the next 4 is only compared against gene 1
    let target = Genome::new(vec![4, 4, 2]);
    let mut rng = ScriptedSource::new().with_digits([4, 1, 4, 2, 9]);
    assert_eq!(progressive_search(&target, &mut rng), 4);
    assert_eq!(rng.remaining(), 1);
}

#[test]
fn test_trials_time_the_whole_replicate() {
    let clock = ManualClock::new(Duration::from_millis(40));

    let space = TargetSpace::new(1);
    let mut rng = ScriptedSource::new().with_values([5, 1, 5]);
    let joint = joint_trial(&space, &mut rng, &clock);
    assert_eq!(joint.trial_count, 2);
    assert_eq!(joint.elapsed, Duration::from_millis(40));

    let space = TargetSpace::new(2);
    let mut rng = ScriptedSource::new().with_digits([4, 7, 1, 4, 0, 9, 7]);
    let progressive = progressive_trial(&space, &mut rng, &clock);
    assert_eq!(progressive.trial_count, 5);
    assert_eq!(progressive.elapsed, Duration::from_millis(40));
}

//! Experiment report generation.

use super::config::ExperimentConfig;
use super::model::Model;
use super::stats::{Progress, RunningAggregate};
use serde::Serialize;

/// Final statistics of one experiment.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    pub model: Model,
    pub num_positions: u32,
    pub replicate_count: u32,
    pub mutation_time_years: f64,
    /// Base seed actually used; replicate `i` ran on `seed + i`
    pub seed: u64,

    pub mean_elapsed_secs: f64,
    pub total_elapsed_secs: f64,
    pub mean_trial_count: f64,
    pub min_trial_count: u64,
    pub max_trial_count: u64,
    pub expected_trial_count: f64,
    pub evolution_time_years: u64,

    pub generated_at: String,
}

impl ExperimentReport {
    pub fn new(
        model: Model,
        config: &ExperimentConfig,
        seed: u64,
        aggregate: &RunningAggregate,
    ) -> Self {
        Self {
            model,
            num_positions: config.num_positions,
            replicate_count: aggregate.replicates,
            mutation_time_years: config.mutation_time_years,
            seed,
            mean_elapsed_secs: aggregate.mean_elapsed_secs,
            total_elapsed_secs: aggregate.total_elapsed_secs,
            mean_trial_count: aggregate.mean_trial_count,
            min_trial_count: aggregate.min_trial_count,
            max_trial_count: aggregate.max_trial_count,
            expected_trial_count: model.expected_trials(config.num_positions),
            evolution_time_years: aggregate.evolution_time_years(config.mutation_time_years),
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Generate the summary block.
    pub fn to_text(&self) -> String {
        let (mean_digits, total_digits) = seconds_precision(self.model);
        let mut report = String::new();

        report.push_str(&section_rule(&format!("{} EXPERIMENT", self.model.label())));
        report.push_str(&format!("  No. Genes:           {}\n", self.num_positions));
        report.push_str(&format!("  No. Iterations:      {}\n", self.replicate_count));
        report.push_str(&format!(
            "  Mutation Time [a]:   {}\n",
            self.mutation_time_years
        ));
        report.push_str(&format!(
            "  Average Time [s]:    {:.*}\n",
            mean_digits, self.mean_elapsed_secs
        ));
        report.push_str(&format!(
            "  Total Runtime [s]:   {:.*}\n",
            total_digits, self.total_elapsed_secs
        ));
        report.push_str(&format!(
            "  Average Mutations:   {:.2}\n",
            self.mean_trial_count
        ));
        report.push_str(&format!(
            "  Expected Mutations:  {:.0}\n",
            self.expected_trial_count
        ));
        report.push_str(&format!(
            "  Min / Max Mutations: {} / {}\n",
            self.min_trial_count, self.max_trial_count
        ));
        report.push_str(&format!(
            "  Evolution Time [a]:  {}\n",
            self.evolution_time_years
        ));

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Both experiments run under one configuration.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub joint: ExperimentReport,
    pub progressive: ExperimentReport,
}

impl ComparisonReport {
    pub fn new(joint: ExperimentReport, progressive: ExperimentReport) -> Self {
        Self { joint, progressive }
    }

    /// How many times more mutations the joint model needed
    pub fn trial_ratio(&self) -> f64 {
        if self.progressive.mean_trial_count > 0.0 {
            self.joint.mean_trial_count / self.progressive.mean_trial_count
        } else {
            0.0
        }
    }

    /// Both summary blocks followed by the comparison block.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str(&self.joint.to_text());
        report.push('\n');
        report.push_str(&self.progressive.to_text());
        report.push('\n');
        report.push_str(&self.summary_text());

        report
    }

    /// Only the comparison block, for callers that printed each summary already.
    pub fn summary_text(&self) -> String {
        let mut report = String::new();

        report.push_str(&section_rule("COMPARISON"));
        report.push_str(&format!(
            "  Mutation Ratio:      {:.1}x\n",
            self.trial_ratio()
        ));
        report.push_str(&format!(
            "  Evolution Time [a]:  {} vs {}\n",
            self.joint.evolution_time_years, self.progressive.evolution_time_years
        ));

        report
    }

    /// Both reports nested under `joint` and `progressive`.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// One progress line; callers overwrite it in place with `\r`.
pub fn progress_line(progress: &Progress) -> String {
    format!(
        "  {} elapsed, average: {:.6}, {:.6} | mutations: {} {:.0} ",
        progress.index,
        progress.result.elapsed_secs(),
        progress.mean_elapsed_secs,
        progress.result.trial_count,
        progress.mean_trial_count
    )
}

// Joint replicates are slow, so fewer decimals; progressive ones take microseconds
fn seconds_precision(model: Model) -> (usize, usize) {
    match model {
        Model::Joint => (4, 4),
        Model::Progressive => (6, 2),
    }
}

fn section_rule(title: &str) -> String {
    let head = format!("── {title} ");
    let fill = 64usize.saturating_sub(head.chars().count());
    format!("{head}{}\n", "─".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulator::sampler::ReplicateResult;
    use std::time::Duration;

    fn aggregate(results: &[(u64, u64)]) -> RunningAggregate {
        let mut agg = RunningAggregate::new();
        for &(millis, trials) in results {
            agg.record(&ReplicateResult {
                elapsed: Duration::from_millis(millis),
                trial_count: trials,
            });
        }
        agg
    }

    #[test]
    fn test_report_generation() {
        let config = ExperimentConfig::quick(2);
        let agg = aggregate(&[(1_000, 10), (3_000, 14)]);
        let report = ExperimentReport::new(Model::Joint, &config, 42, &agg);

        assert_eq!(report.replicate_count, 2);
        assert_eq!(report.seed, 42);
        assert!((report.mean_elapsed_secs - 2.0).abs() < 1e-12);
        assert!((report.total_elapsed_secs - 4.0).abs() < 1e-12);
        assert_eq!(report.mean_trial_count, 12.0);
        assert_eq!(report.expected_trial_count, 90.0);
        assert_eq!(report.evolution_time_years, 120);
    }

    #[test]
    fn test_joint_text_precision() {
        let config = ExperimentConfig::quick(3);
        let agg = aggregate(&[(1_234, 600), (2_000, 900)]);
        let text = ExperimentReport::new(Model::Joint, &config, 1, &agg).to_text();

        assert!(text.contains("DEPENDENT EXPERIMENT"));
        assert!(text.contains("No. Genes:           3"));
        assert!(text.contains("Mutation Time [a]:   10\n"));
        assert!(text.contains("Average Time [s]:    1.6170\n"));
        assert!(text.contains("Total Runtime [s]:   3.2340\n"));
        assert!(text.contains("Average Mutations:   750.00\n"));
        assert!(text.contains("Min / Max Mutations: 600 / 900\n"));
        assert!(text.contains("Evolution Time [a]:  7500\n"));
    }

    #[test]
    fn test_progressive_text_precision() {
        let config = ExperimentConfig::quick(2);
        let agg = aggregate(&[(1, 19), (2, 22)]);
        let text = ExperimentReport::new(Model::Progressive, &config, 1, &agg).to_text();

        assert!(text.contains("INDEPENDENT EXPERIMENT"));
        assert!(text.contains("Average Time [s]:    0.001500\n"));
        assert!(text.contains("Total Runtime [s]:   0.00\n"));
        assert!(text.contains("Expected Mutations:  20\n"));
        assert!(text.contains("Evolution Time [a]:  205\n"));
    }

    #[test]
    fn test_json_report_fields() {
        let config = ExperimentConfig::quick(2);
        let agg = aggregate(&[(5, 20)]);
        let json = ExperimentReport::new(Model::Progressive, &config, 9, &agg).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["model"], "progressive");
        assert_eq!(value["num_positions"], 2);
        assert_eq!(value["evolution_time_years"], 200);
        assert!(value["generated_at"].is_string());
    }

    #[test]
    fn test_comparison_ratio() {
        let config = ExperimentConfig::quick(2);
        let joint = ExperimentReport::new(Model::Joint, &config, 1, &aggregate(&[(10, 90)]));
        let progressive =
            ExperimentReport::new(Model::Progressive, &config, 1, &aggregate(&[(1, 20)]));
        let comparison = ComparisonReport::new(joint, progressive);

        assert!((comparison.trial_ratio() - 4.5).abs() < 1e-12);
        let text = comparison.to_text();
        assert!(text.contains("Mutation Ratio:      4.5x"));
        assert!(text.contains("Evolution Time [a]:  900 vs 200"));
    }

    #[test]
    fn test_summary_text_is_comparison_block_only() {
        let config = ExperimentConfig::quick(2);
        let joint = ExperimentReport::new(Model::Joint, &config, 1, &aggregate(&[(10, 90)]));
        let progressive =
            ExperimentReport::new(Model::Progressive, &config, 1, &aggregate(&[(1, 20)]));
        let comparison = ComparisonReport::new(joint, progressive);

        let summary = comparison.summary_text();
        assert!(summary.starts_with("── COMPARISON "));
        assert!(!summary.contains("EXPERIMENT"));
        assert!(comparison.to_text().ends_with(&summary));
    }

    #[test]
    fn test_comparison_json_nests_both_reports() {
        let config = ExperimentConfig::quick(3);
        let joint = ExperimentReport::new(Model::Joint, &config, 5, &aggregate(&[(10, 900)]));
        let progressive =
            ExperimentReport::new(Model::Progressive, &config, 5, &aggregate(&[(1, 30)]));
        let json = ComparisonReport::new(joint, progressive).to_json();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["joint"]["model"], "joint");
        assert_eq!(value["joint"]["mean_trial_count"], 900.0);
        assert_eq!(value["progressive"]["model"], "progressive");
        assert_eq!(value["progressive"]["num_positions"], 3);
        assert_eq!(value["progressive"]["seed"], 5);
    }

    #[test]
    fn test_progress_line() {
        let agg = aggregate(&[(500, 7)]);
        let result = ReplicateResult {
            elapsed: Duration::from_millis(500),
            trial_count: 7,
        };
        let line = progress_line(&Progress::after(0, result, &agg));
        assert_eq!(
            line,
            "  0 elapsed, average: 0.500000, 0.500000 | mutations: 7 7 "
        );
    }
}

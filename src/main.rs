//! Evolution experiment runner.
//!
//! Runs the joint (DEPENDENT) and progressive (INDEPENDENT) mutation
//! experiments with the default configuration and prints both reports.
//!
//! Usage:
//!   cargo run --release
//!
//! Set `RUST_LOG=debug` for per-replicate log events on stderr.

use evolution::build_info;
use evolution::simulator::{progress_line, run_comparison, ExperimentConfig, Model, Progress};
use std::error::Error;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

const INTRO: &str = "\
--- Experiment Intro ---
Both experiments spend zero time on natural selection itself. The number
of mutations needed is multiplied by the time a successful mutation takes
to prevail in a population: one generation per year and ten generations
per gene gives 10 years per successful mutation.

Humans have 20 000 - 25 000 genes, simple organisms some 4 000, and the
smallest single-cell organisms about 300. Here the average effort to find
a genome of 10 genes is compared.

The experiments neither prove nor disprove evolution. They compare how
likely a large variety of organisms is when mutations must all succeed
together versus when each successful gene is kept independently. Both
assume mutation outcomes are uniformly distributed.
";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    println!("---------------------------------");
    println!("--- {} ---", build_info::version_line());
    println!("---------------------------------");
    println!();
    println!("{INTRO}");

    let config = ExperimentConfig::default();
    let mut stdout = io::stdout();

    let comparison = run_comparison(
        &config,
        |model, progress| print_progress(&mut stdout, model, progress),
        |report| {
            println!();
            println!();
            println!("{}", report.to_text());
        },
    )?;

    println!("{}", comparison.summary_text());

    Ok(())
}

fn print_progress(out: &mut impl Write, model: Model, progress: &Progress) {
    // Progress is best effort; a closed stdout must not abort the experiment
    if progress.index == 0 {
        let _ = writeln!(out, "--- {} Experiment ---", model.label());
        let _ = writeln!(
            out,
            "Each digit of a random integer is one gene; {}.",
            model.description()
        );
    }
    let _ = write!(out, "\r{}", progress_line(progress));
    let _ = out.flush();
}

//! Errors raised while configuring or starting an experiment.

use thiserror::Error;

/// Reasons an experiment cannot run.
///
/// Sampling itself never fails; every variant here is detected before the
/// first replicate is drawn.
#[derive(Debug, Error)]
pub enum SimError {
    #[error("replicate count must be at least 1")]
    NoReplicates,

    #[error("genome must have at least one gene")]
    NoGenes,

    #[error("joint model supports at most {max} genes, got {requested}")]
    TooManyGenes { requested: u32, max: u32 },

    #[error("mutation time must be a finite, non-negative number of years, got {0}")]
    InvalidMutationTime(f64),

    #[error("random source unavailable: {0}")]
    Entropy(#[from] rand::Error),
}

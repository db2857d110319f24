//! Target genomes and the space they are drawn from.

use super::source::RandomSource;
use crate::constants::DIGIT_BASE;
use std::fmt;

/// Fixed-width decimal digit string. Each digit is one gene.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Genome(Vec<u8>);

impl Genome {
    /// Build from raw digits. Panics if any digit is above 9.
    pub fn new(digits: Vec<u8>) -> Self {
        assert!(digits.iter().all(|&d| d <= 9), "genome digits must be 0-9");
        Self(digits)
    }

    /// Decimal digits of `value`, zero-padded on the left to `width`.
    pub fn from_value(value: u64, width: u32) -> Self {
        let mut digits = vec![0u8; width as usize];
        let mut rest = value;
        for slot in digits.iter_mut().rev() {
            *slot = (rest % DIGIT_BASE) as u8;
            rest /= DIGIT_BASE;
        }
        debug_assert_eq!(rest, 0, "{value} does not fit in {width} digits");
        Self(digits)
    }

    pub fn digits(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Genome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.0 {
            write!(f, "{d}")?;
        }
        Ok(())
    }
}

/// All genomes of a given width.
///
/// The joint model draws whole genomes from `[10^(L-1), 10^L - 1]`, so a
/// leading zero never occurs there. Progressive genomes are drawn digit by
/// digit and may start with zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpace {
    num_positions: u32,
}

impl TargetSpace {
    /// Panics on zero positions; [`ExperimentConfig::validate`] rejects those first.
    ///
    /// [`ExperimentConfig::validate`]: super::config::ExperimentConfig::validate
    pub fn new(num_positions: u32) -> Self {
        assert!(num_positions > 0, "target space needs at least one gene");
        Self { num_positions }
    }

    pub fn num_positions(&self) -> u32 {
        self.num_positions
    }

    /// Smallest joint value, `10^(L-1)`
    pub fn min(&self) -> u64 {
        DIGIT_BASE.pow(self.num_positions - 1)
    }

    /// Largest joint value, `10^L - 1`
    pub fn max(&self) -> u64 {
        // 10^19 overflows u64; build the all-nines value from min instead
        self.min() - 1 + (DIGIT_BASE - 1) * self.min()
    }

    /// Number of distinct joint values, `9 * 10^(L-1)`
    pub fn size(&self) -> u64 {
        self.max() - self.min() + 1
    }

    /// One uniform draw over the joint range
    pub fn draw_joint<R: RandomSource + ?Sized>(&self, rng: &mut R) -> u64 {
        rng.uniform_inclusive(self.min(), self.max())
    }

    /// Genome with every digit independently uniform over `[0, 9]`
    pub fn draw_genome<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Genome {
        Genome((0..self.num_positions).map(|_| rng.uniform_digit()).collect())
    }
}

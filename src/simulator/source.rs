//! Random sources used by the trial samplers.

use super::error::SimError;
use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Capability to draw uniform integers.
pub trait RandomSource {
    /// Uniform integer in the closed range `[low, high]`.
    fn uniform_inclusive(&mut self, low: u64, high: u64) -> u64;

    /// Uniform decimal digit in `[0, 9]`.
    fn uniform_digit(&mut self) -> u8;
}

/// ChaCha8 stream, reproducible when built from a seed.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: ChaCha8Rng,
}

impl SeededSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Stream for replicate `index` of a run seeded with `base_seed`
    pub fn for_replicate(base_seed: u64, index: u32) -> Self {
        Self::from_seed(base_seed.wrapping_add(index as u64))
    }
}

/// Fresh seed from the operating system. Fails only if the OS source does.
pub fn entropy_seed() -> Result<u64, SimError> {
    let mut bytes = [0u8; 8];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(u64::from_le_bytes(bytes))
}

impl RandomSource for SeededSource {
    fn uniform_inclusive(&mut self, low: u64, high: u64) -> u64 {
        self.rng.gen_range(low..=high)
    }

    fn uniform_digit(&mut self) -> u8 {
        self.rng.gen_range(0..=9)
    }
}

/// Replays a fixed script of draws.
///
/// Range draws and digit draws come from separate queues. Running out of
/// script is a bug in the caller and panics.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: VecDeque<u64>,
    digits: VecDeque<u8>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values returned by `uniform_inclusive`, in order
    pub fn with_values(mut self, values: impl IntoIterator<Item = u64>) -> Self {
        self.values.extend(values);
        self
    }

    /// Digits returned by `uniform_digit`, in order
    pub fn with_digits(mut self, digits: impl IntoIterator<Item = u8>) -> Self {
        self.digits.extend(digits);
        self
    }

    /// Draws left in both scripts
    pub fn remaining(&self) -> usize {
        self.values.len() + self.digits.len()
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_inclusive(&mut self, low: u64, high: u64) -> u64 {
        let value = self
            .values
            .pop_front()
            .unwrap_or_else(|| panic!("scripted source ran out of values"));
        assert!(
            (low..=high).contains(&value),
            "scripted value {value} outside [{low}, {high}]"
        );
        value
    }

    fn uniform_digit(&mut self) -> u8 {
        let digit = self
            .digits
            .pop_front()
            .unwrap_or_else(|| panic!("scripted source ran out of digits"));
        assert!(digit <= 9, "scripted digit {digit} is not a decimal digit");
        digit
    }
}

//! Bounded-integer nucleotide
//!
//! A demonstration encoding over small signed integers. Useful for discrete
//! target-sum style problems and as the reference encoding in the test suite.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::nucleotide::traits::Nucleotide;

/// A signed-integer gene drawn from `[MIN, MAX]`.
///
/// Mutation adds a fresh uniform draw from the same range, so values may
/// drift outside the initial domain over time. Crossover writes the
/// truncated mean of the two parents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntNucleotide<const MIN: i32, const MAX: i32> {
    value: i32,
}

impl<const MIN: i32, const MAX: i32> IntNucleotide<MIN, MAX> {
    /// Create a nucleotide holding the given value
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    /// Get the current value
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl<const MIN: i32, const MAX: i32> fmt::Display for IntNucleotide<MIN, MAX> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<const MIN: i32, const MAX: i32> Nucleotide for IntNucleotide<MIN, MAX> {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            value: rng.gen_range(MIN..=MAX),
        }
    }

    fn crossover_into(a: &Self, b: &Self, out: &mut Self) {
        out.value = (a.value + b.value) / 2;
    }

    fn mutate<R: Rng>(&mut self, rng: &mut R) {
        self.value += rng.gen_range(MIN..=MAX);
    }
}

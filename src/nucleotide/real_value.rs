//! Real-valued nucleotide
//!
//! A demonstration encoding for continuous problems: one `f64` gene with
//! Gaussian mutation and a blend crossover.

use std::fmt;

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::nucleotide::traits::Nucleotide;

/// Initial sampling domain half-width
const DOMAIN: f64 = 1.0;
/// Standard deviation of the mutation noise
const SIGMA: f64 = 0.1;
/// Blend weight of the first crossover parent
const BLEND: f64 = 0.75;

/// A real-valued gene.
///
/// Fresh instances are drawn uniformly from `[-1, 1]`; mutation adds
/// `Normal(0, 0.1)` noise. Crossover writes `0.75 * a + 0.25 * b`; the blend
/// leans toward the first parent, so the combine is deliberately
/// non-commutative.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RealNucleotide {
    value: f64,
}

impl RealNucleotide {
    /// Create a nucleotide holding the given value
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Get the current value
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl fmt::Display for RealNucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.value)
    }
}

impl Nucleotide for RealNucleotide {
    fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            value: rng.gen_range(-DOMAIN..=DOMAIN),
        }
    }

    fn crossover_into(a: &Self, b: &Self, out: &mut Self) {
        out.value = BLEND * a.value + (1.0 - BLEND) * b.value;
    }

    fn mutate<R: Rng>(&mut self, rng: &mut R) {
        let noise = Normal::new(0.0, SIGMA).unwrap();
        self.value += noise.sample(rng);
    }
}

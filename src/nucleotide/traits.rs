//! Core nucleotide trait
//!
//! A nucleotide is the smallest heritable unit of an encoding. The engine is
//! generic over this trait: integer genes, bit flags, real-valued weights and
//! richer structures all plug in the same way.

use std::fmt::Display;

use rand::Rng;

/// Capability set any concrete encoding must implement.
///
/// The engine drives populations entirely through these four operations plus
/// `Clone`; it never inspects a nucleotide's content.
pub trait Nucleotide: Clone + Display {
    /// Draw a fresh instance from the encoding's domain.
    fn random<R: Rng>(rng: &mut R) -> Self;

    /// Combine two instances into `out` without allocating.
    ///
    /// The combination is deterministic given `a` and `b` and need not be
    /// commutative; the genom-level crossover swaps the argument order past
    /// its crossover point and relies on that asymmetry for variation.
    fn crossover_into(a: &Self, b: &Self, out: &mut Self);

    /// Perturb this instance in place. The magnitude and distribution of the
    /// perturbation are encoding-defined.
    fn mutate<R: Rng>(&mut self, rng: &mut R);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    // Minimal encoding exercising the trait surface: a single bit whose
    // crossover keeps the first argument.
    #[derive(Clone, Debug, PartialEq)]
    struct BitNucleotide(bool);

    impl fmt::Display for BitNucleotide {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", if self.0 { 1 } else { 0 })
        }
    }

    impl Nucleotide for BitNucleotide {
        fn random<R: Rng>(rng: &mut R) -> Self {
            Self(rng.gen())
        }

        fn crossover_into(a: &Self, _b: &Self, out: &mut Self) {
            out.0 = a.0;
        }

        fn mutate<R: Rng>(&mut self, _rng: &mut R) {
            self.0 = !self.0;
        }
    }

    #[test]
    fn test_crossover_asymmetry_is_observable() {
        let a = BitNucleotide(true);
        let b = BitNucleotide(false);
        let mut out = BitNucleotide(false);

        Nucleotide::crossover_into(&a, &b, &mut out);
        assert_eq!(out, a);

        Nucleotide::crossover_into(&b, &a, &mut out);
        assert_eq!(out, b);
    }

    #[test]
    fn test_mutate_in_place() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut n = BitNucleotide(false);
        n.mutate(&mut rng);
        assert_eq!(n, BitNucleotide(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(BitNucleotide(true).to_string(), "1");
        assert_eq!(BitNucleotide(false).to_string(), "0");
    }
}

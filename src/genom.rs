//! The Genom chromosome type
//!
//! A genom is an ordered, fixed-length sequence of nucleotides plus the
//! scorer its simulator attached. It provides the genetic operators
//! (crossover, mutation, shift) and compares by score.

use std::cmp::Ordering;
use std::fmt;

use rand::Rng;

use crate::nucleotide::traits::Nucleotide;
use crate::scorer::Scorer;

/// Beyond this many nucleotides, `Display` shows first/last 5 only
const DISPLAY_LIMIT: usize = 30;

/// One candidate solution: a nucleotide sequence plus its fitness.
///
/// The sequence length is fixed at creation and identical across a
/// population; crossover and mutation never change it. A genom is exclusively
/// owned by whichever pool slot holds it.
#[derive(Clone, Debug)]
pub struct Genom<N, S> {
    nucleotides: Vec<N>,
    scorer: S,
}

impl<N, S> Genom<N, S>
where
    N: Nucleotide,
    S: Scorer,
{
    /// Create a genom of `n` independently random nucleotides and a default
    /// scorer.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        let nucleotides = (0..n).map(|_| N::random(rng)).collect();
        Self {
            nucleotides,
            scorer: S::default(),
        }
    }

    /// Single-point recombination of `a` and `b` into `out`.
    ///
    /// Below `point` the nucleotide-level combine receives `(a[i], b[i])`;
    /// at and above it the arguments swap to `(b[i], a[i])`, which matters
    /// whenever the combine is not commutative. `point` may legally be any
    /// value in `[0, len]`; `len` degenerates to all positions in `(a, b)`
    /// order.
    ///
    /// `out` must already hold `len` nucleotides; the slots are overwritten
    /// in place and no allocation occurs. `out`'s scorer resets to the
    /// default value.
    pub fn crossover_into(a: &Self, b: &Self, out: &mut Self, point: usize) {
        debug_assert_eq!(a.nucleotides.len(), b.nucleotides.len());
        debug_assert_eq!(a.nucleotides.len(), out.nucleotides.len());
        debug_assert!(point <= a.nucleotides.len());

        for i in 0..point {
            N::crossover_into(&a.nucleotides[i], &b.nucleotides[i], &mut out.nucleotides[i]);
        }
        for i in point..a.nucleotides.len() {
            N::crossover_into(&b.nucleotides[i], &a.nucleotides[i], &mut out.nucleotides[i]);
        }
        out.scorer = S::default();
    }

    /// Mutate the nucleotide at `index` in place.
    ///
    /// `index` must be less than [`len`](Self::len); an out-of-range index
    /// panics.
    pub fn mutate<R: Rng>(&mut self, index: usize, rng: &mut R) {
        self.nucleotides[index].mutate(rng);
    }

    /// Rotate the nucleotide sequence left by `n` positions, so index `i`
    /// receives what was at `(i + n) mod len`.
    ///
    /// For real-time problems whose starting point continuously advances,
    /// shifting keeps evolved genoms synchronized with the simulation
    /// window. The scorer is untouched.
    pub fn shift(&mut self, n: usize) {
        let len = self.nucleotides.len();
        if len > 0 {
            self.nucleotides.rotate_left(n % len);
        }
    }

    /// Number of nucleotides
    pub fn len(&self) -> usize {
        self.nucleotides.len()
    }

    /// Whether the genom holds no nucleotides
    pub fn is_empty(&self) -> bool {
        self.nucleotides.is_empty()
    }

    /// The nucleotide sequence
    pub fn nucleotides(&self) -> &[N] {
        &self.nucleotides
    }

    /// Attach a scorer. Called by the simulator after evaluating this genom.
    pub fn set_scorer(&mut self, scorer: S) {
        self.scorer = scorer;
    }

    /// The attached scorer. Holds the default value until a simulator has
    /// evaluated this genom.
    pub fn scorer(&self) -> &S {
        &self.scorer
    }

    /// Mutable access to the attached scorer
    pub fn scorer_mut(&mut self) -> &mut S {
        &mut self.scorer
    }

    /// Convenience accessor for the scorer's fitness number
    pub fn score(&self) -> f64 {
        self.scorer.score()
    }
}

/// Equality and ordering consider the score alone; they exist for sorting
/// populations, not for comparing genetic content.
impl<N, S> PartialEq for Genom<N, S>
where
    N: Nucleotide,
    S: Scorer,
{
    fn eq(&self, other: &Self) -> bool {
        self.score() == other.score()
    }
}

impl<N, S> PartialOrd for Genom<N, S>
where
    N: Nucleotide,
    S: Scorer,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.score().partial_cmp(&other.score())
    }
}

impl<N, S> fmt::Display for Genom<N, S>
where
    N: Nucleotide,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ ")?;
        if self.nucleotides.len() < DISPLAY_LIMIT {
            for nucl in &self.nucleotides {
                write!(f, "{}, ", nucl)?;
            }
        } else {
            for nucl in &self.nucleotides[..5] {
                write!(f, "{}, ", nucl)?;
            }
            write!(f, "... ")?;
            for nucl in &self.nucleotides[self.nucleotides.len() - 5..] {
                write!(f, "{}, ", nucl)?;
            }
        }
        write!(f, "]")
    }
}

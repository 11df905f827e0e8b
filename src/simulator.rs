//! Simulator contract
//!
//! The simulator is the external collaborator that gives genoms their
//! fitness. The engine calls it once per genom per generation and has no
//! recovery policy of its own: a failure propagates to the caller with the
//! population left in whatever partially-evaluated state it reached.

use crate::error::EvoResult;
use crate::genom::Genom;
use crate::nucleotide::traits::Nucleotide;
use crate::scorer::Scorer;

/// Fitness assignment contract.
///
/// Implementations inspect the genom's nucleotide sequence and attach a
/// scorer whose `score` reflects solution quality (higher is better; equal
/// candidates may tie). Evaluation should be deterministic, or explicitly
/// tolerant of re-evaluation noise.
pub trait Simulator<N, S>
where
    N: Nucleotide,
    S: Scorer,
{
    /// Evaluate one genom and attach its scorer.
    fn simulate(&self, genom: &mut Genom<N, S>) -> EvoResult<()>;
}

/// A simple closure wrapper for fitness evaluation
pub struct FnSimulator<F> {
    f: F,
}

impl<F> FnSimulator<F> {
    /// Create a simulator from a scoring closure
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<N, S, F> Simulator<N, S> for FnSimulator<F>
where
    N: Nucleotide,
    S: Scorer,
    F: Fn(&Genom<N, S>) -> S,
{
    fn simulate(&self, genom: &mut Genom<N, S>) -> EvoResult<()> {
        let scorer = (self.f)(genom);
        genom.set_scorer(scorer);
        Ok(())
    }
}

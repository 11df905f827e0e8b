//! The GenePool engine
//!
//! The pool owns a fixed-size population of genoms plus every scratch buffer
//! needed to advance one generation without allocating. Callers alternate
//! [`GenePool::simulate`] and [`GenePool::select`] and inspect
//! [`GenePool::best`] between generations to decide when to stop.

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{EvoResult, EvolutionError};
use crate::genom::Genom;
use crate::nucleotide::traits::Nucleotide;
use crate::scorer::Scorer;
use crate::simulator::Simulator;

/// Beyond this many genoms, `Display` shows first/last 5 only
const DISPLAY_LIMIT: usize = 20;

/// Configuration for a [`GenePool`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenePoolConfig {
    /// Number of genoms in the population; must be even
    pub population_size: usize,
    /// Number of nucleotides per genom, fixed for the run
    pub genom_length: usize,
    /// Fraction of the population forming the elite mating slice, in
    /// `[0, 0.5]`
    pub elite_fraction: f64,
}

impl Default for GenePoolConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            genom_length: 16,
            elite_fraction: 0.25,
        }
    }
}

impl GenePoolConfig {
    /// Check the configuration invariants
    pub fn validate(&self) -> EvoResult<()> {
        if self.population_size == 0 {
            return Err(EvolutionError::Configuration(
                "population size must be nonzero".to_string(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(EvolutionError::Configuration(format!(
                "population size must be even, got {}",
                self.population_size
            )));
        }
        if self.genom_length == 0 {
            return Err(EvolutionError::Configuration(
                "genom length must be nonzero".to_string(),
            ));
        }
        if !(0.0..=0.5).contains(&self.elite_fraction) {
            return Err(EvolutionError::Configuration(format!(
                "elite fraction must lie in [0, 0.5], got {}",
                self.elite_fraction
            )));
        }
        Ok(())
    }
}

/// A population of genoms plus the generational search loop that evolves it.
///
/// All randomness flows through the single engine-owned generator, consumed
/// sequentially, so a fixed seed reproduces a run exactly. The engine is not
/// thread-safe by design; callers needing parallel evaluation must
/// synchronize externally before calling back into [`simulate`].
///
/// [`simulate`]: Self::simulate
pub struct GenePool<N, S, R> {
    genoms: Vec<Genom<N, S>>,
    rng: R,
    /// Shared draw distribution over `[0, genom_length]` inclusive, used for
    /// both crossover-point and mutation-index draws
    point_distr: Uniform<usize>,
    genom_len: usize,
    generation: usize,
    /// Size of the elite mating slice, `floor(N * elite_fraction)`
    take: usize,
    /// Reserved; computed alongside `take` but never consulted by selection
    #[allow(dead_code)]
    retain: usize,
    // Scratch state, reused every generation to keep `select` allocation-free
    shuffle_indices: Vec<usize>,
    next_generation: Vec<Genom<N, S>>,
}

impl<N, S, R> GenePool<N, S, R>
where
    N: Nucleotide,
    S: Scorer,
    R: Rng,
{
    /// Create a pool of random genoms.
    ///
    /// The staging buffer is pre-filled here so that no later generation
    /// allocates.
    pub fn new(config: GenePoolConfig, mut rng: R) -> EvoResult<Self> {
        config.validate()?;
        let GenePoolConfig {
            population_size,
            genom_length,
            elite_fraction,
        } = config;

        let genoms: Vec<Genom<N, S>> = (0..population_size)
            .map(|_| Genom::random(genom_length, &mut rng))
            .collect();
        let next_generation = genoms.clone();
        let shuffle_indices: Vec<usize> = (0..population_size).collect();

        let take = (population_size as f64 * elite_fraction) as usize;
        let retain = (population_size as f64 * (0.5 - elite_fraction)) as usize;
        trace!(
            "pool initialized: {} genoms of length {}, elite slice {}",
            population_size,
            genom_length,
            take
        );

        Ok(Self {
            genoms,
            rng,
            point_distr: Uniform::new_inclusive(0, genom_length),
            genom_len: genom_length,
            generation: 0,
            take,
            retain,
            shuffle_indices,
            next_generation,
        })
    }

    /// Evaluate every genom with the given simulator, then sort the
    /// population descending by score and advance the generation counter.
    ///
    /// A simulator failure propagates immediately; the population is left in
    /// whatever partially-evaluated, unsorted state the failure found it.
    /// Must run at least once before [`best`](Self::best) is meaningful.
    pub fn simulate<Sim>(&mut self, simulator: &Sim) -> EvoResult<()>
    where
        Sim: Simulator<N, S>,
    {
        for genom in self.genoms.iter_mut() {
            simulator.simulate(genom)?;
        }
        self.genoms
            .sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
        self.generation += 1;
        debug!(
            "generation {}: best score {}",
            self.generation,
            self.genoms[0].score()
        );
        Ok(())
    }

    /// Produce the next generation in place.
    ///
    /// The first `take` index slots are never shuffled, so the current top
    /// performers always enter the mating pool. The pool is the first half
    /// of the index array duplicated over the second half: exactly `N / 2`
    /// distinct members reproduce each generation, each used as a parent
    /// twice per crossover pass under independent pairings.
    pub fn select(&mut self) {
        let half = self.genoms.len() / 2;

        // Random sample of the non-elite indices joins the elites up front.
        self.shuffle_indices[self.take..].shuffle(&mut self.rng);
        let (front, back) = self.shuffle_indices.split_at_mut(half);
        back.copy_from_slice(front);

        // First crossover pass: pair slot i with slot i + half.
        self.shuffle_indices[half..].shuffle(&mut self.rng);
        for i in 0..half {
            let point = self.point_distr.sample(&mut self.rng);
            Genom::crossover_into(
                &self.genoms[self.shuffle_indices[i]],
                &self.genoms[self.shuffle_indices[i + half]],
                &mut self.next_generation[i],
                point,
            );
        }

        // Second pass under a fresh pairing of the same mating pool.
        self.shuffle_indices[half..].shuffle(&mut self.rng);
        for i in 0..half {
            let point = self.point_distr.sample(&mut self.rng);
            Genom::crossover_into(
                &self.genoms[self.shuffle_indices[i]],
                &self.genoms[self.shuffle_indices[i + half]],
                &mut self.next_generation[i + half],
                point,
            );
        }

        for genom in self.next_generation.iter_mut() {
            let index = self.point_distr.sample(&mut self.rng);
            // A drawn genom_len is a legal crossover point but one past the
            // last nucleotide slot.
            genom.mutate(index.min(self.genom_len - 1), &mut self.rng);
        }

        mem::swap(&mut self.genoms, &mut self.next_generation);
        trace!("selected generation {}", self.generation);
    }

    /// Shift every genom left by `n` positions.
    ///
    /// Keeps an evolving population synchronized with a continuously
    /// advancing real-time simulation window. Scorers and the generation
    /// counter are untouched.
    pub fn shift(&mut self, n: usize) {
        for genom in self.genoms.iter_mut() {
            genom.shift(n);
        }
    }

    /// Zero the generation counter. The population is not re-randomized.
    pub fn reset(&mut self) {
        self.generation = 0;
    }

    /// The highest-scoring genom.
    ///
    /// Meaningless until [`simulate`](Self::simulate) has run at least once.
    pub fn best(&self) -> &Genom<N, S> {
        &self.genoms[0]
    }

    /// Number of completed simulate cycles
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Population size
    pub fn len(&self) -> usize {
        self.genoms.len()
    }

    /// Whether the population is empty; always false for a constructed pool
    pub fn is_empty(&self) -> bool {
        self.genoms.is_empty()
    }

    /// Size of the elite mating slice
    pub fn elite_count(&self) -> usize {
        self.take
    }

    /// The population, best first after a simulate
    pub fn genoms(&self) -> &[Genom<N, S>] {
        &self.genoms
    }

    /// Iterate over the population
    pub fn iter(&self) -> impl Iterator<Item = &Genom<N, S>> {
        self.genoms.iter()
    }

    /// Mean score across the population
    pub fn mean_score(&self) -> f64 {
        let sum: f64 = self.genoms.iter().map(|g| g.score()).sum();
        sum / self.genoms.len() as f64
    }

    /// Sample standard deviation of the population's scores
    pub fn score_std(&self) -> f64 {
        let mean = self.mean_score();
        let variance = self
            .genoms
            .iter()
            .map(|g| (g.score() - mean).powi(2))
            .sum::<f64>()
            / (self.genoms.len() - 1) as f64;
        variance.sqrt()
    }
}

impl<N, S, R> fmt::Display for GenePool<N, S, R>
where
    N: Nucleotide,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "GenePool [{} genoms]", self.genoms.len())?;
        writeln!(f, "{{")?;
        writeln!(f, "  generations: {}", self.generation)?;
        writeln!(f, "  genoms:")?;
        if self.genoms.len() > DISPLAY_LIMIT {
            for genom in &self.genoms[..5] {
                writeln!(f, "    {}", genom)?;
            }
            writeln!(f, "    ...")?;
            for genom in &self.genoms[self.genoms.len() - 5..] {
                writeln!(f, "    {}", genom)?;
            }
        } else {
            for genom in &self.genoms {
                writeln!(f, "    {}", genom)?;
            }
        }
        write!(f, "}}")
    }
}

//! # genepool
//!
//! A generational genetic-algorithm engine for Rust.
//!
//! The engine is a reusable optimization primitive, not an application:
//! callers plug in a problem-specific encoding (a [`Nucleotide`] type) and a
//! problem-specific evaluator (a [`Simulator`]) and get a generational
//! select/crossover/mutate loop over a fixed-size population.
//!
//! ## Core Concepts
//!
//! - **Nucleotide**: the smallest heritable unit of an encoding, defined by a
//!   capability trait (random generation, in-place crossover, mutation,
//!   display)
//! - **Genom**: an ordered, fixed-length sequence of nucleotides plus the
//!   fitness value its simulator assigned
//! - **GenePool**: the population and the generational loop that evolves it,
//!   double-buffered so that advancing a generation performs no allocation
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use genepool::prelude::*;
//! use rand::SeedableRng;
//!
//! let rng = rand::rngs::StdRng::seed_from_u64(42);
//! let config = GenePoolConfig {
//!     population_size: 10,
//!     genom_length: 7,
//!     elite_fraction: 0.3,
//! };
//!
//! let mut pool: GenePool<IntNucleotide<-5, 5>, f64, _> = GenePool::new(config, rng)?;
//! let simulator = FnSimulator::new(|g: &Genom<IntNucleotide<-5, 5>, f64>| {
//!     g.nucleotides().iter().map(|n| n.value() as f64).sum()
//! });
//!
//! pool.simulate(&simulator)?;
//! for _ in 0..100 {
//!     pool.select();
//!     pool.simulate(&simulator)?;
//! }
//! println!("best: {}", pool.best());
//! ```
//!
//! [`Nucleotide`]: crate::nucleotide::traits::Nucleotide
//! [`Simulator`]: crate::simulator::Simulator

pub mod error;
pub mod genom;
pub mod nucleotide;
pub mod pool;
pub mod scorer;
pub mod simulator;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::*;
    pub use crate::genom::*;
    pub use crate::nucleotide::prelude::*;
    pub use crate::pool::*;
    pub use crate::scorer::*;
    pub use crate::simulator::*;
}

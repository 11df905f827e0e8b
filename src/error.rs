//! Error types for genepool
//!
//! This module defines the error types used throughout the library.

use thiserror::Error;

/// Top-level error type for evolution operations
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvolutionError {
    /// Invalid engine configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Fitness evaluation failed inside the caller's simulator
    #[error("Simulation failed: {0}")]
    Simulation(String),
}

/// Result type alias for evolution operations
pub type EvoResult<T> = Result<T, EvolutionError>;

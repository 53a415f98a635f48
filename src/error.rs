//! Error types for tour construction and improvement.

use thiserror::Error;

/// Main error type for u-tsp operations.
#[derive(Debug, Error)]
pub enum TspError {
    /// A permutation, successor array, size pairing or instance text is malformed.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A position or city identifier lies outside `[0, size)`.
    #[error("index {index} out of range for tour of {size} cities")]
    OutOfRange {
        /// The offending position or city id.
        index: usize,
        /// Number of cities in the tour.
        size: usize,
    },

    /// Local search needs at least 4 cities.
    #[error("{cities} cities are too few for local search (need at least 4)")]
    Unsolvable {
        /// Number of cities supplied.
        cities: usize,
    },

    /// Reading an instance or writing a tour failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for u-tsp operations.
pub type Result<T> = std::result::Result<T, TspError>;

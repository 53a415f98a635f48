//! Distance data shared by every search.
//!
//! Provides the dense distance matrix and per-city neighbor candidate lists.

mod matrix;
mod neighbors;

pub use matrix::DistanceMatrix;
pub use neighbors::NeighborList;

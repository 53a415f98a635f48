//! # u-tsp
//!
//! Symmetric traveling salesman library: a tour representation with O(1)
//! position lookup, 2-opt, neighbor-list 2-opt and 3-opt local search, and
//! constructive heuristics to seed them.
//!
//! ## Modules
//!
//! - [`models`]: Cities and the [`Tour`](models::Tour) representation
//! - [`distance`]: Distance matrix and per-city neighbor rankings
//! - [`constructive`]: Nearest neighbor, insertion, MST and savings tours
//! - [`local_search`]: 2-opt, neighbor-list 2-opt and 3-opt
//! - [`solver`]: Multi-start pipeline and its configuration
//! - [`io`]: Plain-text instance reading and tour writing

pub mod constructive;
pub mod distance;
pub mod error;
pub mod io;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{Result, TspError};

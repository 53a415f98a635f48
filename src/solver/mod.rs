//! End-to-end solving.
//!
//! - [`SearchConfig`]: candidate counts and per-stage move budgets
//! - [`Solver`] / [`solve`]: build candidates, improve them in parallel, keep the best
//! - [`best_tour`]: pick the shortest of several tours

mod config;
mod pipeline;

pub use config::SearchConfig;
pub use pipeline::{best_tour, solve, Solver};

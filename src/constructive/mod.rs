//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor`]: Greedy nearest-neighbor tour, O(n²)
//! - [`nearest_insertion`]: Cheapest insertion around a random triangle, O(n²)
//! - [`minimum_spanning_tree`] / [`mst_tour`]: Randomized MST pre-order walk, O(n²)
//! - [`clarke_wright_savings`]: Clarke-Wright savings (1964), O(n² log n)

mod clarke_wright;
mod mst;
mod nearest_insertion;
mod nearest_neighbor;

pub use clarke_wright::clarke_wright_savings;
pub use mst::{minimum_spanning_tree, mst_tour};
pub use nearest_insertion::nearest_insertion;
pub use nearest_neighbor::nearest_neighbor;

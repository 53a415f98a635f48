//! Local search operators for improving TSP tours in place.
//!
//! - [`two_opt`](two_opt_improve): Exhaustive 2-opt edge exchange
//! - [`neighbor_two_opt`](neighbor_two_opt_improve): 2-opt over neighbor candidate lists
//! - [`three_opt`](three_opt_improve): 3-opt with segment reconnection
//!
//! Every operator accepts only strictly improving moves, evaluated before
//! the tour is touched, and restarts its scan after each accepted move.

mod neighbor_two_opt;
mod search;
mod three_opt;
mod two_opt;

pub use neighbor_two_opt::{neighbor_two_opt_improve, NeighborTwoOpt};
pub use search::{LocalSearch, SearchOutcome, IMPROVEMENT_EPSILON, MIN_SEARCH_CITIES};
pub use three_opt::{select_reconnection, three_opt_improve, Reconnection, ThreeOpt};
pub use two_opt::{two_opt_improve, TwoOpt};

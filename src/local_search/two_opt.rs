//! Exhaustive 2-opt improvement.
//!
//! # Algorithm
//!
//! For every pair of non-adjacent tour edges (I, J) at positions (j-1, j)
//! and (A, B) at positions (b-1, b), with j < b and position n wrapping to 0,
//! the move removing both edges and reversing the path J..A is profitable iff
//!
//! ```text
//! d(I, J) + d(A, B) > d(I, A) + d(J, B)
//! ```
//!
//! The first profitable pair found is applied and the scan restarts from
//! the beginning (first-improvement strategy).
//!
//! # Complexity
//!
//! O(n²) per scan, O(segment) per accepted move, O(n³) worst case for
//! convergence.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use tracing::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::Tour;

use super::search::{
    ensure_searchable, run_until_converged, LocalSearch, SearchOutcome, IMPROVEMENT_EPSILON,
};

/// Applies exhaustive 2-opt to `tour` in place.
///
/// Stops when a full scan finds no improving move or after `max_moves`
/// moves. Fails with [`TspError::Unsolvable`](crate::error::TspError) for
/// tours of fewer than 4 cities and
/// [`TspError::InvalidInput`](crate::error::TspError) if the matrix size
/// differs from the tour size.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_improve;
///
/// let cities: Vec<City> = [0.0, 5.0, 10.0, 15.0, 20.0]
///     .iter()
///     .enumerate()
///     .map(|(id, &x)| City::new(id, x, 0.0))
///     .collect();
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let mut tour = Tour::new(vec![0, 3, 1, 4, 2]).unwrap();
/// let outcome = two_opt_improve(&mut tour, &dm, usize::MAX).unwrap();
/// assert!(outcome.converged);
/// assert!((tour.length(&dm) - 40.0).abs() < 1e-10);
/// ```
pub fn two_opt_improve(
    tour: &mut Tour,
    distances: &DistanceMatrix,
    max_moves: usize,
) -> Result<SearchOutcome> {
    ensure_searchable(tour, distances)?;
    let outcome = run_until_converged(max_moves, || Ok(apply_first_improvement(tour, distances)))?;
    debug!(
        moves = outcome.moves,
        converged = outcome.converged,
        length = tour.length(distances),
        "2-opt finished"
    );
    Ok(outcome)
}

/// Scans for the first improving 2-opt move and applies it.
fn apply_first_improvement(tour: &mut Tour, distances: &DistanceMatrix) -> bool {
    let n = tour.len();
    for j in 1..n {
        let city_i = tour.at(j - 1);
        let city_j = tour.at(j);
        let removed_ij = distances.get(city_i, city_j);
        for b in (j + 2)..=n {
            let city_a = tour.at(b - 1);
            let city_b = tour.at(b);
            let gain = removed_ij + distances.get(city_a, city_b)
                - distances.get(city_i, city_a)
                - distances.get(city_j, city_b);
            if gain > IMPROVEMENT_EPSILON {
                trace!(j, b, gain, "2-opt move");
                tour.reverse_span(j, b - 1);
                return true;
            }
        }
    }
    false
}

/// Exhaustive 2-opt as a [`LocalSearch`] operator.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoOpt;

impl LocalSearch for TwoOpt {
    fn name(&self) -> &str {
        "two_opt"
    }

    fn improve(
        &self,
        tour: &mut Tour,
        distances: &DistanceMatrix,
        max_moves: usize,
    ) -> Result<SearchOutcome> {
        two_opt_improve(tour, distances, max_moves)
    }
}

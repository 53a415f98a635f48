//! 2-opt restricted to neighbor candidate lists.
//!
//! # Algorithm
//!
//! For each tour edge (I, J) ending at position j, the new partner B for J
//! is taken only from J's candidate list in ascending distance order. A
//! 2-opt move replacing (I, J) and (A, B) by (I, A) and (J, B), where A is
//! the predecessor of B, can only gain if `d(J, B) < d(I, J)`, so the scan
//! of J's list stops at the first candidate with `d(J, B) >= d(I, J)`.
//!
//! Which side of the tour gets reversed depends on where B lies:
//!
//! ```text
//! b < j : reverse b..=j-1      ---AB=======IJ---
//! b > j : reverse j..=b-1      ---IJ=======AB---
//! ```
//!
//! # Complexity
//!
//! O(k·n) per scan with candidate lists of length k.
//!
//! # Reference
//!
//! Johnson, D.S. & McGeoch, L.A. (1997). "The Traveling Salesman Problem:
//! A Case Study in Local Optimization", *Local Search in Combinatorial
//! Optimization*, 215-310.

use tracing::{debug, trace};

use crate::distance::{DistanceMatrix, NeighborList};
use crate::error::{Result, TspError};
use crate::models::Tour;

use super::search::{
    ensure_searchable, run_until_converged, LocalSearch, SearchOutcome, IMPROVEMENT_EPSILON,
};

/// Applies neighbor-list 2-opt to `tour` in place.
///
/// Only the `k` nearest neighbors of each city are considered; `k == 0`
/// disables the search. Stops when a scan finds no improving move or after
/// `max_moves` moves.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::{DistanceMatrix, NeighborList};
/// use u_tsp::local_search::neighbor_two_opt_improve;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 1.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let neighbors = NeighborList::new(&dm);
///
/// let mut tour = Tour::new(vec![0, 2, 1, 3]).unwrap();
/// neighbor_two_opt_improve(&mut tour, &dm, &neighbors, 3, usize::MAX).unwrap();
/// assert!((tour.length(&dm) - 4.0).abs() < 1e-10);
/// ```
pub fn neighbor_two_opt_improve(
    tour: &mut Tour,
    distances: &DistanceMatrix,
    neighbors: &NeighborList,
    k: usize,
    max_moves: usize,
) -> Result<SearchOutcome> {
    ensure_searchable(tour, distances)?;
    if neighbors.size() != tour.len() {
        return Err(TspError::InvalidInput(format!(
            "neighbor list covers {} cities but the tour has {}",
            neighbors.size(),
            tour.len()
        )));
    }
    if k == 0 {
        return Ok(SearchOutcome {
            moves: 0,
            converged: true,
        });
    }

    let outcome = run_until_converged(max_moves, || {
        Ok(apply_first_improvement(tour, distances, neighbors, k))
    })?;
    debug!(
        k,
        moves = outcome.moves,
        converged = outcome.converged,
        length = tour.length(distances),
        "neighbor 2-opt finished"
    );
    Ok(outcome)
}

fn apply_first_improvement(
    tour: &mut Tour,
    distances: &DistanceMatrix,
    neighbors: &NeighborList,
    k: usize,
) -> bool {
    let n = tour.len();
    for j in 0..n {
        let i = if j == 0 { n - 1 } else { j - 1 };
        let city_i = tour.at(i);
        let city_j = tour.at(j);
        let removed_ij = distances.get(city_i, city_j);

        for &city_b in neighbors.nearest(city_j, k) {
            let added_jb = distances.get(city_j, city_b);
            if added_jb >= removed_ij {
                break;
            }
            let b = tour.position(city_b);
            let a = if b == 0 { n - 1 } else { b - 1 };
            let city_a = tour.at(a);
            // Adjacent edges: no 2-opt move exists.
            if city_b == city_i || city_a == city_j {
                continue;
            }
            let gain = removed_ij + distances.get(city_a, city_b)
                - distances.get(city_i, city_a)
                - added_jb;
            if gain > IMPROVEMENT_EPSILON {
                trace!(j, b, gain, "neighbor 2-opt move");
                if b < j {
                    tour.reverse_span(b, i);
                } else {
                    tour.reverse_span(j, a);
                }
                return true;
            }
        }
    }
    false
}

/// Neighbor-list 2-opt as a [`LocalSearch`] operator.
#[derive(Debug, Clone, Copy)]
pub struct NeighborTwoOpt<'a> {
    neighbors: &'a NeighborList,
    k: usize,
}

impl<'a> NeighborTwoOpt<'a> {
    /// Creates an operator considering the `k` nearest neighbors of each city.
    pub fn new(neighbors: &'a NeighborList, k: usize) -> Self {
        Self { neighbors, k }
    }
}

impl LocalSearch for NeighborTwoOpt<'_> {
    fn name(&self) -> &str {
        "neighbor_two_opt"
    }

    fn improve(
        &self,
        tour: &mut Tour,
        distances: &DistanceMatrix,
        max_moves: usize,
    ) -> Result<SearchOutcome> {
        neighbor_two_opt_improve(tour, distances, self.neighbors, self.k, max_moves)
    }
}

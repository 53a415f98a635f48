//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a given city, always visit the
//! nearest unvisited city next.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! This is the simplest constructive heuristic for the TSP. Tours are
//! typically around 25% above optimal, which makes it a fast baseline for
//! local search.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::Tour;

/// Constructs a tour using the nearest-neighbor heuristic.
///
/// Ties go to the unvisited city with the lowest id. An empty matrix yields
/// an empty tour; otherwise `start` must be a valid city.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 0.0),
///     City::new(2, 1.0, 0.0),
///     City::new(3, 2.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let tour = nearest_neighbor(&dm, 0).unwrap();
/// assert_eq!(tour.cities(), &[0, 2, 3, 1]);
/// ```
pub fn nearest_neighbor(distances: &DistanceMatrix, start: usize) -> Result<Tour> {
    let n = distances.size();
    if n == 0 {
        return Ok(Tour::identity(0));
    }
    if start >= n {
        return Err(TspError::OutOfRange {
            index: start,
            size: n,
        });
    }

    let mut unvisited: Vec<usize> = (0..n).filter(|&c| c != start).collect();
    let mut order = Vec::with_capacity(n);
    order.push(start);

    let mut current = start;
    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        unvisited.retain(|&c| c != next);
        order.push(next);
        current = next;
    }

    Tour::new(order)
}

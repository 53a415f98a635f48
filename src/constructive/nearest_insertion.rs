//! Insertion constructive heuristic.
//!
//! # Algorithm
//!
//! Starts from a random triangle of three distinct cities. Every remaining
//! city, in id order, is inserted between the consecutive pair (a, b) of
//! the partial tour that minimizes
//!
//! ```text
//! d(a, i) + d(i, b) - d(a, b)
//! ```
//!
//! The partial tour is kept as a successor array so that each insertion is
//! O(1) once the position is known.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::Tour;

/// Constructs a tour by cheapest insertion around a random triangle.
///
/// Instances with fewer than 4 cities return the identity tour.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_insertion;
///
/// let cities: Vec<City> = (0..6)
///     .map(|i| City::new(i, (i % 3) as f64, (i / 3) as f64))
///     .collect();
/// let dm = DistanceMatrix::from_cities(&cities);
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let tour = nearest_insertion(&dm, &mut rng).unwrap();
/// assert_eq!(tour.len(), 6);
/// assert!(tour.is_consistent());
/// ```
pub fn nearest_insertion<R: Rng>(distances: &DistanceMatrix, rng: &mut R) -> Result<Tour> {
    let n = distances.size();
    if n < 4 {
        return Ok(Tour::identity(n));
    }

    let r0 = rng.random_range(0..n);
    let mut r1 = rng.random_range(0..n);
    if r1 == r0 {
        r1 = (r1 + 1) % n;
    }
    let mut r2 = rng.random_range(0..n);
    while r2 == r0 || r2 == r1 {
        r2 = (r2 + 1) % n;
    }

    let mut next = vec![usize::MAX; n];
    next[r0] = r1;
    next[r1] = r2;
    next[r2] = r0;

    for city in (0..n).filter(|&c| c != r0 && c != r1 && c != r2) {
        insert(city, r0, &mut next, distances);
    }

    Tour::from_successors(&next)
}

/// Inserts `city` at the cheapest edge of the cycle through `start`.
fn insert(city: usize, start: usize, next: &mut [usize], distances: &DistanceMatrix) {
    let mut best_cost = f64::INFINITY;
    let mut best_from = start;
    let mut from = start;
    loop {
        let to = next[from];
        let cost = distances.get(from, city) + distances.get(city, to) - distances.get(from, to);
        if cost < best_cost {
            best_cost = cost;
            best_from = from;
        }
        from = to;
        if from == start {
            break;
        }
    }
    next[city] = next[best_from];
    next[best_from] = city;
}

//! Clarke-Wright savings algorithm for a single tour.
//!
//! # Algorithm
//!
//! Every city other than the hub starts on its own out-and-back trip
//! (hub → city → hub). Joining two trips at cities i and j saves
//!
//! ```text
//! s(i, j) = d(h, i) + d(h, j) - d(i, j)
//! ```
//!
//! Pairs are accepted in decreasing order of savings as long as both cities
//! are still path endpoints and belong to different paths. Without a
//! capacity limit this always merges everything into one Hamiltonian path,
//! which the hub then closes into a tour.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of cities (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::Tour;

/// A savings value for joining two cities.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: f64,
}

/// Constructs a tour using the Clarke-Wright savings algorithm.
///
/// The tour starts at `hub`. Equal savings are processed in `(i, j)` order.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::clarke_wright_savings;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 2.0, 0.0),
///     City::new(3, 3.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let tour = clarke_wright_savings(&dm, 0).unwrap();
/// assert!((tour.length(&dm) - 6.0).abs() < 1e-10);
/// ```
pub fn clarke_wright_savings(distances: &DistanceMatrix, hub: usize) -> Result<Tour> {
    let n = distances.size();
    if n == 0 {
        return Ok(Tour::identity(0));
    }
    if hub >= n {
        return Err(TspError::OutOfRange {
            index: hub,
            size: n,
        });
    }

    let others: Vec<usize> = (0..n).filter(|&c| c != hub).collect();
    let mut savings = Vec::with_capacity(others.len() * others.len().saturating_sub(1) / 2);
    for (k, &i) in others.iter().enumerate() {
        for &j in &others[k + 1..] {
            let value = distances.get(hub, i) + distances.get(hub, j) - distances.get(i, j);
            savings.push(Saving { i, j, value });
        }
    }
    savings.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then(a.i.cmp(&b.i))
            .then(a.j.cmp(&b.j))
    });

    // Each city starts as its own path; `path_of` is a union-find forest.
    let mut path_of: Vec<usize> = (0..n).collect();
    let mut links: Vec<Vec<usize>> = vec![Vec::with_capacity(2); n];
    let mut joined = 0;
    let needed = others.len().saturating_sub(1);

    for saving in &savings {
        if joined == needed {
            break;
        }
        if links[saving.i].len() >= 2 || links[saving.j].len() >= 2 {
            continue;
        }
        let root_i = find(&mut path_of, saving.i);
        let root_j = find(&mut path_of, saving.j);
        if root_i == root_j {
            continue;
        }
        path_of[root_i] = root_j;
        links[saving.i].push(saving.j);
        links[saving.j].push(saving.i);
        joined += 1;
    }

    let mut order = Vec::with_capacity(n);
    order.push(hub);
    if let Some(&start) = others.iter().find(|&&c| links[c].len() < 2) {
        let mut previous = usize::MAX;
        let mut current = start;
        loop {
            order.push(current);
            let next = links[current].iter().copied().find(|&c| c != previous);
            match next {
                Some(next) => {
                    previous = current;
                    current = next;
                }
                None => break,
            }
        }
    }

    if order.len() != n {
        return Err(TspError::InvalidInput(
            "savings merge did not produce a single path".to_string(),
        ));
    }
    Tour::new(order)
}

fn find(parent: &mut [usize], mut x: usize) -> usize {
    while parent[x] != x {
        parent[x] = parent[parent[x]];
        x = parent[x];
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    #[test]
    fn test_cw_line() {
        let dm = DistanceMatrix::from_cities(&[
            City::new(0, 0.0, 0.0),
            City::new(1, 1.0, 0.0),
            City::new(2, 2.0, 0.0),
            City::new(3, 3.0, 0.0),
        ]);
        let tour = clarke_wright_savings(&dm, 0).expect("valid hub");
        assert_eq!(tour.len(), 4);
        assert!((tour.length(&dm) - 6.0).abs() < 1e-10);
    }

    #[test]
    fn test_cw_starts_at_hub() {
        let cities: Vec<City> = (0..12)
            .map(|i| City::new(i, ((i * 5) % 7) as f64, ((i * 3) % 11) as f64))
            .collect();
        let dm = DistanceMatrix::from_cities(&cities);
        for hub in [0, 5, 11] {
            let tour = clarke_wright_savings(&dm, hub).expect("valid hub");
            assert_eq!(tour.len(), 12);
            assert_eq!(tour.city_at(0).expect("in range"), hub);
            assert!(tour.is_consistent());
        }
    }

    #[test]
    fn test_cw_square() {
        let dm = DistanceMatrix::from_cities(&[
            City::new(0, 0.0, 0.0),
            City::new(1, 5.0, 0.0),
            City::new(2, 0.0, 5.0),
            City::new(3, 5.0, 5.0),
        ]);
        let tour = clarke_wright_savings(&dm, 0).expect("valid hub");
        assert!((tour.length(&dm) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_cw_tiny_instances() {
        let dm = DistanceMatrix::from_cities(&[City::new(0, 0.0, 0.0), City::new(1, 4.0, 0.0)]);
        let tour = clarke_wright_savings(&dm, 1).expect("valid hub");
        assert_eq!(tour.cities(), &[1, 0]);

        let single = DistanceMatrix::new(1);
        assert_eq!(
            clarke_wright_savings(&single, 0).expect("valid hub").cities(),
            &[0]
        );
        assert!(clarke_wright_savings(&DistanceMatrix::new(0), 0)
            .expect("empty")
            .is_empty());
    }

    #[test]
    fn test_cw_bad_hub() {
        let dm = DistanceMatrix::new(4);
        assert!(matches!(
            clarke_wright_savings(&dm, 4),
            Err(TspError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_cw_zero_savings_still_merge() {
        // Opposite cities save nothing by joining; the path still covers all.
        let dm = DistanceMatrix::from_cities(&[
            City::new(0, 0.0, 0.0),
            City::new(1, 10.0, 0.0),
            City::new(2, -10.0, 0.0),
            City::new(3, 0.0, 10.0),
            City::new(4, 0.0, -10.0),
        ]);
        let tour = clarke_wright_savings(&dm, 0).expect("valid hub");
        assert_eq!(tour.len(), 5);
        assert!(tour.is_consistent());
    }
}

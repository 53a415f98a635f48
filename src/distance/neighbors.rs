//! Per-city candidate lists ranked by distance.

use super::DistanceMatrix;

/// For every city, all other cities in ascending distance order.
///
/// Ties are broken by ascending city id, so the ranking is fully
/// deterministic. Building costs O(n² log n); afterwards any rank is an O(1)
/// lookup. The list is immutable once built and can be shared between
/// threads.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::{DistanceMatrix, NeighborList};
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 5.0, 0.0),
///     City::new(2, 1.0, 0.0),
///     City::new(3, 3.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let neighbors = NeighborList::new(&dm);
///
/// assert_eq!(neighbors.neighbors(0), &[2, 3, 1]);
/// assert_eq!(neighbors.nearest(0, 2), &[2, 3]);
/// assert_eq!(neighbors.get(0, 0), Some(2));
/// ```
#[derive(Debug, Clone)]
pub struct NeighborList {
    ranked: Vec<Vec<usize>>,
}

impl NeighborList {
    /// Ranks every city's neighbors using the given distance matrix.
    pub fn new(distances: &DistanceMatrix) -> Self {
        let n = distances.size();
        let ranked = (0..n)
            .map(|city| {
                let row = distances.row(city);
                let mut others: Vec<usize> = (0..n).filter(|&other| other != city).collect();
                others.sort_by(|&a, &b| row[a].total_cmp(&row[b]).then(a.cmp(&b)));
                others
            })
            .collect();
        Self { ranked }
    }

    /// Number of cities covered.
    pub fn size(&self) -> usize {
        self.ranked.len()
    }

    /// All other cities ranked by distance from `city`.
    ///
    /// # Panics
    ///
    /// Panics if `city` is out of bounds.
    pub fn neighbors(&self, city: usize) -> &[usize] {
        &self.ranked[city]
    }

    /// The `k` closest cities to `city` (fewer if the instance is smaller).
    pub fn nearest(&self, city: usize, k: usize) -> &[usize] {
        let list = &self.ranked[city];
        &list[..k.min(list.len())]
    }

    /// The city ranked `rank` (0 = closest) from `city`, if any.
    pub fn get(&self, city: usize, rank: usize) -> Option<usize> {
        self.ranked.get(city)?.get(rank).copied()
    }
}

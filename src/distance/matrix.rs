//! Pairwise city distances.
//!
//! Every search reads distances through [`DistanceMatrix::get`] in its inner
//! loop, so the matrix is a flat row-major `Vec<f64>` with one row per city.
//! Matrices built from coordinates have a zero diagonal and are symmetric;
//! hand-filled matrices may be neither, which [`DistanceMatrix::is_symmetric`]
//! reports.

use crate::models::City;

/// A dense n×n table of city-to-city distances.
///
/// Built once per instance and read-only afterwards, so one matrix can back
/// concurrent searches over independent tours.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_cities(&[
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
/// ]);
/// assert_eq!(dm.size(), 2);
/// assert!((dm.get(1, 0) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.row(0), &[0.0, 5.0]);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    cities: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// An all-zero matrix over `cities` cities, to be filled with [`set`](Self::set).
    pub fn new(cities: usize) -> Self {
        Self {
            cities,
            cells: vec![0.0; cities * cities],
        }
    }

    /// Euclidean distances between `cities`, indexed by slice position.
    pub fn from_cities(cities: &[City]) -> Self {
        let mut matrix = Self::new(cities.len());
        for (i, from) in cities.iter().enumerate() {
            for (j, to) in cities.iter().enumerate().skip(i + 1) {
                let d = from.distance_to(to);
                matrix.set(i, j, d);
                matrix.set(j, i, d);
            }
        }
        matrix
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either city is out of range.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.cities + to]
    }

    /// Overwrites the single directed entry `from → to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.cells[from * self.cities + to] = distance;
    }

    /// Distances from `city` to every city, itself included.
    pub fn row(&self, city: usize) -> &[f64] {
        let start = city * self.cities;
        &self.cells[start..start + self.cities]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.cities
    }

    /// Whether `get(i, j)` and `get(j, i)` agree within `tol` for every pair.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.cities).all(|i| {
            self.row(i)
                .iter()
                .enumerate()
                .skip(i + 1)
                .all(|(j, &d)| (d - self.get(j, i)).abs() <= tol)
        })
    }

    /// The candidate closest to `from`, the earliest listed on ties.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let row = self.row(from);
        candidates
            .iter()
            .copied()
            .min_by(|&a, &b| row[a].total_cmp(&row[b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0, 1.0, 1.0),
            City::new(1, 4.0, 5.0),
            City::new(2, 1.0, 9.0),
            City::new(3, -2.0, 5.0),
        ])
    }

    #[test]
    fn test_coordinates_give_zero_diagonal() {
        let dm = triangle();
        for city in 0..dm.size() {
            assert_eq!(dm.get(city, city), 0.0);
        }
    }

    #[test]
    fn test_coordinates_give_exact_symmetry() {
        let dm = triangle();
        assert!(dm.is_symmetric(0.0));
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(dm.get(i, j), dm.get(j, i));
            }
        }
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_row_matches_get() {
        let dm = triangle();
        for city in 0..4 {
            let row = dm.row(city);
            assert_eq!(row.len(), 4);
            for (other, &d) in row.iter().enumerate() {
                assert_eq!(d, dm.get(city, other));
            }
        }
    }

    #[test]
    fn test_one_sided_edit_breaks_symmetry() {
        let mut dm = triangle();
        dm.set(2, 3, dm.get(2, 3) + 1.0);
        assert!(!dm.is_symmetric(1e-10));
        assert!(dm.is_symmetric(1.5));
    }

    #[test]
    fn test_nearest_neighbor_first_on_ties() {
        let dm = triangle();
        // Cities 1 and 3 are both 5 away from 0.
        assert_eq!(dm.nearest_neighbor(0, &[2, 3, 1]), Some(3));
        assert_eq!(dm.nearest_neighbor(0, &[1, 3]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_empty() {
        let dm = DistanceMatrix::from_cities(&[]);
        assert_eq!(dm.size(), 0);
        assert!(dm.is_symmetric(0.0));
    }
}

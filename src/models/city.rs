//! City type.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A city in a TSP instance: an identifier and a planar coordinate.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
///
/// let a = City::new(0, 0.0, 0.0);
/// let b = City::new(1, 3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// assert!((a.distance_squared_to(&b) - 25.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// City ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Squared Euclidean distance to another city.
    pub fn distance_squared_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        self.distance_squared_to(other).sqrt()
    }
}

/// Generates `n` cities with integer coordinates drawn uniformly from `[0, extent)`.
///
/// Ids are assigned `0..n` in generation order.
pub fn random_cities<R: Rng>(n: usize, extent: u32, rng: &mut R) -> Vec<City> {
    let extent = extent.max(1);
    (0..n)
        .map(|id| {
            let x = rng.random_range(0..extent) as f64;
            let y = rng.random_range(0..extent) as f64;
            City::new(id, x, y)
        })
        .collect()
}

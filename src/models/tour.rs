//! Tour representation with an inverse position index.

use std::fmt;

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};

/// A cyclic visiting order over cities `0..n`.
///
/// Stores both the order (`position → city`) and its inverse
/// (`city → position`) so that lookups in either direction are O(1). Every
/// public mutator keeps the two mappings inverse to each other, except
/// [`Tour::set`], which is a raw batch primitive.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 1.0),
///     City::new(2, 1.0, 1.0),
///     City::new(3, 1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let mut tour = Tour::new(vec![0, 2, 1, 3]).unwrap();
/// assert_eq!(tour.index_of(2).unwrap(), 1);
///
/// tour.swap(1, 2).unwrap();
/// assert_eq!(tour.cities(), &[0, 1, 2, 3]);
/// assert!((tour.length(&dm) - 4.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    order: Vec<usize>,
    index: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a visiting order.
    ///
    /// Returns [`TspError::InvalidInput`] unless `permutation` contains every
    /// city `0..n` exactly once.
    pub fn new(permutation: Vec<usize>) -> Result<Self> {
        let n = permutation.len();
        let mut index = vec![usize::MAX; n];
        for (pos, &city) in permutation.iter().enumerate() {
            if city >= n {
                return Err(TspError::InvalidInput(format!(
                    "city {city} is outside [0, {n})"
                )));
            }
            if index[city] != usize::MAX {
                return Err(TspError::InvalidInput(format!(
                    "city {city} appears more than once"
                )));
            }
            index[city] = pos;
        }
        Ok(Self {
            order: permutation,
            index,
        })
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
            index: (0..n).collect(),
        }
    }

    /// Converts a successor array into a position-based tour.
    ///
    /// `next[c]` is the city visited right after `c`. The resulting tour
    /// starts at city 0. Fails with [`TspError::InvalidInput`] if the array
    /// does not describe one cycle through all cities.
    pub fn from_successors(next: &[usize]) -> Result<Self> {
        let n = next.len();
        let mut order = Vec::with_capacity(n);
        let mut seen = vec![false; n];
        let mut city = 0;
        for _ in 0..n {
            if city >= n {
                return Err(TspError::InvalidInput(format!(
                    "successor {city} is outside [0, {n})"
                )));
            }
            if seen[city] {
                return Err(TspError::InvalidInput(format!(
                    "successor array closes a subtour at city {city}"
                )));
            }
            seen[city] = true;
            order.push(city);
            city = next[city];
        }
        if n > 0 && city != 0 {
            return Err(TspError::InvalidInput(
                "successor array does not return to its start".to_string(),
            ));
        }
        Self::new(order)
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour has no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.order
    }

    /// Iterates over cities in visiting order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.order.iter().copied()
    }

    /// City at position `pos`.
    pub fn city_at(&self, pos: usize) -> Result<usize> {
        self.check(pos)?;
        Ok(self.order[pos])
    }

    /// Position of `city` in the visiting order. O(1).
    pub fn index_of(&self, city: usize) -> Result<usize> {
        self.check(city)?;
        Ok(self.index[city])
    }

    /// Exchanges the cities at two positions. O(1).
    pub fn swap(&mut self, pos_a: usize, pos_b: usize) -> Result<()> {
        self.check(pos_a)?;
        self.check(pos_b)?;
        self.swap_positions(pos_a, pos_b);
        Ok(())
    }

    /// Reverses the cyclic span `[start, end]`, both ends inclusive.
    ///
    /// When `start > end` the span wraps from position `n - 1` to 0. Cost is
    /// proportional to the span length.
    pub fn reverse_segment(&mut self, start: usize, end: usize) -> Result<()> {
        self.check(start)?;
        self.check(end)?;
        self.reverse_span(start, end);
        Ok(())
    }

    /// Writes `city` at position `pos` in both mappings.
    ///
    /// This is a raw primitive for batch rewrites: after a single call the
    /// mappings are usually inconsistent, and the caller must finish writing
    /// every affected position before the tour is used again.
    pub fn set(&mut self, pos: usize, city: usize) -> Result<()> {
        self.check(pos)?;
        self.check(city)?;
        self.order[pos] = city;
        self.index[city] = pos;
        Ok(())
    }

    /// Total length including the closing edge from the last city to the first.
    pub fn length(&self, distances: &DistanceMatrix) -> f64 {
        self.order
            .iter()
            .zip(self.order.iter().cycle().skip(1))
            .map(|(&from, &to)| distances.get(from, to))
            .sum()
    }

    /// Returns `true` if order and index are inverse permutations.
    pub fn is_consistent(&self) -> bool {
        self.order.len() == self.index.len()
            && self
                .order
                .iter()
                .enumerate()
                .all(|(pos, &city)| city < self.index.len() && self.index[city] == pos)
    }

    /// City at `pos`, where position `n` wraps to 0.
    pub(crate) fn at(&self, pos: usize) -> usize {
        let n = self.order.len();
        self.order[if pos >= n { pos - n } else { pos }]
    }

    /// Position of `city` without a range check.
    pub(crate) fn position(&self, city: usize) -> usize {
        self.index[city]
    }

    pub(crate) fn swap_positions(&mut self, pos_a: usize, pos_b: usize) {
        self.order.swap(pos_a, pos_b);
        self.index[self.order[pos_a]] = pos_a;
        self.index[self.order[pos_b]] = pos_b;
    }

    pub(crate) fn reverse_span(&mut self, start: usize, end: usize) {
        let n = self.order.len();
        let span = (end + n - start) % n + 1;
        let (mut left, mut right) = (start, end);
        for _ in 0..span / 2 {
            self.swap_positions(left, right);
            left = if left + 1 == n { 0 } else { left + 1 };
            right = if right == 0 { n - 1 } else { right - 1 };
        }
    }

    fn check(&self, i: usize) -> Result<()> {
        if i >= self.order.len() {
            return Err(TspError::OutOfRange {
                index: i,
                size: self.order.len(),
            });
        }
        Ok(())
    }
}

/// One city id per line, in visiting order.
impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for city in &self.order {
            writeln!(f, "{city}")?;
        }
        Ok(())
    }
}

//! Search configuration.

use serde::{Deserialize, Serialize};

/// How many candidate tours to build and how hard to improve each.
///
/// Every field has a default, so partial configurations deserialize.
///
/// # Examples
///
/// ```
/// use u_tsp::solver::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_nearest_neighbor_tours(5)
///     .with_three_opt_moves(100)
///     .with_seed(42);
/// assert_eq!(config.nearest_neighbor_tours, 5);
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Nearest-neighbor tours, each from a random start city.
    pub nearest_neighbor_tours: usize,
    /// Insertion tours, each around a random triangle.
    pub nearest_insertion_tours: usize,
    /// Randomized MST pre-order tours.
    pub mst_tours: usize,
    /// Clarke-Wright tours, each around a random hub.
    pub savings_tours: usize,
    /// Candidate list length for neighbor 2-opt; 0 skips that stage.
    pub neighbor_k: usize,
    /// Move budget for neighbor 2-opt.
    pub neighbor_two_opt_moves: usize,
    /// Move budget for exhaustive 2-opt; 0 skips that stage.
    pub two_opt_moves: usize,
    /// Move budget for 3-opt; 0 skips that stage.
    pub three_opt_moves: usize,
    /// RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            nearest_neighbor_tours: 1,
            nearest_insertion_tours: 1,
            mst_tours: 1,
            savings_tours: 1,
            neighbor_k: 8,
            neighbor_two_opt_moves: usize::MAX,
            two_opt_moves: usize::MAX,
            three_opt_moves: 0,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// A schedule tiered by instance size.
    ///
    /// Small instances get many candidate tours and full 3-opt; large ones
    /// get a single insertion tour and a bounded number of 2-opt moves.
    pub fn for_size(n: usize) -> Self {
        let base = Self {
            nearest_neighbor_tours: 0,
            nearest_insertion_tours: 1,
            mst_tours: 0,
            savings_tours: 0,
            neighbor_k: 0,
            neighbor_two_opt_moves: usize::MAX,
            two_opt_moves: usize::MAX,
            three_opt_moves: 0,
            seed: None,
        };
        match n {
            0..=50 => Self {
                nearest_neighbor_tours: 10,
                nearest_insertion_tours: 20,
                mst_tours: 10,
                savings_tours: 1,
                three_opt_moves: usize::MAX,
                ..base
            },
            51..=100 => Self {
                nearest_neighbor_tours: 4,
                nearest_insertion_tours: 6,
                mst_tours: 2,
                savings_tours: 1,
                three_opt_moves: usize::MAX,
                ..base
            },
            101..=200 => Self {
                nearest_neighbor_tours: 3,
                nearest_insertion_tours: 5,
                mst_tours: 4,
                two_opt_moves: 70,
                ..base
            },
            201..=300 => Self {
                nearest_neighbor_tours: 1,
                nearest_insertion_tours: 2,
                neighbor_k: 20,
                two_opt_moves: 10,
                ..base
            },
            301..=500 => Self {
                two_opt_moves: 198,
                ..base
            },
            501..=700 => Self {
                two_opt_moves: 192,
                ..base
            },
            _ => Self {
                two_opt_moves: 190,
                ..base
            },
        }
    }

    /// Sets the number of nearest-neighbor tours.
    pub fn with_nearest_neighbor_tours(mut self, count: usize) -> Self {
        self.nearest_neighbor_tours = count;
        self
    }

    /// Sets the number of insertion tours.
    pub fn with_nearest_insertion_tours(mut self, count: usize) -> Self {
        self.nearest_insertion_tours = count;
        self
    }

    /// Sets the number of MST tours.
    pub fn with_mst_tours(mut self, count: usize) -> Self {
        self.mst_tours = count;
        self
    }

    /// Sets the number of savings tours.
    pub fn with_savings_tours(mut self, count: usize) -> Self {
        self.savings_tours = count;
        self
    }

    /// Sets the neighbor list length and move budget for neighbor 2-opt.
    pub fn with_neighbor_two_opt(mut self, k: usize, max_moves: usize) -> Self {
        self.neighbor_k = k;
        self.neighbor_two_opt_moves = max_moves;
        self
    }

    /// Sets the exhaustive 2-opt move budget.
    pub fn with_two_opt_moves(mut self, max_moves: usize) -> Self {
        self.two_opt_moves = max_moves;
        self
    }

    /// Sets the 3-opt move budget.
    pub fn with_three_opt_moves(mut self, max_moves: usize) -> Self {
        self.three_opt_moves = max_moves;
        self
    }

    /// Sets the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Total number of constructed candidate tours.
    pub fn candidate_count(&self) -> usize {
        self.nearest_neighbor_tours
            + self.nearest_insertion_tours
            + self.mst_tours
            + self.savings_tours
    }
}

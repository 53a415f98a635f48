//! Multi-start solve pipeline.
//!
//! # Algorithm
//!
//! 1. Build candidate tours with the constructive heuristics.
//! 2. Improve every candidate in parallel: neighbor-list 2-opt, then
//!    exhaustive 2-opt, then 3-opt, each stage skipped when disabled.
//! 3. Return the shortest candidate.
//!
//! The neighbor list is only built when a stage needs it, and at most once
//! per [`Solver`].

use std::sync::OnceLock;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use super::config::SearchConfig;
use crate::constructive::{
    clarke_wright_savings, minimum_spanning_tree, mst_tour, nearest_insertion, nearest_neighbor,
};
use crate::distance::{DistanceMatrix, NeighborList};
use crate::error::Result;
use crate::local_search::{
    LocalSearch, NeighborTwoOpt, ThreeOpt, TwoOpt, IMPROVEMENT_EPSILON, MIN_SEARCH_CITIES,
};
use crate::models::Tour;

type Stage<'s> = (Box<dyn LocalSearch + 's>, usize);

/// Runs the configured pipeline over one instance.
#[derive(Debug)]
pub struct Solver<'a> {
    distances: &'a DistanceMatrix,
    config: SearchConfig,
    neighbors: OnceLock<NeighborList>,
}

impl<'a> Solver<'a> {
    /// Creates a solver for `distances`.
    pub fn new(distances: &'a DistanceMatrix, config: SearchConfig) -> Self {
        Self {
            distances,
            config,
            neighbors: OnceLock::new(),
        }
    }

    /// The neighbor list, built on first call.
    pub fn neighbors(&self) -> &NeighborList {
        self.neighbors.get_or_init(|| NeighborList::new(self.distances))
    }

    /// Builds the configured candidate tours.
    ///
    /// Falls back to a single nearest-neighbor tour from city 0 when the
    /// configuration asks for none.
    pub fn candidates<R: Rng>(&self, rng: &mut R) -> Result<Vec<Tour>> {
        let n = self.distances.size();
        let config = &self.config;
        let mut tours = Vec::with_capacity(config.candidate_count().max(1));
        if n == 0 {
            tours.push(Tour::identity(0));
            return Ok(tours);
        }

        for _ in 0..config.nearest_neighbor_tours {
            tours.push(nearest_neighbor(self.distances, rng.random_range(0..n))?);
        }
        for _ in 0..config.nearest_insertion_tours {
            tours.push(nearest_insertion(self.distances, rng)?);
        }
        if config.mst_tours > 0 {
            let tree = minimum_spanning_tree(self.distances);
            for _ in 0..config.mst_tours {
                tours.push(mst_tour(&tree, rng)?);
            }
        }
        for _ in 0..config.savings_tours {
            tours.push(clarke_wright_savings(self.distances, rng.random_range(0..n))?);
        }

        if tours.is_empty() {
            tours.push(nearest_neighbor(self.distances, 0)?);
        }
        Ok(tours)
    }

    /// Applies the improvement stages to one tour.
    pub fn improve(&self, tour: &mut Tour) -> Result<()> {
        let stages = self.stages();
        self.run_stages(&stages, tour)
    }

    /// Builds candidates, improves them and returns the shortest.
    pub fn solve(&self) -> Result<Tour> {
        let n = self.distances.size();
        if n < MIN_SEARCH_CITIES {
            debug!(cities = n, "instance too small to search, returning identity tour");
            return Ok(Tour::identity(n));
        }
        if !self.distances.is_symmetric(IMPROVEMENT_EPSILON) {
            warn!(cities = n, "distance matrix is not symmetric, move gains will be inexact");
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut tours = self.candidates(&mut rng)?;
        let initial = best_tour(&tours, self.distances).map(|t| t.length(self.distances));
        info!(
            cities = n,
            candidates = tours.len(),
            best_initial = ?initial,
            "constructed candidate tours"
        );

        let stages = self.stages();
        tours
            .par_iter_mut()
            .try_for_each(|tour| self.run_stages(&stages, tour))?;

        let best = match best_tour(&tours, self.distances) {
            Some(tour) => tour.clone(),
            None => Tour::identity(n),
        };
        info!(
            cities = n,
            length = best.length(self.distances),
            "search finished"
        );
        Ok(best)
    }

    fn stages(&self) -> Vec<Stage<'_>> {
        let config = &self.config;
        let mut stages: Vec<Stage<'_>> = Vec::with_capacity(3);
        if config.neighbor_k > 0 && config.neighbor_two_opt_moves > 0 {
            stages.push((
                Box::new(NeighborTwoOpt::new(self.neighbors(), config.neighbor_k)),
                config.neighbor_two_opt_moves,
            ));
        }
        if config.two_opt_moves > 0 {
            stages.push((Box::new(TwoOpt), config.two_opt_moves));
        }
        if config.three_opt_moves > 0 {
            stages.push((Box::new(ThreeOpt), config.three_opt_moves));
        }
        stages
    }

    fn run_stages(&self, stages: &[Stage<'_>], tour: &mut Tour) -> Result<()> {
        if tour.len() < MIN_SEARCH_CITIES {
            return Ok(());
        }
        for (operator, max_moves) in stages {
            let outcome = operator.improve(tour, self.distances, *max_moves)?;
            debug!(
                operator = operator.name(),
                moves = outcome.moves,
                converged = outcome.converged,
                "stage finished"
            );
        }
        Ok(())
    }
}

/// Returns the shortest tour, the earliest one on ties.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::solver::best_tour;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 1.0, 0.0),
///     City::new(2, 0.0, 1.0),
///     City::new(3, 1.0, 1.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// let tours = vec![Tour::identity(4), Tour::new(vec![0, 1, 3, 2]).unwrap()];
///
/// assert_eq!(best_tour(&tours, &dm).unwrap().cities(), &[0, 1, 3, 2]);
/// ```
pub fn best_tour<'t>(tours: &'t [Tour], distances: &DistanceMatrix) -> Option<&'t Tour> {
    let mut best: Option<(&Tour, f64)> = None;
    for tour in tours {
        let length = tour.length(distances);
        match best {
            Some((_, best_length)) if length >= best_length => {}
            _ => best = Some((tour, length)),
        }
    }
    best.map(|(tour, _)| tour)
}

/// Solves `distances` with `config`.
///
/// Instances with fewer than 4 cities return the identity tour.
///
/// # Examples
///
/// ```
/// use u_tsp::models::City;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::solver::{solve, SearchConfig};
///
/// let cities: Vec<City> = (0..8)
///     .map(|i| City::new(i, (i % 4) as f64, (i / 4) as f64))
///     .collect();
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let tour = solve(&dm, &SearchConfig::default().with_seed(1)).unwrap();
/// assert_eq!(tour.len(), 8);
/// assert!((tour.length(&dm) - 8.0).abs() < 1e-9);
/// ```
pub fn solve(distances: &DistanceMatrix, config: &SearchConfig) -> Result<Tour> {
    Solver::new(distances, config.clone()).solve()
}

//! Shared vocabulary for tour improvement operators.

use crate::distance::DistanceMatrix;
use crate::error::{Result, TspError};
use crate::models::Tour;

/// Smallest length reduction accepted as an improvement.
///
/// Moves whose gain does not exceed this are treated as ties and never
/// applied, so a search cannot cycle between equal-length tours.
pub const IMPROVEMENT_EPSILON: f64 = 1e-10;

/// Fewest cities a local search operator accepts.
pub const MIN_SEARCH_CITIES: usize = 4;

/// Result of running an improvement operator on a tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOutcome {
    /// Number of improving moves applied.
    pub moves: usize,
    /// `true` if the final scan found no improving move (a local optimum);
    /// `false` if the move budget ran out first.
    pub converged: bool,
}

/// A local search operator that improves a tour in place.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::{LocalSearch, ThreeOpt, TwoOpt};
///
/// let cities: Vec<City> = (0..6)
///     .map(|i| City::new(i, (i % 3) as f64, (i / 3) as f64))
///     .collect();
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let operators: Vec<Box<dyn LocalSearch>> = vec![Box::new(TwoOpt), Box::new(ThreeOpt)];
/// let mut tour = Tour::new(vec![0, 4, 2, 3, 1, 5]).unwrap();
/// let before = tour.length(&dm);
/// for op in &operators {
///     op.improve(&mut tour, &dm, usize::MAX).unwrap();
/// }
/// assert!(tour.length(&dm) < before);
/// ```
pub trait LocalSearch: Send + Sync {
    /// Operator name used in logs.
    fn name(&self) -> &str;

    /// Applies at most `max_moves` improving moves to `tour`.
    fn improve(
        &self,
        tour: &mut Tour,
        distances: &DistanceMatrix,
        max_moves: usize,
    ) -> Result<SearchOutcome>;
}

/// Checks the preconditions shared by all operators.
pub(crate) fn ensure_searchable(tour: &Tour, distances: &DistanceMatrix) -> Result<()> {
    if tour.len() < MIN_SEARCH_CITIES {
        return Err(TspError::Unsolvable { cities: tour.len() });
    }
    if distances.size() != tour.len() {
        return Err(TspError::InvalidInput(format!(
            "distance matrix covers {} cities but the tour has {}",
            distances.size(),
            tour.len()
        )));
    }
    Ok(())
}

/// Repeats `pass` until it reports no improvement or the budget is spent.
pub(crate) fn run_until_converged<F>(max_moves: usize, mut pass: F) -> Result<SearchOutcome>
where
    F: FnMut() -> Result<bool>,
{
    let mut outcome = SearchOutcome::default();
    while outcome.moves < max_moves {
        if !pass()? {
            outcome.converged = true;
            break;
        }
        outcome.moves += 1;
    }
    Ok(outcome)
}

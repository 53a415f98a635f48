//! 3-opt improvement with segment reconnection.
//!
//! # Algorithm
//!
//! Cuts the tour at three edges (A, B), (C, D), (E, F) with cut positions
//! b < d < f, at least two apart, leaving two interior segments B..C and
//! D..E. Three reconnections are compared against the current edges:
//!
//! ```text
//! identity            A → B..C → D..E → F   d(A,B) + d(C,D) + d(E,F)
//! SwapReverseFirst    A → D..E → C..B → F   d(A,D) + d(E,C) + d(B,F)
//! ReverseBoth         A → C..B → E..D → F   d(A,C) + d(B,E) + d(D,F)
//! SwapReverseSecond   A → E..D → B..C → F   d(A,E) + d(D,B) + d(C,F)
//! ```
//!
//! The cheapest reconnection wins, ties going to the earlier row. When it
//! beats the identity, positions b..=e are rewritten and the scan restarts
//! (first-improvement strategy).
//!
//! # Complexity
//!
//! O(n³) per scan.
//!
//! # Reference
//!
//! Lin, S. (1965). "Computer Solutions of the Traveling Salesman Problem",
//! *Bell System Technical Journal* 44(10), 2245-2269.

use tracing::{debug, trace};

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::models::Tour;

use super::search::{
    ensure_searchable, run_until_converged, LocalSearch, SearchOutcome, IMPROVEMENT_EPSILON,
};

/// How the two interior segments are put back together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconnection {
    /// Keep the current edges.
    Identity,
    /// `A → D..E → C..B → F`.
    SwapReverseFirst,
    /// `A → C..B → E..D → F`.
    ReverseBoth,
    /// `A → E..D → B..C → F`.
    SwapReverseSecond,
}

/// Picks the cheapest reconnection for one cut triple.
///
/// Alternatives are ranked `alt0 < alt1 < alt2` on equal cost. The identity
/// is kept unless the best alternative is cheaper by more than
/// [`IMPROVEMENT_EPSILON`].
///
/// # Examples
///
/// ```
/// use u_tsp::local_search::{select_reconnection, Reconnection};
///
/// assert_eq!(select_reconnection(10.0, 9.0, 8.0, 8.0), Reconnection::ReverseBoth);
/// assert_eq!(select_reconnection(10.0, 10.0, 12.0, 11.0), Reconnection::Identity);
/// ```
pub fn select_reconnection(id: f64, alt0: f64, alt1: f64, alt2: f64) -> Reconnection {
    let (mut best, mut cost) = (Reconnection::SwapReverseFirst, alt0);
    if alt1 < cost {
        best = Reconnection::ReverseBoth;
        cost = alt1;
    }
    if alt2 < cost {
        best = Reconnection::SwapReverseSecond;
        cost = alt2;
    }
    if id - cost > IMPROVEMENT_EPSILON {
        best
    } else {
        Reconnection::Identity
    }
}

/// Applies 3-opt to `tour` in place.
///
/// Stops when a full scan finds no improving reconnection or after
/// `max_moves` moves.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{City, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::three_opt_improve;
///
/// let cities: Vec<City> = (0..12)
///     .map(|i| City::new(i, (i % 4) as f64, (i / 4) as f64))
///     .collect();
/// let dm = DistanceMatrix::from_cities(&cities);
///
/// let mut tour = Tour::new(vec![0, 6, 2, 9, 4, 11, 1, 7, 3, 10, 5, 8]).unwrap();
/// let before = tour.length(&dm);
/// let outcome = three_opt_improve(&mut tour, &dm, usize::MAX).unwrap();
/// assert!(outcome.converged);
/// assert!(tour.length(&dm) < before);
/// ```
pub fn three_opt_improve(
    tour: &mut Tour,
    distances: &DistanceMatrix,
    max_moves: usize,
) -> Result<SearchOutcome> {
    ensure_searchable(tour, distances)?;
    let outcome = run_until_converged(max_moves, || apply_first_improvement(tour, distances))?;
    debug!(
        moves = outcome.moves,
        converged = outcome.converged,
        length = tour.length(distances),
        "3-opt finished"
    );
    Ok(outcome)
}

fn apply_first_improvement(tour: &mut Tour, distances: &DistanceMatrix) -> Result<bool> {
    let n = tour.len();
    for b in 1..n {
        for d in (b + 2)..n {
            for f in (d + 2)..=n {
                let (a, c, e) = (b - 1, d - 1, f - 1);
                let (city_a, city_b) = (tour.at(a), tour.at(b));
                let (city_c, city_d) = (tour.at(c), tour.at(d));
                let (city_e, city_f) = (tour.at(e), tour.at(f));

                let id = distances.get(city_a, city_b)
                    + distances.get(city_c, city_d)
                    + distances.get(city_e, city_f);
                let alt0 = distances.get(city_a, city_d)
                    + distances.get(city_e, city_c)
                    + distances.get(city_b, city_f);
                let alt1 = distances.get(city_a, city_c)
                    + distances.get(city_b, city_e)
                    + distances.get(city_d, city_f);
                let alt2 = distances.get(city_a, city_e)
                    + distances.get(city_d, city_b)
                    + distances.get(city_c, city_f);

                let reconnection = select_reconnection(id, alt0, alt1, alt2);
                if reconnection == Reconnection::Identity {
                    continue;
                }
                trace!(b, d, f, ?reconnection, "3-opt move");
                rewrite(tour, reconnection, b, c, d, e)?;
                return Ok(true);
            }
        }
    }
    Ok(false)
}

/// Rewrites positions `b..=e` from the segments `b..=c` and `d..=e`.
fn rewrite(
    tour: &mut Tour,
    reconnection: Reconnection,
    b: usize,
    c: usize,
    d: usize,
    e: usize,
) -> Result<()> {
    let first = (b..=c).map(|pos| tour.at(pos));
    let second = (d..=e).map(|pos| tour.at(pos));
    let mut buffer = Vec::with_capacity(e + 1 - b);
    match reconnection {
        Reconnection::Identity => return Ok(()),
        Reconnection::SwapReverseFirst => {
            buffer.extend(second);
            buffer.extend(first.rev());
        }
        Reconnection::ReverseBoth => {
            buffer.extend(first.rev());
            buffer.extend(second.rev());
        }
        Reconnection::SwapReverseSecond => {
            buffer.extend(second.rev());
            buffer.extend(first);
        }
    }
    for (offset, city) in buffer.into_iter().enumerate() {
        tour.set(b + offset, city)?;
    }
    debug_assert!(tour.is_consistent());
    Ok(())
}

/// 3-opt as a [`LocalSearch`] operator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreeOpt;

impl LocalSearch for ThreeOpt {
    fn name(&self) -> &str {
        "three_opt"
    }

    fn improve(
        &self,
        tour: &mut Tour,
        distances: &DistanceMatrix,
        max_moves: usize,
    ) -> Result<SearchOutcome> {
        three_opt_improve(tour, distances, max_moves)
    }
}

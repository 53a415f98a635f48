use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_tsp::distance::{DistanceMatrix, NeighborList};
use u_tsp::local_search::{neighbor_two_opt_improve, three_opt_improve, two_opt_improve};
use u_tsp::models::{random_cities, City, Tour};
use u_tsp::solver::{solve, SearchConfig};

fn instance(min: usize, max: usize) -> impl Strategy<Value = (DistanceMatrix, Vec<usize>)> {
    (min..=max).prop_flat_map(|n| {
        (
            prop::collection::vec((0i32..100, 0i32..100), n),
            Just((0..n).collect::<Vec<usize>>()).prop_shuffle(),
        )
            .prop_map(|(coords, order)| {
                let cities: Vec<City> = coords
                    .into_iter()
                    .enumerate()
                    .map(|(id, (x, y))| City::new(id, x as f64, y as f64))
                    .collect();
                (DistanceMatrix::from_cities(&cities), order)
            })
    })
}

/// Six cities whose tour is 2-opt optimal but admits one improving 3-opt move.
fn three_opt_scenario() -> (DistanceMatrix, Tour) {
    let points = [(0.0, 4.0), (9.0, 3.0), (1.0, 3.0), (4.0, 5.0), (4.0, 9.0), (8.0, 6.0)];
    let cities: Vec<City> = points
        .iter()
        .enumerate()
        .map(|(id, &(x, y))| City::new(id, x, y))
        .collect();
    let tour = Tour::new(vec![3, 4, 5, 1, 2, 0]).expect("permutation");
    (DistanceMatrix::from_cities(&cities), tour)
}

#[test]
fn three_opt_escapes_a_two_opt_optimum() {
    let (dm, start) = three_opt_scenario();
    assert!((start.length(&dm) - 25.699596848159135).abs() < 1e-9);

    let mut tour = start.clone();
    let outcome = two_opt_improve(&mut tour, &dm, usize::MAX).expect("searchable");
    assert_eq!(outcome.moves, 0);
    assert!(outcome.converged);

    let neighbors = NeighborList::new(&dm);
    for k in 0..=5 {
        let mut tour = start.clone();
        let outcome =
            neighbor_two_opt_improve(&mut tour, &dm, &neighbors, k, usize::MAX).expect("valid");
        assert_eq!(outcome.moves, 0, "k = {k}");
    }

    let mut tour = start;
    let outcome = three_opt_improve(&mut tour, &dm, usize::MAX).expect("searchable");
    assert_eq!(outcome.moves, 1);
    assert!(outcome.converged);
    assert_eq!(tour.cities(), &[3, 1, 5, 4, 0, 2]);
    assert!((tour.length(&dm) - 24.970331542572815).abs() < 1e-9);
}

#[test]
fn solved_tour_is_three_opt_optimal() {
    let mut rng = StdRng::seed_from_u64(2024);
    let cities = random_cities(60, 1000, &mut rng);
    let dm = DistanceMatrix::from_cities(&cities);
    let config = SearchConfig::for_size(60).with_seed(8);

    let mut tour = solve(&dm, &config).expect("solvable");
    assert_eq!(tour.len(), 60);
    assert!(tour.is_consistent());
    let outcome = three_opt_improve(&mut tour, &dm, usize::MAX).expect("searchable");
    assert_eq!(outcome.moves, 0);
}

proptest! {
    #[test]
    fn two_opt_never_lengthens_and_converges((dm, order) in instance(4, 30)) {
        let mut tour = Tour::new(order).expect("permutation");
        let before = tour.length(&dm);
        let outcome = two_opt_improve(&mut tour, &dm, usize::MAX).expect("searchable");
        prop_assert!(outcome.converged);
        prop_assert!(tour.is_consistent());
        prop_assert!(tour.length(&dm) <= before + 1e-9);
        if outcome.moves > 0 {
            prop_assert!(tour.length(&dm) < before);
        }

        let again = two_opt_improve(&mut tour, &dm, usize::MAX).expect("searchable");
        prop_assert_eq!(again.moves, 0);
    }

    #[test]
    fn neighbor_two_opt_never_lengthens((dm, order) in instance(4, 30), k in 0usize..10) {
        let neighbors = NeighborList::new(&dm);
        let mut tour = Tour::new(order).expect("permutation");
        let before = tour.length(&dm);
        let outcome =
            neighbor_two_opt_improve(&mut tour, &dm, &neighbors, k, usize::MAX).expect("valid");
        prop_assert!(outcome.converged);
        prop_assert!(tour.is_consistent());
        prop_assert!(tour.length(&dm) <= before + 1e-9);

        let again =
            neighbor_two_opt_improve(&mut tour, &dm, &neighbors, k, usize::MAX).expect("valid");
        prop_assert_eq!(again.moves, 0);
    }

    #[test]
    fn two_opt_optimum_has_no_neighbor_moves((dm, order) in instance(4, 25), k in 1usize..8) {
        let neighbors = NeighborList::new(&dm);
        let mut tour = Tour::new(order).expect("permutation");
        two_opt_improve(&mut tour, &dm, usize::MAX).expect("searchable");
        let outcome =
            neighbor_two_opt_improve(&mut tour, &dm, &neighbors, k, usize::MAX).expect("valid");
        prop_assert_eq!(outcome.moves, 0);
    }

    #[test]
    fn budget_caps_moves((dm, order) in instance(4, 30), budget in 0usize..4) {
        let mut tour = Tour::new(order).expect("permutation");
        let outcome = two_opt_improve(&mut tour, &dm, budget).expect("searchable");
        prop_assert!(outcome.moves <= budget);
        if !outcome.converged {
            prop_assert_eq!(outcome.moves, budget);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn three_opt_never_lengthens_and_converges((dm, order) in instance(4, 14)) {
        let mut tour = Tour::new(order).expect("permutation");
        let before = tour.length(&dm);
        let outcome = three_opt_improve(&mut tour, &dm, usize::MAX).expect("searchable");
        prop_assert!(outcome.converged);
        prop_assert!(tour.is_consistent());
        prop_assert!(tour.length(&dm) <= before + 1e-9);

        let again = three_opt_improve(&mut tour, &dm, usize::MAX).expect("searchable");
        prop_assert_eq!(again.moves, 0);
    }
}

use proptest::prelude::*;
use u_tsp::distance::DistanceMatrix;
use u_tsp::models::{City, Tour};

fn permutation(max: usize) -> impl Strategy<Value = Vec<usize>> {
    (1..=max).prop_flat_map(|n| Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
}

fn points(n: usize) -> impl Strategy<Value = Vec<City>> {
    prop::collection::vec((0i32..200, 0i32..200), n).prop_map(|coords| {
        coords
            .into_iter()
            .enumerate()
            .map(|(id, (x, y))| City::new(id, x as f64, y as f64))
            .collect()
    })
}

fn instance(max: usize) -> impl Strategy<Value = (Vec<City>, Vec<usize>)> {
    permutation(max).prop_flat_map(|order| (points(order.len()), Just(order)))
}

#[derive(Debug, Clone)]
enum Edit {
    Swap(usize, usize),
    Reverse(usize, usize),
}

fn edits() -> impl Strategy<Value = Vec<Edit>> {
    prop::collection::vec(
        prop_oneof![
            (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Edit::Swap(a, b)),
            (any::<usize>(), any::<usize>()).prop_map(|(a, b)| Edit::Reverse(a, b)),
        ],
        0..40,
    )
}

proptest! {
    #[test]
    fn index_stays_inverse_of_order(order in permutation(30), edits in edits()) {
        let n = order.len();
        let mut tour = Tour::new(order).expect("permutation");
        for edit in edits {
            match edit {
                Edit::Swap(a, b) => tour.swap(a % n, b % n).expect("in range"),
                Edit::Reverse(a, b) => tour.reverse_segment(a % n, b % n).expect("in range"),
            }
            prop_assert!(tour.is_consistent());
        }
        for pos in 0..n {
            let city = tour.city_at(pos).expect("in range");
            prop_assert_eq!(tour.index_of(city).expect("in range"), pos);
        }
    }

    #[test]
    fn reversing_a_segment_twice_restores_the_tour(
        order in permutation(30),
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let n = order.len();
        let original = Tour::new(order).expect("permutation");
        let mut tour = original.clone();
        tour.reverse_segment(a % n, b % n).expect("in range");
        tour.reverse_segment(a % n, b % n).expect("in range");
        prop_assert_eq!(tour, original);
    }

    #[test]
    fn length_ignores_rotation_and_direction((cities, order) in instance(25), shift in any::<usize>()) {
        let dm = DistanceMatrix::from_cities(&cities);
        let n = order.len();
        let tour = Tour::new(order.clone()).expect("permutation");

        let mut rotated = order.clone();
        rotated.rotate_left(shift % n);
        let rotated = Tour::new(rotated).expect("permutation");

        let mut reversed = order;
        reversed.reverse();
        let reversed = Tour::new(reversed).expect("permutation");

        prop_assert!((tour.length(&dm) - rotated.length(&dm)).abs() < 1e-9);
        prop_assert!((tour.length(&dm) - reversed.length(&dm)).abs() < 1e-9);
    }

    #[test]
    fn successor_array_round_trip((cities, order) in instance(25)) {
        let dm = DistanceMatrix::from_cities(&cities);
        let n = order.len();
        let mut next = vec![0; n];
        for k in 0..n {
            next[order[k]] = order[(k + 1) % n];
        }
        let original = Tour::new(order).expect("permutation");
        let rebuilt = Tour::from_successors(&next).expect("single cycle");
        prop_assert_eq!(rebuilt.city_at(0).expect("in range"), 0);
        prop_assert!(rebuilt.is_consistent());
        prop_assert!((rebuilt.length(&dm) - original.length(&dm)).abs() < 1e-9);
    }

    #[test]
    fn out_of_range_positions_are_rejected(order in permutation(20), extra in 0usize..5) {
        let n = order.len();
        let mut tour = Tour::new(order).expect("permutation");
        prop_assert!(tour.city_at(n + extra).is_err());
        prop_assert!(tour.index_of(n + extra).is_err());
        prop_assert!(tour.swap(0, n + extra).is_err());
        prop_assert!(tour.reverse_segment(n + extra, 0).is_err());
        prop_assert!(tour.is_consistent());
    }
}

//! Property-based tests for the planning stages.
//!
//! # Invariants tested
//!
//! - **Budget compliance:** selections never exceed either limit.
//! - **Optimality:** small selections match an exhaustive search.
//! - **Monotonicity:** a larger budget never lowers the selected benefit.
//! - **Packing:** days stay within capacity and closing hours, and no
//!   attraction is scheduled twice.
//! - **Routing:** a route plus its unreachable stops is a permutation of the
//!   day, starting at the first attraction.


use std::collections::HashSet;

use geo::Coord;
use proptest::prelude::*;
use tripwise_core::geodesic::haversine_km;
use tripwise_core::{Budget, DistanceTable, PrioritySet};
use tripwise_planner::{build_route, pack_days, select_attractions};

use proptest_support::{
    attractions, brute_force_benefit, profiles, same_distance, visits_end_before_closing,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Property: the selection stays within both limits.
    #[test]
    fn selection_respects_budget(
        items in profiles(0, 12),
        max_hours in 0_u32..=12,
        max_spend in 0_u32..=200,
    ) {
        let selection = select_attractions(
            &attractions(&items),
            Budget::new(max_hours, max_spend),
            &PrioritySet::new(),
        );
        prop_assert!(selection.total_hours <= f64::from(max_hours));
        prop_assert!(selection.total_cost <= f64::from(max_spend));
    }

    /// Property: with no priorities the selector finds the best subset.
    #[test]
    fn selection_is_optimal(
        items in profiles(0, 8),
        max_hours in 0_u32..=8,
        max_spend in 0_u32..=120,
    ) {
        let selection = select_attractions(
            &attractions(&items),
            Budget::new(max_hours, max_spend),
            &PrioritySet::new(),
        );
        let best = brute_force_benefit(&items, max_hours, max_spend);
        prop_assert_eq!(selection.total_benefit, f64::from(best));
    }

    /// Property: selected ids keep input order and never repeat.
    #[test]
    fn selection_keeps_input_order(
        items in profiles(0, 12),
        max_hours in 0_u32..=12,
        max_spend in 0_u32..=200,
        boosted in proptest::collection::hash_set(1_u64..=12, 0..4),
    ) {
        let prioritized: PrioritySet = boosted.into_iter().collect();
        let selection = select_attractions(
            &attractions(&items),
            Budget::new(max_hours, max_spend),
            &prioritized,
        );
        let ids = selection.ids();
        prop_assert!(ids.windows(2).all(|pair| matches!(pair, [a, b] if a < b)));
    }

    /// Property: raising either limit never lowers the selected benefit.
    #[test]
    fn larger_budget_never_lowers_benefit(
        items in profiles(0, 10),
        max_hours in 0_u32..=8,
        max_spend in 0_u32..=150,
        extra_hours in 0_u32..=4,
        extra_spend in 0_u32..=50,
    ) {
        let candidates = attractions(&items);
        let small = select_attractions(
            &candidates,
            Budget::new(max_hours, max_spend),
            &PrioritySet::new(),
        );
        let large = select_attractions(
            &candidates,
            Budget::new(max_hours + extra_hours, max_spend + extra_spend),
            &PrioritySet::new(),
        );
        prop_assert!(large.total_benefit >= small.total_benefit);
    }

    /// Property: packed days respect capacity and closing hours, and every
    /// scheduled attraction was selected exactly once.
    #[test]
    fn packing_respects_days_and_closing(
        items in profiles(0, 12),
        daily_hours in proptest::collection::vec(1_u32..=8, 1..=4),
    ) {
        let selected = attractions(&items);
        let days = pack_days(&selected, &daily_hours);

        let mut seen = HashSet::new();
        let mut last_day = 0;
        for slot in &days {
            prop_assert!(!slot.is_empty());
            prop_assert!(slot.day > last_day);
            last_day = slot.day;
            prop_assert!(slot.time_used <= slot.capacity_hours);
            prop_assert!(visits_end_before_closing(slot));
            for attraction in &slot.attractions {
                prop_assert!(seen.insert(attraction.id));
            }
        }
        prop_assert!(seen.len() <= selected.len());
    }

    /// Property: a route visits each reachable stop once, starting with the
    /// first attraction, and reports the rest as unreachable.
    #[test]
    fn route_is_a_permutation_of_the_day(
        items in profiles(1, 8),
        legs in proptest::collection::vec((1_u64..=8, 1_u64..=8, 1_u32..=30), 0..20),
    ) {
        let day = attractions(&items);
        let table = legs
            .into_iter()
            .filter(|(from, to, _)| from != to)
            .fold(DistanceTable::new(), |table, (from, to, minutes)| {
                table.with_symmetric_leg(from, to, f64::from(minutes), 0.0)
            });
        let route = build_route(&day, &table);

        prop_assert_eq!(route.stops.first().map(|stop| stop.id), Some(1));
        prop_assert_eq!(
            route.leg_distances_km.len(),
            route.stops.len().saturating_sub(1)
        );
        let mut ids = route.stop_ids();
        ids.extend(&route.unreachable);
        ids.sort_unstable();
        let expected: Vec<u64> = day.iter().map(|stop| stop.id).collect();
        prop_assert_eq!(ids, expected);
        prop_assert_eq!(route.total_travel_cost, 0.0);
    }

    /// Property: great-circle distance is symmetric and never negative.
    #[test]
    fn haversine_is_symmetric(
        lat_a in -80.0_f64..80.0,
        lng_a in -179.0_f64..179.0,
        lat_b in -80.0_f64..80.0,
        lng_b in -179.0_f64..179.0,
    ) {
        let a = Coord { x: lng_a, y: lat_a };
        let b = Coord { x: lng_b, y: lat_b };
        let forward = haversine_km(a, b);
        prop_assert!(forward >= 0.0);
        prop_assert!(same_distance(forward, haversine_km(b, a)));
    }
}

//! Nearest-neighbour ordering of a single day's attractions.

use tripwise_core::geodesic::leg_distance_km;
use tripwise_core::{Attraction, DayRoute, DistanceTable};

/// Order one day's attractions by repeatedly moving to the closest stop.
///
/// The walk starts at the first attraction as given. Each step moves to the
/// unvisited attraction with the smallest table travel time from the current
/// one; the first candidate in input order wins ties. Pairs missing from the
/// table are unreachable, and when no remaining attraction is reachable the
/// walk stops and the rest are reported in [`DayRoute::unreachable`].
///
/// Travel minutes come from the table while distances are great-circle
/// kilometres between coordinates, rounded to 0.1 km per leg. Travel cost is
/// always reported as zero. This is a heuristic: it does not guarantee the
/// shortest tour.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::{Attraction, DistanceTable};
/// use tripwise_planner::build_route;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let stops = vec![
///     Attraction::new(1, "A", origin),
///     Attraction::new(2, "B", origin),
///     Attraction::new(3, "C", origin),
/// ];
/// let table = DistanceTable::new()
///     .with_symmetric_leg(1, 2, 10.0, 0.0)
///     .with_symmetric_leg(1, 3, 4.0, 0.0)
///     .with_symmetric_leg(2, 3, 6.0, 0.0);
/// let route = build_route(&stops, &table);
/// assert_eq!(route.stop_ids(), vec![1, 3, 2]);
/// assert_eq!(route.total_travel_minutes, 10.0);
/// ```
#[must_use]
pub fn build_route(attractions: &[Attraction], table: &DistanceTable) -> DayRoute {
    let Some(first) = attractions.first() else {
        return DayRoute::default();
    };
    if attractions.len() == 1 {
        return DayRoute::unrouted(attractions.to_vec());
    }

    let mut walk = Walk::start(attractions.len(), first);
    let mut current = first;
    walk.mark_visited(0);

    while let Some((index, next, minutes)) = walk.nearest(attractions, current, table) {
        walk.mark_visited(index);
        walk.push_leg(current, next, minutes);
        current = next;
    }

    walk.finish(attractions)
}

/// Mutable state of one nearest-neighbour walk.
struct Walk {
    visited: Vec<bool>,
    route: DayRoute,
}

impl Walk {
    fn start(len: usize, first: &Attraction) -> Self {
        let mut route = DayRoute::default();
        route.stops.reserve(len);
        route.leg_distances_km.reserve(len.saturating_sub(1));
        route.stops.push(first.clone());
        Self {
            visited: vec![false; len],
            route,
        }
    }

    fn mark_visited(&mut self, index: usize) {
        if let Some(flag) = self.visited.get_mut(index) {
            *flag = true;
        }
    }

    fn is_visited(&self, index: usize) -> bool {
        self.visited.get(index).copied().unwrap_or(true)
    }

    /// Closest unvisited attraction from `current`, with its travel minutes.
    fn nearest<'a>(
        &self,
        attractions: &'a [Attraction],
        current: &Attraction,
        table: &DistanceTable,
    ) -> Option<(usize, &'a Attraction, f64)> {
        let mut best: Option<(usize, &'a Attraction, f64)> = None;
        for (index, candidate) in attractions.iter().enumerate() {
            if self.is_visited(index) {
                continue;
            }
            let minutes = table
                .travel_time(current.id, candidate.id)
                .unwrap_or(f64::INFINITY);
            let closer = best.is_none_or(|(_, _, best_minutes)| minutes < best_minutes);
            if minutes < f64::INFINITY && closer {
                best = Some((index, candidate, minutes));
            }
        }
        best
    }

    #[expect(
        clippy::float_arithmetic,
        reason = "travel minutes and kilometres accumulate as floating-point totals"
    )]
    fn push_leg(&mut self, from: &Attraction, to: &Attraction, minutes: f64) {
        let distance = leg_distance_km(from.location, to.location);
        self.route.total_travel_minutes += minutes;
        self.route.total_distance_km += distance;
        self.route.leg_distances_km.push(distance);
        self.route.stops.push(to.clone());
    }

    fn finish(mut self, attractions: &[Attraction]) -> DayRoute {
        self.route.unreachable = attractions
            .iter()
            .enumerate()
            .filter(|(index, _)| !self.is_visited(*index))
            .map(|(_, attraction)| attraction.id)
            .collect();
        if !self.route.unreachable.is_empty() {
            log::warn!(
                "route walk stopped early; unreachable attractions: {:?}",
                self.route.unreachable
            );
        }
        self.route.total_travel_cost = 0.0;
        self.route
    }
}

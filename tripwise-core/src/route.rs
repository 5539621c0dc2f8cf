//! Ordered visiting sequences for a single day.

use crate::Attraction;

/// The order in which one day's attractions are visited, with travel metrics.
///
/// Travel cost is carried for forward compatibility but is always reported
/// as zero.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::{Attraction, DayRoute};
///
/// let stop = Attraction::new(1, "Tower", Coord { x: 0.0, y: 0.0 });
/// let route = DayRoute::unrouted(vec![stop]);
/// assert_eq!(route.stops.len(), 1);
/// assert_eq!(route.total_distance_km, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayRoute {
    /// Attractions in visiting order.
    pub stops: Vec<Attraction>,
    /// Sum of table travel times between consecutive stops, in minutes.
    pub total_travel_minutes: f64,
    /// Sum of travel costs. Always zero.
    pub total_travel_cost: f64,
    /// Sum of the rounded per-leg great-circle distances, in kilometres.
    pub total_distance_km: f64,
    /// Great-circle distance of each leg, rounded to 0.1 km.
    pub leg_distances_km: Vec<f64>,
    /// Identifiers left out because no remaining leg reached them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub unreachable: Vec<u64>,
}

impl DayRoute {
    /// A route that keeps `stops` in their given order with no travel.
    pub fn unrouted(stops: Vec<Attraction>) -> Self {
        Self {
            stops,
            ..Self::default()
        }
    }

    /// Identifiers of the stops, in visiting order.
    pub fn stop_ids(&self) -> Vec<u64> {
        self.stops.iter().map(|stop| stop.id).collect()
    }
}

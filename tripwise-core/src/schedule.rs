//! Per-day slots filled by the day packer.

use crate::Attraction;

/// Hour of the day at which every itinerary day starts.
pub const DAY_START_HOUR: f64 = 9.0;

/// One day of the trip and the attractions assigned to it.
///
/// Slots are created empty from the caller's per-day hours, filled during
/// packing and treated as read-only afterwards.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::{Attraction, DaySlot};
///
/// let mut slot = DaySlot::new(1, 4);
/// let park = Attraction::new(1, "Park", Coord { x: 0.0, y: 0.0 })
///     .with_visit(1.5, 0.0)
///     .with_opening_hours(6, 18);
/// assert!(slot.accepts(&park));
/// slot.assign(park);
/// assert_eq!(slot.time_used, 1.5);
/// assert_eq!(slot.remaining_hours(), 2.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DaySlot {
    /// One-based day index.
    pub day: u32,
    /// Visiting hours available on this day.
    pub capacity_hours: f64,
    /// Attractions assigned, in assignment order.
    pub attractions: Vec<Attraction>,
    /// Visiting hours consumed so far.
    pub time_used: f64,
    /// Entry spend consumed so far. Travel costs are not included.
    pub cost_used: f64,
}

impl DaySlot {
    /// Construct an empty slot.
    pub fn new(day: u32, capacity_hours: u32) -> Self {
        Self {
            day,
            capacity_hours: f64::from(capacity_hours),
            attractions: Vec::new(),
            time_used: 0.0,
            cost_used: 0.0,
        }
    }

    /// Hours still free on this day.
    pub fn remaining_hours(&self) -> f64 {
        self.capacity_hours - self.time_used
    }

    /// Whether `attraction` fits both the remaining capacity and its own
    /// closing hour, given the fixed day start.
    pub fn accepts(&self, attraction: &Attraction) -> bool {
        let time_after_visit = self.time_used + attraction.visit_hours;
        time_after_visit <= self.capacity_hours
            && DAY_START_HOUR + time_after_visit <= f64::from(attraction.closes)
    }

    /// Append `attraction` and account for its time and price.
    ///
    /// Callers check [`DaySlot::accepts`] first.
    pub fn assign(&mut self, attraction: Attraction) {
        self.time_used += attraction.visit_hours;
        self.cost_used += attraction.entry_price;
        self.attractions.push(attraction);
    }

    /// Whether nothing was assigned.
    pub fn is_empty(&self) -> bool {
        self.attractions.is_empty()
    }
}

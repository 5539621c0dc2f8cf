//! Greedy first-fit assignment of selected attractions to trip days.

use std::cmp::Ordering;

use tripwise_core::{Attraction, DaySlot};

/// Spread `selected` across days with the given visiting hours.
///
/// Attractions are placed in order of closing hour, earliest first, with
/// longer visits ahead of shorter ones that close at the same hour. Each goes
/// to the first day, in day order, with enough free hours that also lets the
/// visit end by closing time when the day starts at 09:00. Attractions that
/// fit no day are dropped. Only days that received an attraction are
/// returned.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::Attraction;
/// use tripwise_planner::pack_days;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let selected = vec![
///     Attraction::new(1, "Market", origin).with_visit(1.0, 0.0).with_opening_hours(8, 11),
///     Attraction::new(2, "Fort", origin).with_visit(3.0, 0.0).with_opening_hours(8, 11),
/// ];
/// let days = pack_days(&selected, &[2]);
/// assert_eq!(days.len(), 1);
/// assert_eq!(days[0].attractions[0].id, 1);
/// ```
#[must_use]
pub fn pack_days(selected: &[Attraction], daily_hours: &[u32]) -> Vec<DaySlot> {
    let mut slots: Vec<DaySlot> = (1_u32..)
        .zip(daily_hours)
        .map(|(day, hours)| DaySlot::new(day, *hours))
        .collect();

    let mut ordered: Vec<&Attraction> = selected.iter().collect();
    ordered.sort_by(|lhs, rhs| packing_order(lhs, rhs));

    for attraction in ordered {
        match slots.iter_mut().find(|slot| slot.accepts(attraction)) {
            Some(slot) => slot.assign(attraction.clone()),
            None => log::debug!(
                "attraction {} ({} h, closes {}) fits no day; dropping it",
                attraction.id,
                attraction.visit_hours,
                attraction.closes
            ),
        }
    }

    slots.retain(|slot| !slot.is_empty());
    slots
}

fn packing_order(lhs: &Attraction, rhs: &Attraction) -> Ordering {
    lhs.closes
        .cmp(&rhs.closes)
        .then_with(|| rhs.visit_hours.total_cmp(&lhs.visit_hours))
}

//! Test-only fixtures shared by unit, behaviour and property tests.

use geo::Coord;

use crate::{Attraction, DistanceTable, DistanceTableError, DistanceTableProvider, TravelMode};

/// Attraction at the origin, open all day, with the given visit profile.
pub fn attraction(id: u64, hours: f64, price: f64, benefit: f64) -> Attraction {
    Attraction::new(id, format!("Attraction {id}"), Coord { x: 0.0, y: 0.0 })
        .with_visit(hours, price)
        .with_benefit(benefit)
}

/// Attraction at a given latitude and longitude with a one-hour visit.
pub fn located(id: u64, lat: f64, lng: f64) -> Attraction {
    Attraction::new(id, format!("Attraction {id}"), Coord { x: lng, y: lat })
        .with_visit(1.0, 0.0)
        .with_benefit(1.0)
}

/// Driving minutes between sixteen sample attractions, authored one way and
/// mirrored. Attraction 16 is unreachable.
pub fn sample_distance_table() -> DistanceTable {
    const LEGS: &[(u64, u64, f64)] = &[
        (1, 2, 5.0),
        (1, 3, 2.0),
        (1, 4, 3.0),
        (1, 8, 5.0),
        (1, 10, 15.0),
        (1, 12, 12.0),
        (2, 3, 4.0),
        (2, 4, 5.0),
        (2, 8, 2.0),
        (2, 10, 12.0),
        (2, 12, 10.0),
        (3, 4, 1.0),
        (3, 8, 4.0),
        (3, 10, 16.0),
        (3, 12, 13.0),
        (4, 8, 5.0),
        (4, 10, 17.0),
        (4, 12, 14.0),
        (5, 9, 5.0),
        (5, 13, 8.0),
        (6, 7, 10.0),
        (6, 10, 8.0),
        (6, 12, 10.0),
        (7, 10, 5.0),
        (7, 12, 8.0),
        (8, 10, 10.0),
        (8, 12, 8.0),
        (9, 13, 10.0),
        (10, 12, 5.0),
        (11, 13, 20.0),
        (14, 12, 5.0),
        (14, 15, 10.0),
    ];
    LEGS.iter()
        .fold(DistanceTable::new(), |table, (from, to, minutes)| {
            table.with_leg(*from, *to, *minutes, 0.0)
        })
        .symmetrized()
}

/// Provider returning the same table for every travel mode.
#[derive(Debug, Clone, Default)]
pub struct StaticDistanceProvider {
    table: DistanceTable,
}

impl StaticDistanceProvider {
    /// Wrap `table`.
    pub const fn new(table: DistanceTable) -> Self {
        Self { table }
    }
}

impl DistanceTableProvider for StaticDistanceProvider {
    fn distance_table(&self, _mode: TravelMode) -> Result<DistanceTable, DistanceTableError> {
        Ok(self.table.clone())
    }
}

/// Provider that never has a table.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingDistanceProvider;

impl DistanceTableProvider for FailingDistanceProvider {
    fn distance_table(&self, mode: TravelMode) -> Result<DistanceTable, DistanceTableError> {
        Err(DistanceTableError::Unavailable { mode })
    }
}

//! Pairwise travel tables between attractions.
//!
//! A [`DistanceTable`] holds precomputed travel times (minutes) and travel
//! costs keyed by attraction identifier. Lookups are directional; a missing
//! entry means the destination is unreachable from the origin. Tables are
//! supplied per [`TravelMode`] through a [`DistanceTableProvider`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// How the traveller moves between attractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TravelMode {
    /// Travel by car.
    #[default]
    Driving,
    /// Travel on foot.
    Walking,
}

impl TravelMode {
    /// Lowercase name used in configuration and URLs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Driving => "driving",
            Self::Walking => "walking",
        }
    }
}

impl fmt::Display for TravelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown [`TravelMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown travel mode {0:?} (expected \"driving\" or \"walking\")")]
pub struct ParseTravelModeError(pub String);

impl FromStr for TravelMode {
    type Err = ParseTravelModeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "driving" => Ok(Self::Driving),
            "walking" => Ok(Self::Walking),
            _ => Err(ParseTravelModeError(value.to_owned())),
        }
    }
}

type Matrix = HashMap<u64, HashMap<u64, f64>>;

/// Directional travel times and costs between attractions.
///
/// # Examples
/// ```
/// use tripwise_core::DistanceTable;
///
/// let table = DistanceTable::new().with_symmetric_leg(1, 2, 12.0, 3.5);
/// assert_eq!(table.travel_time(2, 1), Some(12.0));
/// assert_eq!(table.travel_cost(1, 2), Some(3.5));
/// assert_eq!(table.travel_time(1, 3), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceTable {
    /// Travel time in minutes, keyed `times[from][to]`.
    #[cfg_attr(feature = "serde", serde(default))]
    times: Matrix,
    /// Travel cost in currency units, keyed `costs[from][to]`.
    #[cfg_attr(feature = "serde", serde(default))]
    costs: Matrix,
}

impl DistanceTable {
    /// Construct an empty table where nothing is reachable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a one-way leg.
    pub fn insert(&mut self, from: u64, to: u64, minutes: f64, cost: f64) {
        self.times.entry(from).or_default().insert(to, minutes);
        self.costs.entry(from).or_default().insert(to, cost);
    }

    /// Record a one-way leg, returning the updated table.
    #[must_use]
    pub fn with_leg(mut self, from: u64, to: u64, minutes: f64, cost: f64) -> Self {
        self.insert(from, to, minutes, cost);
        self
    }

    /// Record a leg in both directions, returning the updated table.
    #[must_use]
    pub fn with_symmetric_leg(mut self, a: u64, b: u64, minutes: f64, cost: f64) -> Self {
        self.insert(a, b, minutes, cost);
        self.insert(b, a, minutes, cost);
        self
    }

    /// Travel time in minutes from `from` to `to`, if reachable.
    pub fn travel_time(&self, from: u64, to: u64) -> Option<f64> {
        lookup(&self.times, from, to)
    }

    /// Travel cost from `from` to `to`, if recorded.
    pub fn travel_cost(&self, from: u64, to: u64) -> Option<f64> {
        lookup(&self.costs, from, to)
    }

    /// Whether no legs are recorded.
    pub fn is_empty(&self) -> bool {
        self.times.values().all(HashMap::is_empty) && self.costs.values().all(HashMap::is_empty)
    }

    /// Make every leg symmetric.
    ///
    /// Reference tables are usually authored in one direction only. Legs are
    /// mirrored in ascending `(from, to)` order, each copy overwriting the
    /// reverse entry, so when both directions of a pair are recorded the
    /// value leaving the lower identifier ends up on both sides.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::DistanceTable;
    ///
    /// let table = DistanceTable::new()
    ///     .with_leg(1, 2, 5.0, 0.0)
    ///     .with_leg(2, 3, 7.0, 0.0)
    ///     .with_leg(3, 2, 9.0, 0.0)
    ///     .symmetrized();
    /// assert_eq!(table.travel_time(2, 1), Some(5.0));
    /// assert_eq!(table.travel_time(3, 2), Some(7.0));
    /// ```
    #[must_use]
    pub fn symmetrized(mut self) -> Self {
        mirror(&mut self.times);
        mirror(&mut self.costs);
        self
    }
}

fn lookup(matrix: &Matrix, from: u64, to: u64) -> Option<f64> {
    matrix.get(&from).and_then(|row| row.get(&to)).copied()
}

fn mirror(matrix: &mut Matrix) {
    let mut legs: Vec<(u64, u64)> = matrix
        .iter()
        .flat_map(|(from, row)| row.keys().map(move |to| (*from, *to)))
        .collect();
    legs.sort_unstable();
    for (from, to) in legs {
        // Read the live value: an earlier copy may already have replaced it.
        if let Some(value) = lookup(matrix, from, to) {
            matrix.entry(to).or_default().insert(from, value);
        }
    }
}

/// Errors from [`DistanceTableProvider::distance_table`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DistanceTableError {
    /// The provider has no table for the requested mode.
    #[error("no distance table is available for {mode} travel")]
    Unavailable {
        /// Requested travel mode.
        mode: TravelMode,
    },
}

/// Supply the travel table for a given mode.
///
/// Planners consume the returned table read-only.
///
/// # Examples
/// ```
/// use tripwise_core::{DistanceTable, DistanceTableError, DistanceTableProvider, TravelMode};
///
/// struct DrivingOnly(DistanceTable);
///
/// impl DistanceTableProvider for DrivingOnly {
///     fn distance_table(&self, mode: TravelMode) -> Result<DistanceTable, DistanceTableError> {
///         match mode {
///             TravelMode::Driving => Ok(self.0.clone()),
///             TravelMode::Walking => Err(DistanceTableError::Unavailable { mode }),
///         }
///     }
/// }
///
/// let provider = DrivingOnly(DistanceTable::new());
/// assert!(provider.distance_table(TravelMode::Walking).is_err());
/// ```
pub trait DistanceTableProvider {
    /// Return the table for `mode`.
    fn distance_table(&self, mode: TravelMode) -> Result<DistanceTable, DistanceTableError>;
}

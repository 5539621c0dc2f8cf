//! Trip planning requests, responses and the planner seam.

use std::collections::HashSet;

use thiserror::Error;

use crate::{
    Attraction, AttractionError, Budget, DayRoute, DaySlot, DistanceTableError, PrioritySet,
    Selection, TravelMode,
};

/// Parameters for a planning run.
///
/// The time budget defaults to the sum of `daily_hours` when `max_hours` is
/// not set.
///
/// # Examples
/// ```
/// use tripwise_core::{Budget, PlanRequest};
///
/// let request = PlanRequest::new(Vec::new(), vec![8, 6], 250);
/// assert_eq!(request.budget(), Budget::new(14, 250));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Candidate attractions in caller order.
    pub attractions: Vec<Attraction>,
    /// Visiting hours available on each day, day 1 first.
    pub daily_hours: Vec<u32>,
    /// Maximum entry spend for the whole trip.
    pub max_spend: u32,
    /// Explicit trip-wide visiting-hour limit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_hours: Option<u32>,
    /// Attractions to favour.
    #[cfg_attr(feature = "serde", serde(default))]
    pub prioritized: PrioritySet,
    /// Travel mode used to pick the distance table.
    #[cfg_attr(feature = "serde", serde(default))]
    pub travel_mode: TravelMode,
}

/// Detailed validation failures for [`PlanRequest`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanRequestValidationError {
    /// The trip has no days.
    #[error("at least one day is required")]
    NoDays,
    /// A day has no visiting hours.
    #[error("day {day} has zero visiting hours")]
    EmptyDay {
        /// One-based day index.
        day: usize,
    },
    /// Two candidates share an identifier.
    #[error("attraction id {id} appears more than once")]
    DuplicateAttraction {
        /// Repeated identifier.
        id: u64,
    },
    /// A candidate record is malformed.
    #[error("attraction {id} is invalid: {source}")]
    InvalidAttraction {
        /// Identifier of the rejected attraction.
        id: u64,
        /// Underlying validation failure.
        #[source]
        source: AttractionError,
    },
}

impl PlanRequest {
    /// Construct a request with no priorities and the default travel mode.
    pub fn new(attractions: Vec<Attraction>, daily_hours: Vec<u32>, max_spend: u32) -> Self {
        Self {
            attractions,
            daily_hours,
            max_spend,
            ..Self::default()
        }
    }

    /// Set the favoured attractions.
    #[must_use]
    pub fn with_priorities(mut self, prioritized: PrioritySet) -> Self {
        self.prioritized = prioritized;
        self
    }

    /// Set the travel mode.
    #[must_use]
    pub const fn with_travel_mode(mut self, travel_mode: TravelMode) -> Self {
        self.travel_mode = travel_mode;
        self
    }

    /// Override the trip-wide visiting-hour limit.
    #[must_use]
    pub const fn with_max_hours(mut self, max_hours: u32) -> Self {
        self.max_hours = Some(max_hours);
        self
    }

    /// The budget handed to the selector.
    pub fn budget(&self) -> Budget {
        let day_total = self
            .daily_hours
            .iter()
            .fold(0_u32, |acc, hours| acc.saturating_add(*hours));
        Budget::new(self.max_hours.unwrap_or(day_total), self.max_spend)
    }

    /// Validate the request, reporting the first problem found.
    ///
    /// # Examples
    /// ```
    /// use tripwise_core::{PlanRequest, PlanRequestValidationError};
    ///
    /// let request = PlanRequest::new(Vec::new(), Vec::new(), 100);
    /// assert_eq!(
    ///     request.validate_detailed(),
    ///     Err(PlanRequestValidationError::NoDays)
    /// );
    /// ```
    pub fn validate_detailed(&self) -> Result<(), PlanRequestValidationError> {
        if self.daily_hours.is_empty() {
            return Err(PlanRequestValidationError::NoDays);
        }
        if let Some(index) = self.daily_hours.iter().position(|hours| *hours == 0) {
            return Err(PlanRequestValidationError::EmptyDay { day: index + 1 });
        }
        let mut seen = HashSet::with_capacity(self.attractions.len());
        for attraction in &self.attractions {
            if !seen.insert(attraction.id) {
                return Err(PlanRequestValidationError::DuplicateAttraction { id: attraction.id });
            }
            attraction
                .validate()
                .map_err(|source| PlanRequestValidationError::InvalidAttraction {
                    id: attraction.id,
                    source,
                })?;
        }
        Ok(())
    }

    /// Validate the request, collapsing details into [`PlanError`].
    pub fn validate(&self) -> Result<(), PlanError> {
        self.validate_detailed().map_err(PlanError::InvalidRequest)
    }
}

/// One packed day together with its visiting order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayPlan {
    /// Attractions assigned to the day, in packing order.
    pub slot: DaySlot,
    /// The same attractions in visiting order.
    pub route: DayRoute,
}

/// Trip-wide aggregates.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripSummary {
    /// Original benefit of every selected attraction.
    pub total_benefit: f64,
    /// Visiting hours of the scheduled attractions.
    pub total_hours: f64,
    /// Entry spend of the scheduled attractions.
    pub total_cost: f64,
    /// Travel minutes over all day routes.
    pub total_travel_minutes: f64,
    /// Travel cost over all day routes. Always zero.
    pub total_travel_cost: f64,
    /// Great-circle kilometres over all day routes.
    pub total_distance_km: f64,
    /// Number of attractions the selector chose.
    pub selected_count: usize,
    /// Number of attractions that landed on a day.
    pub scheduled_count: usize,
}

/// Result of a successful planning run.
///
/// Plain data so callers can persist and restore it verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResponse {
    /// Selector output before day packing.
    pub selection: Selection,
    /// Days that received at least one attraction.
    pub days: Vec<DayPlan>,
    /// Trip-wide aggregates.
    pub summary: TripSummary,
}

impl PlanResponse {
    /// Whether no attraction was scheduled.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Errors returned by [`Planner::plan`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    /// Request parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(#[source] PlanRequestValidationError),
    /// The selector's search table would exceed the configured limit.
    #[error("search table of {cells} cells exceeds the limit of {limit}")]
    SearchSpaceTooLarge {
        /// Cells the request would need.
        cells: u128,
        /// Configured cell limit.
        limit: u128,
    },
    /// No travel table was available for the requested mode.
    #[error(transparent)]
    DistanceTable(#[from] DistanceTableError),
}

/// Produce an itinerary satisfying the caller's budget and days.
///
/// Implementations return [`PlanError::InvalidRequest`] for invalid
/// parameters rather than panicking. Planners must be `Send + Sync` so
/// independent requests can be planned concurrently.
pub trait Planner: Send + Sync {
    /// Plan a trip, producing per-day routes or an error.
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError>;
}

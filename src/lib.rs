//! Facade crate for the Tripwise itinerary planner.
//!
//! This crate re-exports the core domain types and exposes the planning
//! engine behind the `planner` feature flag.

#![forbid(unsafe_code)]

pub use tripwise_core::{
    Attraction, AttractionError, Budget, CityData, CityDistances, DayPlan, DayRoute, DaySlot,
    DistanceTable, DistanceTableError, DistanceTableProvider, PlanError, PlanRequest,
    PlanRequestValidationError, PlanResponse, Planner, PrioritySet, Restaurant, Selection,
    TravelMode, TripPreferences, TripSummary,
};

#[cfg(feature = "planner")]
pub use tripwise_planner::{
    ItineraryPlanner, PlannerConfig, build_route, pack_days, select_attractions,
};

//! Core domain types for the Tripwise itinerary planner.
//!
//! The crate models candidate attractions, trip budgets, travel tables and
//! the per-day results of planning. Constructors and `validate` methods
//! surface invalid input early so the planning algorithms only ever see
//! well-formed records.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod attraction;
pub mod budget;
pub mod city;
pub mod distance;
pub mod geodesic;
pub mod plan;
pub mod priority;
pub mod restaurant;
pub mod route;
pub mod schedule;
pub mod selection;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use attraction::{Attraction, AttractionError};
pub use budget::Budget;
pub use city::{CityData, CityDistances, TripPreferences};
pub use distance::{
    DistanceTable, DistanceTableError, DistanceTableProvider, ParseTravelModeError, TravelMode,
};
pub use plan::{
    DayPlan, PlanError, PlanRequest, PlanRequestValidationError, PlanResponse, Planner,
    TripSummary,
};
pub use priority::PrioritySet;
pub use restaurant::Restaurant;
pub use route::DayRoute;
pub use schedule::{DAY_START_HOUR, DaySlot};
pub use selection::Selection;

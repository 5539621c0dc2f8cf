//! Trip planning engine for Tripwise.
//!
//! This crate turns a [`PlanRequest`](tripwise_core::PlanRequest) into a
//! multi-day itinerary in three stages:
//!
//! - [`select_attractions`] solves a two-constraint 0/1 knapsack over visit
//!   hours and entry prices, maximising benefit with a boost for prioritised
//!   attractions.
//! - [`pack_days`] places the selection into days first-fit, respecting
//!   closing hours and per-day visiting time.
//! - [`build_route`] orders each day by nearest-neighbour travel time.
//!
//! [`ItineraryPlanner`] wires the stages together behind the
//! [`Planner`](tripwise_core::Planner) trait. Every stage is a pure function
//! of its inputs, so a planner can serve concurrent requests without locking.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod packer;
mod planner;
mod selector;
mod sequencer;

pub use packer::pack_days;
pub use planner::{DEFAULT_MAX_TABLE_CELLS, ItineraryPlanner, PlannerConfig};
pub use selector::{PRIORITY_MULTIPLIER, TIME_SCALE, select_attractions, table_cells};
pub use sequencer::build_route;

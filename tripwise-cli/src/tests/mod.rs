//! Shared test harness modules for the Tripwise CLI.
#![expect(
    clippy::panic,
    reason = "Tests assert panic branches to surface unexpected CLI outcomes"
)]

use super::*;
use crate::plan::{
    PlanConfig, PlanReport, config_from_layers_for_test, execute_plan, load_json, run_plan_with,
};

mod helpers;

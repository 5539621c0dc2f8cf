//! Command-line interface for planning Tripwise itineraries.
//!
//! The `plan` subcommand reads a city dataset and a traveller's preferences,
//! runs the itinerary planner and writes the result as JSON. Every option can
//! also come from configuration files or `TRIPWISE_*` environment variables
//! through `ortho_config` layering.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod io;
mod links;
mod plan;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

const ARG_PLAN_REQUEST: &str = "request";
const ARG_PLAN_CITY: &str = "city";
const ARG_PLAN_TRAVEL_MODE: &str = "travel-mode";
const ARG_PLAN_OUTPUT: &str = "output";
const ARG_PLAN_WITH_LINKS: &str = "with-links";
const ARG_PLAN_MAX_TABLE_CELLS: &str = "max-table-cells";
const ENV_PLAN_REQUEST: &str = "TRIPWISE_CMDS_PLAN_REQUEST_PATH";
const ENV_PLAN_CITY: &str = "TRIPWISE_CMDS_PLAN_CITY";

/// Run the Tripwise CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "tripwise",
    about = "Plan multi-day city itineraries under time and money budgets",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Select, schedule and route attractions for a trip.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;

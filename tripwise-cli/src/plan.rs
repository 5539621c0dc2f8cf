//! Plan command implementation for the Tripwise CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tripwise_core::{CityData, PlanResponse, Planner, Restaurant, TravelMode, TripPreferences};
use tripwise_planner::{DEFAULT_MAX_TABLE_CELLS, ItineraryPlanner, PlannerConfig};

use crate::io::{create_file, is_file, open_file};
use crate::links::maps_link;
use crate::{
    ARG_PLAN_CITY, ARG_PLAN_MAX_TABLE_CELLS, ARG_PLAN_OUTPUT, ARG_PLAN_REQUEST,
    ARG_PLAN_TRAVEL_MODE, ARG_PLAN_WITH_LINKS, CliError, ENV_PLAN_CITY, ENV_PLAN_REQUEST,
};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan a trip from a city dataset and a JSON file of trip \
                 preferences. Attractions are selected under the time and \
                 spend budgets, packed into days and ordered by travel time. \
                 Paths can come from CLI flags, configuration files, or \
                 environment variables.",
    about = "Plan a multi-day itinerary"
)]
#[ortho_config(prefix = "TRIPWISE")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing `TripPreferences`.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Path to the city dataset JSON.
    #[arg(long = ARG_PLAN_CITY, value_name = "path")]
    #[serde(default)]
    pub(crate) city: Option<Utf8PathBuf>,
    /// Override the travel mode from the preferences (driving or walking).
    #[arg(long = ARG_PLAN_TRAVEL_MODE, value_name = "mode")]
    #[serde(default)]
    pub(crate) travel_mode: Option<TravelMode>,
    /// Write the report here instead of standard output.
    #[arg(long = ARG_PLAN_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Add a Google Maps link for each planned day.
    #[arg(long = ARG_PLAN_WITH_LINKS)]
    #[serde(default)]
    pub(crate) with_links: bool,
    /// Largest selection table the planner may allocate, in cells.
    #[arg(long = ARG_PLAN_MAX_TABLE_CELLS, value_name = "cells")]
    #[serde(default)]
    pub(crate) max_table_cells: Option<u64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the trip preferences JSON.
    pub(crate) request_path: Utf8PathBuf,
    /// Path to the city dataset JSON.
    pub(crate) city: Utf8PathBuf,
    /// Travel mode override.
    pub(crate) travel_mode: Option<TravelMode>,
    /// Report destination; standard output when absent.
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) with_links: bool,
    pub(crate) planner: PlannerConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)?;
        Self::require_existing(&self.city, ARG_PLAN_CITY)?;
        Ok(())
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;
        let city = args.city.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_CITY,
            env: ENV_PLAN_CITY,
        })?;
        let max_table_cells = args
            .max_table_cells
            .map_or(DEFAULT_MAX_TABLE_CELLS, u128::from);

        Ok(Self {
            request_path,
            city,
            travel_mode: args.travel_mode,
            output: args.output,
            with_links: args.with_links,
            planner: PlannerConfig { max_table_cells },
        })
    }
}

/// Map link for one planned day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct DayLink {
    pub(crate) day: u32,
    pub(crate) url: String,
}

/// Restaurants suggested for one planned day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct DayRestaurants {
    pub(crate) day: u32,
    pub(crate) restaurants: Vec<Restaurant>,
}

/// JSON document written by the `plan` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlanReport {
    pub(crate) city: String,
    pub(crate) travel_mode: TravelMode,
    #[serde(flatten)]
    pub(crate) plan: PlanResponse,
    /// Days without nearby restaurants are left out.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) restaurants: Vec<DayRestaurants>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub(crate) map_links: Vec<DayLink>,
}

impl PlanReport {
    fn with_links(mut self) -> Result<Self, CliError> {
        let mut links = Vec::with_capacity(self.plan.days.len());
        for day in &self.plan.days {
            if let Some(url) = maps_link(&day.route.stops, self.travel_mode)? {
                links.push(DayLink {
                    day: day.slot.day,
                    url: url.into(),
                });
            }
        }
        self.map_links = links;
        Ok(self)
    }
}

pub(crate) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

/// Run the command, writing to `writer` unless an output path is configured.
pub(crate) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_plan_config(args)?;
    let report = execute_plan(&config)?;
    let payload = render_report(&report)?;
    match &config.output {
        Some(path) => write_report_file(path, &payload),
        None => write_payload(writer, &payload).map_err(CliError::WriteOutput),
    }
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

pub(crate) fn execute_plan(config: &PlanConfig) -> Result<PlanReport, CliError> {
    let city: CityData = load_json(&config.city, ARG_PLAN_CITY)?;
    let mut preferences: TripPreferences = load_json(&config.request_path, ARG_PLAN_REQUEST)?;
    if let Some(mode) = config.travel_mode {
        preferences.travel_mode = mode;
    }

    let request = city.plan_request(&preferences);
    request
        .validate_detailed()
        .map_err(|source| CliError::InvalidPlanRequest {
            path: config.request_path.clone(),
            source,
        })?;
    log::debug!(
        "planning {} of {} attractions in {}",
        request.attractions.len(),
        city.attractions.len(),
        city.name
    );

    let planner = ItineraryPlanner::with_config(city.distances.clone().symmetrized(), config.planner);
    let plan = planner
        .plan(&request)
        .map_err(|source| CliError::Plan { source })?;

    let restaurants = suggest_restaurants(&city, &plan);
    let report = PlanReport {
        city: city.name,
        travel_mode: preferences.travel_mode,
        plan,
        restaurants,
        map_links: Vec::new(),
    };
    if config.with_links {
        report.with_links()
    } else {
        Ok(report)
    }
}

fn suggest_restaurants(city: &CityData, plan: &PlanResponse) -> Vec<DayRestaurants> {
    plan.days
        .iter()
        .filter_map(|day| {
            let restaurants: Vec<Restaurant> = city
                .restaurants_for_day(&day.slot.attractions)
                .into_iter()
                .cloned()
                .collect();
            (!restaurants.is_empty()).then_some(DayRestaurants {
                day: day.slot.day,
                restaurants,
            })
        })
        .collect()
}

/// Loads a JSON document of type `T` from disk.
pub(crate) fn load_json<T>(path: &Utf8Path, field: &'static str) -> Result<T, CliError>
where
    T: DeserializeOwned,
{
    let file = open_file(path).map_err(|source| CliError::OpenInput {
        field,
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        field,
        path: path.to_path_buf(),
        source,
    })
}

fn render_report(report: &PlanReport) -> Result<String, CliError> {
    serde_json::to_string_pretty(report).map_err(CliError::SerialiseReport)
}

fn write_payload(writer: &mut dyn Write, payload: &str) -> std::io::Result<()> {
    writer.write_all(payload.as_bytes())?;
    writer.write_all(b"\n")
}

fn write_report_file(path: &Utf8Path, payload: &str) -> Result<(), CliError> {
    let to_error = |source| CliError::WriteOutputFile {
        path: path.to_path_buf(),
        source,
    };
    let mut file = create_file(path).map_err(to_error)?;
    write_payload(&mut file, payload).map_err(to_error)?;
    log::debug!("wrote plan report to {path}");
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}

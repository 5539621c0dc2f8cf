//! `ItineraryPlanner`: selection, day packing and routing in one pass.

use tripwise_core::{
    DayPlan, DistanceTableProvider, PlanError, PlanRequest, PlanResponse, Planner, Selection,
    TripSummary,
};

use crate::{build_route, pack_days, select_attractions, table_cells};

/// Default ceiling on knapsack table cells, about 256 MiB of `f64`.
pub const DEFAULT_MAX_TABLE_CELLS: u128 = 1 << 25;

/// Configuration for [`ItineraryPlanner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Largest knapsack table the planner will allocate.
    pub max_table_cells: u128,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

/// Plans multi-day trips from a request and a travel-table provider.
///
/// The planner validates the request, fetches the table for the requested
/// travel mode, selects attractions under the budget, packs them into days
/// and orders each day.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::{Attraction, CityDistances, DistanceTable, PlanRequest, Planner};
/// use tripwise_planner::ItineraryPlanner;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let attractions = vec![
///     Attraction::new(1, "Museum", origin)
///         .with_visit(2.0, 20.0)
///         .with_benefit(5.0)
///         .with_opening_hours(9, 18),
///     Attraction::new(2, "Park", origin)
///         .with_visit(1.0, 0.0)
///         .with_benefit(3.0)
///         .with_opening_hours(6, 20),
/// ];
/// let distances = CityDistances {
///     driving: DistanceTable::new().with_symmetric_leg(1, 2, 8.0, 0.0),
///     walking: DistanceTable::new(),
/// };
/// let planner = ItineraryPlanner::new(distances);
/// let response = planner
///     .plan(&PlanRequest::new(attractions, vec![8], 50))
///     .expect("valid request");
/// assert_eq!(response.days.len(), 1);
/// assert_eq!(response.summary.total_travel_minutes, 8.0);
/// ```
#[derive(Debug, Clone)]
pub struct ItineraryPlanner<P>
where
    P: DistanceTableProvider,
{
    provider: P,
    config: PlannerConfig,
}

impl<P> ItineraryPlanner<P>
where
    P: DistanceTableProvider,
{
    /// Construct a planner using default configuration.
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, PlannerConfig::default())
    }

    /// Construct a planner with explicit configuration.
    pub const fn with_config(provider: P, config: PlannerConfig) -> Self {
        Self { provider, config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn ensure_table_fits(&self, request: &PlanRequest) -> Result<(), PlanError> {
        let cells = table_cells(request.attractions.len(), request.budget());
        if cells > self.config.max_table_cells {
            return Err(PlanError::SearchSpaceTooLarge {
                cells,
                limit: self.config.max_table_cells,
            });
        }
        Ok(())
    }
}

impl<P> Planner for ItineraryPlanner<P>
where
    P: DistanceTableProvider + Send + Sync,
{
    fn plan(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError> {
        request.validate()?;
        self.ensure_table_fits(request)?;
        let table = self.provider.distance_table(request.travel_mode)?;

        let selection = select_attractions(
            &request.attractions,
            request.budget(),
            &request.prioritized,
        );
        let days: Vec<DayPlan> = pack_days(&selection.selected, &request.daily_hours)
            .into_iter()
            .map(|slot| {
                let route = build_route(&slot.attractions, &table);
                DayPlan { slot, route }
            })
            .collect();
        let summary = summarise(&selection, &days);
        log::debug!(
            "planned {} of {} selected attractions over {} days ({} travel)",
            summary.scheduled_count,
            summary.selected_count,
            days.len(),
            request.travel_mode
        );

        Ok(PlanResponse {
            selection,
            days,
            summary,
        })
    }
}

#[expect(
    clippy::float_arithmetic,
    reason = "trip totals add floating-point hours, prices and distances"
)]
fn summarise(selection: &Selection, days: &[DayPlan]) -> TripSummary {
    days.iter().fold(
        TripSummary {
            total_benefit: selection.total_benefit,
            selected_count: selection.selected.len(),
            ..TripSummary::default()
        },
        |mut summary, day| {
            summary.total_hours += day.slot.time_used;
            summary.total_cost += day.slot.cost_used;
            summary.total_travel_minutes += day.route.total_travel_minutes;
            summary.total_distance_km += day.route.total_distance_km;
            summary.scheduled_count += day.slot.attractions.len();
            summary
        },
    )
}

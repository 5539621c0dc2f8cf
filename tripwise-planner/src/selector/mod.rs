//! Two-constraint 0/1 knapsack over candidate attractions.
//!
//! Time weights are counted in half hours and cost weights in whole currency
//! units, both rounded to the nearest integer. Prioritised attractions have
//! their benefit multiplied by [`PRIORITY_MULTIPLIER`] while searching; the
//! reported totals always use the original benefit.

mod table;

use tripwise_core::{Attraction, Budget, PrioritySet, Selection};

use self::table::KnapsackTable;

/// Time slots per hour in the search table.
pub const TIME_SCALE: u32 = 2;

/// Benefit multiplier applied to prioritised attractions during the search.
pub const PRIORITY_MULTIPLIER: f64 = 10.0;

/// Integer weights and search value of one candidate.
///
/// Kept apart from the [`Attraction`] so the boosted value never reaches
/// reported totals.
#[derive(Debug, Clone, Copy, PartialEq)]
struct KnapsackItem {
    time: usize,
    cost: usize,
    value: f64,
}

impl KnapsackItem {
    /// `None` when a weight cannot be represented; such items never fit.
    #[expect(
        clippy::float_arithmetic,
        reason = "the priority boost scales a floating-point benefit"
    )]
    fn from_attraction(attraction: &Attraction, prioritized: &PrioritySet) -> Option<Self> {
        let time = scaled_weight(attraction.visit_hours, f64::from(TIME_SCALE))?;
        let cost = scaled_weight(attraction.entry_price, 1.0)?;
        let value = if prioritized.contains(attraction.id) {
            attraction.benefit * PRIORITY_MULTIPLIER
        } else {
            attraction.benefit
        };
        Some(Self { time, cost, value })
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "weights are rounded to whole table slots after the sign check"
)]
fn scaled_weight(raw: f64, scale: f64) -> Option<usize> {
    let scaled = (raw * scale).round();
    if !scaled.is_finite() || scaled < 0.0 {
        return None;
    }
    Some(scaled as usize)
}

/// Number of cells the search table needs for `item_count` candidates.
///
/// Planners use this to refuse requests whose table would be too large
/// before any memory is allocated.
///
/// # Examples
/// ```
/// use tripwise_core::Budget;
/// use tripwise_planner::table_cells;
///
/// // (2 + 1) prefixes x (3 * 2 + 1) time slots x (100 + 1) cost slots.
/// assert_eq!(table_cells(2, Budget::new(3, 100)), 3 * 7 * 101);
/// ```
#[must_use]
pub fn table_cells(item_count: usize, budget: Budget) -> u128 {
    let prefixes = item_count as u128 + 1;
    let time_slots = u128::from(budget.max_hours) * u128::from(TIME_SCALE) + 1;
    let cost_slots = u128::from(budget.max_spend) + 1;
    prefixes * time_slots * cost_slots
}

/// Choose the attractions with the highest total benefit within `budget`.
///
/// The result never exceeds either limit. An empty candidate list, a zero
/// limit or a budget nothing fits into all yield an empty [`Selection`], as
/// does a search table too large to allocate.
/// Among equally good subsets the one that leaves out later candidates wins,
/// and the selection keeps the candidates' input order.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::{Attraction, Budget, PrioritySet};
/// use tripwise_planner::select_attractions;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// let items = vec![
///     Attraction::new(1, "Gallery", origin).with_visit(2.0, 50.0).with_benefit(10.0),
///     Attraction::new(2, "Palace", origin).with_visit(3.0, 100.0).with_benefit(20.0),
/// ];
/// let selection = select_attractions(&items, Budget::new(3, 100), &PrioritySet::new());
/// assert_eq!(selection.ids(), vec![2]);
/// assert_eq!(selection.total_benefit, 20.0);
/// ```
#[must_use]
pub fn select_attractions(
    items: &[Attraction],
    budget: Budget,
    prioritized: &PrioritySet,
) -> Selection {
    if items.is_empty() || budget.is_empty() {
        return Selection::default();
    }

    let weighted: Vec<Option<KnapsackItem>> = items
        .iter()
        .map(|attraction| KnapsackItem::from_attraction(attraction, prioritized))
        .collect();

    let time_slots = usize::try_from(budget.max_hours.saturating_mul(TIME_SCALE))
        .ok()
        .and_then(|slots| slots.checked_add(1));
    let cost_slots = usize::try_from(budget.max_spend)
        .ok()
        .and_then(|slots| slots.checked_add(1));
    let Some(mut table) = time_slots
        .zip(cost_slots)
        .and_then(|(time, cost)| KnapsackTable::zeroed(items.len(), time, cost))
    else {
        log::warn!(
            "knapsack table for {} candidates does not fit in memory; selecting nothing",
            items.len()
        );
        return Selection::default();
    };

    fill(&mut table, &weighted);
    let chosen = reconstruct(&table, &weighted);
    let selection = Selection::from_selected(
        chosen
            .into_iter()
            .filter_map(|index| items.get(index).cloned())
            .collect(),
    );
    log::debug!(
        "selected {} of {} attractions (benefit {}, {} h, cost {})",
        selection.selected.len(),
        items.len(),
        selection.total_benefit,
        selection.total_hours,
        selection.total_cost
    );
    selection
}

#[expect(
    clippy::float_arithmetic,
    reason = "benefit values accumulate as floating-point scores"
)]
fn fill(table: &mut KnapsackTable, weighted: &[Option<KnapsackItem>]) {
    for (offset, item) in weighted.iter().enumerate() {
        let prefix = offset + 1;
        for time in 0..table.time_slots() {
            for cost in 0..table.cost_slots() {
                let without = table.get(prefix - 1, time, cost);
                let best = match item {
                    Some(fit) if fit.time <= time && fit.cost <= cost => {
                        let with = table.get(prefix - 1, time - fit.time, cost - fit.cost)
                            + fit.value;
                        without.max(with)
                    }
                    _ => without,
                };
                table.set(prefix, time, cost, best);
            }
        }
    }
}

/// Indices of the included items, in input order.
#[expect(
    clippy::float_cmp,
    reason = "an exact difference between prefix values marks an included item"
)]
fn reconstruct(table: &KnapsackTable, weighted: &[Option<KnapsackItem>]) -> Vec<usize> {
    let mut time = table.time_slots().saturating_sub(1);
    let mut cost = table.cost_slots().saturating_sub(1);
    let mut chosen = Vec::new();
    for prefix in (1..=weighted.len()).rev() {
        if table.get(prefix, time, cost) == table.get(prefix - 1, time, cost) {
            continue;
        }
        let index = prefix - 1;
        chosen.push(index);
        if let Some(Some(item)) = weighted.get(index) {
            time = time.saturating_sub(item.time);
            cost = cost.saturating_sub(item.cost);
        }
    }
    chosen.reverse();
    chosen
}

//! Output of the attraction selector.

use crate::Attraction;

/// Attractions chosen under the trip budget, with totals.
///
/// Totals use each attraction's original benefit, never a priority-boosted
/// value.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    /// Chosen attractions in input order.
    pub selected: Vec<Attraction>,
    /// Sum of original benefit scores.
    pub total_benefit: f64,
    /// Sum of visit durations in hours.
    pub total_hours: f64,
    /// Sum of entry prices.
    pub total_cost: f64,
}

impl Selection {
    /// Build a selection, computing totals from `selected`.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tripwise_core::{Attraction, Selection};
    ///
    /// let pick = Attraction::new(2, "Garden", Coord { x: 0.0, y: 0.0 })
    ///     .with_visit(3.0, 100.0)
    ///     .with_benefit(20.0);
    /// let selection = Selection::from_selected(vec![pick]);
    /// assert_eq!(selection.total_benefit, 20.0);
    /// assert_eq!(selection.total_cost, 100.0);
    /// ```
    pub fn from_selected(selected: Vec<Attraction>) -> Self {
        let total_benefit = total(&selected, |item| item.benefit);
        let total_hours = total(&selected, |item| item.visit_hours);
        let total_cost = total(&selected, |item| item.entry_price);
        Self {
            selected,
            total_benefit,
            total_hours,
            total_cost,
        }
    }

    /// Whether nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Identifiers of the chosen attractions, in order.
    pub fn ids(&self) -> Vec<u64> {
        self.selected.iter().map(|item| item.id).collect()
    }
}

fn total(items: &[Attraction], field: impl Fn(&Attraction) -> f64) -> f64 {
    items.iter().fold(0.0, |acc, item| acc + field(item))
}

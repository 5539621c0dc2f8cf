//! Trip-wide spending limits.

/// Joint limits on visiting time and entry spend across the whole trip.
///
/// Both limits are whole units: hours and currency units. The selector
/// sizes its search table from them, so they stay small integers.
///
/// # Examples
/// ```
/// use tripwise_core::Budget;
///
/// let budget = Budget::new(14, 300);
/// assert_eq!(budget.max_hours, 14);
/// assert!(!budget.is_empty());
/// assert!(Budget::new(0, 300).is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Budget {
    /// Maximum visiting hours summed over all days.
    pub max_hours: u32,
    /// Maximum entry spend summed over all days.
    pub max_spend: u32,
}

impl Budget {
    /// Construct a budget from its two limits.
    pub const fn new(max_hours: u32, max_spend: u32) -> Self {
        Self {
            max_hours,
            max_spend,
        }
    }

    /// Whether either limit rules out every attraction.
    pub const fn is_empty(&self) -> bool {
        self.max_hours == 0 || self.max_spend == 0
    }
}

//! Attractions the traveller asked to favour.

use std::collections::HashSet;

/// Identifiers of attractions the selector should prefer when feasible.
///
/// Unknown identifiers are allowed and simply never match.
///
/// # Examples
/// ```
/// use tripwise_core::PrioritySet;
///
/// let priorities: PrioritySet = [3, 5].into_iter().collect();
/// assert!(priorities.contains(3));
/// assert!(!priorities.contains(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PrioritySet {
    ids: HashSet<u64>,
}

impl PrioritySet {
    /// Construct an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an identifier, returning the updated set.
    #[must_use]
    pub fn with(mut self, id: u64) -> Self {
        self.ids.insert(id);
        self
    }

    /// Whether `id` is prioritised.
    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    /// Number of prioritised identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is prioritised.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<u64> for PrioritySet {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

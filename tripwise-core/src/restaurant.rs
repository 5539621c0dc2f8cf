//! Places to eat listed alongside a city's attractions.

/// A restaurant suggestion tied to nearby attractions.
///
/// # Examples
/// ```
/// use tripwise_core::Restaurant;
///
/// let restaurant = Restaurant::new("Mangai", "regional").with_near([1, 3]);
/// assert!(restaurant.is_near_any([3, 7]));
/// assert!(!restaurant.is_near_any([2]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Restaurant {
    /// Display name.
    pub name: String,
    /// Cuisine or style, e.g. `"regional"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub kind: String,
    /// Identifiers of attractions within easy reach.
    #[cfg_attr(feature = "serde", serde(default))]
    pub near: Vec<u64>,
}

impl Restaurant {
    /// Construct a restaurant close to no attraction.
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            near: Vec::new(),
        }
    }

    /// Set the attractions this restaurant is close to.
    #[must_use]
    pub fn with_near(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.near = ids.into_iter().collect();
        self
    }

    /// Whether any of `ids` is listed as nearby.
    pub fn is_near_any(&self, ids: impl IntoIterator<Item = u64>) -> bool {
        ids.into_iter().any(|id| self.near.contains(&id))
    }
}

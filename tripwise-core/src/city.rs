//! Static city reference data and traveller preferences.
//!
//! A [`CityData`] bundles the attractions of one destination with its
//! travel tables. [`TripPreferences`] captures what a traveller chose on top
//! of that data; [`CityData::plan_request`] combines the two into a
//! [`PlanRequest`].

use std::collections::HashSet;

use geo::Coord;

use crate::{
    Attraction, DistanceTable, DistanceTableError, DistanceTableProvider, PlanRequest,
    PrioritySet, Restaurant, TravelMode,
};

/// Travel tables for every supported mode.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityDistances {
    /// Table used when driving.
    pub driving: DistanceTable,
    /// Table used when walking.
    pub walking: DistanceTable,
}

impl CityDistances {
    /// Mirror one-way entries in both tables.
    #[must_use]
    pub fn symmetrized(self) -> Self {
        Self {
            driving: self.driving.symmetrized(),
            walking: self.walking.symmetrized(),
        }
    }
}

impl DistanceTableProvider for CityDistances {
    fn distance_table(&self, mode: TravelMode) -> Result<DistanceTable, DistanceTableError> {
        Ok(match mode {
            TravelMode::Driving => self.driving.clone(),
            TravelMode::Walking => self.walking.clone(),
        })
    }
}

/// Reference data for one destination.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityData {
    /// Display name, e.g. `"Brasília, DF"`.
    pub name: String,
    /// Map centre.
    pub center: Coord<f64>,
    /// Known category tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: Vec<String>,
    /// Attractions in catalogue order.
    pub attractions: Vec<Attraction>,
    /// Restaurant suggestions in catalogue order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub restaurants: Vec<Restaurant>,
    /// Travel tables per mode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub distances: CityDistances,
}

/// What the traveller chose for a trip to a given city.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripPreferences {
    /// Visiting hours per day, day 1 first.
    pub daily_hours: Vec<u32>,
    /// Maximum entry spend for the trip.
    pub max_spend: u32,
    /// Explicit trip-wide hour limit.
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_hours: Option<u32>,
    /// Attractions to favour.
    #[cfg_attr(feature = "serde", serde(default))]
    pub prioritized: PrioritySet,
    /// Preferred travel mode.
    #[cfg_attr(feature = "serde", serde(default))]
    pub travel_mode: TravelMode,
    /// Identifiers of attractions already seen, excluded from planning.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visited: HashSet<u64>,
    /// Names of attractions already seen, excluded from planning.
    ///
    /// Matched exactly against [`Attraction::name`], for visit lists kept by
    /// name rather than identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    pub visited_names: HashSet<String>,
    /// Categories to include. Empty means every category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub categories: HashSet<String>,
}

impl TripPreferences {
    fn is_visited(&self, attraction: &Attraction) -> bool {
        self.visited.contains(&attraction.id) || self.visited_names.contains(&attraction.name)
    }
}

impl CityData {
    /// Attractions matching the category filter and not yet visited, in
    /// catalogue order.
    ///
    /// An attraction counts as visited when either its identifier or its
    /// name is listed in the preferences.
    pub fn available_attractions(&self, preferences: &TripPreferences) -> Vec<Attraction> {
        self.attractions
            .iter()
            .filter(|attraction| !preferences.is_visited(attraction))
            .filter(|attraction| {
                preferences.categories.is_empty()
                    || preferences.categories.contains(&attraction.category)
            })
            .cloned()
            .collect()
    }

    /// Restaurants near at least one of a day's attractions, in catalogue
    /// order.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tripwise_core::{Attraction, CityData, CityDistances, Restaurant};
    ///
    /// let origin = Coord { x: 0.0, y: 0.0 };
    /// let city = CityData {
    ///     name: "Sample".into(),
    ///     center: origin,
    ///     categories: Vec::new(),
    ///     attractions: vec![Attraction::new(1, "Park", origin)],
    ///     restaurants: vec![
    ///         Restaurant::new("Grill", "barbecue").with_near([1]),
    ///         Restaurant::new("Diner", "cafe").with_near([2]),
    ///     ],
    ///     distances: CityDistances::default(),
    /// };
    /// let nearby = city.restaurants_for_day(&city.attractions);
    /// assert_eq!(nearby.len(), 1);
    /// assert_eq!(nearby[0].name, "Grill");
    /// ```
    pub fn restaurants_for_day(&self, attractions: &[Attraction]) -> Vec<&Restaurant> {
        self.restaurants
            .iter()
            .filter(|restaurant| restaurant.is_near_any(attractions.iter().map(|a| a.id)))
            .collect()
    }

    /// Build the planning request for `preferences`.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tripwise_core::{Attraction, CityData, CityDistances, TripPreferences};
    ///
    /// let city = CityData {
    ///     name: "Sample".into(),
    ///     center: Coord { x: 0.0, y: 0.0 },
    ///     categories: vec!["park".into()],
    ///     attractions: vec![
    ///         Attraction::new(1, "Park", Coord { x: 0.0, y: 0.0 }).with_category("park"),
    ///         Attraction::new(2, "Museum", Coord { x: 0.0, y: 0.0 }).with_category("museum"),
    ///     ],
    ///     restaurants: Vec::new(),
    ///     distances: CityDistances::default(),
    /// };
    /// let preferences = TripPreferences {
    ///     daily_hours: vec![8],
    ///     max_spend: 100,
    ///     categories: ["park".to_string()].into_iter().collect(),
    ///     ..TripPreferences::default()
    /// };
    /// let request = city.plan_request(&preferences);
    /// assert_eq!(request.attractions.len(), 1);
    /// assert_eq!(request.attractions[0].id, 1);
    /// ```
    pub fn plan_request(&self, preferences: &TripPreferences) -> PlanRequest {
        PlanRequest {
            attractions: self.available_attractions(preferences),
            daily_hours: preferences.daily_hours.clone(),
            max_spend: preferences.max_spend,
            max_hours: preferences.max_hours,
            prioritized: preferences.prioritized.clone(),
            travel_mode: preferences.travel_mode,
        }
    }
}

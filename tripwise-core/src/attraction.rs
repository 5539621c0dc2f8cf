//! Candidate attractions and their boundary validation.

use geo::Coord;
use thiserror::Error;

/// Latest closing hour accepted on the 24-hour clock.
pub const LAST_CLOSING_HOUR: u8 = 24;

/// A place a traveller may visit during the trip.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`.
/// Attractions are immutable inputs: planning only filters and copies them.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::Attraction;
///
/// let museum = Attraction::new(1, "Museum", Coord { x: -47.88, y: -15.79 })
///     .with_visit(2.0, 30.0)
///     .with_benefit(8.0)
///     .with_opening_hours(9, 17);
///
/// assert_eq!(museum.id, 1);
/// assert!(museum.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attraction {
    /// Stable unique identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Category tag used for filtering, e.g. `"museum"`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Time spent on site, in hours.
    pub visit_hours: f64,
    /// Entry price in currency units.
    pub entry_price: f64,
    /// Base benefit score before any priority boost.
    pub benefit: f64,
    /// Geographic position.
    pub location: Coord<f64>,
    /// Opening hour on the 24-hour clock.
    pub opens: u8,
    /// Closing hour on the 24-hour clock.
    pub closes: u8,
}

/// Errors returned by [`Attraction::validate`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttractionError {
    /// Visit duration was zero, negative or not a number.
    #[error("visit duration must be a positive number of hours, got {0}")]
    InvalidVisitHours(f64),
    /// Entry price was negative or not a number.
    #[error("entry price must be a non-negative amount, got {0}")]
    InvalidEntryPrice(f64),
    /// Benefit score was negative or not a number.
    #[error("benefit must be a non-negative score, got {0}")]
    InvalidBenefit(f64),
    /// Opening hours were not increasing or ran past midnight.
    #[error("opening hours {opens}..{closes} are invalid")]
    InvalidOpeningHours {
        /// Opening hour.
        opens: u8,
        /// Closing hour.
        closes: u8,
    },
    /// Coordinates were outside the WGS84 range.
    #[error("location ({lat}, {lng}) is outside the valid coordinate range")]
    InvalidLocation {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },
}

impl Attraction {
    /// Construct an attraction open all day with no cost, duration or benefit.
    ///
    /// Use the `with_*` methods to fill in the remaining fields.
    pub fn new(id: u64, name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            category: String::new(),
            visit_hours: 0.0,
            entry_price: 0.0,
            benefit: 0.0,
            location,
            opens: 0,
            closes: LAST_CLOSING_HOUR,
        }
    }

    /// Set the visit duration in hours and the entry price.
    #[must_use]
    pub fn with_visit(mut self, hours: f64, price: f64) -> Self {
        self.visit_hours = hours;
        self.entry_price = price;
        self
    }

    /// Set the base benefit score.
    #[must_use]
    pub fn with_benefit(mut self, benefit: f64) -> Self {
        self.benefit = benefit;
        self
    }

    /// Set the opening and closing hours.
    #[must_use]
    pub fn with_opening_hours(mut self, opens: u8, closes: u8) -> Self {
        self.opens = opens;
        self.closes = closes;
        self
    }

    /// Set the category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    pub fn lng(&self) -> f64 {
        self.location.x
    }

    /// Check the record before it reaches the planning algorithms.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use tripwise_core::{Attraction, AttractionError};
    ///
    /// let closed = Attraction::new(7, "Closed", Coord { x: 0.0, y: 0.0 })
    ///     .with_visit(1.0, 0.0)
    ///     .with_opening_hours(18, 9);
    /// assert_eq!(
    ///     closed.validate(),
    ///     Err(AttractionError::InvalidOpeningHours { opens: 18, closes: 9 })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), AttractionError> {
        if !self.visit_hours.is_finite() || self.visit_hours <= 0.0 {
            return Err(AttractionError::InvalidVisitHours(self.visit_hours));
        }
        if !self.entry_price.is_finite() || self.entry_price < 0.0 {
            return Err(AttractionError::InvalidEntryPrice(self.entry_price));
        }
        if !self.benefit.is_finite() || self.benefit < 0.0 {
            return Err(AttractionError::InvalidBenefit(self.benefit));
        }
        if self.opens >= self.closes || self.closes > LAST_CLOSING_HOUR {
            return Err(AttractionError::InvalidOpeningHours {
                opens: self.opens,
                closes: self.closes,
            });
        }
        let lat_ok = (-90.0..=90.0).contains(&self.lat());
        let lng_ok = (-180.0..=180.0).contains(&self.lng());
        if !lat_ok || !lng_ok {
            return Err(AttractionError::InvalidLocation {
                lat: self.lat(),
                lng: self.lng(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn museum() -> Attraction {
        Attraction::new(1, "Museum", Coord { x: -43.18, y: -22.90 })
            .with_visit(2.0, 40.0)
            .with_benefit(9.0)
            .with_opening_hours(10, 18)
            .with_category("museum")
    }

    #[rstest]
    fn accepts_well_formed_record(museum: Attraction) {
        assert!(museum.validate().is_ok());
        assert_eq!(museum.lat(), -22.90);
        assert_eq!(museum.lng(), -43.18);
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.5)]
    #[case(f64::NAN)]
    fn rejects_non_positive_visit(museum: Attraction, #[case] hours: f64) {
        let record = museum.with_visit(hours, 10.0);
        assert!(matches!(
            record.validate(),
            Err(AttractionError::InvalidVisitHours(_))
        ));
    }

    #[rstest]
    fn rejects_negative_price(museum: Attraction) {
        let record = museum.with_visit(1.0, -5.0);
        assert_eq!(
            record.validate(),
            Err(AttractionError::InvalidEntryPrice(-5.0))
        );
    }

    #[rstest]
    fn rejects_infinite_benefit(museum: Attraction) {
        let record = museum.with_benefit(f64::INFINITY);
        assert!(matches!(
            record.validate(),
            Err(AttractionError::InvalidBenefit(_))
        ));
    }

    #[rstest]
    #[case(12, 12)]
    #[case(14, 9)]
    #[case(20, 25)]
    fn rejects_bad_opening_hours(museum: Attraction, #[case] opens: u8, #[case] closes: u8) {
        let record = museum.with_opening_hours(opens, closes);
        assert_eq!(
            record.validate(),
            Err(AttractionError::InvalidOpeningHours { opens, closes })
        );
    }

    #[rstest]
    fn accepts_midnight_closing(museum: Attraction) {
        assert!(museum.with_opening_hours(0, 24).validate().is_ok());
    }

    #[rstest]
    #[case(Coord { x: 0.0, y: 91.0 })]
    #[case(Coord { x: -181.0, y: 0.0 })]
    fn rejects_out_of_range_location(museum: Attraction, #[case] location: Coord<f64>) {
        let record = Attraction { location, ..museum };
        assert!(matches!(
            record.validate(),
            Err(AttractionError::InvalidLocation { .. })
        ));
    }
}

//! Great-circle distances for route reporting.
//!
//! Travel tables decide the visiting order; these helpers only report how
//! far apart consecutive stops are on the globe.

use geo::Coord;

/// Mean Earth radius used by the Haversine formula, in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres between two WGS84 coordinates.
///
/// Coordinates use `x = longitude` and `y = latitude`, in degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::geodesic::haversine_km;
///
/// let equator = Coord { x: 0.0, y: 0.0 };
/// let one_degree_east = Coord { x: 1.0, y: 0.0 };
/// let km = haversine_km(equator, one_degree_east);
/// assert!((km - 111.19).abs() < 0.01);
/// ```
pub fn haversine_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    let lat_from = from.y.to_radians();
    let lat_to = to.y.to_radians();
    let delta_lat = (to.y - from.y).to_radians();
    let delta_lng = (to.x - from.x).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat_from.cos() * lat_to.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

/// Round a kilometre value to one decimal place.
pub fn round_to_tenth(km: f64) -> f64 {
    (km * 10.0).round() / 10.0
}

/// Haversine distance of a single route leg, rounded to 0.1 km.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use tripwise_core::geodesic::leg_distance_km;
///
/// let a = Coord { x: -43.2105, y: -22.9519 };
/// let b = Coord { x: -43.1566, y: -22.9493 };
/// assert_eq!(leg_distance_km(a, b), leg_distance_km(b, a));
/// ```
pub fn leg_distance_km(from: Coord<f64>, to: Coord<f64>) -> f64 {
    round_to_tenth(haversine_km(from, to))
}

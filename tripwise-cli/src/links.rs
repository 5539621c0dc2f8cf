//! Google Maps links for planned days.

use tripwise_core::{Attraction, TravelMode};
use url::Url;

const SEARCH_URL: &str = "https://www.google.com/maps/search/";
const DIRECTIONS_URL: &str = "https://www.google.com/maps/dir/";

/// Map link for a day's stops in visiting order.
///
/// No stops yield no link. A single stop links to a search for its
/// coordinates; longer routes link to directions from the first stop to the
/// last through the others.
pub(crate) fn maps_link(
    stops: &[Attraction],
    mode: TravelMode,
) -> Result<Option<Url>, url::ParseError> {
    let (Some(first), Some(last)) = (stops.first(), stops.last()) else {
        return Ok(None);
    };

    if stops.len() == 1 {
        let mut url = Url::parse(SEARCH_URL)?;
        url.set_query(Some(&format!("api=1&query={}", coordinates(first))));
        return Ok(Some(url));
    }

    let waypoints = stops
        .iter()
        .skip(1)
        .take(stops.len().saturating_sub(2))
        .map(coordinates)
        .collect::<Vec<_>>()
        .join("|");

    let mut url = Url::parse(DIRECTIONS_URL)?;
    {
        let mut query = url.query_pairs_mut();
        query
            .append_pair("api", "1")
            .append_pair("origin", &coordinates(first))
            .append_pair("destination", &coordinates(last));
        if !waypoints.is_empty() {
            query.append_pair("waypoints", &waypoints);
        }
        query.append_pair("travelmode", mode.as_str());
    }
    Ok(Some(url))
}

fn coordinates(attraction: &Attraction) -> String {
    format!("{},{}", attraction.lat(), attraction.lng())
}

// src/map/coords.rs

use crate::domain::PropertySummary;
use crate::map::surface::LatLng;

/// Derives a usable coordinate for one property, or `None` if it has none.
///
/// Preference order: a `@<lat>,<lng>` pair embedded in the shared map link
/// wins; the explicit latitude/longitude columns are the fallback. A
/// malformed link is not an error, it just falls through. A property with
/// only one of the two explicit fields yields nothing rather than a
/// half-coordinate.
pub fn resolve_coordinate(property: &PropertySummary) -> Option<LatLng> {
    if let Some(url) = property.map_link_url.as_deref() {
        if let Some(coord) = coordinate_from_map_link(url) {
            return Some(coord);
        }
    }

    match (property.latitude, property.longitude) {
        (Some(lat), Some(lng)) => Some(LatLng::new(lat, lng)),
        _ => None,
    }
}

/// Scans a map link for `@<lat>,<lng>`: a signed decimal, a comma, a signed
/// decimal, immediately after an `@`. Links carry more than one `@` at
/// times (user pastes, redirect wrappers), so every occurrence is tried
/// until one parses.
fn coordinate_from_map_link(url: &str) -> Option<LatLng> {
    for (at, _) in url.match_indices('@') {
        let rest = &url[at + 1..];

        let (lat_text, after_lat) = take_signed_decimal(rest);
        let Some(rest) = after_lat.strip_prefix(',') else {
            continue;
        };
        let (lng_text, _) = take_signed_decimal(rest);

        if let (Ok(lat), Ok(lng)) = (lat_text.parse::<f64>(), lng_text.parse::<f64>()) {
            return Some(LatLng::new(lat, lng));
        }
    }
    None
}

/// Splits off the leading run of characters that can belong to a signed
/// decimal number. Parsing decides whether the run is actually one.
fn take_signed_decimal(s: &str) -> (&str, &str) {
    let end = s
        .char_indices()
        .find(|(i, c)| !(c.is_ascii_digit() || *c == '.' || (*i == 0 && (*c == '-' || *c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    s.split_at(end)
}

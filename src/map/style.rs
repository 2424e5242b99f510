// src/map/style.rs

use serde_json::{json, Value};

/// Fallback view before any markers exist to fit against.
pub const DEFAULT_CENTER: (f64, f64) = (19.4326, -99.1332);
pub const DEFAULT_ZOOM: u8 = 11;

/// Static styler table for the base map. Visual only: muted landscape,
/// points of interest hidden so the listing pins stand out.
pub fn base_map_style() -> Value {
    json!([
        {
            "featureType": "landscape",
            "elementType": "geometry",
            "stylers": [{ "color": "#f5f5f2" }, { "saturation": -20 }]
        },
        {
            "featureType": "poi",
            "elementType": "all",
            "stylers": [{ "visibility": "off" }]
        },
        {
            "featureType": "road",
            "elementType": "geometry",
            "stylers": [{ "color": "#ffffff" }, { "lightness": 20 }]
        },
        {
            "featureType": "road.arterial",
            "elementType": "labels.text.fill",
            "stylers": [{ "color": "#787878" }]
        },
        {
            "featureType": "transit",
            "elementType": "all",
            "stylers": [{ "visibility": "off" }]
        },
        {
            "featureType": "water",
            "elementType": "geometry",
            "stylers": [{ "color": "#b6c5d1" }]
        },
        {
            "featureType": "administrative",
            "elementType": "labels.text.fill",
            "stylers": [{ "color": "#5b5b5b" }]
        }
    ])
}

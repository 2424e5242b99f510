// templates/pages/map.rs

use maud::{html, Markup, PreEscaped};
use serde::Serialize;

use crate::domain::PropertySummary;
use crate::map::host::{loading_markup, map_canvas_markup};
use crate::map::style::{base_map_style, DEFAULT_CENTER, DEFAULT_ZOOM};
use crate::map::{marker_card, resolve_coordinate};
use crate::templates::desktop_layout;

/// One pin as the browser-side map consumes it: resolved position plus the
/// pre-rendered info-window card. Properties that resolve to no coordinate
/// are left out here, same as the overlay manager would.
#[derive(Serialize)]
struct MapPin {
    id: i64,
    name: String,
    lat: f64,
    lng: f64,
    card: String,
}

/// JSON is not script-safe as-is: a `</script>` inside a string value
/// would end the data island early and hand the rest of the payload to the
/// HTML parser. Escaping every `<` keeps the JSON identical to
/// `JSON.parse` while making that breakout impossible.
fn escape_for_script(json: &str) -> String {
    json.replace('<', "\\u003c")
}

pub fn map_page(properties: &[PropertySummary]) -> Markup {
    let pins: Vec<MapPin> = properties
        .iter()
        .filter_map(|p| {
            let at = resolve_coordinate(p)?;
            Some(MapPin {
                id: p.id,
                name: p.name.clone(),
                lat: at.lat,
                lng: at.lng,
                card: marker_card(p).into_string(),
            })
        })
        .collect();

    let pins_json =
        escape_for_script(&serde_json::to_string(&pins).unwrap_or_else(|_| "[]".to_string()));
    let style_json = escape_for_script(&base_map_style().to_string());

    desktop_layout(
        "Property Map",
        html! {
            main class="container" {
                h1 { "Browse Properties" }
                p { (properties.len()) " listings, " (pins.len()) " on the map" }

                (loading_markup())
                (map_canvas_markup())

                script {
                    (PreEscaped(format!(
                        "window.__MAP_PINS__ = {pins_json};\n\
                         window.__MAP_STYLE__ = {style_json};\n\
                         window.__MAP_VIEW__ = {{ lat: {}, lng: {}, zoom: {} }};",
                        DEFAULT_CENTER.0, DEFAULT_CENTER.1, DEFAULT_ZOOM
                    )))
                }
                script src="/static/map.js" defer {}
            }
        },
    )
}

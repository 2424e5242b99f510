// src/map/card.rs

use crate::domain::PropertySummary;
use maud::{html, Markup};

/// The small summary card shown inside a marker's info window.
///
/// Pure markup from display fields only. The mapping SDK takes a raw HTML
/// string for window content, so no framework binding happens in here.
///
/// Note the price only appears as a badge over the feature image; a
/// property without an image shows a placeholder and no price at all.
/// That mirrors the live site's behavior and stays until product says
/// otherwise.
pub fn marker_card(property: &PropertySummary) -> Markup {
    html! {
        div class="marker-card" style="width: 220px; font-family: system-ui, sans-serif;" {
            @if let Some(image_url) = &property.feature_image_url {
                div class="marker-card-media" style="position: relative;" {
                    img
                        src=(image_url)
                        alt=(property.name)
                        style="width: 100%; height: 120px; object-fit: cover; border-radius: 6px;";
                    span
                        class="marker-card-price"
                        style="position: absolute; left: 8px; bottom: 8px; background: #111827; color: white; padding: 2px 8px; border-radius: 4px; font-weight: bold;"
                    {
                        (format_price(property.price))
                    }
                }
            } @else {
                div
                    class="marker-card-placeholder"
                    style="height: 120px; display: flex; align-items: center; justify-content: center; background: #e5e7eb; border-radius: 6px;"
                {
                    svg
                        xmlns="http://www.w3.org/2000/svg"
                        width="32"
                        height="32"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="#6b7280"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                    {
                        path stroke="none" d="M0 0h24v24H0z" fill="none" {}
                        path d="M5 12l-2 0l9 -9l9 9l-2 0" {}
                        path d="M5 12v7a2 2 0 0 0 2 2h10a2 2 0 0 0 2 -2v-7" {}
                        path d="M9 21v-6a2 2 0 0 1 2 -2h2a2 2 0 0 1 2 2v6" {}
                    }
                }
            }
            div class="marker-card-body" style="padding: 6px 2px;" {
                h4 style="margin: 4px 0; font-size: 1rem;" { (property.name) }
                p style="margin: 2px 0; color: #4b5563; font-size: 0.85rem;" { (property.address) }
                p style="margin: 2px 0; font-size: 0.85rem;" {
                    (property.bedrooms) " bd | " (property.bathrooms) " ba"
                }
            }
        }
    }
}

/// "$1,250,000": whole dollars with thousands separators.
pub fn format_price(price: i64) -> String {
    let digits = price.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if price < 0 {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

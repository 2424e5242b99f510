// templates/pages/property.rs

use maud::{html, Markup};

use crate::domain::PropertyDetail;
use crate::map::card::format_price;
use crate::templates::desktop_layout;

/// The page a marker click lands on.
pub fn property_page(detail: &PropertyDetail) -> Markup {
    let p = &detail.summary;

    desktop_layout(
        &p.name,
        html! {
            main class="container" {
                h1 { (p.name) }
                p { (p.address) }

                section class="card" {
                    @if let Some(image_url) = &p.feature_image_url {
                        img
                            src=(image_url)
                            alt=(p.name)
                            style="width: 100%; max-height: 360px; object-fit: cover; border-radius: 8px;";
                    }
                    h2 { (format_price(p.price)) }
                    p { strong { (p.bedrooms) } " bedrooms, " strong { (p.bathrooms) } " bathrooms" }

                    @if let Some(listed_at) = detail.listed_at {
                        p { "Listed on " (listed_at.format("%B %e, %Y")) }
                    }

                    @match &detail.description {
                        Some(text) => p { (text) },
                        None => p { em { "No description provided." } },
                    }
                }

                a href="/" { "Back to the map" }
            }
        },
    )
}

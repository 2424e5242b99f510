// src/domain/property.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One property as the map subsystem consumes it: display fields plus the
/// two optional coordinate sources (a shared map link and explicit
/// latitude/longitude). The map layer never mutates these; a new list
/// triggers a full overlay rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    /// Asking price in whole dollars.
    pub price: i64,
    pub feature_image_url: Option<String>,
    pub map_link_url: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// The fuller row behind `/properties/{id}`, the page a marker click
/// navigates to.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDetail {
    pub summary: PropertySummary,
    pub description: Option<String>,
    pub listed_at: Option<NaiveDateTime>,
}

// src/tests/utils.rs

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::db::connection::{init_db, Database};
use crate::domain::PropertySummary;
use crate::errors::ServerError;
use crate::map::surface::{InfoWindowId, LatLng, LatLngBounds, MapSurface, MarkerId, PixelOffset};

/// Initialize a fresh test DB using the production schema.
pub fn init_test_db() -> Database {
    let path = std::env::temp_dir().join(format!(
        "estate_map_test_{}.sqlite",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    let db = Database::new(path);
    init_db(&db, "sql/schema.sql").expect("Failed to initialize DB");
    db
}

/// Insert one listing row; only the coordinate sources vary across tests.
pub fn seed_property(db: &Database, summary: &PropertySummary) {
    db.with_conn(|conn| {
        conn.execute(
            r#"
            INSERT INTO properties
                (id, name, address, bedrooms, bathrooms, price,
                 feature_image_url, map_link_url, latitude, longitude,
                 description, listed_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, 'A test listing', '2026-03-01 09:00:00')
            "#,
            rusqlite::params![
                summary.id,
                summary.name,
                summary.address,
                summary.bedrooms,
                summary.bathrooms,
                summary.price,
                summary.feature_image_url,
                summary.map_link_url,
                summary.latitude,
                summary.longitude,
            ],
        )
        .map_err(|e| ServerError::DbError(e.to_string()))?;
        Ok(())
    })
    .expect("seed insert failed");
}

/// A summary with explicit coordinates and no map link.
pub fn summary_at(id: i64, lat: f64, lng: f64) -> PropertySummary {
    PropertySummary {
        id,
        name: format!("Listing {id}"),
        address: format!("{id} Test St"),
        bedrooms: 3,
        bathrooms: 2,
        price: 500_000,
        feature_image_url: None,
        map_link_url: None,
        latitude: Some(lat),
        longitude: Some(lng),
    }
}

/// A summary with a junk map link and no explicit coordinates: no pin.
pub fn unresolvable_summary(id: i64) -> PropertySummary {
    PropertySummary {
        map_link_url: Some("https://example.com/no-coords".to_string()),
        latitude: None,
        longitude: None,
        ..summary_at(id, 0.0, 0.0)
    }
}

/// Collects the paths the overlay manager navigates to.
#[derive(Clone, Default)]
pub struct SharedNav(Rc<RefCell<Vec<String>>>);

impl SharedNav {
    pub fn push(&self, path: String) {
        self.0.borrow_mut().push(path);
    }

    pub fn paths(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

/// Recording double for the mapping SDK. Tracks what a real surface would
/// own (attached markers, created windows, which windows are open) so tests
/// can assert teardown really detached things.
#[derive(Default)]
pub struct FakeSurface {
    next_marker: u64,
    next_window: u64,
    attached: HashSet<MarkerId>,
    window_contents: Vec<(InfoWindowId, String, PixelOffset)>,
    open_windows: HashSet<InfoWindowId>,
    viewport: Option<LatLngBounds>,
    fits: Vec<(LatLngBounds, u32)>,
    last_open_offset: Option<PixelOffset>,
}

impl FakeSurface {
    pub fn set_viewport(&mut self, bounds: LatLngBounds) {
        self.viewport = Some(bounds);
    }

    pub fn attached_marker_count(&self) -> usize {
        self.attached.len()
    }

    pub fn open_window_count(&self) -> usize {
        self.open_windows.len()
    }

    pub fn is_window_open(&self, window: InfoWindowId) -> bool {
        self.open_windows.contains(&window)
    }

    pub fn window_content(&self, window: InfoWindowId) -> Option<&str> {
        self.window_contents
            .iter()
            .find(|(id, _, _)| *id == window)
            .map(|(_, content, _)| content.as_str())
    }

    pub fn last_open_offset(&self) -> Option<PixelOffset> {
        self.last_open_offset
    }

    pub fn last_fit(&self) -> Option<(LatLngBounds, u32)> {
        self.fits.last().copied()
    }

    pub fn fit_count(&self) -> usize {
        self.fits.len()
    }
}

impl MapSurface for FakeSurface {
    fn create_marker(&mut self, _at: LatLng, _label: &str) -> MarkerId {
        let id = MarkerId(self.next_marker);
        self.next_marker += 1;
        self.attached.insert(id);
        id
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        self.attached.remove(&marker);
    }

    fn create_info_window(&mut self, html: &str, base_offset: PixelOffset) -> InfoWindowId {
        let id = InfoWindowId(self.next_window);
        self.next_window += 1;
        self.window_contents
            .push((id, html.to_string(), base_offset));
        id
    }

    fn open_info_window(&mut self, window: InfoWindowId, _anchor: MarkerId, offset: PixelOffset) {
        self.open_windows.insert(window);
        self.last_open_offset = Some(offset);
    }

    fn close_info_window(&mut self, window: InfoWindowId) {
        self.open_windows.remove(&window);
    }

    fn viewport_bounds(&self) -> Option<LatLngBounds> {
        self.viewport
    }

    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding_px: u32) {
        self.fits.push((*bounds, padding_px));
    }
}

// src/map/surface.rs
//
// Small capability interface over whatever mapping SDK actually draws the
// map. The overlay manager only ever talks to this trait, so its
// clear/rebuild and hover logic can run against a test double just as well
// as against a real map.

/// A geographic point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Rectangular accumulator over a batch of coordinates. Starts empty;
/// `extend` grows it one point at a time. Not retained across rebuilds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLngBounds {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
}

impl LatLngBounds {
    pub fn empty() -> Self {
        Self {
            min_lat: f64::INFINITY,
            max_lat: f64::NEG_INFINITY,
            min_lng: f64::INFINITY,
            max_lng: f64::NEG_INFINITY,
        }
    }

    pub fn of(sw: LatLng, ne: LatLng) -> Self {
        Self {
            min_lat: sw.lat,
            max_lat: ne.lat,
            min_lng: sw.lng,
            max_lng: ne.lng,
        }
    }

    pub fn extend(&mut self, point: LatLng) {
        self.min_lat = self.min_lat.min(point.lat);
        self.max_lat = self.max_lat.max(point.lat);
        self.min_lng = self.min_lng.min(point.lng);
        self.max_lng = self.max_lng.max(point.lng);
    }

    pub fn is_empty(&self) -> bool {
        self.min_lat > self.max_lat
    }

    /// Center of the rectangle. Only meaningful on a non-empty bounds.
    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.min_lat + self.max_lat) / 2.0,
            lng: (self.min_lng + self.max_lng) / 2.0,
        }
    }

    pub fn south_west(&self) -> LatLng {
        LatLng {
            lat: self.min_lat,
            lng: self.min_lng,
        }
    }

    pub fn north_east(&self) -> LatLng {
        LatLng {
            lat: self.max_lat,
            lng: self.max_lng,
        }
    }
}

impl Default for LatLngBounds {
    fn default() -> Self {
        Self::empty()
    }
}

/// Screen-space nudge applied to an info window relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelOffset {
    pub x: i32,
    pub y: i32,
}

impl PixelOffset {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Handle to a marker owned by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u64);

/// Handle to an info window owned by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InfoWindowId(pub u64);

/// The operations the overlay manager needs from a mapping SDK.
pub trait MapSurface {
    /// Attach a marker to the map at `at`, labelled for accessibility.
    fn create_marker(&mut self, at: LatLng, label: &str) -> MarkerId;

    /// Detach a marker from the map entirely (not merely hide it).
    fn remove_marker(&mut self, marker: MarkerId);

    /// Build an info window holding pre-rendered markup, with a base
    /// offset so it sits above its anchor by default.
    fn create_info_window(&mut self, html: &str, base_offset: PixelOffset) -> InfoWindowId;

    /// Open (or re-open) a window anchored to `anchor` at the given offset.
    fn open_info_window(&mut self, window: InfoWindowId, anchor: MarkerId, offset: PixelOffset);

    fn close_info_window(&mut self, window: InfoWindowId);

    /// Currently visible region, if the map has settled enough to know it.
    fn viewport_bounds(&self) -> Option<LatLngBounds>;

    /// Fit the viewport to `bounds` with the same pixel padding on all sides.
    fn fit_bounds(&mut self, bounds: &LatLngBounds, padding_px: u32);
}

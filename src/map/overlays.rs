// src/map/overlays.rs

use std::time::{Duration, Instant};

use crate::domain::PropertySummary;
use crate::map::card::marker_card;
use crate::map::coords::resolve_coordinate;
use crate::map::surface::{InfoWindowId, LatLng, LatLngBounds, MapSurface, MarkerId, PixelOffset};

/// How long a window stays open after the pointer leaves its marker. The
/// grace period lets the pointer hop from marker to card without the card
/// vanishing underneath it.
pub const CLOSE_DELAY: Duration = Duration::from_secs(2);

/// Default window position: straight above the marker.
pub const BASE_OFFSET: PixelOffset = PixelOffset { x: 0, y: -40 };

// Viewport-relative nudges. A marker in the eastern half of the visible
// bounds pushes its window left (and vice versa); a marker in the northern
// half pushes it further up, a southern one barely at all, so the window
// tends to stay inside the viewport instead of clipping at an edge.
const NUDGE_EAST_X: i32 = -160;
const NUDGE_WEST_X: i32 = 160;
const NUDGE_NORTH_Y: i32 = -180;
const NUDGE_SOUTH_Y: i32 = -20;

struct Overlay {
    property_id: i64,
    position: LatLng,
    marker: MarkerId,
    window: InfoWindowId,
    open: bool,
    /// Pending delayed close, if any. A hover-in voids it; once voided it
    /// can never fire for that hover session.
    close_at: Option<Instant>,
}

/// Owns every live marker/info-window pair for the currently displayed
/// property list, plus the hover bookkeeping between them.
///
/// One manager per mounted map. All methods run synchronously on the
/// caller's thread; the host pumps pointer events and the clock in. The one
/// remaining race, a delayed close against a re-entering pointer, is
/// resolved deterministically in `pointer_entered`.
pub struct MarkerOverlayManager<S: MapSurface> {
    surface: S,
    navigate: Box<dyn FnMut(String)>,
    overlays: Vec<Overlay>,
}

impl<S: MapSurface> MarkerOverlayManager<S> {
    pub fn new(surface: S, navigate: impl FnMut(String) + 'static) -> Self {
        Self {
            surface,
            navigate: Box::new(navigate),
            overlays: Vec::new(),
        }
    }

    /// Replaces the whole overlay set with one built from `properties`.
    ///
    /// The previous generation is torn down first, unconditionally and
    /// synchronously, so old and new pins are never visible together and
    /// nothing leaks across rebuilds. Properties without a resolvable
    /// coordinate are skipped outright: no pin, no bounds contribution.
    ///
    /// Returns the bounds covering every pin that was created; empty when
    /// none were. Whether to fit the viewport on empty bounds is the
    /// caller's call.
    pub fn add_markers(&mut self, properties: &[PropertySummary]) -> LatLngBounds {
        self.clear();

        let mut bounds = LatLngBounds::empty();
        for property in properties {
            let Some(position) = resolve_coordinate(property) else {
                continue;
            };
            bounds.extend(position);

            let marker = self.surface.create_marker(position, &property.name);
            let window = self
                .surface
                .create_info_window(&marker_card(property).into_string(), BASE_OFFSET);

            self.overlays.push(Overlay {
                property_id: property.id,
                position,
                marker,
                window,
                open: false,
                close_at: None,
            });
        }
        bounds
    }

    /// Number of overlays currently attached.
    pub fn overlay_count(&self) -> usize {
        self.overlays.len()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Marker click: hand the destination to the injected navigator and
    /// nothing else. Routing is not this manager's business.
    pub fn marker_clicked(&mut self, marker: MarkerId) {
        if let Some(idx) = self.index_of(marker) {
            let path = format!("/properties/{}", self.overlays[idx].property_id);
            (self.navigate)(path);
        }
    }

    /// Pointer entered a marker: void any pending close for it, enforce
    /// the at-most-one-open rule by closing every sibling window, then
    /// open this one with a viewport-aware offset. Re-entering an already
    /// open overlay just re-opens it with a fresh offset.
    pub fn pointer_entered(&mut self, marker: MarkerId) {
        let Some(idx) = self.index_of(marker) else {
            return;
        };

        self.overlays[idx].close_at = None;

        for (i, overlay) in self.overlays.iter_mut().enumerate() {
            if i != idx && overlay.open {
                self.surface.close_info_window(overlay.window);
                overlay.open = false;
                overlay.close_at = None;
            }
        }

        let offset = hover_offset(
            self.overlays[idx].position,
            self.surface.viewport_bounds().as_ref(),
        );
        let overlay = &mut self.overlays[idx];
        self.surface.open_info_window(overlay.window, overlay.marker, offset);
        overlay.open = true;
    }

    /// Pointer left a marker: schedule the delayed close instead of
    /// closing outright. `now` comes from the caller so the whole manager
    /// stays clock-free and deterministic under test.
    pub fn pointer_left(&mut self, marker: MarkerId, now: Instant) {
        if let Some(idx) = self.index_of(marker) {
            let overlay = &mut self.overlays[idx];
            if overlay.open {
                overlay.close_at = Some(now + CLOSE_DELAY);
            }
        }
    }

    /// Fires every delayed close whose deadline has passed. Deadlines are
    /// per overlay and independent; one voided by a later hover-in is gone
    /// and never fires here.
    pub fn close_due(&mut self, now: Instant) {
        for overlay in &mut self.overlays {
            if overlay.close_at.is_some_and(|at| at <= now) {
                self.surface.close_info_window(overlay.window);
                overlay.open = false;
                overlay.close_at = None;
            }
        }
    }

    fn index_of(&self, marker: MarkerId) -> Option<usize> {
        self.overlays.iter().position(|o| o.marker == marker)
    }

    fn clear(&mut self) {
        for overlay in self.overlays.drain(..) {
            self.surface.close_info_window(overlay.window);
            self.surface.remove_marker(overlay.marker);
        }
    }
}

impl<S: MapSurface> Drop for MarkerOverlayManager<S> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Picks which way to push the window based on which half of the visible
/// bounds the marker sits in. Falls back to the base offset while the map
/// has not reported a viewport yet.
fn hover_offset(at: LatLng, viewport: Option<&LatLngBounds>) -> PixelOffset {
    let Some(viewport) = viewport else {
        return BASE_OFFSET;
    };
    let center = viewport.center();
    PixelOffset {
        x: if at.lng > center.lng { NUDGE_EAST_X } else { NUDGE_WEST_X },
        y: if at.lat > center.lat { NUDGE_NORTH_Y } else { NUDGE_SOUTH_Y },
    }
}

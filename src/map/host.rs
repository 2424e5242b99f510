// src/map/host.rs

use maud::{html, Markup};

use crate::domain::PropertySummary;
use crate::map::overlays::MarkerOverlayManager;
use crate::map::surface::MapSurface;

/// Pixel padding on every side when fitting the viewport to the pins.
pub const FIT_PADDING_PX: u32 = 60;

/// Shown in the map slot until the surface is ready. The map page embeds
/// the same fragment so the browser script can swap it out by id.
pub fn loading_markup() -> Markup {
    html! {
        div class="map-loading" id="map-loading" {
            span class="spinner" {}
            p { "Loading map..." }
        }
    }
}

/// The container the mapping SDK draws into.
pub fn map_canvas_markup() -> Markup {
    html! {
        div id="map" class="map-canvas" style="width: 100%; height: 70vh;" {}
    }
}

enum HostState<S: MapSurface> {
    Loading,
    Ready(MarkerOverlayManager<S>),
    Failed(String),
}

/// Owns the map lifecycle around one mounted map: initialize the surface
/// exactly once, hand the property list to the overlay manager on every
/// refresh, and fit the viewport to what came back. While the surface is
/// still loading (or failed to load) it renders the status fragment the
/// page shows in the map's place.
pub struct MapHost<S: MapSurface> {
    state: HostState<S>,
}

impl<S: MapSurface> MapHost<S> {
    pub fn new() -> Self {
        Self {
            state: HostState::Loading,
        }
    }

    /// Runs the surface factory once. A second call is a no-op regardless
    /// of outcome: a failed init stays failed (no automatic retry), a
    /// ready host keeps its manager and its overlays.
    pub fn initialize<F>(&mut self, factory: F, navigate: impl FnMut(String) + 'static)
    where
        F: FnOnce() -> Result<S, String>,
    {
        if !matches!(self.state, HostState::Loading) {
            return;
        }
        self.state = match factory() {
            Ok(surface) => HostState::Ready(MarkerOverlayManager::new(surface, navigate)),
            Err(message) => HostState::Failed(message),
        };
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, HostState::Ready(_))
    }

    /// Rebuilds the overlays for a fresh property list and fits the
    /// viewport to the result. The manager's clear-then-rebuild contract
    /// makes this correct without diffing the lists here. Fitting is
    /// skipped when nothing resolved; snapping the camera to an empty
    /// rectangle would just show the ocean.
    pub fn set_properties(&mut self, properties: &[PropertySummary]) {
        if let HostState::Ready(manager) = &mut self.state {
            let bounds = manager.add_markers(properties);
            if !bounds.is_empty() {
                manager.surface_mut().fit_bounds(&bounds, FIT_PADDING_PX);
            }
        }
    }

    /// What the page shows in the map slot for the current state.
    pub fn status_markup(&self) -> Markup {
        match &self.state {
            HostState::Loading => loading_markup(),
            HostState::Failed(message) => html! {
                div class="map-error" {
                    p { "The map could not be loaded: " (message) }
                }
            },
            HostState::Ready(_) => map_canvas_markup(),
        }
    }

    pub fn manager_mut(&mut self) -> Option<&mut MarkerOverlayManager<S>> {
        match &mut self.state {
            HostState::Ready(manager) => Some(manager),
            _ => None,
        }
    }
}

impl<S: MapSurface> Default for MapHost<S> {
    fn default() -> Self {
        Self::new()
    }
}

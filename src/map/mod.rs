pub mod card;
pub mod coords;
pub mod host;
pub mod overlays;
pub mod style;
pub mod surface;

pub use card::marker_card;
pub use coords::resolve_coordinate;
pub use host::MapHost;
pub use overlays::MarkerOverlayManager;
pub use surface::{LatLng, LatLngBounds, MapSurface, PixelOffset};

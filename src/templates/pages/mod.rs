pub mod map;
pub mod property;

pub use map::map_page;
pub use property::property_page;

pub mod connection;
pub mod properties;

pub use properties::{find_property, list_properties};

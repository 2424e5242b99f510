pub mod property;

pub use property::{PropertyDetail, PropertySummary};

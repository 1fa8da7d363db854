//! HTTP API Wrappers
//!
//! Frontend bindings to the backend and to GeoNames, organized by service.

mod points;
mod geonames;

// Re-export all public items
pub use points::*;
pub use geonames::*;

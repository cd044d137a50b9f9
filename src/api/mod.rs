//! API Clients
//!
//! Async HTTP wrappers, organized by service. Errors are flattened to
//! strings; callers log and degrade rather than abort.

mod geo;
mod points;

pub use geo::*;
pub use points::*;

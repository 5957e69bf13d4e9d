//! HTTP handlers, one module per resource.

pub mod events;
pub mod results;
pub mod stats;

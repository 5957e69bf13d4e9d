//! # wavetour-core
//!
//! Core types, traits, and abstractions for the wavetour stats API.
//!
//! This crate provides the foundational data structures and trait definitions
//! that the database and HTTP layers depend on:
//! - Entity models for events, athlete results, and site statistics
//! - Validated filter sets consumed by the SQL layer
//! - Page/offset pagination math and response metadata
//! - The [`CompetitionStore`] facade trait that isolates all data-store access

pub mod config;
pub mod error;
pub mod filters;
pub mod models;
pub mod pagination;
pub mod traits;

// Re-export commonly used types at crate root
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use filters::{EventFilter, ResultFilter};
pub use models::{AthleteResult, Event, SiteStats, StatMetric};
pub use pagination::{PageRequest, PageWindow, PaginationMeta};
pub use traits::CompetitionStore;

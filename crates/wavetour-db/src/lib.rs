//! # wavetour-db
//!
//! PostgreSQL database layer for the wavetour stats API.
//!
//! This crate provides:
//! - Connection pool management
//! - Translation of validated filter sets into parameterized WHERE clauses
//! - The [`PgCompetitionStore`] implementation of
//!   [`wavetour_core::CompetitionStore`]
//!
//! All queries are parameterized; filter values are bound, never spliced
//! into SQL text.

pub mod filter;
pub mod pool;
pub mod store;

// Re-export core types
pub use wavetour_core::*;

pub use filter::{EventFilterSql, QueryParam, ResultFilterSql};
pub use pool::{create_pool, create_pool_with_config, PoolConfig};
pub use store::PgCompetitionStore;

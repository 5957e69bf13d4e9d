//! Service configuration.
//!
//! All knobs come from the environment with sensible defaults, matching the
//! deployment style of the rest of the stack (dotenv file locally, real env
//! vars in production).

use crate::error::{Error, Result};

/// Default upper bound for `page_size`.
pub const DEFAULT_MAX_PAGE_SIZE: i64 = 500;

/// Default lower bound for the `year` filter.
pub const DEFAULT_MIN_EVENT_YEAR: i32 = 2000;

/// Default upper bound for the `year` filter (near-future window so
/// next-season calendars remain queryable).
pub const DEFAULT_MAX_EVENT_YEAR: i32 = 2030;

/// Validated runtime configuration shared across handlers.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Service name reported by the root endpoint.
    pub service_name: String,
    /// Deployment environment label (e.g. "development", "production").
    pub environment: String,
    /// Database name reported by the health endpoint.
    pub database_name: String,
    /// Upper bound for `page_size`.
    pub max_page_size: i64,
    /// Inclusive lower bound for the `year` filter.
    pub min_event_year: i32,
    /// Inclusive upper bound for the `year` filter.
    pub max_event_year: i32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            service_name: "Wavetour Stats API".to_string(),
            environment: "development".to_string(),
            database_name: "wavetour".to_string(),
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            min_event_year: DEFAULT_MIN_EVENT_YEAR,
            max_event_year: DEFAULT_MAX_EVENT_YEAR,
        }
    }
}

impl ApiConfig {
    /// Load configuration from the environment, falling back to defaults.
    ///
    /// Environment variables:
    ///   SERVICE_NAME, ENVIRONMENT, DATABASE_NAME,
    ///   MAX_PAGE_SIZE, MIN_EVENT_YEAR, MAX_EVENT_YEAR
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let config = Self {
            service_name: std::env::var("SERVICE_NAME").unwrap_or(defaults.service_name),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            database_name: std::env::var("DATABASE_NAME").unwrap_or(defaults.database_name),
            max_page_size: env_parsed("MAX_PAGE_SIZE", defaults.max_page_size)?,
            min_event_year: env_parsed("MIN_EVENT_YEAR", defaults.min_event_year)?,
            max_event_year: env_parsed("MAX_EVENT_YEAR", defaults.max_event_year)?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.max_page_size < 1 {
            return Err(Error::Config(format!(
                "MAX_PAGE_SIZE must be >= 1, got {}",
                self.max_page_size
            )));
        }
        if self.min_event_year > self.max_event_year {
            return Err(Error::Config(format!(
                "MIN_EVENT_YEAR ({}) must not exceed MAX_EVENT_YEAR ({})",
                self.min_event_year, self.max_event_year
            )));
        }
        Ok(())
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| Error::Config(format!("{} is not a valid number: '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}

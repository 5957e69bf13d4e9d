//! Query parameter validation.
//!
//! Parameters arrive from axum as raw optional strings so that a
//! non-integer `page` or `{id}` is reported as our own 422 with field
//! detail, instead of the framework's opaque deserialization failure.
//! Each endpoint has one validation function that returns a typed,
//! bounds-checked parameter struct. Validation never touches the store.

use serde::Deserialize;

use wavetour_core::{ApiConfig, EventFilter, PageRequest, ResultFilter};

/// Default page size when the client does not specify one.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// A rejected parameter: which field, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Raw query string for `GET /api/v1/events`.
#[derive(Debug, Default, Deserialize)]
pub struct RawEventListQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub year: Option<String>,
    pub country_code: Option<String>,
    pub stars: Option<String>,
    pub source: Option<String>,
    pub wave_only: Option<String>,
}

/// Validated parameters for the events listing.
#[derive(Debug, Clone, PartialEq)]
pub struct EventListParams {
    pub page: PageRequest,
    pub filter: EventFilter,
}

/// Raw query string for `GET /api/v1/athletes/results`.
#[derive(Debug, Default, Deserialize)]
pub struct RawResultListQuery {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sex: Option<String>,
    pub event_id: Option<String>,
    pub division_code: Option<String>,
}

/// Validated parameters for the athlete results listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultListParams {
    pub page: PageRequest,
    pub filter: ResultFilter,
}

/// Validate the events listing query against the configured bounds.
pub fn validate_event_list(
    raw: RawEventListQuery,
    config: &ApiConfig,
) -> Result<EventListParams, ValidationError> {
    let page = validate_page_request(raw.page.as_deref(), raw.page_size.as_deref(), config)?;

    let year = match parse_optional_int("year", raw.year.as_deref())? {
        Some(year) => {
            if year < i64::from(config.min_event_year) || year > i64::from(config.max_event_year) {
                return Err(ValidationError::new(
                    "year",
                    format!(
                        "year must be between {} and {}, got {}",
                        config.min_event_year, config.max_event_year, year
                    ),
                ));
            }
            Some(year as i32)
        }
        None => None,
    };

    let stars = match parse_optional_int("stars", raw.stars.as_deref())? {
        Some(stars) => {
            if !(1..=5).contains(&stars) {
                return Err(ValidationError::new(
                    "stars",
                    format!("stars must be between 1 and 5, got {}", stars),
                ));
            }
            Some(stars as i32)
        }
        None => None,
    };

    let filter = EventFilter {
        year,
        country_code: normalize_string(raw.country_code),
        stars,
        source: normalize_string(raw.source),
        wave_only: parse_bool("wave_only", raw.wave_only.as_deref(), true)?,
    };

    Ok(EventListParams { page, filter })
}

/// Validate the athlete results listing query against the configured bounds.
pub fn validate_result_list(
    raw: RawResultListQuery,
    config: &ApiConfig,
) -> Result<ResultListParams, ValidationError> {
    let page = validate_page_request(raw.page.as_deref(), raw.page_size.as_deref(), config)?;

    let filter = ResultFilter {
        sex: normalize_string(raw.sex),
        event_id: parse_optional_int("event_id", raw.event_id.as_deref())?,
        division_code: normalize_string(raw.division_code),
    };

    Ok(ResultListParams { page, filter })
}

/// Parse a path identifier. Non-numeric input is a validation failure,
/// distinct from a well-formed id that matches nothing.
pub fn parse_path_id(raw: &str) -> Result<i64, ValidationError> {
    raw.trim().parse().map_err(|_| {
        ValidationError::new("id", format!("id must be an integer, got '{}'", raw))
    })
}

fn validate_page_request(
    page: Option<&str>,
    page_size: Option<&str>,
    config: &ApiConfig,
) -> Result<PageRequest, ValidationError> {
    let page = parse_optional_int("page", page)?.unwrap_or(1);
    if page < 1 {
        return Err(ValidationError::new(
            "page",
            format!("page must be >= 1, got {}", page),
        ));
    }

    let page_size = parse_optional_int("page_size", page_size)?.unwrap_or(DEFAULT_PAGE_SIZE);
    if page_size < 1 || page_size > config.max_page_size {
        return Err(ValidationError::new(
            "page_size",
            format!(
                "page_size must be between 1 and {}, got {}",
                config.max_page_size, page_size
            ),
        ));
    }

    Ok(PageRequest { page, page_size })
}

fn parse_optional_int(
    field: &'static str,
    raw: Option<&str>,
) -> Result<Option<i64>, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            ValidationError::new(field, format!("{} must be an integer, got '{}'", field, value))
        }),
    }
}

/// Treat an empty or whitespace-only filter value as "no filter".
fn normalize_string(raw: Option<String>) -> Option<String> {
    raw.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn parse_bool(
    field: &'static str,
    raw: Option<&str>,
    default: bool,
) -> Result<bool, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(value) => match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            other => Err(ValidationError::new(
                field,
                format!("{} must be a boolean, got '{}'", field, other),
            )),
        },
    }
}

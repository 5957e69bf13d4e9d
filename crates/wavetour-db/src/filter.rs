//! Filter-to-SQL translation.
//!
//! These builders convert validated filter sets into WHERE-clause fragments
//! with 1-based `$n` placeholders and a parallel list of bound parameters.
//! Fragments are emitted in a fixed order and ANDed together, so the same
//! filter set always produces the same query text. A filter can only narrow
//! the result set; an empty filter produces `TRUE`.

use wavetour_core::{EventFilter, ResultFilter};

/// Type-safe parameter binding for SQL queries.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryParam {
    /// 32-bit integer parameter (year, stars).
    Int(i32),
    /// 64-bit integer parameter (ids).
    BigInt(i64),
    /// String parameter.
    String(String),
}

/// Generates the WHERE clause fragment for an [`EventFilter`].
///
/// # Example
///
/// ```rust
/// use wavetour_core::EventFilter;
/// use wavetour_db::filter::{EventFilterSql, QueryParam};
///
/// let filter = EventFilter {
///     year: Some(2025),
///     country_code: Some("CL".to_string()),
///     ..EventFilter::any()
/// };
/// let (sql, params) = EventFilterSql::new(&filter, 0).build();
/// assert_eq!(sql, "e.year = $1 AND e.country_code = $2");
/// assert_eq!(params.len(), 2);
/// ```
pub struct EventFilterSql<'a> {
    filter: &'a EventFilter,
    param_offset: usize,
}

impl<'a> EventFilterSql<'a> {
    /// Create a new builder for the given filter.
    ///
    /// `param_offset` is the number of parameters already present in the
    /// enclosing query; placeholders start at `$(param_offset + 1)`.
    pub fn new(filter: &'a EventFilter, param_offset: usize) -> Self {
        Self {
            filter,
            param_offset,
        }
    }

    /// Build the WHERE clause fragment and its bound parameters.
    ///
    /// Returns `("TRUE", [])` when no filter is active.
    pub fn build(&self) -> (String, Vec<QueryParam>) {
        let mut clauses = Vec::new();
        let mut params = Vec::new();
        let mut param_idx = self.param_offset;

        if let Some(year) = self.filter.year {
            param_idx += 1;
            clauses.push(format!("e.year = ${}", param_idx));
            params.push(QueryParam::Int(year));
        }

        if let Some(country_code) = &self.filter.country_code {
            param_idx += 1;
            clauses.push(format!("e.country_code = ${}", param_idx));
            params.push(QueryParam::String(country_code.clone()));
        }

        if let Some(stars) = self.filter.stars {
            param_idx += 1;
            clauses.push(format!("e.stars = ${}", param_idx));
            params.push(QueryParam::Int(stars));
        }

        if let Some(source) = &self.filter.source {
            param_idx += 1;
            clauses.push(format!("e.source = ${}", param_idx));
            params.push(QueryParam::String(source.clone()));
        }

        // Fixed discipline predicate, no bound value.
        if self.filter.wave_only {
            clauses.push("e.has_wave_discipline = TRUE".to_string());
        }

        finish(clauses, params)
    }
}

/// Generates the WHERE clause fragment for a [`ResultFilter`].
pub struct ResultFilterSql<'a> {
    filter: &'a ResultFilter,
    param_offset: usize,
}

impl<'a> ResultFilterSql<'a> {
    /// Create a new builder for the given filter.
    pub fn new(filter: &'a ResultFilter, param_offset: usize) -> Self {
        Self {
            filter,
            param_offset,
        }
    }

    /// Build the WHERE clause fragment and its bound parameters.
    pub fn build(&self) -> (String, Vec<QueryParam>) {
        let mut clauses = Vec::new();
        let mut params = Vec::new();
        let mut param_idx = self.param_offset;

        if let Some(sex) = &self.filter.sex {
            param_idx += 1;
            clauses.push(format!("r.sex = ${}", param_idx));
            params.push(QueryParam::String(sex.clone()));
        }

        if let Some(event_id) = self.filter.event_id {
            param_idx += 1;
            clauses.push(format!("r.event_db_id = ${}", param_idx));
            params.push(QueryParam::BigInt(event_id));
        }

        if let Some(division_code) = &self.filter.division_code {
            param_idx += 1;
            clauses.push(format!("r.division_code = ${}", param_idx));
            params.push(QueryParam::String(division_code.clone()));
        }

        finish(clauses, params)
    }
}

fn finish(clauses: Vec<String>, params: Vec<QueryParam>) -> (String, Vec<QueryParam>) {
    let sql = if clauses.is_empty() {
        "TRUE".to_string()
    } else {
        clauses.join(" AND ")
    };
    (sql, params)
}

//! PostgreSQL implementation of the query executor facade.
//!
//! All query text is assembled from static column lists and the fragments
//! produced by [`crate::filter`]; user-supplied values only ever travel as
//! bound parameters.

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgPool, PgRow};
use sqlx::query::Query;
use sqlx::{Postgres, Row};
use tracing::warn;

use wavetour_core::{
    AthleteResult, CompetitionStore, Error, Event, EventFilter, PageWindow, Result, ResultFilter,
    StatMetric,
};

use crate::filter::{EventFilterSql, QueryParam, ResultFilterSql};

const EVENT_COLUMNS: &str = "e.id, e.source, e.year, e.event_id, e.event_name, e.event_url, \
     e.event_date, e.start_date, e.end_date, e.day_window, e.event_section, e.event_status, \
     e.competition_state, e.has_wave_discipline, e.all_disciplines, e.country_flag, \
     e.country_code, e.stars, e.event_image_url, e.total_athletes, e.total_men, e.total_women";

const RESULT_COLUMNS: &str = "r.result_id, r.result_source, r.athlete_id, r.athlete_name, \
     r.nationality, r.year_of_birth, r.profile_picture_url, r.pwa_sail_number, r.event_db_id, \
     r.event_id, r.event_name, r.event_year, r.country_code, r.stars, r.event_image_url, \
     r.division_label, r.division_code, r.sex, r.placement";

/// Listing order: most recent events first, id as a stable tie-breaker.
const EVENT_ORDER: &str = "ORDER BY e.start_date DESC NULLS LAST, e.id";

/// Listing order: most recent seasons first, result id as a stable tie-breaker.
const RESULT_ORDER: &str = "ORDER BY r.event_year DESC NULLS LAST, r.result_id";

/// PostgreSQL implementation of [`CompetitionStore`].
pub struct PgCompetitionStore {
    pool: PgPool,
}

impl PgCompetitionStore {
    /// Create a new store backed by the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Bind translated filter parameters onto a query in order.
fn bind_params<'q>(
    mut q: Query<'q, Postgres, PgArguments>,
    params: &[QueryParam],
) -> Query<'q, Postgres, PgArguments> {
    for param in params {
        q = match param {
            QueryParam::Int(v) => q.bind(*v),
            QueryParam::BigInt(v) => q.bind(*v),
            QueryParam::String(v) => q.bind(v.clone()),
        };
    }
    q
}

fn map_row_to_event(row: &PgRow) -> Event {
    Event {
        id: row.get("id"),
        source: row.get("source"),
        year: row.get("year"),
        event_id: row.get("event_id"),
        event_name: row.get("event_name"),
        event_url: row.get("event_url"),
        event_date: row.get("event_date"),
        start_date: row.get("start_date"),
        end_date: row.get("end_date"),
        day_window: row.get("day_window"),
        event_section: row.get("event_section"),
        event_status: row.get("event_status"),
        competition_state: row.get("competition_state"),
        has_wave_discipline: row
            .get::<Option<bool>, _>("has_wave_discipline")
            .unwrap_or(false),
        all_disciplines: row.get("all_disciplines"),
        country_flag: row.get("country_flag"),
        country_code: row.get("country_code"),
        stars: row.get("stars"),
        event_image_url: row.get("event_image_url"),
        total_athletes: row.get("total_athletes"),
        total_men: row.get("total_men"),
        total_women: row.get("total_women"),
    }
}

fn map_row_to_result(row: &PgRow) -> AthleteResult {
    AthleteResult {
        result_id: row.get("result_id"),
        result_source: row.get("result_source"),
        athlete_id: row.get("athlete_id"),
        athlete_name: row.get("athlete_name"),
        nationality: row.get("nationality"),
        year_of_birth: row.get("year_of_birth"),
        profile_picture_url: row.get("profile_picture_url"),
        pwa_sail_number: row.get("pwa_sail_number"),
        event_db_id: row.get("event_db_id"),
        event_id: row.get("event_id"),
        event_name: row.get("event_name"),
        event_year: row.get("event_year"),
        country_code: row.get("country_code"),
        stars: row.get("stars"),
        event_image_url: row.get("event_image_url"),
        division_label: row.get("division_label"),
        division_code: row.get("division_code"),
        sex: row.get("sex"),
        placement: row.get("placement"),
    }
}

#[async_trait]
impl CompetitionStore for PgCompetitionStore {
    async fn count_events(&self, filter: &EventFilter) -> Result<i64> {
        let (clause, params) = EventFilterSql::new(filter, 0).build();
        let sql = format!("SELECT COUNT(*) FROM events e WHERE {}", clause);

        let row = bind_params(sqlx::query(&sql), &params)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(row.get::<i64, _>(0))
    }

    async fn list_events(&self, filter: &EventFilter, window: PageWindow) -> Result<Vec<Event>> {
        let (clause, params) = EventFilterSql::new(filter, 0).build();
        let sql = format!(
            "SELECT {} FROM events e WHERE {} {} LIMIT ${} OFFSET ${}",
            EVENT_COLUMNS,
            clause,
            EVENT_ORDER,
            params.len() + 1,
            params.len() + 2,
        );

        let rows = bind_params(sqlx::query(&sql), &params)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(rows.iter().map(map_row_to_event).collect())
    }

    async fn get_event(&self, id: i64) -> Result<Option<Event>> {
        let sql = format!("SELECT {} FROM events e WHERE e.id = $1", EVENT_COLUMNS);

        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(row.as_ref().map(map_row_to_event))
    }

    async fn count_results(&self, filter: &ResultFilter) -> Result<i64> {
        let (clause, params) = ResultFilterSql::new(filter, 0).build();
        let sql = format!("SELECT COUNT(*) FROM athlete_results r WHERE {}", clause);

        let row = bind_params(sqlx::query(&sql), &params)
            .fetch_one(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(row.get::<i64, _>(0))
    }

    async fn list_results(
        &self,
        filter: &ResultFilter,
        window: PageWindow,
    ) -> Result<Vec<AthleteResult>> {
        let (clause, params) = ResultFilterSql::new(filter, 0).build();
        let sql = format!(
            "SELECT {} FROM athlete_results r WHERE {} {} LIMIT ${} OFFSET ${}",
            RESULT_COLUMNS,
            clause,
            RESULT_ORDER,
            params.len() + 1,
            params.len() + 2,
        );

        let rows = bind_params(sqlx::query(&sql), &params)
            .bind(window.limit)
            .bind(window.offset)
            .fetch_all(&self.pool)
            .await
            .map_err(Error::Database)?;
        Ok(rows.iter().map(map_row_to_result).collect())
    }

    async fn site_stats(&self) -> Result<Vec<StatMetric>> {
        // Label/query pairs in display order. Each is a fixed aggregate with
        // no user input.
        const METRICS: &[(&str, &str)] = &[
            ("Total Events", "SELECT COUNT(*) FROM events"),
            (
                "Total Athletes",
                "SELECT COUNT(DISTINCT athlete_id) FROM athlete_results \
                 WHERE athlete_id IS NOT NULL",
            ),
            ("Total Results", "SELECT COUNT(*) FROM athlete_results"),
            (
                "Countries Visited",
                "SELECT COUNT(DISTINCT country_code) FROM events \
                 WHERE country_code IS NOT NULL",
            ),
            ("Seasons Covered", "SELECT COUNT(DISTINCT year) FROM events"),
        ];

        let mut stats = Vec::with_capacity(METRICS.len());
        for (label, sql) in METRICS {
            let row = sqlx::query(sql)
                .fetch_one(&self.pool)
                .await
                .map_err(Error::Database)?;
            stats.push(StatMetric::new(*label, row.get::<i64, _>(0)));
        }
        Ok(stats)
    }

    async fn probe(&self) -> Result<bool> {
        match sqlx::query("SELECT 1").fetch_one(&self.pool).await {
            Ok(_) => Ok(true),
            Err(e) => {
                warn!(
                    subsystem = "database",
                    component = "store",
                    op = "probe",
                    error = %e,
                    "Database health probe failed"
                );
                Ok(false)
            }
        }
    }
}

//! Shared test support: an in-memory `CompetitionStore` and helpers for
//! driving the router in-process without a socket.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use tower::ServiceExt;

use wavetour_api::{router, AppState};
use wavetour_core::{
    ApiConfig, AthleteResult, CompetitionStore, Error, Event, EventFilter, PageWindow,
    ResultFilter, Result, StatMetric,
};

/// In-memory store mirroring the SQL-backed store's filter and ordering
/// semantics. `failing` makes every business query error, `db_down`
/// makes only the health probe report disconnected.
#[derive(Default)]
pub struct InMemoryStore {
    pub events: Vec<Event>,
    pub results: Vec<AthleteResult>,
    pub failing: bool,
    pub db_down: bool,
}

impl InMemoryStore {
    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events,
            ..Self::default()
        }
    }

    pub fn with_results(results: Vec<AthleteResult>) -> Self {
        Self {
            results,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.failing {
            Err(Error::Internal("simulated store failure".to_string()))
        } else {
            Ok(())
        }
    }

    fn matching_events(&self, filter: &EventFilter) -> Vec<Event> {
        let mut events: Vec<Event> = self
            .events
            .iter()
            .filter(|e| {
                filter.year.map_or(true, |y| e.year == y)
                    && filter
                        .country_code
                        .as_ref()
                        .map_or(true, |c| e.country_code.as_deref() == Some(c))
                    && filter.stars.map_or(true, |s| e.stars == Some(s))
                    && filter.source.as_ref().map_or(true, |s| &e.source == s)
                    && (!filter.wave_only || e.has_wave_discipline)
            })
            .cloned()
            .collect();
        // start_date DESC NULLS LAST, then id.
        events.sort_by_key(|e| (e.start_date.is_none(), Reverse(e.start_date), e.id));
        events
    }

    fn matching_results(&self, filter: &ResultFilter) -> Vec<AthleteResult> {
        let mut results: Vec<AthleteResult> = self
            .results
            .iter()
            .filter(|r| {
                filter
                    .sex
                    .as_ref()
                    .map_or(true, |s| r.sex.as_deref() == Some(s))
                    && filter.event_id.map_or(true, |id| r.event_db_id == id)
                    && filter
                        .division_code
                        .as_ref()
                        .map_or(true, |d| r.division_code.as_deref() == Some(d))
            })
            .cloned()
            .collect();
        // event_year DESC NULLS LAST, then result_id.
        results.sort_by_key(|r| (r.event_year.is_none(), Reverse(r.event_year), r.result_id));
        results
    }
}

fn page<T>(items: Vec<T>, window: PageWindow) -> Vec<T> {
    items
        .into_iter()
        .skip(window.offset as usize)
        .take(window.limit as usize)
        .collect()
}

#[async_trait]
impl CompetitionStore for InMemoryStore {
    async fn count_events(&self, filter: &EventFilter) -> Result<i64> {
        self.check()?;
        Ok(self.matching_events(filter).len() as i64)
    }

    async fn list_events(&self, filter: &EventFilter, window: PageWindow) -> Result<Vec<Event>> {
        self.check()?;
        Ok(page(self.matching_events(filter), window))
    }

    async fn get_event(&self, id: i64) -> Result<Option<Event>> {
        self.check()?;
        Ok(self.events.iter().find(|e| e.id == id).cloned())
    }

    async fn count_results(&self, filter: &ResultFilter) -> Result<i64> {
        self.check()?;
        Ok(self.matching_results(filter).len() as i64)
    }

    async fn list_results(
        &self,
        filter: &ResultFilter,
        window: PageWindow,
    ) -> Result<Vec<AthleteResult>> {
        self.check()?;
        Ok(page(self.matching_results(filter), window))
    }

    async fn site_stats(&self) -> Result<Vec<StatMetric>> {
        self.check()?;
        Ok(vec![
            StatMetric::new("Total Events", self.events.len()),
            StatMetric::new("Total Athletes", 359),
            StatMetric::new("Total Results", self.results.len()),
            StatMetric::new("Countries Visited", 14),
            StatMetric::new("Seasons Covered", 3),
        ])
    }

    async fn probe(&self) -> Result<bool> {
        Ok(!self.db_down)
    }
}

/// Build the router against the given store with default configuration.
pub fn app(store: InMemoryStore) -> Router {
    router(AppState {
        store: Arc::new(store),
        config: ApiConfig::default(),
    })
}

/// Issue a GET and decode the JSON body.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(uri)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("router never fails");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, json)
}

/// A fully populated event for seeding stores. `start_date` is derived
/// from the year so default ordering is deterministic across ids.
pub fn sample_event(id: i64, year: i32, country: &str, stars: i32, wave: bool) -> Event {
    Event {
        id,
        source: "PWA".to_string(),
        year,
        event_id: 1000 + id,
        event_name: format!("Event {}", id),
        event_url: None,
        event_date: None,
        start_date: NaiveDate::from_ymd_opt(year, 6, 1).map(|d| d + chrono::Days::new(id as u64)),
        end_date: None,
        day_window: Some(7),
        event_section: Some("Wave".to_string()),
        event_status: Some(3),
        competition_state: Some(3),
        has_wave_discipline: wave,
        all_disciplines: Some("Wave".to_string()),
        country_flag: None,
        country_code: Some(country.to_string()),
        stars: Some(stars),
        event_image_url: None,
        total_athletes: Some(64),
        total_men: Some(48),
        total_women: Some(16),
    }
}

/// A fully populated athlete result for seeding stores.
pub fn sample_result(result_id: i64, event_db_id: i64, sex: &str, division: &str) -> AthleteResult {
    AthleteResult {
        result_id,
        result_source: "PWA".to_string(),
        athlete_id: Some(result_id + 100),
        athlete_name: format!("Athlete {}", result_id),
        nationality: Some("Chile".to_string()),
        year_of_birth: Some(1995),
        profile_picture_url: None,
        pwa_sail_number: Some(format!("CHL-{}", result_id)),
        event_db_id,
        event_id: Some(1000 + event_db_id),
        event_name: Some(format!("Event {}", event_db_id)),
        event_year: Some(2025),
        country_code: Some("CL".to_string()),
        stars: Some(5),
        event_image_url: None,
        division_label: Some("Men Wave".to_string()),
        division_code: Some(division.to_string()),
        sex: Some(sex.to_string()),
        placement: Some(result_id.to_string()),
    }
}

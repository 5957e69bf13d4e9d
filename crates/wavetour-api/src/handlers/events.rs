//! Event listing and lookup handlers.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use tracing::debug;

use wavetour_core::{Event, PaginationMeta};

use crate::error::ApiError;
use crate::params::{parse_path_id, validate_event_list, RawEventListQuery};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct EventListResponse {
    pub events: Vec<Event>,
    pub pagination: PaginationMeta,
}

/// `GET /api/v1/events` - paginated, filterable listing.
///
/// The total is counted under the same filter as the page fetch, so the
/// pagination metadata always describes the filtered set, not the table.
pub async fn list_events(
    State(state): State<AppState>,
    Query(raw): Query<RawEventListQuery>,
) -> Result<Json<EventListResponse>, ApiError> {
    let params = validate_event_list(raw, &state.config)?;

    debug!(
        page = params.page.page,
        page_size = params.page.page_size,
        year = ?params.filter.year,
        country_code = ?params.filter.country_code,
        "listing events"
    );

    let total = state.store.count_events(&params.filter).await?;
    let events = state
        .store
        .list_events(&params.filter, params.page.window())
        .await?;

    Ok(Json(EventListResponse {
        events,
        pagination: params.page.meta(total),
    }))
}

/// `GET /api/v1/events/{id}` - single event by database id.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Event>, ApiError> {
    let id = parse_path_id(&id)?;

    match state.store.get_event(id).await? {
        Some(event) => Ok(Json(event)),
        None => Err(ApiError::NotFound(format!("Event {} not found", id))),
    }
}

//! Athlete result listing handler.

use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;
use tracing::debug;

use wavetour_core::{AthleteResult, PaginationMeta};

use crate::error::ApiError;
use crate::params::{validate_result_list, RawResultListQuery};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct ResultListResponse {
    pub results: Vec<AthleteResult>,
    pub pagination: PaginationMeta,
}

/// `GET /api/v1/athletes/results` - paginated, filterable result listing.
pub async fn list_results(
    State(state): State<AppState>,
    Query(raw): Query<RawResultListQuery>,
) -> Result<Json<ResultListResponse>, ApiError> {
    let params = validate_result_list(raw, &state.config)?;

    debug!(
        page = params.page.page,
        page_size = params.page.page_size,
        event_id = ?params.filter.event_id,
        "listing athlete results"
    );

    let total = state.store.count_results(&params.filter).await?;
    let results = state
        .store
        .list_results(&params.filter, params.page.window())
        .await?;

    Ok(Json(ResultListResponse {
        results,
        pagination: params.page.meta(total),
    }))
}

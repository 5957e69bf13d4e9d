//! Site statistics handler.

use axum::extract::State;
use axum::Json;

use wavetour_core::SiteStats;

use crate::error::ApiError;
use crate::AppState;

/// `GET /api/v1/stats` - aggregate site figures.
///
/// Metrics are computed on demand; `generated_at` stamps the moment of
/// computation so clients can tell how fresh the numbers are.
pub async fn site_stats(State(state): State<AppState>) -> Result<Json<SiteStats>, ApiError> {
    let metrics = state.store.site_stats().await?;
    Ok(Json(SiteStats::new(metrics)))
}

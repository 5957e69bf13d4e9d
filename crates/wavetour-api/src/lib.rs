//! Wavetour stats HTTP API.
//!
//! Read-only service over competition data: event listings, athlete
//! results, and aggregate site statistics. Handlers talk to the data
//! layer through the [`CompetitionStore`] trait so tests can run the
//! full router against an in-memory store.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{HeaderName, Request, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;

use wavetour_core::{ApiConfig, CompetitionStore};

pub mod error;
pub mod handlers;
pub mod params;

pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Shared application state available to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CompetitionStore>,
    pub config: ApiConfig,
}

/// Request id generator. UUIDv7 keeps ids time-sortable, which makes
/// log correlation across services straightforward.
#[derive(Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::now_v7().to_string();
        id.parse().ok().map(RequestId::new)
    }
}

/// Build the full application router with tracing and request-id layers.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/v1/events", get(handlers::events::list_events))
        .route("/api/v1/events/:id", get(handlers::events::get_event))
        .route(
            "/api/v1/athletes/results",
            get(handlers::results::list_results),
        )
        .route("/api/v1/stats", get(handlers::stats::site_stats))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
        .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV7))
        .with_state(state)
}

/// `GET /` - service identity and endpoint directory.
async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "name": state.config.service_name,
        "version": env!("CARGO_PKG_VERSION"),
        "environment": state.config.environment,
        "endpoints": {
            "events": "/api/v1/events",
            "event_detail": "/api/v1/events/{id}",
            "athlete_results": "/api/v1/athletes/results",
            "stats": "/api/v1/stats",
            "health": "/health",
        },
    }))
}

/// `GET /health` - liveness plus a database round-trip.
///
/// A failed probe yields 503 so load balancers rotate the instance out;
/// it is not an application error. On success the `database` field
/// names the configured database, so a misrouted instance is visible
/// at a glance.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let connected = state.store.probe().await.unwrap_or(false);

    let status = if connected {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if connected { "healthy" } else { "unhealthy" },
            "database": if connected {
                state.config.database_name.as_str()
            } else {
                "disconnected"
            },
            "environment": state.config.environment,
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}

/// JSON 404 for unmatched routes, consistent with the error envelope.
async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": "Resource not found"})),
    )
}

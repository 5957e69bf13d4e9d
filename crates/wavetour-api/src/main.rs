//! Wavetour stats API server binary.

use std::sync::Arc;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wavetour_api::{router, AppState};
use wavetour_core::ApiConfig;
use wavetour_db::{create_pool, PgCompetitionStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    let config = ApiConfig::from_env().context("invalid configuration")?;

    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let pool = create_pool(&database_url)
        .await
        .context("failed to connect to database")?;

    let state = AppState {
        store: Arc::new(PgCompetitionStore::new(pool)),
        config: config.clone(),
    };

    let app = router(state).layer(build_cors_layer());

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    info!(
        service = %config.service_name,
        environment = %config.environment,
        addr = %bind_addr,
        "server listening"
    );

    axum::serve(listener, app)
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("wavetour_api=debug,wavetour_db=debug,tower_http=info"));

    let format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if format.eq_ignore_ascii_case("json") {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// CORS policy from `ALLOWED_ORIGINS` (comma-separated). Absent or `*`
/// means any origin, which suits local development.
fn build_cors_layer() -> CorsLayer {
    let methods = [Method::GET, Method::OPTIONS];

    match std::env::var("ALLOWED_ORIGINS") {
        Ok(raw) if raw.trim() != "*" => {
            let origins: Vec<HeaderValue> = raw
                .split(',')
                .filter_map(|origin| origin.trim().parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(methods)
                .allow_headers(Any)
        }
        _ => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(methods)
            .allow_headers(Any),
    }
}

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use skycast_core::{Aggregator, Coordinate, SunTimeClient, WeatherClient};
use std::sync::Arc;
use tracing::error;

pub struct AppState {
    pub aggregator: Aggregator<SunTimeClient, WeatherClient>,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/v1/", get(aggregate))
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Inbound query parameters. Missing parameters become empty strings and are
/// passed through to the upstreams as-is, never rejected here.
#[derive(Debug, Deserialize)]
struct CoordinateQuery {
    #[serde(default)]
    lat: String,
    #[serde(default)]
    long: String,
}

async fn aggregate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CoordinateQuery>,
) -> Response {
    let coord = Coordinate::new(query.lat, query.long);

    match state.aggregator.fetch(&coord).await {
        Ok(merged) => (StatusCode::OK, Json(merged)).into_response(),
        Err(err) => {
            error!(upstream = %err.upstream, "aggregation failed: {err}");
            let body = serde_json::json!({ "error": err.to_string() });
            (StatusCode::BAD_GATEWAY, Json(body)).into_response()
        }
    }
}

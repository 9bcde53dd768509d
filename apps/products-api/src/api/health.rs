//! Readiness endpoint

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use axum_helpers::{HealthCheckFuture, run_health_checks};
use database::mongodb::check_health_detailed;
use serde_json::Value;

use crate::state::AppState;

type ReadyResult = Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)>;

async fn ready(State(state): State<AppState>) -> ReadyResult {
    let mongodb: HealthCheckFuture = Box::pin(async {
        let status = check_health_detailed(&state.db).await;
        tracing::debug!(
            response_time_ms = status.response_time_ms,
            healthy = status.healthy,
            "MongoDB ping"
        );
        match status.message {
            None if status.healthy => Ok(()),
            message => Err(message.unwrap_or_else(|| "ping failed".to_string())),
        }
    });

    run_health_checks(vec![("mongodb", mongodb)]).await
}

/// `GET /ready`: 200 when MongoDB answers a ping, 503 otherwise
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(ready))
        .with_state(state)
}

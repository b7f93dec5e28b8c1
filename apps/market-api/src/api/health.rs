//! Readiness check backed by a real database round trip.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use axum_helpers::server::{HealthCheckFuture, run_health_checks};
use database::postgres::check_health;

use crate::state::AppState;

/// 200 when `SELECT 1` succeeds, 503 otherwise
pub async fn ready_handler(State(state): State<AppState>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async { check_health(&state.db).await.map_err(|e| e.to_string()) }),
    )];

    match run_health_checks(checks).await {
        Ok((status, json)) => (status, json).into_response(),
        Err((status, json)) => (status, json).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_state;
    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value};
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    async fn ready(db: DatabaseConnection) -> (StatusCode, serde_json::Value) {
        let response = crate::api::ready_router(test_state(db))
            .oneshot(Request::builder().uri("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_ready_when_database_answers() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([("one", Value::Int(Some(1)))])]])
            .into_connection();

        let (status, body) = ready(db).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_not_ready_when_database_fails() {
        // No queued result: the mock answers SELECT 1 with an error
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

        let (status, body) = ready(db).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body["status"], "not ready");
        assert_eq!(body["database"], "disconnected");
    }
}

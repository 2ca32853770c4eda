use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde_json::json;

use super::infra::AppState;
use crate::cases::{AgentId, CaseService, CaseSubmission};

/// Router for the case-management endpoints, carrying the service handle as
/// state. Ambient endpoints (`/health`, `/ready`, `/metrics`) are layered on
/// by the server, which owns the readiness flag and metrics handle.
pub fn case_router(service: Arc<CaseService>) -> Router {
    Router::new()
        .route("/", get(root_status))
        .route("/admin/dashboard", get(admin_dashboard))
        .route("/admin/case", post(create_case))
        .route("/dca/:dca_id/dashboard", get(agent_dashboard))
        .with_state(service)
}

pub(crate) async fn root_status() -> Json<serde_json::Value> {
    Json(json!({ "status": "SmartDCA backend running" }))
}

pub(crate) async fn admin_dashboard(State(service): State<Arc<CaseService>>) -> Response {
    (StatusCode::OK, Json(service.dashboard_summary())).into_response()
}

pub(crate) async fn create_case(
    State(service): State<Arc<CaseService>>,
    Json(submission): Json<CaseSubmission>,
) -> Response {
    match service.create_case(submission) {
        Ok(created) => {
            let payload = json!({
                "message": "Case created successfully",
                "case": created.case,
                "assessment": created.assessment,
            });
            (StatusCode::CREATED, Json(payload)).into_response()
        }
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn agent_dashboard(
    State(service): State<Arc<CaseService>>,
    Path(dca_id): Path<AgentId>,
) -> Response {
    (StatusCode::OK, Json(service.agent_dashboard(dca_id))).into_response()
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cases::DEFAULT_AGENT_ID;

    fn service() -> Arc<CaseService> {
        Arc::new(CaseService::default())
    }

    fn submission(name: &str, amount: f64, days_overdue: u32) -> CaseSubmission {
        CaseSubmission {
            customer_name: name.to_string(),
            amount,
            days_overdue,
        }
    }

    #[tokio::test]
    async fn create_case_returns_created_with_assessment() {
        let service = service();
        let response = create_case(
            State(Arc::clone(&service)),
            Json(submission("Alice", 25_000.0, 45)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(service.dashboard_summary().active_cases, 1);
    }

    #[tokio::test]
    async fn create_case_rejects_blank_name_without_mutation() {
        let service = service();
        let response = create_case(
            State(Arc::clone(&service)),
            Json(submission("  ", 100.0, 1)),
        )
        .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(service.dashboard_summary().active_cases, 0);
    }

    #[tokio::test]
    async fn agent_dashboard_handles_unknown_agent() {
        let service = service();
        let response = agent_dashboard(State(Arc::clone(&service)), Path(99)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn default_agent_dashboard_lists_created_cases() {
        let service = service();
        service
            .create_case(submission("Alice", 25_000.0, 45))
            .expect("case created");

        let dashboard = service.agent_dashboard(DEFAULT_AGENT_ID);
        assert_eq!(
            dashboard.assigned_cases,
            vec!["Alice - $25000.00 (45 days overdue)".to_string()]
        );
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::routing::get;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use super::cli::ServeArgs;
use super::infra::AppState;
use super::routes::{self, case_router};
use crate::cases::{CaseService, CaseStore};
use crate::config::AppConfig;
use crate::error::AppError;
use crate::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    // The store lives for the process and is owned by the service handle;
    // nothing else holds a reference to it.
    let service = Arc::new(CaseService::new(CaseStore::new()));

    let app = case_router(service)
        .route("/health", get(routes::healthcheck))
        .route("/ready", get(routes::readiness_endpoint))
        .route("/metrics", get(routes::metrics_endpoint))
        .layer(prometheus_layer)
        .layer(Extension(app_state));

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "smartdca case service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

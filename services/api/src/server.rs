use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryMarkerRepository};
use crate::routes::with_surgical_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use surgical_readiness::assessment::SurgicalAssessmentService;
use surgical_readiness::config::AppConfig;
use surgical_readiness::error::AppError;
use surgical_readiness::telemetry;
use tracing::info;

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

    let repository = Arc::new(InMemoryMarkerRepository::default());
    let assessment_service = Arc::new(SurgicalAssessmentService::new(repository));

    let app = with_surgical_routes(assessment_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(environment = config.environment.label(), %addr, "surgical readiness service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

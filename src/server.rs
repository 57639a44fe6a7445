use crate::cli::ServeArgs;
use crate::infra::{AppState, AssessmentState};
use crate::routes::with_assessment_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use prism_persona::assessment::{question_bank, FileStore};
use prism_persona::config::AppConfig;
use prism_persona::error::AppError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut config: AppConfig, mut args: ServeArgs) -> Result<(), AppError> {
    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(FileStore::new(config.storage.dir.clone()));
    let assessment = Arc::new(AssessmentState::new(
        store,
        question_bank(),
        config.assessment.min_completion,
    ));

    let app = with_assessment_routes(assessment)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        storage = %config.storage.dir.display(),
        "personality assessment service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

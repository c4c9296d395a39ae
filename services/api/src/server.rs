use crate::cli::ServeArgs;
use crate::infra::{build_gateways, AppState, InMemoryHistoryRepository};
use crate::routes::with_humanize_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use textify::config::AppConfig;
use textify::error::AppError;
use textify::telemetry;
use textify::workflows::humanize::HumanizeService;
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
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let repository = Arc::new(InMemoryHistoryRepository::default());
    let (rewriter, detector) = build_gateways(&config.gateways);
    let humanize_service = Arc::new(HumanizeService::new(repository, rewriter, detector));

    let app = with_humanize_routes(humanize_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "text humanizer service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

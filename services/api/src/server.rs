use crate::cli::ServeArgs;
use crate::infra::{ApiState, MetricsState};
use crate::routes::{api_router, with_metrics_route};
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::Arc;
use tracing::info;
use vot_romania::config::AppConfig;
use vot_romania::error::AppError;
use vot_romania::telemetry;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let state = ApiState::from_config(&config);
    state.load_initial();

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let metrics = MetricsState {
        metrics: Arc::new(prometheus_handle),
    };

    let app = with_metrics_route(api_router(state))
        .layer(Extension(metrics))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(environment = ?config.environment, %addr, "polling station service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

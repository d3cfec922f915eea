use crate::cli::ServeArgs;
use crate::infra::{AppState, SiteState};
use crate::routes::with_service_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use passport_housing::catalog::Catalog;
use passport_housing::config::AppConfig;
use passport_housing::error::AppError;
use passport_housing::siteconfig::SiteDataProvider;
use passport_housing::telemetry;
use passport_housing::wizard::CmsFormClient;
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

    let site_state = SiteState {
        catalog: Arc::new(Catalog::standard()),
        site: Arc::new(SiteDataProvider::from_config(&config.cms)),
        submissions: Arc::new(CmsFormClient::new(
            config.cms.endpoint.clone(),
            config.cms.domain.clone(),
        )),
    };

    let app = with_service_routes(site_state)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "student housing site service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

mod problem;
mod router;
mod telemetry;

use std::net::SocketAddr;
use std::time::Duration;

use tracing::info;

use oficina_dash_source::OrderSourceClient;
use oficina_dash_util::{load_env_file, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_env_file();
    let config = AppConfig::from_env()?;

    telemetry::init_tracing(&config)?;
    let metrics = telemetry::init_metrics()?;

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let source = OrderSourceClient::new(
        config.source_base_url.clone(),
        config.source_token.clone(),
        http,
    );

    let state = router::AppState::new(metrics, source);

    let addr: SocketAddr = config.bind_addr;
    info!(stage = "app", %addr, env = %config.environment.as_str(), source = %config.source_base_url, "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router::app_router(state))
        .await
        .map_err(|err| err.into())
}

#![recursion_limit = "256"]

mod config;
mod error;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use config::{DashboardConfig, DataSourceConfig};
use services::mock::MockSource;
use services::search_proxy::SearchProxySource;
use services::source::DataSource;

#[tokio::main]
async fn main() {
    // Missing .env is normal outside local development.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = DashboardConfig::from_env().expect("invalid configuration");

    let source: Arc<dyn DataSource> = match &config.source {
        DataSourceConfig::Mock => {
            tracing::info!("serving generated sample corpora");
            Arc::new(MockSource::new())
        }
        DataSourceConfig::SearchProxy(proxy) => {
            tracing::info!(url = %proxy.base_url, scale = ?proxy.scale, "serving search proxy data");
            Arc::new(SearchProxySource::new(proxy).expect("search proxy client init failed"))
        }
    };

    let state = state::AppState::new(source, config.default_page_size);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "chunk dashboard listening");
    axum::serve(listener, app).await.expect("server failed");
}

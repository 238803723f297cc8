//! life-predictor HTTP server.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use life_predictor::adapters::http::{api_router, PredictionHandlers, StatisticsHandlers};
use life_predictor::adapters::statistics::{SampleStatistics, WhoGhoClient, WhoGhoConfig};
use life_predictor::application::handlers::{
    GetGlobalStatisticsHandler, PredictLifeExpectancyHandler,
};
use life_predictor::config::AppConfig;
use life_predictor::domain::reference::ReferenceData;
use life_predictor::ports::StatisticsService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let reference = ReferenceData::shared();
    let sample: Arc<dyn StatisticsService> = Arc::new(SampleStatistics::new());
    let primary: Arc<dyn StatisticsService> = if config.statistics.use_sample_data {
        tracing::info!("Serving sample statistics only");
        Arc::clone(&sample)
    } else {
        Arc::new(WhoGhoClient::new(WhoGhoConfig::from(&config.statistics))?)
    };

    let app = api_router(
        PredictionHandlers::new(Arc::new(PredictLifeExpectancyHandler::new(reference))),
        StatisticsHandlers::new(Arc::new(GetGlobalStatisticsHandler::new(primary, sample))),
        &config.server,
    );

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "life-predictor listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("life-predictor shutdown complete");
    Ok(())
}

/// `RUST_LOG` wins over the configured level; production logs as JSON.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}

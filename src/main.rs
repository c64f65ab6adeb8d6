mod activities;
mod config;
mod error;
mod extractors;
mod forecast;
mod geocoding;
mod openapi;
mod routes;

use std::{sync::Arc, time::Duration};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::forecast::{ForecastService, OpenMeteoClient};
use crate::geocoding::GeocodingService;

/// Per-call limits for Open-Meteo; the request timeout layer bounds the total
const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);
const UPSTREAM_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const UPSTREAM_POOL_IDLE_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub geocoding_service: Arc<GeocodingService>,
    pub forecast_service: Arc<ForecastService>,
}

impl AppState {
    /// Wire both Open-Meteo services onto one pooled client
    fn from_config(config: AppConfig) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("tripcast/", env!("CARGO_PKG_VERSION")))
            .timeout(UPSTREAM_TIMEOUT)
            .connect_timeout(UPSTREAM_CONNECT_TIMEOUT)
            .pool_idle_timeout(UPSTREAM_POOL_IDLE_TIMEOUT)
            .build()?;

        let geocoding_service = Arc::new(GeocodingService::new(
            client.clone(),
            &config.providers.geocoding_base_url,
        ));
        let provider = Arc::new(OpenMeteoClient::new(
            client,
            &config.providers.forecast_base_url,
            config.forecast_days,
        ));
        let forecast_service = Arc::new(ForecastService::new(
            Arc::clone(&geocoding_service),
            provider,
        ));

        Ok(Self {
            config: Arc::new(config),
            geocoding_service,
            forecast_service,
        })
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "tripcast=debug,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolves on ctrl+c or SIGTERM
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Cannot listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Cannot listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = interrupt => {},
        _ = terminate => {},
    }

    tracing::info!("Shutting down");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = AppConfig::load()?;
    tracing::info!(
        default_city = %config.default_city,
        forecast_days = config.forecast_days,
        forecast_api = %config.providers.forecast_base_url,
        "Configuration loaded"
    );

    let addr = format!("{}:{}", config.host, config.port);
    let request_timeout = Duration::from_secs(config.request_timeout_secs);

    let state = AppState::from_config(config)?;
    let app = routes::with_middleware(routes::build_router(), request_timeout).with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

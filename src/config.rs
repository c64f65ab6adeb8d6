use config::{builder::DefaultState, Case, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// City used when a request names no location
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Days of forecast to request (1-16)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// Whole-request timeout, including upstream calls
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Upstream data providers
    #[serde(default)]
    pub providers: ProvidersConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ProvidersConfig {
    /// Open-Meteo forecast API base URL
    #[serde(default = "default_forecast_base_url")]
    pub forecast_base_url: String,

    /// Open-Meteo geocoding API base URL
    #[serde(default = "default_geocoding_base_url")]
    pub geocoding_base_url: String,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            forecast_base_url: default_forecast_base_url(),
            geocoding_base_url: default_geocoding_base_url(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_city() -> String {
    "Zermatt".to_string()
}

fn default_forecast_days() -> u8 {
    3
}

fn default_request_timeout_secs() -> u64 {
    60
}

fn default_forecast_base_url() -> String {
    "https://api.open-meteo.com".to_string()
}

fn default_geocoding_base_url() -> String {
    "https://geocoding-api.open-meteo.com".to_string()
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        Self::builder()?
            // Load from config file if present
            .add_source(File::with_name("config").required(false))
            .add_source(File::with_name("config.local").required(false))
            // Override with environment variables (prefixed with TRIPCAST_)
            // e.g. TRIPCAST_PROVIDERS__FORECAST_BASE_URL -> providers.forecast_base_url
            .add_source(
                Environment::with_prefix("TRIPCAST")
                    .prefix_separator("_")
                    .separator("__")
                    .convert_case(Case::Snake)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Builder preloaded with the defaults
    fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("host", default_host())?
            .set_default("port", default_port())?
            .set_default("default_city", default_city())?
            .set_default("forecast_days", default_forecast_days())?
            .set_default("request_timeout_secs", default_request_timeout_secs())
    }
}

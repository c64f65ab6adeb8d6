pub mod handlers;
pub mod models;
mod normalize;
mod service;
#[cfg(test)]
pub mod test_support;

pub use service::{ForecastError, ForecastService, OpenMeteoClient};

//! Configuration for access-service.

use anyhow::Context;
use carecore_core::config::{ObservabilityConfig, RedisConfig};

/// Configuration for access-service, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Redis connection URL.
    pub redis_url: String,

    /// OTEL exporter endpoint (optional).
    pub otel_exporter_endpoint: Option<String>,

    /// Server host address.
    pub server_host: String,

    /// Server port.
    pub server_port: u16,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `REDIS_URL` is missing or `SERVER_PORT` is not a
    /// valid port number.
    pub fn from_env() -> anyhow::Result<Self> {
        let redis_url = std::env::var("REDIS_URL").context("REDIS_URL is required")?;
        let otel_exporter_endpoint = std::env::var("OTEL_EXPORTER_ENDPOINT").ok();
        let server_host = std::env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let server_port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse().context("SERVER_PORT must be a port number")?,
            Err(_) => 8080,
        };

        Ok(Self {
            redis_url,
            otel_exporter_endpoint,
            server_host,
            server_port,
        })
    }

    /// Returns the Redis configuration.
    #[must_use]
    pub fn redis_config(&self) -> RedisConfig {
        RedisConfig {
            url: self.redis_url.clone(),
        }
    }

    /// Returns the observability configuration.
    #[must_use]
    pub fn observability_config(&self) -> ObservabilityConfig {
        ObservabilityConfig {
            otlp_endpoint: self.otel_exporter_endpoint.clone(),
        }
    }

    /// Returns the server address.
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

//! Shared configuration types.

/// Redis configuration.
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

/// Observability configuration.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub otlp_endpoint: Option<String>,
}

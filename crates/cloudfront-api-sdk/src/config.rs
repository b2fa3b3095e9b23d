//! Handler configuration

use std::env;

/// Environment variable holding the SPA origin allowed to read responses.
pub const SPA_DOMAIN_VAR: &str = "SPA_DOMAIN";

/// Origin used when no SPA domain is configured.
pub const WILDCARD_ORIGIN: &str = "*";

/// Handler configuration loaded from environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerConfig {
    /// Origin for the CORS allow-origin header
    pub spa_domain: Option<String>,
}

impl HandlerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            spa_domain: env::var(SPA_DOMAIN_VAR).ok(),
        }
    }

    /// Value for the allow-origin header: the configured domain, or `*`.
    pub fn allow_origin(&self) -> &str {
        self.spa_domain.as_deref().unwrap_or(WILDCARD_ORIGIN)
    }
}

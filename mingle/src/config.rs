//! Application settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `MINGLE_*` environment variables, or a
//! configuration file, with defaults applied by the accessors.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

use crate::stores::DEFAULT_SEARCH_DEBOUNCE;

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Invalid configuration values.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("api base url {value:?} is invalid: {source}")]
    InvalidApiBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("api base url {value:?} cannot carry a path")]
    OpaqueApiBaseUrl { value: String },
}

/// Settings for the client services and the HTTP server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "MINGLE")]
pub struct AppSettings {
    /// Base URL of the REST API the client services call.
    pub api_base_url: Option<String>,
    /// Delay applied to search keystrokes, in milliseconds.
    pub search_debounce_ms: Option<u64>,
    /// Socket address the server binds to.
    pub bind_addr: Option<String>,
}

impl AppSettings {
    /// Parsed API base URL with a trailing slash, so relative endpoints
    /// resolve below its path.
    pub fn api_base_url(&self) -> Result<Url, ConfigError> {
        let raw = self.api_base_url.as_deref().unwrap_or(DEFAULT_API_BASE_URL);
        let mut url = Url::parse(raw).map_err(|source| ConfigError::InvalidApiBaseUrl {
            value: raw.to_owned(),
            source,
        })?;
        if url.cannot_be_a_base() {
            return Err(ConfigError::OpaqueApiBaseUrl {
                value: raw.to_owned(),
            });
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn search_debounce(&self) -> Duration {
        self.search_debounce_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_SEARCH_DEBOUNCE)
    }

    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }
}

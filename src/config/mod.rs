// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Environment-driven configuration for the HTTP server, catalog backend, and Gemini
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 FlexFit

//! # Server Configuration
//!
//! Environment-only configuration. Every knob has a default that works for
//! local development; the exercise catalog key is the only variable that must
//! be set for live upstream access, and the Gemini key is optional by design
//! (its absence selects the curated fallback recommendation path).

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;

/// Default exercise catalog base URL (`RapidAPI` `ExerciseDB`)
const DEFAULT_CATALOG_BASE_URL: &str = "https://exercisedb.p.rapidapi.com";

/// Default `RapidAPI` host header for the exercise catalog
const DEFAULT_CATALOG_HOST: &str = "exercisedb.p.rapidapi.com";

/// Default Gemini model
const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Default catalog snapshot TTL: 24 hours
const DEFAULT_CACHE_TTL_SECS: u64 = 86_400;

/// Default per-call timeout for outbound HTTP requests
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Exercise catalog backend configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Base URL for the exercise catalog API
    pub base_url: String,
    /// `RapidAPI` key; empty string means unauthenticated (mock upstreams)
    pub api_key: String,
    /// `RapidAPI` host header value
    pub api_host: String,
    /// Per-call timeout for catalog requests
    pub timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_owned(),
            api_key: String::new(),
            api_host: DEFAULT_CATALOG_HOST.to_owned(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

/// Gemini generative backend configuration
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; `None` disables the generative path entirely
    pub api_key: Option<String>,
    /// Model identifier
    pub model: String,
    /// Per-call timeout for generation requests
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_GEMINI_MODEL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}

/// Top-level server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Exercise catalog backend
    pub catalog: CatalogConfig,
    /// Gemini generative backend
    pub gemini: GeminiConfig,
    /// Catalog snapshot time-to-live
    pub cache_ttl: Duration,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but unparsable.
    pub fn from_env() -> Result<Self> {
        let http_port = env_var_or("HTTP_PORT", "8080")
            .parse::<u16>()
            .context("HTTP_PORT must be a valid port number")?;

        let cache_ttl_secs = env_var_or("CATALOG_CACHE_TTL_SECS", "86400")
            .parse::<u64>()
            .context("CATALOG_CACHE_TTL_SECS must be a number of seconds")?;

        let catalog_timeout_secs = env_var_or("CATALOG_TIMEOUT_SECS", "15")
            .parse::<u64>()
            .context("CATALOG_TIMEOUT_SECS must be a number of seconds")?;

        let gemini_timeout_secs = env_var_or("GEMINI_TIMEOUT_SECS", "15")
            .parse::<u64>()
            .context("GEMINI_TIMEOUT_SECS must be a number of seconds")?;

        Ok(Self {
            http_port,
            catalog: CatalogConfig {
                base_url: env_var_or("EXERCISE_DB_BASE_URL", DEFAULT_CATALOG_BASE_URL),
                api_key: env_var_or("EXERCISE_DB_API_KEY", ""),
                api_host: env_var_or("EXERCISE_DB_API_HOST", DEFAULT_CATALOG_HOST),
                timeout: Duration::from_secs(catalog_timeout_secs),
            },
            gemini: GeminiConfig {
                api_key: env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty()),
                model: env_var_or("GEMINI_MODEL", DEFAULT_GEMINI_MODEL),
                timeout: Duration::from_secs(gemini_timeout_secs),
            },
            cache_ttl: Duration::from_secs(cache_ttl_secs),
        })
    }

    /// Human-readable configuration summary for startup logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FlexFit Recommendation Server Configuration:\n\
             - HTTP Port: {}\n\
             - Catalog: {}\n\
             - Catalog Cache TTL: {}s\n\
             - Gemini: {} ({})",
            self.http_port,
            self.catalog.base_url,
            self.cache_ttl.as_secs(),
            if self.gemini.api_key.is_some() {
                "configured"
            } else {
                "not configured (curated fallback lists)"
            },
            self.gemini.model,
        )
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: 8080,
            catalog: CatalogConfig::default(),
            gemini: GeminiConfig::default(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

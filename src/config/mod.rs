use std::env;

use anyhow::{Context, Result};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub max_upload_mb: usize,
    pub probe_timeout_seconds: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Config {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| {
                info!("SERVER_HOST not set, using default: 0.0.0.0");
                "0.0.0.0".to_string()
            }),
            server_port: Self::resolve_port()?,
            max_upload_mb: Self::parse_env_var("MAX_UPLOAD_MB", 10)
                .context("Failed to parse MAX_UPLOAD_MB")?,
            probe_timeout_seconds: Self::parse_env_var("PROBE_TIMEOUT_SECONDS", 5)
                .context("Failed to parse PROBE_TIMEOUT_SECONDS")?,
        };

        config.validate()?;

        info!("Configuration loaded successfully: {:?}", config);
        Ok(config)
    }

    /// `PORT` (set by Railway and similar platforms) takes precedence over
    /// `SERVER_PORT`.
    fn resolve_port() -> Result<u16> {
        if let Ok(val) = env::var("PORT") {
            match val.parse() {
                Ok(port) => return Ok(port),
                Err(e) => warn!("Failed to parse PORT: {} (falling back to SERVER_PORT)", e),
            }
        }
        Self::parse_env_var("SERVER_PORT", 5000).context("Failed to parse SERVER_PORT")
    }

    fn parse_env_var<T>(var_name: &str, default: T) -> Result<T>
    where
        T: std::str::FromStr + Copy + std::fmt::Debug,
        T::Err: std::fmt::Display,
    {
        match env::var(var_name) {
            Ok(val) => match val.parse() {
                Ok(parsed) => Ok(parsed),
                Err(e) => {
                    warn!("Failed to parse {}: {} (using default: {:?})", var_name, e, default);
                    Ok(default)
                }
            },
            Err(_) => {
                info!("{} not set, using default: {:?}", var_name, default);
                Ok(default)
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.server_port == 0 {
            return Err(anyhow::anyhow!("SERVER_PORT must be greater than 0"));
        }
        if self.max_upload_mb == 0 {
            return Err(anyhow::anyhow!("MAX_UPLOAD_MB must be greater than 0"));
        }
        if self.probe_timeout_seconds == 0 {
            return Err(anyhow::anyhow!("PROBE_TIMEOUT_SECONDS must be greater than 0"));
        }
        Ok(())
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 5000,
            max_upload_mb: 10,
            probe_timeout_seconds: 5,
        }
    }
}

//! Layered configuration for the contacts server.
//!
//! Precedence, lowest first: built-in defaults, YAML file, `CONTACTS__*`
//! environment variables, CLI overrides.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use contacts::ContactsConfig;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::{Deserialize, Serialize};

/// Environment variable prefix; `__` separates nesting levels.
pub const ENV_PREFIX: &str = "CONTACTS__";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub contacts: ContactsConfig,
}

/// HTTP host configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Serve `/swagger/doc.json` and the Swagger UI page.
    pub enable_docs: bool,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_owned(),
            enable_docs: true,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads defaults, then the optional YAML file, then the environment.
    ///
    /// # Errors
    /// Returns an error if a layer cannot be parsed or has unknown keys.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment
            .extract()
            .context("Failed to load contacts server configuration")
    }

    /// Applies command-line overrides on top of the loaded layers.
    ///
    /// # Errors
    /// Returns an error if a port override is given and `bind_addr` is not a
    /// socket address.
    pub fn apply_cli_overrides(&mut self, port: Option<u16>) -> Result<()> {
        if let Some(port) = port {
            let mut addr = self.server.socket_addr()?;
            addr.set_port(port);
            self.server.bind_addr = addr.to_string();
        }
        Ok(())
    }

    /// # Errors
    /// Returns an error if YAML serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize configuration to YAML")
    }
}

impl ServerConfig {
    /// # Errors
    /// Returns an error if `bind_addr` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {e}", self.bind_addr))
    }
}

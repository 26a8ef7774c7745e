//! Layered configuration and the intake-window handle.
//!
//! Configuration merges a TOML file with `VOLMATCH_`-prefixed environment
//! variables, the environment taking precedence. The intake-open flag is
//! exposed as a reloadable [`IntakeWindow`] handle injected into the
//! submission service rather than read from a process global.

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::Deserialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "volmatch.toml";

/// Environment variable prefix for overrides.
pub const ENV_PREFIX: &str = "VOLMATCH_";

/// Error returned when configuration cannot be loaded or parsed.
#[derive(Debug, Error)]
#[error("config error: {0}")]
pub struct ConfigError(#[from] figment::Error);

/// Operator credentials for the protected assignment operation.
#[derive(Debug, Clone, Deserialize)]
pub struct OperatorConfig {
    /// Operator username.
    pub username: String,
    /// Operator password.
    pub password: String,
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// `PostgreSQL` connection URL.
    pub database_url: String,
    /// Whether the intake window starts open.
    #[serde(default = "default_intake_open")]
    pub intake_open: bool,
    /// Optional operator credentials; absent in unprotected deployments.
    #[serde(default)]
    pub operator: Option<OperatorConfig>,
}

const fn default_intake_open() -> bool {
    true
}

impl AppConfig {
    /// Loads configuration from [`CONFIG_FILE`] merged with [`ENV_PREFIX`]
    /// environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Extracts configuration from an explicit figment, letting tests and
    /// embedders supply their own providers.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when extraction fails.
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        Ok(figment.extract()?)
    }

    /// Builds the intake-window handle seeded from this configuration.
    #[must_use]
    pub fn intake_window(&self) -> IntakeWindow {
        IntakeWindow::new(self.intake_open)
    }
}

/// Reloadable handle to the intake-open flag.
///
/// Clones share the underlying flag, so an operator-facing reload path can
/// toggle intake without restarting services that hold the handle. Reads are
/// lock-free.
#[derive(Debug, Clone)]
pub struct IntakeWindow(Arc<AtomicBool>);

impl IntakeWindow {
    /// Creates a handle with the given initial state.
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self(Arc::new(AtomicBool::new(open)))
    }

    /// Returns whether new submissions are currently accepted.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Opens or closes the intake window.
    pub fn set_open(&self, open: bool) {
        self.0.store(open, Ordering::Relaxed);
    }
}

impl Default for IntakeWindow {
    fn default() -> Self {
        Self::new(default_intake_open())
    }
}

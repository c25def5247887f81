//! Centralized server configuration.
//!
//! Loaded via the `config` crate from environment variables. Nested keys use
//! `__` as the separator, e.g. `SESSION__DURATION_MINUTES=60`.

use serde::Deserialize;

/// Server configuration.
#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    /// PostgreSQL database connection URL.
    pub database_url: String,

    /// Public origin of the site, e.g. `https://app.example.com`.
    /// When set, auth POSTs carrying a different `Origin` are rejected.
    #[serde(default)]
    pub site_origin: Option<String>,

    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

/// Session-related configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Session duration in minutes.
    #[serde(default = "default_session_duration_minutes")]
    pub duration_minutes: i64,

    /// Interval between session cleanup runs, in seconds.
    #[serde(default = "default_cleanup_interval_seconds")]
    pub cleanup_interval_seconds: u64,

    /// Whether to set the Secure flag on cookies (requires HTTPS).
    /// Set to false for local HTTP development.
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

fn default_session_duration_minutes() -> i64 {
    60 * 24 * 7
}

fn default_cleanup_interval_seconds() -> u64 {
    300
}

fn default_secure_cookies() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            duration_minutes: default_session_duration_minutes(),
            cleanup_interval_seconds: default_cleanup_interval_seconds(),
            secure_cookies: default_secure_cookies(),
        }
    }
}

impl SessionConfig {
    /// Rejects values the session machinery cannot run with.
    ///
    /// # Errors
    ///
    /// Returns an error if the duration or the cleanup interval is not positive.
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if self.duration_minutes <= 0 {
            return Err(config::ConfigError::Message(
                "session.duration_minutes must be positive".to_string(),
            ));
        }
        if self.cleanup_interval_seconds == 0 {
            return Err(config::ConfigError::Message(
                "session.cleanup_interval_seconds must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Session lifetime as a chrono duration.
    #[must_use]
    pub fn duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.duration_minutes)
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(true),
        )
    }

    fn from_source<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config: Self = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        config.session.validate()?;
        Ok(config)
    }
}

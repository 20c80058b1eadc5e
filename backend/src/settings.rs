//! Service configuration loaded via OrthoConfig.
//!
//! Values are layered from configuration files, `ADVOCATES_*` environment
//! variables and command-line flags. Every field is optional; accessors
//! supply the defaults.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SPECIALTIES_TTL_SECS: u64 = 3600;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Deployment flavour. Development exposes error diagnostics to clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Parse a configured name; anything unrecognised is production.
    ///
    /// # Examples
    /// ```
    /// use advocate_directory::settings::Environment;
    ///
    /// assert_eq!(Environment::from_name("Development"), Environment::Development);
    /// assert_eq!(Environment::from_name("staging"), Environment::Production);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Self::Development,
            _ => Self::Production,
        }
    }

    /// Whether diagnostics may be returned to clients.
    pub fn exposes_diagnostics(self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Errors raised when a configured value cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {message}")]
    BindAddr { value: String, message: String },
}

/// Runtime configuration for the advocate directory service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ADVOCATES")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection string. Without one the service runs on a
    /// seeded in-memory store.
    pub database_url: Option<String>,
    /// `development` or `production`.
    pub environment: Option<String>,
    /// Freshness window for the cached specialty list.
    pub specialties_cache_ttl_secs: Option<u64>,
    /// Reseed the database before serving.
    #[ortho_config(default = false)]
    pub seed_on_startup: bool,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
}

impl AppSettings {
    /// Parsed listen address.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::BindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Deployment flavour, production unless configured otherwise.
    pub fn environment(&self) -> Environment {
        self.environment
            .as_deref()
            .map(Environment::from_name)
            .unwrap_or_default()
    }

    /// Specialty cache time-to-live.
    pub fn specialties_cache_ttl(&self) -> Duration {
        Duration::from_secs(
            self.specialties_cache_ttl_secs
                .unwrap_or(DEFAULT_SPECIALTIES_TTL_SECS),
        )
    }

    /// Maximum pooled connections, at least one.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
            .max(1)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const KEYS: [&str; 6] = [
        "ADVOCATES_BIND_ADDR",
        "ADVOCATES_DATABASE_URL",
        "ADVOCATES_ENVIRONMENT",
        "ADVOCATES_SPECIALTIES_CACHE_TTL_SECS",
        "ADVOCATES_SEED_ON_STARTUP",
        "ADVOCATES_DB_MAX_CONNECTIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("advocate-directory")])
            .expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_configured() {
        let _guard = lock_env(KEYS.map(|key| (key, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([0, 0, 0, 0], 8080)))
        );
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.environment(), Environment::Production);
        assert_eq!(settings.specialties_cache_ttl(), Duration::from_secs(3600));
        assert!(!settings.seed_on_startup);
        assert_eq!(settings.db_max_connections(), 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ADVOCATES_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "ADVOCATES_DATABASE_URL",
                Some("postgres://localhost/advocates".to_owned()),
            ),
            ("ADVOCATES_ENVIRONMENT", Some("development".to_owned())),
            ("ADVOCATES_SPECIALTIES_CACHE_TTL_SECS", Some("60".to_owned())),
            ("ADVOCATES_SEED_ON_STARTUP", Some("true".to_owned())),
            ("ADVOCATES_DB_MAX_CONNECTIONS", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr(),
            Ok(SocketAddr::from(([127, 0, 0, 1], 9000)))
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://localhost/advocates")
        );
        assert!(settings.environment().exposes_diagnostics());
        assert_eq!(settings.specialties_cache_ttl(), Duration::from_secs(60));
        assert!(settings.seed_on_startup);
        assert_eq!(settings.db_max_connections(), 4);
    }

    #[rstest]
    fn malformed_bind_addresses_are_reported() {
        let _guard = lock_env(KEYS.map(|key| {
            let value = (key == "ADVOCATES_BIND_ADDR").then(|| "not-an-addr".to_owned());
            (key, value)
        }));

        let settings = load_from_empty_args();
        assert!(matches!(
            settings.bind_addr(),
            Err(SettingsError::BindAddr { .. })
        ));
    }

    #[rstest]
    #[case("", None)]
    #[case("   ", None)]
    #[case("postgres://db", Some("postgres://db"))]
    fn blank_database_urls_are_ignored(#[case] raw: &str, #[case] expected: Option<&str>) {
        let settings = AppSettings {
            bind_addr: None,
            database_url: Some(raw.to_owned()),
            environment: None,
            specialties_cache_ttl_secs: None,
            seed_on_startup: false,
            db_max_connections: None,
        };
        assert_eq!(settings.database_url(), expected);
    }
}

//! Runtime settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `SIGNUP_*` environment variables, and optional
//! configuration files, in increasing order of precedence from file to CLI.

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_CONNECT_TIMEOUT_SECS: u64 = 30;

/// Settings controlling the listener and the user store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SIGNUP")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    pub port: Option<u16>,
    /// PostgreSQL connection URL; users are kept in memory when unset.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Seconds to wait for a pooled connection.
    pub db_connect_timeout_secs: Option<u64>,
    /// Apply embedded migrations before serving.
    #[ortho_config(default = false)]
    pub run_migrations: bool,
}

impl ServerSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .filter(|url| !url.trim().is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    pub fn db_connect_timeout(&self) -> Duration {
        Duration::from_secs(
            self.db_connect_timeout_secs
                .unwrap_or(DEFAULT_DB_CONNECT_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 6] = [
        "SIGNUP_HOST",
        "SIGNUP_PORT",
        "SIGNUP_DATABASE_URL",
        "SIGNUP_DB_MAX_CONNECTIONS",
        "SIGNUP_DB_CONNECT_TIMEOUT_SECS",
        "SIGNUP_RUN_MIGRATIONS",
    ];

    fn load_from_args(args: &[&str]) -> ServerSettings {
        let argv = std::iter::once(OsString::from("signup")).chain(args.iter().map(OsString::from));
        ServerSettings::load_from_iter(argv).expect("settings should load")
    }

    /// Every `SIGNUP_*` variable cleared except `overrides`.
    fn env_with(overrides: &[(&'static str, &str)]) -> Vec<(&'static str, Option<String>)> {
        VARS.iter()
            .map(|&name| {
                let value = overrides
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| (*value).to_owned());
                (name, value)
            })
            .collect()
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(env_with(&[]));

        let settings = load_from_args(&[]);

        assert_eq!(settings.host(), "0.0.0.0");
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.database_url(), None);
        assert_eq!(settings.db_max_connections(), 10);
        assert_eq!(settings.db_connect_timeout(), Duration::from_secs(30));
        assert!(!settings.run_migrations);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env(env_with(&[
            ("SIGNUP_HOST", "127.0.0.1"),
            ("SIGNUP_PORT", "9090"),
            ("SIGNUP_DATABASE_URL", "postgres://signup@localhost/signup"),
            ("SIGNUP_DB_MAX_CONNECTIONS", "4"),
            ("SIGNUP_DB_CONNECT_TIMEOUT_SECS", "5"),
            ("SIGNUP_RUN_MIGRATIONS", "true"),
        ]));

        let settings = load_from_args(&[]);

        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 9090);
        assert_eq!(
            settings.database_url(),
            Some("postgres://signup@localhost/signup")
        );
        assert_eq!(settings.db_max_connections(), 4);
        assert_eq!(settings.db_connect_timeout(), Duration::from_secs(5));
        assert!(settings.run_migrations);
    }

    #[rstest]
    fn cli_flags_override_environment() {
        let _guard = lock_env(env_with(&[("SIGNUP_PORT", "9090")]));

        let settings = load_from_args(&["--port", "7000"]);

        assert_eq!(settings.port(), 7000);
    }

    #[rstest]
    fn blank_database_url_selects_memory_store() {
        let _guard = lock_env(env_with(&[("SIGNUP_DATABASE_URL", "  ")]));

        assert_eq!(load_from_args(&[]).database_url(), None);
    }
}

//! Server Configuration
//!
//! Read once at startup from the process environment (after `.env`).

use std::env;
use std::fmt;

use anyhow::{Context, bail};

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Process-level settings
#[derive(Clone)]
pub struct ServerConfig {
    /// `DATABASE_URL`, or legacy `DBDSN`
    pub database_url: String,
    /// `JWT_SECRET`, or legacy `JWTSECRET`; may be empty
    pub jwt_secret: String,
    /// `PORT`, accepts `8080` or `:8080`
    pub port: u16,
    /// `FRONTEND_ORIGINS`, comma separated
    pub frontend_origins: Vec<String>,
    /// `DATABASE_MAX_CONNECTIONS`
    pub database_max_connections: u32,
}

impl ServerConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |keys: &[&str]| {
            keys.iter()
                .filter_map(|key| lookup(key))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        let Some(database_url) = get(&["DATABASE_URL", "DBDSN"]) else {
            bail!("DATABASE_URL (or DBDSN) must be set in environment");
        };

        let jwt_secret = get(&["JWT_SECRET", "JWTSECRET"]).unwrap_or_default();

        let port = match get(&["PORT"]) {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        let frontend_origins = get(&["FRONTEND_ORIGINS"])
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let database_max_connections = match get(&["DATABASE_MAX_CONNECTIONS"]) {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("invalid DATABASE_MAX_CONNECTIONS: {raw}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
            frontend_origins,
            database_max_connections,
        })
    }
}

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    raw.trim_start_matches(':')
        .parse()
        .with_context(|| format!("invalid PORT: {raw}"))
}

impl fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServerConfig")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("port", &self.port)
            .field("frontend_origins", &self.frontend_origins)
            .field("database_max_connections", &self.database_max_connections)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ServerConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let cfg = config(&[("DATABASE_URL", "postgres://localhost/app")]).unwrap();
        assert_eq!(cfg.database_url, "postgres://localhost/app");
        assert_eq!(cfg.jwt_secret, "");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.database_max_connections, 5);
        assert_eq!(cfg.frontend_origins.len(), 2);
    }

    #[test]
    fn test_database_url_required() {
        assert!(config(&[]).is_err());
        assert!(config(&[("DATABASE_URL", "  ")]).is_err());
    }

    #[test]
    fn test_legacy_names() {
        let cfg = config(&[("DBDSN", "postgres://db/app"), ("JWTSECRET", "s3cret")]).unwrap();
        assert_eq!(cfg.database_url, "postgres://db/app");
        assert_eq!(cfg.jwt_secret, "s3cret");
    }

    #[test]
    fn test_primary_names_win() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://primary/app"),
            ("DBDSN", "postgres://legacy/app"),
            ("JWT_SECRET", "primary"),
            ("JWTSECRET", "legacy"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url, "postgres://primary/app");
        assert_eq!(cfg.jwt_secret, "primary");
    }

    #[test]
    fn test_port_forms() {
        let base = ("DATABASE_URL", "postgres://localhost/app");
        assert_eq!(config(&[base, ("PORT", ":9090")]).unwrap().port, 9090);
        assert_eq!(config(&[base, ("PORT", "9091")]).unwrap().port, 9091);
        assert!(config(&[base, ("PORT", "http")]).is_err());
    }

    #[test]
    fn test_origins_and_pool_size() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("FRONTEND_ORIGINS", "https://a.example, ,https://b.example"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();
        assert_eq!(cfg.frontend_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(cfg.database_max_connections, 12);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cfg = config(&[
            ("DATABASE_URL", "postgres://user:pw@localhost/app"),
            ("JWT_SECRET", "s3cret"),
        ])
        .unwrap();
        let debug = format!("{cfg:?}");
        assert!(!debug.contains("s3cret"));
        assert!(!debug.contains("pw@"));
    }
}

//! Server Configuration
//!
//! Read from the environment (after `.env` has been loaded).

use anyhow::{Context, bail};
use auth::{AuthConfig, HashScheme};
use base64::Engine;
use base64::engine::general_purpose;
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000";
const BCRYPT_COSTS: std::ops::RangeInclusive<u32> = 4..=31;

pub struct ApiConfig {
    /// Postgres connection string; TLS requirements go in here (`sslmode=require`)
    pub database_url: String,
    pub max_connections: u32,
    pub addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("POSTGRES_URL")
            .or_else(|| lookup("DATABASE_URL"))
            .context("POSTGRES_URL or DATABASE_URL must be set")?;

        let max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => v
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {v}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let addr = lookup("API_ADDR")
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
            .parse()
            .context("API_ADDR is not a socket address")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let password_pepper = lookup("PASSWORD_PEPPER")
            .map(|b64| general_purpose::STANDARD.decode(b64.trim()))
            .transpose()
            .context("PASSWORD_PEPPER is not valid base64")?;

        let equalize_timing = match lookup("AUTH_EQUALIZE_TIMING").as_deref() {
            None => true,
            Some("true" | "1") => true,
            Some("false" | "0") => false,
            Some(other) => bail!("AUTH_EQUALIZE_TIMING must be true or false, got {other}"),
        };

        let dummy_scheme = match lookup("AUTH_DUMMY_HASH").as_deref() {
            None | Some("bcrypt") => HashScheme::Bcrypt,
            Some("argon2") => HashScheme::Argon2,
            Some(other) => bail!("AUTH_DUMMY_HASH must be bcrypt or argon2, got {other}"),
        };

        let dummy_bcrypt_cost = match lookup("AUTH_DUMMY_BCRYPT_COST") {
            Some(v) => v
                .parse::<u32>()
                .ok()
                .filter(|cost| BCRYPT_COSTS.contains(cost))
                .with_context(|| format!("AUTH_DUMMY_BCRYPT_COST must be 4..=31, got {v}"))?,
            None => auth::application::DEFAULT_DUMMY_BCRYPT_COST,
        };

        Ok(Self {
            database_url,
            max_connections,
            addr,
            frontend_origins,
            auth: AuthConfig {
                password_pepper,
                equalize_timing,
                dummy_scheme,
                dummy_bcrypt_cost,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<ApiConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[("DATABASE_URL", "postgres://localhost/app")]).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/app");
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.addr, DEFAULT_ADDR.parse::<SocketAddr>().unwrap());
        assert_eq!(config.frontend_origins, vec!["http://localhost:3000"]);
        assert!(config.auth.password_pepper.is_none());
        assert!(config.auth.equalize_timing);
        assert_eq!(config.auth.dummy_scheme, HashScheme::Bcrypt);
        assert_eq!(config.auth.dummy_bcrypt_cost, 10);
    }

    #[test]
    fn test_postgres_url_wins() {
        let config = config(&[
            ("POSTGRES_URL", "postgres://primary/app"),
            ("DATABASE_URL", "postgres://fallback/app"),
        ])
        .unwrap();
        assert_eq!(config.database_url, "postgres://primary/app");
    }

    #[test]
    fn test_database_url_required() {
        assert!(config(&[]).is_err());
    }

    #[test]
    fn test_overrides() {
        let config = config(&[
            ("DATABASE_URL", "postgres://localhost/app"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
            ("API_ADDR", "127.0.0.1:8080"),
            ("FRONTEND_ORIGINS", "https://a.example, https://b.example,"),
            ("PASSWORD_PEPPER", "cGVwcGVy"),
            ("AUTH_EQUALIZE_TIMING", "false"),
            ("AUTH_DUMMY_HASH", "argon2"),
            ("AUTH_DUMMY_BCRYPT_COST", "12"),
        ])
        .unwrap();

        assert_eq!(config.max_connections, 12);
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(
            config.frontend_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
        assert!(!config.auth.equalize_timing);
        assert_eq!(config.auth.dummy_scheme, HashScheme::Argon2);
        assert_eq!(config.auth.dummy_bcrypt_cost, 12);
    }

    #[test]
    fn test_invalid_values() {
        let base = ("DATABASE_URL", "postgres://localhost/app");
        assert!(config(&[base, ("DATABASE_MAX_CONNECTIONS", "many")]).is_err());
        assert!(config(&[base, ("API_ADDR", "localhost")]).is_err());
        assert!(config(&[base, ("PASSWORD_PEPPER", "not base64!")]).is_err());
        assert!(config(&[base, ("AUTH_EQUALIZE_TIMING", "maybe")]).is_err());
        assert!(config(&[base, ("AUTH_DUMMY_HASH", "md5")]).is_err());
        assert!(config(&[base, ("AUTH_DUMMY_BCRYPT_COST", "3")]).is_err());
        assert!(config(&[base, ("AUTH_DUMMY_BCRYPT_COST", "ten")]).is_err());
    }
}

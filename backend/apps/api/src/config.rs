//! Server Configuration
//!
//! Read from the environment (after `.env` is loaded by `main`).

use std::net::SocketAddr;

use anyhow::{Context, bail};
use auth::AuthConfig;
use base64::Engine;
use base64::engine::general_purpose;
use tasks::TaskConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:31113";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string; `None` runs on the in-memory store
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub auth: AuthConfig,
    pub tasks: TaskConfig,
}

impl AppConfig {
    /// Load from process environment
    ///
    /// Secrets are mandatory in release builds. Debug builds fall back to
    /// random secrets and insecure cookies.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok(), !cfg!(debug_assertions))
    }

    pub fn from_lookup<F>(lookup: F, production: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(value) => value
                .parse()
                .with_context(|| format!("DATABASE_MAX_CONNECTIONS is not a number: {value}"))?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be host:port")?;

        let session_secret = lookup("SESSION_SECRET")
            .map(|value| decode_secret("SESSION_SECRET", &value))
            .transpose()?;
        let password_secret = lookup("PASSWORD_SECRET")
            .map(|value| decode_secret("PASSWORD_SECRET", &value))
            .transpose()?;

        let (auth, tasks) = if production {
            let (Some(session_secret), Some(password_secret)) = (session_secret, password_secret)
            else {
                bail!("SESSION_SECRET and PASSWORD_SECRET must be set in production");
            };
            let auth = AuthConfig {
                session_secret,
                password_secret,
                ..AuthConfig::default()
            };
            (auth, TaskConfig::default())
        } else {
            let mut auth = AuthConfig::development();
            if let Some(secret) = session_secret {
                auth.session_secret = secret;
            }
            if let Some(secret) = password_secret {
                auth.password_secret = secret;
            }
            (auth, TaskConfig::development())
        };

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            auth,
            tasks,
        })
    }
}

/// Base64-encoded 32-byte key
fn decode_secret(name: &str, value: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = general_purpose::STANDARD
        .decode(value.trim())
        .with_context(|| format!("{name} is not valid base64"))?;

    <[u8; 32]>::try_from(bytes.as_slice())
        .map_err(|_| anyhow::anyhow!("{name} must decode to 32 bytes, got {}", bytes.len()))
}

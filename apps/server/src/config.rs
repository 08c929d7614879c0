use std::{net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use anyhow::{bail, Context};
use rust_decimal::Decimal;
use wealthnest_core::constants::DEFAULT_PRICE_REFRESH_INTERVAL_SECS;

use crate::auth::decode_secret_key;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub prices_file: PathBuf,
    pub price_refresh_interval: Duration,
    /// Mock drift applied to the price file on every refresh.
    pub price_drift: Option<Decimal>,
    pub jwt_secret: Vec<u8>,
    pub access_token_ttl: Duration,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    env_or(key, default)
        .trim()
        .parse()
        .with_context(|| format!("Invalid {}", key))
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = parse_env("WN_LISTEN_ADDR", "0.0.0.0:8080")?;
        let db_path = env_or("WN_DB_PATH", "./db/app.db");
        let prices_file = PathBuf::from(env_or("WN_PRICES_FILE", "./prices.json"));

        let refresh_secs: u64 = parse_env(
            "WN_PRICE_REFRESH_SECS",
            &DEFAULT_PRICE_REFRESH_INTERVAL_SECS.to_string(),
        )?;
        if refresh_secs == 0 {
            bail!("WN_PRICE_REFRESH_SECS must be greater than 0");
        }

        let price_drift = match std::env::var("WN_PRICE_DRIFT") {
            Ok(raw) if !raw.trim().is_empty() => {
                let factor = Decimal::from_str(raw.trim()).context("Invalid WN_PRICE_DRIFT")?;
                if factor <= Decimal::ZERO {
                    bail!("WN_PRICE_DRIFT must be positive");
                }
                Some(factor)
            }
            _ => None,
        };

        let raw_secret = std::env::var("WN_JWT_SECRET").context("WN_JWT_SECRET is required")?;
        let jwt_secret = decode_secret_key(&raw_secret)?;

        let ttl_minutes: u64 = parse_env("WN_ACCESS_TOKEN_TTL_MINUTES", "60")?;
        let cors_allow = env_or("WN_CORS_ALLOW_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = parse_env("WN_REQUEST_TIMEOUT_MS", "30000")?;

        Ok(Self {
            listen_addr,
            db_path,
            prices_file,
            price_refresh_interval: Duration::from_secs(refresh_secs),
            price_drift,
            jwt_secret,
            access_token_ttl: Duration::from_secs(ttl_minutes * 60),
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        })
    }
}

use anyhow::{anyhow, Context, Result};
use dotenv::dotenv;
use std::time::Duration;

use crate::constants::{AMAP_DISTRICT_URL, AMAP_WEATHER_URL, DEFAULT_TIMEOUT_SECS};

/// Runtime settings for the AMap endpoints.
#[derive(Clone)]
pub struct Settings {
    pub amap_api_key: String,
    pub district_url: String,
    pub weather_url: String,
    pub request_timeout: Duration,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("amap_api_key", &"<redacted>")
            .field("district_url", &self.district_url)
            .field("weather_url", &self.weather_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Settings {
    /// Load settings from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let amap_api_key = lookup("AMAP_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "AMAP_API_KEY is not set.\n\
                     Hint: export AMAP_API_KEY=<your key> or add it to a .env file."
                )
            })?;

        let request_timeout = match lookup("AMAP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .trim()
                    .parse()
                    .with_context(|| format!("AMAP_TIMEOUT_SECS must be an integer, got '{raw}'"))?;
                if secs == 0 {
                    return Err(anyhow!("AMAP_TIMEOUT_SECS must be greater than zero"));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            amap_api_key,
            district_url: lookup("AMAP_DISTRICT_URL").unwrap_or_else(|| AMAP_DISTRICT_URL.to_string()),
            weather_url: lookup("AMAP_WEATHER_URL").unwrap_or_else(|| AMAP_WEATHER_URL.to_string()),
            request_timeout,
        })
    }
}

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::{sync::Arc, time::Duration};

use crate::config::Settings;
use crate::constants::{AMAP_STATUS_OK, USER_AGENT};
use crate::error::ApiError;

/// HTTP plumbing shared by the district and weather clients.
#[derive(Clone)]
pub struct AmapHttp {
    client: Arc<Client>,
    api_key: Arc<str>,
}

impl AmapHttp {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client: Arc::new(client),
            api_key: Arc::from(api_key.into()),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, reqwest::Error> {
        Self::new(settings.amap_api_key.clone(), settings.request_timeout)
    }

    /// Makes an AMap GET request and deserializes the JSON envelope.
    ///
    /// `key` and `output=JSON` are appended to `params`. Transport errors have
    /// their URL stripped so the API key never reaches a tool result.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .get(url)
            .query(&[("key", &*self.api_key)])
            .query(params)
            .query(&[("output", "JSON")])
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.text().await.map_err(reqwest::Error::without_url)?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl std::fmt::Debug for AmapHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmapHttp").finish_non_exhaustive()
    }
}

/// Rejects envelopes whose `status` is not the AMap success sentinel.
pub fn ensure_ok(status: &str, info: Option<&str>) -> Result<(), ApiError> {
    if status == AMAP_STATUS_OK {
        return Ok(());
    }

    Err(ApiError::Provider {
        status: status.to_string(),
        info: info.unwrap_or_default().to_string(),
    })
}

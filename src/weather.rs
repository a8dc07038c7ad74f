use serde_json::Value;

use crate::cache::AdminCode;
use crate::client::{ensure_ok, AmapHttp};
use crate::error::{ApiError, NoData};
use crate::models::WeatherResponse;

/// Which AMap weather product to request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryMode {
    /// Live conditions (`extensions=base`)
    Current,
    /// Multi-day forecast (`extensions=all`)
    Forecast,
}

impl QueryMode {
    pub fn extensions(&self) -> &'static str {
        match self {
            QueryMode::Current => "base",
            QueryMode::Forecast => "all",
        }
    }
}

/// Client for the AMap weather query.
#[derive(Debug, Clone)]
pub struct WeatherQueryClient {
    http: AmapHttp,
    url: String,
}

impl WeatherQueryClient {
    pub fn new(http: AmapHttp, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// Fetches the provider payload for `code`, unmodified.
    pub async fn query(&self, code: &AdminCode, mode: QueryMode) -> Result<Value, ApiError> {
        tracing::debug!("Querying AMap weather for adcode {} ({:?})", code, mode);

        let response: WeatherResponse = self
            .http
            .get_json(
                &self.url,
                &[("city", code.as_str()), ("extensions", mode.extensions())],
            )
            .await?;

        extract_payload(response, mode)
    }
}

/// Takes the first `lives` or `forecasts` entry out of a weather envelope.
pub fn extract_payload(response: WeatherResponse, mode: QueryMode) -> Result<Value, ApiError> {
    ensure_ok(&response.status, response.info.as_deref())?;

    match mode {
        QueryMode::Current => response
            .lives
            .and_then(|lives| lives.into_iter().next())
            .ok_or(ApiError::NoData(NoData::Lives)),
        QueryMode::Forecast => {
            let forecast = response
                .forecasts
                .and_then(|forecasts| forecasts.into_iter().next())
                .ok_or(ApiError::NoData(NoData::Forecasts))?;

            let has_casts = forecast
                .get("casts")
                .and_then(Value::as_array)
                .is_some_and(|casts| !casts.is_empty());
            if !has_casts {
                return Err(ApiError::NoData(NoData::Casts));
            }

            Ok(forecast)
        }
    }
}

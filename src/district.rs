use async_trait::async_trait;

use crate::client::{ensure_ok, AmapHttp};
use crate::error::{ApiError, NoData};
use crate::models::{District, DistrictResponse};

/// Source of candidate districts for a city keyword.
#[async_trait]
pub trait DistrictLookup: Send + Sync {
    async fn lookup(&self, name: &str) -> Result<Vec<District>, ApiError>;
}

/// Client for the AMap administrative-district query.
#[derive(Debug, Clone)]
pub struct DistrictLookupClient {
    http: AmapHttp,
    url: String,
}

impl DistrictLookupClient {
    pub fn new(http: AmapHttp, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }
}

#[async_trait]
impl DistrictLookup for DistrictLookupClient {
    /// Returns the top-level districts for `name` in provider order.
    async fn lookup(&self, name: &str) -> Result<Vec<District>, ApiError> {
        tracing::debug!("Querying AMap districts for '{}'", name);

        let response: DistrictResponse = self
            .http
            .get_json(&self.url, &[("keywords", name), ("subdistrict", "0")])
            .await?;

        ensure_ok(&response.status, response.info.as_deref())?;

        match response.districts {
            Some(districts) if !districts.is_empty() => Ok(districts),
            _ => Err(ApiError::NoData(NoData::Districts)),
        }
    }
}

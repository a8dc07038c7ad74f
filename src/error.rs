use reqwest::StatusCode;
use thiserror::Error;

/// Failure talking to one of the AMap endpoints.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("request failed with status: {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("provider returned status {status}: {info}")]
    Provider { status: String, info: String },

    #[error("response contained no {0}")]
    NoData(NoData),
}

/// Which list of an otherwise successful response came back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoData {
    Districts,
    Lives,
    Forecasts,
    Casts,
}

impl std::fmt::Display for NoData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NoData::Districts => "districts",
            NoData::Lives => "live weather",
            NoData::Forecasts => "forecasts",
            NoData::Casts => "daily casts",
        })
    }
}

/// Why a city name could not be mapped to an adcode.
#[derive(Debug, Error)]
pub enum ResolutionFailure {
    #[error("city name is empty after normalization")]
    EmptyName,

    #[error("district lookup failed: {0}")]
    Lookup(#[from] ApiError),

    #[error("no district matched '{0}'")]
    NoMatch(String),
}

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// AMap District API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct DistrictResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub info: Option<String>,
    pub districts: Option<Vec<District>>,
}

/// One candidate region returned by the district query.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct District {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub adcode: String,
}

// ============================================================================
// AMap Weather API Models
// ============================================================================

/// Weather envelope. Entries of `lives` and `forecasts` stay provider-shaped.
#[derive(Debug, Deserialize)]
pub struct WeatherResponse {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub info: Option<String>,
    pub lives: Option<Vec<Value>>,
    pub forecasts: Option<Vec<Value>>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct LocationRequest {
    /// City name in Mainland China, e.g. "北京", "上海" or "杭州市"
    pub location: String,
}

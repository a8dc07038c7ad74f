/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-amap-weather-server/0.1.0";

/// AMap administrative-district query endpoint
pub const AMAP_DISTRICT_URL: &str = "https://restapi.amap.com/v3/config/district";

/// AMap weather query endpoint
pub const AMAP_WEATHER_URL: &str = "https://restapi.amap.com/v3/weather/weatherInfo";

/// Per-request timeout applied to both AMap endpoints
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Value of the envelope `status` field on success
pub const AMAP_STATUS_OK: &str = "1";

/// Administrative suffixes stripped from city names, in removal order
pub const CITY_SUFFIXES: [&str; 3] = ["市", "区", "县"];

/// Suffix tried when matching a normalized name against district names
pub const CITY_SUFFIX: &str = "市";

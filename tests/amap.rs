//! End-to-end tests of the weather tools against a fake AMap served by wiremock.

use mcp_amap_weather_server::client::AmapHttp;
use mcp_amap_weather_server::{
    ApiError, DistrictLookup, DistrictLookupClient, NoData, ResolutionCache, Settings,
    WeatherCapability, WeatherToolFacade,
};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DISTRICT_PATH: &str = "/v3/config/district";
const WEATHER_PATH: &str = "/v3/weather/weatherInfo";

fn settings_for(server: &MockServer, timeout_secs: u64) -> Settings {
    let uri = server.uri();
    Settings::from_lookup(|key| match key {
        "AMAP_API_KEY" => Some("TEST_KEY".to_string()),
        "AMAP_DISTRICT_URL" => Some(format!("{uri}{DISTRICT_PATH}")),
        "AMAP_WEATHER_URL" => Some(format!("{uri}{WEATHER_PATH}")),
        "AMAP_TIMEOUT_SECS" => Some(timeout_secs.to_string()),
        _ => None,
    })
    .expect("settings should load")
}

fn facade_for(server: &MockServer) -> WeatherToolFacade {
    WeatherToolFacade::from_settings(&settings_for(server, 5), ResolutionCache::new())
        .expect("facade should build")
}

fn beijing_districts() -> Value {
    json!({
        "status": "1",
        "info": "OK",
        "infocode": "10000",
        "count": "1",
        "districts": [{
            "citycode": "010",
            "adcode": "110000",
            "name": "北京市",
            "center": "116.407387,39.904179",
            "level": "province",
            "districts": []
        }]
    })
}

fn beijing_live() -> Value {
    json!({
        "province": "北京",
        "city": "北京市",
        "adcode": "110000",
        "weather": "晴",
        "temperature": "25",
        "winddirection": "南",
        "windpower": "≤3",
        "humidity": "30",
        "reporttime": "2024-05-01 14:00:00"
    })
}

async fn mount_beijing_district(server: &MockServer, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(DISTRICT_PATH))
        .and(query_param("key", "TEST_KEY"))
        .and(query_param("keywords", "北京"))
        .and(query_param("subdistrict", "0"))
        .and(query_param("output", "JSON"))
        .respond_with(ResponseTemplate::new(200).set_body_json(beijing_districts()))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn current_weather_returns_live_payload_and_caches_adcode() {
    let server = MockServer::start().await;
    mount_beijing_district(&server, 1).await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("key", "TEST_KEY"))
        .and(query_param("city", "110000"))
        .and(query_param("extensions", "base"))
        .and(query_param("output", "JSON"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "count": "1",
            "info": "OK",
            "infocode": "10000",
            "lives": [beijing_live()]
        })))
        .expect(2)
        .mount(&server)
        .await;

    let facade = facade_for(&server);

    let first = facade.get_current_weather("北京").await;
    let second = facade.get_current_weather("北京市").await;

    let payload: Value = serde_json::from_str(&first).expect("reply should be the payload JSON");
    assert_eq!(payload, beijing_live());
    assert_eq!(first, second);
    assert_eq!(facade.resolver().cache().len(), 1);
}

#[tokio::test]
async fn forecast_returns_first_forecast() {
    let server = MockServer::start().await;
    mount_beijing_district(&server, 1).await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .and(query_param("extensions", "all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "info": "OK",
            "forecasts": [{
                "city": "北京市",
                "adcode": "110000",
                "reporttime": "2024-05-01 11:00:00",
                "casts": [
                    {"date": "2024-05-01", "dayweather": "晴", "daytemp": "27", "nighttemp": "14"},
                    {"date": "2024-05-02", "dayweather": "多云", "daytemp": "25", "nighttemp": "15"}
                ]
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = facade_for(&server).get_weather_forecast("北京").await;

    let payload: Value = serde_json::from_str(&reply).expect("reply should be the payload JSON");
    assert_eq!(payload["casts"].as_array().map(Vec::len), Some(2));
    assert_eq!(payload["casts"][1]["dayweather"], "多云");
}

#[tokio::test]
async fn unknown_place_gets_an_apology() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DISTRICT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "info": "OK",
            "count": "0",
            "districts": []
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let reply = facade_for(&server).get_current_weather("UnknownPlace").await;

    assert!(reply.starts_with("抱歉"), "reply: {reply}");
    assert!(reply.contains("UnknownPlace"));
    assert!(reply.contains("中国大陆"));
}

#[tokio::test]
async fn failed_district_lookup_is_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DISTRICT_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(2)
        .mount(&server)
        .await;

    let facade = facade_for(&server);

    assert!(facade.get_weather_forecast("北京").await.starts_with("抱歉"));
    assert!(facade.get_weather_forecast("北京").await.starts_with("抱歉"));
    assert!(facade.resolver().cache().is_empty());
}

#[tokio::test]
async fn forecast_without_casts_reports_missing_detail() {
    let server = MockServer::start().await;
    mount_beijing_district(&server, 1).await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "info": "OK",
            "forecasts": [{"city": "北京市", "adcode": "110000", "casts": []}]
        })))
        .mount(&server)
        .await;

    let reply = facade_for(&server).get_weather_forecast("北京").await;

    assert_eq!(reply, "未找到 北京 的详细预报数据");
}

#[tokio::test]
async fn server_error_reads_as_network_failure() {
    let server = MockServer::start().await;
    mount_beijing_district(&server, 1).await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let reply = facade_for(&server).get_current_weather("北京").await;

    assert!(reply.starts_with("网络请求失败："), "reply: {reply}");
    assert!(reply.contains("500"));
}

#[tokio::test]
async fn malformed_body_reads_as_parse_failure() {
    let server = MockServer::start().await;
    mount_beijing_district(&server, 1).await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let reply = facade_for(&server).get_weather_forecast("北京").await;

    assert_eq!(reply, "解析天气预报数据失败");
}

#[tokio::test]
async fn provider_rejection_includes_info() {
    let server = MockServer::start().await;
    mount_beijing_district(&server, 1).await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "0",
            "info": "INVALID_USER_KEY",
            "infocode": "10001"
        })))
        .mount(&server)
        .await;

    let reply = facade_for(&server).get_current_weather("北京").await;

    assert_eq!(reply, "获取天气信息失败：INVALID_USER_KEY");
}

#[tokio::test]
async fn empty_lives_reports_missing_data() {
    let server = MockServer::start().await;
    mount_beijing_district(&server, 1).await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "1",
            "info": "OK",
            "lives": []
        })))
        .mount(&server)
        .await;

    let reply = facade_for(&server).get_current_weather("北京市").await;

    assert_eq!(reply, "未找到 北京市 的天气数据");
}

#[tokio::test]
async fn slow_provider_times_out_as_network_failure() {
    let server = MockServer::start().await;
    mount_beijing_district(&server, 1).await;

    Mock::given(method("GET"))
        .and(path(WEATHER_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "1", "lives": [beijing_live()]}))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let facade = WeatherToolFacade::from_settings(&settings_for(&server, 1), ResolutionCache::new())
        .expect("facade should build");
    let reply = facade.get_current_weather("北京").await;

    assert!(reply.starts_with("网络请求失败："), "reply: {reply}");
    assert!(!reply.contains("TEST_KEY"));
}

#[tokio::test]
async fn district_client_rejects_provider_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DISTRICT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "0",
            "info": "USER_DAILY_QUERY_OVER_LIMIT"
        })))
        .mount(&server)
        .await;

    let http = AmapHttp::new("TEST_KEY", Duration::from_secs(5)).expect("client should build");
    let client = DistrictLookupClient::new(http, format!("{}{DISTRICT_PATH}", server.uri()));

    let err = client.lookup("北京").await.unwrap_err();
    assert!(matches!(err, ApiError::Provider { ref info, .. } if info == "USER_DAILY_QUERY_OVER_LIMIT"));
}

#[tokio::test]
async fn district_client_rejects_missing_districts() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(DISTRICT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "1", "info": "OK"})))
        .mount(&server)
        .await;

    let http = AmapHttp::new("TEST_KEY", Duration::from_secs(5)).expect("client should build");
    let client = DistrictLookupClient::new(http, format!("{}{DISTRICT_PATH}", server.uri()));

    let err = client.lookup("北京").await.unwrap_err();
    assert!(matches!(err, ApiError::NoData(NoData::Districts)));
}

use serde_json::Value;

use crate::error::{ApiError, NoData};
use crate::weather::QueryMode;

fn subject(mode: QueryMode) -> &'static str {
    match mode {
        QueryMode::Current => "天气信息",
        QueryMode::Forecast => "天气预报",
    }
}

/// Reply used when a location cannot be mapped to an adcode
pub fn format_unresolved(mode: QueryMode, location: &str) -> String {
    format!(
        "抱歉，无法找到 {} 的城市编码，请检查城市名称是否正确。支持查询中国大陆地区的城市{}。",
        location,
        subject(mode)
    )
}

/// Renders a provider payload as compact JSON, keeping every provider field
pub fn format_payload(payload: &Value) -> String {
    payload.to_string()
}

/// Converts a query failure into the sentence returned to the agent
pub fn format_failure(mode: QueryMode, location: &str, err: &ApiError) -> String {
    match err {
        ApiError::Transport(_) | ApiError::Status(_) => format!("网络请求失败：{}", err),
        ApiError::Parse(_) => match mode {
            QueryMode::Current => "解析天气数据失败".to_string(),
            QueryMode::Forecast => "解析天气预报数据失败".to_string(),
        },
        ApiError::Provider { info, .. } => {
            let info = if info.is_empty() { "未知错误" } else { info.as_str() };
            format!("获取{}失败：{}", subject(mode), info)
        }
        ApiError::NoData(NoData::Lives) => format!("未找到 {} 的天气数据", location),
        ApiError::NoData(NoData::Forecasts) => format!("未找到 {} 的天气预报数据", location),
        ApiError::NoData(NoData::Casts) => format!("未找到 {} 的详细预报数据", location),
        ApiError::NoData(NoData::Districts) => {
            format!("获取{}时发生错误：{}", subject(mode), err)
        }
    }
}

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::facade::WeatherCapability;
use crate::models::LocationRequest;

/// MCP server exposing the AMap weather tools
#[derive(Clone)]
pub struct Weather {
    tools: Arc<dyn WeatherCapability>,
    tool_router: ToolRouter<Self>,
}

impl Weather {
    /// Creates a new Weather service backed by `tools`
    pub fn new(tools: Arc<dyn WeatherCapability>) -> Self {
        Self {
            tools,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_handler]
impl ServerHandler for Weather {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-amap-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather information service powered by the AMap (高德地图) API. \
                Provides current conditions and multi-day forecasts for cities in Mainland China."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl Weather {
    /// Gets current weather conditions for a Chinese city
    #[tool(description = "获取指定地点的当前天气信息。Get current weather for a city in Mainland China. Provide a city name (e.g., '北京', '上海', '杭州市').")]
    async fn get_current_weather(
        &self,
        Parameters(request): Parameters<LocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting current weather for: {}", request.location);

        let reply = self.tools.get_current_weather(&request.location).await;

        Ok(CallToolResult::success(vec![Content::text(reply)]))
    }

    /// Gets the multi-day forecast for a Chinese city
    #[tool(description = "获取指定地点的天气预报信息。Get the multi-day weather forecast for a city in Mainland China. Provide a city name (e.g., '北京', '上海', '杭州市').")]
    async fn get_weather_forecast(
        &self,
        Parameters(request): Parameters<LocationRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather forecast for: {}", request.location);

        let reply = self.tools.get_weather_forecast(&request.location).await;

        Ok(CallToolResult::success(vec![Content::text(reply)]))
    }
}

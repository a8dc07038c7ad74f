use anyhow::Result;
use rmcp::ServiceExt;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mcp_amap_weather_server::{ResolutionCache, Settings, Weather, WeatherToolFacade};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mcp_amap_weather_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::from_env()?;
    tracing::info!(
        "Starting MCP weather server (district: {}, weather: {})",
        settings.district_url,
        settings.weather_url
    );

    let facade = WeatherToolFacade::from_settings(&settings, ResolutionCache::new())?;
    let weather = Weather::new(Arc::new(facade));
    let server = weather.serve(rmcp::transport::stdio()).await?;
    server.waiting().await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

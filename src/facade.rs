use async_trait::async_trait;
use std::sync::Arc;

use crate::cache::ResolutionCache;
use crate::client::AmapHttp;
use crate::config::Settings;
use crate::district::DistrictLookupClient;
use crate::formatters::{format_failure, format_payload, format_unresolved};
use crate::resolver::AdministrativeCodeResolver;
use crate::weather::{QueryMode, WeatherQueryClient};

/// The two weather operations exposed to a tool-calling agent.
///
/// Both take a free-text location and always produce a readable reply.
#[async_trait]
pub trait WeatherCapability: Send + Sync {
    async fn get_current_weather(&self, location: &str) -> String;

    async fn get_weather_forecast(&self, location: &str) -> String;
}

/// Composes adcode resolution, the weather query and reply rendering.
#[derive(Debug, Clone)]
pub struct WeatherToolFacade {
    resolver: AdministrativeCodeResolver,
    weather: WeatherQueryClient,
}

impl WeatherToolFacade {
    pub fn new(resolver: AdministrativeCodeResolver, weather: WeatherQueryClient) -> Self {
        Self { resolver, weather }
    }

    /// Wires both AMap clients over one HTTP client, using `cache` for adcodes.
    pub fn from_settings(settings: &Settings, cache: ResolutionCache) -> anyhow::Result<Self> {
        let http = AmapHttp::from_settings(settings)?;
        let districts = DistrictLookupClient::new(http.clone(), settings.district_url.clone());
        let resolver = AdministrativeCodeResolver::new(Arc::new(districts), cache);
        let weather = WeatherQueryClient::new(http, settings.weather_url.clone());

        Ok(Self::new(resolver, weather))
    }

    pub fn resolver(&self) -> &AdministrativeCodeResolver {
        &self.resolver
    }

    async fn answer(&self, location: &str, mode: QueryMode) -> String {
        let Some(code) = self.resolver.resolve(location).await else {
            return format_unresolved(mode, location);
        };

        match self.weather.query(&code, mode).await {
            Ok(payload) => format_payload(&payload),
            Err(e) => {
                tracing::warn!("Weather query for '{}' ({}) failed: {}", location, code, e);
                format_failure(mode, location, &e)
            }
        }
    }
}

#[async_trait]
impl WeatherCapability for WeatherToolFacade {
    async fn get_current_weather(&self, location: &str) -> String {
        self.answer(location, QueryMode::Current).await
    }

    async fn get_weather_forecast(&self, location: &str) -> String {
        self.answer(location, QueryMode::Forecast).await
    }
}

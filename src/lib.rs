//! AMap-backed weather tools for tool-calling agents.
//!
//! City names are resolved to AMap adcodes (cached for the life of the
//! process), then used to query live conditions or forecasts. Every outcome
//! is rendered as a single string so an agent can consume it as a tool result.

pub mod cache;
pub mod client;
pub mod config;
pub mod constants;
pub mod district;
pub mod error;
pub mod facade;
pub mod formatters;
pub mod models;
pub mod resolver;
pub mod service;
pub mod weather;

pub use cache::{AdminCode, ResolutionCache};
pub use config::Settings;
pub use district::{DistrictLookup, DistrictLookupClient};
pub use error::{ApiError, NoData, ResolutionFailure};
pub use facade::{WeatherCapability, WeatherToolFacade};
pub use resolver::AdministrativeCodeResolver;
pub use service::Weather;
pub use weather::{QueryMode, WeatherQueryClient};

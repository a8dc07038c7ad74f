use std::sync::Arc;

use crate::cache::{AdminCode, ResolutionCache};
use crate::constants::{CITY_SUFFIX, CITY_SUFFIXES};
use crate::district::DistrictLookup;
use crate::error::ResolutionFailure;
use crate::models::District;

/// Maps free-text city names to AMap adcodes, caching successful lookups.
#[derive(Clone)]
pub struct AdministrativeCodeResolver {
    lookup: Arc<dyn DistrictLookup>,
    cache: ResolutionCache,
}

impl AdministrativeCodeResolver {
    pub fn new(lookup: Arc<dyn DistrictLookup>, cache: ResolutionCache) -> Self {
        Self { lookup, cache }
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    /// Resolves `city` to an adcode, or `None` if it cannot be mapped.
    ///
    /// Failures are logged and never cached.
    pub async fn resolve(&self, city: &str) -> Option<AdminCode> {
        match self.try_resolve(city).await {
            Ok(code) => Some(code),
            Err(e) => {
                tracing::warn!("Failed to resolve adcode for '{}': {}", city, e);
                None
            }
        }
    }

    pub async fn try_resolve(&self, city: &str) -> Result<AdminCode, ResolutionFailure> {
        let name = normalize_city_name(city);
        if name.is_empty() {
            return Err(ResolutionFailure::EmptyName);
        }

        if let Some(code) = self.cache.get(&name) {
            tracing::debug!("Adcode cache hit for '{}': {}", name, code);
            return Ok(code);
        }

        let districts = self.lookup.lookup(&name).await?;
        let code = select_adcode(&name, &districts)
            .map(AdminCode::new)
            .ok_or_else(|| ResolutionFailure::NoMatch(name.clone()))?;

        tracing::debug!("Resolved '{}' to adcode {}", name, code);
        self.cache.insert(name, code.clone());
        Ok(code)
    }
}

impl std::fmt::Debug for AdministrativeCodeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdministrativeCodeResolver")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Trims whitespace and strips trailing `市`/`区`/`县` until none remain.
pub fn normalize_city_name(raw: &str) -> String {
    let mut name = raw.trim();
    while let Some(stripped) = CITY_SUFFIXES.iter().find_map(|s| name.strip_suffix(s)) {
        name = stripped.trim_end();
    }
    name.to_string()
}

/// Picks the adcode for `name`: first exact match, else first substring match.
pub fn select_adcode<'a>(name: &str, districts: &'a [District]) -> Option<&'a str> {
    let with_suffix = format!("{name}{CITY_SUFFIX}");
    let candidates = || {
        districts
            .iter()
            .filter(|d| !d.name.is_empty() && !d.adcode.is_empty())
    };

    candidates()
        .find(|d| d.name == name || d.name == with_suffix)
        .or_else(|| candidates().find(|d| d.name.contains(name) || name.contains(d.name.as_str())))
        .map(|d| d.adcode.as_str())
}

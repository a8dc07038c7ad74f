use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// AMap administrative code, e.g. `110000` for Beijing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdminCode(String);

impl AdminCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AdminCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalized city name to adcode map shared by every resolver clone.
///
/// Entries are never evicted. Only successful resolutions are stored.
#[derive(Debug, Clone, Default)]
pub struct ResolutionCache {
    entries: Arc<RwLock<HashMap<String, AdminCode>>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<AdminCode> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Last writer wins.
    pub fn insert(&self, name: impl Into<String>, code: AdminCode) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), code);
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

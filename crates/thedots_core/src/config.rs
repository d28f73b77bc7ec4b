//! Runtime configuration for list limits.
//!
//! Values come from code (`Default` + builders), from serialized settings
//! (serde, missing fields fall back to defaults) or from the environment.

use serde::{Deserialize, Serialize};

/// Default maximum number of points per list.
pub const DEFAULT_POINT_LIST_SIZE_LIMIT: u64 = 10_000;

/// Environment variable overriding `point_list_size_limit`.
pub const LIST_SIZE_LIMIT_ENV: &str = "THEDOTS_LIST_SIZE_LIMIT";

/// Limits applied to list writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Maximum number of points one list may hold.
    pub point_list_size_limit: u64,
}

impl ListConfig {
    pub fn new(point_list_size_limit: u64) -> Self {
        Self {
            point_list_size_limit,
        }
    }

    pub fn with_point_list_size_limit(mut self, limit: u64) -> Self {
        self.point_list_size_limit = limit;
        self
    }

    /// Defaults overridden by `THEDOTS_LIST_SIZE_LIMIT` when set.
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, String> {
        let config = Self::default();
        match lookup(LIST_SIZE_LIMIT_ENV) {
            None => Ok(config),
            Some(raw) => {
                let limit = raw.trim().parse::<u64>().map_err(|err| {
                    format!("invalid {LIST_SIZE_LIMIT_ENV} value `{raw}`: {err}")
                })?;
                Ok(config.with_point_list_size_limit(limit))
            }
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(DEFAULT_POINT_LIST_SIZE_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::{ListConfig, DEFAULT_POINT_LIST_SIZE_LIMIT, LIST_SIZE_LIMIT_ENV};

    #[test]
    fn missing_fields_use_defaults() {
        let config: ListConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.point_list_size_limit, DEFAULT_POINT_LIST_SIZE_LIMIT);
    }

    #[test]
    fn lookup_overrides_limit() {
        let config = ListConfig::from_lookup(|key| {
            (key == LIST_SIZE_LIMIT_ENV).then(|| " 25 ".to_string())
        })
        .unwrap();
        assert_eq!(config.point_list_size_limit, 25);
    }

    #[test]
    fn lookup_rejects_garbage() {
        let err = ListConfig::from_lookup(|_| Some("lots".to_string())).unwrap_err();
        assert!(err.contains(LIST_SIZE_LIMIT_ENV));
    }
}

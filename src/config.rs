//! Preview configuration

use crate::activator::DEFAULT_LINK_ID;
use crate::error::Result;
use crate::state::{DEFAULT_FONT, DEFAULT_WEIGHT};
use serde::Deserialize;

/// Path of the catalog document on the serving origin
pub const DEFAULT_CATALOG_URL: &str = "/fonts.json";

/// Settings for a preview instance. Every field may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewConfig {
    /// Where the font catalog is fetched from
    pub catalog_url: String,
    /// Element id of the head stylesheet link
    pub link_id: String,
    pub default_font: String,
    pub default_weight: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            link_id: DEFAULT_LINK_ID.to_string(),
            default_font: DEFAULT_FONT.to_string(),
            default_weight: DEFAULT_WEIGHT.to_string(),
        }
    }
}

impl PreviewConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PreviewConfig::default();
        assert_eq!(config.catalog_url, "/fonts.json");
        assert_eq!(config.link_id, "font-link");
        assert_eq!(config.default_font, "Arial");
        assert_eq!(config.default_weight, "normal");
    }

    #[test]
    fn test_partial_json() {
        let config = PreviewConfig::from_json(r#"{"catalogUrl": "/static/fonts.json"}"#).unwrap();
        assert_eq!(config.catalog_url, "/static/fonts.json");
        assert_eq!(config.link_id, "font-link");
        assert_eq!(PreviewConfig::from_json("{}").unwrap(), PreviewConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        assert!(PreviewConfig::from_json(r#"{"linkId": 5}"#).is_err());
    }
}

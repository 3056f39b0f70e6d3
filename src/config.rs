//! Site configuration: resource paths, storage keys and effect tuning.
//!
//! Everything has a default so the page runs with `start_portfolio()` alone;
//! `start_portfolio_with_config()` overlays a JSON object on top.

use serde::Deserialize;

/// Delays (milliseconds) used by the typewriter between steps.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypingTimings {
    pub type_ms: u32,   // reveal one character
    pub delete_ms: u32, // remove one character
    pub hold_ms: u32,   // full text shown, before deleting starts
    pub next_ms: u32,   // text emptied, before the next one starts
}

impl Default for TypingTimings {
    fn default() -> Self {
        Self {
            type_ms: 150,
            delete_ms: 75,
            hold_ms: 2000,
            next_ms: 500,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub profile_path: String,
    pub portfolio_path: String,
    pub cv_download_path: String,
    pub theme_storage_key: String,
    pub language_storage_key: String,
    pub particle_count: usize,
    pub typing: TypingTimings,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            profile_path: "cv_data.json".to_string(),
            portfolio_path: "portfolio_data.json".to_string(),
            cv_download_path: "cv.pdf".to_string(),
            theme_storage_key: "theme".to_string(),
            language_storage_key: "lang".to_string(),
            particle_count: 50,
            typing: TypingTimings::default(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON object over the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = SiteConfig::from_json(r#"{ "particle_count": 12, "typing": { "hold_ms": 900 } }"#)
            .unwrap();
        assert_eq!(cfg.particle_count, 12);
        assert_eq!(cfg.typing.hold_ms, 900);
        assert_eq!(cfg.typing.type_ms, 150);
        assert_eq!(cfg.profile_path, "cv_data.json");
        assert_eq!(cfg.language_storage_key, "lang");
    }

    #[test]
    fn rejects_wrong_types() {
        assert!(SiteConfig::from_json(r#"{ "particle_count": "many" }"#).is_err());
    }
}

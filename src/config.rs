//! Page configuration.
//!
//! The admin template may embed
//! `<script id="composer-config" type="application/json">{...}</script>`
//! to point the composer at another backend or other placeholder art.
//! Every key is optional.

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::image::Slot;

pub const CONFIG_ELEMENT_ID: &str = "composer-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    pub publish_endpoint: String,
    pub demo_endpoint: String,
    pub log_level: String,
    pub default_assets: DefaultAssets,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultAssets {
    pub author: String,
    pub preview: String,
    pub post: String,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            publish_endpoint: "/api/post".into(),
            demo_endpoint: "http://localhost:3000/admin".into(),
            log_level: "info".into(),
            default_assets: DefaultAssets::default(),
        }
    }
}

impl Default for DefaultAssets {
    fn default() -> Self {
        Self {
            author: "/static/img/upload-author.svg".into(),
            preview: "/static/img/upload-preview-small.svg".into(),
            post: "/static/img/upload-preview-big.svg".into(),
        }
    }
}

impl DefaultAssets {
    pub fn for_slot(&self, slot: Slot) -> &str {
        match slot {
            Slot::Author => &self.author,
            Slot::Preview => &self.preview,
            Slot::Post => &self.post,
        }
    }
}

impl ComposerConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw).map_err(|e| Error::Config(e.to_string()))
    }

    /// Falls back to `Info` for anything `log` can't parse.
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }

    /// Reads the embedded config block, if the page has one.
    ///
    /// Runs before the logger exists, so failures are handed back to the
    /// caller to report once logging is up.
    pub fn load() -> (Self, Option<Error>) {
        let raw = crate::dom::document()
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());

        match raw {
            None => (Self::default(), None),
            Some(raw) => match Self::from_json(&raw) {
                Ok(cfg) => (cfg, None),
                Err(e) => (Self::default(), Some(e)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_block_gives_defaults() {
        let cfg = ComposerConfig::from_json("  \n").unwrap();
        assert_eq!(cfg, ComposerConfig::default());
        assert_eq!(cfg.publish_endpoint, "/api/post");
        assert_eq!(cfg.demo_endpoint, "http://localhost:3000/admin");
    }

    #[test]
    fn partial_block_keeps_other_defaults() {
        let cfg = ComposerConfig::from_json(
            r#"{"publish_endpoint":"/v2/post","default_assets":{"post":"/img/hero.png"}}"#,
        )
        .unwrap();
        assert_eq!(cfg.publish_endpoint, "/v2/post");
        assert_eq!(cfg.demo_endpoint, "http://localhost:3000/admin");
        assert_eq!(cfg.default_assets.post, "/img/hero.png");
        assert_eq!(cfg.default_assets.author, "/static/img/upload-author.svg");
    }

    #[test]
    fn malformed_block_is_a_config_error() {
        let err = ComposerConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn level_parses_or_falls_back() {
        let mut cfg = ComposerConfig::default();
        assert_eq!(cfg.level(), log::Level::Info);
        cfg.log_level = "debug".into();
        assert_eq!(cfg.level(), log::Level::Debug);
        cfg.log_level = "loud".into();
        assert_eq!(cfg.level(), log::Level::Info);
    }

    #[test]
    fn each_slot_has_its_own_default_asset() {
        let assets = DefaultAssets::default();
        let paths = [
            assets.for_slot(Slot::Author),
            assets.for_slot(Slot::Preview),
            assets.for_slot(Slot::Post),
        ];
        assert_ne!(paths[0], paths[1]);
        assert_ne!(paths[1], paths[2]);
        assert_ne!(paths[0], paths[2]);
    }
}

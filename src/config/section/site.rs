//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Ada Lovelace"       # <title>; defaults to the portfolio name
//! lang = "en"                  # <html lang>
//! data = "portfolio.json"      # generated portfolio data
//! url = "https://ada.dev/me"   # public URL; its path becomes the asset prefix
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Document title. Empty means "use the portfolio name".
    pub title: String,

    /// Document language.
    pub lang: String,

    /// Portfolio data file (relative to the project root).
    pub data: PathBuf,

    /// Public site URL.
    pub url: Option<String>,
}

impl Default for SiteSectionConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            lang: "en".into(),
            data: PathBuf::from("portfolio.json"),
            url: None,
        }
    }
}

impl SiteSectionConfig {
    pub const DATA: FieldPath = FieldPath::new("site.data");
    pub const URL: FieldPath = FieldPath::new("site.url");
    pub const LANG: FieldPath = FieldPath::new("site.lang");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.lang.trim().is_empty() {
            diag.error(Self::LANG, "must not be empty");
        }

        if let Some(url) = &self.url
            && url::Url::parse(url).is_err()
        {
            diag.error_with_hint(
                Self::URL,
                format!("`{url}` is not an absolute URL"),
                "use a full URL such as \"https://example.com/\"",
            );
        }
    }

    /// Check the data file exists (after path normalization).
    pub fn validate_data(&self, diag: &mut ConfigDiagnostics) {
        if !self.data.is_file() {
            diag.error_with_hint(
                Self::DATA,
                format!("data file `{}` not found", self.data.display()),
                "point `site.data` at the generated portfolio.json",
            );
        }
    }
}

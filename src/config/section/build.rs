//! `[build]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [build]
//! output = "public"    # Output directory
//! assets = "assets"    # Copied verbatim into the output (if present)
//! clean = false        # Remove the output directory before building
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Output directory.
    pub output: PathBuf,

    /// Static assets directory.
    pub assets: PathBuf,

    /// Clean output directory completely before building.
    pub clean: bool,

    /// URL path prefix derived from `site.url` (internal use only).
    #[serde(skip)]
    pub path_prefix: PathBuf,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("public"),
            assets: PathBuf::from("assets"),
            clean: false,
            path_prefix: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;

    #[test]
    fn test_build_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.build.output.to_str(), Some("public"));
        assert_eq!(config.build.assets.to_str(), Some("assets"));
        assert!(!config.build.clean);
    }

    #[test]
    fn test_build_override() {
        let config = test_parse_config("[build]\noutput = \"dist\"\nclean = true");
        assert_eq!(config.build.output.to_str(), Some("dist"));
        assert!(config.build.clean);
    }
}

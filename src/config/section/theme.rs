//! `[theme]` section configuration.
//!
//! ```toml
//! [theme]
//! dark = true   # Initial theme of the page
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Start in dark mode.
    pub dark: bool,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self { dark: true }
    }
}

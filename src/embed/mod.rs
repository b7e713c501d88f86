//! Embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `asset` - Embedded asset types with content-hash filenames
//! - `page` - Runtime script and stylesheet shipped with every page
//! - `serve` - Dev server only (hotreload.js)
//!
//! # Usage
//!
//! ```ignore
//! use embed::page::{CLIENT_JS, ClientVars, STYLE_CSS};
//!
//! let vars = ClientVars::from_config(&config);
//! CLIENT_JS.write_to(&output_dir, &vars)?;
//! let tag = STYLE_CSS.external_tag_with_vars(&(), "/portfolio");
//! ```

mod asset;
mod template;

pub use asset::{AssetKind, EmbeddedAsset};
pub use template::{Template, TemplateVars};

pub mod page {
    use super::{AssetKind, EmbeddedAsset, TemplateVars};
    use crate::client::ObserverOptions;
    use crate::config::SiteConfig;

    /// Variables for folio.js.
    #[derive(Debug, Clone)]
    pub struct ClientVars {
        pub threshold: f64,
        pub root_margin: String,
    }

    impl ClientVars {
        pub fn from_options(options: &ObserverOptions) -> Self {
            Self {
                threshold: options.threshold,
                root_margin: options.root_margin_css(),
            }
        }

        pub fn from_config(config: &SiteConfig) -> Self {
            Self::from_options(&config.observer_options())
        }
    }

    impl TemplateVars for ClientVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__FOLIO_THRESHOLD__", &self.threshold.to_string())
                .replace(
                    "__FOLIO_ROOT_MARGIN__",
                    &serde_json::to_string(&self.root_margin)
                        .unwrap_or_else(|_| "\"0px\"".into()),
                )
        }

        fn hash_input(&self) -> String {
            format!("{}{}", self.threshold, self.root_margin)
        }
    }

    /// Page runtime: section tracking, navigation, theme toggle.
    pub const CLIENT_JS: EmbeddedAsset<ClientVars> =
        EmbeddedAsset::new(AssetKind::JavaScript, "folio", include_str!("client/folio.js"));

    /// Page stylesheet.
    pub const STYLE_CSS: EmbeddedAsset<()> =
        EmbeddedAsset::new(AssetKind::Css, "folio", include_str!("css/folio.css"));
}

pub mod serve {
    use super::{AssetKind, EmbeddedAsset, TemplateVars};

    /// Variables for hotreload.js.
    pub struct HotreloadVars {
        pub ws_port: u16,
    }

    impl TemplateVars for HotreloadVars {
        fn apply(&self, content: &str) -> String {
            content.replace("__FOLIO_WS_PORT__", &self.ws_port.to_string())
        }

        fn hash_input(&self) -> String {
            self.ws_port.to_string()
        }
    }

    /// Hot reload JavaScript with WebSocket port injection.
    pub const HOTRELOAD_JS: EmbeddedAsset<HotreloadVars> = EmbeddedAsset::new(
        AssetKind::JavaScript,
        "hotreload",
        include_str!("serve/hotreload.js"),
    );
}

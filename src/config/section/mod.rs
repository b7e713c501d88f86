//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `site`   | `[site]`     | Title, language, data file, public URL   |
//! | `build`  | `[build]`    | Output and asset directories             |
//! | `theme`  | `[theme]`    | Initial theme                            |
//! | `client` | `[client]`   | Scroll tracking parameters               |
//! | `serve`  | `[serve]`    | Development server                       |

mod build;
mod client;
mod serve;
mod site;
mod theme;

pub use build::BuildConfig;
pub use client::ClientConfig;
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
pub use theme::ThemeConfig;

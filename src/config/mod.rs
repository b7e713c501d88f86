//! Site configuration management for `folio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! ├── types/         # ConfigError, diagnostics, global handle
//! ├── util.rs        # Config discovery and URL helpers
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                    |
//! |------------|--------------------------------------------|
//! | `[site]`   | Title, language, data file, public URL     |
//! | `[build]`  | Output and assets directories, clean       |
//! | `[theme]`  | Initial dark/light theme                   |
//! | `[client]` | Scroll tracking threshold and margin       |
//! | `[serve]`  | Development server (interface, port, watch) |

pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

pub use section::{BuildConfig, ClientConfig, ServeConfig, SiteSectionConfig, ThemeConfig};
pub use types::{
    ConfigDiagnostics, ConfigError, FieldPath, cfg, clear_clean_flag, init_config, reload_config,
};

use crate::{
    client::ObserverOptions,
    cli::{BuildArgs, Cli, Commands},
    log,
    utils::path::normalize_path,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    net::IpAddr,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing folio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// CLI arguments reference (internal use only)
    #[serde(skip)]
    pub cli: Option<&'static Cli>,

    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteSectionConfig,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub client: ClientConfig,

    #[serde(default)]
    pub serve: ServeConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Except for `init`, the config file is searched upward from cwd and
    /// the project root is its parent directory.
    pub fn load(cli: &'static Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if !cli.is_init() && !exists {
            bail!(ConfigError::Validation(format!(
                "config file '{}' not found, run 'folio init' to create a new project",
                cli.config.display()
            )));
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            Self::default()
        };

        config.config_path = config_path;
        config.cli = Some(cli);
        config.finalize(cli)?;

        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let path = match &cli.command {
            Commands::Init { name, .. } => match name {
                Some(name) => cwd.join(name).join(&cli.config),
                None => cwd.join(&cli.config),
            },
            _ => match find_config_file(&cli.config) {
                Some(path) => return Ok((path, true)),
                None => cwd.join(&cli.config),
            },
        };
        let exists = path.exists();
        Ok((path, exists))
    }

    /// Settle paths and CLI overrides after loading.
    fn finalize(&mut self, cli: &Cli) -> Result<()> {
        let root = match &cli.command {
            Commands::Init { name, .. } => {
                let cwd = std::env::current_dir().context("Failed to get current working directory")?;
                name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name))
            }
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };

        Self::update_option(&mut self.build.output, cli.output.as_ref());
        self.normalize_paths(&root);
        self.apply_command_options(cli);
        self.sync_path_prefix_from_url();

        // Local preview serves the page at `/`.
        if cli.is_serve() {
            self.build.path_prefix = PathBuf::new();
        }
        Ok(())
    }

    /// Derive `build.path_prefix` from `site.url`.
    fn sync_path_prefix_from_url(&mut self) {
        if let Some(ref url) = self.site.url
            && let Some(path) = extract_url_path(url)
        {
            self.build.path_prefix = PathBuf::from(path);
        }
    }

    /// Load configuration from file path, warning about unknown fields.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring: {}", display_path, fields.join(", "));
    }

    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Absolute path of the output directory.
    pub fn output_dir(&self) -> &Path {
        &self.build.output
    }

    /// Scroll tracker parameters for the page runtime.
    pub fn observer_options(&self) -> ObserverOptions {
        self.client.observer_options()
    }

    /// Document title override, `None` when the portfolio name should be used.
    pub fn title(&self) -> Option<&str> {
        let title = self.site.title.trim();
        (!title.is_empty()).then_some(title)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Build { build_args } => self.apply_build_args(build_args),
            Commands::Serve {
                build_args,
                interface,
                port,
                watch,
            } => {
                self.apply_build_args(build_args);
                self.apply_serve_options(*interface, *port, *watch);
            }
            Commands::Init { .. } | Commands::Query { .. } => {}
        }
    }

    fn apply_build_args(&mut self, args: &BuildArgs) {
        crate::logger::set_verbose(args.verbose);

        // CLI can only turn cleaning on.
        self.build.clean |= args.clean;

        if let Some(ref url) = args.site_url {
            self.site.url = Some(url.clone());
        }
    }

    fn apply_serve_options(&mut self, interface: Option<IpAddr>, port: Option<u16>, watch: Option<bool>) {
        Self::update_option(&mut self.serve.interface, interface.as_ref());
        Self::update_option(&mut self.serve.port, port.as_ref());
        Self::update_option(&mut self.serve.watch, watch.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Make every configured path absolute against `root`.
    fn normalize_paths(&mut self, root: &Path) {
        let root = normalize_path(root);
        self.config_path = normalize_path(&self.config_path);
        self.site.data = normalize_path(&root.join(&self.site.data));
        self.build.output = normalize_path(&root.join(&self.build.output));
        self.build.assets = normalize_path(&root.join(&self.build.assets));
        self.root = root;
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration for the current command.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.client.validate(&mut diag);
        self.serve.validate(&mut diag);

        if self.cli.is_some_and(|cli| !cli.is_init()) {
            self.site.validate_data(&mut diag);
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config text, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::path::url_prefix;
    use clap::Parser;

    fn leak_cli(args: &[&str]) -> &'static Cli {
        let cli = Cli::try_parse_from(std::iter::once("folio").chain(args.iter().copied())).unwrap();
        Box::leak(Box::new(cli))
    }

    #[test]
    fn test_invalid_toml() {
        assert!(SiteConfig::parse_with_ignored("[site\ntitle = \"x\"").is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert!(config.cli.is_none());
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.get_root(), Path::new(""));
        assert_eq!(config.serve.port, 5277);
        assert!(config.theme.dark);
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\ntitle = \"Ada\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.title, "Ada");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_path_prefix_from_url() {
        let mut config = SiteConfig::default();
        assert_eq!(url_prefix(&config.build.path_prefix), "");

        config.site.url = Some("https://user.github.io/portfolio/".into());
        config.sync_path_prefix_from_url();
        assert_eq!(url_prefix(&config.build.path_prefix), "/portfolio");
    }

    #[test]
    fn test_title_override() {
        let mut config = SiteConfig::default();
        assert_eq!(config.title(), None);
        config.site.title = "  ".into();
        assert_eq!(config.title(), None);
        config.site.title = "Ada".into();
        assert_eq!(config.title(), Some("Ada"));
    }

    #[test]
    fn test_build_args_applied() {
        let cli = leak_cli(&["build", "--clean", "-U", "https://ada.dev/me"]);
        let mut config = SiteConfig::default();
        config.apply_command_options(cli);
        config.sync_path_prefix_from_url();
        assert!(config.build.clean);
        assert_eq!(config.build.path_prefix, PathBuf::from("me"));
    }

    #[test]
    fn test_serve_options_applied() {
        let cli = leak_cli(&["serve", "-p", "9000", "--watch", "false"]);
        let mut config = test_parse_config("[serve]\nport = 3000");
        config.apply_command_options(cli);
        assert_eq!(config.serve.port, 9000);
        assert!(!config.serve.watch);
    }

    #[test]
    fn test_load_from_project_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("portfolio.json"), "{}").unwrap();
        let config_path = dir.path().join("folio.toml");
        fs::write(&config_path, "[build]\noutput = \"dist\"\n").unwrap();

        let cli = leak_cli(&["-C", config_path.to_str().unwrap(), "build"]);
        let config = SiteConfig::load(cli).unwrap();

        let root = normalize_path(dir.path());
        assert_eq!(config.get_root(), root);
        assert_eq!(config.output_dir(), root.join("dist"));
        assert_eq!(config.site.data, root.join("portfolio.json"));
    }

    #[test]
    fn test_load_reports_all_problems() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("folio.toml");
        fs::write(&config_path, "[client]\nthreshold = 2.0\n[serve]\nport = 0\n").unwrap();

        let cli = leak_cli(&["-C", config_path.to_str().unwrap(), "build"]);
        let err = SiteConfig::load(cli).unwrap_err();
        let Some(ConfigError::Diagnostics(diag)) = err.downcast_ref::<ConfigError>() else {
            panic!("expected diagnostics, got {err:?}");
        };
        let fields: Vec<_> = diag.errors().iter().map(|d| d.field.as_str()).collect();
        assert_eq!(fields, ["client.threshold", "serve.port", "site.data"]);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("folio.toml");
        let cli = leak_cli(&["-C", config_path.to_str().unwrap(), "query"]);
        assert!(SiteConfig::load(cli).is_err());
    }
}

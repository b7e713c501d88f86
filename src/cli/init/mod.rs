//! Project initialization.
//!
//! - [`validate`]: target directory checks
//! - [`structure`]: directories and the starter data file
//! - [`config`]: `folio.toml` and ignore files

mod config;
mod structure;
mod validate;

use crate::{config::SiteConfig, log};
use anyhow::Result;
use std::path::Path;

pub use validate::InitMode;

/// Create a new project.
///
/// With `dry_run` the config template is printed and nothing is written.
pub fn new_site(site_config: &SiteConfig, has_name: bool, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template());
        return Ok(());
    }

    let root = site_config.get_root();
    validate::validate_target(root, InitMode::from_name(has_name))?;

    structure::create_structure(root, &site_config.site.data, &site_config.build.assets)?;
    config::write_config(&site_config.config_path)?;

    let output = site_config.output_dir();
    let output = output.strip_prefix(root).unwrap_or(output);
    config::write_ignore_files(root, output)?;

    log!("init"; "project initialized in {}", display_root(root));
    Ok(())
}

fn display_root(root: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| root.strip_prefix(cwd).ok().map(Path::to_path_buf))
        .filter(|p| !p.as_os_str().is_empty())
        .map_or_else(|| root.display().to_string(), |p| p.display().to_string())
}

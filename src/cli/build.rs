//! Page building orchestration.
//!
//! Build pipeline phases:
//! - **Init** - prepare (and optionally clean) the output directory
//! - **Load** - read the portfolio data, resolve the page layout
//! - **Assets** - write embedded runtime/stylesheet, copy static assets
//! - **Render** - paint `index.html`

use crate::{
    config::SiteConfig,
    data::Portfolio,
    debug,
    embed::page::{CLIENT_JS, ClientVars, STYLE_CSS},
    layout::{Layout, resolve},
    log,
    render::{RenderContext, render_page},
    utils::{date::DateTimeUtc, plural::plural_count},
};
use anyhow::{Context, Result, bail};
use jwalk::WalkDir;
use rayon::prelude::*;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Files never copied from the assets directory.
const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Outcome of one build.
#[derive(Debug)]
pub struct BuildReport {
    pub layout: Layout,
    pub page: PathBuf,
    /// Static asset files copied.
    pub copied: usize,
}

/// Build the page into the output directory.
///
/// Pipeline: init -> load -> assets -> render
pub fn build_site(config: &SiteConfig, quiet: bool) -> Result<BuildReport> {
    let output = config.output_dir();
    init_output(config)?;

    let portfolio = Portfolio::load(&config.site.data)
        .with_context(|| format!("Failed to load '{}'", config.site.data.display()))?;
    let layout = resolve(&portfolio);
    debug!("build"; "sections: {}", layout.nav.as_strs().join(", "));

    write_embedded_assets(config, output)?;
    let copied = copy_assets(&config.build.assets, output)?;

    let ctx = RenderContext::from_config(config, DateTimeUtc::now().year);
    let html = render_page(&portfolio, &layout, &ctx);
    let page = output.join("index.html");
    fs::write(&page, html).with_context(|| format!("Failed to write '{}'", page.display()))?;

    if !quiet {
        log!(
            "build";
            "{}, {} copied -> {}",
            plural_count(layout.visible().count(), "section"),
            plural_count(copied, "asset"),
            output.display()
        );
    }

    Ok(BuildReport {
        layout,
        page,
        copied,
    })
}

/// Create the output directory, removing it first when `build.clean` is set.
fn init_output(config: &SiteConfig) -> Result<()> {
    let output = config.output_dir();

    if config.build.clean && output.exists() {
        if output == config.get_root() || config.get_root().starts_with(output) {
            bail!(
                "Refusing to clean '{}': it contains the project root",
                output.display()
            );
        }
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean '{}'", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }

    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create '{}'", output.display()))
}

/// Write the runtime script and stylesheet, dropping older fingerprints.
fn write_embedded_assets(config: &SiteConfig, output: &Path) -> Result<()> {
    let written = [
        STYLE_CSS.write_to(output, &())?,
        CLIENT_JS.write_to(output, &ClientVars::from_config(config))?,
    ];

    for entry in fs::read_dir(output)?.filter_map(Result::ok) {
        let path = entry.path();
        if is_embedded_asset(&path) && !written.contains(&path) {
            debug!("build"; "removing stale {}", path.display());
            fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// `folio.<fingerprint>.js` / `folio.<fingerprint>.css`
fn is_embedded_asset(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    let mut parts = name.split('.');
    matches!(
        (parts.next(), parts.next(), parts.next(), parts.next()),
        (Some("folio"), Some(hash), Some("js" | "css"), None)
            if hash.len() == crate::utils::hash::FINGERPRINT_LEN
                && hash.bytes().all(|b| b.is_ascii_hexdigit())
    )
}

/// Collect all regular files below `dir`.
fn collect_all_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect()
}

/// Copy the static assets directory into the output root.
fn copy_assets(assets: &Path, output: &Path) -> Result<usize> {
    if !assets.is_dir() {
        return Ok(0);
    }

    let files = collect_all_files(assets);
    files.par_iter().try_for_each(|source| -> Result<()> {
        let relative = source.strip_prefix(assets)?;
        let target = output.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(source, &target)
            .with_context(|| format!("Failed to copy '{}'", source.display()))?;
        Ok(())
    })?;

    Ok(files.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn project(data: &str) -> (TempDir, SiteConfig) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("portfolio.json"), data).unwrap();

        let mut config = SiteConfig::default();
        config.root = dir.path().to_path_buf();
        config.site.data = dir.path().join("portfolio.json");
        config.build.output = dir.path().join("public");
        config.build.assets = dir.path().join("assets");
        (dir, config)
    }

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(dir)
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_build_writes_page_and_assets() {
        let (_dir, config) = project(
            r#"{ "name": "Ada", "projects": [{ "title": "Engine" }], "githubStats": { "totalRepos": 0 } }"#,
        );
        let report = build_site(&config, true).unwrap();

        assert_eq!(report.layout.nav.as_strs(), ["intro", "projects", "connect"]);
        let html = fs::read_to_string(&report.page).unwrap();
        assert!(html.contains(r#"id="projects""#));
        assert!(!html.contains(r#"id="stats""#));

        let files = names(config.output_dir());
        assert_eq!(files.len(), 3, "{files:?}");
        assert!(files.iter().any(|f| f.ends_with(".css") && html.contains(f.as_str())));
        assert!(files.iter().any(|f| f.ends_with(".js") && html.contains(f.as_str())));
    }

    #[test]
    fn test_build_copies_assets() {
        let (dir, config) = project("{}");
        fs::create_dir_all(dir.path().join("assets/img")).unwrap();
        fs::write(dir.path().join("assets/img/me.png"), b"png").unwrap();
        fs::write(dir.path().join("assets/.DS_Store"), b"").unwrap();

        let report = build_site(&config, true).unwrap();
        assert_eq!(report.copied, 1);
        assert!(config.output_dir().join("img/me.png").is_file());
        assert!(!config.output_dir().join(".DS_Store").exists());
    }

    #[test]
    fn test_stale_runtime_removed_on_option_change() {
        let (_dir, mut config) = project("{}");
        build_site(&config, true).unwrap();
        config.client.threshold = 0.5;
        build_site(&config, true).unwrap();

        let scripts: Vec<_> = names(config.output_dir())
            .into_iter()
            .filter(|f| f.ends_with(".js"))
            .collect();
        assert_eq!(scripts.len(), 1);
    }

    #[test]
    fn test_clean_removes_previous_output() {
        let (_dir, mut config) = project("{}");
        fs::create_dir_all(config.output_dir()).unwrap();
        fs::write(config.output_dir().join("old.html"), "").unwrap();

        build_site(&config, true).unwrap();
        assert!(config.output_dir().join("old.html").exists());

        config.build.clean = true;
        build_site(&config, true).unwrap();
        assert!(!config.output_dir().join("old.html").exists());
    }

    #[test]
    fn test_clean_refuses_project_root() {
        let (dir, mut config) = project("{}");
        config.build.output = dir.path().to_path_buf();
        config.build.clean = true;
        assert!(build_site(&config, true).is_err());
        assert!(dir.path().join("portfolio.json").exists());
    }

    #[test]
    fn test_invalid_data_fails() {
        let (_dir, config) = project("[1, 2]");
        let err = build_site(&config, true).unwrap_err();
        assert!(format!("{err:#}").contains("portfolio.json"));
    }

    #[test]
    fn test_is_embedded_asset() {
        assert!(is_embedded_asset(Path::new("/out/folio.0123abcd.js")));
        assert!(is_embedded_asset(Path::new("folio.0123abcd.css")));
        assert!(!is_embedded_asset(Path::new("folio.js")));
        assert!(!is_embedded_asset(Path::new("app.0123abcd.js")));
        assert!(!is_embedded_asset(Path::new("folio.0123abcd.min.js")));
    }
}

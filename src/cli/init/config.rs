//! `folio.toml` and ignore-file generation for new projects.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::{BuildConfig, ClientConfig, ServeConfig, SiteSectionConfig, ThemeConfig};

/// Files to write ignore patterns to
const IGNORE_FILES: &[&str] = &[".gitignore", ".ignore"];

/// Commented `folio.toml` listing every option at its default value.
pub fn generate_config_template() -> String {
    let site = SiteSectionConfig::default();
    let build = BuildConfig::default();
    let theme = ThemeConfig::default();
    let client = ClientConfig::default();
    let serve = ServeConfig::default();

    format!(
        r#"# folio configuration file (v{version})

[site]
# Document title; the portfolio name is used when empty
title = ""
lang = "{lang}"
# Data file describing the portfolio
data = "{data}"
# Public URL; its path becomes the prefix of every asset URL
# url = "https://example.github.io/portfolio"

[build]
output = "{output}"
# Copied verbatim into the output directory
assets = "{assets}"
clean = {clean}

[theme]
# Start in dark mode
dark = {dark}

[client]
# Fraction of a section that must be visible to activate it
threshold = {threshold:?}
# Percent the viewport's lower edge moves up (negative) or down
bottom_margin = {bottom_margin:?}

[serve]
interface = "{interface}"
port = {port}
watch = {watch}
"#,
        version = env!("CARGO_PKG_VERSION"),
        lang = site.lang,
        data = site.data.display(),
        output = build.output.display(),
        assets = build.assets.display(),
        clean = build.clean,
        dark = theme.dark,
        threshold = client.threshold,
        bottom_margin = client.bottom_margin,
        interface = serve.interface,
        port = serve.port,
        watch = serve.watch,
    )
}

pub fn write_config(path: &Path) -> Result<()> {
    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))
}

/// Write `.gitignore` and `.ignore`, skipping files that already exist.
pub fn write_ignore_files(root: &Path, output_dir: &Path) -> Result<()> {
    let output_pattern = Path::new("/").join(output_dir);
    let content = [
        format!("{}/", output_pattern.to_string_lossy().trim_end_matches('/')),
        ".DS_Store".to_string(),
    ]
    .join("\n");

    for filename in IGNORE_FILES {
        let path = root.join(filename);
        if !path.exists() {
            fs::write(&path, &content)
                .with_context(|| format!("Failed to write '{}'", path.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_template_parses_to_defaults() {
        let config = test_parse_config(&generate_config_template());
        assert_eq!(config.site.lang, "en");
        assert_eq!(config.site.data, Path::new("portfolio.json"));
        assert_eq!(config.build.output, Path::new("public"));
        assert!(config.theme.dark);
        assert_eq!(config.client.threshold, 0.3);
        assert_eq!(config.client.bottom_margin, -20.0);
        assert_eq!(config.serve.port, ServeConfig::default().port);
        assert!(config.site.url.is_none());
    }

    #[test]
    fn test_write_ignore_files() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".ignore"), "mine").unwrap();

        write_ignore_files(temp.path(), Path::new("public")).unwrap();

        let gitignore = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
        assert!(gitignore.lines().any(|l| l == "/public/"));
        assert_eq!(fs::read_to_string(temp.path().join(".ignore")).unwrap(), "mine");
    }
}

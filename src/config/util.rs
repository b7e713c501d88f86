//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Path component of a site URL, without surrounding slashes.
///
/// Port, credentials, query and fragment never leak into the result.
/// Returns `None` when `url_str` is not an absolute URL.
///
/// ```ignore
/// extract_url_path("https://user.github.io/portfolio/") -> Some("portfolio")
/// extract_url_path("https://ada.dev")                    -> Some("")
/// extract_url_path("ada.dev")                            -> None
/// ```
pub fn extract_url_path(url_str: &str) -> Option<String> {
    let parsed = url::Url::parse(url_str).ok()?;
    Some(parsed.path().trim_matches('/').to_string())
}

/// Find `config_name` in the current directory or the nearest ancestor.
///
/// ```text
/// /home/ada/site/assets/img/   ← cwd
/// /home/ada/site/folio.toml    ← found
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, config_name)
}

fn find_upward(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.exists())
}

// ============================================================================
// tests
// ============================================================================

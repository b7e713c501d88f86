//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! This enables hot-reloading of `folio.toml` during `serve`.

use crate::config::SiteConfig;
use anyhow::{Context, Result};
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::sync::{Arc, LazyLock};

/// Global config storage.
pub static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Digest of the current config file content.
static CONFIG_DIGEST: Mutex<String> = parking_lot::const_mutex(String::new());

#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Reload config from disk if content changed.
///
/// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged.
pub fn reload_config() -> Result<bool> {
    let current = cfg();
    let cli = current
        .cli
        .context("config reloaded before CLI initialization")?;

    let digest = crate::utils::hash::digest_file(&current.config_path)?;
    if *CONFIG_DIGEST.lock() == digest {
        return Ok(false);
    }

    let mut new_config = SiteConfig::load(cli)?;
    // `--clean` applies to the first build only.
    new_config.build.clean = current.build.clean;
    CONFIG.store(Arc::new(new_config));
    *CONFIG_DIGEST.lock() = digest;

    Ok(true)
}

#[inline]
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    if let Ok(digest) = crate::utils::hash::digest_file(&config.config_path) {
        *CONFIG_DIGEST.lock() = digest;
    }

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

/// Turn off `build.clean` once the initial build has run.
pub fn clear_clean_flag() {
    let current = cfg();
    if current.build.clean {
        let mut config = (*current).clone();
        config.build.clean = false;
        CONFIG.store(Arc::new(config));
    }
}

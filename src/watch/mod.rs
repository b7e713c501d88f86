//! File watching for `folio serve`.
//!
//! ```text
//! notify --> channel --> Debouncer --> classify --> reload config?
//!                                                    |
//!                                 build_site <-------+
//!                                     |
//!                           ReloadServer::send(reload | error)
//! ```
//!
//! Every relevant change rebuilds the whole page; there is only one.

mod debouncer;
mod roots;

use std::{
    path::{Path, PathBuf},
    thread::{self, JoinHandle},
};

use anyhow::{Context, Result};
use crossbeam::channel::{self, Receiver};

use crate::{
    cli::build::build_site,
    config::{SiteConfig, cfg, reload_config},
    core::set_healthy,
    debug, log,
    logger::{status_error, status_success},
    reload::{HotReloadMessage, ReloadServer},
};
use debouncer::Debouncer;
use roots::WatchRoots;

/// What a changed path means for the build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChangeKind {
    Config,
    Data,
    Asset,
}

impl ChangeKind {
    pub fn classify(path: &Path, config: &SiteConfig) -> Option<Self> {
        if path == config.config_path {
            Some(Self::Config)
        } else if path == config.site.data {
            Some(Self::Data)
        } else if path.starts_with(&config.build.assets) && !path.starts_with(config.output_dir()) {
            Some(Self::Asset)
        } else {
            None
        }
    }
}

/// Start watching the project; rebuilds run on the returned thread.
///
/// The watcher is created before returning so that setup errors surface
/// to the caller.
pub fn spawn_watcher(reload: Option<ReloadServer>, shutdown_rx: Receiver<()>) -> Result<JoinHandle<()>> {
    let (event_tx, event_rx) = channel::unbounded();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        let _ = event_tx.send(res);
    })
    .context("Failed to create file watcher")?;

    let mut roots = WatchRoots::default();
    roots.sync(&mut watcher, &cfg());
    log!("watch"; "watching for changes");

    Ok(thread::spawn(move || {
        let mut debouncer = Debouncer::new();
        loop {
            channel::select! {
                recv(event_rx) -> event => match event {
                    Ok(Ok(event)) => debouncer.add_event(&event),
                    Ok(Err(e)) => log!("watch"; "notify error: {}", e),
                    Err(_) => break,
                },
                recv(shutdown_rx) -> _ => break,
                default(debouncer.sleep_duration()) => {}
            }

            if let Some(paths) = debouncer.take_if_ready() {
                on_change(&paths, reload.as_ref());
                roots.sync(&mut watcher, &cfg());
            }
        }
        debug!("watch"; "stopped");
    }))
}

/// Rebuild for a settled batch of changed paths.
fn on_change(paths: &[PathBuf], reload: Option<&ReloadServer>) {
    let config = cfg();
    let mut kinds: Vec<_> = paths
        .iter()
        .filter_map(|p| ChangeKind::classify(p, &config))
        .collect();
    if kinds.is_empty() {
        return;
    }
    kinds.sort_unstable();
    kinds.dedup();

    if kinds.contains(&ChangeKind::Config) {
        match reload_config() {
            Ok(true) => debug!("watch"; "config reloaded"),
            Ok(false) => {}
            Err(e) => return report_failure("config error", &e, reload),
        }
    }

    match build_site(&cfg(), true) {
        Ok(_) => {
            set_healthy(true);
            status_success(&format!("rebuilt: {}", describe(paths, &config)));
            if let Some(reload) = reload {
                reload.send(&HotReloadMessage::Reload);
            }
        }
        Err(e) => report_failure("build failed", &e, reload),
    }
}

fn report_failure(summary: &str, error: &anyhow::Error, reload: Option<&ReloadServer>) {
    set_healthy(false);
    let detail = format!("{error:#}");
    status_error(summary, &detail);
    if let Some(reload) = reload {
        reload.send(&HotReloadMessage::error(format!("{summary}: {detail}")));
    }
}

/// Changed files relative to the project root, for the status line.
fn describe(paths: &[PathBuf], config: &SiteConfig) -> String {
    paths
        .iter()
        .filter(|p| ChangeKind::classify(p, config).is_some())
        .map(|p| p.strip_prefix(config.get_root()).unwrap_or(p).display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = PathBuf::from("/p");
        config.config_path = PathBuf::from("/p/folio.toml");
        config.site.data = PathBuf::from("/p/data/portfolio.json");
        config.build.assets = PathBuf::from("/p/assets");
        config.build.output = PathBuf::from("/p/public");
        config
    }

    #[test]
    fn test_classify() {
        let config = config();
        let classify = |p: &str| ChangeKind::classify(Path::new(p), &config);

        assert_eq!(classify("/p/folio.toml"), Some(ChangeKind::Config));
        assert_eq!(classify("/p/data/portfolio.json"), Some(ChangeKind::Data));
        assert_eq!(classify("/p/assets/img/me.png"), Some(ChangeKind::Asset));
        assert_eq!(classify("/p/README.md"), None);
        assert_eq!(classify("/p/public/index.html"), None);
    }

    #[test]
    fn test_output_inside_assets_is_not_an_asset() {
        let mut config = config();
        config.build.output = PathBuf::from("/p/assets/out");
        assert_eq!(
            ChangeKind::classify(Path::new("/p/assets/out/index.html"), &config),
            None
        );
    }

    #[test]
    fn test_describe_lists_relevant_paths() {
        let paths = [
            PathBuf::from("/p/data/portfolio.json"),
            PathBuf::from("/p/notes.txt"),
            PathBuf::from("/p/assets/me.png"),
        ];
        assert_eq!(describe(&paths, &config()), "data/portfolio.json, assets/me.png");
    }
}

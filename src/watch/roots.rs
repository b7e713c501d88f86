//! Directories the watcher is attached to.

use std::path::PathBuf;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use rustc_hash::FxHashMap;

use crate::{config::SiteConfig, debug};

/// Keeps the attached watches in line with the current config.
///
/// Re-run [`WatchRoots::sync`] after each rebuild: a config reload may
/// move the data file, and the assets directory may appear later.
#[derive(Default)]
pub(super) struct WatchRoots {
    attached: FxHashMap<PathBuf, RecursiveMode>,
}

impl WatchRoots {
    pub(super) fn sync(&mut self, watcher: &mut RecommendedWatcher, config: &SiteConfig) {
        let desired = desired_roots(config);

        self.attached.retain(|path, mode| {
            let keep = path.exists() && desired.iter().any(|(p, m)| p == path && *m == *mode);
            if !keep {
                let _ = watcher.unwatch(path);
                debug!("watch"; "detached {}", path.display());
            }
            keep
        });

        for (path, mode) in desired {
            if self.attached.contains_key(&path) || !path.exists() {
                continue;
            }
            match watcher.watch(&path, mode) {
                Ok(()) => {
                    debug!("watch"; "attached {} ({:?})", path.display(), mode);
                    self.attached.insert(path, mode);
                }
                Err(e) => debug!("watch"; "cannot watch {}: {}", path.display(), e),
            }
        }
    }
}

/// Project root and data directory flat, assets recursively.
fn desired_roots(config: &SiteConfig) -> Vec<(PathBuf, RecursiveMode)> {
    let mut roots = vec![(config.get_root().to_path_buf(), RecursiveMode::NonRecursive)];

    if let Some(dir) = config.site.data.parent()
        && !roots.iter().any(|(p, _)| p == dir)
    {
        roots.push((dir.to_path_buf(), RecursiveMode::NonRecursive));
    }

    let assets = &config.build.assets;
    if !config.output_dir().starts_with(assets) && assets != config.get_root() {
        roots.push((assets.clone(), RecursiveMode::Recursive));
    }
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(data: &str, assets: &str) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.root = PathBuf::from("/p");
        config.site.data = PathBuf::from(data);
        config.build.assets = PathBuf::from(assets);
        config.build.output = PathBuf::from("/p/public");
        config
    }

    #[test]
    fn test_data_next_to_config() {
        let roots = desired_roots(&config("/p/portfolio.json", "/p/assets"));
        assert_eq!(
            roots,
            [
                (PathBuf::from("/p"), RecursiveMode::NonRecursive),
                (PathBuf::from("/p/assets"), RecursiveMode::Recursive),
            ]
        );
    }

    #[test]
    fn test_data_in_subdirectory() {
        let roots = desired_roots(&config("/p/data/portfolio.json", "/p/assets"));
        assert!(roots.contains(&(PathBuf::from("/p/data"), RecursiveMode::NonRecursive)));
    }

    #[test]
    fn test_assets_containing_output_not_watched() {
        let roots = desired_roots(&config("/p/portfolio.json", "/p"));
        assert_eq!(roots.len(), 1);
    }
}

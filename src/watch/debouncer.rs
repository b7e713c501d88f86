//! Event coalescing for the file watcher.

use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use rustc_hash::FxHashSet;

use crate::utils::path::normalize_path;

pub(super) const DEBOUNCE_MS: u64 = 300;
pub(super) const REBUILD_COOLDOWN_MS: u64 = 800;

/// Wait while nothing is pending.
const IDLE: Duration = Duration::from_secs(86400);

/// Collects changed paths until the burst settles.
///
/// Timing only: which paths matter is decided by the caller.
pub(super) struct Debouncer {
    changes: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
    last_rebuild: Option<Instant>,
}

impl Debouncer {
    pub(super) fn new() -> Self {
        Self {
            changes: FxHashSet::default(),
            last_event: None,
            last_rebuild: None,
        }
    }

    pub(super) fn add_event(&mut self, event: &notify::Event) {
        use notify::{EventKind, event::ModifyKind};

        match event.kind {
            EventKind::Create(_) | EventKind::Remove(_) => {}
            // mtime/atime/chmod noise
            EventKind::Modify(ModifyKind::Metadata(_)) => return,
            EventKind::Modify(_) => {}
            _ => return,
        }

        for path in event.paths.iter().filter(|p| !is_temp_file(p)) {
            crate::debug!("watch"; "{:?}: {}", event.kind, path.display());
            self.changes.insert(normalize_path(path));
            self.last_event = Some(Instant::now());
        }
    }

    /// Take the collected paths once debounce and cooldown have elapsed.
    pub(super) fn take_if_ready(&mut self) -> Option<Vec<PathBuf>> {
        if !self.is_ready() {
            return None;
        }

        self.last_event = None;
        self.last_rebuild = Some(Instant::now());

        let mut changes: Vec<_> = self.changes.drain().collect();
        changes.sort();
        Some(changes)
    }

    fn is_ready(&self) -> bool {
        let Some(last_event) = self.last_event else {
            return false;
        };

        if last_event.elapsed() < Duration::from_millis(DEBOUNCE_MS) {
            return false;
        }

        if let Some(last_rebuild) = self.last_rebuild
            && last_rebuild.elapsed() < Duration::from_millis(REBUILD_COOLDOWN_MS)
        {
            return false;
        }

        !self.changes.is_empty()
    }

    /// How long the watcher may block before checking again.
    pub(super) fn sleep_duration(&self) -> Duration {
        let Some(last_event) = self.last_event else {
            return IDLE;
        };

        let debounce_remaining =
            Duration::from_millis(DEBOUNCE_MS).saturating_sub(last_event.elapsed());
        let cooldown_remaining = self
            .last_rebuild
            .map(|t| Duration::from_millis(REBUILD_COOLDOWN_MS).saturating_sub(t.elapsed()))
            .unwrap_or(Duration::ZERO);

        debounce_remaining
            .max(cooldown_remaining)
            .max(Duration::from_millis(1))
    }
}

/// Editor swap and backup files.
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::{
        Event, EventKind,
        event::{CreateKind, DataChange, MetadataKind, ModifyKind},
    };

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    fn modify(path: &str) -> Event {
        event(EventKind::Modify(ModifyKind::Data(DataChange::Any)), path)
    }

    #[test]
    fn test_not_ready_within_debounce_window() {
        let mut debouncer = Debouncer::new();
        debouncer.add_event(&modify("/p/portfolio.json"));
        assert!(debouncer.take_if_ready().is_none());
        assert!(debouncer.sleep_duration() <= Duration::from_millis(DEBOUNCE_MS));
    }

    #[test]
    fn test_ready_after_debounce_and_deduplicated() {
        let mut debouncer = Debouncer::new();
        debouncer.add_event(&modify("/p/portfolio.json"));
        debouncer.add_event(&event(EventKind::Create(CreateKind::File), "/p/portfolio.json"));
        debouncer.last_event = Some(Instant::now() - Duration::from_millis(DEBOUNCE_MS + 1));

        assert_eq!(
            debouncer.take_if_ready(),
            Some(vec![PathBuf::from("/p/portfolio.json")])
        );
        assert!(debouncer.take_if_ready().is_none());
        assert_eq!(debouncer.sleep_duration(), IDLE);
    }

    #[test]
    fn test_cooldown_after_rebuild() {
        let mut debouncer = Debouncer::new();
        debouncer.last_rebuild = Some(Instant::now());
        debouncer.add_event(&modify("/p/folio.toml"));
        debouncer.last_event = Some(Instant::now() - Duration::from_millis(DEBOUNCE_MS + 1));

        assert!(debouncer.take_if_ready().is_none());
        assert!(debouncer.sleep_duration() > Duration::from_millis(DEBOUNCE_MS));
    }

    #[test]
    fn test_ignores_metadata_and_temp_files() {
        let mut debouncer = Debouncer::new();
        debouncer.add_event(&event(
            EventKind::Modify(ModifyKind::Metadata(MetadataKind::WriteTime)),
            "/p/portfolio.json",
        ));
        debouncer.add_event(&modify("/p/.portfolio.json.swp"));
        debouncer.add_event(&modify("/p/folio.toml~"));
        debouncer.add_event(&event(EventKind::Access(notify::event::AccessKind::Any), "/p/a"));
        assert!(debouncer.changes.is_empty());
        assert!(debouncer.last_event.is_none());
    }

    #[test]
    fn test_is_temp_file() {
        assert!(is_temp_file(Path::new("a.json.bak")));
        assert!(is_temp_file(Path::new(".DS_Store")));
        assert!(!is_temp_file(Path::new("assets/me.png")));
    }
}

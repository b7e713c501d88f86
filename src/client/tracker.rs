//! Scroll-driven section tracking.
//!
//! The tracker is a listener registered with an external observation host
//! (the browser's `IntersectionObserver` in the shipped runtime). The host
//! calls [`Tracker::deliver`] with batches of entries whenever observed
//! sections cross the threshold; the tracker never polls or waits.
//!
//! Within one batch the last qualifying entry sets the active section. The
//! order of entries inside a batch is whatever the host produces.

use super::{IntersectionEntry, ObserverOptions};
use crate::layout::{Layout, SectionId};
use rustc_hash::FxHashSet;

/// The mechanism that reports intersections.
pub trait ObservationHost {
    /// Start reporting intersections for `target`.
    fn observe(&mut self, target: SectionId);

    /// Stop all reporting.
    fn disconnect(&mut self);
}

/// One tracker per page mount.
pub struct Tracker<H: ObservationHost> {
    host: H,
    options: ObserverOptions,
    observed: Vec<SectionId>,
    /// Sections whose entry animation already ran.
    animated: FxHashSet<SectionId>,
    active: Option<SectionId>,
    mounted: bool,
}

impl<H: ObservationHost> Tracker<H> {
    /// Observe every section that renders for `layout`.
    pub fn mount(mut host: H, layout: &Layout, options: ObserverOptions) -> Self {
        let observed: Vec<_> = layout.visible().collect();
        for section in &observed {
            host.observe(*section);
        }

        Self {
            host,
            options,
            observed,
            animated: FxHashSet::default(),
            active: None,
            mounted: true,
        }
    }

    /// Host callback: process one batch of entries.
    ///
    /// Returns the sections whose entry animation started in this batch.
    pub fn deliver(&mut self, batch: &[IntersectionEntry]) -> Vec<SectionId> {
        if !self.mounted {
            return Vec::new();
        }

        let mut started = Vec::new();
        for entry in batch {
            if !self.observed.contains(&entry.target) || !self.qualifies(entry) {
                continue;
            }
            if self.animated.insert(entry.target) {
                started.push(entry.target);
            }
            self.active = Some(entry.target);
        }
        started
    }

    /// Entering the root with at least `threshold` of the section visible.
    fn qualifies(&self, entry: &IntersectionEntry) -> bool {
        entry.is_intersecting && entry.ratio >= self.options.threshold
    }

    /// Stop observation. Safe to call more than once.
    pub fn unmount(&mut self) {
        if self.mounted {
            self.mounted = false;
            self.host.disconnect();
        }
    }

    pub fn active(&self) -> Option<SectionId> {
        self.active
    }

    pub fn is_animated(&self, section: SectionId) -> bool {
        self.animated.contains(&section)
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn observed(&self) -> &[SectionId] {
        &self.observed
    }

    pub fn host(&self) -> &H {
        &self.host
    }
}

impl<H: ObservationHost> Drop for Tracker<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Visible-fraction arithmetic for the viewport tracker.
//!
//! Sections span the full page width, so only the vertical axis matters.

use super::ObserverOptions;
use crate::layout::SectionId;

/// A vertical extent in CSS pixels, `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f64,
    pub bottom: f64,
}

impl Span {
    pub fn new(top: f64, height: f64) -> Self {
        Self {
            top,
            bottom: top + height.max(0.0),
        }
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    fn overlap(&self, other: &Self) -> f64 {
        (self.bottom.min(other.bottom) - self.top.max(other.top)).max(0.0)
    }

    fn contains_point(&self, y: f64) -> bool {
        self.top <= y && y <= self.bottom
    }
}

/// One observation delivered by the host for one section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub target: SectionId,
    /// Visible fraction of the section, `0.0..=1.0`.
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target: SectionId, ratio: f64, is_intersecting: bool) -> Self {
        Self {
            target,
            ratio: ratio.clamp(0.0, 1.0),
            is_intersecting,
        }
    }

    /// Measure `bounds` against `viewport` with the root margin applied.
    pub fn measure(
        target: SectionId,
        bounds: Span,
        viewport: Span,
        options: &ObserverOptions,
    ) -> Self {
        let root = options.effective_root(viewport);

        if bounds.height() == 0.0 {
            let inside = root.contains_point(bounds.top);
            return Self::new(target, if inside { 1.0 } else { 0.0 }, inside);
        }

        let visible = bounds.overlap(&root);
        Self::new(target, visible / bounds.height(), visible > 0.0)
    }
}

impl ObserverOptions {
    /// The viewport with its lower edge moved by the bottom margin.
    pub fn effective_root(&self, viewport: Span) -> Span {
        let shift = viewport.height() * self.bottom_margin / 100.0;
        Span {
            top: viewport.top,
            bottom: (viewport.bottom + shift).max(viewport.top),
        }
    }
}

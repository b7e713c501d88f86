//! Client-side behaviour of the rendered page.
//!
//! The browser runtime (`embed/client/folio.js`) implements these rules;
//! the Rust types here are their reference model and feed the runtime its
//! parameters.
//!
//! - [`tracker`]: active-section tracking and one-time entry animation
//! - [`theme`]: dark/light toggle
//! - [`geometry`]: visible-fraction arithmetic with a root margin

// The tracker and toggle run in the browser; here only tests drive them.
#![allow(dead_code)]

mod geometry;
mod theme;
mod tracker;

pub use geometry::{IntersectionEntry, Span};
pub use theme::{RootClasses, ThemeTarget, ThemeToggle};
pub use tracker::{ObservationHost, Tracker};

/// Visibility rule shared by the tracker and the browser runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    /// Fraction of a section that must be visible, `(0, 1]`.
    pub threshold: f64,
    /// Percent by which the viewport's lower edge moves; negative shrinks.
    pub bottom_margin: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            bottom_margin: -20.0,
        }
    }
}

impl ObserverOptions {
    /// CSS `rootMargin` string for `IntersectionObserver`.
    pub fn root_margin_css(&self) -> String {
        format!("0px 0px {}% 0px", self.bottom_margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_margin_css() {
        assert_eq!(ObserverOptions::default().root_margin_css(), "0px 0px -20% 0px");
        let options = ObserverOptions {
            threshold: 0.5,
            bottom_margin: -12.5,
        };
        assert_eq!(options.root_margin_css(), "0px 0px -12.5% 0px");
    }
}

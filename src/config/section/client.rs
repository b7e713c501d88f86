//! `[client]` section configuration.
//!
//! Parameters of the scroll tracker in the page runtime.
//!
//! ```toml
//! [client]
//! threshold = 0.3        # Visible fraction that activates a section
//! bottom_margin = -20    # Percent; negative shrinks the viewport from below
//! ```

use crate::client::ObserverOptions;
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub threshold: f64,
    pub bottom_margin: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let options = ObserverOptions::default();
        Self {
            threshold: options.threshold,
            bottom_margin: options.bottom_margin,
        }
    }
}

impl ClientConfig {
    pub const THRESHOLD: FieldPath = FieldPath::new("client.threshold");
    pub const BOTTOM_MARGIN: FieldPath = FieldPath::new("client.bottom_margin");

    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions {
            threshold: self.threshold,
            bottom_margin: self.bottom_margin,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            diag.error(
                Self::THRESHOLD,
                format!("must be in (0, 1], got {}", self.threshold),
            );
        }
        if !(-100.0..=100.0).contains(&self.bottom_margin) {
            diag.error(
                Self::BOTTOM_MARGIN,
                format!("must be in [-100, 100], got {}", self.bottom_margin),
            );
        }
    }
}

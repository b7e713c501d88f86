//! Section identifiers.

use serde::Serialize;
use std::fmt;

/// One anchorable section of the page.
///
/// Declaration order is page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Intro,
    Projects,
    Experience,
    Education,
    Stats,
    Connect,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [Self; 6] = [
        Self::Intro,
        Self::Projects,
        Self::Experience,
        Self::Education,
        Self::Stats,
        Self::Connect,
    ];

    /// Anchor id used in the rendered page.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Intro => "intro",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Stats => "stats",
            Self::Connect => "connect",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

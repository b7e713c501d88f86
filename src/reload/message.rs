//! Hot reload message protocol.
//!
//! JSON objects tagged by `type`:
//!
//! | type     | fields    | browser action              |
//! |----------|-----------|-----------------------------|
//! | `reload` |           | `location.reload()`         |
//! | `error`  | `message` | show the error overlay      |

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HotReloadMessage {
    /// The page was rebuilt.
    Reload,
    /// The last build failed; the page on screen is stale.
    Error { message: String },
}

impl HotReloadMessage {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }

    pub fn to_json(&self) -> String {
        // A tagged enum of strings always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn from_json(s: &str) -> Option<Self> {
        serde_json::from_str(s).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        assert_eq!(HotReloadMessage::Reload.to_json(), r#"{"type":"reload"}"#);
        assert_eq!(
            HotReloadMessage::error("bad <json>").to_json(),
            r#"{"type":"error","message":"bad <json>"}"#
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            HotReloadMessage::from_json(r#"{"type":"error","message":"x"}"#),
            Some(HotReloadMessage::error("x"))
        );
        assert_eq!(HotReloadMessage::from_json(r#"{"type":"patch"}"#), None);
    }
}

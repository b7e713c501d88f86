//! Live reload for `folio serve`.
//!
//! The server side of `embed/serve/hotreload.js`: a WebSocket endpoint
//! that tells connected pages to reload after a rebuild, or shows the
//! build error in an overlay.

mod message;
mod server;

pub use message::HotReloadMessage;
pub use server::{DEFAULT_WS_PORT, ReloadServer};

//! Hot reload script injection into served HTML.

use crate::embed::serve::{HOTRELOAD_JS, HotreloadVars};

/// Add the hot reload script to HTML bodies when live reload is on.
pub fn maybe_inject_hotreload(body: Vec<u8>, content_type: &str, ws_port: Option<u16>) -> Vec<u8> {
    match ws_port {
        Some(port) if content_type.starts_with("text/html") => inject_hotreload_script(&body, port),
        _ => body,
    }
}

/// Insert before the last `</body>`, or append when there is none.
fn inject_hotreload_script(content: &[u8], ws_port: u16) -> Vec<u8> {
    const PATTERN: &[u8] = b"</body>";

    let script = HOTRELOAD_JS.external_tag_with_vars(&HotreloadVars { ws_port }, "");
    let pos = content
        .windows(PATTERN.len())
        .rposition(|w| w.eq_ignore_ascii_case(PATTERN))
        .unwrap_or(content.len());

    let mut result = Vec::with_capacity(content.len() + script.len());
    result.extend_from_slice(&content[..pos]);
    result.extend_from_slice(script.as_bytes());
    result.extend_from_slice(&content[pos..]);
    result
}

//! Development server with live reload.
//!
//! ```text
//! folio serve
//!   ├── initial build
//!   ├── ReloadServer (ws://127.0.0.1:35729+)   -- when watching
//!   ├── watcher thread: change -> rebuild -> reload/error message
//!   └── request loop (tiny_http + rayon pool) until Ctrl+C
//! ```

mod content;
mod lifecycle;
mod path;
mod response;

use crate::{
    cli::build::build_site,
    config::{SiteConfig, cfg, clear_clean_flag},
    core::{is_healthy, is_shutdown, register_server, set_healthy},
    embed::serve::{HOTRELOAD_JS, HotreloadVars},
    log,
    reload::{DEFAULT_WS_PORT, ReloadServer},
    watch::spawn_watcher,
};
use anyhow::{Context, Result};
use crossbeam::channel;
use std::sync::Arc;
use tiny_http::{Request, Server};

/// Request handler threads.
const WORKERS: usize = 4;

/// Build, then serve the output directory until Ctrl+C.
pub fn serve_site(config: &SiteConfig) -> Result<()> {
    match build_site(config, false) {
        Ok(_) => {
            set_healthy(true);
            clear_clean_flag();
        }
        // Keep serving so the fix is picked up by the watcher.
        Err(e) if config.serve.watch => {
            set_healthy(false);
            log!("error"; "{:#}", e);
        }
        Err(e) => return Err(e),
    }

    let reload = if config.serve.watch {
        let server = ReloadServer::start(DEFAULT_WS_PORT)?;
        crate::debug!("reload"; "ws://127.0.0.1:{}", server.port());
        Some(server)
    } else {
        None
    };
    let ws_port = reload.as_ref().map(ReloadServer::port);

    let (server, addr) = lifecycle::bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    let (shutdown_tx, shutdown_rx) = channel::unbounded::<()>();
    register_server(Arc::clone(&server), shutdown_tx);
    log!("serve"; "http://{}", addr);

    let watcher = if config.serve.watch {
        Some(spawn_watcher(reload, shutdown_rx)?)
    } else {
        None
    };

    run_request_loop(&server, ws_port)?;
    lifecycle::wait_for_shutdown(watcher);
    Ok(())
}

fn run_request_loop(server: &Server, ws_port: Option<u16>) -> Result<()> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(WORKERS)
        .build()
        .context("Failed to create request thread pool")?;

    for request in server.incoming_requests() {
        pool.spawn(move || {
            if let Err(e) = handle_request(request, ws_port) {
                log!("serve"; "request error: {e}");
            }
        });
    }
    Ok(())
}

fn handle_request(request: Request, ws_port: Option<u16>) -> Result<()> {
    if is_shutdown() {
        return response::respond_unavailable(request);
    }

    if let Some(port) = ws_port
        && request.url() == HOTRELOAD_JS.url_path_with_vars(&HotreloadVars { ws_port: port }, "")
    {
        return response::respond_hotreload_js(request, port);
    }

    // Read per request: the watcher may have swapped in a reloaded config.
    let config = cfg();
    if let Some(path) = path::resolve_path(request.url(), config.output_dir()) {
        return response::respond_file(request, &path, ws_port);
    }

    if !is_healthy() {
        return response::respond_build_failed(request, ws_port);
    }
    response::respond_not_found(request)
}

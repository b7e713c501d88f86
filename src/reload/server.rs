//! WebSocket server for live reload.
//!
//! One acceptor thread performs the handshake and registers clients;
//! the watcher broadcasts through [`ReloadServer::send`].

use std::{
    io::ErrorKind,
    net::{TcpListener, TcpStream},
    sync::Arc,
    thread,
    time::Duration,
};

use anyhow::Result;
use parking_lot::Mutex;
use tungstenite::{WebSocket, protocol::Message};

use super::HotReloadMessage;
use crate::{core::is_shutdown, debug, log};

/// Default WebSocket port for hot reload
pub const DEFAULT_WS_PORT: u16 = 35729;

/// Maximum port retry attempts
const MAX_PORT_RETRIES: u16 = 10;

/// Acceptor poll interval while no client is connecting.
const ACCEPT_POLL: Duration = Duration::from_millis(100);

type Clients = Arc<Mutex<Vec<WebSocket<TcpStream>>>>;

/// Handle to the running reload server. Cheap to clone.
#[derive(Clone)]
pub struct ReloadServer {
    port: u16,
    clients: Clients,
    /// Last build error, replayed to clients that connect while it stands.
    pending_error: Arc<Mutex<Option<String>>>,
}

impl ReloadServer {
    /// Bind on localhost, trying successive ports from `base_port`.
    pub fn start(base_port: u16) -> Result<Self> {
        let (listener, port) = try_bind_port(base_port, MAX_PORT_RETRIES)?;
        listener.set_nonblocking(true)?;
        if port != base_port {
            debug!("reload"; "port {} in use, using {} instead", base_port, port);
        }

        let server = Self {
            port,
            clients: Arc::new(Mutex::new(Vec::new())),
            pending_error: Arc::new(Mutex::new(None)),
        };

        let acceptor = server.clone();
        thread::spawn(move || acceptor.accept_loop(&listener));

        Ok(server)
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    #[cfg(test)]
    pub fn client_count(&self) -> usize {
        self.clients.lock().len()
    }

    /// Broadcast to every connected page, dropping clients that went away.
    pub fn send(&self, message: &HotReloadMessage) {
        match message {
            HotReloadMessage::Error { message } => {
                *self.pending_error.lock() = Some(message.clone());
            }
            HotReloadMessage::Reload => {
                *self.pending_error.lock() = None;
            }
        }

        let text = message.to_json();
        let mut clients = self.clients.lock();
        let count = clients.len();
        clients.retain_mut(|ws| match ws.send(Message::Text(text.clone().into())) {
            Ok(()) => true,
            Err(e) => {
                debug!("reload"; "client disconnected: {}", e);
                false
            }
        });
        debug!("reload"; "sent {} to {} clients", text, count);
    }

    fn accept_loop(&self, listener: &TcpListener) {
        while !is_shutdown() {
            match listener.accept() {
                Ok((stream, addr)) => {
                    debug!("reload"; "client connected: {}", addr);
                    // Accepted sockets may inherit non-blocking mode.
                    let _ = stream.set_nonblocking(false);
                    self.add_client(stream);
                }
                Err(ref e) if e.kind() == ErrorKind::WouldBlock => thread::sleep(ACCEPT_POLL),
                Err(e) => {
                    log!("reload"; "accept error: {}", e);
                    thread::sleep(ACCEPT_POLL);
                }
            }
        }

        for mut ws in self.clients.lock().drain(..) {
            let _ = ws.close(None);
        }
    }

    fn add_client(&self, stream: TcpStream) {
        let mut ws = match tungstenite::accept(stream) {
            Ok(ws) => ws,
            Err(e) => {
                log!("reload"; "handshake failed: {}", e);
                return;
            }
        };

        if let Some(error) = self.pending_error.lock().clone() {
            let text = HotReloadMessage::error(error).to_json();
            if let Err(e) = ws.send(Message::Text(text.into())) {
                debug!("reload"; "failed to send pending error: {}", e);
                return;
            }
        }

        self.clients.lock().push(ws);
    }
}

/// Try binding to port, retry with incremented port if in use
fn try_bind_port(base_port: u16, max_retries: u16) -> Result<(TcpListener, u16)> {
    let mut last_error = None;

    for offset in 0..max_retries {
        let port = base_port.saturating_add(offset);
        match TcpListener::bind(("127.0.0.1", port)) {
            Ok(listener) => {
                let actual_port = listener.local_addr()?.port();
                return Ok((listener, actual_port));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow::anyhow!(
        "Failed to bind WebSocket server after {} attempts: {}",
        max_retries,
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_bind_port_reports_taken_port() {
        let taken = TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = taken.local_addr().unwrap().port();

        let err = try_bind_port(port, 1).unwrap_err();
        assert!(err.to_string().contains("after 1 attempts"));

        // Port 0 asks the OS for any free port.
        let (_listener, actual) = try_bind_port(0, 1).unwrap();
        assert_ne!(actual, 0);
    }

    #[test]
    fn test_client_receives_broadcast() {
        let server = ReloadServer::start(0).unwrap();
        let url = format!("ws://127.0.0.1:{}", server.port());
        let (mut client, _) = tungstenite::connect(url).unwrap();

        for _ in 0..50 {
            if server.client_count() == 1 {
                break;
            }
            thread::sleep(Duration::from_millis(20));
        }
        assert_eq!(server.client_count(), 1);

        server.send(&HotReloadMessage::Reload);
        let message = client.read().unwrap();
        assert_eq!(message.into_text().unwrap().as_str(), r#"{"type":"reload"}"#);
    }

    #[test]
    fn test_pending_error_replayed_to_new_client() {
        let server = ReloadServer::start(0).unwrap();
        server.send(&HotReloadMessage::error("broken"));

        let url = format!("ws://127.0.0.1:{}", server.port());
        let (mut client, _) = tungstenite::connect(url).unwrap();
        let message = client.read().unwrap();
        assert_eq!(
            HotReloadMessage::from_json(message.into_text().unwrap().as_str()),
            Some(HotReloadMessage::error("broken"))
        );
    }
}

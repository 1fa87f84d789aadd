//! Scripted TCP device for testing the session client without hardware.
//!
//! The mock binds an ephemeral port and serves any number of connections,
//! one batch per connection like the real device. Each received frame is
//! recorded; the scripted reaction per command is either a canned response
//! line, silence (drives client read timeouts), or dropping the connection.

use std::collections::{HashMap, HashSet};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Per-command behavior script for a MockDevice.
#[derive(Debug, Clone, Default)]
pub struct MockDeviceScript {
    responses: HashMap<String, String>,
    silent: HashSet<String>,
    drop_on: HashSet<String>,
}

impl MockDeviceScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond to `command` with `line` (terminator appended automatically).
    pub fn respond(mut self, command: &str, line: &str) -> Self {
        self.responses.insert(command.to_string(), line.to_string());
        self
    }

    /// Swallow `command` without responding; the connection stays open.
    pub fn silent(mut self, command: &str) -> Self {
        self.silent.insert(command.to_string());
        self
    }

    /// Drop the connection upon receiving `command`.
    pub fn drop_on(mut self, command: &str) -> Self {
        self.drop_on.insert(command.to_string());
        self
    }
}

/// A scripted device listening on an ephemeral local port.
pub struct MockDevice {
    addr: SocketAddr,
    received: Arc<Mutex<Vec<String>>>,
    handle: JoinHandle<()>,
}

impl MockDevice {
    /// Bind and start serving the given script.
    pub async fn start(script: MockDeviceScript) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock device");
        let addr = listener.local_addr().expect("mock device addr");
        let received = Arc::new(Mutex::new(Vec::new()));

        let task_received = Arc::clone(&received);
        let handle = tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let script = script.clone();
                let received = Arc::clone(&task_received);
                tokio::spawn(async move {
                    serve_connection(stream, script, received).await;
                });
            }
        });

        Self {
            addr,
            received,
            handle,
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn host(&self) -> String {
        self.addr.ip().to_string()
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Every frame received so far, terminators stripped, in arrival order.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }
}

impl Drop for MockDevice {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_connection(
    stream: TcpStream,
    script: MockDeviceScript,
    received: Arc<Mutex<Vec<String>>>,
) {
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        let mut byte = [0u8; 1];
        // Read one line byte-wise; the protocol is Latin-1 so lossy UTF-8
        // decoding is avoided.
        loop {
            match reader.read(&mut byte).await {
                Ok(0) => return,
                Ok(_) if byte[0] == b'\n' => break,
                Ok(_) => buf.push(byte[0]),
                Err(_) => return,
            }
        }

        let line: String = buf.iter().map(|&b| b as char).collect();
        let line = line.trim_end_matches('\r').to_string();
        received.lock().unwrap().push(line.clone());

        let command = command_token(&line);

        if script.drop_on.contains(&command) {
            return;
        }
        if script.silent.contains(&command) {
            continue;
        }

        let reply = match script.responses.get(&command) {
            Some(line) => line.clone(),
            // Devices answer unknown commands with a non-zero status.
            None => format!("01/0/009:{}:", command),
        };
        let mut bytes: Vec<u8> = reply.chars().map(|c| c as u8).collect();
        bytes.push(b'\n');
        if reader.get_mut().write_all(&bytes).await.is_err() {
            return;
        }
    }
}

/// Extract the command token from a received frame
/// (`"01/0/GET_UI_STATE:"` yields `GET_UI_STATE`).
fn command_token(frame: &str) -> String {
    let payload = match frame.splitn(3, '/').nth(2) {
        Some(p) => p,
        None => frame,
    };
    payload
        .split(':')
        .next()
        .unwrap_or(payload)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_token_extraction() {
        assert_eq!(command_token("01/0/GET_UI_STATE:"), "GET_UI_STATE");
        assert_eq!(command_token("05/1/PLAY:"), "PLAY");
        assert_eq!(command_token("PLAY:"), "PLAY");
        assert_eq!(command_token("PLAY"), "PLAY");
    }
}

//! Device connection management.
//!
//! One `DeviceConnection` is one transient TCP session, owned by a single
//! batch of commands. There is no pooling and no reuse across calls; the
//! device does not handle concurrent sessions gracefully, so one socket per
//! batch is a correctness requirement, not a style choice.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tracing::debug;

use strato_core::constants::{LINE_TERMINATOR, MAX_LINE_LEN};
use strato_core::error::{Error, Result};
use strato_core::protocol::latin1_string;

/// An open TCP session with the device.
pub struct DeviceConnection {
    stream: BufReader<TcpStream>,
    timeout: Duration,
}

impl DeviceConnection {
    /// Establish a connection within `timeout`.
    pub async fn connect(host: &str, port: u16, timeout: Duration) -> Result<Self> {
        debug!(host, port, "connecting to device");

        let stream = tokio::time::timeout(timeout, TcpStream::connect((host, port)))
            .await
            .map_err(|_| Error::Timeout)?
            .map_err(|e| Error::Connect {
                message: format!("{}:{}: {}", host, port, e),
            })?;

        Ok(Self {
            stream: BufReader::new(stream),
            timeout,
        })
    }

    /// Write one encoded frame and flush it.
    pub async fn send_frame(&mut self, frame: &[u8]) -> Result<()> {
        self.stream
            .write_all(frame)
            .await
            .map_err(|e| Error::Transport {
                message: format!("write failed: {}", e),
            })?;
        self.stream.flush().await.map_err(|e| Error::Transport {
            message: format!("flush failed: {}", e),
        })
    }

    /// Read one response line within the per-read timeout.
    ///
    /// Returns `Ok(None)` on timeout or EOF (the caller records an absent
    /// response and continues the batch) and `Err` only for transport
    /// failures that invalidate the rest of the session.
    pub async fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::with_capacity(256);
        match tokio::time::timeout(self.timeout, self.stream.read_until(LINE_TERMINATOR, &mut buf))
            .await
        {
            Err(_) => {
                debug!("response read timed out");
                Ok(None)
            }
            Ok(Ok(0)) => {
                debug!("device closed the connection");
                Ok(None)
            }
            Ok(Ok(_)) if buf.len() > MAX_LINE_LEN => Err(Error::Transport {
                message: format!("response line exceeds {} bytes", MAX_LINE_LEN),
            }),
            Ok(Ok(_)) => Ok(Some(latin1_string(&buf))),
            Ok(Err(e)) => Err(Error::Transport {
                message: format!("read failed: {}", e),
            }),
        }
    }

    /// Close the session. Dropping the connection has the same effect; this
    /// makes the shutdown explicit on the happy path.
    pub async fn close(mut self) {
        let _ = self.stream.get_mut().shutdown().await;
    }
}

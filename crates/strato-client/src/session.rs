//! Session client: batched request/response over transient TCP sessions.
//!
//! The client is stateless between calls. Every operation opens its own
//! connection, runs to completion or failure, and closes it; protocol-level
//! failures surface as absent responses or defaulted state, never as errors
//! to the host (see strato-core::error for the taxonomy).

use tokio::time::sleep;
use tracing::{debug, info};

use strato_core::constants::{GET_DEVICE_TYPE_NAME, PLAYBACK_QUERIES, SHARED_QUERIES};
use strato_core::error::Result;
use strato_core::protocol::{decode_line, encode_command, names, BatchResponse, ResponseMessage};
use strato_core::PlaybackState;

use crate::commands::resolve_command;
use crate::config::ClientConfig;
use crate::connection::DeviceConnection;

/// Device identity summary from profile detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceProfile {
    /// Friendly device type name as reported by the device.
    pub device_type: String,
    /// False for server-class devices that have no playback surface.
    pub is_movie_player: bool,
}

/// Client for one device.
#[derive(Debug, Clone)]
pub struct StratoClient {
    config: ClientConfig,
}

impl StratoClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Reachability check: bounded connect, immediate close, no payload.
    pub async fn probe(&self) -> bool {
        match DeviceConnection::connect(&self.config.host, self.config.port, self.config.timeout)
            .await
        {
            Ok(conn) => {
                conn.close().await;
                true
            }
            Err(e) => {
                debug!(host = %self.config.host, port = self.config.port, error = %e,
                    "device unreachable");
                false
            }
        }
    }

    /// Send a batch of commands over one connection, in order, reading one
    /// response line per command.
    ///
    /// A timed-out or EOF'd read leaves that command absent and the batch
    /// continues; a transport error aborts the remainder but returns the
    /// results gathered so far; a connect failure returns an all-absent
    /// batch. Results are keyed by request position with a command-text
    /// view on top.
    pub async fn send_requests<S: AsRef<str>>(&self, commands: &[S]) -> BatchResponse {
        let mut conn = match DeviceConnection::connect(
            &self.config.host,
            self.config.port,
            self.config.timeout,
        )
        .await
        {
            Ok(conn) => conn,
            Err(e) => {
                debug!(host = %self.config.host, error = %e,
                    "connect failed; returning all-absent batch");
                return BatchResponse::all_absent(commands);
            }
        };

        let mut batch = BatchResponse::default();
        for (index, command) in commands.iter().enumerate() {
            let command = command.as_ref();
            let frame = encode_command(command);

            if let Err(e) = conn.send_frame(&frame).await {
                debug!(command, error = %e, "write failed; aborting batch");
                batch.push_absent(&commands[index..]);
                break;
            }

            match conn.read_line().await {
                Ok(Some(line)) => {
                    let decoded = decode_line(&line);
                    if decoded.is_none() {
                        debug!(command, line = line.trim(), "undecodable response line");
                    }
                    batch.push(command.to_string(), decoded);
                }
                Ok(None) => batch.push(command.to_string(), None),
                Err(e) => {
                    debug!(command, error = %e, "read failed; aborting batch");
                    batch.push(command.to_string(), None);
                    batch.push_absent(&commands[index + 1..]);
                    break;
                }
            }
        }

        conn.close().await;
        debug!(
            requested = batch.len(),
            answered = batch.present(),
            "batch complete"
        );
        batch
    }

    /// Single-command convenience wrapper around [`send_requests`].
    ///
    /// [`send_requests`]: StratoClient::send_requests
    pub async fn send_request(&self, command: &str) -> Option<ResponseMessage> {
        let batch = self.send_requests(&[command]).await;
        batch.at(0).cloned()
    }

    /// Dispatch a human command: alias-resolved, raw pass-through gated by
    /// configuration. The device response, if any, is discarded.
    pub async fn send_command(&self, command: &str) -> Result<()> {
        let wire = resolve_command(command, self.config.allow_raw_commands)?;
        info!(command, wire = %wire, "sending command");
        let _ = self.send_request(&wire).await;
        Ok(())
    }

    /// Dispatch a command sequence `repeats` times with `delay` between
    /// consecutive commands (no delay after the final one).
    pub async fn send_command_sequence<S: AsRef<str>>(
        &self,
        commands: &[S],
        repeats: u32,
        delay: std::time::Duration,
    ) -> Result<()> {
        for repeat in 0..repeats {
            for (index, command) in commands.iter().enumerate() {
                self.send_command(command.as_ref()).await?;

                let last = repeat + 1 == repeats && index + 1 == commands.len();
                if !last {
                    sleep(delay).await;
                }
            }
        }
        Ok(())
    }

    /// Poll the device for a full playback-state snapshot.
    ///
    /// With `include_player_metrics` the full ten-query battery is issued;
    /// without it only the shared readiness/power pair is queried and the
    /// player-only fields keep their defaults.
    pub async fn query_playback_state(&self, include_player_metrics: bool) -> PlaybackState {
        let queries: &[&str] = if include_player_metrics {
            &PLAYBACK_QUERIES
        } else {
            &SHARED_QUERIES
        };
        let batch = self.send_requests(queries).await;
        PlaybackState::from_batch(&batch)
    }

    /// Detect the device class. `None` when the device did not answer or
    /// answered unexpectedly; callers then fall back to movie-player
    /// defaults.
    pub async fn device_profile(&self) -> Option<DeviceProfile> {
        let msg = self.send_request(GET_DEVICE_TYPE_NAME).await?;
        if !msg.matches(names::DEVICE_TYPE_NAME, 1) {
            debug!(status = msg.status, name = %msg.name, "unexpected device type response");
            return None;
        }

        let device_type = msg.fields[0].clone();
        // Server-class (Terra) devices expose no playback surface.
        let is_movie_player = !device_type.to_lowercase().contains("terra");
        Some(DeviceProfile {
            device_type,
            is_movie_player,
        })
    }
}

//! CLI types and struct definitions for the `stratoctl` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// Log output format for CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CliLogFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// Structured JSON output.
    Json,
}

impl From<CliLogFormat> for strato_core::LogFormat {
    fn from(fmt: CliLogFormat) -> Self {
        match fmt {
            CliLogFormat::Text => strato_core::LogFormat::Text,
            CliLogFormat::Json => strato_core::LogFormat::Json,
        }
    }
}

/// Target power state for the `power` subcommand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PowerTarget {
    On,
    Off,
}

/// Control a Kaleidescape-class movie player over its TCP control port.
#[derive(Debug, Parser)]
#[command(name = "stratoctl", version, about)]
pub struct Cli {
    /// Device hostname or IP address.
    #[arg(long, global = true, default_value = "127.0.0.1")]
    pub host: String,

    /// Device control port.
    #[arg(long, global = true, default_value_t = strato_core::constants::DEFAULT_PORT)]
    pub port: u16,

    /// Per-operation timeout in seconds (connect and each response read).
    #[arg(long, global = true, default_value_t = 5.0)]
    pub timeout_secs: f64,

    /// Permit raw pass-through commands that match no alias.
    #[arg(long, global = true)]
    pub allow_raw: bool,

    /// Increase verbosity (-v=warn, -vv=info, -vvv=debug, -vvvv=trace).
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format.
    #[arg(long, value_enum, default_value_t, global = true)]
    pub log_format: CliLogFormat,

    /// Write logs to a file instead of stderr.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check whether the device accepts TCP connections.
    Probe,
    /// Send one or more commands (aliases or, with --allow-raw, raw frames).
    Send {
        /// Commands to send, in order.
        #[arg(required = true)]
        commands: Vec<String>,
        /// Repeat the whole sequence this many times.
        #[arg(long, default_value_t = 1)]
        repeat: u32,
        /// Delay between consecutive commands in milliseconds.
        #[arg(long, default_value_t = strato_core::constants::COMMAND_DELAY.as_millis() as u64)]
        delay_ms: u64,
    },
    /// Wake the device or put it into standby.
    Power {
        #[arg(value_enum)]
        target: PowerTarget,
    },
    /// Query one playback-state snapshot.
    Status {
        /// Print the snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Poll playback state on a fixed interval until interrupted.
    Watch {
        /// Seconds between polling cycles.
        #[arg(long, default_value_t = strato_core::constants::POLL_INTERVAL.as_secs())]
        interval_secs: u64,
        /// Print each snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn client_config(&self) -> crate::ClientConfig {
        crate::ClientConfig {
            host: self.host.clone(),
            port: self.port,
            timeout: std::time::Duration::from_secs_f64(self.timeout_secs),
            allow_raw_commands: self.allow_raw,
        }
    }
}

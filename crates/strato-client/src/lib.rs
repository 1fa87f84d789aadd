//! strato-client: Session client and CLI for the Strato control protocol.
//!
//! This crate provides:
//! - A stateless session client (one TCP session per batch)
//! - Command alias resolution with raw pass-through gating
//! - The `stratoctl` CLI

pub mod cli;
pub mod commands;
pub mod config;
pub mod connection;
pub mod session;

pub use cli::Cli;
pub use commands::{resolve_command, COMMAND_ALIASES};
pub use config::ClientConfig;
pub use connection::DeviceConnection;
pub use session::{DeviceProfile, StratoClient};

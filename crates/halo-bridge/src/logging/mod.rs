//! Logging utilities.
//!
//! This module centralizes logger initialization and the sink that carries
//! script console output into the host log. Everything goes through the
//! standard `log` facade.

mod init;
mod sink;

pub use init::{init_logging, LoggingConfig};
pub use sink::{LogSink, ScriptLogLevel, SCRIPT_TARGET};

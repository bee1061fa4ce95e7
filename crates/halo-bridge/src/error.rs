//! Error taxonomy for the bridge and its collaborators.
//!
//! Collaborator failures are typed so the facade can log a full cause chain.
//! The outward `Bridge::initialize` surface still reduces all of this to a
//! boolean.

use std::path::PathBuf;

/// Graphics device construction failures.
#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("render surface handle is invalid: {reason}")]
    InvalidSurface { reason: String },
    #[error("render surface has zero size ({width}x{height})")]
    ZeroSize { width: u32, height: u32 },
    #[error("update stream `{name}` could not be created")]
    UpdateStream { name: String },
    #[error("graphics backend failure")]
    Backend(#[source] anyhow::Error),
}

/// Scripting runtime failures.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("scripting runtime could not be constructed: {reason}")]
    Construction { reason: String },
    #[error("runtime setup dispatch already ran")]
    AlreadyDispatched,
    #[error("scripts cannot load before capability registration")]
    NotPrepared,
}

/// Failure reported by the scripting runtime while loading a script.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScriptError {
    #[error("script `{uri}` could not be resolved: {reason}")]
    Unresolved { uri: String, reason: String },
    #[error("script `{uri}` failed: {message}")]
    Execution { uri: String, message: String },
    #[error("malformed script uri `{uri}`")]
    MalformedUri { uri: String },
}

/// AR platform failures.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("world tracking provider unavailable: {reason}")]
    TrackingUnavailable { reason: String },
    #[error("ar session could not be created: {reason}")]
    Creation { reason: String },
}

/// Configuration loading and validation failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config")]
    Parse(#[source] toml::de::Error),
    #[error("surface size must be non-zero, got {width}x{height}")]
    ZeroSurface { width: u32, height: u32 },
    #[error("update stream name must not be empty")]
    EmptyStreamName,
}

/// Umbrella error for a failed initialization.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("world tracking setup failed")]
    Session(#[source] SessionError),
    #[error("graphics device setup failed")]
    Device(#[source] DeviceError),
    #[error("scripting runtime setup failed")]
    Runtime(#[source] RuntimeError),
    #[error("script loading failed")]
    Script(#[source] ScriptError),
}

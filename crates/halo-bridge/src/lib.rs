//! Halo bridge crate.
//!
//! Binds a platform compositor layer and AR session to an embedded scripting
//! and rendering runtime. The crate owns lifecycle ordering only: device and
//! update-stream creation, runtime setup dispatch, native capability
//! registration, script loading, the AR session, the per-frame cadence and
//! the teardown that inverts all of it. The collaborators themselves sit
//! behind the traits gathered in [`platform::Platform`].

pub mod bridge;
pub mod capability;
pub mod config;
pub mod device;
pub mod error;
pub mod frame;
pub mod input;
pub mod platform;
pub mod runtime;
pub mod script;
pub mod session;
pub mod window;

pub mod logging;

pub use bridge::{Bridge, BridgeState};
pub use config::{BridgeConfig, BuildTarget, SurfaceSize};
pub use error::BridgeError;
pub use platform::Platform;

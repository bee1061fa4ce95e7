//! Runtime Host.
//!
//! Owns the embedded scripting runtime for the lifetime of an initialized
//! bridge. Setup code reaches the script context exactly once, through
//! [`RuntimeHost::dispatch`]; afterwards only script loading is allowed.

mod host;

pub use host::RuntimeHost;

use crate::error::ScriptError;
use crate::script::ScriptUri;

/// Embedded scripting runtime service.
///
/// The runtime is opaque to the bridge. Implementations may run their own
/// cooperative execution context internally, but both operations below must
/// be synchronous from the caller's point of view.
pub trait ScriptRuntime {
    /// Script execution context handed to setup code.
    type Context;

    /// Runs `setup` with exclusive access to the script context and returns
    /// once it has completed.
    fn dispatch<F>(&mut self, setup: F)
    where
        F: FnOnce(&mut Self::Context);

    /// Loads and executes one script resource.
    fn load_script(&mut self, uri: &ScriptUri) -> Result<(), ScriptError>;
}

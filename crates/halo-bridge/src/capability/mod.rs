//! Capability Registrar.
//!
//! Native modules are registered into the script context inside the single
//! setup dispatch, in a fixed order, before any script is loaded.

mod registrar;
mod xr;

pub use registrar::{register_capabilities, Capabilities};
pub use xr::{SessionStateCallback, XrActivity};

use std::sync::Weak;

use crate::input::InputModule;
use crate::logging::LogSink;

/// XR module handle returned by registration.
pub trait XrModule<S> {
    /// Points the module at the render surface.
    fn bind_surface(&mut self, surface: &S);

    fn set_session_state_callback(&mut self, callback: SessionStateCallback);
}

/// Registration services for native modules in script context `C`.
///
/// Only the canvas, XR and input installs hand back something the bridge
/// retains; the rest are stateless registrations.
pub trait CapabilityModules<C> {
    type Surface;
    type Canvas;
    type Xr: XrModule<Self::Surface>;
    type Input: InputModule;

    fn install_console(&mut self, ctx: &mut C, sink: LogSink);

    fn install_canvas(&mut self, ctx: &mut C) -> Self::Canvas;

    fn install_window(&mut self, ctx: &mut C);

    fn install_xhr(&mut self, ctx: &mut C);

    /// Native rendering-engine module.
    fn install_engine(&mut self, ctx: &mut C);

    fn install_optimizations(&mut self, ctx: &mut C);

    fn install_xr(&mut self, ctx: &mut C) -> Self::Xr;

    /// The script context owns the input module; the bridge only keeps a weak
    /// back-reference for event forwarding.
    fn install_input(&mut self, ctx: &mut C) -> Weak<Self::Input>;
}

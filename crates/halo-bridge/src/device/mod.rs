//! Graphics Device Manager.
//!
//! This module is responsible for:
//! - the device/update-stream contracts the frame driver sequences
//! - the construction configuration (surface, size, tracking provider)
//! - a wgpu implementation bound to a platform window handle
//!
//! Frame pairing is a precondition, not a recoverable error: callers must
//! never double-start or double-finish. [`crate::frame::FrameDriver`] is the
//! only caller inside this crate and upholds it by construction.

mod error;
mod frame;
mod gpu;
mod init;
mod stream;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::AcquiredFrame;
pub use gpu::{GpuBindings, WgpuDevice};
pub use init::WgpuInit;
pub use stream::WgpuUpdateStream;

use crate::error::DeviceError;

/// Double-buffered frame-update channel paired with a device.
pub trait UpdateStream {
    fn start(&mut self);
    fn finish(&mut self);
}

/// Graphics device bound to exactly one render surface.
pub trait GraphicsDevice {
    type Stream: UpdateStream;

    /// Creates the device's update stream. Called once, right after construction.
    fn update_stream(&mut self, name: &str) -> Result<Self::Stream, DeviceError>;

    fn start_frame(&mut self);

    fn finish_frame(&mut self);
}

/// Makes a device reachable from script context `C`.
pub trait ScriptBinding<C> {
    fn bind_to_script_context(&self, ctx: &mut C);
}

/// Device construction parameters.
///
/// `tracking` is the world-tracking provider; the renderer may consult it
/// during its own setup, so it is created before the device.
#[derive(Debug, Clone)]
pub struct DeviceConfig<S, T> {
    pub surface: S,
    pub width: u32,
    pub height: u32,
    pub tracking: T,
}

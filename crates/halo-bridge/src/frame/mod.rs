//! Frame Driver.
//!
//! Owns the graphics device and its update stream and sequences their
//! start/finish calls. Every frame is bracketed as
//! `device.start -> stream.start ... stream.finish -> device.finish`,
//! and two logical frames never overlap.

mod clock;
mod driver;

pub use clock::{FrameClock, FrameTime};
pub use driver::{FrameDriver, StreamState};

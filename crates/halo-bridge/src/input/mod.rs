//! Input forwarding.
//!
//! Touches arrive on the UI thread while the bridge lives on the render
//! thread. They are forwarded straight into the script context's input
//! module through a weak handle that is only set while the bridge is
//! initialized. Platform translation lives under `platform`.

mod forwarder;
mod slots;
mod types;

pub mod platform;

pub use forwarder::InputForwarder;
pub use slots::{TouchSlots, TOUCH_SLOT_COUNT};
pub use types::{TouchEvent, TouchKind};

/// Native input module living in the script context.
///
/// Calls may come from any thread; implementations synchronize internally.
pub trait InputModule: Send + Sync {
    fn pointer_down(&self, pointer_id: u32, x: i32, y: i32);
    fn pointer_move(&self, pointer_id: u32, x: i32, y: i32);
    fn pointer_up(&self, pointer_id: u32, x: i32, y: i32);
}

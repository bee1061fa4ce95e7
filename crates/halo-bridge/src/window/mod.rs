//! Render thread + compositor layer loop.
//!
//! The host drives the bridge from one dedicated render thread. Work is
//! queued onto it as closures, or the thread runs the layer loop directly,
//! following the compositor layer's running/paused/invalidated state.

mod layer;
mod render_thread;

pub use layer::{run_layer_loop, CompositorLayer, LayerExit, LayerState};
pub use render_thread::RenderThread;

use crate::bridge::Bridge;
use crate::platform::Platform;

/// Compositor layer state as reported by the host.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LayerState {
    Running,
    Paused,
    Invalidated,
}

/// Platform compositor layer the bridge renders into.
pub trait CompositorLayer {
    fn state(&self) -> LayerState;

    /// Blocks until the layer leaves `Paused`.
    fn wait_until_running(&self);
}

/// Why [`run_layer_loop`] returned.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LayerExit {
    /// The layer was invalidated and the bridge shut down.
    Invalidated,
    /// The bridge could not be initialized.
    InitializeFailed,
}

/// Drives `bridge` for as long as `layer` lives.
///
/// Running: initialize (a no-op once initialized) and render one frame.
/// Paused: block until running. Invalidated: shut down and return.
pub fn run_layer_loop<P, L>(bridge: &mut Bridge<P>, layer: &L) -> LayerExit
where
    P: Platform,
    L: CompositorLayer + ?Sized,
{
    loop {
        match layer.state() {
            LayerState::Invalidated => {
                log::info!("compositor layer invalidated");
                bridge.shutdown();
                return LayerExit::Invalidated;
            }
            LayerState::Paused => layer.wait_until_running(),
            LayerState::Running => {
                if !bridge.initialize() {
                    return LayerExit::InitializeFailed;
                }
                bridge.render();
            }
        }
    }
}

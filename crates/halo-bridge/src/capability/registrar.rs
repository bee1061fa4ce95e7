use std::sync::Weak;

use crate::device::ScriptBinding;
use crate::logging::LogSink;

use super::{CapabilityModules, XrActivity, XrModule};

/// Handles retained by the bridge while initialized.
pub struct Capabilities<Canvas, Xr, Input> {
    pub canvas: Canvas,
    pub xr: Xr,
    pub input: Weak<Input>,
}

/// Registers every native module into `ctx`.
///
/// The device is bound first because the engine and XR modules expect it to
/// be reachable from the script context when they install. Must run to
/// completion before any script loads.
pub fn register_capabilities<C, D, M>(
    ctx: &mut C,
    device: &D,
    modules: &mut M,
    surface: &M::Surface,
    xr_activity: &XrActivity,
) -> Capabilities<M::Canvas, M::Xr, M::Input>
where
    D: ScriptBinding<C>,
    M: CapabilityModules<C>,
{
    device.bind_to_script_context(ctx);

    modules.install_console(ctx, LogSink);

    let canvas = modules.install_canvas(ctx);
    modules.install_window(ctx);
    modules.install_xhr(ctx);

    modules.install_engine(ctx);
    modules.install_optimizations(ctx);

    let mut xr = modules.install_xr(ctx);
    xr.bind_surface(surface);
    xr.set_session_state_callback(xr_activity.callback());

    let input = modules.install_input(ctx);

    log::debug!("native capabilities registered");

    Capabilities { canvas, xr, input }
}

//! Collaborator services bundled per host platform.

use crate::capability::CapabilityModules;
use crate::device::{DeviceConfig, GraphicsDevice, ScriptBinding};
use crate::error::{DeviceError, RuntimeError};
use crate::runtime::ScriptRuntime;
use crate::session::ArPlatform;

/// Script context type of a platform's runtime.
pub type ContextOf<P> = <<P as Platform>::Runtime as ScriptRuntime>::Context;

/// World-tracking provider handle of a platform.
pub type ProviderOf<P> = <<P as Platform>::Ar as ArPlatform>::Provider;

/// Everything the bridge needs from the host: a graphics device factory, a
/// scripting runtime factory, AR services and native module registration.
///
/// The associated types are tied together so that the device can bind into
/// the runtime's context and the XR module can bind to the render surface.
pub trait Platform: Sized {
    /// Render surface handle. Must stay valid while the bridge is initialized.
    type Surface;

    type Ar: ArPlatform;

    type Runtime: ScriptRuntime;

    type Device: GraphicsDevice + ScriptBinding<ContextOf<Self>>;

    type Modules: CapabilityModules<ContextOf<Self>, Surface = Self::Surface>;

    fn create_device(
        &mut self,
        config: DeviceConfig<&Self::Surface, ProviderOf<Self>>,
    ) -> Result<Self::Device, DeviceError>;

    fn create_runtime(&mut self) -> Result<Self::Runtime, RuntimeError>;

    fn ar(&mut self) -> &mut Self::Ar;

    fn modules(&mut self) -> &mut Self::Modules;
}

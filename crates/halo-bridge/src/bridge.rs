//! Bridge Facade.
//!
//! The externally visible object: initialize, render, shutdown, touch
//! forwarding and XR state. Which resources exist is encoded in a tagged
//! lifecycle, so a stream without a device or a runtime without its
//! capabilities cannot be represented.

use crate::capability::{register_capabilities, Capabilities, CapabilityModules, XrActivity};
use crate::config::BridgeConfig;
use crate::device::{DeviceConfig, GraphicsDevice};
use crate::error::{BridgeError, RuntimeError};
use crate::frame::FrameDriver;
use crate::input::{InputForwarder, TouchEvent, TouchKind};
use crate::platform::{ContextOf, Platform};
use crate::runtime::RuntimeHost;
use crate::script::ScriptLoader;
use crate::session::SessionBootstrap;

type ModulesOf<P> = <P as Platform>::Modules;
type CanvasOf<P> = <ModulesOf<P> as CapabilityModules<ContextOf<P>>>::Canvas;
type XrOf<P> = <ModulesOf<P> as CapabilityModules<ContextOf<P>>>::Xr;
type InputOf<P> = <ModulesOf<P> as CapabilityModules<ContextOf<P>>>::Input;

/// Outward lifecycle state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum BridgeState {
    Uninitialized,
    Initialized,
}

/// Resources owned for one initialized period.
struct Live<P: Platform> {
    frames: FrameDriver<P::Device>,
    runtime: RuntimeHost<P::Runtime>,
    capabilities: Capabilities<CanvasOf<P>, XrOf<P>, InputOf<P>>,
    session: SessionBootstrap<P::Ar>,
}

enum Lifecycle<P: Platform> {
    Uninitialized,
    Initialized(Box<Live<P>>),
}

pub struct Bridge<P: Platform> {
    platform: P,
    surface: P::Surface,
    config: BridgeConfig,
    xr_activity: XrActivity,
    input: InputForwarder<InputOf<P>>,
    lifecycle: Lifecycle<P>,
}

impl<P: Platform> Bridge<P> {
    pub fn new(platform: P, surface: P::Surface, config: BridgeConfig) -> Self {
        Self {
            platform,
            surface,
            config,
            xr_activity: XrActivity::new(),
            input: InputForwarder::new(),
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    pub fn state(&self) -> BridgeState {
        match self.lifecycle {
            Lifecycle::Uninitialized => BridgeState::Uninitialized,
            Lifecycle::Initialized(_) => BridgeState::Initialized,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.state() == BridgeState::Initialized
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Device of the current initialized period.
    pub fn device(&self) -> Option<&P::Device> {
        match &self.lifecycle {
            Lifecycle::Initialized(live) => Some(live.frames.device()),
            Lifecycle::Uninitialized => None,
        }
    }

    /// Frame currently in flight, if initialized.
    pub fn frame(&self) -> Option<u64> {
        match &self.lifecycle {
            Lifecycle::Initialized(live) => Some(live.frames.frame()),
            Lifecycle::Uninitialized => None,
        }
    }

    /// Brings up device, runtime, capabilities, scripts and the AR session.
    ///
    /// Returns `true` on success and when already initialized. Failures are
    /// logged with their cause chain and leave the bridge uninitialized.
    pub fn initialize(&mut self) -> bool {
        match self.try_initialize() {
            Ok(()) => true,
            Err(err) => {
                log::error!("bridge initialization failed: {:#}", anyhow::Error::new(err));
                false
            }
        }
    }

    /// Like [`Bridge::initialize`], with the structured cause.
    pub fn try_initialize(&mut self) -> Result<(), BridgeError> {
        if self.is_initialized() {
            log::debug!("initialize ignored: already initialized");
            return Ok(());
        }

        let surface = self.config.surface;
        log::info!("initializing bridge ({}x{})", surface.width, surface.height);

        // The provider is captured by the device configuration, so it comes first.
        let session = SessionBootstrap::prepare(self.platform.ar()).map_err(BridgeError::Session)?;

        let device_config = DeviceConfig {
            surface: &self.surface,
            width: surface.width,
            height: surface.height,
            tracking: session.provider().clone(),
        };
        let mut device = self
            .platform
            .create_device(device_config)
            .map_err(BridgeError::Device)?;
        let stream = device
            .update_stream(&self.config.update_stream)
            .map_err(BridgeError::Device)?;

        let mut frames = FrameDriver::new(device, stream);
        frames.begin();

        let mut runtime = match self.platform.create_runtime() {
            Ok(runtime) => RuntimeHost::new(runtime),
            Err(err) => {
                self.rollback(frames, None, None, session);
                return Err(BridgeError::Runtime(err));
            }
        };

        let capabilities = match self.register(&mut runtime, frames.device()) {
            Ok(capabilities) => capabilities,
            Err(err) => {
                self.rollback(frames, Some(runtime), None, session);
                return Err(BridgeError::Runtime(err));
            }
        };

        let mut live = Live {
            frames,
            runtime,
            capabilities,
            session,
        };

        if let Err(err) = self.load_scripts(&mut live.runtime) {
            self.teardown(live);
            return Err(err);
        }

        if let Err(err) = live.session.run(self.platform.ar()) {
            self.teardown(live);
            return Err(BridgeError::Session(err));
        }

        self.input.attach(live.capabilities.input.clone());
        self.lifecycle = Lifecycle::Initialized(Box::new(live));
        log::info!("bridge initialized");
        Ok(())
    }

    /// Registers every native module in the runtime's single dispatch.
    fn register(
        &mut self,
        host: &mut RuntimeHost<P::Runtime>,
        device: &P::Device,
    ) -> Result<Capabilities<CanvasOf<P>, XrOf<P>, InputOf<P>>, RuntimeError> {
        let modules = self.platform.modules();
        let surface = &self.surface;
        let xr_activity = &self.xr_activity;
        host.dispatch(|ctx| register_capabilities(ctx, device, modules, surface, xr_activity))
    }

    fn load_scripts(&self, host: &mut RuntimeHost<P::Runtime>) -> Result<usize, BridgeError> {
        let loaded = ScriptLoader::new(host)
            .map_err(BridgeError::Runtime)?
            .load_all(&self.config.scripts)
            .map_err(BridgeError::Script)?;
        log::info!("{loaded} scripts loaded");
        Ok(loaded)
    }

    /// Advances one frame. No-op unless initialized.
    pub fn render(&mut self) {
        if let Lifecycle::Initialized(live) = &mut self.lifecycle {
            live.frames.advance();
        }
    }

    /// Drains the in-flight frame and releases everything in reverse order.
    ///
    /// Idempotent.
    pub fn shutdown(&mut self) {
        let Lifecycle::Initialized(live) =
            std::mem::replace(&mut self.lifecycle, Lifecycle::Uninitialized)
        else {
            log::debug!("shutdown ignored: not initialized");
            return;
        };

        self.teardown(*live);
        log::info!("bridge shut down");
    }

    fn teardown(&mut self, live: Live<P>) {
        let Live {
            frames,
            runtime,
            capabilities,
            session,
        } = live;
        self.rollback(frames, Some(runtime), Some(capabilities), session);
    }

    /// Releases whatever an initialized period has built so far, in reverse
    /// creation order. The in-flight frame is finished before any handle drops.
    fn rollback(
        &mut self,
        mut frames: FrameDriver<P::Device>,
        runtime: Option<RuntimeHost<P::Runtime>>,
        capabilities: Option<Capabilities<CanvasOf<P>, XrOf<P>, InputOf<P>>>,
        mut session: SessionBootstrap<P::Ar>,
    ) {
        frames.drain();

        self.input.detach();
        if let Some(Capabilities { canvas, xr, input }) = capabilities {
            drop(input);
            drop(canvas);
            drop(xr);
        }
        drop(runtime);

        frames.release();

        // Provider outlives the session: stop first, drop the bootstrap last.
        session.stop(self.platform.ar());
        drop(session);

        self.xr_activity.record(false);
    }

    /// Forwards a touch to the input module. Returns whether it was delivered.
    pub fn forward_touch(&self, kind: TouchKind, pointer_id: u32, x: i32, y: i32) -> bool {
        self.input.forward(TouchEvent::new(kind, pointer_id, x, y))
    }

    /// Forwarding handle for a UI thread that does not own the bridge.
    pub fn input_forwarder(&self) -> InputForwarder<InputOf<P>> {
        self.input.clone()
    }

    /// Last session state reported by the XR module.
    pub fn is_xr_active(&self) -> bool {
        self.xr_activity.is_active()
    }

    pub fn xr_activity(&self) -> XrActivity {
        self.xr_activity.clone()
    }

    /// Subscribes to XR session state transitions.
    pub fn on_xr_state_changed<F>(&self, observer: F)
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.xr_activity.subscribe(observer);
    }
}

impl<P: Platform> Drop for Bridge<P> {
    fn drop(&mut self) {
        self.shutdown();
    }
}

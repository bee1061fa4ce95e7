use std::sync::Arc;

use anyhow::Context;

use crate::error::DeviceError;

use super::surface;
use super::{
    AcquiredFrame, DeviceConfig, GraphicsDevice, ScriptBinding, SurfaceErrorAction, WgpuInit,
    WgpuUpdateStream,
};

/// Script contexts that accept the wgpu handles of a [`WgpuDevice`].
pub trait GpuBindings {
    fn bind_gpu(&mut self, device: wgpu::Device, queue: wgpu::Queue, format: wgpu::TextureFormat);
}

/// wgpu device bound to one platform render surface.
///
/// This type is the low-level rendering context:
/// - creates and stores Instance/Adapter/Device/Queue
/// - creates and configures the Surface at the configured dimensions
/// - acquires the current surface texture per frame and presents it
///
/// `T` is the world-tracking provider captured from the device configuration;
/// it is kept alive for as long as the device exists.
pub struct WgpuDevice<T> {
    /// Kept alive for the lifetime of the surface.
    _instance: wgpu::Instance,

    surface: wgpu::Surface<'static>,

    adapter: wgpu::Adapter,

    device: wgpu::Device,

    queue: wgpu::Queue,

    /// Active surface configuration.
    config: wgpu::SurfaceConfiguration,

    tracking: T,

    /// Frame between `start_frame` and `finish_frame`, if acquisition succeeded.
    current: Option<AcquiredFrame>,

    /// Set once a surface error mapped to [`SurfaceErrorAction::Fatal`].
    lost: bool,
}

impl<T> WgpuDevice<T> {
    /// Creates a device bound to `config.surface`.
    ///
    /// Adapter/device acquisition is asynchronous under wgpu; this blocks the
    /// calling (render) thread until it completes.
    pub fn new<W>(config: DeviceConfig<Arc<W>, T>, init: WgpuInit) -> Result<Self, DeviceError>
    where
        W: wgpu::WindowHandle + 'static,
    {
        let DeviceConfig {
            surface: window,
            width,
            height,
            tracking,
        } = config;

        if width == 0 || height == 0 {
            return Err(DeviceError::ZeroSize { width, height });
        }

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| DeviceError::InvalidSurface {
                reason: e.to_string(),
            })?;

        let (adapter, device, queue, config) =
            pollster::block_on(acquire(&instance, &surface, width, height, init))
                .map_err(DeviceError::Backend)?;

        surface.configure(&device, &config);

        log::info!(
            "graphics device ready: {} {}x{} {:?}",
            adapter.get_info().name,
            width,
            height,
            config.format
        );

        Ok(Self {
            _instance: instance,
            surface,
            adapter,
            device,
            queue,
            config,
            tracking,
            current: None,
            lost: false,
        })
    }

    /// Returns the active surface format.
    pub fn surface_format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Returns the configured surface dimensions.
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    pub fn adapter_info(&self) -> wgpu::AdapterInfo {
        self.adapter.get_info()
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn queue(&self) -> &wgpu::Queue {
        &self.queue
    }

    /// World-tracking provider captured at construction.
    pub fn tracking(&self) -> &T {
        &self.tracking
    }

    /// View of the frame currently being rendered, if any.
    pub fn current_view(&self) -> Option<&wgpu::TextureView> {
        self.current.as_ref().map(|f| &f.view)
    }

    /// Whether a fatal surface error was observed.
    pub fn is_lost(&self) -> bool {
        self.lost
    }

    /// Reconfigures the surface after the compositor changes its size.
    pub fn resize(&mut self, width: u32, height: u32) {
        surface::apply_resize(&self.surface, &self.device, &mut self.config, width, height);
    }

    fn acquire_frame(&mut self) -> Option<AcquiredFrame> {
        match self.surface.get_current_texture() {
            Ok(surface_texture) => {
                let view = surface_texture
                    .texture
                    .create_view(&wgpu::TextureViewDescriptor::default());
                Some(AcquiredFrame {
                    surface_texture,
                    view,
                })
            }
            Err(err) => {
                let reason = err.to_string();
                let action =
                    surface::map_surface_error(&self.surface, &self.device, &self.config, err);
                match action {
                    SurfaceErrorAction::Fatal => {
                        log::error!("surface lost: {reason}");
                        self.lost = true;
                    }
                    _ => log::debug!("frame skipped ({action:?}): {reason}"),
                }
                None
            }
        }
    }
}

async fn acquire(
    instance: &wgpu::Instance,
    surface: &wgpu::Surface<'static>,
    width: u32,
    height: u32,
    init: WgpuInit,
) -> anyhow::Result<(wgpu::Adapter, wgpu::Device, wgpu::Queue, wgpu::SurfaceConfiguration)> {
    let WgpuInit {
        prefer_srgb,
        present_mode,
        alpha_mode,
        required_features,
        required_limits,
        desired_maximum_frame_latency,
    } = init;

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(surface),
            force_fallback_adapter: false,
        })
        .await
        .context("failed to find a suitable GPU adapter")?;

    let (device, queue) = adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("halo-bridge device"),
            required_features,
            required_limits,
            experimental_features: wgpu::ExperimentalFeatures::disabled(),
            memory_hints: wgpu::MemoryHints::Performance,
            trace: wgpu::Trace::Off,
        })
        .await
        .context("failed to create wgpu device/queue")?;

    let caps = surface.get_capabilities(&adapter);
    let format =
        surface::choose_surface_format(&caps, prefer_srgb).context("no supported surface formats")?;
    let alpha_mode = surface::choose_alpha_mode(&caps, alpha_mode);

    let config = wgpu::SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width,
        height,
        present_mode,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency,
    };

    Ok((adapter, device, queue, config))
}

impl<T> GraphicsDevice for WgpuDevice<T> {
    type Stream = WgpuUpdateStream;

    fn update_stream(&mut self, name: &str) -> Result<Self::Stream, DeviceError> {
        if name.is_empty() {
            return Err(DeviceError::UpdateStream {
                name: name.to_string(),
            });
        }
        Ok(WgpuUpdateStream::new(
            name,
            self.device.clone(),
            self.queue.clone(),
        ))
    }

    fn start_frame(&mut self) {
        if self.lost {
            return;
        }
        self.current = self.acquire_frame();
    }

    fn finish_frame(&mut self) {
        if let Some(frame) = self.current.take() {
            drop(frame.view);
            frame.surface_texture.present();
        }
    }
}

impl<T, C: GpuBindings> ScriptBinding<C> for WgpuDevice<T> {
    fn bind_to_script_context(&self, ctx: &mut C) {
        ctx.bind_gpu(self.device.clone(), self.queue.clone(), self.config.format);
    }
}

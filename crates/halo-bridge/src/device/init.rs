/// Options for bringing up [`WgpuDevice`](super::WgpuDevice) on a compositor surface.
///
/// Surface dimensions are not here; they come from `BridgeConfig` through
/// `DeviceConfig`.
#[derive(Debug, Clone)]
pub struct WgpuInit {
    /// Pick an sRGB swapchain format when the surface offers one.
    pub prefer_srgb: bool,

    /// Present mode. The compositor paces frames, so `Fifo` is the default.
    pub present_mode: wgpu::PresentMode,

    /// Requested blend with the passthrough background.
    ///
    /// Falls back to the first mode the surface supports.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,

    pub required_limits: wgpu::Limits,

    /// At most one frame queued behind the one the update stream is recording.
    pub desired_maximum_frame_latency: u32,
}

impl Default for WgpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: Some(wgpu::CompositeAlphaMode::PreMultiplied),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::surface::choose_alpha_mode;
    use super::*;

    #[test]
    fn default_blends_over_passthrough_when_supported() {
        let mut caps = wgpu::SurfaceCapabilities::default();
        caps.alpha_modes = vec![
            wgpu::CompositeAlphaMode::Opaque,
            wgpu::CompositeAlphaMode::PreMultiplied,
        ];
        let requested = WgpuInit::default().alpha_mode;
        assert_eq!(
            choose_alpha_mode(&caps, requested),
            wgpu::CompositeAlphaMode::PreMultiplied
        );

        caps.alpha_modes = vec![wgpu::CompositeAlphaMode::Opaque];
        assert_eq!(choose_alpha_mode(&caps, requested), wgpu::CompositeAlphaMode::Opaque);
    }
}

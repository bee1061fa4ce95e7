use super::UpdateStream;

/// Update stream for [`super::WgpuDevice`].
///
/// `start` opens a command encoder for the frame's update work and `finish`
/// submits it, so all recorded work lands before the device presents.
pub struct WgpuUpdateStream {
    label: String,
    device: wgpu::Device,
    queue: wgpu::Queue,
    encoder: Option<wgpu::CommandEncoder>,
}

impl WgpuUpdateStream {
    pub(crate) fn new(name: &str, device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            label: name.to_string(),
            device,
            queue,
            encoder: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.label
    }

    /// Encoder for the running update; `None` outside `start`/`finish`.
    pub fn encoder_mut(&mut self) -> Option<&mut wgpu::CommandEncoder> {
        self.encoder.as_mut()
    }
}

impl UpdateStream for WgpuUpdateStream {
    fn start(&mut self) {
        let encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some(&self.label),
            });
        self.encoder = Some(encoder);
    }

    fn finish(&mut self) {
        if let Some(encoder) = self.encoder.take() {
            self.queue.submit(std::iter::once(encoder.finish()));
        }
    }
}

use crate::device::{GraphicsDevice, UpdateStream};

use super::{FrameClock, FrameTime};

/// Update-stream state as seen by the driver.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StreamState {
    Idle,
    Started,
}

/// Device + update stream with strict start/finish pairing.
///
/// The stream only exists together with its device: both are moved in at
/// construction and released together by [`FrameDriver::release`].
pub struct FrameDriver<D: GraphicsDevice> {
    device: D,
    stream: D::Stream,
    state: StreamState,
    clock: FrameClock,
}

impl<D: GraphicsDevice> FrameDriver<D> {
    pub fn new(device: D, stream: D::Stream) -> Self {
        Self {
            device,
            stream,
            state: StreamState::Idle,
            clock: FrameClock::new(),
        }
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    /// Frame currently in flight.
    pub fn frame(&self) -> u64 {
        self.clock.frame()
    }

    /// Starts the first frame. No-op unless idle.
    pub fn begin(&mut self) {
        if self.state != StreamState::Idle {
            return;
        }
        self.device.start_frame();
        self.stream.start();
        self.state = StreamState::Started;
    }

    /// Finishes frame N and starts frame N+1. No-op unless started.
    pub fn advance(&mut self) -> Option<FrameTime> {
        if self.state != StreamState::Started {
            return None;
        }

        self.stream.finish();
        self.device.finish_frame();
        self.device.start_frame();
        self.stream.start();

        let time = self.clock.tick();
        log::trace!("frame {} started (dt {:.4}s)", time.frame, time.dt);
        Some(time)
    }

    /// Finishes the in-flight frame, draining pending work. No-op unless started.
    pub fn drain(&mut self) {
        if self.state != StreamState::Started {
            return;
        }
        self.stream.finish();
        self.device.finish_frame();
        self.state = StreamState::Idle;
    }

    /// Drains, then releases the stream before the device.
    pub fn release(mut self) {
        self.drain();
        let Self { device, stream, .. } = self;
        drop(stream);
        drop(device);
    }
}

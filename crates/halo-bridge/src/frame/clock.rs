use std::time::{Duration, Instant};

/// Timing for one advanced frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Frame number that just started.
    pub frame: u64,

    /// Seconds since the previous advance, clamped.
    pub dt: f32,
}

/// Monotonic frame counter with clamped delta time.
///
/// The first frame (started during initialization) is frame 0; each advance
/// starts the next one.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last: Instant,
    frame: u64,
    dt_max: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::with_max_dt(Duration::from_millis(250))
    }

    /// A long stall (paused layer, debugger) reports at most `dt_max`.
    pub fn with_max_dt(dt_max: Duration) -> Self {
        Self {
            last: Instant::now(),
            frame: 0,
            dt_max,
        }
    }

    /// Frame currently in flight.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).min(self.dt_max);
        self.last = now;
        self.frame = self.frame.wrapping_add(1);

        FrameTime {
            frame: self.frame,
            dt: dt.as_secs_f32(),
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

//! Frame clock
//!
//! Turns timestamps from a host-supplied monotonic source into per-frame
//! elapsed time. The frame counters only feed the FPS diagnostic.

/// Monotonic time source, in seconds
pub trait TimeSource {
    fn now(&self) -> f64;
}

/// Elapsed-time tracker driven once per frame
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_time: f64,
    /// Elapsed time of the most recent frame
    delta: f64,
    /// Frames since the clock was created
    frame_count: u64,
    /// Frames and time accumulated since the last FPS report
    window_frames: u32,
    window_elapsed: f64,
}

impl FrameClock {
    /// Start the clock at `now`
    pub fn new(now: f64) -> Self {
        Self {
            last_time: now,
            delta: 0.0,
            frame_count: 0,
            window_frames: 0,
            window_elapsed: 0.0,
        }
    }

    pub fn start(source: &impl TimeSource) -> Self {
        Self::new(source.now())
    }

    /// Record a frame at `now` and return seconds since the previous one
    pub fn tick(&mut self, now: f64) -> f64 {
        // A source that steps backwards yields a zero-length frame
        self.delta = (now - self.last_time).max(0.0);
        self.last_time = now;

        self.frame_count += 1;
        self.window_frames += 1;
        self.window_elapsed += self.delta;
        self.delta
    }

    /// Read `source` and tick
    pub fn tick_from(&mut self, source: &impl TimeSource) -> f64 {
        self.tick(source.now())
    }

    pub fn delta(&self) -> f64 {
        self.delta
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Average FPS over the current window, once it spans at least
    /// `interval` seconds. Resets the window when it reports.
    pub fn take_fps_report(&mut self, interval: f64) -> Option<f64> {
        if self.window_elapsed < interval || self.window_elapsed <= 0.0 {
            return None;
        }
        let fps = self.window_frames as f64 / self.window_elapsed;
        self.window_frames = 0;
        self.window_elapsed = 0.0;
        Some(fps)
    }
}

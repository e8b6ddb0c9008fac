//! Frame timing statistics. Not used for motion.

/// Weight of the newest sample in the moving average
const FRAME_TIME_WEIGHT: f32 = 0.25;

/// Exponential moving average of frame time plus a frame counter
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameStats {
    pub avg_frame_time: f32,
    pub frames_rendered: u64,
}

impl FrameStats {
    /// Fold one frame's delta (seconds) into the statistics
    pub fn record(&mut self, delta: f32) {
        self.avg_frame_time =
            FRAME_TIME_WEIGHT * delta + (1.0 - FRAME_TIME_WEIGHT) * self.avg_frame_time;
        self.frames_rendered += 1;
    }

    /// Frames per second implied by the average, 0 before any timed frame
    pub fn fps(&self) -> f32 {
        if self.avg_frame_time > 0.0 {
            1.0 / self.avg_frame_time
        } else {
            0.0
        }
    }
}

/// Throttled timer - fires at most once per interval
#[derive(Debug, Clone, Copy)]
pub struct ReportInterval {
    min_interval: f32,
    time_since_last: f32,
}

impl ReportInterval {
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            time_since_last: 0.0,
        }
    }

    /// Accumulate delta, returns true once enough time has passed
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.time_since_last += delta;

        if self.time_since_last >= self.min_interval {
            self.time_since_last = 0.0;
            true
        } else {
            false
        }
    }
}

use std::time::Instant;

/// Frame clock - tracks delta time between ticks
///
/// The first tick after construction or `reset` has nothing to measure
/// against and reports zero elapsed time.
#[derive(Debug, Default, Clone, Copy)]
pub struct Clock {
    last_tick: Option<Instant>,
}

impl Clock {
    /// Create a clock that has not ticked yet
    pub fn new() -> Self {
        Self { last_tick: None }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Same as `tick`, with the current time supplied by the caller
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = match self.last_tick {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.last_tick = Some(now);
        delta
    }

    /// Forget the last tick; the next tick reports zero
    pub fn reset(&mut self) {
        self.last_tick = None;
    }

    pub fn has_ticked(&self) -> bool {
        self.last_tick.is_some()
    }
}

/// The `[start, stop]` window of a tween, in host milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeWindow {
    pub start: f64,
    pub stop: f64,
}

impl TimeWindow {
    /// A window opening at `start` and lasting `duration` milliseconds.
    pub fn starting_at(start: f64, duration: f64) -> Self {
        Self {
            start,
            stop: start + duration,
        }
    }

    /// Normalized progress at `now`.
    ///
    /// Any sample outside the window (late, or earlier than the start
    /// because the clock went backwards) counts as complete and yields 1.
    pub fn elapsed(&self, now: f64) -> f32 {
        if !(self.start..=self.stop).contains(&now) || self.stop <= self.start {
            return 1.0;
        }
        ((now - self.start) / (self.stop - self.start)) as f32
    }
}

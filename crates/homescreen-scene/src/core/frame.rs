//! Host frame scheduling.
//!
//! The scene never owns a timer. It asks the host for "one callback near
//! the next repaint" and the host answers by calling
//! `SceneGraph::on_frame` with a monotonic timestamp.

use std::cell::Cell;

/// Host-provided frame facility.
pub trait FrameScheduler {
    /// Timestamp (ms) of the frame currently being prepared. New tweens
    /// start their window here so they line up with the next paint.
    fn animation_start_time(&self) -> f64;

    /// Ask for a single frame callback. Repeated requests before the frame
    /// fires may be coalesced by the host.
    fn request_frame(&self);
}

impl<T: FrameScheduler + ?Sized> FrameScheduler for &T {
    fn animation_start_time(&self) -> f64 {
        (**self).animation_start_time()
    }

    fn request_frame(&self) {
        (**self).request_frame()
    }
}

/// Nominal refresh interval, used to back-date tweens started between frames.
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / 60.0;

/// Tracks frame timestamps so a host scheduler can answer
/// `animation_start_time` without running ahead of the next paint.
///
/// A tween whose window opens after the next frame's timestamp would be
/// sampled "before its start" and complete at once, so every answer here
/// is at most the timestamp the next frame will carry.
#[derive(Debug, Default)]
pub struct FrameClock {
    current: Cell<Option<f64>>,
    last: Cell<Option<f64>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_frame(&self, timestamp: f64) {
        self.current.set(Some(timestamp));
    }

    pub fn end_frame(&self) {
        if let Some(t) = self.current.take() {
            self.last.set(Some(t));
        }
    }

    /// Timestamp of the frame being handled, if any.
    pub fn in_frame(&self) -> Option<f64> {
        self.current.get()
    }

    /// Start time for a tween begun at host time `now`.
    ///
    /// Inside a frame this is the frame's timestamp. Between frames it is
    /// the host's refresh-tick time (`timeline`) when known, otherwise
    /// `now` back-dated by one refresh interval but not before the last
    /// painted frame.
    pub fn start_time(&self, timeline: Option<f64>, now: f64) -> f64 {
        if let Some(t) = self.current.get() {
            return t;
        }
        if let Some(t) = timeline {
            return t.min(now);
        }
        let backdated = now - FRAME_INTERVAL_MS;
        match self.last.get() {
            Some(last) => backdated.max(last),
            None => backdated,
        }
    }
}

/// Deterministic scheduler for headless hosts and tests.
/// The clock only moves when told to; frame requests are counted.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now: Cell<f64>,
    requests: Cell<u32>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock at a given timestamp.
    pub fn at(now: f64) -> Self {
        let s = Self::default();
        s.now.set(now);
        s
    }

    pub fn set_time(&self, now: f64) {
        self.now.set(now);
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn now(&self) -> f64 {
        self.now.get()
    }

    /// Total frame requests since creation or the last `take_requests`.
    pub fn requests(&self) -> u32 {
        self.requests.get()
    }

    /// Whether a frame is pending, clearing the counter. A host loop calls
    /// this to decide whether to run `on_frame` again.
    pub fn take_requests(&self) -> bool {
        self.requests.replace(0) > 0
    }
}

impl FrameScheduler for ManualScheduler {
    fn animation_start_time(&self) -> f64 {
        self.now.get()
    }

    fn request_frame(&self) {
        self.requests.set(self.requests.get() + 1);
    }
}

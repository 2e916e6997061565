use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;
use homescreen_scene::{FrameClock, FrameScheduler};
use crate::error::BridgeError;

/// `requestAnimationFrame`-backed frame scheduler.
///
/// Requests are coalesced: at most one callback is outstanding. While a
/// frame is being handled, its timestamp is the animation start time, so
/// tweens started from inside a frame line up with it. Between frames the
/// document timeline is used, which never reads ahead of the next frame.
///
/// Dropping the scheduler cancels an outstanding request.
pub struct RafScheduler {
    window: Window,
    callback: Closure<dyn FnMut(f64)>,
    pending: Rc<Cell<Option<i32>>>,
    clock: FrameClock,
}

impl RafScheduler {
    /// `on_frame` runs once per granted request with the frame timestamp.
    pub fn new(on_frame: fn(f64)) -> Result<Self, BridgeError> {
        let window = web_sys::window().ok_or(BridgeError::NoWindow)?;
        let pending = Rc::new(Cell::new(None));
        let handle = pending.clone();
        let callback = Closure::wrap(Box::new(move |timestamp: f64| {
            handle.set(None);
            on_frame(timestamp);
        }) as Box<dyn FnMut(f64)>);

        Ok(Self {
            window,
            callback,
            pending,
            clock: FrameClock::new(),
        })
    }

    /// Mark the start of a frame callback.
    pub fn begin_frame(&self, timestamp: f64) {
        self.clock.begin_frame(timestamp);
    }

    pub fn end_frame(&self) {
        self.clock.end_frame();
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get().is_some()
    }

    /// Withdraw the outstanding request, if any.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            if let Err(e) = self.window.cancel_animation_frame(handle) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
    }

    /// `document.timeline.currentTime`, the time of the current rendering
    /// update.
    fn timeline_time(&self) -> Option<f64> {
        self.window.document()?.timeline().current_time()
    }

    fn performance_now(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or(0.0)
    }
}

impl FrameScheduler for RafScheduler {
    fn animation_start_time(&self) -> f64 {
        self.clock
            .start_time(self.timeline_time(), self.performance_now())
    }

    fn request_frame(&self) {
        if self.is_pending() {
            return;
        }
        match self
            .window
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
        {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

impl Drop for RafScheduler {
    fn drop(&mut self) {
        // The closure is freed with us; the browser must not call it.
        self.cancel();
    }
}

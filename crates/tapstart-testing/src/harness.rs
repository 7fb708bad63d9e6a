use std::cell::Cell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use tapstart_animation::{Transition, TransitionResult, TransitionScheduler};
use tapstart_core::{Clock, FrameClock, Runtime, RuntimeHandle};
use tapstart_overlay::{HeadlessHost, Overlay, OverlayOptions};
use tapstart_ui_graphics::Size;

use crate::clock::ManualClock;

/// Frame interval used when a test does not care about exact timing.
pub const FRAME_MILLIS: u64 = 16;

/// Drives a [`Runtime`] one frame at a time against a [`ManualClock`].
///
/// Each frame first advances the clock, then runs frame callbacks with the
/// new frame time, then drains UI tasks, which is the order a browser
/// animation-frame loop follows.
pub struct FrameHarness {
    runtime: Runtime,
    clock: Rc<ManualClock>,
    frames: Cell<u64>,
}

impl Default for FrameHarness {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameHarness {
    pub fn new() -> Self {
        Self {
            runtime: Runtime::default(),
            clock: Rc::new(ManualClock::new()),
            frames: Cell::new(0),
        }
    }

    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }

    pub fn clock(&self) -> &Rc<ManualClock> {
        &self.clock
    }

    pub fn shared_clock(&self) -> Rc<dyn Clock> {
        self.clock.clone()
    }

    pub fn transition_scheduler(&self) -> TransitionScheduler {
        TransitionScheduler::new(self.frame_clock(), self.shared_clock())
    }

    /// Headless host reading time from this harness.
    pub fn headless_host(&self, viewport: Size) -> Rc<HeadlessHost> {
        Rc::new(HeadlessHost::new(viewport).with_clock(self.shared_clock()))
    }

    pub fn overlay(&self, viewport: Size) -> Overlay<HeadlessHost> {
        self.overlay_with(self.headless_host(viewport), OverlayOptions::default())
    }

    pub fn overlay_with(
        &self,
        host: Rc<HeadlessHost>,
        options: OverlayOptions,
    ) -> Overlay<HeadlessHost> {
        Overlay::new(host, self.frame_clock(), None, options).expect("headless overlay")
    }

    /// Advances time by `millis` and runs one frame.
    pub fn advance_frame(&self, millis: u64) {
        self.clock.advance(millis);
        self.frames.set(self.frames.get() + 1);
        let handle = self.handle();
        handle.drain_frame_callbacks(self.clock.elapsed().as_nanos() as u64);
        handle.drain_ui();
    }

    pub fn run_frames(&self, count: usize, millis: u64) {
        for _ in 0..count {
            self.advance_frame(millis);
        }
    }

    /// Frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames.get()
    }

    /// Runs frames until `transition` settles. `None` if it is still running
    /// after `max_frames`.
    pub fn run_until_settled(
        &self,
        transition: &Transition,
        max_frames: usize,
    ) -> Option<TransitionResult> {
        for _ in 0..max_frames {
            if let Some(result) = transition.result() {
                return Some(result);
            }
            self.advance_frame(FRAME_MILLIS);
        }
        transition.result()
    }

    /// Runs frames until nothing is queued. Returns whether that happened
    /// within `max_frames`.
    pub fn run_until_idle(&self, max_frames: usize) -> bool {
        let handle = self.handle();
        for _ in 0..max_frames {
            if !handle.has_frame_callbacks() && !handle.has_pending_ui() {
                return true;
            }
            self.advance_frame(FRAME_MILLIS);
        }
        !handle.has_frame_callbacks() && !handle.has_pending_ui()
    }
}

/// Polls `future` once with a no-op waker.
pub fn poll_once<F: Future + Unpin>(future: &mut F) -> Poll<F::Output> {
    let mut cx = Context::from_waker(futures_task::noop_waker_ref());
    Pin::new(future).poll(&mut cx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_frame_passes_cumulative_frame_time() {
        let harness = FrameHarness::new();
        let seen = Rc::new(Cell::new(0));
        {
            let seen = Rc::clone(&seen);
            let _ = harness.handle().register_frame_callback(move |nanos| seen.set(nanos));
        }

        harness.advance_frame(10);
        harness.advance_frame(6);

        assert_eq!(seen.get(), 10_000_000);
        assert_eq!(harness.frames(), 2);
        assert!(harness.run_until_idle(1));
    }
}

//! Platform abstraction traits for the overlay runtime.
//!
//! These traits let the runtime delegate frame scheduling and wall-clock
//! time to the host, so the same code drives a browser `requestAnimationFrame`
//! loop, a native event loop, or a test harness with a manual clock.

use web_time::{Duration, Instant};

/// Schedules frames for the runtime.
///
/// Implementations are responsible for eventually calling
/// [`crate::RuntimeHandle::drain_frame_callbacks`] and
/// [`crate::RuntimeHandle::drain_ui`]. Wakers of spawned UI tasks call this
/// from whatever thread wakes them, so implementations must be thread safe.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Provides timing information for tweens.
pub trait Clock {
    /// Returns the current instant.
    fn now(&self) -> Instant;

    /// Returns the number of whole milliseconds elapsed since `since`.
    fn elapsed_millis(&self, since: Instant) -> u64 {
        let elapsed: Duration = self.now().saturating_duration_since(since);
        elapsed.as_millis() as u64
    }
}

/// Wall clock backed by `web_time`, which maps to `performance.now()` on wasm.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdClock;

impl Clock for StdClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

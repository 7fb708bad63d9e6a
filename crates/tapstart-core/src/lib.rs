//! Single-threaded frame runtime for the Tapstart overlay.
//!
//! The runtime owns two queues: one-shot frame callbacks, drained once per
//! host animation frame, and UI tasks (closures and local futures) drained
//! right after them. Hosts implement [`RuntimeScheduler`] to be told when a
//! frame is wanted and [`Clock`] to supply wall-clock time.

mod frame_clock;
pub mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock, NextFrame};
pub use platform::{Clock, RuntimeScheduler, StdClock};
pub use runtime::{DefaultScheduler, Runtime, RuntimeHandle, TaskHandle};

/// Identifier of a queued frame callback.
pub type FrameCallbackId = u64;

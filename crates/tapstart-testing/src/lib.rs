//! Testing utilities and harness for Tapstart
//!
//! [`FrameHarness`] owns a runtime and a [`ManualClock`] and steps frames
//! deterministically, so transitions can be observed frame by frame.

pub mod assertions;
pub mod clock;
pub mod harness;

pub use clock::ManualClock;
pub use harness::{poll_once, FrameHarness, FRAME_MILLIS};

pub mod prelude {
    pub use crate::assertions;
    pub use crate::clock::ManualClock;
    pub use crate::harness::{poll_once, FrameHarness, FRAME_MILLIS};
}

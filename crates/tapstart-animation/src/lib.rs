//! Transition engine for the Tapstart overlay
//!
//! Tweens a single `f32` over time on the host's frame clock. Each tween may
//! carry a [`TransitionToken`]; cancelling the token makes the tween fail with
//! [`TransitionError::Cancelled`] the next time it wakes up.

mod easing;
mod scheduler;
mod token;
mod transition;

pub use easing::Easing;
pub use scheduler::TransitionScheduler;
pub use token::{ActiveTransitions, TransitionToken};
pub use transition::{Transition, TransitionError, TransitionResult, TransitionStatus};

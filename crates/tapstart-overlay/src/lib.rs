//! Heads-up overlay for Tapstart games.
//!
//! The [`Overlay`] draws a score line, a transient message banner and a
//! "tap to start" prompt on top of the game through a host-provided 2D
//! surface, and fades the banner and prompt in and out with cancellable
//! transitions.

mod draw;
mod error;
pub mod headless;
mod host;
mod options;
mod overlay;

pub use error::{HostError, OverlayError};
pub use headless::{DrawOp, HeadlessHost, OffscreenImage, RecordingSurface};
pub use host::{DrawContext, Host, Surface, SurfaceImage};
pub use options::OverlayOptions;
pub use overlay::{ElementState, Overlay, OverlayElement};

pub use tapstart_animation::{Easing, Transition, TransitionError, TransitionResult, TransitionStatus};

pub mod prelude {
    pub use crate::host::{DrawContext, Host, Surface};
    pub use crate::options::OverlayOptions;
    pub use crate::overlay::{ElementState, Overlay, OverlayElement};
    pub use tapstart_animation::{Transition, TransitionError};
}

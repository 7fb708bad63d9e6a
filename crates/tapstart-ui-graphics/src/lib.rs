//! Pure math/data for drawing the Tapstart overlay
//!
//! This crate contains geometry primitives, color definitions, font
//! descriptions and unit types shared by the overlay and its hosts.

mod color;
mod geometry;
mod typography;
mod unit;

pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::color::Color;
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::typography::{Font, FontWeight, TextAlign, TextBaseline};
    pub use crate::unit::{FontSize, Px, Rem};
}

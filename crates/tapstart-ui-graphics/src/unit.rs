//! Unit types: Px, Rem and font sizes

use std::fmt;

/// Raw pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Px(pub f32);

/// Root-relative size, scaled by the host's root font size.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Rem(pub f32);

impl Rem {
    pub fn from_px(px: Px, root_font_px: f32) -> Self {
        Self(px.0 / root_font_px)
    }
}

/// Font size in whichever unit the host prefers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FontSize {
    Px(Px),
    Rem(Rem),
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSize::Px(Px(value)) => write!(f, "{value}px"),
            FontSize::Rem(Rem(value)) => write!(f, "{value}rem"),
        }
    }
}

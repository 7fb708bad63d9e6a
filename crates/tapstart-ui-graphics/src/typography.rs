//! Typography data structures (font weights, fonts, text placement)

use crate::unit::FontSize;
use std::fmt;

/// Font weight (100-900)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    pub const NORMAL: FontWeight = FontWeight(400);
    pub const BOLD: FontWeight = FontWeight(700);
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FontWeight::NORMAL => f.write_str("normal"),
            FontWeight::BOLD => f.write_str("bold"),
            FontWeight(weight) => write!(f, "{weight}"),
        }
    }
}

/// Horizontal anchor of text relative to its draw point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Start,
    End,
    Left,
    Right,
    Center,
}

impl TextAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextAlign::Start => "start",
            TextAlign::End => "end",
            TextAlign::Left => "left",
            TextAlign::Right => "right",
            TextAlign::Center => "center",
        }
    }
}

/// Vertical anchor of text relative to its draw point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Hanging,
    Middle,
    #[default]
    Alphabetic,
    Ideographic,
    Bottom,
}

impl TextBaseline {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextBaseline::Top => "top",
            TextBaseline::Hanging => "hanging",
            TextBaseline::Middle => "middle",
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Ideographic => "ideographic",
            TextBaseline::Bottom => "bottom",
        }
    }
}

/// A resolved font: weight, size and family.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub weight: FontWeight,
    pub size: FontSize,
    pub family: String,
}

impl Font {
    pub fn new(weight: FontWeight, size: FontSize, family: impl Into<String>) -> Self {
        Self {
            weight,
            size,
            family: family.into(),
        }
    }
}

/// CSS font shorthand, e.g. `bold 0.48rem sans-serif`.
impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.weight, self.size, self.family)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::{Px, Rem};

    #[test]
    fn font_formats_as_css_shorthand() {
        let font = Font::new(FontWeight::BOLD, FontSize::Rem(Rem(0.48)), "微软雅黑");
        assert_eq!(font.to_string(), "bold 0.48rem 微软雅黑");

        let font = Font::new(FontWeight(600), FontSize::Px(Px(48.0)), "serif");
        assert_eq!(font.to_string(), "600 48px serif");
    }
}

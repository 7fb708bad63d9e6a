//! Color representation

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    /// Color channels as 8-bit values; alpha is left as a fraction.
    pub fn to_rgb_u8(&self) -> (u8, u8, u8) {
        fn channel(value: f32) -> u8 {
            (value.clamp(0.0, 1.0) * 255.0).round() as u8
        }
        (channel(self.0), channel(self.1), channel(self.2))
    }

    pub const BLACK: Color = Color(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Color = Color(0.0, 0.0, 0.0, 0.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_u8_round_trips_through_floats() {
        let color = Color::from_rgb_u8(51, 51, 51);
        assert_eq!(color.to_rgb_u8(), (51, 51, 51));
        assert_eq!(color.a(), 1.0);
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let color = Color::from_rgb_u8(68, 68, 68).with_alpha(0.4);
        assert_eq!(color.to_rgb_u8(), (68, 68, 68));
        assert_eq!(color.a(), 0.4);
    }
}

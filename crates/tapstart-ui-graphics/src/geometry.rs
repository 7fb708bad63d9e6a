//! Geometric primitives: Point, Size, Rect

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };
}

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Point at the given fractions of the width and height.
    pub fn anchor(&self, x_fraction: f32, y_fraction: f32) -> Point {
        Point::new(self.width * x_fraction, self.height * y_fraction)
    }

    pub fn center(&self) -> Point {
        self.anchor(0.5, 0.5)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_size(size: Size) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        }
    }

    /// Full-width horizontal band of `height`, vertically centred in `size`.
    pub fn centered_band(size: Size, height: f32) -> Self {
        Self {
            x: 0.0,
            y: (size.height - height) / 2.0,
            width: size.width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_band_spans_width_and_centres_vertically() {
        let band = Rect::centered_band(Size::new(400.0, 800.0), 192.0);
        assert_eq!(band, Rect::new(0.0, 304.0, 400.0, 192.0));
    }

    #[test]
    fn anchor_scales_by_fractions() {
        let size = Size::new(400.0, 800.0);
        assert_eq!(size.anchor(0.5, 0.1), Point::new(200.0, 80.0));
        assert_eq!(size.center(), Point::new(200.0, 400.0));
    }
}

use std::rc::Rc;

use tapstart_core::Clock;
use tapstart_ui_graphics::{Color, Font, FontSize, Point, Px, Rect, Size, TextAlign, TextBaseline};

use crate::error::HostError;

/// Immediate-mode 2D drawing, modelled on the browser canvas context.
///
/// Style setters affect every later fill until the matching [`restore`].
///
/// [`restore`]: DrawContext::restore
pub trait DrawContext {
    /// Pre-rendered image type this context can blit.
    type Image;

    fn clear_rect(&mut self, rect: Rect);
    /// Draws `image` scaled to fill `rect`.
    fn draw_image(&mut self, image: &Self::Image, rect: Rect);
    fn set_font(&mut self, font: &Font);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);
    fn set_fill_color(&mut self, color: Color);
    fn fill_text(&mut self, text: &str, position: Point);
    fn fill_rect(&mut self, rect: Rect);
    /// Pushes the current style state.
    fn save(&mut self);
    /// Pops the style state pushed by the last [`DrawContext::save`].
    fn restore(&mut self);
}

/// A drawable target with a backing pixel buffer and an on-screen size.
pub trait Surface: DrawContext {
    /// Size of the backing buffer in device pixels.
    fn pixel_size(&self) -> (u32, u32);
    fn set_pixel_size(&mut self, width: u32, height: u32);
    /// Size the surface occupies on screen, in logical pixels.
    fn display_size(&self) -> Size;
    fn set_display_size(&mut self, size: Size);
}

pub type SurfaceImage<H> = <<H as Host>::Surface as DrawContext>::Image;

/// The environment an overlay runs in.
pub trait Host: 'static {
    type Surface: Surface + 'static;

    /// Creates a fresh surface when the caller did not supply one.
    fn create_surface(&self) -> Result<Self::Surface, HostError>;

    /// Current viewport size in logical pixels.
    fn viewport_size(&self) -> Size;

    /// Embedded runtimes (mini-game containers and the like) own the
    /// viewport; overlays there neither listen for nor apply resizes.
    fn is_embedded(&self) -> bool;

    /// Registers `listener` to run after every viewport resize.
    fn on_resize(&self, listener: Box<dyn FnMut() + 'static>);

    /// Converts a design-pixel size into the host's preferred font unit.
    fn font_size(&self, px: Px) -> FontSize;

    fn clock(&self) -> Rc<dyn Clock>;
}

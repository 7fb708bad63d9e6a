use tapstart_overlay::{DrawContext, HostError, Surface};
use tapstart_ui_graphics::{Color, Font, Point, Rect, Size, TextAlign, TextBaseline};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::js_error;

/// CSS `rgba()` string for `color`.
pub fn css_color(color: Color) -> String {
    let (r, g, b) = color.to_rgb_u8();
    format!("rgba({r},{g},{b},{})", color.a().clamp(0.0, 1.0))
}

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    display_size: Size,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, HostError> {
        let context = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or(HostError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| HostError::ContextUnavailable)?;
        let display_size = Size::new(canvas.width() as f32, canvas.height() as f32);
        Ok(Self {
            canvas,
            context,
            display_size,
        })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.context
    }
}

impl DrawContext for CanvasSurface {
    /// Off-screen canvases are blitted as images.
    type Image = HtmlCanvasElement;

    fn clear_rect(&mut self, rect: Rect) {
        self.context.clear_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn draw_image(&mut self, image: &HtmlCanvasElement, rect: Rect) {
        if let Err(err) = self
            .context
            .draw_image_with_html_canvas_element_and_dw_and_dh(
                image,
                rect.x as f64,
                rect.y as f64,
                rect.width as f64,
                rect.height as f64,
            )
        {
            log::warn!("drawImage failed: {err:?}");
        }
    }

    fn set_font(&mut self, font: &Font) {
        self.context.set_font(&font.to_string());
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.context.set_text_align(align.as_str());
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.context.set_text_baseline(baseline.as_str());
    }

    fn set_fill_color(&mut self, color: Color) {
        self.context.set_fill_style_str(&css_color(color));
    }

    fn fill_text(&mut self, text: &str, position: Point) {
        if let Err(err) = self
            .context
            .fill_text(text, position.x as f64, position.y as f64)
        {
            log::warn!("fillText failed: {err:?}");
        }
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.context.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn save(&mut self) {
        self.context.save();
    }

    fn restore(&mut self) {
        self.context.restore();
    }
}

impl Surface for CanvasSurface {
    fn pixel_size(&self) -> (u32, u32) {
        (self.canvas.width(), self.canvas.height())
    }

    fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn display_size(&self) -> Size {
        self.display_size
    }

    fn set_display_size(&mut self, size: Size) {
        let style = self.canvas.style();
        for (property, value) in [("width", size.width), ("height", size.height)] {
            if let Err(err) = style.set_property(property, &format!("{value}px")) {
                log::warn!("failed to set canvas {property}: {err:?}");
            }
        }
        self.display_size = size;
    }
}

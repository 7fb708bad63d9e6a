//! A host without a display. Draw calls are recorded as [`DrawOp`]s so
//! tests and tools can inspect exactly what an overlay painted.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tapstart_core::{Clock, StdClock};
use tapstart_ui_graphics::{
    Color, Font, FontSize, FontWeight, Point, Px, Rect, Size, TextAlign, TextBaseline,
};

use crate::error::HostError;
use crate::host::{DrawContext, Host, Surface};

/// Stand-in for a pre-rendered image; only its label is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OffscreenImage {
    pub label: String,
}

impl OffscreenImage {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// A recorded draw call. Fills carry the style state that was current when
/// they were issued.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    ClearRect(Rect),
    DrawImage {
        image: OffscreenImage,
        rect: Rect,
    },
    FillText {
        text: String,
        position: Point,
        font: Font,
        color: Color,
        align: TextAlign,
        baseline: TextBaseline,
    },
    FillRect {
        rect: Rect,
        color: Color,
    },
    Save,
    Restore,
}

#[derive(Clone, Debug, PartialEq)]
struct DrawState {
    font: Font,
    align: TextAlign,
    baseline: TextBaseline,
    fill: Color,
}

impl Default for DrawState {
    fn default() -> Self {
        Self {
            font: Font::new(FontWeight::NORMAL, FontSize::Px(Px(10.0)), "sans-serif"),
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
            fill: Color::BLACK,
        }
    }
}

/// Surface that records instead of rasterizing. Starts at the 300x150
/// default canvas size.
#[derive(Debug)]
pub struct RecordingSurface {
    pixel_size: (u32, u32),
    display_size: Size,
    ops: Vec<DrawOp>,
    current: DrawState,
    saved: Vec<DrawState>,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new(300, 150)
    }
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixel_size: (width, height),
            display_size: Size::new(width as f32, height as f32),
            ops: Vec::new(),
            current: DrawState::default(),
            saved: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Text of every `FillText`, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn fill_rects(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillRect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// Number of `save` calls not yet matched by a `restore`.
    pub fn save_depth(&self) -> usize {
        self.saved.len()
    }
}

impl DrawContext for RecordingSurface {
    type Image = OffscreenImage;

    fn clear_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::ClearRect(rect));
    }

    fn draw_image(&mut self, image: &OffscreenImage, rect: Rect) {
        self.ops.push(DrawOp::DrawImage {
            image: image.clone(),
            rect,
        });
    }

    fn set_font(&mut self, font: &Font) {
        self.current.font = font.clone();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.current.align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.current.baseline = baseline;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.current.fill = color;
    }

    fn fill_text(&mut self, text: &str, position: Point) {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            position,
            font: self.current.font.clone(),
            color: self.current.fill,
            align: self.current.align,
            baseline: self.current.baseline,
        });
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: self.current.fill,
        });
    }

    fn save(&mut self) {
        self.saved.push(self.current.clone());
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        // An unmatched restore is ignored, as on a canvas.
        if let Some(state) = self.saved.pop() {
            self.current = state;
        }
        self.ops.push(DrawOp::Restore);
    }
}

impl Surface for RecordingSurface {
    fn pixel_size(&self) -> (u32, u32) {
        self.pixel_size
    }

    fn set_pixel_size(&mut self, width: u32, height: u32) {
        self.pixel_size = (width, height);
    }

    fn display_size(&self) -> Size {
        self.display_size
    }

    fn set_display_size(&mut self, size: Size) {
        self.display_size = size;
    }
}

/// In-memory [`Host`] with a settable viewport.
pub struct HeadlessHost {
    viewport: Cell<Size>,
    embedded: bool,
    clock: Rc<dyn Clock>,
    resize_listeners: RefCell<Vec<Box<dyn FnMut()>>>,
    surfaces_created: Cell<usize>,
}

impl HeadlessHost {
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport: Cell::new(viewport),
            embedded: false,
            clock: Rc::new(StdClock),
            resize_listeners: RefCell::new(Vec::new()),
            surfaces_created: Cell::new(0),
        }
    }

    pub fn with_clock(mut self, clock: Rc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }

    /// Changes the viewport and notifies resize listeners.
    pub fn set_viewport(&self, viewport: Size) {
        self.viewport.set(viewport);
        self.fire_resize();
    }

    pub fn fire_resize(&self) {
        let mut listeners = std::mem::take(&mut *self.resize_listeners.borrow_mut());
        log::trace!("notifying {} resize listener(s)", listeners.len());
        for listener in listeners.iter_mut() {
            listener();
        }
        // Keep listeners that subscribed while we were notifying.
        let mut current = self.resize_listeners.borrow_mut();
        listeners.append(&mut current);
        *current = listeners;
    }

    pub fn resize_listener_count(&self) -> usize {
        self.resize_listeners.borrow().len()
    }

    pub fn surfaces_created(&self) -> usize {
        self.surfaces_created.get()
    }
}

impl Host for HeadlessHost {
    type Surface = RecordingSurface;

    fn create_surface(&self) -> Result<RecordingSurface, HostError> {
        self.surfaces_created.set(self.surfaces_created.get() + 1);
        Ok(RecordingSurface::default())
    }

    fn viewport_size(&self) -> Size {
        self.viewport.get()
    }

    fn is_embedded(&self) -> bool {
        self.embedded
    }

    fn on_resize(&self, listener: Box<dyn FnMut() + 'static>) {
        self.resize_listeners.borrow_mut().push(listener);
    }

    fn font_size(&self, px: Px) -> FontSize {
        FontSize::Px(px)
    }

    fn clock(&self) -> Rc<dyn Clock> {
        Rc::clone(&self.clock)
    }
}

#[cfg(test)]
#[path = "tests/headless_tests.rs"]
mod tests;

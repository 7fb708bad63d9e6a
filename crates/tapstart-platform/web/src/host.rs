use std::rc::Rc;

use tapstart_core::{Clock, StdClock};
use tapstart_overlay::{Host, HostError};
use tapstart_ui_graphics::{FontSize, Px, Rem, Size};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlCanvasElement, Window};

use crate::canvas::CanvasSurface;
use crate::js_error;

#[derive(Clone, Debug, PartialEq)]
pub struct WebHostOptions {
    /// Existing canvas to draw on. A new canvas is appended to `<body>`
    /// when unset.
    pub canvas_id: Option<String>,
    /// Root font size fonts are expressed against, in CSS pixels.
    pub root_font_px: f32,
    /// Set inside mini-game containers that size the canvas themselves.
    pub embedded: bool,
}

impl Default for WebHostOptions {
    fn default() -> Self {
        Self {
            canvas_id: None,
            root_font_px: 100.0,
            embedded: false,
        }
    }
}

impl WebHostOptions {
    pub fn with_canvas_id(mut self, id: impl Into<String>) -> Self {
        self.canvas_id = Some(id.into());
        self
    }

    pub fn with_root_font_px(mut self, px: f32) -> Self {
        self.root_font_px = px;
        self
    }

    pub fn with_embedded(mut self, embedded: bool) -> Self {
        self.embedded = embedded;
        self
    }
}

pub struct WebHost {
    window: Window,
    document: Document,
    options: WebHostOptions,
    clock: Rc<dyn Clock>,
}

impl WebHost {
    pub fn new(options: WebHostOptions) -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        Ok(Self {
            window,
            document,
            options,
            clock: Rc::new(StdClock),
        })
    }

    pub fn options(&self) -> &WebHostOptions {
        &self.options
    }

    fn find_canvas(&self, id: &str) -> Result<HtmlCanvasElement, HostError> {
        self.document
            .get_element_by_id(id)
            .ok_or_else(|| HostError::CanvasNotFound(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| HostError::CanvasNotFound(id.to_string()))
    }

    fn append_canvas(&self) -> Result<HtmlCanvasElement, HostError> {
        let canvas = self
            .document
            .create_element("canvas")
            .map_err(js_error)?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| HostError::Js("created element is not a canvas".to_string()))?;
        let body = self.document.body().ok_or(HostError::NoDocument)?;
        body.append_child(&canvas).map_err(js_error)?;
        Ok(canvas)
    }

    fn window_dimension(value: Result<JsValue, JsValue>) -> f32 {
        value.ok().and_then(|value| value.as_f64()).unwrap_or(0.0) as f32
    }
}

impl Host for WebHost {
    type Surface = CanvasSurface;

    fn create_surface(&self) -> Result<CanvasSurface, HostError> {
        let canvas = match &self.options.canvas_id {
            Some(id) => self.find_canvas(id)?,
            None => self.append_canvas()?,
        };
        CanvasSurface::new(canvas)
    }

    fn viewport_size(&self) -> Size {
        Size::new(
            Self::window_dimension(self.window.inner_width()),
            Self::window_dimension(self.window.inner_height()),
        )
    }

    fn is_embedded(&self) -> bool {
        self.options.embedded
    }

    fn on_resize(&self, mut listener: Box<dyn FnMut() + 'static>) {
        let closure = Closure::wrap(Box::new(move || listener()) as Box<dyn FnMut()>);
        match self
            .window
            .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        {
            // The window keeps calling it for the life of the page.
            Ok(()) => closure.forget(),
            Err(err) => log::warn!("failed to listen for resize: {err:?}"),
        }
    }

    fn font_size(&self, px: Px) -> FontSize {
        FontSize::Rem(Rem::from_px(px, self.options.root_font_px))
    }

    fn clock(&self) -> Rc<dyn Clock> {
        Rc::clone(&self.clock)
    }
}

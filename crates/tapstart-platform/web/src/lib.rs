//! Browser host for the Tapstart overlay.
//!
//! [`WebHost`] hands the overlay a 2D canvas context, reports the window's
//! inner size, and forwards window resizes. [`launch`] wires a runtime, a
//! `requestAnimationFrame` loop and an overlay together.

mod canvas;
mod frame_loop;
mod host;

pub use canvas::{css_color, CanvasSurface};
pub use frame_loop::{run_frame_loop, FrameLoop};
pub use host::{WebHost, WebHostOptions};

use std::rc::Rc;

use tapstart_core::{FrameClock, Runtime, RuntimeHandle};
use tapstart_overlay::{HostError, Overlay, OverlayError, OverlayOptions};

/// A running overlay. Dropping it stops the frame loop.
pub struct WebOverlay {
    overlay: Rc<Overlay<WebHost>>,
    frame_loop: FrameLoop,
    // Declared last so the loop and the overlay let go of it first.
    runtime: Runtime,
}

impl WebOverlay {
    pub fn overlay(&self) -> &Rc<Overlay<WebHost>> {
        &self.overlay
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    /// Handle for spawning UI tasks that drive the overlay.
    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn frame_clock(&self) -> FrameClock {
        self.runtime.frame_clock()
    }
}

impl Drop for WebOverlay {
    fn drop(&mut self) {
        self.frame_loop.stop();
    }
}

/// Creates an overlay on the configured canvas and renders it every frame.
pub fn launch(
    host_options: WebHostOptions,
    overlay_options: OverlayOptions,
) -> Result<WebOverlay, OverlayError> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let runtime = Runtime::default();
    let host = Rc::new(WebHost::new(host_options)?);
    let overlay = Rc::new(Overlay::new(
        host,
        runtime.frame_clock(),
        None,
        overlay_options,
    )?);

    let frame_loop = {
        let overlay = Rc::downgrade(&overlay);
        run_frame_loop(runtime.handle(), move || {
            if let Some(overlay) = overlay.upgrade() {
                overlay.render();
            }
        })?
    };
    log::info!("overlay running");

    Ok(WebOverlay {
        overlay,
        frame_loop,
        runtime,
    })
}

pub(crate) fn js_error(err: wasm_bindgen::JsValue) -> HostError {
    HostError::Js(format!("{err:?}"))
}

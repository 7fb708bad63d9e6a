use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tapstart_core::RuntimeHandle;
use tapstart_overlay::HostError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::js_error;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Handle to a running `requestAnimationFrame` loop.
#[derive(Clone)]
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Stops after the current frame; the loop does not request another.
    pub fn stop(&self) {
        self.running.set(false);
    }
}

/// Drives `runtime` from the browser's animation frames.
///
/// Every frame drains frame callbacks with the rAF timestamp, then UI tasks,
/// then calls `on_frame`. The loop ends once stopped or once the runtime is
/// gone. Its closure stays allocated for the life of the page.
pub fn run_frame_loop(
    runtime: RuntimeHandle,
    mut on_frame: impl FnMut() + 'static,
) -> Result<FrameLoop, HostError> {
    let running = Rc::new(Cell::new(true));
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

    let tick = {
        let running = Rc::clone(&running);
        let slot = Rc::clone(&slot);
        move |timestamp_ms: f64| {
            if !running.get() || !runtime.is_alive() {
                running.set(false);
                return;
            }
            runtime.drain_frame_callbacks((timestamp_ms * 1_000_000.0) as u64);
            runtime.drain_ui();
            on_frame();

            let next = slot
                .borrow()
                .as_ref()
                .map(|callback| request_animation_frame(callback));
            if let Some(Err(err)) = next {
                log::error!("frame loop stopped: {err}");
                running.set(false);
            }
        }
    };
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(tick) as Box<dyn FnMut(f64)>));

    if let Some(callback) = slot.borrow().as_ref() {
        request_animation_frame(callback)?;
    }
    Ok(FrameLoop { running })
}

fn request_animation_frame(callback: &FrameCallback) -> Result<i32, HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(js_error)
}

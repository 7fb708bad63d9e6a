//! A scripted game round for the Tapstart overlay, shared by the native and
//! web entry points.

use std::rc::Rc;

use tapstart_animation::TransitionError;
use tapstart_core::FrameClock;
use tapstart_overlay::{Host, Overlay};

/// Frames to wait between scripted steps.
pub const PAUSE_FRAMES: usize = 30;

async fn pause(frame_clock: &FrameClock, frames: usize) {
    for _ in 0..frames {
        frame_clock.next_frame().await;
    }
}

/// Plays `rounds` rounds: hide the prompt, bump the score, flash a message,
/// then bring the prompt back.
pub async fn play_rounds<H: Host>(
    overlay: Rc<Overlay<H>>,
    frame_clock: FrameClock,
    rounds: i64,
) -> Result<(), TransitionError> {
    pause(&frame_clock, PAUSE_FRAMES).await;
    overlay.toggle_play_button(false).await?;

    for round in 1..=rounds {
        overlay.set_score(round);
        overlay.set_message(format!("Round {round} clear"));
        log::info!("round {round}, score {}", overlay.score());

        overlay.toggle_message(true).await?;
        pause(&frame_clock, PAUSE_FRAMES).await;
        overlay.toggle_message(false).await?;
    }

    overlay.toggle_play_button(true).await
}

#[cfg(target_arch = "wasm32")]
mod web {
    use std::rc::Rc;

    use tapstart_overlay::OverlayOptions;
    use tapstart_platform_web::{launch, WebHostOptions};
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        wasm_logger::init(wasm_logger::Config::default());

        let app = launch(WebHostOptions::default(), OverlayOptions::default())
            .map_err(|err| JsValue::from_str(&err.to_string()))?;
        let overlay = Rc::clone(app.overlay());
        let frame_clock = app.frame_clock();
        app.runtime_handle().spawn_ui(async move {
            if let Err(err) = super::play_rounds(overlay, frame_clock, 3).await {
                log::warn!("demo round interrupted: {err}");
            }
        });

        // The page owns the overlay from here on.
        std::mem::forget(app);
        Ok(())
    }
}

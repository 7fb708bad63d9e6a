use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context};
use overlay_demo::play_rounds;
use tapstart_core::Runtime;
use tapstart_overlay::{DrawOp, HeadlessHost, Overlay, OverlayOptions};
use tapstart_ui_graphics::Size;

const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: usize = 2_000;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Tapstart Overlay Demo ===");
    println!("Plays three scripted rounds on a headless 750x1334 surface.");
    println!();

    let runtime = Runtime::default();
    let handle = runtime.handle();
    let host = Rc::new(HeadlessHost::new(Size::new(750.0, 1334.0)));
    let overlay = Rc::new(Overlay::new(
        host,
        runtime.frame_clock(),
        None,
        OverlayOptions::default(),
    )?);

    let outcome = Rc::new(RefCell::new(None));
    {
        let outcome = Rc::clone(&outcome);
        let overlay = Rc::clone(&overlay);
        let frame_clock = runtime.frame_clock();
        handle
            .spawn_ui(async move {
                let result = play_rounds(overlay, frame_clock, 3).await;
                *outcome.borrow_mut() = Some(result);
            })
            .context("runtime dropped before the demo started")?;
    }

    let started = Instant::now();
    let mut frames = 0;
    let result = loop {
        if let Some(result) = outcome.borrow_mut().take() {
            break result;
        }
        if frames == MAX_FRAMES {
            bail!("demo did not finish within {MAX_FRAMES} frames");
        }
        std::thread::sleep(FRAME);
        handle.drain_frame_callbacks(started.elapsed().as_nanos() as u64);
        handle.drain_ui();
        overlay.surface().borrow_mut().clear_ops();
        overlay.render();
        frames += 1;
    };
    result?;

    log::info!("finished after {frames} frames");
    let surface = overlay.surface();
    for op in surface.borrow().ops() {
        if let DrawOp::FillText { text, color, .. } = op {
            println!("{text:?} alpha {:.2}", color.a());
        }
    }
    Ok(())
}

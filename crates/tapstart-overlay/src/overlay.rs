use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tapstart_animation::{Transition, TransitionScheduler, TransitionToken};
use tapstart_core::FrameClock;
use tapstart_ui_graphics::{Font, FontWeight, Px, Rect};

use crate::draw::{self, OverlayFonts};
use crate::error::OverlayError;
use crate::host::{DrawContext, Host, Surface, SurfaceImage};
use crate::options::OverlayOptions;

/// The two elements that fade in and out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OverlayElement {
    PlayButton,
    Message,
}

/// What [`Overlay::render`] would draw for an element right now.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementState {
    pub visible: bool,
    pub opacity: f32,
}

#[derive(Default)]
struct FadeState {
    /// Visibility most recently asked for; decides whether a toggle is a no-op.
    requested: bool,
    /// Whether the element is drawn. Lags `requested` while fading out.
    visible: bool,
    opacity: f32,
    token: Option<TransitionToken>,
}

impl FadeState {
    fn snapshot(&self) -> ElementState {
        ElementState {
            visible: self.visible,
            opacity: self.opacity,
        }
    }
}

#[derive(Default)]
struct OverlayState {
    score: i64,
    message: Option<String>,
    play_button: FadeState,
    message_banner: FadeState,
}

impl OverlayState {
    fn fade_mut(&mut self, element: OverlayElement) -> &mut FadeState {
        match element {
            OverlayElement::PlayButton => &mut self.play_button,
            OverlayElement::Message => &mut self.message_banner,
        }
    }
}

/// Score, message banner and play button drawn over the game.
///
/// All methods take `&self`; the overlay is shared between the game loop and
/// the transitions it starts. Nothing is painted until [`Overlay::render`].
pub struct Overlay<H: Host> {
    host: Rc<H>,
    surface: Rc<RefCell<H::Surface>>,
    background: RefCell<Option<SurfaceImage<H>>>,
    state: Rc<RefCell<OverlayState>>,
    transitions: TransitionScheduler,
    options: OverlayOptions,
}

impl<H: Host> Overlay<H> {
    /// Builds an overlay on `surface`, or on a fresh host surface when `None`.
    ///
    /// Outside embedded hosts the surface is sized to the viewport and kept
    /// in sync with later resizes. The play button starts shown at its target
    /// opacity, so the first frame already draws the prompt.
    pub fn new(
        host: Rc<H>,
        frame_clock: FrameClock,
        surface: Option<H::Surface>,
        options: OverlayOptions,
    ) -> Result<Self, OverlayError> {
        let surface = match surface {
            Some(surface) => surface,
            None => host.create_surface()?,
        };
        let transitions =
            TransitionScheduler::new(frame_clock, host.clock()).with_easing(options.easing);

        let state = OverlayState {
            play_button: FadeState {
                requested: true,
                visible: true,
                opacity: options.target_opacity(OverlayElement::PlayButton),
                token: None,
            },
            ..OverlayState::default()
        };

        let overlay = Self {
            host,
            surface: Rc::new(RefCell::new(surface)),
            background: RefCell::new(None),
            state: Rc::new(RefCell::new(state)),
            transitions,
            options,
        };

        if overlay.host.is_embedded() {
            log::debug!("embedded host, leaving the surface size alone");
        } else {
            overlay.watch_resize();
            overlay.resize();
        }

        // Already requested, so this settles at once without a fade.
        overlay.toggle_play_button(true);
        Ok(overlay)
    }

    fn watch_resize(&self) {
        let host = Rc::downgrade(&self.host);
        let surface = Rc::downgrade(&self.surface);
        self.host.on_resize(Box::new(move || {
            let (Some(host), Some(surface)) = (host.upgrade(), surface.upgrade()) else {
                return;
            };
            match surface.try_borrow_mut() {
                Ok(mut surface) => fit_to_viewport(&*host, &mut *surface),
                Err(_) => log::warn!("surface busy during resize; skipping"),
            };
        }));
    }

    /// Sizes the surface's backing buffer and on-screen box to the viewport.
    pub fn resize(&self) {
        fit_to_viewport(&*self.host, &mut *self.surface.borrow_mut());
    }

    /// Fades the play button in or out. Asking for the state already
    /// requested returns a completed transition and changes nothing.
    pub fn toggle_play_button(&self, is_open: bool) -> Transition {
        self.toggle(OverlayElement::PlayButton, is_open)
    }

    /// Fades the message banner in or out. Same rules as
    /// [`Overlay::toggle_play_button`].
    pub fn toggle_message(&self, is_open: bool) -> Transition {
        self.toggle(OverlayElement::Message, is_open)
    }

    fn toggle(&self, element: OverlayElement, is_open: bool) -> Transition {
        let previous = {
            let mut state = self.state.borrow_mut();
            let fade = state.fade_mut(element);
            if fade.requested == is_open {
                return Transition::completed();
            }
            fade.requested = is_open;
            if is_open {
                fade.visible = true;
            }
            fade.token.take()
        };
        if let Some(previous) = previous {
            self.transitions.cancel_transition(previous);
        }

        let token = self.transitions.gen_transition_token();
        self.state.borrow_mut().fade_mut(element).token = Some(token);

        let target = self.options.target_opacity(element);
        let (from, to) = if is_open { (0.0, target) } else { (target, 0.0) };
        log::debug!("{element:?} fading {from} -> {to} ({token:?})");

        let transition = self.transitions.transition(
            from,
            to,
            self.options.transition_millis,
            opacity_writer(Rc::downgrade(&self.state), element),
            Some(token),
        );

        if !is_open {
            let state = Rc::downgrade(&self.state);
            transition.on_settled(move |result| {
                if result.is_err() {
                    return;
                }
                let Some(state) = state.upgrade() else {
                    return;
                };
                let mut state = state.borrow_mut();
                let fade = state.fade_mut(element);
                if fade.token == Some(token) {
                    fade.visible = false;
                }
            });
        }

        transition
    }

    /// Stores `value` scaled by 100 for display.
    pub fn set_score(&self, value: i64) {
        self.state.borrow_mut().score = value.saturating_mul(100);
    }

    pub fn set_message(&self, message: impl Into<String>) {
        self.state.borrow_mut().message = Some(message.into());
    }

    /// Image painted under everything else, scaled to the viewport.
    pub fn set_off_screen_image(&self, image: SurfaceImage<H>) {
        *self.background.borrow_mut() = Some(image);
    }

    pub fn clear_off_screen_image(&self) {
        self.background.borrow_mut().take();
    }

    /// Paints the current state: background, score, then the message banner
    /// and the play button when visible.
    pub fn render(&self) {
        let viewport = self.host.viewport_size();
        let fonts = self.fonts();
        let state = self.state.borrow();
        let mut surface = self.surface.borrow_mut();
        let surface = &mut *surface;

        surface.clear_rect(Rect::from_size(viewport));
        if let Some(image) = self.background.borrow().as_ref() {
            surface.draw_image(image, Rect::from_size(viewport));
        }

        draw::draw_score(surface, &self.options, &fonts, viewport, state.score);

        if state.message_banner.visible {
            draw::draw_message(
                surface,
                &self.options,
                &fonts,
                viewport,
                state.message.as_deref().unwrap_or(""),
                state.message_banner.opacity,
            );
        }

        if state.play_button.visible {
            draw::draw_play_button(
                surface,
                &self.options,
                &fonts,
                viewport,
                state.play_button.opacity,
            );
        }
    }

    fn fonts(&self) -> OverlayFonts {
        let font = |px: f32| {
            Font::new(
                FontWeight::BOLD,
                self.host.font_size(Px(px)),
                self.options.font_family.clone(),
            )
        };
        OverlayFonts {
            score: font(self.options.score_font_px),
            message: font(self.options.message_font_px),
            play_button: font(self.options.play_button_font_px),
        }
    }

    /// The drawing surface, for hosts that attach it to their display.
    pub fn surface(&self) -> Rc<RefCell<H::Surface>> {
        Rc::clone(&self.surface)
    }

    pub fn host(&self) -> &Rc<H> {
        &self.host
    }

    pub fn options(&self) -> &OverlayOptions {
        &self.options
    }

    pub fn transitions(&self) -> &TransitionScheduler {
        &self.transitions
    }

    /// Displayed score, already scaled.
    pub fn score(&self) -> i64 {
        self.state.borrow().score
    }

    pub fn message(&self) -> Option<String> {
        self.state.borrow().message.clone()
    }

    pub fn play_button(&self) -> ElementState {
        self.state.borrow().play_button.snapshot()
    }

    pub fn message_banner(&self) -> ElementState {
        self.state.borrow().message_banner.snapshot()
    }

    pub fn element(&self, element: OverlayElement) -> ElementState {
        match element {
            OverlayElement::PlayButton => self.play_button(),
            OverlayElement::Message => self.message_banner(),
        }
    }
}

fn opacity_writer(
    state: Weak<RefCell<OverlayState>>,
    element: OverlayElement,
) -> impl FnMut(f32) + 'static {
    move |opacity| {
        if let Some(state) = state.upgrade() {
            state.borrow_mut().fade_mut(element).opacity = opacity;
        }
    }
}

fn fit_to_viewport<H: Host>(host: &H, surface: &mut H::Surface) {
    let viewport = host.viewport_size();
    let width = viewport.width.max(0.0).round() as u32;
    let height = viewport.height.max(0.0).round() as u32;
    surface.set_pixel_size(width, height);
    surface.set_display_size(viewport);
    log::debug!("surface resized to {width}x{height}");
}

#[cfg(test)]
#[path = "tests/overlay_tests.rs"]
mod tests;

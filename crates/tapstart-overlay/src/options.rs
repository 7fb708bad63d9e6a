use tapstart_animation::Easing;
use tapstart_ui_graphics::Color;

use crate::overlay::OverlayElement;

/// Look and timing of an [`Overlay`](crate::Overlay).
///
/// Sizes are design pixels; the host converts them into its own font unit.
/// Opacities are percentages in `[0, 100]`.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayOptions {
    pub transition_millis: u64,
    pub easing: Easing,
    pub font_family: String,

    pub score_label: String,
    pub score_font_px: f32,
    pub score_color: Color,
    /// Vertical position of the score line as a fraction of the viewport height.
    pub score_anchor_y: f32,

    pub message_font_px: f32,
    pub message_text_color: Color,
    pub message_banner_color: Color,
    pub message_banner_height: f32,
    pub message_opacity: f32,

    pub play_button_label: String,
    pub play_button_font_px: f32,
    pub play_button_color: Color,
    pub play_button_anchor_y: f32,
    pub play_button_opacity: f32,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            transition_millis: 260,
            easing: Easing::EaseInOutQuad,
            font_family: "微软雅黑".to_string(),

            score_label: "Score".to_string(),
            score_font_px: 48.0,
            score_color: Color::from_rgb_u8(51, 51, 51),
            score_anchor_y: 0.1,

            message_font_px: 96.0,
            message_text_color: Color::from_rgb_u8(68, 68, 68),
            message_banner_color: Color::WHITE,
            message_banner_height: 192.0,
            message_opacity: 40.0,

            play_button_label: "Tap Start Game".to_string(),
            play_button_font_px: 48.0,
            play_button_color: Color::from_rgb_u8(51, 51, 51),
            play_button_anchor_y: 0.9,
            play_button_opacity: 100.0,
        }
    }
}

impl OverlayOptions {
    pub fn with_transition_millis(mut self, millis: u64) -> Self {
        self.transition_millis = millis;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn with_score_label(mut self, label: impl Into<String>) -> Self {
        self.score_label = label.into();
        self
    }

    pub fn with_play_button_label(mut self, label: impl Into<String>) -> Self {
        self.play_button_label = label.into();
        self
    }

    pub fn with_message_opacity(mut self, opacity: f32) -> Self {
        self.message_opacity = opacity.clamp(0.0, 100.0);
        self
    }

    pub fn with_play_button_opacity(mut self, opacity: f32) -> Self {
        self.play_button_opacity = opacity.clamp(0.0, 100.0);
        self
    }

    /// Opacity an element fades in to when shown.
    pub fn target_opacity(&self, element: OverlayElement) -> f32 {
        match element {
            OverlayElement::PlayButton => self.play_button_opacity,
            OverlayElement::Message => self.message_opacity,
        }
    }
}

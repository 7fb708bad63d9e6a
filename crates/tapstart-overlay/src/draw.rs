//! Draw routines for the individual overlay elements.
//!
//! Every routine brackets its state changes in `save`/`restore` so the
//! elements never leak font, alignment or fill settings into each other.

use tapstart_ui_graphics::{Color, Font, Point, Rect, Size, TextAlign, TextBaseline};

use crate::host::DrawContext;
use crate::options::OverlayOptions;

/// Resolved fonts for one render pass.
pub(crate) struct OverlayFonts {
    pub score: Font,
    pub message: Font,
    pub play_button: Font,
}

fn alpha(opacity: f32) -> f32 {
    (opacity / 100.0).clamp(0.0, 1.0)
}

fn fill_centered_text<C: DrawContext + ?Sized>(
    ctx: &mut C,
    text: &str,
    font: &Font,
    color: Color,
    position: Point,
) {
    ctx.save();
    ctx.set_font(font);
    ctx.set_text_align(TextAlign::Center);
    ctx.set_text_baseline(TextBaseline::Middle);
    ctx.set_fill_color(color);
    ctx.fill_text(text, position);
    ctx.restore();
}

pub(crate) fn score_text(options: &OverlayOptions, score: i64) -> String {
    format!("{}: {score}", options.score_label)
}

pub(crate) fn draw_score<C: DrawContext + ?Sized>(
    ctx: &mut C,
    options: &OverlayOptions,
    fonts: &OverlayFonts,
    viewport: Size,
    score: i64,
) {
    fill_centered_text(
        ctx,
        &score_text(options, score),
        &fonts.score,
        options.score_color,
        viewport.anchor(0.5, options.score_anchor_y),
    );
}

/// Banner across the middle of the viewport with the message on top.
pub(crate) fn draw_message<C: DrawContext + ?Sized>(
    ctx: &mut C,
    options: &OverlayOptions,
    fonts: &OverlayFonts,
    viewport: Size,
    message: &str,
    opacity: f32,
) {
    let alpha = alpha(opacity);

    ctx.save();
    ctx.set_fill_color(options.message_banner_color.with_alpha(alpha));
    ctx.fill_rect(Rect::centered_band(viewport, options.message_banner_height));
    ctx.restore();

    fill_centered_text(
        ctx,
        message,
        &fonts.message,
        options.message_text_color.with_alpha(alpha),
        viewport.center(),
    );
}

pub(crate) fn draw_play_button<C: DrawContext + ?Sized>(
    ctx: &mut C,
    options: &OverlayOptions,
    fonts: &OverlayFonts,
    viewport: Size,
    opacity: f32,
) {
    fill_centered_text(
        ctx,
        &options.play_button_label,
        &fonts.play_button,
        options.play_button_color.with_alpha(alpha(opacity)),
        viewport.anchor(0.5, options.play_button_anchor_y),
    );
}

#[cfg(test)]
#[path = "tests/draw_tests.rs"]
mod tests;

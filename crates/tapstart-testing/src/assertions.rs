//! Assertion helpers for overlay tests.

use tapstart_overlay::{DrawOp, ElementState};
use tapstart_ui_graphics::Color;

/// Assert that a value is within `tolerance` of `expected`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that the alpha channel matches `opacity` on the 0..=100 scale.
pub fn assert_alpha_matches_opacity(color: Color, opacity: f32, msg: &str) {
    assert_approx_eq(color.a(), opacity / 100.0, 1e-4, msg);
}

pub fn assert_element(actual: ElementState, visible: bool, opacity: f32, msg: &str) {
    assert_eq!(
        actual.visible, visible,
        "{}: expected visible={}, got {:?}",
        msg, visible, actual
    );
    assert_approx_eq(actual.opacity, opacity, 1e-3, &format!("{} - opacity", msg));
}

/// Assert that `values` never decrease.
pub fn assert_non_decreasing(values: &[f32], msg: &str) {
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "{}: {:?} decreases", msg, values);
    }
}

/// Assert that `values` never increase.
pub fn assert_non_increasing(values: &[f32], msg: &str) {
    for pair in values.windows(2) {
        assert!(pair[0] >= pair[1], "{}: {:?} increases", msg, values);
    }
}

/// Text of the `FillText` ops, in draw order.
pub fn texts(ops: &[DrawOp]) -> Vec<String> {
    ops.iter()
        .filter_map(|op| match op {
            DrawOp::FillText { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

/// Colour of the first `FillText` op drawing `text`.
pub fn text_color(ops: &[DrawOp], text: &str) -> Option<Color> {
    ops.iter().find_map(|op| match op {
        DrawOp::FillText {
            text: drawn, color, ..
        } if drawn == text => Some(*color),
        _ => None,
    })
}

pub fn assert_contains_text(ops: &[DrawOp], fragment: &str, msg: &str) {
    let texts = texts(ops);
    assert!(
        texts.iter().any(|t| t.contains(fragment)),
        "{}: text '{}' not found in {:?}",
        msg,
        fragment,
        texts
    );
}

/// Assert that every `Save` is matched by a later `Restore`.
pub fn assert_balanced_save_restore(ops: &[DrawOp], msg: &str) {
    let mut depth = 0i32;
    for op in ops {
        match op {
            DrawOp::Save => depth += 1,
            DrawOp::Restore => {
                depth -= 1;
                assert!(depth >= 0, "{}: restore without save in {:?}", msg, ops);
            }
            _ => {}
        }
    }
    assert_eq!(depth, 0, "{}: unbalanced save/restore", msg);
}

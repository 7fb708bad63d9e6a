use super::*;

use std::cell::Cell;

#[test]
fn fills_capture_style_and_restore_pops_it() {
    let mut surface = RecordingSurface::default();

    surface.set_fill_color(Color::WHITE);
    surface.save();
    surface.set_fill_color(Color::TRANSPARENT);
    surface.set_text_align(TextAlign::Center);
    surface.fill_text("inner", Point::ZERO);
    surface.restore();
    surface.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0));

    let ops = surface.ops();
    assert!(matches!(
        &ops[1],
        DrawOp::FillText { color, align: TextAlign::Center, .. } if *color == Color::TRANSPARENT
    ));
    assert!(matches!(&ops[3], DrawOp::FillRect { color, .. } if *color == Color::WHITE));
    assert_eq!(surface.save_depth(), 0);
}

#[test]
fn unmatched_restore_keeps_state() {
    let mut surface = RecordingSurface::default();
    surface.set_fill_color(Color::WHITE);
    surface.restore();
    surface.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
    assert_eq!(surface.fill_rects()[0].1, Color::WHITE);
}

#[test]
fn take_ops_empties_the_log() {
    let mut surface = RecordingSurface::new(10, 10);
    surface.clear_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
    surface.fill_text("a", Point::ZERO);

    let ops = surface.take_ops();
    assert_eq!(ops.len(), 2);
    assert!(surface.ops().is_empty());
    assert!(surface.texts().is_empty());
}

#[test]
fn set_viewport_notifies_listeners_and_keeps_them() {
    let host = HeadlessHost::new(Size::new(100.0, 100.0));
    let calls = Rc::new(Cell::new(0));
    {
        let calls = Rc::clone(&calls);
        host.on_resize(Box::new(move || calls.set(calls.get() + 1)));
    }

    host.set_viewport(Size::new(200.0, 50.0));
    host.set_viewport(Size::new(300.0, 50.0));

    assert_eq!(calls.get(), 2);
    assert_eq!(host.resize_listener_count(), 1);
    assert_eq!(host.viewport_size(), Size::new(300.0, 50.0));
}

#[test]
fn created_surfaces_start_at_default_canvas_size() {
    let host = HeadlessHost::new(Size::new(10.0, 10.0));
    let surface = host.create_surface().expect("surface");
    assert_eq!(surface.pixel_size(), (300, 150));
    assert_eq!(host.surfaces_created(), 1);
    assert_eq!(host.font_size(Px(48.0)), FontSize::Px(Px(48.0)));
}

use std::cell::RefCell;
use std::rc::Rc;
use std::task::Poll;

use tapstart_animation::{Easing, TransitionError, TransitionStatus};
use tapstart_testing::assertions::{assert_approx_eq, assert_non_decreasing, assert_non_increasing};
use tapstart_testing::{poll_once, FrameHarness, FRAME_MILLIS};

type Updates = Rc<RefCell<Vec<f32>>>;

fn recorder() -> (Updates, impl FnMut(f32) + 'static) {
    let updates: Updates = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&updates);
    (updates, move |value| sink.borrow_mut().push(value))
}

#[test]
fn first_update_is_delivered_before_transition_returns() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let (updates, on_update) = recorder();

    let transition = scheduler.transition(0.0, 100.0, 260, on_update, None);

    assert_eq!(updates.borrow().as_slice(), &[0.0]);
    assert_eq!(transition.status(), TransitionStatus::Running);
}

#[test]
fn rising_tween_ends_exactly_on_target() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let (updates, on_update) = recorder();

    let transition = scheduler.transition(0.0, 100.0, 260, on_update, None);
    let result = harness.run_until_settled(&transition, 64);

    assert_eq!(result, Some(Ok(())));
    let updates = updates.borrow();
    assert_eq!(updates.first().copied(), Some(0.0));
    assert_eq!(updates.last().copied(), Some(100.0));
    assert_non_decreasing(&updates, "rising tween");
}

#[test]
fn falling_tween_mirrors_and_ends_exactly_on_target() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let (updates, on_update) = recorder();

    let transition = scheduler.transition(40.0, 0.0, 260, on_update, None);
    let result = harness.run_until_settled(&transition, 64);

    assert_eq!(result, Some(Ok(())));
    let updates = updates.borrow();
    assert_eq!(updates.first().copied(), Some(40.0));
    assert_eq!(updates.last().copied(), Some(0.0));
    assert_non_increasing(&updates, "falling tween");
    assert!(updates.iter().all(|value| (0.0..=40.0).contains(value)));
}

#[test]
fn ease_in_out_reaches_midpoint_at_half_duration() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let (updates, on_update) = recorder();

    let _transition = scheduler.transition(0.0, 100.0, 200, on_update, None);
    harness.advance_frame(50);
    harness.advance_frame(50);

    let updates = updates.borrow();
    assert_approx_eq(updates[1], 12.5, 1e-3, "quarter way");
    assert_approx_eq(updates[2], 50.0, 1e-3, "half way");
}

#[test]
fn linear_easing_moves_proportionally() {
    let harness = FrameHarness::new();
    let scheduler = harness
        .transition_scheduler()
        .with_easing(Easing::LinearEasing);
    let (updates, on_update) = recorder();

    let _transition = scheduler.transition(0.0, 100.0, 200, on_update, None);
    harness.advance_frame(50);

    assert_approx_eq(updates.borrow()[1], 25.0, 1e-3, "quarter way");
}

#[test]
fn final_value_arrives_on_the_frame_after_duration_is_reached() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let (updates, on_update) = recorder();

    let transition = scheduler.transition(0.0, 10.0, 32, on_update, None);
    harness.run_frames(2, FRAME_MILLIS);
    assert_eq!(updates.borrow().last().copied(), Some(10.0));
    assert!(!transition.is_settled());

    harness.advance_frame(FRAME_MILLIS);
    assert_eq!(transition.result(), Some(Ok(())));
    assert_eq!(updates.borrow().as_slice().len(), 4);
}

#[test]
fn zero_duration_jumps_to_target_and_settles_next_frame() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let (updates, on_update) = recorder();

    let transition = scheduler.transition(0.0, 40.0, 0, on_update, None);
    assert_eq!(updates.borrow().as_slice(), &[40.0]);

    harness.advance_frame(FRAME_MILLIS);
    assert_eq!(transition.result(), Some(Ok(())));
    assert_eq!(updates.borrow().as_slice(), &[40.0, 40.0]);
}

#[test]
fn cancelling_token_fails_transition_on_next_step() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let (updates, on_update) = recorder();
    let token = scheduler.gen_transition_token();

    let transition = scheduler.transition(0.0, 100.0, 260, on_update, Some(token));
    harness.advance_frame(FRAME_MILLIS);
    scheduler.cancel_transition(token);
    let delivered = updates.borrow().len();

    harness.advance_frame(FRAME_MILLIS);

    assert_eq!(transition.result(), Some(Err(TransitionError::Cancelled)));
    assert_eq!(updates.borrow().len(), delivered);
    assert!(!scheduler.is_active(token));
    assert!(harness.run_until_idle(1));
}

#[test]
fn cancellation_after_last_step_still_completes() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let (updates, on_update) = recorder();
    let token = scheduler.gen_transition_token();

    let transition = scheduler.transition(0.0, 100.0, 32, on_update, Some(token));
    harness.run_frames(2, FRAME_MILLIS);
    scheduler.cancel_transition(token);

    harness.advance_frame(FRAME_MILLIS);

    assert_eq!(transition.result(), Some(Ok(())));
    assert_eq!(updates.borrow().last().copied(), Some(100.0));
}

#[test]
fn completed_token_leaves_active_set() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let token = scheduler.gen_transition_token();
    assert!(scheduler.is_active(token));

    let transition = scheduler.transition(0.0, 1.0, 48, |_| {}, Some(token));
    harness.run_until_settled(&transition, 16);

    assert!(!scheduler.is_active(token));
    assert_eq!(scheduler.active_count(), 0);
}

#[test]
fn falling_tween_honours_its_token() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let token = scheduler.gen_transition_token();

    let transition = scheduler.transition(100.0, 0.0, 260, |_| {}, Some(token));
    scheduler.cancel_transition(token);
    harness.advance_frame(FRAME_MILLIS);

    assert_eq!(transition.result(), Some(Err(TransitionError::Cancelled)));
}

#[test]
fn transition_runs_without_being_polled() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let (updates, on_update) = recorder();

    drop(scheduler.transition(0.0, 100.0, 64, on_update, None));
    harness.run_frames(8, FRAME_MILLIS);

    assert_eq!(updates.borrow().last().copied(), Some(100.0));
}

#[test]
fn awaiting_task_resumes_with_result() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let outcome = Rc::new(RefCell::new(None));

    let transition = scheduler.transition(0.0, 100.0, 64, |_| {}, None);
    {
        let outcome = Rc::clone(&outcome);
        harness
            .handle()
            .spawn_ui(async move {
                let result = transition.await;
                *outcome.borrow_mut() = Some(result);
            })
            .expect("runtime alive");
    }

    assert!(harness.run_until_idle(32));
    assert_eq!(*outcome.borrow(), Some(Ok(())));
}

#[test]
fn polling_reports_cancellation_as_error() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();
    let token = scheduler.gen_transition_token();

    let mut transition = scheduler.transition(0.0, 100.0, 260, |_| {}, Some(token));
    assert!(poll_once(&mut transition).is_pending());

    scheduler.cancel_transition(token);
    harness.advance_frame(FRAME_MILLIS);

    match poll_once(&mut transition) {
        Poll::Ready(Err(err)) => assert_eq!(err.to_string(), "Cancel transition"),
        other => panic!("expected cancellation, got {other:?}"),
    }
}

#[test]
fn dropping_scheduler_cancels_running_transitions() {
    let harness = FrameHarness::new();
    let scheduler = harness.transition_scheduler();

    let transition = scheduler.transition(0.0, 100.0, 260, |_| {}, None);
    drop(scheduler);
    harness.advance_frame(FRAME_MILLIS);

    assert_eq!(transition.result(), Some(Err(TransitionError::Cancelled)));
}

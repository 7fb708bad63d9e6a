use super::*;

use crate::frame_clock::FrameCallbackRegistration;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
struct CountingScheduler {
    requests: AtomicUsize,
}

impl RuntimeScheduler for CountingScheduler {
    fn schedule_frame(&self) {
        self.requests.fetch_add(1, Ordering::SeqCst);
    }
}

#[test]
fn frame_callbacks_run_in_registration_order_with_frame_time() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let seen = Rc::new(RefCell::new(Vec::new()));

    for label in ["a", "b", "c"] {
        let seen = Rc::clone(&seen);
        handle.register_frame_callback(move |time| seen.borrow_mut().push((label, time)));
    }
    assert!(handle.has_frame_callbacks());

    handle.drain_frame_callbacks(16_000_000);

    assert_eq!(
        seen.borrow().as_slice(),
        &[("a", 16_000_000), ("b", 16_000_000), ("c", 16_000_000)]
    );
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn callbacks_registered_while_draining_wait_for_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let frames = Rc::new(RefCell::new(Vec::new()));

    {
        let frames = Rc::clone(&frames);
        let nested_handle = handle.clone();
        handle.register_frame_callback(move |time| {
            frames.borrow_mut().push(time);
            let frames = Rc::clone(&frames);
            nested_handle.register_frame_callback(move |time| frames.borrow_mut().push(time));
        });
    }

    handle.drain_frame_callbacks(1);
    assert_eq!(frames.borrow().as_slice(), &[1]);
    assert!(handle.has_frame_callbacks());

    handle.drain_frame_callbacks(2);
    assert_eq!(frames.borrow().as_slice(), &[1, 2]);
}

#[test]
fn dropping_registration_cancels_callback() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let fired = Rc::new(Cell::new(false));

    let registration = {
        let fired = Rc::clone(&fired);
        clock.with_frame_nanos(move |_| fired.set(true))
    };
    assert!(registration.is_active());
    drop(registration);

    runtime.handle().drain_frame_callbacks(1);
    assert!(!fired.get());
    assert!(!runtime.needs_frame());
}

#[test]
fn callback_cancelled_earlier_in_same_frame_does_not_run() {
    let runtime = Runtime::default();
    let clock = runtime.frame_clock();
    let fired = Rc::new(Cell::new(false));
    let later: Rc<RefCell<Option<FrameCallbackRegistration>>> = Rc::new(RefCell::new(None));

    let _first = {
        let later = Rc::clone(&later);
        clock.with_frame_nanos(move |_| {
            later.borrow_mut().take();
        })
    };
    {
        let fired = Rc::clone(&fired);
        *later.borrow_mut() = Some(clock.with_frame_nanos(move |_| fired.set(true)));
    }

    runtime.handle().drain_frame_callbacks(1);
    assert!(!fired.get());
    assert!(!runtime.handle().has_frame_callbacks());
    assert!(!runtime.needs_frame());
}

#[test]
fn with_frame_millis_converts_nanos() {
    let runtime = Runtime::default();
    let millis = Rc::new(Cell::new(0));
    let _registration = {
        let millis = Rc::clone(&millis);
        runtime
            .frame_clock()
            .with_frame_millis(move |value| millis.set(value))
    };

    runtime.handle().drain_frame_callbacks(48_500_000);
    assert_eq!(millis.get(), 48);
}

#[test]
fn spawned_task_resumes_after_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let frame_time = Rc::new(Cell::new(None));

    {
        let frame_time = Rc::clone(&frame_time);
        let clock = runtime.frame_clock();
        handle.spawn_ui(async move {
            let time = clock.next_frame().await;
            frame_time.set(Some(time));
        });
    }

    handle.drain_ui();
    assert_eq!(frame_time.get(), None);
    assert!(handle.has_pending_ui());

    handle.drain_frame_callbacks(33);
    handle.drain_ui();
    assert_eq!(frame_time.get(), Some(33));
    assert!(!handle.has_pending_ui());
    assert!(!runtime.needs_frame());
}

#[test]
fn cancelled_task_is_never_polled_again() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let finished = Rc::new(Cell::new(false));

    let task = {
        let finished = Rc::clone(&finished);
        let clock = runtime.frame_clock();
        handle
            .spawn_ui(async move {
                clock.next_frame().await;
                finished.set(true);
            })
            .expect("runtime alive")
    };
    handle.drain_ui();
    task.cancel();

    handle.drain_frame_callbacks(1);
    handle.drain_ui();
    assert!(!finished.get());
}

#[test]
fn scheduler_is_asked_once_per_idle_period() {
    let scheduler = Arc::new(CountingScheduler::default());
    let runtime = Runtime::new(scheduler.clone());
    let handle = runtime.handle();

    handle.register_frame_callback(|_| {});
    handle.register_frame_callback(|_| {});
    assert_eq!(scheduler.requests.load(Ordering::SeqCst), 1);
    assert!(runtime.needs_frame());

    handle.drain_frame_callbacks(1);
    assert!(!runtime.needs_frame());

    handle.enqueue_ui_task(Box::new(|| {}));
    assert_eq!(scheduler.requests.load(Ordering::SeqCst), 2);
    handle.drain_ui();
    assert!(!runtime.needs_frame());
}

#[test]
fn handle_is_inert_after_runtime_drops() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    drop(runtime);

    assert!(!handle.is_alive());
    assert!(handle.register_frame_callback(|_| {}).is_none());
    assert!(handle.spawn_ui(async {}).is_none());

    let ran = Rc::new(Cell::new(false));
    let ran_clone = Rc::clone(&ran);
    handle.enqueue_ui_task(Box::new(move || ran_clone.set(true)));
    assert!(ran.get());
}

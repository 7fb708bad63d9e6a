use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use tapstart_core::{Clock, FrameClock};
use web_time::Instant;

use crate::easing::Easing;
use crate::token::{ActiveTransitions, TransitionToken};
use crate::transition::{Transition, TransitionError};

type UpdateFn = Box<dyn FnMut(f32) + 'static>;

struct SchedulerInner {
    frame_clock: FrameClock,
    clock: Rc<dyn Clock>,
    easing: Cell<Easing>,
    active: RefCell<ActiveTransitions>,
}

/// Starts tweens on a frame clock and tracks which of them may continue.
///
/// Cancellation is cooperative: [`TransitionScheduler::cancel_transition`]
/// only forgets the token, and the tween notices on its next step. A tween
/// whose last step already reached the duration still delivers its final
/// value on the following frame.
#[derive(Clone)]
pub struct TransitionScheduler {
    inner: Rc<SchedulerInner>,
}

impl TransitionScheduler {
    pub fn new(frame_clock: FrameClock, clock: Rc<dyn Clock>) -> Self {
        Self {
            inner: Rc::new(SchedulerInner {
                frame_clock,
                clock,
                easing: Cell::new(Easing::default()),
                active: RefCell::new(ActiveTransitions::new()),
            }),
        }
    }

    pub fn with_easing(self, easing: Easing) -> Self {
        self.inner.easing.set(easing);
        self
    }

    pub fn easing(&self) -> Easing {
        self.inner.easing.get()
    }

    pub fn gen_transition_token(&self) -> TransitionToken {
        let token = self.inner.active.borrow_mut().generate();
        log::trace!("issued {token:?}");
        token
    }

    /// Forgets `token`. A no-op when it already completed or was cancelled.
    pub fn cancel_transition(&self, token: TransitionToken) {
        if self.inner.active.borrow_mut().remove(token) {
            log::debug!("cancelling {token:?}");
        }
    }

    pub fn is_active(&self, token: TransitionToken) -> bool {
        self.inner.active.borrow().contains(token)
    }

    pub fn active_count(&self) -> usize {
        self.inner.active.borrow().len()
    }

    /// Tweens from `from` to `to` over `duration_millis`, feeding every
    /// intermediate value to `on_update`.
    ///
    /// The first update happens before this returns. The last update is
    /// always exactly `to`, delivered on the frame after the elapsed time
    /// reaches the duration. With a `token`, the tween fails with
    /// [`TransitionError::Cancelled`] on the first step after the token is
    /// cancelled.
    pub fn transition(
        &self,
        from: f32,
        to: f32,
        duration_millis: u64,
        on_update: impl FnMut(f32) + 'static,
        token: Option<TransitionToken>,
    ) -> Transition {
        self.start(from, to, duration_millis, Box::new(on_update), token)
    }

    fn start(
        &self,
        from: f32,
        to: f32,
        duration_millis: u64,
        mut on_update: UpdateFn,
        token: Option<TransitionToken>,
    ) -> Transition {
        if from > to {
            // Run the curve upwards and mirror every value back into [to, from].
            return self.start(
                to,
                from,
                duration_millis,
                Box::new(move |value| on_update(mirror(value, to, from))),
                token,
            );
        }

        log::debug!("transition {from} -> {to} over {duration_millis}ms ({token:?})");
        let transition = Transition::running();
        let run = Rc::new(TweenRun {
            scheduler: Rc::downgrade(&self.inner),
            from,
            to,
            duration_millis,
            started_at: self.inner.clock.now(),
            token,
            on_update: RefCell::new(on_update),
            transition: transition.clone(),
        });
        run.step();
        transition
    }
}

/// Reflects `value` inside `[low, high]`, pinning the ends exactly.
fn mirror(value: f32, low: f32, high: f32) -> f32 {
    if value <= low {
        high
    } else if value >= high {
        low
    } else {
        low + high - value
    }
}

struct TweenRun {
    scheduler: Weak<SchedulerInner>,
    from: f32,
    to: f32,
    duration_millis: u64,
    started_at: Instant,
    token: Option<TransitionToken>,
    on_update: RefCell<UpdateFn>,
    transition: Transition,
}

impl TweenRun {
    fn step(self: Rc<Self>) {
        let Some(scheduler) = self.scheduler.upgrade() else {
            self.transition.settle(Err(TransitionError::Cancelled));
            return;
        };

        if let Some(token) = self.token {
            if !scheduler.active.borrow().contains(token) {
                log::debug!("{token:?} observed cancellation");
                self.transition.settle(Err(TransitionError::Cancelled));
                return;
            }
        }

        let elapsed = scheduler.clock.elapsed_millis(self.started_at);
        let value = scheduler
            .easing
            .get()
            .interpolate(elapsed, self.from, self.to, self.duration_millis);
        self.emit(value);

        let run = Rc::clone(&self);
        let registration = scheduler.frame_clock.with_frame_millis(move |_| {
            if elapsed < run.duration_millis {
                run.step();
            } else {
                run.finish();
            }
        });
        self.transition.set_registration(registration);
    }

    fn finish(&self) {
        self.emit(self.to);
        if let (Some(token), Some(scheduler)) = (self.token, self.scheduler.upgrade()) {
            scheduler.active.borrow_mut().remove(token);
        }
        log::debug!("transition to {} finished ({:?})", self.to, self.token);
        self.transition.settle(Ok(()));
    }

    fn emit(&self, value: f32) {
        (self.on_update.borrow_mut())(value);
    }
}

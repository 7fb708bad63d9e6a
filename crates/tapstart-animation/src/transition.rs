use std::cell::RefCell;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use tapstart_core::FrameCallbackRegistration;

/// Why a transition did not run to completion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionError {
    /// The transition's token was cancelled, usually by a newer toggle.
    Cancelled,
}

impl fmt::Display for TransitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionError::Cancelled => write!(f, "Cancel transition"),
        }
    }
}

impl std::error::Error for TransitionError {}

pub type TransitionResult = Result<(), TransitionError>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStatus {
    Running,
    Completed,
    Cancelled,
}

type SettledCallback = Box<dyn FnOnce(TransitionResult) + 'static>;

struct TransitionState {
    status: TransitionStatus,
    wakers: Vec<Waker>,
    on_settled: Vec<SettledCallback>,
    registration: Option<FrameCallbackRegistration>,
}

/// Completion handle of a running tween.
///
/// The tween is driven by the frame clock, not by polling: it keeps running
/// whether or not this future is awaited or dropped. Clones observe the same
/// tween.
#[derive(Clone)]
pub struct Transition {
    state: Rc<RefCell<TransitionState>>,
}

impl Transition {
    pub(crate) fn running() -> Self {
        Self::with_status(TransitionStatus::Running)
    }

    /// A transition that has already finished, for requests that need no tween.
    pub fn completed() -> Self {
        Self::with_status(TransitionStatus::Completed)
    }

    fn with_status(status: TransitionStatus) -> Self {
        Self {
            state: Rc::new(RefCell::new(TransitionState {
                status,
                wakers: Vec::new(),
                on_settled: Vec::new(),
                registration: None,
            })),
        }
    }

    pub fn status(&self) -> TransitionStatus {
        self.state.borrow().status
    }

    pub fn is_settled(&self) -> bool {
        self.status() != TransitionStatus::Running
    }

    /// The outcome, once the transition has settled.
    pub fn result(&self) -> Option<TransitionResult> {
        match self.status() {
            TransitionStatus::Running => None,
            TransitionStatus::Completed => Some(Ok(())),
            TransitionStatus::Cancelled => Some(Err(TransitionError::Cancelled)),
        }
    }

    /// Runs `callback` with the outcome once the transition settles, or right
    /// away if it already has.
    pub fn on_settled(&self, callback: impl FnOnce(TransitionResult) + 'static) {
        if let Some(result) = self.result() {
            callback(result);
            return;
        }
        self.state.borrow_mut().on_settled.push(Box::new(callback));
    }

    pub(crate) fn set_registration(&self, registration: FrameCallbackRegistration) {
        let mut state = self.state.borrow_mut();
        if state.status == TransitionStatus::Running {
            state.registration = Some(registration);
        }
    }

    pub(crate) fn settle(&self, result: TransitionResult) {
        let (callbacks, wakers, registration) = {
            let mut state = self.state.borrow_mut();
            if state.status != TransitionStatus::Running {
                return;
            }
            state.status = match result {
                Ok(()) => TransitionStatus::Completed,
                Err(TransitionError::Cancelled) => TransitionStatus::Cancelled,
            };
            (
                std::mem::take(&mut state.on_settled),
                std::mem::take(&mut state.wakers),
                state.registration.take(),
            )
        };
        drop(registration);
        for callback in callbacks {
            callback(result);
        }
        for waker in wakers {
            waker.wake();
        }
    }
}

impl fmt::Debug for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("status", &self.status())
            .finish()
    }
}

impl Future for Transition {
    type Output = TransitionResult;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(result) = self.result() {
            return Poll::Ready(result);
        }
        let mut state = self.state.borrow_mut();
        if !state.wakers.iter().any(|waker| waker.will_wake(cx.waker())) {
            state.wakers.push(cx.waker().clone());
        }
        Poll::Pending
    }
}

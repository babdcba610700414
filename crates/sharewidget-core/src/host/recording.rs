//! In-memory host that records every effect.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use super::{BoxFuture, Host, TimerId};
use crate::error::{HostError, HostResult};
use crate::popup::PopupState;
use crate::share::{ShareRequest, WindowFeatures};

/// A window opened through [`Host::open_window`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenedWindow {
    pub url: String,
    pub features: WindowFeatures,
}

struct ScheduledTimer {
    id: TimerId,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

struct Inner {
    popup: PopupState,
    popup_renders: usize,
    toast_text: Option<String>,
    toast_visible: bool,
    title_pulsing: bool,
    haptics: bool,
    vibrations: Vec<Duration>,
    /// `None` when native share is unavailable, otherwise the outcome.
    native_share: Option<HostResult<()>>,
    share_requests: Vec<ShareRequest>,
    windows: Vec<OpenedWindow>,
    now: Duration,
    next_timer: i32,
    timers: Vec<ScheduledTimer>,
    tasks: Vec<BoxFuture<'static, ()>>,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            popup: PopupState::Closed,
            popup_renders: 0,
            toast_text: None,
            toast_visible: false,
            title_pulsing: false,
            haptics: false,
            vibrations: Vec::new(),
            native_share: None,
            share_requests: Vec::new(),
            windows: Vec::new(),
            now: Duration::ZERO,
            next_timer: 1,
            timers: Vec::new(),
            tasks: Vec::new(),
        }
    }
}

/// Host for tests and headless use.
///
/// Timers run on a simulated clock advanced with [`advance`](Self::advance);
/// spawned futures wait until [`run_tasks`](Self::run_tasks).
#[derive(Clone, Default)]
pub struct RecordingHost {
    inner: Rc<RefCell<Inner>>,
}

impl RecordingHost {
    /// Create a host with no optional capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable haptic feedback.
    pub fn with_haptics(self) -> Self {
        self.inner.borrow_mut().haptics = true;
        self
    }

    /// Enable native share; every request resolves with `outcome`.
    pub fn with_native_share(self, outcome: HostResult<()>) -> Self {
        self.inner.borrow_mut().native_share = Some(outcome);
        self
    }

    pub fn popup(&self) -> PopupState {
        self.inner.borrow().popup
    }

    /// Current `aria-expanded` value of the trigger.
    pub fn aria_expanded(&self) -> &'static str {
        self.popup().aria_expanded()
    }

    pub fn popup_renders(&self) -> usize {
        self.inner.borrow().popup_renders
    }

    pub fn toast_text(&self) -> Option<String> {
        self.inner.borrow().toast_text.clone()
    }

    pub fn toast_visible(&self) -> bool {
        self.inner.borrow().toast_visible
    }

    pub fn title_pulsing(&self) -> bool {
        self.inner.borrow().title_pulsing
    }

    pub fn vibrations(&self) -> Vec<Duration> {
        self.inner.borrow().vibrations.clone()
    }

    pub fn share_requests(&self) -> Vec<ShareRequest> {
        self.inner.borrow().share_requests.clone()
    }

    pub fn windows(&self) -> Vec<OpenedWindow> {
        self.inner.borrow().windows.clone()
    }

    /// Simulated time since creation.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn pending_tasks(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Move the clock forward, firing due timers in deadline order.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                due.map(|i| {
                    let timer = inner.timers.remove(i);
                    inner.now = timer.due;
                    timer.task
                })
            };
            match next {
                // Borrow released: the task may call back into the host.
                Some(task) => task(),
                None => break,
            }
        }
        self.inner.borrow_mut().now = target;
    }

    /// Poll spawned futures, including any they spawn, until no more
    /// progress is made. Futures still pending stay queued for a later call.
    pub fn run_tasks(&self) {
        loop {
            let tasks = std::mem::take(&mut self.inner.borrow_mut().tasks);
            if tasks.is_empty() {
                break;
            }

            let mut completed = 0;
            let mut pending = Vec::new();
            for mut task in tasks {
                // Borrow released: the task may call back into the host.
                if poll_once(&mut task) {
                    completed += 1;
                } else {
                    pending.push(task);
                }
            }

            let mut inner = self.inner.borrow_mut();
            let spawned = !inner.tasks.is_empty();
            pending.append(&mut inner.tasks);
            inner.tasks = pending;
            if completed == 0 && !spawned {
                break;
            }
        }
    }
}

impl Host for RecordingHost {
    fn render_popup(&self, state: PopupState) {
        let mut inner = self.inner.borrow_mut();
        inner.popup = state;
        inner.popup_renders += 1;
    }

    fn set_toast_text(&self, message: &str) {
        self.inner.borrow_mut().toast_text = Some(message.to_string());
    }

    fn set_toast_visible(&self, visible: bool) {
        self.inner.borrow_mut().toast_visible = visible;
    }

    fn set_title_pulse(&self, active: bool) {
        self.inner.borrow_mut().title_pulsing = active;
    }

    fn vibrate(&self, duration: Duration) -> HostResult<()> {
        let mut inner = self.inner.borrow_mut();
        if !inner.haptics {
            return Err(HostError::Unsupported("vibrate"));
        }
        inner.vibrations.push(duration);
        Ok(())
    }

    fn supports_native_share(&self) -> bool {
        self.inner.borrow().native_share.is_some()
    }

    fn share_natively(&self, request: ShareRequest) -> BoxFuture<'static, HostResult<()>> {
        let mut inner = self.inner.borrow_mut();
        let outcome = inner
            .native_share
            .clone()
            .unwrap_or(Err(HostError::Unsupported("share")));
        inner.share_requests.push(request);
        Box::pin(std::future::ready(outcome))
    }

    fn open_window(&self, url: &str, features: WindowFeatures) -> HostResult<()> {
        self.inner.borrow_mut().windows.push(OpenedWindow {
            url: url.to_string(),
            features,
        });
        Ok(())
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> HostResult<TimerId> {
        let mut inner = self.inner.borrow_mut();
        let id = TimerId(inner.next_timer);
        inner.next_timer += 1;
        let due = inner.now + delay;
        inner.timers.push(ScheduledTimer { id, due, task });
        Ok(id)
    }

    fn cancel(&self, id: TimerId) {
        self.inner.borrow_mut().timers.retain(|t| t.id != id);
    }

    fn spawn(&self, task: BoxFuture<'static, ()>) {
        self.inner.borrow_mut().tasks.push(task);
    }
}

/// Poll a task once with a no-op waker. Returns whether it finished.
fn poll_once(task: &mut BoxFuture<'static, ()>) -> bool {
    use std::task::{Context, Waker};

    let mut cx = Context::from_waker(Waker::noop());
    task.as_mut().poll(&mut cx).is_ready()
}

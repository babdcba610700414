//! Abstraction over the page the widget drives.

mod recording;

pub use recording::{OpenedWindow, RecordingHost};

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::error::HostResult;
use crate::popup::PopupState;
use crate::share::{ShareRequest, WindowFeatures};

/// Boxed future for async host operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub i32);

/// The page surface the widget acts on.
///
/// Implementations are cheap handles: clones refer to the same page.
/// Everything runs on one thread, so there are no `Send`/`Sync` bounds.
pub trait Host: Clone + 'static {
    /// Mirror popup visibility onto the trigger and popup elements.
    fn render_popup(&self, state: PopupState);

    /// Replace the toast text.
    fn set_toast_text(&self, message: &str);

    /// Show or hide the toast.
    fn set_toast_visible(&self, visible: bool);

    /// Start or stop the title's pulse animation.
    fn set_title_pulse(&self, active: bool);

    /// Trigger haptic feedback. Fails with `Unsupported` when the device
    /// has no vibration capability.
    fn vibrate(&self, duration: Duration) -> HostResult<()>;

    /// Whether a native share dialog is available.
    fn supports_native_share(&self) -> bool;

    /// Open the native share dialog.
    ///
    /// The dialog must be requested before this returns: browsers only
    /// allow it during the user gesture that triggered the share.
    fn share_natively(&self, request: ShareRequest) -> BoxFuture<'static, HostResult<()>>;

    /// Open `url` in a new window of the given size.
    fn open_window(&self, url: &str, features: WindowFeatures) -> HostResult<()>;

    /// Run `task` once after `delay`.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> HostResult<TimerId>;

    /// Cancel a scheduled timer. Unknown or already fired timers are ignored.
    fn cancel(&self, id: TimerId);

    /// Drive a future to completion on the host's event loop.
    fn spawn(&self, task: BoxFuture<'static, ()>);
}

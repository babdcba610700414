//! Toast notifications.

use std::time::Duration;

use crate::host::{Host, TimerId};

/// How long a toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// The single toast slot.
///
/// Showing a new toast replaces the text and cancels the previous hide
/// timer, so the latest message always stays up for [`TOAST_DURATION`].
#[derive(Debug, Default)]
pub struct Toast {
    message: Option<String>,
    pending_hide: Option<TimerId>,
}

impl Toast {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently shown message.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Show `message` and schedule it to hide.
    pub fn show<H: Host>(&mut self, host: &H, message: impl Into<String>) {
        let message = message.into();

        if let Some(id) = self.pending_hide.take() {
            host.cancel(id);
        }

        host.set_toast_text(&message);
        host.set_toast_visible(true);

        let hide = host.clone();
        match host.schedule(TOAST_DURATION, Box::new(move || hide.set_toast_visible(false))) {
            Ok(id) => self.pending_hide = Some(id),
            Err(err) => log::warn!("Toast will not auto-hide: {}", err),
        }

        log::debug!("Toast: {}", message);
        self.message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    #[test]
    fn test_show_is_immediate() {
        let host = RecordingHost::new();
        let mut toast = Toast::new();

        toast.show(&host, "X");
        assert_eq!(host.toast_text().as_deref(), Some("X"));
        assert!(host.toast_visible());
        assert_eq!(toast.message(), Some("X"));
    }

    #[test]
    fn test_hides_exactly_after_duration() {
        let host = RecordingHost::new();
        let mut toast = Toast::new();

        toast.show(&host, "X");
        host.advance(TOAST_DURATION - Duration::from_millis(1));
        assert!(host.toast_visible());

        host.advance(Duration::from_millis(1));
        assert!(!host.toast_visible());
        assert_eq!(host.now(), Duration::from_millis(3000));
    }

    #[test]
    fn test_new_toast_supersedes_pending_hide() {
        let host = RecordingHost::new();
        let mut toast = Toast::new();

        toast.show(&host, "first");
        host.advance(Duration::from_millis(2000));
        toast.show(&host, "second");
        assert_eq!(host.pending_timers(), 1);

        // The first toast's deadline passes without hiding the second.
        host.advance(Duration::from_millis(1500));
        assert!(host.toast_visible());
        assert_eq!(host.toast_text().as_deref(), Some("second"));

        host.advance(Duration::from_millis(1500));
        assert!(!host.toast_visible());
    }
}

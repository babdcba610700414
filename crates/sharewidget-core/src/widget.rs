//! The share widget controller.
//!
//! `ShareWidget` owns the popup state, the toast slot and the article
//! metadata, and turns page events into effects on its [`Host`]. It does
//! not know about the DOM: the host renders state and the caller reports
//! which element an event hit.

use std::time::Duration;

use crate::article::ArticleMetadata;
use crate::config::WidgetConfig;
use crate::host::{Host, TimerId};
use crate::keys::{KeyAction, KeyBindings, is_activation_key};
use crate::popup::PopupState;
use crate::share::{SHARE_WINDOW, ShareRequest, ShareTarget};
use crate::toast::Toast;

/// Length of the haptic pulse when the share trigger is pressed.
pub const HAPTIC_PULSE: Duration = Duration::from_millis(50);

/// Length of the title pulse animation.
pub const TITLE_PULSE: Duration = Duration::from_millis(300);

/// Control over the event being handled.
pub trait EventControl {
    /// Keep the event from reaching document-level handlers.
    fn stop_propagation(&self);
    /// Suppress the browser's default action for the event.
    fn prevent_default(&self);
}

/// Where a document click landed, relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Inside the share trigger.
    Trigger,
    /// Inside the share popup.
    Popup,
    /// Anywhere else on the page.
    Outside,
}

/// An element that responds to pointer and keyboard activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interactive {
    ShareTrigger,
    ArticleTitle,
    AuthorAvatar,
    AuthorName,
    /// A social icon with its `data-platform` identifier.
    SocialIcon(String),
}

impl Interactive {
    /// Where a click on this element lands. Social icons live in the popup.
    pub fn click_target(&self) -> ClickTarget {
        match self {
            Self::ShareTrigger => ClickTarget::Trigger,
            Self::SocialIcon(_) => ClickTarget::Popup,
            Self::ArticleTitle | Self::AuthorAvatar | Self::AuthorName => ClickTarget::Outside,
        }
    }
}

/// Share popup, keyboard navigation and toasts for an article page.
pub struct ShareWidget<H: Host> {
    host: H,
    article: ArticleMetadata,
    page_url: String,
    popup: PopupState,
    toast: Toast,
    title_pulse: Option<TimerId>,
}

impl<H: Host> ShareWidget<H> {
    /// Create a widget and render the initial (closed) popup state.
    pub fn new(host: H, article: ArticleMetadata, page_url: impl Into<String>) -> Self {
        let widget = Self {
            host,
            article,
            page_url: page_url.into(),
            popup: PopupState::Closed,
            toast: Toast::new(),
            title_pulse: None,
        };
        widget.host.render_popup(widget.popup);
        widget
    }

    pub fn from_config(host: H, config: &WidgetConfig, page_url: impl Into<String>) -> Self {
        Self::new(host, config.article.clone(), page_url)
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn article(&self) -> &ArticleMetadata {
        &self.article
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    pub fn popup_state(&self) -> PopupState {
        self.popup
    }

    pub fn toast(&self) -> &Toast {
        &self.toast
    }

    // --- Popup ---

    /// Open the popup if closed, close it if open.
    pub fn toggle_popup(&mut self, event: &dyn EventControl) {
        event.stop_propagation();
        self.set_popup(self.popup.toggled());

        if let Err(err) = self.host.vibrate(HAPTIC_PULSE) {
            log::debug!("Haptic feedback skipped: {}", err);
        }
    }

    /// Force the popup closed. Safe to call in any state.
    pub fn close_popup(&mut self) {
        self.set_popup(PopupState::Closed);
    }

    /// Close the popup when a document click lands outside the widget.
    pub fn handle_outside_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Outside {
            self.close_popup();
        }
    }

    /// Close the popup on Escape.
    pub fn handle_escape_key(&mut self, key: &str) {
        if KeyBindings::action_for(key) == Some(KeyAction::ClosePopup) {
            self.close_popup();
        }
    }

    fn set_popup(&mut self, state: PopupState) {
        if self.popup != state {
            log::debug!("Share popup {:?} -> {:?}", self.popup, state);
        }
        self.popup = state;
        self.host.render_popup(state);
    }

    // --- Sharing ---

    /// Share the article to `platform`.
    ///
    /// Unknown platforms are ignored and leave everything untouched.
    /// Returns the target that was shared to.
    pub fn share_to(&mut self, platform: &str) -> Option<ShareTarget> {
        let Some(target) = ShareTarget::from_platform(platform) else {
            log::debug!("Ignoring unknown share platform {:?}", platform);
            return None;
        };

        let url = target.article_url(&self.page_url, &self.article);

        if target.prefers_native_share() && self.host.supports_native_share() {
            log::info!("Sharing on {} via native share", target);
            let request = ShareRequest::for_article(&self.article, &self.page_url);
            let share = self.host.share_natively(request);
            let host = self.host.clone();
            self.host.spawn(Box::pin(async move {
                if let Err(err) = share.await {
                    log::warn!("Native share failed ({}), opening share window", err);
                    open_share_window(&host, &url);
                }
            }));
        } else {
            log::info!("Sharing on {} via share window", target);
            open_share_window(&self.host, &url);
        }

        self.show_toast(format!("Sharing on {}...", target.display_name()));
        self.close_popup();
        Some(target)
    }

    // --- Article and author ---

    pub fn on_article_title_activate(&mut self) {
        self.show_toast("Article clicked! This would navigate to the full article.");

        if let Some(id) = self.title_pulse.take() {
            self.host.cancel(id);
        }
        self.host.set_title_pulse(true);

        let host = self.host.clone();
        match self
            .host
            .schedule(TITLE_PULSE, Box::new(move || host.set_title_pulse(false)))
        {
            Ok(id) => self.title_pulse = Some(id),
            Err(err) => {
                log::warn!("Could not schedule end of title pulse: {}", err);
                self.host.set_title_pulse(false);
            }
        }
    }

    pub fn on_author_activate(&mut self) {
        let message = format!("Viewing {}'s profile...", self.article.author);
        self.show_toast(message);
    }

    /// Show a toast for [`TOAST_DURATION`](crate::toast::TOAST_DURATION).
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast.show(&self.host, message);
    }

    // --- Activation ---

    /// Pointer activation of an element.
    pub fn activate(&mut self, element: &Interactive, event: &dyn EventControl) {
        match element {
            Interactive::ShareTrigger => self.toggle_popup(event),
            Interactive::ArticleTitle => self.on_article_title_activate(),
            Interactive::AuthorAvatar | Interactive::AuthorName => self.on_author_activate(),
            Interactive::SocialIcon(platform) => {
                self.share_to(platform);
            }
        }
    }

    /// Keyboard activation: Enter and Space act like a click.
    ///
    /// A click also reaches the document-level outside-click check after
    /// the element's own handler, so the same check runs here.
    /// Returns whether the key was handled.
    pub fn handle_key(&mut self, element: &Interactive, key: &str, event: &dyn EventControl) -> bool {
        if !is_activation_key(key) {
            return false;
        }
        event.prevent_default();
        self.activate(element, event);
        self.handle_outside_click(element.click_target());
        true
    }
}

fn open_share_window<H: Host>(host: &H, url: &str) {
    if let Err(err) = host.open_window(url, SHARE_WINDOW) {
        log::warn!("Could not open share window: {}", err);
    }
}

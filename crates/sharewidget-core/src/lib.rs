//! Share Widget Core Library
//!
//! Platform-agnostic behavior for an article page's share popup, keyboard
//! navigation and toast notifications. The page itself is reached through
//! the [`Host`] trait so the same logic runs in the browser and in tests.

pub mod article;
pub mod config;
pub mod error;
pub mod host;
pub mod keys;
pub mod popup;
pub mod share;
pub mod toast;
pub mod widget;

pub use article::ArticleMetadata;
pub use config::{Selectors, WidgetConfig};
pub use error::{HostError, HostResult, WidgetError, WidgetResult};
pub use host::{BoxFuture, Host, RecordingHost, TimerId};
pub use keys::{KeyAction, KeyBinding, KeyBindings, is_activation_key};
pub use popup::PopupState;
pub use share::{ShareRequest, ShareTarget, WindowFeatures, SHARE_WINDOW};
pub use toast::{Toast, TOAST_DURATION};
pub use widget::{ClickTarget, EventControl, Interactive, ShareWidget, HAPTIC_PULSE, TITLE_PULSE};

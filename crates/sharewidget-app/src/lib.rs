//! Share Widget Application
//!
//! Mounts the share widget on an article page (WASM) and renders a text
//! preview of the share links (native).

mod preview;

pub use preview::render_preview;

#[cfg(any(target_arch = "wasm32", test))]
mod timers;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use dom::{DomHost, MountedWidget, PageElements, mount};
#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;

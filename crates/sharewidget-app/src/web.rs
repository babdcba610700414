//! WebAssembly entry point.

use sharewidget_core::{WidgetConfig, WidgetError, WidgetResult};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Id of the optional `<script type="application/json">` element holding
/// the widget configuration.
pub const CONFIG_ELEMENT_ID: &str = "share-widget-config";

/// Read the embedded configuration, falling back to defaults when the page
/// does not provide one.
fn read_config(document: &Document) -> WidgetResult<WidgetConfig> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => {
            let json = element.text_content().unwrap_or_default();
            WidgetConfig::from_json(&json)
        }
        None => Ok(WidgetConfig::default()),
    }
}

fn start(window: &Window) -> WidgetResult<()> {
    let document = window
        .document()
        .ok_or(WidgetError::MissingGlobal("document"))?;
    let config = read_config(&document)?;
    crate::dom::mount(window, &config)?;
    Ok(())
}

fn start_or_log(window: &Window) {
    if let Err(err) = start(window) {
        log::error!("Share widget not mounted: {}", err);
    }
}

/// Initialize logging and mount the widget once the page structure is parsed.
#[wasm_bindgen(start)]
pub fn run_wasm() {
    // Set up panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(log::Level::Info).expect("Failed to initialize logger");

    log::info!("Starting share widget (WASM)");

    let Some(window) = web_sys::window() else {
        log::error!("Share widget not mounted: {}", WidgetError::MissingGlobal("window"));
        return;
    };
    let Some(document) = window.document() else {
        log::error!("Share widget not mounted: {}", WidgetError::MissingGlobal("document"));
        return;
    };

    if document.ready_state() != "loading" {
        start_or_log(&window);
        return;
    }

    let on_ready = Closure::once(Box::new(move |_event: web_sys::Event| {
        start_or_log(&window);
    }) as Box<dyn FnOnce(_)>);
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
    {
        log::error!("Could not wait for DOMContentLoaded: {:?}", e);
        return;
    }
    on_ready.forget();
}

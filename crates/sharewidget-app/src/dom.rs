//! DOM bindings: element lookup, the web-sys host and event wiring.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use sharewidget_core::{
    BoxFuture, ClickTarget, EventControl, Host, HostError, HostResult, Interactive, PopupState,
    Selectors, ShareRequest, ShareWidget, TimerId, WidgetConfig, WidgetError, WidgetResult,
    WindowFeatures,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, KeyboardEvent, Node, Window};

use crate::timers::TimerSlots;

const ACTIVE_CLASS: &str = "active";
const TOAST_VISIBLE_CLASS: &str = "show";
const PULSE_ANIMATION: &str = "pulse 0.3s ease";
const PLATFORM_ATTR: &str = "data-platform";

/// The widget as mounted on the page, shared by its event listeners.
pub type MountedWidget = Rc<RefCell<ShareWidget<DomHost>>>;

type TimerCallback = Closure<dyn FnMut()>;

/// Elements the widget binds to, resolved once at mount time.
pub struct PageElements {
    pub share_button: Element,
    pub share_popup: Element,
    pub toast: Element,
    /// May be empty; each icon carries a `data-platform` attribute.
    pub social_icons: Vec<Element>,
    pub article_title: HtmlElement,
    pub author_avatar: Element,
    pub author_name: Element,
}

impl PageElements {
    /// Find every element named by `selectors`.
    ///
    /// Fails with `MissingElement` naming the first selector that matches nothing.
    pub fn resolve(document: &Document, selectors: &Selectors) -> WidgetResult<Self> {
        let article_title = query(document, &selectors.article_title)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| {
                WidgetError::MissingElement(format!(
                    "{} (not an HTML element)",
                    selectors.article_title
                ))
            })?;

        let list = document
            .query_selector_all(&selectors.social_icons)
            .map_err(js_error)?;
        let mut social_icons = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(icon) = list.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                social_icons.push(icon);
            }
        }
        if social_icons.is_empty() {
            log::warn!("No social icons match {:?}", selectors.social_icons);
        }

        Ok(Self {
            share_button: query(document, &selectors.share_button)?,
            share_popup: query(document, &selectors.share_popup)?,
            toast: query(document, &selectors.toast)?,
            social_icons,
            article_title,
            author_avatar: query(document, &selectors.author_avatar)?,
            author_name: query(document, &selectors.author_name)?,
        })
    }
}

fn query(document: &Document, selector: &str) -> WidgetResult<Element> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| WidgetError::MissingElement(selector.to_string()))
}

fn js_error(err: JsValue) -> WidgetError {
    WidgetError::Js(format!("{:?}", err))
}

/// [`Host`] backed by the browser.
#[derive(Clone)]
pub struct DomHost {
    window: Window,
    share_button: Element,
    share_popup: Element,
    toast: Element,
    article_title: HtmlElement,
    timers: Rc<RefCell<TimerSlots<TimerCallback>>>,
}

impl DomHost {
    pub fn new(window: Window, elements: &PageElements) -> Self {
        Self {
            window,
            share_button: elements.share_button.clone(),
            share_popup: elements.share_popup.clone(),
            toast: elements.toast.clone(),
            article_title: elements.article_title.clone(),
            timers: Rc::new(RefCell::new(TimerSlots::new())),
        }
    }

    /// Whether `navigator[name]` is a callable function.
    fn navigator_has(&self, name: &str) -> bool {
        js_sys::Reflect::get(&self.window.navigator(), &JsValue::from_str(name))
            .map(|value| value.is_function())
            .unwrap_or(false)
    }

    /// Call `navigator.share(data)` and return its promise.
    fn start_native_share(&self, request: &ShareRequest) -> HostResult<js_sys::Promise> {
        let navigator = self.window.navigator();
        let share = js_sys::Reflect::get(&navigator, &JsValue::from_str("share"))
            .map_err(host_js_error)?
            .dyn_into::<js_sys::Function>()
            .map_err(|_| HostError::Unsupported("share"))?;

        let data = js_sys::Object::new();
        for (key, value) in [
            ("title", &request.title),
            ("text", &request.text),
            ("url", &request.url),
        ] {
            js_sys::Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                .map_err(host_js_error)?;
        }

        share
            .call1(&navigator, &data)
            .map_err(|e| HostError::Rejected(format!("{:?}", e)))?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| HostError::Js("navigator.share did not return a promise".to_string()))
    }
}

fn host_js_error(err: JsValue) -> HostError {
    HostError::Js(format!("{:?}", err))
}

fn set_class(element: &Element, class: &str, present: bool) {
    if let Err(e) = element.class_list().toggle_with_force(class, present) {
        log::warn!("Failed to update class {:?}: {:?}", class, e);
    }
}

impl Host for DomHost {
    fn render_popup(&self, state: PopupState) {
        set_class(&self.share_button, ACTIVE_CLASS, state.is_open());
        set_class(&self.share_popup, ACTIVE_CLASS, state.is_open());
        if let Err(e) = self
            .share_button
            .set_attribute("aria-expanded", state.aria_expanded())
        {
            log::warn!("Failed to update aria-expanded: {:?}", e);
        }
    }

    fn set_toast_text(&self, message: &str) {
        self.toast.set_text_content(Some(message));
    }

    fn set_toast_visible(&self, visible: bool) {
        set_class(&self.toast, TOAST_VISIBLE_CLASS, visible);
    }

    fn set_title_pulse(&self, active: bool) {
        let animation = if active { PULSE_ANIMATION } else { "" };
        if let Err(e) = self.article_title.style().set_property("animation", animation) {
            log::warn!("Failed to set title animation: {:?}", e);
        }
    }

    fn vibrate(&self, duration: Duration) -> HostResult<()> {
        if !self.navigator_has("vibrate") {
            return Err(HostError::Unsupported("vibrate"));
        }
        let ms = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        if self.window.navigator().vibrate_with_duration(ms) {
            Ok(())
        } else {
            Err(HostError::Rejected("vibration refused".to_string()))
        }
    }

    fn supports_native_share(&self) -> bool {
        self.navigator_has("share")
    }

    fn share_natively(&self, request: ShareRequest) -> BoxFuture<'static, HostResult<()>> {
        match self.start_native_share(&request) {
            Ok(promise) => Box::pin(async move {
                JsFuture::from(promise)
                    .await
                    .map(|_| ())
                    .map_err(|e| HostError::Rejected(format!("{:?}", e)))
            }),
            Err(err) => Box::pin(std::future::ready(Err(err))),
        }
    }

    fn open_window(&self, url: &str, features: WindowFeatures) -> HostResult<()> {
        match self
            .window
            .open_with_url_and_target_and_features(url, "_blank", &features.to_string())
        {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err(HostError::Rejected("popup blocked".to_string())),
            Err(e) => Err(host_js_error(e)),
        }
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> HostResult<TimerId> {
        // Filled in once setTimeout hands back the handle.
        let handle = Rc::new(Cell::new(0));
        let callback = {
            let timers = self.timers.clone();
            let handle = handle.clone();
            let mut task = Some(task);
            Closure::wrap(Box::new(move || {
                if let Some(task) = task.take() {
                    task();
                }
                timers.borrow_mut().mark_fired(handle.get());
            }) as Box<dyn FnMut()>)
        };

        let ms = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                ms,
            )
            .map_err(host_js_error)?;
        handle.set(id);
        let mut timers = self.timers.borrow_mut();
        timers.insert(id, callback);
        log::debug!("Timer {} scheduled in {} ms ({} held)", id, ms, timers.len());
        Ok(TimerId(id))
    }

    fn cancel(&self, id: TimerId) {
        self.window.clear_timeout_with_handle(id.0);
        self.timers.borrow_mut().cancel(id.0);
    }

    fn spawn(&self, task: BoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}

/// A DOM event as seen by the widget.
struct DomEvent<'a>(&'a Event);

impl EventControl for DomEvent<'_> {
    fn stop_propagation(&self) {
        self.0.stop_propagation();
    }

    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// Add a listener that lives as long as the page.
fn listen<F>(target: &EventTarget, kind: &str, handler: F) -> WidgetResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// Bind click (pointer) and Enter/Space (keyboard) activation for one element.
///
/// `resolve` names the element at event time.
fn bind_activation<R>(widget: &MountedWidget, element: &Element, resolve: R) -> WidgetResult<()>
where
    R: Fn() -> Interactive + Clone + 'static,
{
    let on_click = {
        let widget = widget.clone();
        let resolve = resolve.clone();
        move |event: Event| {
            widget.borrow_mut().activate(&resolve(), &DomEvent(&event));
        }
    };
    listen(element, "click", on_click)?;

    let on_key = {
        let widget = widget.clone();
        move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
                return;
            };
            widget
                .borrow_mut()
                .handle_key(&resolve(), &key, &DomEvent(&event));
        }
    };
    listen(element, "keydown", on_key)
}

fn classify_click(trigger: &Element, popup: &Element, target: Option<&Node>) -> ClickTarget {
    if trigger.contains(target) {
        ClickTarget::Trigger
    } else if popup.contains(target) {
        ClickTarget::Popup
    } else {
        ClickTarget::Outside
    }
}

/// Resolve the page elements and attach the widget to them.
pub fn mount(window: &Window, config: &WidgetConfig) -> WidgetResult<MountedWidget> {
    config.selectors.validate()?;

    let document = window
        .document()
        .ok_or(WidgetError::MissingGlobal("document"))?;
    let elements = PageElements::resolve(&document, &config.selectors)?;
    let page_url = window.location().href().map_err(js_error)?;

    let host = DomHost::new(window.clone(), &elements);
    let widget: MountedWidget = Rc::new(RefCell::new(ShareWidget::from_config(
        host, config, page_url,
    )));

    let fixed: [(&Element, Interactive); 4] = [
        (&elements.share_button, Interactive::ShareTrigger),
        (elements.article_title.as_ref(), Interactive::ArticleTitle),
        (&elements.author_avatar, Interactive::AuthorAvatar),
        (&elements.author_name, Interactive::AuthorName),
    ];
    for (element, which) in fixed {
        bind_activation(&widget, element, move || which.clone())?;
    }

    for icon in &elements.social_icons {
        let source = icon.clone();
        bind_activation(&widget, icon, move || {
            Interactive::SocialIcon(source.get_attribute(PLATFORM_ATTR).unwrap_or_default())
        })?;
    }

    let on_document_click = {
        let widget = widget.clone();
        let trigger = elements.share_button.clone();
        let popup = elements.share_popup.clone();
        move |event: Event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            let hit = classify_click(&trigger, &popup, target.as_ref());
            widget.borrow_mut().handle_outside_click(hit);
        }
    };
    listen(&document, "click", on_document_click)?;

    let on_document_key = {
        let widget = widget.clone();
        move |event: Event| {
            if let Some(event) = event.dyn_ref::<KeyboardEvent>() {
                widget.borrow_mut().handle_escape_key(&event.key());
            }
        }
    };
    listen(&document, "keydown", on_document_key)?;

    log::info!(
        "Share widget mounted ({} social icons)",
        elements.social_icons.len()
    );
    Ok(widget)
}

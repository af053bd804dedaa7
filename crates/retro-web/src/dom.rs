//! DOM helpers shared by the site modules

use retro_desktop::clock::Timestamp;
use retro_desktop::DesktopError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, NodeList};

use crate::console::warn;

pub(crate) fn document() -> Result<Document, DesktopError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| DesktopError::missing("window", "document"))
}

/// Element by id, if present and an `HtmlElement`
pub(crate) fn by_id(id: &str) -> Option<HtmlElement> {
    document()
        .ok()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Every `HtmlElement` in the document matching `selector`
pub(crate) fn query_all(selector: &str) -> Vec<HtmlElement> {
    match document().and_then(|d| {
        d.query_selector_all(selector)
            .map_err(|_| DesktopError::missing("document", selector))
    }) {
        Ok(list) => elements(&list),
        Err(e) => {
            warn(&format!("[desktop] {}", e));
            Vec::new()
        }
    }
}

/// First descendant of `root` matching `selector`
pub(crate) fn query_in(root: &Element, selector: &str) -> Option<HtmlElement> {
    root.query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Every descendant of `root` matching `selector`
pub(crate) fn query_all_in(root: &Element, selector: &str) -> Vec<HtmlElement> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .unwrap_or_default()
}

fn elements(list: &NodeList) -> Vec<HtmlElement> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Show or hide through inline `display`
pub(crate) fn set_visible(el: &HtmlElement, visible: bool) {
    let style = el.style();
    let _ = if visible {
        style.remove_property("display").map(|_| ())
    } else {
        style.set_property("display", "none")
    };
}

/// Add or remove one class
pub(crate) fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let _ = if on { list.add_1(class) } else { list.remove_1(class) };
}

/// Local wall-clock time
pub(crate) fn local_timestamp() -> Timestamp {
    let now = js_sys::Date::new_0();
    Timestamp {
        year: now.get_full_year(),
        month: now.get_month() + 1,
        day: now.get_date(),
        hour: now.get_hours(),
        minute: now.get_minutes(),
    }
}

/// An event listener removed from its target when dropped
pub(crate) struct Listener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Listener with the browser's default options
    pub(crate) fn new(target: &EventTarget, event_type: &'static str, f: impl FnMut(Event) + 'static) -> Self {
        Self::install(target, event_type, None, f)
    }

    /// Listener that may call `preventDefault` on scroll-affecting events
    pub(crate) fn active(target: &EventTarget, event_type: &'static str, f: impl FnMut(Event) + 'static) -> Self {
        Self::install(target, event_type, Some(false), f)
    }

    fn install(
        target: &EventTarget,
        event_type: &'static str,
        passive: Option<bool>,
        f: impl FnMut(Event) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        let result = match passive {
            Some(passive) => {
                let options = AddEventListenerOptions::new();
                options.set_passive(passive);
                target.add_event_listener_with_callback_and_add_event_listener_options(
                    event_type,
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
            }
            None => target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref()),
        };
        if let Err(e) = result {
            warn(&format!("[desktop] Failed to listen for {}: {:?}", event_type, e));
        }
        Self {
            target: target.clone(),
            event_type,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}

/// A repeating timer cleared when dropped
pub(crate) struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub(crate) fn new(period_ms: i32, f: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

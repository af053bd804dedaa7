//! About / blog / editor windows

use std::rc::Rc;

use retro_desktop::content::About;
use retro_desktop::window::VisibilityChange;
use retro_desktop::{TargetKey, TargetKind, WindowKind};
use web_sys::HtmlElement;

use crate::console::{log, warn};
use crate::dom::{query_all, query_in, set_visible, Listener};
use super::Site;

/// Selector for one window element
pub(crate) fn window_selector(kind: WindowKind, data_id: &str) -> String {
    format!("#{}[data-id=\"{}\"]", kind.dom_id(), data_id)
}

/// Drag key of a window: the element is identified by kind and data-id
pub(crate) fn window_key(kind: WindowKind, data_id: &str) -> TargetKey {
    TargetKey::new(format!("{}:{}", kind.dom_id(), data_id), "header")
}

impl Site {
    /// Register every about, blog and editor window on the page, then hide
    /// them all
    pub(crate) fn scan_windows(&self) {
        let mut windows = self.windows.borrow_mut();
        for kind in [WindowKind::About, WindowKind::Blog, WindowKind::BlogPost] {
            for el in query_all(&format!("#{}[data-id]", kind.dom_id())) {
                if let Some(data_id) = el.get_attribute("data-id") {
                    windows.register(kind, data_id);
                }
            }
        }
        let changes = windows.initialize();
        drop(windows);
        apply(&changes);
    }

    /// Show every window of `kind`, attach drag controllers and raise them
    pub(crate) fn open(&self, kind: WindowKind) {
        let changes = self.windows.borrow_mut().open(kind);
        apply(&changes);
        for change in &changes {
            self.attach_window(kind, &change.data_id);
        }
        log(&format!("[desktop] Opened {} {:?} window(s)", changes.len(), kind));
    }

    /// Hide one window by data-id
    pub(crate) fn close(&self, data_id: &str) {
        let result = self.windows.borrow_mut().close(data_id);
        match result {
            Ok(change) => apply(std::slice::from_ref(&change)),
            Err(e) => warn(&format!("[desktop] {}", e)),
        }
    }

    fn attach_window(&self, kind: WindowKind, data_id: &str) {
        let element = window_element(kind, data_id);
        let handle = element.as_ref().and_then(|el| query_in(el, "#header"));
        let key = window_key(kind, data_id);
        match self.drag.attach(key, TargetKind::Window, element, handle) {
            Ok(attachment) => {
                if !attachment.is_new() {
                    self.drag.raise(attachment.id());
                }
            }
            Err(e) => warn(&format!("[desktop] {}", e)),
        }
    }

    /// Open / close buttons for the static windows
    pub(crate) fn window_listeners(self: &Rc<Self>) -> Vec<Listener> {
        let mut listeners = Vec::new();

        let openers = [("about-box", WindowKind::About), ("blog-box", WindowKind::Blog)];
        for (id, kind) in openers {
            let Some(button) = crate::dom::by_id(id) else {
                warn(&format!("[desktop] No #{} on the page", id));
                continue;
            };
            let site = Rc::downgrade(self);
            listeners.push(Listener::new(&button, "click", move |_| {
                if let Some(site) = site.upgrade() {
                    site.open(kind);
                    if kind == WindowKind::Blog {
                        site.show_blog_index();
                    }
                }
            }));
        }

        let closers = query_all("[id=\"close-button\"][data-id], #close-button-about, #about-OK");
        for button in closers {
            let Some(data_id) = button.get_attribute("data-id") else {
                continue;
            };
            let site = Rc::downgrade(self);
            listeners.push(Listener::new(&button, "click", move |_| {
                if let Some(site) = site.upgrade() {
                    site.close(&data_id);
                }
            }));
        }
        listeners
    }

    /// Fill the about windows from content
    pub(crate) fn render_about(&self, about: &About) {
        if let Some(win) = window_element(WindowKind::About, "about1") {
            set_text(&win, ".window-title", &about.window1.title);
            set_text(&win, ".about-message", &about.window1.message);
            set_text(&win, ".about-welcome", &about.window1.welcome_text);
        }
        if let Some(win) = window_element(WindowKind::About, "about2") {
            set_text(&win, ".window-title", &about.window2.title);
            set_text(&win, ".about-email", &about.window2.email);
            set_text(&win, ".about-contact", &about.window2.contact);
            if let (Some(links), Ok(doc)) = (query_in(&win, ".about-links"), crate::dom::document()) {
                links.set_inner_html("");
                for button in &about.window2.buttons {
                    if let Ok(a) = doc.create_element("a") {
                        let _ = a.set_attribute("href", &button.url);
                        let _ = a.set_attribute("target", "_blank");
                        let _ = a.set_attribute("class", "window-box link-button");
                        a.set_text_content(Some(&button.text));
                        let _ = links.append_child(&a);
                    }
                }
            }
        }
    }
}

fn window_element(kind: WindowKind, data_id: &str) -> Option<HtmlElement> {
    query_all(&window_selector(kind, data_id)).into_iter().next()
}

fn set_text(root: &HtmlElement, selector: &str, text: &str) {
    if let Some(el) = query_in(root, selector) {
        el.set_text_content(Some(text));
    }
}

/// Apply visibility changes to the page
pub(crate) fn apply(changes: &[VisibilityChange]) {
    for change in changes {
        match window_element(change.kind, &change.data_id) {
            Some(el) => set_visible(&el, change.visible),
            None => warn(&format!(
                "[desktop] No {} found",
                window_selector(change.kind, &change.data_id)
            )),
        }
    }
}

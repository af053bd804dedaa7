//! Blog reader and post editor

use std::rc::Rc;

use retro_desktop::content::{
    BlogPost, NewPost, POSTING_DISABLED, SUBMITTED, SUBMITTING, SUBMIT_FAILED,
};
use retro_desktop::WindowKind;
use wasm_bindgen::JsCast;
use web_sys::{Event, FormData, HtmlFormElement, KeyboardEvent};

use crate::console::{log, warn};
use crate::content::submit_post;
use crate::dom::{by_id, document, local_timestamp, query_all, Listener};
use super::Site;

impl Site {
    /// List post titles in the blog index
    pub(crate) fn show_blog_index(self: &Rc<Self>) {
        let Some(list) = by_id("blog-item-container") else {
            return;
        };
        if let Some(loading) = by_id("loading-animation") {
            loading.remove();
        }
        let Ok(doc) = document() else {
            return;
        };

        let posts = self.posts.borrow().clone();
        list.set_inner_html("");
        let mut listeners = Vec::new();
        for post in posts {
            let Ok(item) = doc.create_element("div") else {
                continue;
            };
            item.set_class_name("blog-item");
            if let Ok(icon) = doc.create_element("img") {
                let _ = icon.set_attribute("src", "icons/notepad.png");
                let _ = icon.set_attribute("alt", "");
                let _ = item.append_child(&icon);
            }
            if let Ok(text) = doc.create_element("div") {
                text.set_class_name("blog-item-text");
                text.set_text_content(Some(&post.title));
                let _ = item.append_child(&text);
            }
            listeners.push(Listener::new(&item, "click", move |_| show_post(&post)));
            let _ = list.append_child(&item);
        }
        *self.blog_listeners.borrow_mut() = listeners;
    }

    /// `Ctrl+E` / `Cmd+E` opens the post editor
    pub(crate) fn editor_shortcut(self: &Rc<Self>) -> Option<Listener> {
        let doc = document().ok()?;
        let site = Rc::downgrade(self);
        Some(Listener::active(&doc, "keydown", move |event: Event| {
            let Some(key) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if (key.meta_key() || key.ctrl_key()) && key.key().eq_ignore_ascii_case("e") {
                event.prevent_default();
                if let Some(site) = site.upgrade() {
                    site.open_editor();
                }
            }
        }))
    }

    fn open_editor(self: &Rc<Self>) {
        self.open(WindowKind::BlogPost);
        if let Some(date) = by_id("time-data") {
            date.set_text_content(Some(&local_timestamp().date_label()));
        }
        if self.editor_listener.borrow().is_some() {
            return;
        }
        let Some(form) = by_id("form-content") else {
            warn("[blog] No #form-content on the page");
            return;
        };
        let site = Rc::downgrade(self);
        let listener = Listener::active(&form, "submit", move |event: Event| {
            event.prevent_default();
            if let Some(site) = site.upgrade() {
                site.submit(&event);
            }
        });
        *self.editor_listener.borrow_mut() = Some(listener);
    }

    fn submit(&self, event: &Event) {
        let Some(form) = event
            .current_target()
            .and_then(|t| t.dyn_into::<HtmlFormElement>().ok())
        else {
            return;
        };
        let Ok(data) = FormData::new_with_form(&form) else {
            warn("[blog] Could not read the editor form");
            return;
        };
        let field = |name: &str| data.get(name).as_string().unwrap_or_default();
        let post = NewPost::new(field("title"), field("message"), &local_timestamp());

        let status = by_id("submit-animation");
        let show = |text: &str| {
            if let Some(status) = &status {
                let _ = status.style().set_property("display", "block");
                status.set_text_content(Some(text));
            }
        };
        let Some(url) = self.loader.config().post_url.clone() else {
            warn("[blog] Posting is disabled: no content.postUrl configured");
            show(POSTING_DISABLED);
            return;
        };
        show(&format!("{}...", SUBMITTING));
        log(&format!("[blog] Submitting \"{}\"", post.title));

        wasm_bindgen_futures::spawn_local(async move {
            match submit_post(&url, &post).await {
                Ok(response) => {
                    if let Some(status) = &status {
                        status.set_text_content(Some(SUBMITTED));
                    }
                    log(&format!("[blog] Response from server: {}", response));
                }
                Err(e) => {
                    if let Some(status) = &status {
                        status.set_text_content(Some(SUBMIT_FAILED));
                    }
                    warn(&format!("[blog] Error submitting form: {}", e));
                }
            }
        });
    }
}

/// Show one post in the reader
fn show_post(post: &BlogPost) {
    for text in query_all("[data-id=\"blogcontent\"]") {
        text.set_inner_text(post.body_or_placeholder());
    }
    for title in query_all("#blog #header .window-title") {
        title.set_text_content(Some(&post.heading()));
    }
}

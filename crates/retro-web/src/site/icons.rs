//! Desktop icons: static blocks and CD icons generated from content

use std::rc::Rc;

use retro_desktop::content::{cd_icons, MusicPlayer};
use retro_desktop::{TargetKey, TargetKind};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::console::{log, warn};
use crate::dom::{by_id, document, query_all, Listener};
use super::Site;

const CD_CONTAINER_ID: &str = "dynamic-cds-container";

impl Site {
    /// Make every static `.block` icon draggable behind the windows
    pub(crate) fn attach_static_icons(&self) {
        for block in query_all(".block") {
            if block.id().is_empty() {
                continue;
            }
            let key = TargetKey::whole(format!("block:{}", block.id()));
            if let Err(e) = self.drag.attach(key, TargetKind::Background, Some(block.clone()), Some(block)) {
                warn(&format!("[desktop] {}", e));
            }
        }
    }

    /// Rebuild the CD icons for the catalog
    pub(crate) fn render_cds(self: &Rc<Self>, catalog: &[MusicPlayer]) {
        let Some(container) = cd_container() else {
            warn("[desktop] Cannot create CD icon container");
            return;
        };

        // Old icons go away together with their controllers and listeners
        let previous: Vec<TargetKey> = self.cd_keys.borrow_mut().drain(..).collect();
        for key in &previous {
            self.drag.detach(key);
        }
        self.cd_listeners.borrow_mut().clear();
        container.set_inner_html("");

        let Ok(doc) = document() else {
            return;
        };
        let icons = cd_icons(catalog);
        for icon in &icons {
            let Some(block) = doc
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            block.set_class_name("block audio");
            let _ = block.set_attribute("data-title", &icon.title);
            let _ = block.set_attribute("data-artist", &icon.artist);
            let style = block.style();
            let _ = style.set_property("pointer-events", "auto");
            let _ = style.set_property("top", &icon.top);
            let _ = style.set_property("right", &icon.right);
            let _ = style.set_property("--mask-url", &format!("url({})", icon.src));

            if let Ok(img) = doc.create_element("img") {
                let _ = img.set_attribute("src", &icon.src);
                let _ = img.set_attribute("alt", &icon.display_name);
                let _ = block.append_child(&img);
            }
            if let Ok(label) = doc.create_element("div") {
                label.set_class_name("text-icon");
                label.set_text_content(Some(&icon.display_name));
                let _ = block.append_child(&label);
            }
            let _ = container.append_child(&block);

            let mut listeners = self.cd_listeners.borrow_mut();
            for event_type in ["click", "touchend"] {
                let site = Rc::downgrade(self);
                let title = icon.title.clone();
                let listener = Listener::active(&block, event_type, move |event| {
                    if event.type_() == "touchend" {
                        event.prevent_default();
                    }
                    if let Some(site) = site.upgrade() {
                        site.spawn_player(&title);
                    }
                });
                listeners.push(listener);
            }
            drop(listeners);

            let key = TargetKey::whole(icon.drag_key());
            match self.drag.attach(key.clone(), TargetKind::Background, Some(block.clone()), Some(block)) {
                Ok(attachment) if attachment.is_new() => self.cd_keys.borrow_mut().push(key),
                Ok(_) => {}
                Err(e) => warn(&format!("[desktop] {}", e)),
            }
        }
        log(&format!("[desktop] Generated {} CD icons from data", icons.len()));
    }
}

fn cd_container() -> Option<HtmlElement> {
    if let Some(existing) = by_id(CD_CONTAINER_ID) {
        return Some(existing);
    }
    let doc = document().ok()?;
    let container = doc.create_element("div").ok()?.dyn_into::<HtmlElement>().ok()?;
    container.set_id(CD_CONTAINER_ID);
    let style = container.style();
    for (prop, value) in [
        ("position", "absolute"),
        ("top", "0"),
        ("left", "0"),
        ("width", "100%"),
        ("height", "100%"),
        ("pointer-events", "none"),
        ("background-color", "transparent"),
    ] {
        let _ = style.set_property(prop, value);
    }
    doc.body()?.append_child(&container).ok()?;
    Some(container)
}

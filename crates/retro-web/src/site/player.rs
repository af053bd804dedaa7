//! CD player window

use std::rc::Rc;

use retro_desktop::player::{MediaButton, MenuKind};
use retro_desktop::window::PLAYER_DATA_ID;
use retro_desktop::{DesktopError, PlayerSpawn, TargetKey, TargetKind, WindowKind};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::console::{log, warn};
use crate::dom::{by_id, document, query_all_in, query_in, set_class, set_visible, Listener};
use super::Site;

const MENU_ID: &str = "menu-container";

const PLAYER_TEMPLATE: &str = r#"
<div id="window-section" class="window-box" style="width: 500px; height: 220px; position: absolute; left: 0px; top: 0px;">
    <div class="header-container">
        <div id="header">
            <div class="window-title"><img src="icons/cd.png" alt="" class="title-icon"> &nbsp;Audio Production</div>
            <div class="window-box" id="close-button">X</div>
        </div>
    </div>
    <div class="body-container">
        <div id="media-player">
            <div class="player-row">
                <span class="player-label">Artist:</span>
                <div class="window-box player-display" id="artistName"></div>
                <div class="window-box" id="dropdown-button" data-id="3">&#9660;</div>
            </div>
            <div class="player-row">
                <span class="player-label">Title:</span>
                <div class="window-box player-display" id="albumTitle"></div>
                <div class="window-box" id="dropdown-button" data-id="1">&#9660;</div>
            </div>
        </div>
        <div id="media-control-container">
            <div class="window-box" id="media-control-button" data-id="1"><span class="media-svg">&#9198;</span></div>
            <div class="window-box" id="media-control-button" data-id="2"><span class="media-svg">&#9197;</span></div>
            <div class="window-box" id="media-control-button" data-id="3"><span class="media-svg">&#9199;</span></div>
            <div class="window-box" id="media-control-button" data-id="4"><span class="media-svg clicked">&#9209;</span></div>
        </div>
    </div>
</div>
"#;

impl Site {
    /// Show the player with `album` selected, creating it on first use
    pub(crate) fn spawn_player(self: &Rc<Self>, album: &str) {
        let spawn = self.windows.borrow_mut().spawn_player();
        if !self.player.borrow_mut().select_album(album) {
            warn(&format!("[player] Unknown album: {}", album));
        }

        match spawn {
            PlayerSpawn::Created => {
                if let Err(e) = self.build_player() {
                    warn(&format!("[player] {}", e));
                    return;
                }
                log("[player] Created CD player");
            }
            PlayerSpawn::Revealed => {
                if let Some(el) = by_id(WindowKind::Player.dom_id()) {
                    set_visible(&el, true);
                }
                if let Some(id) = self.drag.id_of(&player_key()) {
                    self.drag.raise(id);
                }
            }
        }
        self.render_player();
    }

    fn build_player(self: &Rc<Self>) -> Result<(), DesktopError> {
        let doc = document()?;
        let missing = || DesktopError::missing(WindowKind::Player.dom_id(), "header");
        let container = doc
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(missing)?;
        container.set_id(WindowKind::Player.dom_id());
        let _ = container.set_attribute("data-id", PLAYER_DATA_ID);
        let style = container.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("top", "200px");
        let _ = style.set_property("left", "200px");
        container.set_inner_html(PLAYER_TEMPLATE);
        doc.body().ok_or_else(missing)?.append_child(&container).ok().ok_or_else(missing)?;

        let handle = query_in(&container, "#header");
        self.drag.attach(player_key(), TargetKind::Window, Some(container.clone()), handle)?;

        let mut listeners = Vec::new();
        if let Some(close) = query_in(&container, "#close-button") {
            let site = Rc::downgrade(self);
            listeners.push(Listener::new(&close, "click", move |_| {
                if let Some(site) = site.upgrade() {
                    site.close(PLAYER_DATA_ID);
                    site.close_menu();
                }
            }));
        }
        for button in query_all_in(&container, "[id=\"media-control-button\"]") {
            let Some(media) = button.get_attribute("data-id").and_then(|id| MediaButton::from_data_id(&id)) else {
                continue;
            };
            let site = Rc::downgrade(self);
            listeners.push(Listener::new(&button, "click", move |_| {
                if let Some(site) = site.upgrade() {
                    site.player.borrow_mut().press(media);
                    site.render_player();
                }
            }));
        }
        for button in query_all_in(&container, "[id=\"dropdown-button\"]") {
            let kind = match button.get_attribute("data-id").as_deref() {
                Some("1") => MenuKind::Album,
                Some("3") => MenuKind::Artist,
                _ => continue,
            };
            let site = Rc::downgrade(self);
            let anchor = button.clone();
            listeners.push(Listener::new(&button, "click", move |_| {
                if let Some(site) = site.upgrade() {
                    site.toggle_menu(kind, &anchor);
                }
            }));
        }
        *self.player_listeners.borrow_mut() = listeners;
        Ok(())
    }

    /// Push selector state into the player window
    pub(crate) fn render_player(&self) {
        let Some(container) = by_id(WindowKind::Player.dom_id()) else {
            return;
        };
        let player = self.player.borrow();
        if let Some(el) = query_in(&container, "#artistName") {
            el.set_text_content(player.artist());
        }
        if let Some(el) = query_in(&container, "#albumTitle") {
            el.set_text_content(player.album());
        }
        let playing = player.is_playing();
        for (data_id, on) in [("3", playing), ("4", !playing)] {
            let selector = format!("[id=\"media-control-button\"][data-id=\"{}\"] .media-svg", data_id);
            if let Some(svg) = query_in(&container, &selector) {
                set_class(&svg, "clicked", on);
            }
        }
    }

    fn toggle_menu(self: &Rc<Self>, kind: MenuKind, anchor: &HtmlElement) {
        let entries = self.player.borrow_mut().toggle_menu(kind);
        self.remove_menu();
        let Some(entries) = entries else {
            return;
        };
        if let Err(e) = self.show_menu(kind, anchor, entries) {
            warn(&format!("[player] {}", e));
        }
    }

    fn show_menu(
        self: &Rc<Self>,
        kind: MenuKind,
        anchor: &HtmlElement,
        entries: Vec<String>,
    ) -> Result<(), DesktopError> {
        let doc = document()?;
        let missing = || DesktopError::missing(MENU_ID, "body");
        let menu = doc
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(missing)?;
        menu.set_id(MENU_ID);
        let rect = anchor.get_bounding_client_rect();
        let scroll_y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        let style = menu.style();
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("z-index", &self.drag.overlay_z().to_string());
        let _ = style.set_property("top", &format!("{}px", scroll_y + rect.bottom()));
        let _ = style.set_property("left", &format!("{}px", rect.right() - 260.0 + 1.0));

        let mut listeners = Vec::new();
        for item in entries {
            let Ok(row) = doc.create_element("div") else {
                continue;
            };
            row.set_class_name("menu-item");
            row.set_text_content(Some(&item));
            let site = Rc::downgrade(self);
            listeners.push(Listener::new(&row, "click", move |_| {
                if let Some(site) = site.upgrade() {
                    site.remove_menu();
                    if site.player.borrow_mut().choose(kind, &item) {
                        log(&format!("[player] {} selected for {:?}", item, kind));
                    }
                    site.render_player();
                }
            }));
            let _ = menu.append_child(&row);
        }
        doc.body().ok_or_else(missing)?.append_child(&menu).ok().ok_or_else(missing)?;
        *self.menu.borrow_mut() = Some(menu);
        // Replaced here rather than in remove_menu: a menu item's own click
        // handler removes the menu while it is still running
        *self.menu_listeners.borrow_mut() = listeners;
        Ok(())
    }

    fn remove_menu(&self) {
        if let Some(menu) = self.menu.borrow_mut().take() {
            menu.remove();
        }
    }

    fn close_menu(&self) {
        self.player.borrow_mut().close_menu();
        self.remove_menu();
    }
}

fn player_key() -> TargetKey {
    TargetKey::new(WindowKind::Player.dom_id(), "header")
}

//! Page wiring
//!
//! [`Site`] owns the drag host, the window and player models and every
//! listener it installs. Dropping it detaches the page.

mod blog;
mod clock;
mod icons;
mod player;
mod windows;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use retro_desktop::content::{BlogPost, Content};
use retro_desktop::player::PlayerSelector;
use retro_desktop::{DesktopConfig, TargetKey, WindowKind, WindowManager, ZOrder};
use web_sys::HtmlElement;

use crate::console::log;
use crate::content::ContentLoader;
use crate::dom::{Interval, Listener};
use crate::drag::DragHost;

pub struct Site {
    drag: Rc<DragHost>,
    loader: Rc<ContentLoader>,
    windows: RefCell<WindowManager>,
    player: RefCell<PlayerSelector>,
    posts: RefCell<Vec<BlogPost>>,
    menu: RefCell<Option<HtmlElement>>,
    menu_listeners: RefCell<Vec<Listener>>,
    cd_keys: RefCell<Vec<TargetKey>>,
    cd_listeners: RefCell<Vec<Listener>>,
    blog_listeners: RefCell<Vec<Listener>>,
    player_listeners: RefCell<Vec<Listener>>,
    editor_listener: RefCell<Option<Listener>>,
    page_listeners: RefCell<Vec<Listener>>,
    clock: RefCell<Option<Interval>>,
    welcomed: Cell<bool>,
}

impl Site {
    pub fn new(config: DesktopConfig) -> Rc<Self> {
        let zorder = ZOrder::new(config.stacking);
        Rc::new(Self {
            drag: DragHost::new(config.drag, zorder),
            loader: Rc::new(ContentLoader::new(config.content)),
            windows: RefCell::new(WindowManager::new()),
            player: RefCell::new(PlayerSelector::default()),
            posts: RefCell::new(Vec::new()),
            menu: RefCell::new(None),
            menu_listeners: RefCell::new(Vec::new()),
            cd_keys: RefCell::new(Vec::new()),
            cd_listeners: RefCell::new(Vec::new()),
            blog_listeners: RefCell::new(Vec::new()),
            player_listeners: RefCell::new(Vec::new()),
            editor_listener: RefCell::new(None),
            page_listeners: RefCell::new(Vec::new()),
            clock: RefCell::new(None),
            welcomed: Cell::new(false),
        })
    }

    /// Wire the page and start loading content
    pub fn mount(self: &Rc<Self>) {
        if let Err(e) = self.drag.install() {
            crate::console::warn(&format!("[desktop] {}", e));
            return;
        }
        self.scan_windows();
        self.attach_static_icons();

        let mut listeners = self.window_listeners();
        listeners.extend(self.editor_shortcut());
        *self.page_listeners.borrow_mut() = listeners;
        *self.clock.borrow_mut() = clock::start_clock();

        log(&format!("[desktop] Mounted with {} draggable target(s)", self.drag.count()));
        self.load_content();
    }

    /// Fetch content (or take it from cache) and render it
    pub fn load_content(self: &Rc<Self>) {
        let site = Rc::clone(self);
        let loader = Rc::clone(&self.loader);
        wasm_bindgen_futures::spawn_local(async move {
            let content = loader.load().await;
            site.apply_content(content);
        });
    }

    /// Drop cached content and rebuild everything from a fresh fetch
    pub fn refresh_content(self: &Rc<Self>) {
        self.loader.clear();
        self.load_content();
    }

    fn apply_content(self: &Rc<Self>, content: Content) {
        self.player.borrow_mut().set_catalog(content.music_players.clone());
        self.render_cds(&content.music_players);
        *self.posts.borrow_mut() = content.blog;
        self.show_blog_index();
        self.render_about(&content.about);
        self.render_player();
        if content.about.show_welcome_on_load && !self.welcomed.replace(true) {
            self.open(WindowKind::About);
        }
    }
}

//! Browser bindings for the retro desktop
//!
//! Binds the `retro-desktop` core to the page: DOM surfaces for the drag
//! controllers, document-level pointer routing, animation-frame coasting,
//! content fetching, the CD player, the blog and the taskbar clock.
//!
//! ```js
//! import init, { RetroDesktop } from './pkg/retro_web.js';
//! await init();
//! const desktop = new RetroDesktop();
//! desktop.mount();
//! ```

mod console;
mod content;
mod dom;
mod drag;
mod site;
mod surface;

use std::rc::Rc;

use retro_desktop::DesktopConfig;
use wasm_bindgen::prelude::*;

pub use content::{fetch_content, submit_post, ContentLoader};
pub use drag::DragHost;
pub use site::Site;
pub use surface::DomSurface;

use console::{log, warn};

/// Id of the optional JSON configuration block
pub const CONFIG_ELEMENT_ID: &str = "desktop-config";

/// Read `<script id="desktop-config" type="application/json">`, falling back
/// to defaults when it is absent or invalid
pub fn read_config() -> DesktopConfig {
    let Some(text) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        return DesktopConfig::default();
    };
    match DesktopConfig::from_json(&text) {
        Ok(config) => config,
        Err(e) => {
            warn(&format!("[desktop] Ignoring #{}: {}", CONFIG_ELEMENT_ID, e));
            DesktopConfig::default()
        }
    }
}

/// The running desktop, exported to JavaScript
#[wasm_bindgen]
pub struct RetroDesktop {
    site: Rc<Site>,
}

#[wasm_bindgen]
impl RetroDesktop {
    /// Create a desktop from the page's configuration block
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        let config = read_config();
        log(&format!(
            "[desktop] Stacking {:?}, positioning {:?}",
            config.stacking, config.drag.position_policy
        ));
        Self {
            site: Site::new(config),
        }
    }

    /// Wire listeners, hide the windows and load content
    #[wasm_bindgen]
    pub fn mount(&self) {
        self.site.mount();
    }

    /// Clear the content cache and regenerate icons, blog and about text
    #[wasm_bindgen]
    pub fn refresh_content(&self) {
        self.site.refresh_content();
    }
}

impl Default for RetroDesktop {
    fn default() -> Self {
        Self::new()
    }
}

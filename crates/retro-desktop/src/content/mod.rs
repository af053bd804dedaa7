//! Site content: the document model, its fallbacks and caching
//!
//! The browser layer fetches `content.json`; everything here is pure so the
//! fallback and cache rules are testable without a network.

mod model;
mod defaults;
mod cache;
mod icons;
mod post;

pub use model::{
    About, Album, BlogPost, ContactBox, Content, IconPosition, LinkButton, MessageBox, MusicPlayer,
    EMPTY_POST_BODY,
};
pub use cache::{cache_busted_url, ContentCache};
pub use icons::{cd_icons, normalize_offset, CdIcon, ICON_DIR};
pub use post::{NewPost, POSTING_DISABLED, SUBMITTED, SUBMITTING, SUBMIT_FAILED};

//! Window kinds

use serde::{Deserialize, Serialize};

/// Group a page window belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowKind {
    /// About / contact message boxes
    About,
    /// Blog index and reader
    Blog,
    /// Blog post editor
    BlogPost,
    /// CD player
    Player,
}

impl WindowKind {
    /// DOM id shared by every window of this kind
    pub fn dom_id(self) -> &'static str {
        match self {
            WindowKind::About => "about",
            WindowKind::Blog => "blog",
            WindowKind::BlogPost => "blogpost",
            WindowKind::Player => "windowContainer-audio",
        }
    }

    /// Hidden until the user opens it
    #[inline]
    pub fn starts_hidden(self) -> bool {
        !matches!(self, WindowKind::Player)
    }
}

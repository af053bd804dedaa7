//! Site content document

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;
use super::defaults;

/// The whole content document served as `data/content.json`.
///
/// Every section is optional on the wire; a missing one falls back to its
/// built-in default independently of the others.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(default = "defaults::about")]
    pub about: About,
    #[serde(default = "defaults::blog")]
    pub blog: Vec<BlogPost>,
    #[serde(default = "defaults::music_players")]
    pub music_players: Vec<MusicPlayer>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            about: defaults::about(),
            blog: defaults::blog(),
            music_players: defaults::music_players(),
            timestamp: None,
        }
    }
}

impl Content {
    /// Parse a content document
    pub fn from_json(json: &str) -> Result<Self, DesktopError> {
        serde_json::from_str(json).map_err(|e| DesktopError::Content(e.to_string()))
    }

    /// Total albums across all artists
    pub fn album_count(&self) -> usize {
        self.music_players.iter().map(|p| p.albums.len()).sum()
    }
}

/// About section: a message box and a contact box
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct About {
    pub show_welcome_on_load: bool,
    pub window1: MessageBox,
    pub window2: ContactBox,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MessageBox {
    pub title: String,
    pub message: String,
    pub welcome_text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactBox {
    pub title: String,
    pub email: String,
    pub contact: String,
    pub buttons: Vec<LinkButton>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkButton {
    pub text: String,
    pub url: String,
}

/// Placeholder shown for a post without a body
pub const EMPTY_POST_BODY: &str = "No content found.";

/// A published blog post
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlogPost {
    pub title: String,
    pub body: String,
    pub year: String,
    pub month: String,
    pub date: String,
    pub time: String,
}

impl BlogPost {
    /// Reader window title, `year/month/date`
    pub fn heading(&self) -> String {
        format!("{}/{}/{}", self.year, self.month, self.date)
    }

    /// Body text, or a placeholder when empty
    pub fn body_or_placeholder(&self) -> &str {
        if self.body.trim().is_empty() {
            EMPTY_POST_BODY
        } else {
            &self.body
        }
    }
}

/// One artist and their albums
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MusicPlayer {
    pub artist: String,
    pub albums: Vec<Album>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Album {
    pub title: String,
    pub display_name: String,
    pub icon: String,
    pub position: IconPosition,
}

/// Desktop icon offset, as CSS `top` / `right`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconPosition {
    pub top: String,
    pub right: String,
}

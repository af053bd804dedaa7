//! Artist / album selection and transport state

use serde::Serialize;
use crate::content::MusicPlayer;

/// Which dropdown a menu belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuKind {
    Artist,
    Album,
}

/// Media control buttons, numbered by their `data-id`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaButton {
    Previous,
    Next,
    PlayPause,
    Stop,
}

impl MediaButton {
    /// Map a control's `data-id` (`1`..=`4`)
    pub fn from_data_id(id: &str) -> Option<Self> {
        match id {
            "1" => Some(MediaButton::Previous),
            "2" => Some(MediaButton::Next),
            "3" => Some(MediaButton::PlayPause),
            "4" => Some(MediaButton::Stop),
            _ => None,
        }
    }
}

/// CD player state
#[derive(Clone, Debug, Default)]
pub struct PlayerSelector {
    catalog: Vec<MusicPlayer>,
    artist: Option<String>,
    album: Option<String>,
    playing: bool,
    menu: Option<MenuKind>,
}

impl PlayerSelector {
    pub fn new(catalog: Vec<MusicPlayer>) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Replace the catalog, keeping selections that still exist
    pub fn set_catalog(&mut self, catalog: Vec<MusicPlayer>) {
        self.catalog = catalog;
        if let Some(album) = self.album.clone() {
            if self.artist_of(&album).is_none() {
                self.album = None;
            }
        }
        if let Some(artist) = self.artist.clone() {
            if self.find_artist(&artist).is_none() {
                self.artist = None;
            }
        }
    }

    pub fn artist(&self) -> Option<&str> {
        self.artist.as_deref()
    }

    pub fn album(&self) -> Option<&str> {
        self.album.as_deref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn open_menu(&self) -> Option<MenuKind> {
        self.menu
    }

    /// Select an album and the artist that owns it.
    ///
    /// Returns false if no artist in the catalog has that album.
    pub fn select_album(&mut self, title: &str) -> bool {
        match self.artist_of(title) {
            Some(artist) => {
                self.artist = Some(artist.to_string());
                self.album = Some(title.to_string());
                true
            }
            None => false,
        }
    }

    /// Select an artist, dropping an album that belongs to someone else
    pub fn select_artist(&mut self, name: &str) -> bool {
        if self.find_artist(name).is_none() {
            return false;
        }
        if let Some(album) = &self.album {
            if self.artist_of(album) != Some(name) {
                self.album = None;
            }
        }
        self.artist = Some(name.to_string());
        true
    }

    /// Open a dropdown, or close whichever one is open.
    ///
    /// Returns the entries to list, or `None` when the click closed a menu.
    pub fn toggle_menu(&mut self, kind: MenuKind) -> Option<Vec<String>> {
        if self.menu.take().is_some() {
            return None;
        }
        self.menu = Some(kind);
        Some(self.entries(kind))
    }

    /// Pick an entry from the open menu
    pub fn choose(&mut self, kind: MenuKind, item: &str) -> bool {
        self.menu = None;
        match kind {
            MenuKind::Artist => self.select_artist(item),
            MenuKind::Album => self.select_album(item),
        }
    }

    /// Close any open menu
    pub fn close_menu(&mut self) {
        self.menu = None;
    }

    /// Apply a media button press
    pub fn press(&mut self, button: MediaButton) {
        match button {
            MediaButton::Previous => self.step(-1),
            MediaButton::Next => self.step(1),
            MediaButton::PlayPause => self.playing = !self.playing,
            MediaButton::Stop => self.playing = false,
        }
    }

    /// Dropdown entries for a menu
    pub fn entries(&self, kind: MenuKind) -> Vec<String> {
        match kind {
            MenuKind::Artist => self.catalog.iter().map(|p| p.artist.clone()).collect(),
            MenuKind::Album => self
                .artist
                .as_deref()
                .and_then(|a| self.find_artist(a))
                .map(|p| p.albums.iter().map(|a| a.title.clone()).collect())
                .unwrap_or_default(),
        }
    }

    /// Move through the current artist's albums, wrapping at both ends
    fn step(&mut self, by: isize) {
        let albums = self.entries(MenuKind::Album);
        if albums.is_empty() {
            return;
        }
        let len = albums.len() as isize;
        let next = match self.album.as_ref().and_then(|t| albums.iter().position(|a| a == t)) {
            Some(i) => (i as isize + by).rem_euclid(len),
            None if by < 0 => len - 1,
            None => 0,
        };
        self.album = albums.into_iter().nth(next as usize);
    }

    fn find_artist(&self, name: &str) -> Option<&MusicPlayer> {
        self.catalog.iter().find(|p| p.artist == name)
    }

    fn artist_of(&self, title: &str) -> Option<&str> {
        self.catalog
            .iter()
            .find(|p| p.albums.iter().any(|a| a.title == title))
            .map(|p| p.artist.as_str())
    }
}

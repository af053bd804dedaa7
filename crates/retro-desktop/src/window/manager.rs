//! Window visibility bookkeeping

use std::collections::BTreeMap;

use crate::error::DesktopError;
use super::WindowKind;

/// Data-id of the lazily created CD player
pub const PLAYER_DATA_ID: &str = "player";

/// A page window known to the manager
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Window {
    pub kind: WindowKind,
    pub data_id: String,
    pub visible: bool,
}

/// A display change the browser layer must apply
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibilityChange {
    pub kind: WindowKind,
    pub data_id: String,
    pub visible: bool,
}

/// Result of a player request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerSpawn {
    /// First request: build the player element and attach its controller
    Created,
    /// The player exists; show it
    Revealed,
}

/// Tracks which windows are shown.
///
/// Windows are registered by kind and data-id as the page is scanned. The
/// manager only decides visibility; the browser layer applies it.
#[derive(Debug, Default)]
pub struct WindowManager {
    windows: BTreeMap<String, Window>,
    initialized: bool,
}

impl WindowManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a window found on the page. Re-registering a data-id replaces it.
    pub fn register(&mut self, kind: WindowKind, data_id: impl Into<String>) {
        let data_id = data_id.into();
        let visible = !(kind.starts_hidden() && self.initialized);
        self.windows.insert(
            data_id.clone(),
            Window {
                kind,
                data_id,
                visible,
            },
        );
    }

    /// Hide every about, blog and editor window. Runs once; later calls
    /// return no changes.
    pub fn initialize(&mut self) -> Vec<VisibilityChange> {
        if self.initialized {
            return Vec::new();
        }
        self.initialized = true;
        self.set_where(|w| w.kind.starts_hidden(), false)
    }

    /// Show every window of `kind`
    pub fn open(&mut self, kind: WindowKind) -> Vec<VisibilityChange> {
        self.initialize();
        self.set_where(|w| w.kind == kind, true)
    }

    /// Hide the window with `data_id`
    pub fn close(&mut self, data_id: &str) -> Result<VisibilityChange, DesktopError> {
        let window = self
            .windows
            .get_mut(data_id)
            .ok_or_else(|| DesktopError::UnknownWindow(data_id.to_string()))?;
        window.visible = false;
        Ok(VisibilityChange {
            kind: window.kind,
            data_id: window.data_id.clone(),
            visible: false,
        })
    }

    /// Create the player on first request, reveal it afterwards
    pub fn spawn_player(&mut self) -> PlayerSpawn {
        match self.windows.get_mut(PLAYER_DATA_ID) {
            Some(player) => {
                player.visible = true;
                PlayerSpawn::Revealed
            }
            None => {
                self.register(WindowKind::Player, PLAYER_DATA_ID);
                PlayerSpawn::Created
            }
        }
    }

    pub fn get(&self, data_id: &str) -> Option<&Window> {
        self.windows.get(data_id)
    }

    pub fn is_visible(&self, data_id: &str) -> bool {
        self.windows.get(data_id).is_some_and(|w| w.visible)
    }

    /// Windows of one kind, ordered by data-id
    pub fn of_kind(&self, kind: WindowKind) -> impl Iterator<Item = &Window> {
        self.windows.values().filter(move |w| w.kind == kind)
    }

    pub fn count(&self) -> usize {
        self.windows.len()
    }

    fn set_where(&mut self, pred: impl Fn(&Window) -> bool, visible: bool) -> Vec<VisibilityChange> {
        self.windows
            .values_mut()
            .filter(|w| pred(w))
            .map(|w| {
                w.visible = visible;
                VisibilityChange {
                    kind: w.kind,
                    data_id: w.data_id.clone(),
                    visible,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> WindowManager {
        let mut wm = WindowManager::new();
        wm.register(WindowKind::About, "about1");
        wm.register(WindowKind::About, "about2");
        wm.register(WindowKind::Blog, "blog1");
        wm.register(WindowKind::Blog, "blog2");
        wm.register(WindowKind::BlogPost, "blog3");
        wm
    }

    #[test]
    fn test_initialize_hides_once() {
        let mut wm = page();
        let changes = wm.initialize();
        assert_eq!(changes.len(), 5);
        assert!(changes.iter().all(|c| !c.visible));
        assert!(wm.initialize().is_empty());
    }

    #[test]
    fn test_open_shows_only_kind() {
        let mut wm = page();
        wm.initialize();
        let shown = wm.open(WindowKind::About);
        let ids: Vec<&str> = shown.iter().map(|c| c.data_id.as_str()).collect();
        assert_eq!(ids, vec!["about1", "about2"]);
        assert!(wm.is_visible("about1"));
        assert!(!wm.is_visible("blog1"));
    }

    #[test]
    fn test_close_by_data_id() {
        let mut wm = page();
        wm.open(WindowKind::Blog);
        let change = wm.close("blog2").unwrap();
        assert_eq!(change.kind, WindowKind::Blog);
        assert!(!wm.is_visible("blog2"));
        assert!(wm.is_visible("blog1"));
    }

    #[test]
    fn test_close_unknown_window() {
        let mut wm = page();
        let err = wm.close("nope").unwrap_err();
        assert!(matches!(err, DesktopError::UnknownWindow(id) if id == "nope"));
    }

    #[test]
    fn test_player_created_then_revealed() {
        let mut wm = page();
        assert_eq!(wm.spawn_player(), PlayerSpawn::Created);
        assert!(wm.is_visible(PLAYER_DATA_ID));
        wm.close(PLAYER_DATA_ID).unwrap();
        assert_eq!(wm.spawn_player(), PlayerSpawn::Revealed);
        assert!(wm.is_visible(PLAYER_DATA_ID));
        assert_eq!(wm.of_kind(WindowKind::Player).count(), 1);
    }

    #[test]
    fn test_late_registration_respects_initialization() {
        let mut wm = WindowManager::new();
        wm.initialize();
        wm.register(WindowKind::Blog, "blog9");
        assert!(!wm.is_visible("blog9"));
        wm.register(WindowKind::Player, PLAYER_DATA_ID);
        assert!(wm.is_visible(PLAYER_DATA_ID));
    }
}

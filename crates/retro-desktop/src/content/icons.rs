//! Desktop CD icons generated from the catalog

use super::MusicPlayer;

/// Image directory for icon files
pub const ICON_DIR: &str = "icons";

/// One desktop icon per album
#[derive(Clone, Debug, PartialEq)]
pub struct CdIcon {
    pub artist: String,
    pub title: String,
    pub display_name: String,
    /// Image path, `icons/<file>`
    pub src: String,
    /// CSS `top`
    pub top: String,
    /// CSS `right`
    pub right: String,
}

impl CdIcon {
    /// Drag registry key; albums are only unique per artist
    pub fn drag_key(&self) -> String {
        format!("cd:{}/{}", self.artist, self.title)
    }
}

/// Normalize an icon offset to a CSS percentage.
///
/// `"0.5"` becomes `"50%"`; values already containing `%` and values that do
/// not parse as numbers are kept as given.
pub fn normalize_offset(value: &str) -> String {
    if value.contains('%') {
        return value.to_string();
    }
    match value.trim().parse::<f64>() {
        Ok(fraction) => {
            let pct = (fraction * 100.0 * 1e6).round() / 1e6;
            format!("{}%", pct)
        }
        Err(_) => value.to_string(),
    }
}

/// Build every album icon, artist by artist
pub fn cd_icons(catalog: &[MusicPlayer]) -> Vec<CdIcon> {
    catalog
        .iter()
        .flat_map(|player| {
            player.albums.iter().map(move |album| CdIcon {
                artist: player.artist.clone(),
                title: album.title.clone(),
                display_name: album.display_name.clone(),
                src: format!("{}/{}", ICON_DIR, album.icon),
                top: normalize_offset(&album.position.top),
                right: normalize_offset(&album.position.right),
            })
        })
        .collect()
}

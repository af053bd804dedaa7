//! Window visibility model
//!
//! About, blog and editor windows start hidden and are shown per kind. The CD
//! player is created on first request and revealed afterwards.

mod kind;
mod manager;

pub use kind::WindowKind;
pub use manager::{PlayerSpawn, VisibilityChange, Window, WindowManager, PLAYER_DATA_ID};

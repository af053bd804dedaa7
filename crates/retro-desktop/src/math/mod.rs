//! Geometry types shared by the drag subsystem
//!
//! All values are CSS pixels in viewport space (the same space as
//! `clientX`/`clientY` and `getBoundingClientRect`).

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;

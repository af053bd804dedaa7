//! Platform seam for draggable elements
//!
//! The drag controller never touches the DOM directly. It reads geometry and
//! writes inline styles through a [`Surface`], so the whole state machine runs
//! in plain `cargo test` against [`crate::testing::MemorySurface`].

use crate::math::{Rect, Size, Vec2};

/// A positioned element the drag controller can read and move
pub trait Surface {
    /// Current bounding rect in viewport coordinates
    fn bounds(&self) -> Rect;

    /// Current viewport size
    fn viewport(&self) -> Size;

    /// Move the element so its top-left corner is at `origin`.
    ///
    /// Implementations make `left`/`top` the only positioning authority:
    /// `right`, `bottom` and `transform` are cleared.
    fn place(&mut self, origin: Vec2);

    /// Write the inline z-index
    fn set_z_index(&mut self, z: i32);
}

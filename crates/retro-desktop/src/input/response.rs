//! Drag controller results

use serde::Serialize;
use crate::math::Vec2;

/// Result of handling one pointer event
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DragResponse {
    /// Event did not affect this controller
    Ignored,
    /// A session started
    Started {
        /// z-index written to the element
        z_index: i32,
        /// An in-flight coast was cancelled by this start
        cancelled_momentum: bool,
    },
    /// The element moved
    Moved {
        /// New element origin
        position: Vec2,
        /// The browser layer must `preventDefault` to stop page scrolling
        prevent_scroll: bool,
    },
    /// The session closed
    Released {
        /// Coasting started; the caller should schedule animation frames
        coasting: bool,
    },
}

impl DragResponse {
    /// Check if the caller should start an animation-frame loop
    #[inline]
    pub fn needs_frames(&self) -> bool {
        matches!(self, DragResponse::Released { coasting: true })
    }

    /// Check if the browser default action must be suppressed
    #[inline]
    pub fn prevent_scroll(&self) -> bool {
        matches!(self, DragResponse::Moved { prevent_scroll: true, .. })
    }
}

/// Outcome of one coasting frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CoastFrame {
    /// The element advanced to this origin; request another frame
    Moved(Vec2),
    /// Coasting is over (or was never running)
    Stopped,
}

impl CoastFrame {
    #[inline]
    pub fn is_moving(&self) -> bool {
        matches!(self, CoastFrame::Moved(_))
    }
}

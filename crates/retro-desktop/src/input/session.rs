//! Per-interaction drag session

use crate::math::Vec2;
use super::PointerSource;

/// State of one active pointer interaction.
///
/// Created on pointer-down over a handle and dropped on release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Pointer position at press
    pub pointer_origin: Vec2,
    /// Offset from the element origin to the pointer at press
    pub grab_offset: Vec2,
    /// Pointer position at the previous event
    pub last_pointer: Vec2,
    /// Pointer delta between the last two events (px/event)
    pub velocity: Vec2,
    /// Timestamp of the previous event (ms)
    pub last_time_ms: f64,
    /// Element origin after the last placement
    pub origin: Vec2,
    /// Device driving this session
    pub source: PointerSource,
    /// Touch travel exceeded the slop; page scrolling is suppressed
    pub scroll_locked: bool,
}

impl DragSession {
    /// Start a session with zero velocity
    pub fn new(pointer: Vec2, element_origin: Vec2, source: PointerSource, time_ms: f64) -> Self {
        Self {
            pointer_origin: pointer,
            grab_offset: pointer - element_origin,
            last_pointer: pointer,
            velocity: Vec2::ZERO,
            last_time_ms: time_ms,
            origin: element_origin,
            source,
            scroll_locked: false,
        }
    }

    /// Element origin that keeps the grab point under `pointer`
    #[inline]
    pub fn target_origin(&self, pointer: Vec2) -> Vec2 {
        pointer - self.grab_offset
    }

    /// Record a pointer sample and update velocity.
    ///
    /// Returns whether page scrolling should be suppressed for this event.
    pub fn track(&mut self, pointer: Vec2, time_ms: f64, touch_slop: f32) -> bool {
        self.velocity = pointer - self.last_pointer;
        self.last_pointer = pointer;
        self.last_time_ms = time_ms;

        if self.source == PointerSource::Touch
            && !self.scroll_locked
            && pointer.distance(self.pointer_origin) > touch_slop
        {
            self.scroll_locked = true;
        }
        self.scroll_locked
    }

    /// Velocity to fling with on a release at `time_ms`.
    ///
    /// A pointer held still for longer than `window_ms` before release has no
    /// velocity left.
    pub fn release_velocity(&self, time_ms: f64, window_ms: f64) -> Vec2 {
        if time_ms - self.last_time_ms > window_ms {
            Vec2::ZERO
        } else {
            self.velocity
        }
    }
}

//! Shared z-index counter
//!
//! One [`ZOrder`] is created per running desktop and a clone is handed to
//! every drag controller. Clones share the same counter, so promoting any
//! window moves it above every other window.

use std::cell::Cell;
use std::rc::Rc;
use crate::config::StackingPolicy;

/// Z-index pinned on background (icon) targets.
///
/// The counter never yields a value at or below this.
pub const BACKGROUND_Z: i32 = 0;

/// Stacking layer of a draggable target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// Foreground window, promoted on every activation
    Window,
    /// Decorative desktop icon, always behind windows
    Background,
}

impl TargetKind {
    #[inline]
    pub fn is_background(self) -> bool {
        matches!(self, TargetKind::Background)
    }
}

#[derive(Clone, Copy, Debug)]
struct Counter {
    policy: StackingPolicy,
    next: i32,
}

impl Counter {
    fn new(policy: StackingPolicy) -> Self {
        let next = match policy {
            StackingPolicy::Unbounded { start } => start.max(BACKGROUND_Z + 1),
            StackingPolicy::Cyclic { min, .. } => min.max(BACKGROUND_Z + 1),
        };
        Self { policy, next }
    }

    /// Post-increment: hand out `next`, then advance it
    fn take(&mut self) -> i32 {
        let value = self.next;
        self.next = match self.policy {
            StackingPolicy::Unbounded { .. } => value.saturating_add(1),
            StackingPolicy::Cyclic { min, max } => {
                if value >= max {
                    min
                } else {
                    value + 1
                }
            }
        };
        value
    }
}

/// Injected z-order service
///
/// Cheap to clone; all clones share one counter. Not `Send`: the desktop runs
/// on the browser main thread only.
#[derive(Clone, Debug)]
pub struct ZOrder {
    counter: Rc<Cell<Counter>>,
}

impl Default for ZOrder {
    fn default() -> Self {
        Self::new(StackingPolicy::default())
    }
}

impl ZOrder {
    /// Create a counter with the given discipline
    pub fn new(policy: StackingPolicy) -> Self {
        Self {
            counter: Rc::new(Cell::new(Counter::new(policy))),
        }
    }

    /// Assign a z-index to a target being activated.
    ///
    /// Windows receive a fresh top value; background targets always get
    /// [`BACKGROUND_Z`] and leave the counter untouched.
    pub fn promote(&self, kind: TargetKind) -> i32 {
        if kind.is_background() {
            return BACKGROUND_Z;
        }
        let mut counter = self.counter.get();
        let z = counter.take();
        self.counter.set(counter);
        z
    }

    /// The value the next promotion will hand out
    pub fn peek(&self) -> i32 {
        self.counter.get().next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbounded_is_monotonic() {
        let z = ZOrder::default();
        let a = z.promote(TargetKind::Window);
        let b = z.promote(TargetKind::Window);
        let c = z.promote(TargetKind::Window);
        assert_eq!((a, b, c), (1, 2, 3));
        assert_eq!(z.peek(), 4);
    }

    #[test]
    fn test_background_never_touches_counter() {
        let z = ZOrder::default();
        for _ in 0..10 {
            assert_eq!(z.promote(TargetKind::Background), BACKGROUND_Z);
        }
        assert_eq!(z.promote(TargetKind::Window), 1);
    }

    #[test]
    fn test_clones_share_counter() {
        let z = ZOrder::default();
        let other = z.clone();
        assert_eq!(z.promote(TargetKind::Window), 1);
        assert_eq!(other.promote(TargetKind::Window), 2);
        assert_eq!(z.peek(), 3);
    }

    #[test]
    fn test_cyclic_wraps_to_min() {
        let z = ZOrder::new(StackingPolicy::Cyclic { min: 1000, max: 1002 });
        let values: Vec<i32> = (0..5).map(|_| z.promote(TargetKind::Window)).collect();
        assert_eq!(values, vec![1000, 1001, 1002, 1000, 1001]);
    }

    #[test]
    fn test_start_below_one_is_lifted_above_background() {
        let z = ZOrder::new(StackingPolicy::Unbounded { start: -5 });
        assert!(z.promote(TargetKind::Window) > BACKGROUND_Z);
    }

    #[test]
    fn test_independent_instances_are_isolated() {
        let a = ZOrder::default();
        let b = ZOrder::default();
        a.promote(TargetKind::Window);
        a.promote(TargetKind::Window);
        assert_eq!(b.promote(TargetKind::Window), 1);
    }
}

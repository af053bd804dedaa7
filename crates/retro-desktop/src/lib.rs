//! Retro Desktop core
//!
//! Platform-independent state for a desktop-themed website: draggable
//! windows and icons with momentum, shared z-order stacking, viewport
//! clamping, window visibility, the CD player selector and the site content
//! model.
//!
//! Nothing here touches the DOM. Elements are reached through the
//! [`Surface`] trait, so the drag state machine is tested with
//! [`testing::MemorySurface`] under plain `cargo test`.
//!
//! # Example
//!
//! ```
//! use retro_desktop::testing::MemorySurface;
//! use retro_desktop::{DragConfig, DragRegistry, PointerEvent, Rect, Size, TargetKey, TargetKind, ZOrder};
//!
//! let mut registry = DragRegistry::new(DragConfig::default(), ZOrder::default());
//! let surface = MemorySurface::new(Rect::new(100.0, 100.0, 50.0, 50.0), Size::new(800.0, 600.0));
//! let id = registry
//!     .attach(TargetKey::new("about", "header"), TargetKind::Window, Some(surface.clone()))
//!     .unwrap()
//!     .id();
//!
//! registry.dispatch(id, PointerEvent::mouse_down(125.0, 125.0));
//! registry.dispatch(id, PointerEvent::mouse_move(900.0, 125.0));
//! assert_eq!(surface.position().x, 750.0);
//! ```

pub mod clock;
pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod math;
pub mod player;
pub mod registry;
pub mod surface;
pub mod testing;
pub mod window;
pub mod zorder;

pub use config::{ContentConfig, DesktopConfig, DragConfig, MomentumConfig, PositionPolicy, StackingPolicy};
pub use error::DesktopError;
pub use input::{CoastFrame, DragController, DragResponse, PointerEvent, PointerPhase, PointerSource};
pub use math::{Rect, Size, Vec2};
pub use registry::{Attachment, DragRegistry, TargetId, TargetKey};
pub use surface::Surface;
pub use window::{PlayerSpawn, WindowKind, WindowManager};
pub use zorder::{TargetKind, ZOrder, BACKGROUND_Z};

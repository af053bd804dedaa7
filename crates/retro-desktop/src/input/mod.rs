//! Pointer input and drag handling
//!
//! Mouse and touch events are unified into [`PointerEvent`] and fed to a
//! per-element [`DragController`], which moves its surface, promotes it in the
//! shared z-order and hands back a [`DragResponse`] for the browser layer.

mod pointer;
mod session;
mod momentum;
mod response;
mod controller;

pub use pointer::{PointerEvent, PointerPhase, PointerSource};
pub use session::DragSession;
pub use momentum::Momentum;
pub use response::{CoastFrame, DragResponse};
pub use controller::DragController;

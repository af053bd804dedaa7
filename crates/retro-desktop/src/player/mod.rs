//! CD player selector

mod selector;

pub use selector::{MediaButton, MenuKind, PlayerSelector};

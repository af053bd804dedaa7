//! Test doubles for the platform seam

mod memory_surface;

pub use memory_surface::MemorySurface;

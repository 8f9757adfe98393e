//! Watermark placement and compositing.
//!
//! The two core pieces live here:
//!
//! - **Position resolver**: given target and watermark dimensions, an anchor
//!   and per-side padding, compute the top-left offset for the stamp
//! - **Compositor**: blend the watermark over a fresh copy of the target
//!   using source-over alpha compositing, clipped to the target's bounds
//!
//! Both are pure functions over decoded pixel data; every failure mode of the
//! pipeline lives at the decode/encode boundary in [`crate::codec`].

pub mod compositor;
pub mod position;
pub mod spec;

// Re-export main types for convenience
pub use compositor::composite;
pub use position::{resolve, Anchor, Dimensions, Offset, Padding};
pub use spec::WatermarkSpec;

//! Position calculation for watermark placement.
//!
//! This module provides the pure offset computation that decides where a
//! watermark lands on a target image for each of the five anchor positions.
//!
//! # Anchors
//!
//! - **Corners**: TopLeft, TopRight, BottomLeft, BottomRight, offset from the
//!   respective edges by the per-side padding
//! - **Center**: centered in both axes, padding ignored
//!
//! # Example
//!
//! ```
//! use imprint::watermark::{resolve, Anchor, Dimensions, Padding};
//!
//! let target = Dimensions { width: 800, height: 600 };
//! let logo = Dimensions { width: 100, height: 50 };
//! let padding = Padding { right: 10, bottom: 10, ..Padding::default() };
//!
//! let offset = resolve(Anchor::BottomRight, target, logo, &padding);
//! assert_eq!((offset.x, offset.y), (690, 540)); // 800 - 100 - 10, 600 - 50 - 10
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Anchor position for watermark placement.
///
/// There is deliberately no `Default` impl; the configuration layer owns the
/// documented default (`bottom-right`) so that no code path can drift to a
/// different one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Margin around the watermark, per side, in pixels.
///
/// Each side defaults to zero independently. No upper bound is enforced; a
/// padding larger than the target pushes the watermark out of frame and the
/// compositor clips it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default)]
    pub top: u32,
    #[serde(default)]
    pub left: u32,
    #[serde(default)]
    pub right: u32,
    #[serde(default)]
    pub bottom: u32,
}

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Top-left pixel coordinate where the watermark begins drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Calculate the top-left offset for a watermark placement.
///
/// Pure function over the input dimensions; calling it twice with identical
/// inputs yields identical output.
///
/// # Arguments
///
/// * `anchor` - The requested anchor position
/// * `target` - Dimensions of the target image
/// * `watermark` - Dimensions of the watermark
/// * `padding` - Per-side margin in pixels (ignored for `Center`)
///
/// # Returns
///
/// The (x, y) coordinates where the watermark should be drawn. Coordinates
/// may be negative when the watermark is larger than the target; the
/// compositor clips such placements rather than rejecting them.
pub fn resolve(
    anchor: Anchor,
    target: Dimensions,
    watermark: Dimensions,
    padding: &Padding,
) -> Offset {
    let target_w = target.width as i32;
    let target_h = target.height as i32;
    let wm_w = watermark.width as i32;
    let wm_h = watermark.height as i32;

    match anchor {
        Anchor::Center => Offset::new((target_w - wm_w) / 2, (target_h - wm_h) / 2),
        Anchor::TopLeft => Offset::new(padding.left as i32, padding.top as i32),
        Anchor::TopRight => Offset::new(target_w - wm_w - padding.right as i32, padding.top as i32),
        Anchor::BottomLeft => Offset::new(
            padding.left as i32,
            target_h - wm_h - padding.bottom as i32,
        ),
        Anchor::BottomRight => Offset::new(
            target_w - wm_w - padding.right as i32,
            target_h - wm_h - padding.bottom as i32,
        ),
    }
}

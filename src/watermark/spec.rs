//! Watermark specification: how to stamp an image.
//!
//! A [`WatermarkSpec`] bundles the decoded logo with its anchor and padding.
//! It is built once by the caller and borrowed into every composite
//! operation; the core never mutates it.

use super::compositor::composite;
use super::position::{resolve, Anchor, Dimensions, Padding};
use image::RgbaImage;

/// Immutable description of a watermark stamp.
#[derive(Debug, Clone)]
pub struct WatermarkSpec {
    image: RgbaImage,
    anchor: Anchor,
    padding: Padding,
}

impl WatermarkSpec {
    /// Create a spec from a decoded RGBA watermark.
    pub fn new(image: RgbaImage, anchor: Anchor, padding: Padding) -> Self {
        Self {
            image,
            anchor,
            padding,
        }
    }

    /// Dimensions of the watermark image.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.image.width(),
            height: self.image.height(),
        }
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    pub fn padding(&self) -> &Padding {
        &self.padding
    }

    /// Stamp the watermark onto a target, returning a fresh canvas.
    ///
    /// Resolves the offset for this spec's anchor and padding against the
    /// target's dimensions, then composites. Pure with respect to both
    /// buffers.
    pub fn stamp(&self, target: &RgbaImage) -> RgbaImage {
        let target_dims = Dimensions {
            width: target.width(),
            height: target.height(),
        };
        let offset = resolve(self.anchor, target_dims, self.dimensions(), &self.padding);
        composite(target, &self.image, offset)
    }
}

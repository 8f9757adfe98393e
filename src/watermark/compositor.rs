//! Compositor for blending a watermark onto a target image.
//!
//! The compositor never mutates the decoded target; it allocates a fresh
//! canvas sized exactly to the target, copies the target in as the base
//! layer, then blends the watermark over it at the given offset using
//! standard source-over alpha compositing. Watermark pixels that fall
//! outside the canvas are skipped, not an error.
//!
//! # Example
//!
//! ```
//! use image::{Rgba, RgbaImage};
//! use imprint::watermark::{composite, Offset};
//!
//! let target = RgbaImage::from_pixel(100, 100, Rgba([255, 0, 0, 255]));
//! let logo = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 255, 255]));
//!
//! let canvas = composite(&target, &logo, Offset::new(40, 40));
//! assert_eq!(canvas.dimensions(), (100, 100));
//! assert_eq!(canvas.get_pixel(50, 50), &Rgba([0, 0, 255, 255]));
//! ```

use super::position::Offset;
use image::{Rgba, RgbaImage};

/// Composite a watermark over a target image at the given offset.
///
/// Returns a new canvas; the target buffer is left untouched. The visible
/// region is the intersection of the watermark rectangle with the canvas, so
/// negative offsets and oversized watermarks are clipped silently.
///
/// This operation cannot fail: malformed input is rejected earlier, at the
/// decode boundary.
pub fn composite(target: &RgbaImage, watermark: &RgbaImage, offset: Offset) -> RgbaImage {
    let mut canvas = target.clone();

    let canvas_width = canvas.width() as i32;
    let canvas_height = canvas.height() as i32;
    let wm_width = watermark.width() as i32;
    let wm_height = watermark.height() as i32;

    // Visible window: watermark rectangle clamped to canvas bounds
    let x_start = offset.x.max(0);
    let y_start = offset.y.max(0);
    let x_end = (offset.x + wm_width).min(canvas_width);
    let y_end = (offset.y + wm_height).min(canvas_height);

    for canvas_y in y_start..y_end {
        for canvas_x in x_start..x_end {
            let wm_x = (canvas_x - offset.x) as u32;
            let wm_y = (canvas_y - offset.y) as u32;

            let wm_pixel = watermark.get_pixel(wm_x, wm_y);
            let base_pixel = canvas.get_pixel(canvas_x as u32, canvas_y as u32);

            let blended = blend_pixels(*base_pixel, *wm_pixel);
            canvas.put_pixel(canvas_x as u32, canvas_y as u32, blended);
        }
    }

    canvas
}

/// Blend a foreground pixel over a background pixel.
///
/// Source-over: each channel is `src * a + dst * (1 - a)` with the
/// foreground alpha `a`, and the output alpha is `a + dst_a * (1 - a)`.
/// Fractional alpha blends proportionally; alpha 0 leaves the background
/// untouched and alpha 255 replaces it.
fn blend_pixels(background: Rgba<u8>, foreground: Rgba<u8>) -> Rgba<u8> {
    let fg_alpha = foreground[3] as f32 / 255.0;

    if fg_alpha <= 0.0 {
        return background;
    }

    let blend_channel = |fg: u8, bg: u8| -> u8 {
        let fg_f = fg as f32 / 255.0;
        let bg_f = bg as f32 / 255.0;
        let result = fg_f * fg_alpha + bg_f * (1.0 - fg_alpha);
        (result * 255.0).round().clamp(0.0, 255.0) as u8
    };

    let bg_alpha = background[3] as f32 / 255.0;
    let out_alpha = fg_alpha + bg_alpha * (1.0 - fg_alpha);

    Rgba([
        blend_channel(foreground[0], background[0]),
        blend_channel(foreground[1], background[1]),
        blend_channel(foreground[2], background[2]),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, color: Rgba<u8>) -> RgbaImage {
        RgbaImage::from_pixel(width, height, color)
    }

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

    #[test]
    fn test_canvas_matches_target_dimensions() {
        let target = solid(123, 77, RED);
        let wm = solid(10, 10, BLUE);
        let canvas = composite(&target, &wm, Offset::new(0, 0));
        assert_eq!(canvas.dimensions(), (123, 77));
    }

    #[test]
    fn test_target_is_not_mutated() {
        let target = solid(50, 50, RED);
        let wm = solid(50, 50, BLUE);
        let canvas = composite(&target, &wm, Offset::new(0, 0));

        assert_eq!(target.get_pixel(25, 25), &RED);
        assert_eq!(canvas.get_pixel(25, 25), &BLUE);
    }

    #[test]
    fn test_opaque_watermark_replaces_pixels() {
        let target = solid(100, 100, WHITE);
        let wm = solid(20, 20, BLUE);

        let canvas = composite(&target, &wm, Offset::new(40, 40));

        assert_eq!(canvas.get_pixel(40, 40), &BLUE);
        assert_eq!(canvas.get_pixel(59, 59), &BLUE);
        // Just outside the stamped region
        assert_eq!(canvas.get_pixel(39, 40), &WHITE);
        assert_eq!(canvas.get_pixel(60, 59), &WHITE);
    }

    #[test]
    fn test_transparent_watermark_leaves_target_unchanged() {
        let target = solid(100, 100, RED);
        let wm = solid(20, 20, Rgba([0, 255, 0, 0]));

        let canvas = composite(&target, &wm, Offset::new(40, 40));

        assert_eq!(canvas.get_pixel(50, 50), &RED);
    }

    #[test]
    fn test_semi_transparent_blend() {
        // 50% white over black lands near mid-gray
        let target = solid(100, 100, Rgba([0, 0, 0, 255]));
        let wm = solid(20, 20, Rgba([255, 255, 255, 128]));

        let canvas = composite(&target, &wm, Offset::new(0, 0));
        let pixel = canvas.get_pixel(10, 10);

        assert!(pixel[0] > 100 && pixel[0] < 160);
        assert!(pixel[1] > 100 && pixel[1] < 160);
        assert!(pixel[2] > 100 && pixel[2] < 160);
        assert_eq!(pixel[3], 255);
    }

    #[test]
    fn test_clipping_right_and_bottom() {
        let target = solid(50, 50, WHITE);
        let wm = solid(30, 30, RED);

        // Only the 10x10 top-left corner of the watermark is visible
        let canvas = composite(&target, &wm, Offset::new(40, 40));

        assert_eq!(canvas.dimensions(), (50, 50));
        assert_eq!(canvas.get_pixel(45, 45), &RED);
        assert_eq!(canvas.get_pixel(39, 39), &WHITE);
    }

    #[test]
    fn test_clipping_negative_offset() {
        let target = solid(50, 50, WHITE);
        let wm = solid(30, 30, RED);

        // Only the bottom-right 10x10 of the watermark lands on the canvas
        let canvas = composite(&target, &wm, Offset::new(-20, -20));

        assert_eq!(canvas.get_pixel(5, 5), &RED);
        assert_eq!(canvas.get_pixel(15, 15), &WHITE);
    }

    #[test]
    fn test_watermark_larger_than_target() {
        let target = solid(50, 50, WHITE);
        let wm = solid(60, 60, RED);

        let canvas = composite(&target, &wm, Offset::new(0, 0));

        assert_eq!(canvas.dimensions(), (50, 50));
        for (_, _, pixel) in canvas.enumerate_pixels() {
            assert_eq!(pixel, &RED);
        }
    }

    #[test]
    fn test_watermark_fully_outside_canvas() {
        let target = solid(50, 50, WHITE);
        let wm = solid(10, 10, RED);

        let canvas = composite(&target, &wm, Offset::new(200, 200));

        for (_, _, pixel) in canvas.enumerate_pixels() {
            assert_eq!(pixel, &WHITE);
        }
    }

    #[test]
    fn test_center_stamp_end_to_end_regions() {
        // 100x100 red target, 20x20 opaque blue logo centered at (40, 40)
        let target = solid(100, 100, RED);
        let wm = solid(20, 20, BLUE);

        let canvas = composite(&target, &wm, Offset::new(40, 40));

        for (x, y, pixel) in canvas.enumerate_pixels() {
            let inside = (40..60).contains(&x) && (40..60).contains(&y);
            if inside {
                assert_eq!(pixel, &BLUE, "expected blue at ({}, {})", x, y);
            } else {
                assert_eq!(pixel, &RED, "expected red at ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_blend_pixels_opaque_foreground() {
        let result = blend_pixels(WHITE, Rgba([10, 20, 30, 255]));
        assert_eq!(result, Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_blend_pixels_transparent_foreground() {
        let result = blend_pixels(Rgba([10, 20, 30, 255]), Rgba([200, 200, 200, 0]));
        assert_eq!(result, Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_blend_pixels_alpha_compositing() {
        // 50% over 50% background: a_out = 0.5 + 0.5 * 0.5 = 0.75
        let result = blend_pixels(Rgba([0, 0, 0, 128]), Rgba([255, 255, 255, 128]));
        assert!(result[3] > 185 && result[3] < 197);
    }
}

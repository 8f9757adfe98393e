//! Decode/encode boundary for the stamping pipeline.
//!
//! Everything that can fail lives here: opening and decoding the target and
//! watermark files, and writing the JPEG output. The core resolver and
//! compositor only ever see already-decoded RGBA buffers.
//!
//! Output is always JPEG regardless of the input format; watermark outputs
//! are normalized to one format. The output name keeps only the text before
//! the first dot of the file name, so `shot.final.png` collapses to
//! `shot_watermark.jpg` (known limitation for multi-dot names).

use crate::error::StampError;
use crate::watermark::Dimensions;
use image::codecs::jpeg::JpegEncoder;
use image::io::Reader as ImageReader;
use image::{ColorType, ImageEncoder, RgbaImage};
use std::io::Write;
use std::path::{Path, PathBuf};

/// JPEG quality for encoded outputs.
const JPEG_QUALITY: u8 = 75;

/// Suffix appended to output file names, and the marker that excludes
/// already-stamped files from re-processing.
pub const OUTPUT_SUFFIX: &str = "_watermark";

/// Decode an image file into an RGBA pixel buffer.
///
/// PNG and JPEG inputs are supported; the container format is sniffed from
/// the file contents rather than trusted from the extension. Sources without
/// an alpha channel are promoted to RGBA with full opacity.
pub fn decode(path: &Path) -> Result<RgbaImage, StampError> {
    let reader = ImageReader::open(path).map_err(|e| open_error(path, e))?;
    let reader = reader
        .with_guessed_format()
        .map_err(|e| StampError::decode(path, e.to_string()))?;
    let image = reader
        .decode()
        .map_err(|e| StampError::decode(path, e.to_string()))?;
    Ok(image.to_rgba8())
}

/// Read an image's dimensions from its header without decoding pixel data.
pub fn probe_dimensions(path: &Path) -> Result<Dimensions, StampError> {
    let (width, height) = image::image_dimensions(path).map_err(|e| match e {
        image::ImageError::IoError(io) => open_error(path, io),
        other => StampError::decode(path, other.to_string()),
    })?;
    Ok(Dimensions { width, height })
}

/// Encode a canvas as JPEG at `path`.
///
/// The alpha channel is dropped; JPEG has no transparency. The file handle
/// is scoped to this call and released on every exit path.
pub fn encode_jpeg(canvas: &RgbaImage, path: &Path) -> Result<(), StampError> {
    let file = std::fs::File::create(path).map_err(|e| StampError::encode(path, e.to_string()))?;
    let mut writer = std::io::BufWriter::new(file);

    let rgb_data = rgba_to_rgb(canvas.as_raw());
    JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
        .write_image(&rgb_data, canvas.width(), canvas.height(), ColorType::Rgb8)
        .map_err(|e| StampError::encode(path, e.to_string()))?;

    writer
        .flush()
        .map_err(|e| StampError::encode(path, e.to_string()))
}

/// Derive the output path for a stamped image.
///
/// The base name is the file-name text before the FIRST dot, with
/// `_watermark.jpg` appended; the parent directory is preserved. Always
/// `.jpg`, even for PNG inputs.
pub fn output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = file_name.split('.').next().unwrap_or_default().to_string();
    input.with_file_name(format!("{}{}.jpg", base, OUTPUT_SUFFIX))
}

/// Whether a path is an eligible stamping target.
///
/// Eligible files have a png/jpg/jpeg extension (case-insensitive) and do
/// not already carry the output suffix, so a second run over the same
/// directory never re-stamps its own outputs.
pub fn is_eligible_input(path: &Path) -> bool {
    let Some(name) = path.file_name().map(|n| n.to_string_lossy().to_lowercase()) else {
        return false;
    };
    if name.contains(OUTPUT_SUFFIX) {
        return false;
    }
    matches!(
        path.extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .as_deref(),
        Some("png") | Some("jpg") | Some("jpeg")
    )
}

fn open_error(path: &Path, err: std::io::Error) -> StampError {
    if err.kind() == std::io::ErrorKind::NotFound {
        StampError::not_found(path)
    } else {
        StampError::decode(path, err.to_string())
    }
}

/// Drop the alpha channel from raw RGBA data.
fn rgba_to_rgb(data: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(data.len() / 4 * 3);
    for pixel in data.chunks_exact(4) {
        rgb.extend_from_slice(&pixel[..3]);
    }
    rgb
}

//! Settings for a stamping run.
//!
//! All knobs can come from an optional YAML file, from CLI flags, or both
//! (flags win). The defaults live here and nowhere else: the watermark file
//! is `watermark.png` in the working directory and the anchor is
//! `bottom-right`. Earlier iterations of this tool let the default anchor
//! vary between code paths; keeping a single constant prevents that.
//!
//! ```yaml
//! watermark: logo.png
//! position: bottom-right
//! padding:
//!   right: 12
//!   bottom: 12
//! ```

use crate::error::StampError;
use crate::watermark::{Anchor, Padding};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The one documented default anchor.
pub const DEFAULT_ANCHOR: Anchor = Anchor::BottomRight;

// Default values
fn default_watermark() -> PathBuf {
    PathBuf::from("watermark.png")
}

fn default_position() -> Anchor {
    DEFAULT_ANCHOR
}

/// Settings describing how to stamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Watermark image path; must be a PNG (default: "watermark.png")
    #[serde(default = "default_watermark")]
    pub watermark: PathBuf,

    /// Anchor position (default: bottom-right)
    #[serde(default = "default_position")]
    pub position: Anchor,

    /// Per-side margin in pixels (default: all zero)
    #[serde(default)]
    pub padding: Padding,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            watermark: default_watermark(),
            position: default_position(),
            padding: Padding::default(),
        }
    }
}

impl Settings {
    /// Load settings from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StampError> {
        let yaml = std::fs::read_to_string(&path)
            .map_err(|e| StampError::config(format!("failed to read settings file: {}", e)))?;
        serde_yaml::from_str(&yaml)
            .map_err(|e| StampError::config(format!("failed to parse settings file: {}", e)))
    }

    /// Validate the settings.
    ///
    /// The watermark source must be a PNG file so that alpha transparency is
    /// available; anything else is a configuration error, not a decode error.
    pub fn validate(&self) -> Result<(), StampError> {
        if self.watermark.as_os_str().is_empty() {
            return Err(StampError::config("watermark path cannot be empty"));
        }

        let is_png = self
            .watermark
            .extension()
            .map(|e| e.to_string_lossy().eq_ignore_ascii_case("png"))
            .unwrap_or(false);
        if !is_png {
            return Err(StampError::config(format!(
                "watermark must be a PNG file, got '{}'",
                self.watermark.display()
            )));
        }

        Ok(())
    }
}

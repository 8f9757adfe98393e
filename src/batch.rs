//! Batch stamping over one or more target files.
//!
//! Each file is one sequential unit of work: decode, resolve, composite,
//! encode. A failing file is recorded in the report and the run continues;
//! nothing in here terminates the process.

use crate::codec;
use crate::error::StampError;
use crate::watermark::WatermarkSpec;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of stamping a single file.
#[derive(Debug)]
pub struct FileOutcome {
    /// The input path as submitted.
    pub input: PathBuf,
    /// The written output path, or the error that stopped this file.
    pub result: Result<PathBuf, StampError>,
}

/// Aggregated per-file results of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn is_clean(&self) -> bool {
        self.failed() == 0
    }
}

/// Stamp one file and write the result next to it.
///
/// The original file is never modified; the output lands at
/// [`codec::output_path`] and is always JPEG.
pub fn apply_to_file(path: &Path, spec: &WatermarkSpec) -> Result<PathBuf, StampError> {
    let target = codec::decode(path)?;
    let canvas = spec.stamp(&target);
    let output = codec::output_path(path);
    codec::encode_jpeg(&canvas, &output)?;
    Ok(output)
}

/// Stamp a list of files, continuing past individual failures.
///
/// Duplicate input paths are dropped (first occurrence wins) so that no two
/// operations ever race on the same derived output path. The report has one
/// entry per retained input, in submission order.
pub fn run_batch(paths: &[PathBuf], spec: &WatermarkSpec) -> BatchReport {
    let mut report = BatchReport::default();
    let mut seen = std::collections::HashSet::new();

    for path in paths {
        if !seen.insert(path.clone()) {
            continue;
        }

        let result = apply_to_file(path, spec);
        match &result {
            Ok(output) => {
                info!(input = %path.display(), output = %output.display(), "stamped");
            }
            Err(err) => {
                warn!(input = %path.display(), error = %err, "skipping file");
            }
        }
        report.outcomes.push(FileOutcome {
            input: path.clone(),
            result,
        });
    }

    report
}

/// List the eligible stamping targets in a directory.
///
/// Eligible means a png/jpg/jpeg extension and no `_watermark` marker in the
/// name, so outputs of a previous run are never re-stamped. The list is
/// sorted for deterministic processing order.
pub fn scan_directory(dir: &Path) -> Result<Vec<PathBuf>, StampError> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StampError::not_found(dir)
        } else {
            StampError::config(format!("failed to list directory {}: {}", dir.display(), e))
        }
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| StampError::config(format!("failed to read directory entry: {}", e)))?;
        let path = entry.path();
        if path.is_file() && codec::is_eligible_input(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

use clap::Parser;
use imprint::batch;
use imprint::codec;
use imprint::config::Settings;
use imprint::error::StampError;
use imprint::watermark::{Anchor, WatermarkSpec};
use std::path::{Path, PathBuf};

/// Imprint - stamp a logo onto images at a configurable quadrant position
#[derive(Parser, Debug)]
#[command(name = "imprint")]
#[command(version, about, long_about = None)]
struct Args {
    /// Target image, or "." / "*" for all eligible files in the current directory
    input: String,

    /// Anchor position for the watermark (default: bottom-right)
    #[arg(value_enum)]
    position: Option<Anchor>,

    /// Watermark PNG file (default: watermark.png)
    #[arg(short, long)]
    watermark: Option<PathBuf>,

    /// Optional YAML settings file; flags take precedence over it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Margin above the watermark in pixels
    #[arg(long)]
    padding_top: Option<u32>,

    /// Margin left of the watermark in pixels
    #[arg(long)]
    padding_left: Option<u32>,

    /// Margin right of the watermark in pixels
    #[arg(long)]
    padding_right: Option<u32>,

    /// Margin below the watermark in pixels
    #[arg(long)]
    padding_bottom: Option<u32>,
}

fn main() {
    // Initialize logging subsystem
    imprint::logging::init_subscriber().expect("Failed to initialize logging subsystem");

    // Parse command-line arguments
    let args = Args::parse();

    let settings = build_settings(&args).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    // The watermark is loaded once and borrowed into every stamp
    let spec = load_spec(&settings).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    let files = collect_inputs(&args.input).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });

    if files.is_empty() {
        tracing::warn!("no eligible input files found");
        return;
    }

    tracing::info!(
        files = files.len(),
        watermark = %settings.watermark.display(),
        position = ?settings.position,
        "starting batch"
    );

    let report = batch::run_batch(&files, &spec);

    tracing::info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "batch finished"
    );

    if !report.is_clean() {
        std::process::exit(1);
    }
}

/// Merge the optional settings file with CLI flags (flags win) and validate.
fn build_settings(args: &Args) -> Result<Settings, StampError> {
    let mut settings = match &args.config {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    if let Some(position) = args.position {
        settings.position = position;
    }
    if let Some(watermark) = &args.watermark {
        settings.watermark = watermark.clone();
    }
    if let Some(top) = args.padding_top {
        settings.padding.top = top;
    }
    if let Some(left) = args.padding_left {
        settings.padding.left = left;
    }
    if let Some(right) = args.padding_right {
        settings.padding.right = right;
    }
    if let Some(bottom) = args.padding_bottom {
        settings.padding.bottom = bottom;
    }

    settings.validate()?;
    Ok(settings)
}

fn load_spec(settings: &Settings) -> Result<WatermarkSpec, StampError> {
    let image = codec::decode(&settings.watermark)?;
    Ok(WatermarkSpec::new(
        image,
        settings.position,
        settings.padding,
    ))
}

/// Expand the input argument into target paths.
///
/// `.` and `*` mean every eligible file in the current directory; anything
/// else is taken as a single file path.
fn collect_inputs(input: &str) -> Result<Vec<PathBuf>, StampError> {
    if input == "." || input == "*" {
        batch::scan_directory(Path::new("."))
    } else {
        Ok(vec![PathBuf::from(input)])
    }
}

use clap::Parser;
use serde::Serialize;
use std::fs;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vstitch::io::{load_gray_image, save_gray_image};
use vstitch::{stitch, BestAlignment, GrayBuffer, Parallelism, SearchConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Vertical image stitching")]
struct Cli {
    /// Top image to compare.
    #[arg(value_name = "IMAGE1")]
    top: PathBuf,
    /// Bottom image to compare.
    #[arg(value_name = "IMAGE2")]
    bottom: PathBuf,
    /// Name of the output image; the format follows the extension.
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
    /// Number of threads to use (capped at the available parallelism).
    #[arg(short, long, default_value_t = 1)]
    threads: usize,
    /// Stop searching at the first candidate scoring at or below this value.
    #[arg(long, value_name = "SCORE")]
    stop_threshold: Option<u64>,
    /// Write a JSON alignment report to FILE ("-" for stdout).
    #[arg(long, value_name = "FILE")]
    report: Option<String>,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Serialize)]
struct StripRecord {
    path: String,
    width: usize,
    height: usize,
}

impl StripRecord {
    fn new(path: &std::path::Path, buffer: &GrayBuffer) -> Self {
        Self {
            path: path.display().to_string(),
            width: buffer.width(),
            height: buffer.height(),
        }
    }
}

#[derive(Debug, Serialize)]
struct AlignmentRecord {
    cut_index: usize,
    offset: usize,
    score: u64,
    candidates_evaluated: usize,
}

impl From<BestAlignment> for AlignmentRecord {
    fn from(value: BestAlignment) -> Self {
        Self {
            cut_index: value.cut_index,
            offset: value.offset,
            score: value.score,
            candidates_evaluated: value.candidates_evaluated,
        }
    }
}

#[derive(Debug, Serialize)]
struct Report {
    top: StripRecord,
    bottom: StripRecord,
    alignment: AlignmentRecord,
    output: StripRecord,
    threads: usize,
}

fn clamp_threads(requested: usize) -> usize {
    let available = std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1);
    requested.clamp(1, available)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("vstitch=info".parse()?))
            .with_target(false)
            .init();
    }

    let top = load_gray_image(&cli.top)
        .map_err(|err| format!("Failed to open top image {}: {err}", cli.top.display()))?;
    let bottom = load_gray_image(&cli.bottom).map_err(|err| {
        format!(
            "Failed to open bottom image {}: {err}",
            cli.bottom.display()
        )
    })?;

    let threads = clamp_threads(cli.threads);
    let parallelism = if threads > 1 {
        Parallelism::Threads(threads)
    } else {
        Parallelism::Sequential
    };
    let mut cfg = SearchConfig::default().with_parallelism(parallelism);
    if let Some(threshold) = cli.stop_threshold {
        cfg = cfg.with_stop_threshold(threshold);
    }

    let (alignment, output) = stitch(top.view(), bottom.view(), &cfg)?;
    println!(
        "Found best fit at index {} of top image",
        alignment.cut_index
    );

    save_gray_image(&output, &cli.output)?;
    println!("Wrote results to file {}", cli.output.display());

    if let Some(target) = cli.report {
        let report = Report {
            top: StripRecord::new(&cli.top, &top),
            bottom: StripRecord::new(&cli.bottom, &bottom),
            alignment: alignment.into(),
            output: StripRecord::new(&cli.output, &output),
            threads,
        };
        let json = serde_json::to_string_pretty(&report)?;
        match target.as_str() {
            "-" => println!("{json}"),
            path => fs::write(path, json)?,
        }
    }

    Ok(())
}

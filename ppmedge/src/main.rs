use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use ppmedge::batch::{BatchConfig, run_batch};
use std::path::PathBuf;
use std::process::ExitCode;

/// Apply a 3x3 Laplacian edge filter to binary PPM (P6) images.
///
/// The i-th input is written as `laplacian<i>.ppm`.
#[derive(Parser, Debug)]
#[command(name = "ppmedge", version)]
struct Args {
    /// Input P6 images
    #[arg(required = true, value_name = "INPUT")]
    inputs: Vec<PathBuf>,

    /// Row workers per image
    #[arg(short = 'j', long, default_value_t = 4,
          value_parser = clap::value_parser!(u32).range(1..))]
    workers: u32,

    /// Directory receiving the output images
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = BatchConfig::default()
        .with_workers(args.workers as usize)
        .with_output_dir(args.output_dir);

    let report = run_batch(&args.inputs, &config).context("could not run batch")?;

    for outcome in report.failures() {
        if let Err(e) = &outcome.result {
            eprintln!("error: {}: {}", outcome.input.display(), e);
        }
    }
    println!("{}", report.summary_line());

    if report.is_success() {
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!(
            "{} of {} images failed",
            report.failed(),
            report.outcomes().len()
        );
        Ok(ExitCode::FAILURE)
    }
}

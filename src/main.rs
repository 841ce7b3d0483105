use anyhow::Result;
use clap::Parser;
use signal_spectrum::analysis::{DirectDft, FourierTransform};
use signal_spectrum::batch::{load_signal, BandReport};
use signal_spectrum::validation::validate_file;
use signal_spectrum::{encode, BatchConfig, BatchPipeline, RustFftTransform};
use std::fmt::Display;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "signal-spectrum")]
#[command(about = "Measure spectral band power of signal files", long_about = None)]
struct Args {
    /// Signal file, or directory of signal files
    input: String,

    /// Lower edge of the frequency band
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    min_freq: f64,

    /// Upper edge of the frequency band
    #[arg(long, default_value = "inf", allow_negative_numbers = true)]
    max_freq: f64,

    /// Extension of signal files picked up from a directory
    #[arg(long, default_value = "sig")]
    ext: String,

    /// Descend into subdirectories
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Use the direct DFT instead of the FFT backend
    #[arg(long)]
    direct: bool,

    /// Only validate that signal files round-trip through the codec
    #[arg(long)]
    validate: bool,

    /// Print the canonical encoding of each signal instead of measuring it
    #[arg(long)]
    canonical: bool,

    /// Print reports as JSON
    #[arg(long)]
    json: bool,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let input = shellexpand::tilde(&args.input);

    let config = BatchConfig::new(PathBuf::from(input.as_ref()))
        .with_band(args.min_freq, args.max_freq)
        .with_extension(args.ext.clone())
        .recursive(args.recursive);

    if args.direct {
        log::info!("Using direct DFT backend");
        run(&args, BatchPipeline::new(config, DirectDft::new())?)
    } else {
        run(&args, BatchPipeline::new(config, RustFftTransform::new())?)
    }
}

fn run<T>(args: &Args, pipeline: BatchPipeline<T>) -> Result<()>
where
    T: FourierTransform + Sync,
    T::Error: Display,
{
    // If validate-only mode, just validate and exit
    if args.validate {
        log::info!("Validation mode - checking signal files...");
        for path in pipeline.signal_files()? {
            validate_file(&path)?;
        }
        log::info!("✅ Validation passed!");
        return Ok(());
    }

    if args.canonical {
        for path in pipeline.signal_files()? {
            let signal = load_signal(&path)?;
            println!("{}", encode(&signal));
        }
        return Ok(());
    }

    let reports = pipeline.run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    if reports.iter().any(|r| !r.is_ok()) {
        anyhow::bail!("Some signal files could not be measured");
    }

    Ok(())
}

fn print_report(report: &BandReport) {
    match (&report.power, &report.error) {
        (Some(power), _) => println!("{}\t{}", report.path.display(), power),
        (None, Some(error)) => println!("{}\terror: {}", report.path.display(), error),
        (None, None) => println!("{}\t-", report.path.display()),
    }
}

use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use imgclr::error::ClrError;
use imgclr::models::{AppConfig, Overrides, Settings};
use imgclr::services;

const BIN_NAME: &str = "imgclr";

#[derive(Parser)]
#[command(name = "imgclr", version)]
#[command(about = "Image colouriser - map an image onto a palette with error-diffusion dithering")]
struct Cli {
    /// Input image (JPEG, PNG or BMP; format is detected from content)
    input: PathBuf,

    /// Output image; format follows the extension (jpg, jpeg, png, bmp, dib)
    output: PathBuf,

    /// Palette as whitespace-separated hex colours, e.g. 1d1f21 "#c5c8c6" fff
    #[arg(short, long, value_name = "HEX", num_args = 1.., conflicts_with = "scheme")]
    palette: Vec<String>,

    /// Use a named palette from the config file
    #[arg(long, value_name = "NAME")]
    scheme: Option<String>,

    /// Dithering algorithm: floyd-steinberg (default), none, atkinson, jjn,
    /// burkes or sierra-lite
    #[arg(short, long, value_name = "NAME")]
    dither: Option<String>,

    /// Invert image brightness, preserving hue and saturation
    #[arg(short, long)]
    invert: bool,

    /// Config file (defaults to $IMGCLR_CONFIG when set)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Do not print the summary line on success
    #[arg(short, long)]
    quiet: bool,

    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "imgclr=warn,clr_dither=warn",
        1 => "imgclr=info,clr_dither=info",
        _ => "imgclr=debug,clr_dither=debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::resolve(cli.config.as_deref())?;

    let overrides = Overrides {
        palette: cli.palette,
        scheme: cli.scheme,
        dither: cli.dither,
        invert: cli.invert,
    };
    let settings = Settings::resolve(cli.input, cli.output, overrides, &config)?;

    let processed = services::run(&settings)?;

    if !cli.quiet {
        println!(
            "{}: wrote image of size {}x{} to '{}'",
            BIN_NAME,
            processed.width,
            processed.height,
            settings.output.display()
        );
    }
    Ok(())
}

fn report(e: &anyhow::Error) {
    eprintln!("{}: {}", BIN_NAME, e);
    let usage = e
        .downcast_ref::<ClrError>()
        .is_some_and(ClrError::is_usage);
    if usage {
        eprintln!("Try '{} --help' for more information.", BIN_NAME);
    }
}

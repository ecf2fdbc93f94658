use std::path::PathBuf;

use anyhow::Context as _;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use paintmask::io::{read_outline, write_mask};
use paintmask::region::{ExtractOptions, extract};

#[derive(Parser, Debug)]
#[command(name = "paintmask", version, about = "Coloring-page asset preparation")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive a paintable-region mask from an outline image.
    Extract(ExtractArgs),
}

#[derive(Parser, Debug)]
struct ExtractArgs {
    /// Input outline PNG (dark lines on a light page).
    input: PathBuf,

    /// Output mask PNG (pixel value = region identifier, 0 = not paintable).
    output: PathBuf,

    /// Dilation passes used to seal anti-aliased gaps in the outlines.
    #[arg(long, default_value_t = 1)]
    dilate: u32,

    /// Intensity cutoff; samples strictly below count as ink.
    #[arg(long, default_value_t = 200)]
    threshold: u8,

    /// Minimum pixel count for a region to stay paintable.
    #[arg(long, default_value_t = 50)]
    min_region_size: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Usage errors share the fatal exit code; help and version exit clean.
    let cli = Cli::try_parse().unwrap_or_else(|err| {
        let code = match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
            _ => 1,
        };
        let _ = err.print();
        std::process::exit(code);
    });

    match cli.cmd {
        Command::Extract(args) => cmd_extract(args),
    }
}

fn cmd_extract(args: ExtractArgs) -> anyhow::Result<()> {
    let image = read_outline(&args.input)
        .with_context(|| format!("load outline '{}'", args.input.display()))?;
    log::info!(
        "loaded {}: {}x{}",
        args.input.display(),
        image.width(),
        image.height()
    );

    let options = ExtractOptions {
        threshold: args.threshold,
        dilate_iterations: args.dilate,
        min_region_size: args.min_region_size,
    };
    let mask = extract(&image, &options);

    log::info!("{} paintable region(s)", mask.region_count());
    for region in mask.regions().iter().take(10) {
        log::debug!(
            "region {}: {} px, {}x{} at ({}, {})",
            region.id,
            region.pixel_count,
            region.bounds.width,
            region.bounds.height,
            region.bounds.x,
            region.bounds.y
        );
    }

    write_mask(&mask, &args.output)
        .with_context(|| format!("write mask '{}'", args.output.display()))?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}

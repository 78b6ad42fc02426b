use anyhow::Result;
use clap::Parser;
use log::info;

use spritecut::cli::{BandsArgs, CliArgs, Command, HalvesArgs};
use spritecut::error::SpritecutError;
use spritecut::split::{BandSplitter, HalfSplitter};

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Logger may not be initialized yet, so report directly
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = CliArgs::parse();

    let verbose = match &cli.command {
        Command::Halves(args) => args.verbose,
        Command::Bands(args) => args.verbose,
    };

    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    match &cli.command {
        Command::Halves(args) => run_halves(args),
        Command::Bands(args) => run_bands(args),
    }
}

fn run_halves(args: &HalvesArgs) -> Result<()> {
    if !args.input_dir.is_dir() {
        return Err(SpritecutError::NotADirectory(args.input_dir.clone()).into());
    }

    let report = HalfSplitter::new(args.width, args.height)
        .filter(args.filter.unwrap_or_default())
        .compress(args.compress)
        .process_directory(&args.input_dir, &args.output)?;

    if report.processed() > 0 {
        info!("Done!");
    }

    Ok(())
}

fn run_bands(args: &BandsArgs) -> Result<()> {
    if !args.input.exists() {
        return Err(SpritecutError::InputNotFound(args.input.clone()).into());
    }

    BandSplitter::new()
        .output_dir(args.dir.clone())
        .manifest(args.manifest)
        .compress(args.compress)
        .split_sprites(&args.input, &args.output)?;

    Ok(())
}

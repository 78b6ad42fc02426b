use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::split::{DEFAULT_TARGET_HEIGHT, DEFAULT_TARGET_WIDTH};

#[derive(Parser, Debug)]
#[command(name = "spritecut")]
#[command(version, about = "Sprite image splitter", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Split each PNG in a directory into left (L) and right (R) halves at a fixed size
    Halves(HalvesArgs),
    /// Split a vertical sprite sheet into sprites separated by transparent rows
    Bands(BandsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct HalvesArgs {
    /// Input directory containing PNG files
    pub input_dir: PathBuf,

    /// Output directory for processed images
    #[arg(short, long)]
    pub output: PathBuf,

    /// Target width of each half in pixels
    #[arg(long, default_value_t = DEFAULT_TARGET_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Target height of each half in pixels
    #[arg(long, default_value_t = DEFAULT_TARGET_HEIGHT, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Resize filter algorithm [default: lanczos3]
    #[arg(long, value_enum)]
    pub filter: Option<ResizeFilter>,

    /// Compress PNG output (--compress=0..6 or --compress=max). Bare --compress uses level 2.
    #[arg(
        long,
        value_name = "LEVEL",
        default_missing_value = "2",
        num_args = 0..=1,
        require_equals = true
    )]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Args, Debug, Clone)]
pub struct BandsArgs {
    /// Input sprite sheet image file
    pub input: PathBuf,

    /// Base name for output files (sprite01.png, sprite02.png, ...)
    #[arg(short, long, default_value = "sprite")]
    pub output: String,

    /// Output directory [default: same as input file]
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Also write a JSON manifest describing each extracted sprite
    #[arg(long)]
    pub manifest: bool,

    /// Compress PNG output (--compress=0..6 or --compress=max). Bare --compress uses level 2.
    #[arg(
        long,
        value_name = "LEVEL",
        default_missing_value = "2",
        num_args = 0..=1,
        require_equals = true
    )]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Resize filter algorithm
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq, Hash)]
pub enum ResizeFilter {
    /// Nearest neighbor (best for pixel art)
    #[value(name = "nearest")]
    Nearest,
    /// Bilinear interpolation
    #[value(name = "triangle")]
    Triangle,
    /// Cubic interpolation (bicubic)
    #[value(name = "catmull-rom", alias = "bicubic")]
    CatmullRom,
    /// Gaussian filter
    #[value(name = "gaussian")]
    Gaussian,
    /// Lanczos with window 3 (highest quality)
    #[default]
    #[value(name = "lanczos3")]
    Lanczos3,
}

impl ResizeFilter {
    pub fn to_image_filter(self) -> image::imageops::FilterType {
        match self {
            ResizeFilter::Nearest => image::imageops::FilterType::Nearest,
            ResizeFilter::Triangle => image::imageops::FilterType::Triangle,
            ResizeFilter::CatmullRom => image::imageops::FilterType::CatmullRom,
            ResizeFilter::Gaussian => image::imageops::FilterType::Gaussian,
            ResizeFilter::Lanczos3 => image::imageops::FilterType::Lanczos3,
        }
    }
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}

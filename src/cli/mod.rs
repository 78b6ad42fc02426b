mod args;

pub use args::{BandsArgs, CliArgs, Command, CompressionLevel, HalvesArgs, ResizeFilter};

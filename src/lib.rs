pub mod cli;
pub mod error;
pub mod output;
pub mod split;
pub mod sprite;

pub use cli::{BandsArgs, CliArgs, Command, CompressionLevel, HalvesArgs, ResizeFilter};
pub use error::SpritecutError;
pub use split::{BandSplitter, ExtractedSprite, HalfPair, HalfSplitReport, HalfSplitter};
pub use sprite::{RowBand, find_bands, normalize};

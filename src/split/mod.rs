mod bands;
mod halves;

pub use bands::{BandSplitter, ExtractedSprite, sprite_filename};
pub use halves::{
    DEFAULT_TARGET_HEIGHT, DEFAULT_TARGET_WIDTH, HalfPair, HalfSplitReport, HalfSplitter,
};

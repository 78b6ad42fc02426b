use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpritecutError {
    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Input file '{0}' not found")]
    InputNotFound(PathBuf),

    #[error("Input directory '{0}' not found")]
    NotADirectory(PathBuf),

    #[error("Image '{path}' would produce an empty {width}x{height} region")]
    EmptyImage {
        path: PathBuf,
        width: u32,
        height: u32,
    },
}

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{DynamicImage, ImageReader};

use crate::error::SpritecutError;

/// Decode an image file, keeping its native color type
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let img = ImageReader::open(path)
        .map_err(|e| SpritecutError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| SpritecutError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SpritecutError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    Ok(img)
}

/// Collect the `*.png` files directly inside `dir`, sorted by path
pub fn collect_png_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let pattern = Path::new(&glob::Pattern::escape(&dir.to_string_lossy())).join("*.png");
    let pattern_str = pattern.to_string_lossy();

    let mut paths = Vec::new();
    for entry in
        glob::glob(&pattern_str).with_context(|| format!("invalid glob pattern: {}", pattern_str))?
    {
        let path = entry.with_context(|| format!("failed to read glob entry: {}", pattern_str))?;
        if path.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// File name without its final extension ("hero.png" -> "hero")
pub fn basename(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "unknown".to_string())
}

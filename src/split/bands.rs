use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{debug, info};

use crate::cli::CompressionLevel;
use crate::error::SpritecutError;
use crate::output::{save_png, write_manifest};
use crate::sprite::{RowBand, find_bands, load_image};

/// A sprite cut from a sheet and written to disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedSprite {
    /// 1-based position in scan order
    pub index: usize,
    /// Rows of the sheet the sprite was cut from
    pub band: RowBand,
    /// Written PNG file
    pub path: PathBuf,
}

/// Splits a vertical sprite sheet on fully transparent rows
#[derive(Debug, Clone, Default)]
pub struct BandSplitter {
    /// Output directory; the input's directory when unset
    pub output_dir: Option<PathBuf>,
    /// Write `{base}.json` next to the sprites
    pub manifest: bool,
    pub compress: Option<CompressionLevel>,
}

impl BandSplitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn manifest(mut self, enabled: bool) -> Self {
        self.manifest = enabled;
        self
    }

    pub fn compress(mut self, compress: Option<CompressionLevel>) -> Self {
        self.compress = compress;
        self
    }

    /// Write each band of `input_path` as `{base_name}{NN}.png`, numbered from 01.
    ///
    /// A sheet with no bands writes nothing and returns an empty list.
    pub fn split_sprites(&self, input_path: &Path, base_name: &str) -> Result<Vec<ExtractedSprite>> {
        if !input_path.exists() {
            return Err(SpritecutError::InputNotFound(input_path.to_path_buf()).into());
        }

        let img = load_image(input_path)?;
        info!(
            "Image size: {}x{} ({:?})",
            img.width(),
            img.height(),
            img.color()
        );

        let bands = find_bands(&img);
        info!("Found {} sprites", bands.len());

        if bands.is_empty() {
            return Ok(Vec::new());
        }

        let output_dir = self.resolve_output_dir(input_path);
        fs::create_dir_all(&output_dir).with_context(|| {
            format!("failed to create output directory: {}", output_dir.display())
        })?;

        let mut sprites = Vec::with_capacity(bands.len());
        for (index, band) in (1..).zip(bands) {
            info!(
                "Sprite {}: rows {}-{} (height: {})",
                index,
                band.start,
                band.end,
                band.height()
            );

            let sprite = img.crop_imm(0, band.start, img.width(), band.height());
            let path = output_dir.join(sprite_filename(base_name, index));
            save_png(&sprite, &path, self.compress)?;
            info!("  Saved: {}", path.display());

            sprites.push(ExtractedSprite { index, band, path });
        }

        if self.manifest {
            let path = write_manifest(
                input_path,
                (img.width(), img.height()),
                &sprites,
                &output_dir,
                base_name,
            )?;
            debug!("Wrote manifest {}", path.display());
        }

        info!("Successfully split {} sprites", sprites.len());

        Ok(sprites)
    }

    fn resolve_output_dir(&self, input_path: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => input_path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

/// File name for the `index`-th sprite (1-based, at least two digits)
pub fn sprite_filename(base_name: &str, index: usize) -> String {
    format!("{}{:02}.png", base_name, index)
}

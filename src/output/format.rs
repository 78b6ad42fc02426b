use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::{DynamicImage, ImageFormat};

use crate::cli::CompressionLevel;
use crate::error::SpritecutError;

/// Save an image as PNG, optionally with compression
pub fn save_png(img: &DynamicImage, path: &Path, compress: Option<CompressionLevel>) -> Result<()> {
    // Encode to PNG in memory
    let mut png_data = Cursor::new(Vec::new());
    img.write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| SpritecutError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    let output_data = if let Some(level) = compress {
        let opts = match level {
            CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
            CompressionLevel::Max => oxipng::Options::max_compression(),
        };
        oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
            SpritecutError::PngCompress {
                path: path.to_path_buf(),
                message: e.to_string(),
            }
        })?
    } else {
        png_data.into_inner()
    };

    fs::write(path, output_data).map_err(|e| SpritecutError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn checker() -> DynamicImage {
        let mut img = RgbaImage::new(8, 8);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            if (x + y) % 2 == 0 {
                *pixel = Rgba([200, 100, 50, 128]);
            }
        }
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn test_save_png_roundtrips_pixels() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.png");
        let img = checker();

        save_png(&img, &path, None).expect("save");

        let loaded = image::open(&path).expect("open");
        assert_eq!(loaded.into_rgba8(), img.into_rgba8());
    }

    #[test]
    fn test_save_png_compressed_is_lossless() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.png");
        let img = checker();

        save_png(&img, &path, Some(CompressionLevel::Level(1))).expect("save");

        let loaded = image::open(&path).expect("open");
        assert_eq!(loaded.into_rgba8(), img.into_rgba8());
    }

    #[test]
    fn test_save_png_missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("out.png");

        let err = save_png(&checker(), &path, None).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SpritecutError>(),
            Some(SpritecutError::OutputWrite { .. })
        ));
    }
}

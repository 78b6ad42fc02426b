use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::DynamicImage;
use log::{debug, info};

use crate::cli::{CompressionLevel, ResizeFilter};
use crate::error::SpritecutError;
use crate::output::save_png;
use crate::sprite::{basename, collect_png_files, load_image, normalize};

/// Default width of each normalized half
pub const DEFAULT_TARGET_WIDTH: u32 = 480;
/// Default height of each normalized half
pub const DEFAULT_TARGET_HEIGHT: u32 = 800;

/// Output files written for one input image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HalfPair {
    pub left: PathBuf,
    pub right: PathBuf,
}

/// Summary of a directory run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HalfSplitReport {
    /// Outputs in input order
    pub pairs: Vec<HalfPair>,
}

impl HalfSplitReport {
    pub fn processed(&self) -> usize {
        self.pairs.len()
    }

    pub fn written(&self) -> usize {
        self.pairs.len() * 2
    }
}

/// Splits images into left/right halves and normalizes each half
#[derive(Debug, Clone)]
pub struct HalfSplitter {
    pub target_width: u32,
    pub target_height: u32,
    pub filter: ResizeFilter,
    pub compress: Option<CompressionLevel>,
}

impl Default for HalfSplitter {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET_WIDTH, DEFAULT_TARGET_HEIGHT)
    }
}

impl HalfSplitter {
    pub fn new(target_width: u32, target_height: u32) -> Self {
        Self {
            target_width,
            target_height,
            filter: ResizeFilter::default(),
            compress: None,
        }
    }

    pub fn filter(mut self, filter: ResizeFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn compress(mut self, compress: Option<CompressionLevel>) -> Self {
        self.compress = compress;
        self
    }

    /// Process every `*.png` in `input_dir`, in lexicographic order.
    ///
    /// Finding no files is not an error: nothing is written and the report is empty.
    /// The first failing file aborts the rest of the batch.
    pub fn process_directory(&self, input_dir: &Path, output_dir: &Path) -> Result<HalfSplitReport> {
        if !input_dir.is_dir() {
            return Err(SpritecutError::NotADirectory(input_dir.to_path_buf()).into());
        }

        let files = collect_png_files(input_dir)?;
        if files.is_empty() {
            info!("No PNG files found in {}", input_dir.display());
            return Ok(HalfSplitReport::default());
        }

        fs::create_dir_all(output_dir).with_context(|| {
            format!("failed to create output directory: {}", output_dir.display())
        })?;

        info!("Found {} PNG files to process", files.len());

        let mut report = HalfSplitReport::default();
        for (i, path) in files.iter().enumerate() {
            info!("[{}/{}]", i + 1, files.len());
            report.pairs.push(self.process_image(path, output_dir)?);
        }

        info!("Successfully processed {} images", report.processed());
        info!(
            "Created {} output files in {}",
            report.written(),
            output_dir.display()
        );

        Ok(report)
    }

    /// Split one image and write `{basename}L.png` and `{basename}R.png` to `output_dir`.
    ///
    /// Odd widths give the right half the extra column.
    pub fn process_image(&self, input_path: &Path, output_dir: &Path) -> Result<HalfPair> {
        let img = load_image(input_path)?;
        let (width, height) = (img.width(), img.height());
        let name = basename(input_path);

        info!("Processing {}: {}x{}", name, width, height);

        let mid_x = width / 2;
        if mid_x == 0 || height == 0 {
            return Err(SpritecutError::EmptyImage {
                path: input_path.to_path_buf(),
                width: mid_x,
                height,
            }
            .into());
        }

        let left_half = img.crop_imm(0, 0, mid_x, height);
        let right_half = img.crop_imm(mid_x, 0, width - mid_x, height);
        debug!(
            "  Split into halves: {}x{} and {}x{}",
            left_half.width(),
            left_half.height(),
            right_half.width(),
            right_half.height()
        );

        let left = self.write_half(&left_half, output_dir.join(format!("{}L.png", name)), "left")?;
        let right =
            self.write_half(&right_half, output_dir.join(format!("{}R.png", name)), "right")?;

        Ok(HalfPair { left, right })
    }

    fn write_half(&self, half: &DynamicImage, path: PathBuf, side: &str) -> Result<PathBuf> {
        let processed = normalize(
            half,
            self.target_height,
            self.target_width,
            self.filter.to_image_filter(),
        );
        save_png(&processed, &path, self.compress)?;
        info!(
            "  Saved {}: {} ({}x{})",
            side,
            path.display(),
            processed.width(),
            processed.height()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    /// Left half red, right half blue
    fn write_two_tone(path: &Path, width: u32, height: u32) {
        let mut img = RgbaImage::new(width, height);
        for (x, _, pixel) in img.enumerate_pixels_mut() {
            *pixel = if x < width / 2 {
                Rgba([255, 0, 0, 255])
            } else {
                Rgba([0, 0, 255, 255])
            };
        }
        img.save(path).expect("save");
    }

    fn small_splitter() -> HalfSplitter {
        HalfSplitter::new(48, 80).filter(ResizeFilter::Nearest)
    }

    #[test]
    fn test_default_targets() {
        let splitter = HalfSplitter::default();
        assert_eq!(splitter.target_width, 480);
        assert_eq!(splitter.target_height, 800);
        assert_eq!(splitter.filter, ResizeFilter::Lanczos3);
        assert_eq!(splitter.compress, None);
    }

    #[test]
    fn test_process_image_writes_normalized_halves() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("hero.png");
        // Same aspect as 3840x2160, scaled down
        write_two_tone(&input, 384, 216);
        let out = dir.path().join("out");
        fs::create_dir(&out).expect("mkdir");

        let pair = small_splitter().process_image(&input, &out).expect("process");

        assert_eq!(pair.left, out.join("heroL.png"));
        assert_eq!(pair.right, out.join("heroR.png"));

        let left = image::open(&pair.left).expect("open left").into_rgba8();
        let right = image::open(&pair.right).expect("open right").into_rgba8();
        assert_eq!(left.dimensions(), (48, 80));
        assert_eq!(right.dimensions(), (48, 80));
        assert!(left.pixels().all(|p| *p == Rgba([255, 0, 0, 255])));
        assert!(right.pixels().all(|p| *p == Rgba([0, 0, 255, 255])));
    }

    #[test]
    fn test_process_image_odd_width() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("odd.png");
        RgbaImage::new(9, 4).save(&input).expect("save");

        // Target wide enough that nothing is cropped, so widths show the split
        let pair = HalfSplitter::new(100, 4)
            .process_image(&input, dir.path())
            .expect("process");

        let left = image::open(&pair.left).expect("open left");
        let right = image::open(&pair.right).expect("open right");
        assert_eq!((left.width(), left.height()), (4, 4));
        assert_eq!((right.width(), right.height()), (5, 4));
    }

    #[test]
    fn test_process_image_too_narrow() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("sliver.png");
        RgbaImage::new(1, 10).save(&input).expect("save");

        let err = small_splitter()
            .process_image(&input, dir.path())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SpritecutError>(),
            Some(SpritecutError::EmptyImage { .. })
        ));
    }

    #[test]
    fn test_process_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("in");
        fs::create_dir(&input).expect("mkdir");
        write_two_tone(&input.join("b.png"), 40, 20);
        write_two_tone(&input.join("a.png"), 40, 20);
        fs::write(input.join("readme.txt"), b"skip me").expect("write");
        let out = dir.path().join("nested").join("out");

        let report = small_splitter()
            .process_directory(&input, &out)
            .expect("process");

        assert_eq!(report.processed(), 2);
        assert_eq!(report.written(), 4);
        assert_eq!(report.pairs[0].left, out.join("aL.png"));
        assert_eq!(report.pairs[1].right, out.join("bR.png"));
        for name in ["aL.png", "aR.png", "bL.png", "bR.png"] {
            assert!(out.join(name).is_file(), "{name} missing");
        }
    }

    #[test]
    fn test_process_directory_without_pngs_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let input = dir.path().join("in");
        fs::create_dir(&input).expect("mkdir");
        let out = dir.path().join("out");

        let report = small_splitter()
            .process_directory(&input, &out)
            .expect("process");

        assert_eq!(report, HalfSplitReport::default());
        assert!(!out.exists());
    }

    #[test]
    fn test_process_directory_missing_input() {
        let dir = tempfile::tempdir().expect("tempdir");

        let err = small_splitter()
            .process_directory(&dir.path().join("nope"), dir.path())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SpritecutError>(),
            Some(SpritecutError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_process_directory_aborts_on_bad_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        write_two_tone(&dir.path().join("a.png"), 40, 20);
        fs::write(dir.path().join("b.png"), b"garbage").expect("write");
        write_two_tone(&dir.path().join("c.png"), 40, 20);
        let out = dir.path().join("out");

        let err = small_splitter()
            .process_directory(dir.path(), &out)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<SpritecutError>(),
            Some(SpritecutError::ImageLoad { .. })
        ));
        assert!(out.join("aL.png").is_file());
        assert!(!out.join("cL.png").exists());
    }
}

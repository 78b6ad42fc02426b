use image::{DynamicImage, ImageBuffer, Pixel, Primitive};
use serde::Serialize;

/// Half-open row range `[start, end)` of a sprite within a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RowBand {
    pub start: u32,
    pub end: u32,
}

impl RowBand {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start < end, "empty band {start}..{end}");
        Self { start, end }
    }

    pub fn height(&self) -> u32 {
        self.end - self.start
    }
}

impl From<(u32, u32)> for RowBand {
    fn from((start, end): (u32, u32)) -> Self {
        Self::new(start, end)
    }
}

/// Find the bands of rows that contain at least one non-transparent pixel.
///
/// Images without an alpha channel have content on every row.
pub fn find_bands(img: &DynamicImage) -> Vec<RowBand> {
    let height = img.height();

    if !img.color().has_alpha() {
        return if height > 0 {
            vec![RowBand::new(0, height)]
        } else {
            Vec::new()
        };
    }

    // Compare alpha at native depth; narrowing to 8 bits would zero faint 16-bit alpha
    let row_has_content = match img {
        DynamicImage::ImageLumaA8(buf) => rows_with_alpha(buf),
        DynamicImage::ImageLumaA16(buf) => rows_with_alpha(buf),
        DynamicImage::ImageRgba8(buf) => rows_with_alpha(buf),
        DynamicImage::ImageRgba16(buf) => rows_with_alpha(buf),
        DynamicImage::ImageRgba32F(buf) => rows_with_alpha(buf),
        other => rows_with_alpha(&other.to_rgba32f()),
    };

    bands_from_rows(row_has_content)
}

/// Per row, whether any pixel has alpha above zero. Alpha is the last channel.
fn rows_with_alpha<P: Pixel>(buf: &ImageBuffer<P, Vec<P::Subpixel>>) -> Vec<bool> {
    let transparent = <P::Subpixel as Primitive>::DEFAULT_MIN_VALUE;
    buf.rows()
        .map(|mut row| {
            row.any(|pixel| {
                pixel
                    .channels()
                    .last()
                    .is_some_and(|alpha| *alpha > transparent)
            })
        })
        .collect()
}

/// Group consecutive `true` rows into bands
fn bands_from_rows(rows: impl IntoIterator<Item = bool>) -> Vec<RowBand> {
    let mut bands = Vec::new();
    let mut band_start = None;
    let mut height = 0u32;

    for (y, has_content) in (0u32..).zip(rows) {
        match (band_start, has_content) {
            (None, true) => band_start = Some(y),
            (Some(start), false) => {
                bands.push(RowBand::new(start, y));
                band_start = None;
            }
            _ => {}
        }
        height = y + 1;
    }

    if let Some(start) = band_start {
        bands.push(RowBand::new(start, height));
    }

    bands
}

use image::{DynamicImage, imageops::FilterType};

/// Resize an image to `target_height` (preserving aspect ratio), then crop it
/// symmetrically to `target_width`.
///
/// Images whose resized width is already at most `target_width` are returned
/// as resized, without padding: the output always has the target height but
/// may be narrower than the target width.
pub fn normalize(
    img: &DynamicImage,
    target_height: u32,
    target_width: u32,
    filter: FilterType,
) -> DynamicImage {
    let new_width = scaled_width(img.width(), img.height(), target_height);
    let resized = img.resize_exact(new_width, target_height, filter);

    match crop_window(new_width, target_width) {
        Some((left, right)) => resized.crop_imm(left, 0, right - left, target_height),
        None => resized,
    }
}

/// Width after scaling `width x height` to `target_height`, rounded down.
///
/// Never returns 0 so the resampler always gets a usable size.
pub fn scaled_width(width: u32, height: u32, target_height: u32) -> u32 {
    let scale = f64::from(target_height) / f64::from(height.max(1));
    let new_width = (f64::from(width) * scale).floor();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let new_width = new_width.min(f64::from(u32::MAX)) as u32;
    new_width.max(1)
}

/// Column range `[left, right)` kept when cropping `resized_width` down to
/// `target_width`, or `None` if no crop is needed.
pub fn crop_window(resized_width: u32, target_width: u32) -> Option<(u32, u32)> {
    if resized_width > target_width {
        let left = (resized_width - target_width) / 2;
        Some((left, left + target_width))
    } else {
        None
    }
}

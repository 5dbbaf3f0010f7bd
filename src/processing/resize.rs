//! Resize stage: direct resize to exact output dimensions.

use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};
use tracing::debug;

use crate::core::OptimizeSettings;

/// Resizes `image` to exactly the target dimensions from `settings`.
///
/// Both dimensions are forced to the configured values with no aspect-ratio
/// enforcement. Lanczos3 keeps downscaled edges free of aliasing.
pub(crate) fn apply_resize(image: &DynamicImage, settings: &OptimizeSettings) -> DynamicImage {
    let resized = image.resize_exact(
        settings.target_width,
        settings.target_height,
        FilterType::Lanczos3,
    );

    debug!(
        "Resized {}×{} → {}×{}",
        image.width(),
        image.height(),
        resized.width(),
        resized.height()
    );

    resized
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn resizes_to_exact_dimensions_ignoring_aspect() {
        let source = DynamicImage::ImageRgb8(RgbImage::new(80, 21));
        let settings = OptimizeSettings {
            target_width: 16,
            target_height: 9,
            palette_size: 256,
        };

        let resized = apply_resize(&source, &settings);
        assert_eq!((resized.width(), resized.height()), (16, 9));
    }
}

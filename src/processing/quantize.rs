//! Quantization stage: RGB normalization and adaptive palette reduction.

use color_quant::NeuQuant;
use image::DynamicImage;
use tracing::debug;

use crate::utils::{OptimizerError, OptimizerResult};

/// NeuQuant sampling factor; 1 means the palette is learned from every pixel.
const SAMPLE_FACTOR: i32 = 1;

/// An image reduced to a bounded palette: one color table plus one index per pixel.
pub(crate) struct IndexedImage {
    pub width: u32,
    pub height: u32,
    /// RGB triples, 3 bytes per palette entry
    pub palette: Vec<u8>,
    /// One palette index per pixel, row-major
    pub indices: Vec<u8>,
}

/// Reduces `image` to an adaptive palette of at most `palette_size` colors.
///
/// The image is first flattened to 3-channel RGB (alpha dropped), then the
/// palette is trained on the image's own color distribution rather than
/// taken from a fixed table.
pub(crate) fn quantize(image: &DynamicImage, palette_size: u32) -> OptimizerResult<IndexedImage> {
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    if width == 0 || height == 0 {
        return Err(OptimizerError::processing("Cannot quantize an empty image"));
    }

    // NeuQuant trains on RGBA samples; a constant opaque alpha keeps the fit
    // purely about the color channels.
    let rgba: Vec<u8> = rgb
        .pixels()
        .flat_map(|p| [p[0], p[1], p[2], 0xFF])
        .collect();

    let quant = NeuQuant::new(SAMPLE_FACTOR, palette_size as usize, &rgba);
    let indices: Vec<u8> = rgba
        .chunks_exact(4)
        .map(|px| quant.index_of(px) as u8)
        .collect();
    let palette = quant.color_map_rgb();

    debug!(
        "Quantized {}×{} to ≤{} colors ({} palette entries)",
        width,
        height,
        palette_size,
        palette.len() / 3
    );

    Ok(IndexedImage {
        width,
        height,
        palette,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::collections::HashSet;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x * 8 % 256) as u8, (y * 8 % 256) as u8, ((x + y) % 256) as u8])
        }))
    }

    #[test]
    fn preserves_dimensions_and_bounds_palette() {
        let palette_size = 16;
        let indexed = quantize(&gradient(64, 32), palette_size).unwrap();

        assert_eq!((indexed.width, indexed.height), (64, 32));
        assert_eq!(indexed.indices.len(), 64 * 32);
        assert!(indexed.palette.len() <= palette_size as usize * 3);

        let distinct: HashSet<u8> = indexed.indices.iter().copied().collect();
        assert!(distinct.len() <= palette_size as usize);
    }

    #[test]
    fn indices_stay_inside_the_palette() {
        let indexed = quantize(&gradient(32, 32), 8).unwrap();
        let entries = (indexed.palette.len() / 3) as u8;
        assert!(indexed.indices.iter().all(|&i| i < entries));
    }

    #[test]
    fn alpha_is_flattened_before_quantization() {
        let rgba = DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
            4,
            4,
            image::Rgba([200, 100, 50, 0]),
        ));
        let indexed = quantize(&rgba, 8).unwrap();
        assert_eq!(indexed.indices.len(), 16);
    }
}

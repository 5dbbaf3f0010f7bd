//! Encode stage: indexed-color PNG emission with maximal lossless compression.

use tracing::{debug, warn};

use super::quantize::IndexedImage;
use crate::utils::{OptimizerError, OptimizerResult};

/// Encodes `image` as an indexed-color PNG.
///
/// The `png` encoder writes the palette and index data at its best
/// compression level; the result then goes through an oxipng pass at
/// maximum effort. An oxipng failure falls back to the plain encode
/// rather than failing the run.
pub(crate) fn encode_png(image: &IndexedImage) -> OptimizerResult<Vec<u8>> {
    let mut buf = Vec::new();

    let mut encoder = png::Encoder::new(&mut buf, image.width, image.height);
    encoder.set_color(png::ColorType::Indexed);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_palette(image.palette.clone());
    encoder.set_compression(png::Compression::Best);

    let mut writer = encoder
        .write_header()
        .map_err(|e| OptimizerError::processing(format!("PNG header write failed: {e}")))?;
    writer
        .write_image_data(&image.indices)
        .map_err(|e| OptimizerError::processing(format!("PNG encode failed: {e}")))?;
    writer
        .finish()
        .map_err(|e| OptimizerError::processing(format!("PNG encode failed: {e}")))?;

    match oxipng::optimize_from_memory(&buf, &oxipng::Options::max_compression()) {
        Ok(optimized) => {
            debug!(
                "oxipng pass: {} → {} bytes",
                buf.len(),
                optimized.len()
            );
            Ok(optimized)
        }
        Err(e) => {
            warn!("oxipng pass failed, keeping the plain encode: {e}");
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn encoded_png_decodes_to_same_dimensions() {
        // 4 entries: black, red, green, blue
        let image = IndexedImage {
            width: 4,
            height: 2,
            palette: vec![0, 0, 0, 255, 0, 0, 0, 255, 0, 0, 0, 255],
            indices: vec![0, 1, 2, 3, 3, 2, 1, 0],
        };

        let bytes = encode_png(&image).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (4, 2));
    }
}

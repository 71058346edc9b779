use std::io::Cursor;

use anyhow::Context;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{ImageOutputFormat, Rgb, RgbImage};

/// Fill color of every placeholder image (light blue).
pub const PLACEHOLDER_COLOR: Rgb<u8> = Rgb([173, 216, 230]);

/// Render a solid-color placeholder raster and return it as PNG bytes.
pub fn placeholder_png(width: u32, height: u32) -> anyhow::Result<Vec<u8>> {
    let img = RgbImage::from_pixel(width, height, PLACEHOLDER_COLOR);
    let mut buffer = Cursor::new(Vec::new());
    img.write_to(&mut buffer, ImageOutputFormat::Png)
        .with_context(|| format!("failed to encode {}x{} placeholder as PNG", width, height))?;
    Ok(buffer.into_inner())
}

/// PNG placeholder, base64-encoded for transport in a JSON body.
pub fn placeholder_base64(width: u32, height: u32) -> anyhow::Result<String> {
    let png = placeholder_png(width, height)?;
    Ok(STANDARD.encode(png))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GenericImageView;

    #[test]
    fn placeholder_decodes_to_requested_dimensions() {
        let png = placeholder_png(512, 512).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.dimensions(), (512, 512));
    }

    #[test]
    fn placeholder_is_solid_light_blue() {
        let png = placeholder_png(16, 8).unwrap();
        let decoded = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (16, 8));
        for pixel in decoded.pixels() {
            assert_eq!(*pixel, PLACEHOLDER_COLOR);
        }
    }

    #[test]
    fn base64_round_trips_to_png() {
        let encoded = placeholder_base64(32, 32).unwrap();
        let bytes = STANDARD.decode(encoded).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.dimensions(), (32, 32));
    }
}

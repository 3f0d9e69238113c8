use image::{DynamicImage, GenericImageView};
use log::warn;

/// Fixed enhancement parameters, tuned for low-contrast identity-card scans.
const SCALE_FACTOR: f32 = 2.0;
const CONTRAST_FACTOR: f32 = 1.5;
const BRIGHTNESS_FACTOR: f32 = 1.2;

/// ImagePreprocessor raises OCR legibility of document photos before they are
/// handed to the engine: upscaling for small print, then a saturation and
/// brightness boost in HSV space.
pub struct ImagePreprocessor;

impl ImagePreprocessor {
    /// Enhance an image for OCR. Total: a degenerate input is returned
    /// unchanged rather than aborting the pipeline.
    pub fn enhance(image: &DynamicImage) -> DynamicImage {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            warn!("skipping enhancement of empty {}x{} image", width, height);
            return image.clone();
        }

        // Step 1: upscale with bicubic interpolation to raise effective DPI.
        let new_width = (width as f32 * SCALE_FACTOR) as u32;
        let new_height = (height as f32 * SCALE_FACTOR) as u32;
        let scaled = image.resize_exact(new_width, new_height, image::imageops::FilterType::CatmullRom);

        // Step 2: per-pixel saturation and brightness boost, clamped.
        let mut rgb = scaled.to_rgb8();
        for pixel in rgb.pixels_mut() {
            let [r, g, b] = pixel.0;
            let (h, s, v) = rgb_to_hsv(r, g, b);
            let s = (s * CONTRAST_FACTOR).min(1.0);
            let v = (v * BRIGHTNESS_FACTOR).min(1.0);
            pixel.0 = hsv_to_rgb(h, s, v);
        }

        DynamicImage::ImageRgb8(rgb)
    }
}

fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta).rem_euclid(6.0))
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let s = if max == 0.0 { 0.0 } else { delta / max };

    (h, s, max)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [u8; 3] {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    [
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    #[test]
    fn test_enhance_doubles_dimensions() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(40, 30, Rgb([128, 128, 128])));
        let enhanced = ImagePreprocessor::enhance(&image);
        assert_eq!(enhanced.dimensions(), (80, 60));
    }

    #[test]
    fn test_enhance_brightens_gray_pixels() {
        // Gray has zero saturation, so only the brightness factor applies:
        // 100 * 1.2 = 120.
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([100, 100, 100])));
        let enhanced = ImagePreprocessor::enhance(&image).to_rgb8();
        assert_eq!(enhanced.get_pixel(0, 0), &Rgb([120, 120, 120]));
    }

    #[test]
    fn test_enhance_saturates_colored_pixels() {
        // (200, 100, 100): s = 0.5 -> 0.75, v = 200/255 -> 240/255.
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([200, 100, 100])));
        let enhanced = ImagePreprocessor::enhance(&image).to_rgb8();
        assert_eq!(enhanced.get_pixel(0, 0), &Rgb([240, 60, 60]));
    }

    #[test]
    fn test_enhance_clamps_bright_pixels() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([250, 250, 250])));
        let enhanced = ImagePreprocessor::enhance(&image).to_rgb8();
        assert_eq!(enhanced.get_pixel(0, 0), &Rgb([255, 255, 255]));
    }

    #[test]
    fn test_hsv_round_trip() {
        for (r, g, b) in [(0, 0, 0), (255, 255, 255), (12, 200, 33), (255, 0, 128)] {
            let (h, s, v) = rgb_to_hsv(r, g, b);
            assert_eq!(hsv_to_rgb(h, s, v), [r, g, b]);
        }
    }
}

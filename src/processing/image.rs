use crate::utils::ScanError;
use image::{DynamicImage, GrayImage, ImageFormat};
use imageproc::contrast::equalize_histogram;
use imageproc::filter::median_filter;
use log::debug;
use std::io::Cursor;
use std::path::Path;

/// Median filter radius used for denoising, in pixels.
const DENOISE_RADIUS: u32 = 1;

pub struct ImageProcessor;

impl ImageProcessor {
    /// Read an uploaded image, rejecting paths that are not regular files.
    pub fn read_image_file(image_path: &Path) -> Result<Vec<u8>, ScanError> {
        if !image_path.is_file() {
            return Err(ScanError::InvalidInput(format!(
                "No image file provided: {}",
                image_path.display()
            )));
        }
        Ok(std::fs::read(image_path)?)
    }

    /// Grayscale, denoise and contrast-normalize an encoded image.
    /// Returns the result encoded as PNG.
    pub fn preprocess_bytes(image_bytes: &[u8]) -> Result<Vec<u8>, ScanError> {
        let img = image::load_from_memory(image_bytes)
            .map_err(|e| ScanError::ImageProcessingError(format!("Failed to load image: {}", e)))?;
        debug!("Preprocessing {}x{} image", img.width(), img.height());

        let enhanced = Self::enhance(&img.to_luma8());

        let mut buffer = Vec::new();
        DynamicImage::ImageLuma8(enhanced)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(|e| {
                ScanError::ImageProcessingError(format!("Failed to encode processed image: {}", e))
            })?;
        Ok(buffer)
    }

    fn enhance(gray: &GrayImage) -> GrayImage {
        let denoised = median_filter(gray, DENOISE_RADIUS, DENOISE_RADIUS);
        equalize_histogram(&denoised)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb, RgbImage};

    fn encoded_sample() -> Vec<u8> {
        let img = RgbImage::from_fn(16, 8, |x, _| {
            if x < 8 {
                Rgb([40, 60, 80])
            } else {
                Rgb([200, 210, 220])
            }
        });
        let mut buffer = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn test_preprocess_outputs_grayscale_png() {
        let out = ImageProcessor::preprocess_bytes(&encoded_sample()).unwrap();
        let decoded = image::load_from_memory(&out).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (16, 8));
        assert!(matches!(decoded, DynamicImage::ImageLuma8(_)));
    }

    #[test]
    fn test_contrast_is_stretched() {
        let gray = GrayImage::from_fn(16, 8, |x, _| if x < 8 { Luma([100]) } else { Luma([120]) });
        let enhanced = ImageProcessor::enhance(&gray);
        let dark = enhanced.get_pixel(0, 0)[0];
        let light = enhanced.get_pixel(15, 0)[0];
        assert!(light - dark > 20);
    }

    #[test]
    fn test_missing_file() {
        let err = ImageProcessor::read_image_file(Path::new("/nonexistent/card.png")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: No image file provided: /nonexistent/card.png");
    }

    #[test]
    fn test_garbage_is_rejected() {
        let err = ImageProcessor::preprocess_bytes(b"not an image").unwrap_err();
        assert!(matches!(err, ScanError::ImageProcessingError(_)));
    }
}

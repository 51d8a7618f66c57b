use image::ImageReader;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

use crate::domain::errors::DomainError;

/// Pixel dimensions of an uploaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Read dimensions from encoded image bytes.
    ///
    /// The format is sniffed from the content, not from the file name.
    /// Only the header is parsed; pixel data is not decoded.
    pub fn read(data: &[u8]) -> Result<Self, DomainError> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| DomainError::ImageDecode(e.to_string()))?;

        if reader.format().is_none() {
            return Err(DomainError::ImageDecode(
                "Unrecognized image format".to_string(),
            ));
        }

        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| DomainError::ImageDecode(e.to_string()))?;

        Ok(Self { width, height })
    }

    pub fn width_string(&self) -> String {
        self.width.to_string()
    }

    pub fn height_string(&self) -> String {
        self.height.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};

    fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]));
        let mut buffer = Vec::new();
        img.write_to(&mut Cursor::new(&mut buffer), format).unwrap();
        buffer
    }

    #[test]
    fn test_read_png_dimensions() {
        let dims = ImageDimensions::read(&encode(10, 10, ImageFormat::Png)).unwrap();
        assert_eq!(dims, ImageDimensions::new(10, 10));
    }

    #[test]
    fn test_read_non_square_gif() {
        let dims = ImageDimensions::read(&encode(64, 17, ImageFormat::Gif)).unwrap();
        assert_eq!(dims.width_string(), "64");
        assert_eq!(dims.height_string(), "17");
    }

    #[test]
    fn test_read_rejects_garbage() {
        let result = ImageDimensions::read(b"definitely not an image");
        assert!(matches!(result, Err(DomainError::ImageDecode(_))));
    }

    #[test]
    fn test_read_rejects_empty_input() {
        assert!(ImageDimensions::read(&[]).is_err());
    }

    #[test]
    fn test_read_rejects_truncated_png() {
        let png = encode(8, 8, ImageFormat::Png);
        assert!(ImageDimensions::read(&png[..12]).is_err());
    }
}

use std::io::Cursor;
use std::path::Path;

use thiserror::Error;

use super::ImageFormat;

#[derive(Debug, Error)]
pub enum ImagePayloadError {
    #[error("image is empty")]
    Empty,
    #[error("could not read image file: {0}")]
    Io(#[from] std::io::Error),
    #[error("not a readable image: {0}")]
    Decode(String),
}

/// Image bytes handed to the text extractor. Only PNG and JPEG content is
/// ever held; anything else the decoder understands is re-encoded as PNG.
#[derive(Clone)]
pub struct ImagePayload {
    pub format: ImageFormat,
    pub width: u32,
    pub height: u32,
    bytes: Vec<u8>,
}

impl std::fmt::Debug for ImagePayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePayload")
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImagePayload {
    pub fn build_from_bytes(bytes: Vec<u8>) -> Result<Self, ImagePayloadError> {
        if bytes.is_empty() {
            return Err(ImagePayloadError::Empty);
        }

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| ImagePayloadError::Decode(e.to_string()))?;
        let detected = image::guess_format(&bytes)
            .ok()
            .and_then(ImageFormat::from_detected);

        let (format, bytes) = match detected {
            Some(format) => (format, bytes),
            None => {
                log::debug!("[IMAGE_PAYLOAD] Re-encoding unsupported format as PNG");
                let mut png = Vec::new();
                decoded
                    .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
                    .map_err(|e| ImagePayloadError::Decode(e.to_string()))?;
                (ImageFormat::PNG, png)
            }
        };

        log::debug!(
            "[IMAGE_PAYLOAD] Built {:?} payload: {}x{}, {} bytes",
            format,
            decoded.width(),
            decoded.height(),
            bytes.len()
        );

        Ok(Self {
            format,
            width: decoded.width(),
            height: decoded.height(),
            bytes,
        })
    }

    pub async fn load_from_path(path: &Path) -> Result<Self, ImagePayloadError> {
        log::info!("[IMAGE_PAYLOAD] Loading image from {:?}", path);
        let bytes = tokio::fs::read(path).await?;
        Self::build_from_bytes(bytes)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
pub(crate) fn encode_test_image(format: image::ImageFormat) -> Vec<u8> {
    let pixels = image::RgbImage::from_pixel(8, 4, image::Rgb([255, 255, 255]));
    let mut encoded = Vec::new();
    image::DynamicImage::ImageRgb8(pixels)
        .write_to(&mut Cursor::new(&mut encoded), format)
        .unwrap();
    encoded
}

//! Image normalization: decode, RGB conversion, JPEG re-encode.

use std::io::Cursor;
use std::sync::Arc;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use common::MediaError;
use domain::{ImageAttachment, IMAGE_CONTENT_TYPE, IMAGE_EXTENSION, JPEG_QUALITY};

use super::heif::{is_still_photo_container, StillImageDecoder};

/// Converts an uploaded image into the canonical stored form: three-channel
/// JPEG at a fixed quality, extension forced to `.jpg`.
///
/// Decoding tries the general-purpose decoder first and falls back to the
/// still-photo decoder for HEIF/HEIC uploads. Failures come back as a
/// classified [`MediaError`] and abort the persist.
pub struct ImageNormalizer {
    quality: u8,
    fallback: Option<Arc<dyn StillImageDecoder>>,
}

impl Default for ImageNormalizer {
    fn default() -> Self {
        Self::new(JPEG_QUALITY)
    }
}

impl ImageNormalizer {
    pub fn new(quality: u8) -> Self {
        Self {
            quality,
            fallback: default_still_decoder(),
        }
    }

    /// Replace the still-photo fallback decoder.
    pub fn with_fallback(mut self, decoder: Arc<dyn StillImageDecoder>) -> Self {
        self.fallback = Some(decoder);
        self
    }

    /// Produce the normalized attachment for an upload.
    ///
    /// The original base filename (the portion before the first `.`) is kept;
    /// only the extension and content type change.
    pub fn normalize(&self, upload: &ImageAttachment) -> Result<ImageAttachment, MediaError> {
        let decoded = match image::load_from_memory(&upload.bytes) {
            Ok(img) => img,
            Err(primary) => self.decode_still_photo(&upload.bytes, &primary)?,
        };

        let rgb = decoded.to_rgb8();

        let mut output = Cursor::new(Vec::new());
        JpegEncoder::new_with_quality(&mut output, self.quality)
            .encode_image(&rgb)
            .map_err(|e| MediaError::Encode(e.to_string()))?;

        Ok(ImageAttachment::new(
            format!("{}.{}", upload.stem(), IMAGE_EXTENSION),
            IMAGE_CONTENT_TYPE,
            output.into_inner(),
        ))
    }

    fn decode_still_photo(
        &self,
        bytes: &[u8],
        primary: &image::ImageError,
    ) -> Result<DynamicImage, MediaError> {
        let Some(fallback) = &self.fallback else {
            return Err(if is_still_photo_container(bytes) {
                MediaError::UnsupportedContainer(
                    "still-photo container without a fallback decoder".to_string(),
                )
            } else {
                MediaError::UnrecognizedFormat(primary.to_string())
            });
        };

        match fallback.decode(bytes) {
            Ok(raw) => raw.into_image(),
            Err(err) => Err(if is_still_photo_container(bytes) {
                MediaError::CorruptImage(err.to_string())
            } else {
                MediaError::UnrecognizedFormat(primary.to_string())
            }),
        }
    }
}

#[cfg(feature = "heif")]
fn default_still_decoder() -> Option<Arc<dyn StillImageDecoder>> {
    Some(Arc::new(super::heif::HeifDecoder))
}

#[cfg(not(feature = "heif"))]
fn default_still_decoder() -> Option<Arc<dyn StillImageDecoder>> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::heif::{PixelMode, RawPixels};
    use image::ImageFormat;

    fn png_upload() -> ImageAttachment {
        let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([120, 20, 40, 255]));
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        ImageAttachment::new("flag.png", "image/png", buf.into_inner())
    }

    fn heic_upload() -> ImageAttachment {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[0, 0, 0, 24]);
        bytes.extend_from_slice(b"ftyp");
        bytes.extend_from_slice(b"heic");
        bytes.extend_from_slice(&[0; 12]);
        ImageAttachment::new("shot.heic", "image/heic", bytes)
    }

    struct StubStillDecoder;

    impl StillImageDecoder for StubStillDecoder {
        fn decode(&self, _bytes: &[u8]) -> Result<RawPixels, MediaError> {
            Ok(RawPixels {
                mode: PixelMode::Rgba,
                width: 2,
                height: 2,
                data: vec![200; 16],
            })
        }
    }

    struct FailingStillDecoder;

    impl StillImageDecoder for FailingStillDecoder {
        fn decode(&self, _bytes: &[u8]) -> Result<RawPixels, MediaError> {
            Err(MediaError::CorruptImage("truncated payload".to_string()))
        }
    }

    #[test]
    fn test_png_becomes_jpeg_with_jpg_extension() {
        let normalized = ImageNormalizer::default().normalize(&png_upload()).unwrap();

        assert_eq!(normalized.filename, "flag.jpg");
        assert_eq!(normalized.content_type, "image/jpeg");
        assert_eq!(
            image::guess_format(&normalized.bytes).unwrap(),
            ImageFormat::Jpeg
        );
    }

    #[test]
    fn test_output_is_three_channel() {
        let normalized = ImageNormalizer::default().normalize(&png_upload()).unwrap();
        let decoded = image::load_from_memory(&normalized.bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn test_still_photo_falls_back_to_second_decoder() {
        let normalizer = ImageNormalizer::default().with_fallback(Arc::new(StubStillDecoder));
        let normalized = normalizer.normalize(&heic_upload()).unwrap();

        assert_eq!(normalized.filename, "shot.jpg");
        assert_eq!(
            image::guess_format(&normalized.bytes).unwrap(),
            ImageFormat::Jpeg
        );
        let decoded = image::load_from_memory(&normalized.bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgb8);
    }

    #[test]
    fn test_corrupt_container_is_classified() {
        let normalizer = ImageNormalizer::default().with_fallback(Arc::new(FailingStillDecoder));
        let err = normalizer.normalize(&heic_upload()).unwrap_err();
        assert!(matches!(err, MediaError::CorruptImage(_)));
    }

    #[test]
    fn test_arbitrary_bytes_are_unrecognized() {
        let normalizer = ImageNormalizer::default().with_fallback(Arc::new(FailingStillDecoder));
        let upload = ImageAttachment::new("notes.txt", "text/plain", b"hello world".to_vec());
        let err = normalizer.normalize(&upload).unwrap_err();
        assert!(matches!(err, MediaError::UnrecognizedFormat(_)));
    }

    #[cfg(not(feature = "heif"))]
    #[test]
    fn test_container_without_fallback_is_unsupported() {
        let err = ImageNormalizer::default()
            .normalize(&heic_upload())
            .unwrap_err();
        assert!(matches!(err, MediaError::UnsupportedContainer(_)));
    }

    #[test]
    fn test_multi_dot_filename_keeps_first_stem() {
        let mut upload = png_upload();
        upload.filename = "flag.backup.png".to_string();
        let normalized = ImageNormalizer::default().normalize(&upload).unwrap();
        assert_eq!(normalized.filename, "flag.jpg");
    }
}

//! Fallback decoding for legacy still-photo containers (HEIF/HEIC).
//!
//! Phone cameras commonly upload HEIC stills that the general-purpose decoder
//! does not handle. The fallback decoder reconstructs a raw pixel buffer from
//! the container's mode/size/data triple; the normalizer rebuilds an image
//! from that.

use common::MediaError;
use image::{DynamicImage, RgbImage, RgbaImage};

/// Pixel layout of a raw decoded buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelMode {
    Rgb,
    Rgba,
}

/// Raw pixel payload recovered from a still-photo container.
#[derive(Clone, Debug)]
pub struct RawPixels {
    pub mode: PixelMode,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RawPixels {
    /// Rebuild an image from the mode/size/data triple.
    pub fn into_image(self) -> Result<DynamicImage, MediaError> {
        let image = match self.mode {
            PixelMode::Rgb => {
                RgbImage::from_raw(self.width, self.height, self.data).map(DynamicImage::ImageRgb8)
            }
            PixelMode::Rgba => RgbaImage::from_raw(self.width, self.height, self.data)
                .map(DynamicImage::ImageRgba8),
        };
        image.ok_or_else(|| {
            MediaError::CorruptImage("pixel buffer does not match declared dimensions".to_string())
        })
    }
}

/// Decoder for still-photo containers the general-purpose decoder rejects.
pub trait StillImageDecoder: Send + Sync {
    fn decode(&self, bytes: &[u8]) -> Result<RawPixels, MediaError>;
}

const HEIF_BRANDS: [&[u8]; 8] = [
    b"heic", b"heix", b"hevc", b"hevx", b"heim", b"heis", b"mif1", b"msf1",
];

/// Sniff the ISO-BMFF `ftyp` box for a HEIF major brand.
pub fn is_still_photo_container(bytes: &[u8]) -> bool {
    if bytes.len() < 12 || &bytes[4..8] != b"ftyp" {
        return false;
    }
    let brand = &bytes[8..12];
    HEIF_BRANDS.iter().any(|known| brand == *known)
}

/// HEIF/HEIC decoder backed by libheif.
#[cfg(feature = "heif")]
pub struct HeifDecoder;

#[cfg(feature = "heif")]
impl StillImageDecoder for HeifDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<RawPixels, MediaError> {
        use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

        let lib_heif = LibHeif::new();
        let context = HeifContext::read_from_bytes(bytes)
            .map_err(|e| MediaError::CorruptImage(e.to_string()))?;
        let handle = context
            .primary_image_handle()
            .map_err(|e| MediaError::CorruptImage(e.to_string()))?;
        let decoded = lib_heif
            .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
            .map_err(|e| MediaError::CorruptImage(e.to_string()))?;

        let planes = decoded.planes();
        let plane = planes
            .interleaved
            .ok_or_else(|| MediaError::CorruptImage("missing interleaved plane".to_string()))?;

        // libheif rows may carry trailing stride padding
        let row_len = plane.width as usize * 3;
        let mut data = Vec::with_capacity(row_len * plane.height as usize);
        for row in plane.data.chunks(plane.stride) {
            data.extend_from_slice(&row[..row_len]);
        }

        Ok(RawPixels {
            mode: PixelMode::Rgb,
            width: plane.width,
            height: plane.height,
            data,
        })
    }
}

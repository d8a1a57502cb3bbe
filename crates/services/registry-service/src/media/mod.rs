//! Image handling for the persist pipeline.

pub mod heif;
pub mod normalizer;

#[cfg(feature = "heif")]
pub use heif::HeifDecoder;
pub use heif::{is_still_photo_container, PixelMode, RawPixels, StillImageDecoder};
pub use normalizer::ImageNormalizer;

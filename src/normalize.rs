//! Input image normalization via the `image` crate.
//!
//! Turns PNG/JPEG/GIF/WebP/BMP/TIFF bytes into tightly packed RGBA8 plus the
//! embedded ICC profile, ready for [`crate::EncodeRequest`].

use std::io::Cursor;

use alloc::vec::Vec;
use enough::Stop;
use image::{DynamicImage, ImageDecoder, ImageReader};
use log::debug;

use crate::encode::EncodeRequest;
use crate::error::NimError;
use crate::pixel::PixelBuffer;

/// An input image decoded to RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    /// `width * height * 4` bytes, row-major RGBA.
    pub pixels: Vec<u8>,
    /// Raw ICC profile, never empty when `Some`.
    pub color_profile: Option<Vec<u8>>,
}

impl DecodedImage {
    /// Check the buffer against the dimensions.
    pub fn pixel_buffer(&self) -> Result<PixelBuffer<'_>, NimError> {
        PixelBuffer::new(&self.pixels, self.width, self.height)
    }

    /// Encode with default settings, embedding the profile if there is one.
    pub fn encode(&self, stop: impl Stop) -> Result<Vec<u8>, NimError> {
        let buffer = self.pixel_buffer()?;
        let mut request = EncodeRequest::new();
        if let Some(profile) = &self.color_profile {
            request = request.with_profile(profile);
        }
        request.encode(&buffer, stop)
    }
}

/// Decode any image format the `image` crate recognizes into RGBA8.
///
/// Fails with [`NimError::Decode`] when the bytes are not a recognizable
/// image.
pub fn normalize(bytes: &[u8]) -> Result<DecodedImage, NimError> {
    let reader = ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let format = reader.format();
    let mut decoder = reader.into_decoder()?;
    let color_profile = decoder.icc_profile()?.filter(|p| !p.is_empty());
    let rgba = DynamicImage::from_decoder(decoder)?.into_rgba8();
    let (width, height) = rgba.dimensions();
    debug!(
        "normalized {format:?} input to {width}x{height} RGBA, icc profile {:?} bytes",
        color_profile.as_ref().map(Vec::len)
    );
    Ok(DecodedImage {
        width,
        height,
        pixels: rgba.into_raw(),
        color_profile,
    })
}

/// Convert encoded image bytes straight to a `.nim` container.
pub fn encode_image(bytes: &[u8], stop: impl Stop) -> Result<Vec<u8>, NimError> {
    normalize(bytes)?.encode(stop)
}

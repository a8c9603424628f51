use alloc::vec::Vec;
use enough::Stop;

#[cfg(feature = "rgb")]
use rgb::FromSlice as _;

use crate::error::NimError;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;
use crate::profile::ColorProfile;

/// Builder for decoding a `.nim` container.
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    /// Reject headers exceeding `limits` before any allocation.
    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput<'a>, NimError> {
        crate::nim::decode(self.data, self.limits, &stop)
    }
}

/// Decoded `.nim` image.
///
/// Pixels are always owned (they come out of the inflater). The color
/// profile borrows from the input bytes; use [`DecodeOutput::into_owned`]
/// to detach it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOutput<'a> {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub profile: ColorProfile<'a>,
}

impl<'a> DecodeOutput<'a> {
    pub(crate) fn new(pixels: Vec<u8>, width: u32, height: u32, profile: ColorProfile<'a>) -> Self {
        Self {
            pixels,
            width,
            height,
            profile,
        }
    }

    /// Access the RGBA pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take the RGBA pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// The embedded color profile bytes, if any.
    pub fn color_profile(&self) -> Option<&[u8]> {
        self.profile.as_bytes()
    }

    /// View the pixels as a validated buffer, e.g. to re-encode them.
    pub fn pixel_buffer(&self) -> Result<PixelBuffer<'_>, NimError> {
        PixelBuffer::new(&self.pixels, self.width, self.height)
    }

    /// Copy the borrowed profile so the output outlives the input bytes.
    pub fn into_owned(self) -> DecodeOutput<'static> {
        DecodeOutput {
            pixels: self.pixels,
            width: self.width,
            height: self.height,
            profile: self.profile.into_owned(),
        }
    }

    /// Whether the color profile is borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(
            self.profile,
            ColorProfile::Present(alloc::borrow::Cow::Borrowed(_))
        )
    }

    /// Reinterpret pixel data as typed RGBA8 pixels.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> &[rgb::RGBA8] {
        self.pixels.as_rgba()
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGBA8 pixels.
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(
            self.as_pixels(),
            self.width as usize,
            self.height as usize,
        )
    }

    /// Convert to an [`imgref::ImgVec`] of RGBA8 pixels.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        imgref::ImgVec::new(
            self.as_pixels().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}

use alloc::vec::Vec;
use enough::Stop;

use crate::error::NimError;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;
use crate::profile::ColorProfile;

/// Deflate effort, on miniz's 0..=10 scale.
///
/// Only affects output size and speed; any level decodes to the same pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    /// Stored blocks, no compression.
    pub const NONE: Self = Self(0);
    pub const FAST: Self = Self(1);
    pub const DEFAULT: Self = Self(6);
    /// zlib's maximum level.
    pub const BEST: Self = Self(9);
    /// miniz's extra effort level beyond zlib's range.
    pub const UBER: Self = Self(10);

    /// Levels above 10 are clamped.
    pub const fn new(level: u8) -> Self {
        if level > 10 { Self(10) } else { Self(level) }
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        Self::BEST
    }
}

/// Builder for encoding a `.nim` container.
#[derive(Clone, Debug, Default)]
pub struct EncodeRequest<'a> {
    profile: ColorProfile<'a>,
    level: CompressionLevel,
    limits: Option<&'a Limits>,
}

impl<'a> EncodeRequest<'a> {
    /// No profile, best compression, no limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// Embed raw color-profile bytes. An empty slice embeds nothing.
    pub fn with_profile(mut self, profile: &'a [u8]) -> Self {
        self.profile = ColorProfile::from_bytes(Some(profile));
        self
    }

    pub fn with_color_profile(mut self, profile: ColorProfile<'a>) -> Self {
        self.profile = match profile {
            ColorProfile::Present(b) if b.is_empty() => ColorProfile::Absent,
            other => other,
        };
        self
    }

    pub fn with_compression(mut self, level: CompressionLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    /// Encode `pixels` into a complete `.nim` byte sequence.
    pub fn encode(&self, pixels: &PixelBuffer<'_>, stop: impl Stop) -> Result<Vec<u8>, NimError> {
        crate::nim::encode(pixels, &self.profile, self.level.get(), self.limits, &stop)
    }

    /// Validate raw RGBA bytes against the dimensions, then encode.
    pub fn encode_rgba(
        &self,
        pixels: &[u8],
        width: u32,
        height: u32,
        stop: impl Stop,
    ) -> Result<Vec<u8>, NimError> {
        let buffer = PixelBuffer::new(pixels, width, height)?;
        self.encode(&buffer, stop)
    }
}

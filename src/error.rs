use alloc::string::String;
use enough::StopReason;

/// Errors from `.nim` encoding and decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NimError {
    #[error("unrecognized format magic bytes")]
    UnrecognizedFormat,

    #[error("unsupported .nim version: {0}")]
    UnsupportedVersion(u8),

    #[error("unsupported channel count: {0} (only RGBA, 4, is supported)")]
    UnsupportedChannels(u8),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid pixel data: {0}")]
    InvalidData(String),

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("color profile of {0} bytes does not fit a 32-bit length field")]
    ProfileTooLarge(usize),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("pixel buffer is {actual} bytes, expected {expected} (width * height * 4)")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("pixel stream inflated to {actual} bytes, header declares {expected}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("compression failed: {0}")]
    Compression(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "image")]
    #[error("could not decode input image: {0}")]
    Decode(String),

    #[cfg(feature = "std")]
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for NimError {
    fn from(r: StopReason) -> Self {
        NimError::Cancelled(r)
    }
}

#[cfg(feature = "image")]
impl From<image::ImageError> for NimError {
    fn from(e: image::ImageError) -> Self {
        NimError::Decode(alloc::format!("{e}"))
    }
}

//! # zennim
//!
//! Encoder and decoder for `.nim`, a minimal image container: a 15-byte
//! header, an optional length-prefixed color profile, then the RGBA8 pixels
//! as a single zlib stream.
//!
//! ## Format
//!
//! | Offset | Size | Field |
//! |---|---|---|
//! | 0 | 4 | magic `NIM\0` |
//! | 4 | 1 | version, `1` |
//! | 5 | 4 | width, u32 big-endian |
//! | 9 | 4 | height, u32 big-endian |
//! | 13 | 1 | channels, `4` |
//! | 14 | 1 | profile flag, `0` or `1` |
//! | 15 | 4 | profile length (flag = 1 only) |
//! | 19 | n | profile bytes (flag = 1 only) |
//! | .. | .. | zlib stream to end of file |
//!
//! An empty profile is never written; it is indistinguishable from no
//! profile. The pixel stream carries its own end marker and checksum, so a
//! truncated file fails to decode instead of yielding partial pixels.
//!
//! ## Features
//!
//! - `std` — `std::io::Error` conversion.
//! - `rgb` / `imgref` — typed RGBA8 and 2D-buffer views.
//! - `image` — `normalize` arbitrary PNG/JPEG/... input to RGBA8 + ICC.
//! - `cli` — the `nim` command-line tool.
//!
//! ## Usage
//!
//! ```
//! use zennim::{DecodeRequest, EncodeRequest, ImageInfo, PixelBuffer, Unstoppable};
//!
//! let red = [0xFFu8, 0x00, 0x00, 0xFF].repeat(4);
//! let pixels = PixelBuffer::new(&red, 2, 2)?;
//!
//! let nim = EncodeRequest::new()
//!     .with_profile(&[0xDE, 0xAD, 0xBE, 0xEF])
//!     .encode(&pixels, Unstoppable)?;
//!
//! let info = ImageInfo::from_bytes(&nim)?;
//! assert_eq!((info.width, info.height, info.profile_len), (2, 2, Some(4)));
//!
//! let decoded = DecodeRequest::new(&nim).decode(Unstoppable)?;
//! assert_eq!(decoded.pixels(), &red[..]);
//! assert_eq!(decoded.color_profile(), Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]));
//! # Ok::<(), zennim::NimError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod file_name;
mod info;
mod limits;
mod nim;
mod pixel;
mod profile;

mod decode;
mod encode;

#[cfg(feature = "image")]
mod normalize;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest};
pub use encode::{CompressionLevel, EncodeRequest};
pub use enough::{Stop, Unstoppable};
pub use error::NimError;
pub use file_name::nim_file_name;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::{CHANNELS, PixelBuffer};
pub use profile::ColorProfile;

#[cfg(feature = "image")]
pub use normalize::{DecodedImage, encode_image, normalize};

use alloc::vec::Vec;

/// Encode raw RGBA8 bytes with best compression.
///
/// `profile` of `None` or `Some(&[])` writes no profile chunk.
pub fn encode_nim(
    pixels: &[u8],
    width: u32,
    height: u32,
    profile: Option<&[u8]>,
    stop: impl Stop,
) -> Result<Vec<u8>, NimError> {
    EncodeRequest::new()
        .with_color_profile(ColorProfile::from_bytes(profile))
        .encode_rgba(pixels, width, height, stop)
}

/// Decode a `.nim` container without limits.
pub fn decode_nim(data: &[u8], stop: impl Stop) -> Result<DecodeOutput<'_>, NimError> {
    DecodeRequest::new(data).decode(stop)
}

//! The `.nim` container (internal).
//!
//! Layout, all integers big-endian:
//!
//! ```text
//! 0   4  magic        "NIM\0"
//! 4   1  version      1
//! 5   4  width
//! 9   4  height
//! 13  1  channels     4 (RGBA)
//! 14  1  hasProfile   0 | 1
//! 15  4  profileLen   only if hasProfile = 1
//! 19  n  profileData  only if hasProfile = 1
//! ..     zlib stream of width * height * 4 RGBA bytes, to end of file
//! ```

mod decode;
mod encode;
mod zlib;

use alloc::vec::Vec;
use enough::Stop;
use log::debug;

use crate::decode::DecodeOutput;
use crate::error::NimError;
use crate::info::ImageInfo;
use crate::limits::Limits;
use crate::pixel::PixelBuffer;
use crate::profile::ColorProfile;

pub(crate) const MAGIC: [u8; 4] = *b"NIM\0";
pub(crate) const VERSION: u8 = 1;
pub(crate) const CHANNELS_RGBA: u8 = 4;
/// Bytes before the profile flag: magic, version, width, height, channels.
pub(crate) const FIXED_HEADER_LEN: usize = 14;

/// Probe header for ImageInfo without decoding.
pub(crate) fn probe_header(data: &[u8]) -> Result<ImageInfo, NimError> {
    let header = decode::parse_header(data)?;
    let profile_len = header
        .profile
        .as_bytes()
        .map(|p| p.len() as u32);
    Ok(ImageInfo {
        width: header.width,
        height: header.height,
        profile_len,
        data_offset: header.data_offset,
    })
}

/// Decode `.nim` data (called from DecodeRequest).
pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<DecodeOutput<'a>, NimError> {
    let header = decode::parse_header(data)?;
    let out_bytes = crate::pixel::rgba_len(header.width, header.height)?;
    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
        limits.check_memory(out_bytes)?;
        if let Some(p) = header.profile.as_bytes() {
            limits.check_profile(p.len())?;
        }
    }

    stop.check()?;

    let stream = data
        .get(header.data_offset..)
        .ok_or(NimError::UnexpectedEof)?;
    let pixels = zlib::inflate(stream, out_bytes, stop)?;
    debug!(
        "decoded .nim {}x{}, profile {:?} bytes, {} compressed bytes",
        header.width,
        header.height,
        header.profile.as_bytes().map(<[u8]>::len),
        stream.len()
    );
    Ok(DecodeOutput::new(
        pixels,
        header.width,
        header.height,
        header.profile,
    ))
}

/// Encode to `.nim` (called from EncodeRequest).
pub(crate) fn encode(
    pixels: &PixelBuffer<'_>,
    profile: &ColorProfile<'_>,
    level: u8,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Vec<u8>, NimError> {
    if let Some(limits) = limits {
        limits.check(pixels.width(), pixels.height())?;
        if let Some(p) = profile.as_bytes() {
            limits.check_profile(p.len())?;
        }
    }
    let out = encode::encode_nim(pixels, profile, level, stop)?;
    debug!(
        "encoded .nim {}x{} at level {level}: {} raw -> {} bytes",
        pixels.width(),
        pixels.height(),
        pixels.data().len(),
        out.len()
    );
    Ok(out)
}

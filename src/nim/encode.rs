//! `.nim` encoder.

use alloc::vec::Vec;
use enough::Stop;

use super::{CHANNELS_RGBA, MAGIC, VERSION, zlib};
use crate::error::NimError;
use crate::pixel::PixelBuffer;
use crate::profile::ColorProfile;

/// Write the 14 fixed bytes plus the profile flag and optional chunk.
pub(crate) fn write_header(
    out: &mut Vec<u8>,
    width: u32,
    height: u32,
    profile: &ColorProfile<'_>,
) -> Result<(), NimError> {
    out.extend_from_slice(&MAGIC);
    out.push(VERSION);
    out.extend_from_slice(&width.to_be_bytes());
    out.extend_from_slice(&height.to_be_bytes());
    out.push(CHANNELS_RGBA);
    out.push(profile.flag());
    if let ColorProfile::Present(bytes) = profile {
        let len = u32::try_from(bytes.len()).map_err(|_| NimError::ProfileTooLarge(bytes.len()))?;
        out.extend_from_slice(&len.to_be_bytes());
        out.extend_from_slice(bytes);
    }
    Ok(())
}

/// Encode a validated pixel buffer into a complete `.nim` container.
pub(crate) fn encode_nim(
    pixels: &PixelBuffer<'_>,
    profile: &ColorProfile<'_>,
    level: u8,
    stop: &dyn Stop,
) -> Result<Vec<u8>, NimError> {
    stop.check()?;
    let compressed = zlib::compress(pixels.data(), level, stop)?;

    let total = super::FIXED_HEADER_LEN + 1 + profile.chunk_len() + compressed.len();
    let mut out = Vec::with_capacity(total);
    write_header(&mut out, pixels.width(), pixels.height(), profile)?;
    out.extend_from_slice(&compressed);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::borrow::Cow;
    use enough::Unstoppable;

    #[test]
    fn header_bytes_without_profile() {
        let mut out = Vec::new();
        write_header(&mut out, 2, 2, &ColorProfile::Absent).unwrap();
        assert_eq!(
            out,
            [
                0x4E, 0x49, 0x4D, 0x00, 0x01, 0, 0, 0, 2, 0, 0, 0, 2, 0x04, 0x00
            ]
        );
    }

    #[test]
    fn header_bytes_with_profile() {
        let mut out = Vec::new();
        let profile = ColorProfile::Present(Cow::Borrowed(&[0xDE, 0xAD, 0xBE, 0xEF]));
        write_header(&mut out, 0x0102_0304, 7, &profile).unwrap();
        assert_eq!(&out[5..9], &[1, 2, 3, 4]);
        assert_eq!(&out[9..13], &[0, 0, 0, 7]);
        assert_eq!(&out[14..], &[1, 0, 0, 0, 4, 0xDE, 0xAD, 0xBE, 0xEF]);
    }

    #[test]
    fn output_is_header_then_stream() {
        let data = [9u8; 4];
        let buf = PixelBuffer::new(&data, 1, 1).unwrap();
        let out = encode_nim(&buf, &ColorProfile::Absent, 9, &Unstoppable).unwrap();
        assert!(out.len() > 15);
        assert_eq!(&out[..4], b"NIM\0");
        assert_eq!(out[15] & 0x0F, 8, "zlib CMF byte follows the header");
    }
}

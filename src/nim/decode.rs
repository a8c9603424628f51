//! `.nim` header parsing.

use alloc::borrow::Cow;

use super::{CHANNELS_RGBA, FIXED_HEADER_LEN, MAGIC, VERSION};
use crate::error::NimError;
use crate::profile::ColorProfile;

/// Parsed `.nim` header (internal). The profile borrows from the input.
pub(crate) struct NimHeader<'a> {
    pub width: u32,
    pub height: u32,
    pub profile: ColorProfile<'a>,
    pub data_offset: usize,
}

fn read_u32(data: &[u8], at: usize) -> Result<u32, NimError> {
    let bytes = data.get(at..at + 4).ok_or(NimError::UnexpectedEof)?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

/// Parse the fixed header and the optional profile chunk.
pub(crate) fn parse_header(data: &[u8]) -> Result<NimHeader<'_>, NimError> {
    if data.len() >= MAGIC.len() && data[..MAGIC.len()] != MAGIC {
        return Err(NimError::UnrecognizedFormat);
    }
    if data.len() <= FIXED_HEADER_LEN {
        return Err(NimError::UnexpectedEof);
    }

    let version = data[4];
    if version != VERSION {
        return Err(NimError::UnsupportedVersion(version));
    }
    let width = read_u32(data, 5)?;
    let height = read_u32(data, 9)?;
    let channels = data[13];
    if channels != CHANNELS_RGBA {
        return Err(NimError::UnsupportedChannels(channels));
    }
    if width == 0 {
        return Err(NimError::InvalidHeader("width is zero".into()));
    }
    if height == 0 {
        return Err(NimError::InvalidHeader("height is zero".into()));
    }

    let flag_at = FIXED_HEADER_LEN;
    let (profile, data_offset) = match data[flag_at] {
        0 => (ColorProfile::Absent, flag_at + 1),
        1 => {
            let len = read_u32(data, flag_at + 1)? as usize;
            let start = flag_at + 5;
            let end = start.checked_add(len).ok_or(NimError::UnexpectedEof)?;
            let bytes = data.get(start..end).ok_or(NimError::UnexpectedEof)?;
            let profile = if bytes.is_empty() {
                ColorProfile::Absent
            } else {
                ColorProfile::Present(Cow::Borrowed(bytes))
            };
            (profile, end)
        }
        other => {
            return Err(NimError::InvalidHeader(alloc::format!(
                "profile flag must be 0 or 1, got {other}"
            )));
        }
    };

    Ok(NimHeader {
        width,
        height,
        profile,
        data_offset,
    })
}

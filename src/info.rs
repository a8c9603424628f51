use crate::error::NimError;
use crate::nim;

/// Header fields of a `.nim` container, read without inflating pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    /// Length of the embedded color profile, `None` when absent.
    pub profile_len: Option<u32>,
    /// Offset of the compressed pixel stream from the start of the file.
    pub data_offset: usize,
}

impl ImageInfo {
    /// Probe a `.nim` header.
    ///
    /// Validates magic, version, channel count and the profile chunk
    /// framing. The pixel stream is not touched.
    pub fn from_bytes(data: &[u8]) -> Result<Self, NimError> {
        nim::probe_header(data)
    }

    pub fn has_profile(&self) -> bool {
        self.profile_len.is_some()
    }

    /// Size of the inflated RGBA buffer this header declares.
    pub fn pixel_bytes(&self) -> Result<usize, NimError> {
        crate::pixel::rgba_len(self.width, self.height)
    }
}

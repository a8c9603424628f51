use alloc::borrow::Cow;
use alloc::vec::Vec;

/// The optional color-profile field of a `.nim` container.
///
/// On the wire this is a discriminant byte (`0` or `1`) followed, for
/// [`ColorProfile::Present`], by a u32 big-endian length and the raw bytes.
/// The blob is opaque (typically ICC) and is never interpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColorProfile<'a> {
    #[default]
    Absent,
    /// Non-empty profile bytes.
    Present(Cow<'a, [u8]>),
}

impl<'a> ColorProfile<'a> {
    /// Build from an optional slice. `None` and an empty slice both map to
    /// [`ColorProfile::Absent`].
    pub fn from_bytes(bytes: Option<&'a [u8]>) -> Self {
        match bytes {
            Some(b) if !b.is_empty() => ColorProfile::Present(Cow::Borrowed(b)),
            _ => ColorProfile::Absent,
        }
    }

    /// Owned variant of [`ColorProfile::from_bytes`].
    pub fn from_vec(bytes: Option<Vec<u8>>) -> ColorProfile<'static> {
        match bytes {
            Some(b) if !b.is_empty() => ColorProfile::Present(Cow::Owned(b)),
            _ => ColorProfile::Absent,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            ColorProfile::Absent => None,
            ColorProfile::Present(b) => Some(b),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, ColorProfile::Present(_))
    }

    /// Wire discriminant: `1` when a chunk follows, else `0`.
    pub(crate) fn flag(&self) -> u8 {
        match self {
            ColorProfile::Absent => 0,
            ColorProfile::Present(_) => 1,
        }
    }

    /// Bytes this field occupies after the flag byte.
    pub(crate) fn chunk_len(&self) -> usize {
        match self {
            ColorProfile::Absent => 0,
            ColorProfile::Present(b) => 4 + b.len(),
        }
    }

    pub fn into_owned(self) -> ColorProfile<'static> {
        match self {
            ColorProfile::Absent => ColorProfile::Absent,
            ColorProfile::Present(b) => ColorProfile::Present(Cow::Owned(b.into_owned())),
        }
    }

    pub fn into_vec(self) -> Option<Vec<u8>> {
        match self {
            ColorProfile::Absent => None,
            ColorProfile::Present(b) => Some(b.into_owned()),
        }
    }
}

impl<'a> From<Option<&'a [u8]>> for ColorProfile<'a> {
    fn from(bytes: Option<&'a [u8]>) -> Self {
        Self::from_bytes(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_absent() {
        assert_eq!(ColorProfile::from_bytes(None), ColorProfile::Absent);
        assert_eq!(ColorProfile::from_bytes(Some(&[])), ColorProfile::Absent);
        assert_eq!(ColorProfile::from_vec(Some(Vec::new())), ColorProfile::Absent);
    }

    #[test]
    fn present_framing() {
        let p = ColorProfile::from_bytes(Some(&[0xDE, 0xAD, 0xBE, 0xEF]));
        assert!(p.is_present());
        assert_eq!(p.flag(), 1);
        assert_eq!(p.chunk_len(), 8);
        assert_eq!(p.as_bytes(), Some(&[0xDE, 0xAD, 0xBE, 0xEF][..]));
        assert_eq!(ColorProfile::Absent.chunk_len(), 0);
        assert_eq!(ColorProfile::Absent.flag(), 0);
    }

    #[test]
    fn into_owned_detaches() {
        let bytes = alloc::vec![1u8, 2, 3];
        let owned = ColorProfile::from_bytes(Some(&bytes[..])).into_owned();
        drop(bytes);
        assert_eq!(owned.into_vec(), Some(alloc::vec![1, 2, 3]));
    }
}

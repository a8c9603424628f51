use crate::error::NimError;

/// Channels per pixel. `.nim` stores RGBA only.
pub const CHANNELS: usize = 4;

/// Number of bytes an RGBA8 image of `width` x `height` occupies.
pub(crate) fn rgba_len(width: u32, height: u32) -> Result<usize, NimError> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|wh| wh.checked_mul(CHANNELS))
        .ok_or(NimError::DimensionsTooLarge { width, height })
}

/// A borrowed RGBA8 image, row-major, no row padding.
///
/// Can only be built when `data.len() == width * height * 4` and both
/// dimensions are non-zero, so the encoder never sees a mismatched buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    /// Wrap `data` as a `width` x `height` RGBA8 image.
    pub fn new(data: &'a [u8], width: u32, height: u32) -> Result<Self, NimError> {
        if width == 0 || height == 0 {
            return Err(NimError::InvalidHeader(alloc::format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = rgba_len(width, height)?;
        if data.len() != expected {
            return Err(NimError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap typed RGBA8 pixels.
    #[cfg(feature = "rgb")]
    pub fn from_rgba(pixels: &'a [rgb::RGBA8], width: u32, height: u32) -> Result<Self, NimError> {
        use rgb::ComponentBytes as _;
        Self::new(pixels.as_bytes(), width, height)
    }

    /// Wrap an [`imgref::ImgRef`]. Fails if the image has row padding
    /// (stride != width), since `.nim` rows are tightly packed.
    #[cfg(feature = "imgref")]
    pub fn from_imgref(img: imgref::ImgRef<'a, rgb::RGBA8>) -> Result<Self, NimError> {
        if img.stride() != img.width() {
            return Err(NimError::InvalidData(alloc::format!(
                "padded rows are not supported (stride {} for width {})",
                img.stride(),
                img.width()
            )));
        }
        let width = u32::try_from(img.width()).map_err(|_| NimError::DimensionsTooLarge {
            width: u32::MAX,
            height: u32::MAX,
        })?;
        let height = u32::try_from(img.height()).map_err(|_| NimError::DimensionsTooLarge {
            width,
            height: u32::MAX,
        })?;
        let len = img.width() * img.height();
        let pixels = img.into_buf().get(..len).ok_or(NimError::UnexpectedEof)?;
        Self::from_rgba(pixels, width, height)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The raw RGBA bytes.
    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    /// Byte length of one row.
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_exact_length() {
        let data = [0u8; 2 * 3 * 4];
        let buf = PixelBuffer::new(&data, 2, 3).unwrap();
        assert_eq!(buf.width(), 2);
        assert_eq!(buf.height(), 3);
        assert_eq!(buf.stride(), 8);
        assert_eq!(buf.data().len(), 24);
    }

    #[test]
    fn rejects_short_and_long_buffers() {
        let data = [0u8; 17];
        match PixelBuffer::new(&data[..15], 2, 2) {
            Err(NimError::BufferSizeMismatch { expected, actual }) => {
                assert_eq!(expected, 16);
                assert_eq!(actual, 15);
            }
            other => panic!("expected BufferSizeMismatch, got {other:?}"),
        }
        assert!(matches!(
            PixelBuffer::new(&data, 2, 2),
            Err(NimError::BufferSizeMismatch { .. })
        ));
    }

    #[test]
    fn rejects_zero_dimensions() {
        assert!(matches!(
            PixelBuffer::new(&[], 0, 0),
            Err(NimError::InvalidHeader(_))
        ));
        assert!(matches!(
            PixelBuffer::new(&[], 5, 0),
            Err(NimError::InvalidHeader(_))
        ));
    }

    #[cfg(feature = "rgb")]
    #[test]
    fn typed_pixels() {
        let px = [rgb::RGBA8::new(255, 0, 0, 255); 4];
        let buf = PixelBuffer::from_rgba(&px, 2, 2).unwrap();
        assert_eq!(&buf.data()[..4], &[255, 0, 0, 255]);
    }
}

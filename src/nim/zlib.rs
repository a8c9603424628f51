//! zlib framing of the pixel stream, on top of miniz_oxide's streaming core.
//!
//! Both directions work in fixed-size chunks so the stop token is polled
//! regularly on large images.

use alloc::vec;
use alloc::vec::Vec;
use enough::Stop;
use log::trace;
use miniz_oxide::deflate::core::{
    CompressorOxide, TDEFLFlush, TDEFLStatus, compress_to_output,
    create_comp_flags_from_zip_params,
};
use miniz_oxide::inflate::TINFLStatus;
use miniz_oxide::inflate::core::inflate_flags::{
    TINFL_FLAG_COMPUTE_ADLER32, TINFL_FLAG_HAS_MORE_INPUT, TINFL_FLAG_PARSE_ZLIB_HEADER,
    TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF,
};
use miniz_oxide::inflate::core::{DecompressorOxide, decompress};

use crate::error::NimError;

const CHUNK: usize = 64 * 1024;

// Positive window bits select the zlib wrapper (header + adler32 trailer).
const ZLIB_WINDOW_BITS: i32 = 1;

/// Compress `data` into a complete zlib stream.
pub(crate) fn compress(data: &[u8], level: u8, stop: &dyn Stop) -> Result<Vec<u8>, NimError> {
    let flags = create_comp_flags_from_zip_params(i32::from(level), ZLIB_WINDOW_BITS, 0);
    let mut compressor = CompressorOxide::new(flags);
    let mut out = Vec::with_capacity(data.len() / 4 + 64);

    for (idx, chunk) in data.chunks(CHUNK).enumerate() {
        stop.check()?;
        let (status, consumed) =
            compress_to_output(&mut compressor, chunk, TDEFLFlush::None, |bytes| {
                out.extend_from_slice(bytes);
                true
            });
        if status != TDEFLStatus::Okay || consumed != chunk.len() {
            return Err(NimError::Compression(alloc::format!(
                "deflate stalled at chunk {idx} ({status:?}, {consumed}/{} bytes)",
                chunk.len()
            )));
        }
        trace!("deflated chunk {idx}, {} bytes out so far", out.len());
    }

    let (status, _) = compress_to_output(&mut compressor, &[], TDEFLFlush::Finish, |bytes| {
        out.extend_from_slice(bytes);
        true
    });
    if status != TDEFLStatus::Done {
        return Err(NimError::Compression(alloc::format!(
            "deflate did not finish ({status:?})"
        )));
    }
    Ok(out)
}

/// Inflate a zlib stream that must hold exactly `expected` bytes and
/// nothing after its trailer.
pub(crate) fn inflate(stream: &[u8], expected: usize, stop: &dyn Stop) -> Result<Vec<u8>, NimError> {
    if stream.is_empty() {
        return Err(NimError::UnexpectedEof);
    }
    // One spare byte so an over-long stream is caught as a length mismatch.
    let capacity = expected.checked_add(1).ok_or(NimError::InvalidData(
        "pixel stream length overflows".into(),
    ))?;
    // Grow towards `capacity` as output appears, so a forged header cannot
    // force a huge allocation for a tiny stream.
    let mut out = vec![0u8; capacity.min(CHUNK * 4)];
    let mut inflater = DecompressorOxide::new();
    let mut in_pos = 0;
    let mut out_pos = 0;

    loop {
        stop.check()?;
        let end = stream.len().min(in_pos + CHUNK);
        let more_input = end < stream.len();
        let mut flags = TINFL_FLAG_PARSE_ZLIB_HEADER
            | TINFL_FLAG_COMPUTE_ADLER32
            | TINFL_FLAG_USING_NON_WRAPPING_OUTPUT_BUF;
        if more_input {
            flags |= TINFL_FLAG_HAS_MORE_INPUT;
        }

        let (status, consumed, written) =
            decompress(&mut inflater, &stream[in_pos..end], &mut out, out_pos, flags);
        in_pos += consumed;
        out_pos += written;
        trace!("inflate {status:?}: {in_pos}/{} in, {out_pos} out", stream.len());

        match status {
            TINFLStatus::Done => break,
            TINFLStatus::NeedsMoreInput if more_input => continue,
            TINFLStatus::NeedsMoreInput | TINFLStatus::FailedCannotMakeProgress => {
                return Err(NimError::UnexpectedEof);
            }
            TINFLStatus::HasMoreOutput if out.len() < capacity => {
                let grown = out.len().saturating_mul(2).min(capacity);
                out.resize(grown, 0);
            }
            TINFLStatus::HasMoreOutput => {
                return Err(NimError::PixelCountMismatch {
                    expected,
                    actual: out_pos,
                });
            }
            TINFLStatus::Adler32Mismatch => {
                return Err(NimError::InvalidData(
                    "pixel stream checksum mismatch".into(),
                ));
            }
            other => {
                return Err(NimError::InvalidData(alloc::format!(
                    "corrupt pixel stream ({other:?})"
                )));
            }
        }
    }

    if in_pos != stream.len() {
        return Err(NimError::InvalidData(alloc::format!(
            "{} trailing bytes after pixel stream",
            stream.len() - in_pos
        )));
    }
    if out_pos != expected {
        return Err(NimError::PixelCountMismatch {
            expected,
            actual: out_pos,
        });
    }
    out.truncate(expected);
    Ok(out)
}

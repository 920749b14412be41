//! Binary encode/decode primitives for row block persistence.
//!
//! All integers and floats are little-endian. An array is written as a
//! `u64` element count followed by the packed elements. Offsets are
//! widened to `u64` on disk regardless of the platform's `usize`.

use std::io::{self, Read, Write};

use rowblock_core::Element;

use crate::error::CodecError;

fn map_eof(field: &'static str) -> impl Fn(io::Error) -> CodecError {
    move |e| {
        if e.kind() == io::ErrorKind::UnexpectedEof {
            CodecError::Truncated { field }
        } else {
            CodecError::Io(e)
        }
    }
}

fn width_error<T: Element>(field: &'static str) -> CodecError {
    CodecError::Malformed {
        detail: format!("{field} element does not decode from {} bytes", T::SIZE),
    }
}

// ── Writers ─────────────────────────────────────────────────────

/// Write a length-prefixed array.
pub fn write_array<T: Element>(w: &mut dyn Write, items: &[T]) -> Result<(), CodecError> {
    let mut buf = Vec::with_capacity(8 + items.len() * T::SIZE);
    (items.len() as u64).encode_le(&mut buf);
    for &item in items {
        item.encode_le(&mut buf);
    }
    w.write_all(&buf)?;
    Ok(())
}

/// Write a length-prefixed offset array, widening each boundary to `u64`.
pub fn write_offsets(w: &mut dyn Write, offset: &[usize]) -> Result<(), CodecError> {
    let wide: Vec<u64> = offset.iter().map(|&o| o as u64).collect();
    write_array(w, &wide)
}

/// Write a single scalar with no prefix.
pub fn write_scalar<T: Element>(w: &mut dyn Write, v: T) -> Result<(), CodecError> {
    let mut buf = Vec::with_capacity(T::SIZE);
    v.encode_le(&mut buf);
    w.write_all(&buf)?;
    Ok(())
}

// ── Readers ─────────────────────────────────────────────────────

/// Read a single scalar with no prefix.
pub fn read_scalar<T: Element>(r: &mut dyn Read, field: &'static str) -> Result<T, CodecError> {
    let mut buf = vec![0u8; T::SIZE];
    r.read_exact(&mut buf).map_err(map_eof(field))?;
    T::decode_le(&buf).ok_or_else(|| width_error::<T>(field))
}

fn read_payload<T: Element>(
    r: &mut dyn Read,
    len: u64,
    field: &'static str,
) -> Result<Vec<T>, CodecError> {
    let bytes = usize::try_from(len)
        .ok()
        .and_then(|n| n.checked_mul(T::SIZE))
        .ok_or_else(|| CodecError::Malformed {
            detail: format!("{field} length {len} does not fit in memory"),
        })?;
    // Bounded by what the stream actually holds, not by the prefix.
    let mut buf = Vec::new();
    Read::take(&mut *r, bytes as u64)
        .read_to_end(&mut buf)
        .map_err(map_eof(field))?;
    if buf.len() < bytes {
        return Err(CodecError::Truncated { field });
    }
    buf.chunks_exact(T::SIZE)
        .map(T::decode_le)
        .collect::<Option<Vec<T>>>()
        .ok_or_else(|| width_error::<T>(field))
}

/// Read a length-prefixed array.
pub fn read_array<T: Element>(r: &mut dyn Read, field: &'static str) -> Result<Vec<T>, CodecError> {
    let len: u64 = read_scalar(r, field)?;
    read_payload(r, len, field)
}

/// Read a length-prefixed array, or `None` if the stream is already at
/// its end.
///
/// Only zero bytes before end-of-stream count as a clean end; a partial
/// length prefix is [`CodecError::Truncated`].
pub fn read_array_or_eof<T: Element>(
    r: &mut dyn Read,
    field: &'static str,
) -> Result<Option<Vec<T>>, CodecError> {
    let mut prefix = [0u8; 8];
    let mut filled = 0;
    while filled < prefix.len() {
        match r.read(&mut prefix[filled..]) {
            Ok(0) if filled == 0 => return Ok(None),
            Ok(0) => return Err(CodecError::Truncated { field }),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CodecError::Io(e)),
        }
    }
    let len = u64::from_le_bytes(prefix);
    read_payload(r, len, field).map(Some)
}

/// Narrow decoded `u64` offsets to `usize`.
pub fn narrow_offsets(wide: Vec<u64>) -> Result<Vec<usize>, CodecError> {
    wide.into_iter()
        .map(|o| {
            usize::try_from(o).map_err(|_| CodecError::Malformed {
                detail: format!("offset {o} does not fit in usize"),
            })
        })
        .collect()
}

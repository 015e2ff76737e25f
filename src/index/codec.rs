//! Little-endian primitives for the collection index format.
//!
//! Every reader takes the buffer and an offset and returns the decoded value
//! with the offset just past it, so callers can thread a cursor through nested
//! structures without holding a mutable reader.

use crate::error::LoadError;

/// Width in bytes of a length prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthWidth {
	U16,
	U64,
}

impl LengthWidth {
	fn bytes(self) -> usize {
		match self {
			Self::U16 => 2,
			Self::U64 => 8,
		}
	}
}

fn take(buf: &[u8], offset: usize, len: usize) -> Result<(&[u8], usize), LoadError> {
	let end = offset
		.checked_add(len)
		.filter(|end| *end <= buf.len())
		.ok_or_else(|| LoadError::truncated(offset, len, buf.len()))?;
	Ok((&buf[offset..end], end))
}

pub fn read_u16_le(buf: &[u8], offset: usize) -> Result<(u16, usize), LoadError> {
	let (bytes, next) = take(buf, offset, 2)?;
	Ok((u16::from_le_bytes([bytes[0], bytes[1]]), next))
}

pub fn read_u64_le(buf: &[u8], offset: usize) -> Result<(u64, usize), LoadError> {
	let (bytes, next) = take(buf, offset, 8)?;
	let mut raw = [0u8; 8];
	raw.copy_from_slice(bytes);
	Ok((u64::from_le_bytes(raw), next))
}

/// Read a length prefix of the given width followed by that many bytes.
///
/// With `allow_empty == false` a zero length is rejected with
/// [`LoadError::ZeroLengthField`]; otherwise it yields an empty slice.
pub fn read_length_prefixed(
	buf: &[u8],
	offset: usize,
	width: LengthWidth,
	allow_empty: bool,
) -> Result<(&[u8], usize), LoadError> {
	let (len, body) = match width {
		LengthWidth::U16 => {
			let (len, next) = read_u16_le(buf, offset)?;
			(usize::from(len), next)
		}
		LengthWidth::U64 => {
			let (len, next) = read_u64_le(buf, offset)?;
			let len = usize::try_from(len)
				.map_err(|_| LoadError::truncated(next, usize::MAX, buf.len()))?;
			(len, next)
		}
	};

	if len == 0 {
		if allow_empty {
			return Ok((&[], body));
		}
		return Err(LoadError::ZeroLengthField { offset });
	}

	debug_assert_eq!(body, offset + width.bytes());
	take(buf, body, len)
}

/// Read a u16-prefixed UTF-8 string.
pub fn read_utf8(buf: &[u8], offset: usize, allow_empty: bool) -> Result<(String, usize), LoadError> {
	let (bytes, next) = read_length_prefixed(buf, offset, LengthWidth::U16, allow_empty)?;
	let value = std::str::from_utf8(bytes)
		.map_err(|_| LoadError::InvalidUtf8 { offset })?
		.to_owned();
	Ok((value, next))
}

//! Byte-level reading primitives for in-memory TIFF buffers.
//!
//! The decoder receives the complete file contents as one byte slice, so all
//! reads reduce to bounds-checked slicing plus endian conversion. Out-of-range
//! reads surface as [`DecodeError::TruncatedData`].

use crate::error::DecodeError;
use crate::format::tiff::ByteOrder;

// =============================================================================
// Endian Helper Functions
// =============================================================================
//
// TIFF files can be either little-endian or big-endian, determined by the
// byte order marks at the start of the file. These helpers are used by the
// TIFF parser for every multi-byte read.

/// Read a little-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_le(bytes: &[u8]) -> u16 {
    u16::from_le_bytes([bytes[0], bytes[1]])
}

/// Read a big-endian u16 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 2 bytes.
#[inline]
pub fn read_u16_be(bytes: &[u8]) -> u16 {
    u16::from_be_bytes([bytes[0], bytes[1]])
}

/// Read a little-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Read a big-endian u32 from a byte slice.
///
/// # Panics
/// Panics if the slice has fewer than 4 bytes.
#[inline]
pub fn read_u32_be(bytes: &[u8]) -> u32 {
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

// =============================================================================
// ByteCursor
// =============================================================================

/// Positioned reader over an in-memory file buffer.
///
/// Every read is bounds-checked; a read that would run past the end of the
/// buffer fails with [`DecodeError::TruncatedData`] carrying the offending
/// offset and length. Seeking is unchecked (positioning past the end is only
/// an error once something is read there).
#[derive(Debug)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        ByteCursor { data, pos: 0 }
    }

    /// Current read position.
    #[inline]
    pub fn position(&self) -> u64 {
        self.pos as u64
    }

    /// Move the read position to an absolute offset.
    #[inline]
    pub fn seek(&mut self, offset: u64) {
        self.pos = offset as usize;
    }

    /// Read exactly `len` bytes at the current position and advance.
    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        let end = self.pos.checked_add(len).ok_or(DecodeError::TruncatedData {
            offset: self.pos as u64,
            requested: len as u64,
            size: self.data.len() as u64,
        })?;
        if end > self.data.len() {
            return Err(DecodeError::TruncatedData {
                offset: self.pos as u64,
                requested: len as u64,
                size: self.data.len() as u64,
            });
        }
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Read a u16 in the given byte order and advance.
    pub fn read_u16(&mut self, order: ByteOrder) -> Result<u16, DecodeError> {
        let bytes = self.read_bytes(2)?;
        Ok(order.read_u16(bytes))
    }

    /// Read a u32 in the given byte order and advance.
    pub fn read_u32(&mut self, order: ByteOrder) -> Result<u32, DecodeError> {
        let bytes = self.read_bytes(4)?;
        Ok(order.read_u32(bytes))
    }
}

// =============================================================================
// Tests
// =============================================================================

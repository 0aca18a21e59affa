//! TIFF header parsing.
//!
//! This module handles parsing of the classic TIFF file header, which is the
//! foundation for all subsequent parsing operations.
//!
//! # TIFF Header Structure (8 bytes)
//! ```text
//! Bytes 0-1: Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! Bytes 2-3: Magic number (42 = 0x002A)
//! Bytes 4-7: Offset to first IFD (4 bytes)
//! ```
//!
//! BigTIFF (magic 43) is out of scope; its header is rejected as an invalid
//! magic number like any other value.

use crate::error::DecodeError;
use crate::io::{read_u16_be, read_u16_le, read_u32_be, read_u32_le};

// =============================================================================
// Constants
// =============================================================================

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: u16 = 0x4949;

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: u16 = 0x4D4D;

/// Magic number for classic TIFF
const TIFF_MAGIC: u16 = 42;

/// Size of a classic TIFF header in bytes
pub const TIFF_HEADER_SIZE: usize = 8;

/// Size of a classic TIFF IFD entry in bytes (2 tag + 2 type + 4 count + 4 value/offset)
pub const IFD_ENTRY_SIZE: usize = 12;

// =============================================================================
// ByteOrder
// =============================================================================

/// Byte order (endianness) of a TIFF file.
///
/// TIFF files declare their byte order in the first two bytes of the header.
/// All multi-byte values in the file must be read respecting this order:
/// header fields, IFD entry fields, and the next-IFD pointer alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian ("II" = Intel)
    LittleEndian,
    /// Big-endian ("MM" = Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Read a u16 from a byte slice using this byte order.
    #[inline]
    pub fn read_u16(self, bytes: &[u8]) -> u16 {
        match self {
            ByteOrder::LittleEndian => read_u16_le(bytes),
            ByteOrder::BigEndian => read_u16_be(bytes),
        }
    }

    /// Read a u32 from a byte slice using this byte order.
    #[inline]
    pub fn read_u32(self, bytes: &[u8]) -> u32 {
        match self {
            ByteOrder::LittleEndian => read_u32_le(bytes),
            ByteOrder::BigEndian => read_u32_be(bytes),
        }
    }
}

// =============================================================================
// TiffHeader
// =============================================================================

/// Parsed classic TIFF file header.
///
/// Contains the byte order for reading all subsequent values and the
/// location of the first IFD. A first IFD offset of 0 means the file
/// contains no pages; this is not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the file
    pub byte_order: ByteOrder,

    /// Offset to the first IFD (0 = no pages)
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Parse a classic TIFF header from raw bytes.
    ///
    /// # Errors
    /// - `TruncatedHeader` if there are fewer than 8 bytes
    /// - `InvalidByteOrder` if the byte order marks are not II or MM
    /// - `InvalidMagicNumber` if the magic number is not 42
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        if bytes.len() < TIFF_HEADER_SIZE {
            return Err(DecodeError::TruncatedHeader(bytes.len()));
        }

        // Byte order marks (bytes 0-1), read as little-endian because we are
        // matching a specific byte pattern.
        let marks = read_u16_le(&bytes[0..2]);
        let byte_order = match marks {
            BYTE_ORDER_LITTLE_ENDIAN => ByteOrder::LittleEndian,
            BYTE_ORDER_BIG_ENDIAN => ByteOrder::BigEndian,
            _ => return Err(DecodeError::InvalidByteOrder(marks)),
        };

        // Magic number (bytes 2-3) using the detected byte order
        let magic = byte_order.read_u16(&bytes[2..4]);
        if magic != TIFF_MAGIC {
            return Err(DecodeError::InvalidMagicNumber(magic));
        }

        // First IFD offset (bytes 4-7)
        let first_ifd_offset = byte_order.read_u32(&bytes[4..8]);

        Ok(TiffHeader {
            byte_order,
            first_ifd_offset,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

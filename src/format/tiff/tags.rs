//! TIFF tag and field type definitions.
//!
//! This module defines the vocabulary for TIFF parsing:
//! - Field types that determine how values are encoded
//! - The seven tag IDs needed to locate pixel data
//! - Compression scheme identifiers
//!
//! Only classic TIFF is supported; all definitions assume 4-byte
//! value/offset fields.

// =============================================================================
// TIFF Field Types
// =============================================================================

/// TIFF field types that determine how values are encoded.
///
/// Each field type has a specific size in bytes, which determines whether a
/// value fits inline in an IFD entry's 4-byte value/offset field. The
/// decoder only reads inline values, so the size check is load-bearing.
///
/// Note: We only define types that can plausibly carry the tags we
/// interpret. TIFF supports additional types (RATIONAL, FLOAT, etc.) that
/// are not needed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 8-bit integer (1 byte)
    Byte = 1,

    /// Unsigned 16-bit integer (2 bytes)
    Short = 3,

    /// Unsigned 32-bit integer (4 bytes)
    Long = 4,
}

impl FieldType {
    /// Size of a single value of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            FieldType::Byte => 1,
            FieldType::Short => 2,
            FieldType::Long => 4,
        }
    }

    /// Create a FieldType from its numeric value.
    ///
    /// Returns `None` for types that cannot be read as a single inline
    /// scalar (ASCII, RATIONAL, ...) or for unknown values.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(FieldType::Byte),
            3 => Some(FieldType::Short),
            4 => Some(FieldType::Long),
            _ => None,
        }
    }

    /// Maximum bytes that can be stored inline in a classic TIFF IFD entry.
    pub const INLINE_THRESHOLD: usize = 4;

    /// Check if a value with this type and count fits inline in the entry's
    /// value/offset field.
    #[inline]
    pub fn fits_inline(self, count: u32) -> bool {
        self.size_in_bytes() as u64 * count as u64 <= Self::INLINE_THRESHOLD as u64
    }
}

// =============================================================================
// TIFF Tags
// =============================================================================

/// The TIFF tags interpreted by the volume decoder.
///
/// Tags are 16-bit identifiers that describe the type of metadata in an IFD
/// entry. Exactly seven tags are needed to locate the pixel data of an
/// uncompressed strip-based grayscale page; all other tags are ignored
/// during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TiffTag {
    /// Image width in pixels
    ImageWidth = 256,

    /// Image height (length) in pixels
    ImageLength = 257,

    /// Bits per sample (must be 8)
    BitsPerSample = 258,

    /// Compression scheme (must be 1 = uncompressed)
    Compression = 259,

    /// Byte offset of the page's strip data
    StripOffsets = 273,

    /// Row count per strip (parsed but not used for reading; the whole page
    /// is treated as one contiguous strip)
    RowsPerStrip = 278,

    /// Byte count of the page's strip data
    StripByteCounts = 279,
}

impl TiffTag {
    /// Create a TiffTag from its numeric value.
    ///
    /// Returns `None` for unrecognized tags. Unknown tags are not an error;
    /// they are simply skipped during parsing.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            256 => Some(TiffTag::ImageWidth),
            257 => Some(TiffTag::ImageLength),
            258 => Some(TiffTag::BitsPerSample),
            259 => Some(TiffTag::Compression),
            273 => Some(TiffTag::StripOffsets),
            278 => Some(TiffTag::RowsPerStrip),
            279 => Some(TiffTag::StripByteCounts),
            _ => None,
        }
    }

    /// Get the numeric tag ID.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }
}

// =============================================================================
// Compression Values
// =============================================================================

/// TIFF compression scheme identifiers.
///
/// Only uncompressed data (value 1) is supported; any other scheme fails
/// the whole decode with `UnsupportedCompression`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum Compression {
    /// No compression (supported)
    None = 1,

    /// CCITT Group 3 fax (not supported)
    CcittGroup3 = 3,

    /// LZW compression (not supported)
    Lzw = 5,

    /// JPEG compression (not supported)
    Jpeg = 7,

    /// Deflate/zlib compression (not supported)
    Deflate = 8,

    /// PackBits run-length encoding (not supported)
    PackBits = 32773,
}

impl Compression {
    /// Create a Compression from its numeric value.
    ///
    /// Returns `None` for unrecognized compression values.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(Compression::None),
            3 => Some(Compression::CcittGroup3),
            5 => Some(Compression::Lzw),
            7 => Some(Compression::Jpeg),
            8 => Some(Compression::Deflate),
            32773 => Some(Compression::PackBits),
            _ => None,
        }
    }

    /// Check if this compression scheme is supported.
    #[inline]
    pub const fn is_supported(self) -> bool {
        matches!(self, Compression::None)
    }

    /// Get a human-readable name for the compression scheme.
    pub const fn name(self) -> &'static str {
        match self {
            Compression::None => "None",
            Compression::CcittGroup3 => "CCITT Group 3",
            Compression::Lzw => "LZW",
            Compression::Jpeg => "JPEG",
            Compression::Deflate => "Deflate",
            Compression::PackBits => "PackBits",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Multi-page TIFF volume decoding.
//!
//! The decoder walks the IFD chain of an uncompressed, 8-bit-grayscale,
//! strip-based TIFF file and accumulates every page into one flat
//! page-major sample buffer. Each page is read as a single contiguous strip;
//! no strip-splitting across `RowsPerStrip` boundaries is performed.
//!
//! # Supported Files
//!
//! - Classic TIFF (magic 42), either byte order
//! - Compression = 1 (uncompressed)
//! - BitsPerSample = 8, one sample per pixel
//! - Strip-based storage with one strip covering the whole page
//!
//! Anything else fails the whole decode; no partial volume is ever returned.

use tracing::debug;

use crate::error::DecodeError;
use crate::io::ByteCursor;
use crate::volume::Volume;

use super::parser::{ByteOrder, TiffHeader, IFD_ENTRY_SIZE};
use super::tags::{Compression, FieldType, TiffTag};

// =============================================================================
// Page Geometry
// =============================================================================

/// Geometry recovered from one page's IFD entries.
///
/// Tags absent from the page leave the corresponding field at its default;
/// in particular a missing BitsPerSample entry leaves 0, which fails the
/// bit-depth check, while a missing Compression entry defaults to 1
/// (uncompressed) per the TIFF baseline.
#[derive(Debug)]
struct PageGeometry {
    width: u32,
    height: u32,
    bits_per_sample: u32,
    compression: u32,
    strip_offsets: u32,
    rows_per_strip: u32,
    strip_byte_counts: u32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        PageGeometry {
            width: 0,
            height: 0,
            bits_per_sample: 0,
            compression: 1,
            strip_offsets: 0,
            rows_per_strip: 0,
            strip_byte_counts: 0,
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode a complete in-memory TIFF file into a [`Volume`].
///
/// Walks every IFD in the chain, reads each page's strip as raw 8-bit
/// samples, and normalizes each byte `b` to intensity `b / 255.0`.
///
/// The volume's reported width and height are taken from the first page
/// only; later pages' dimensions are parsed but not validated against the
/// first. A first-IFD offset of 0 yields an empty volume with `depth == 0`.
///
/// # Errors
///
/// - `TruncatedHeader`, `InvalidByteOrder`, `InvalidMagicNumber` for a
///   malformed header
/// - `UnsupportedCompression` if any page is not uncompressed
/// - `UnsupportedBitDepth` if any page is not 8 bits per sample
/// - `UnsupportedFieldEncoding` if an interpreted tag's value cannot be read
///   inline as a single scalar
/// - `TruncatedData` if any structure or strip read runs past the buffer end
pub fn decode_volume(bytes: &[u8]) -> Result<Volume, DecodeError> {
    let header = TiffHeader::parse(bytes)?;
    let order = header.byte_order;

    if header.first_ifd_offset == 0 {
        return Ok(Volume::empty());
    }

    let mut cursor = ByteCursor::new(bytes);
    let mut samples: Vec<f32> = Vec::new();
    let mut width = 0u32;
    let mut height = 0u32;
    let mut depth = 0u32;

    let mut ifd_offset = header.first_ifd_offset;
    while ifd_offset != 0 {
        cursor.seek(ifd_offset as u64);
        let entry_count = cursor.read_u16(order)?;

        let page = read_page_geometry(&mut cursor, order, ifd_offset, entry_count)?;

        // Next-IFD pointer sits immediately after the entry array
        cursor.seek(ifd_offset as u64 + 2 + entry_count as u64 * IFD_ENTRY_SIZE as u64);
        let next_ifd_offset = cursor.read_u32(order)?;

        // First page wins; later pages' dimensions are not validated
        if width == 0 && height == 0 {
            width = page.width;
            height = page.height;
        }

        match u16::try_from(page.compression)
            .ok()
            .and_then(Compression::from_u16)
        {
            Some(c) if c.is_supported() => {}
            _ => return Err(DecodeError::UnsupportedCompression(page.compression as u16)),
        }

        if page.bits_per_sample != 8 {
            return Err(DecodeError::UnsupportedBitDepth(page.bits_per_sample));
        }

        cursor.seek(page.strip_offsets as u64);
        let strip = cursor.read_bytes(page.strip_byte_counts as usize)?;
        samples.extend(strip.iter().map(|&b| b as f32 / 255.0));

        debug!(
            page = depth,
            width = page.width,
            height = page.height,
            rows_per_strip = page.rows_per_strip,
            strip_bytes = page.strip_byte_counts,
            "decoded page"
        );

        depth += 1;
        ifd_offset = next_ifd_offset;
    }

    debug!(width, height, depth, samples = samples.len(), "decoded volume");

    Ok(Volume::from_pages(width, height, depth, samples))
}

/// Read one IFD's entries and recover the page geometry.
///
/// Entries are addressed by their fixed 12-byte stride from the IFD start,
/// so the stride is respected regardless of how many bytes each value read
/// consumes. Tags outside the interpreted set are skipped.
fn read_page_geometry(
    cursor: &mut ByteCursor<'_>,
    order: ByteOrder,
    ifd_offset: u32,
    entry_count: u16,
) -> Result<PageGeometry, DecodeError> {
    let mut page = PageGeometry::default();

    for i in 0..entry_count {
        cursor.seek(ifd_offset as u64 + 2 + i as u64 * IFD_ENTRY_SIZE as u64);
        let tag_raw = cursor.read_u16(order)?;
        let field_type = cursor.read_u16(order)?;
        let count = cursor.read_u32(order)?;

        let Some(tag) = TiffTag::from_u16(tag_raw) else {
            continue;
        };

        let value = read_inline_value(cursor, order, tag_raw, field_type, count)?;
        match tag {
            TiffTag::ImageWidth => page.width = value,
            TiffTag::ImageLength => page.height = value,
            TiffTag::BitsPerSample => page.bits_per_sample = value,
            TiffTag::Compression => page.compression = value,
            TiffTag::StripOffsets => page.strip_offsets = value,
            TiffTag::RowsPerStrip => page.rows_per_strip = value,
            TiffTag::StripByteCounts => page.strip_byte_counts = value,
        }
    }

    Ok(page)
}

/// Read an interpreted tag's value from the entry's 4-byte value/offset
/// field, respecting the field type's width and the file byte order.
///
/// The value/offset field is never dereferenced as a file offset: for the
/// TIFF subset this decoder targets, every interpreted tag's value is a
/// single scalar that fits in the field. Entries that would need the
/// indirection fail with `UnsupportedFieldEncoding`.
fn read_inline_value(
    cursor: &mut ByteCursor<'_>,
    order: ByteOrder,
    tag: u16,
    field_type: u16,
    count: u32,
) -> Result<u32, DecodeError> {
    let unsupported = DecodeError::UnsupportedFieldEncoding {
        tag,
        field_type,
        count,
    };

    let ft = FieldType::from_u16(field_type).ok_or(unsupported.clone())?;
    if count != 1 || !ft.fits_inline(count) {
        return Err(unsupported);
    }

    match ft {
        FieldType::Byte => Ok(cursor.read_bytes(1)?[0] as u32),
        FieldType::Short => cursor.read_u16(order).map(u32::from),
        FieldType::Long => cursor.read_u32(order),
    }
}

// =============================================================================
// Tests
// =============================================================================
//
// Unit tests here cover decoder-internal edge cases; the spec-level
// properties (multi-page accumulation, normalization, rejection cases)
// live in the integration tests with the full synthetic-TIFF builder.

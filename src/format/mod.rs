//! File format parsing.
//!
//! Currently the only supported format is the classic-TIFF grayscale stack
//! subset implemented in [`tiff`]. Use [`is_tiff_header`] to cheaply check
//! whether a byte buffer looks like a file this crate can decode before
//! committing to a full decode.

pub mod tiff;

pub use tiff::{
    decode_volume, ByteOrder, Compression, FieldType, TiffHeader, TiffTag, IFD_ENTRY_SIZE,
    TIFF_HEADER_SIZE,
};

/// Check whether a buffer starts with a classic TIFF header.
///
/// This only inspects the byte order marks and magic number; it does not
/// verify that the file's pages satisfy the decoder's constraints.
pub fn is_tiff_header(bytes: &[u8]) -> bool {
    TiffHeader::parse(bytes).is_ok()
}

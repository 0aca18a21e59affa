//! TIFF structure parsing and volume decoding.
//!
//! This module implements the minimal classic-TIFF subset needed to read
//! uncompressed, 8-bit-grayscale, strip-based multi-page stacks:
//!
//! - [`parser`] - Header parsing and byte-order handling
//! - [`tags`] - The interpreted tags, field types, and compression values
//! - [`decoder`] - The IFD page loop producing a [`Volume`](crate::Volume)

pub mod decoder;
pub mod parser;
pub mod tags;

pub use decoder::decode_volume;
pub use parser::{ByteOrder, TiffHeader, IFD_ENTRY_SIZE, TIFF_HEADER_SIZE};
pub use tags::{Compression, FieldType, TiffTag};

//! # tiff-volume
//!
//! Decode uncompressed 8-bit-grayscale multi-page TIFF stacks into dense 3D
//! volumes and extract axis-aligned cross-sections as PNG images.
//!
//! The crate is a pure in-memory library: the caller supplies the complete
//! file bytes, gets back an immutable [`Volume`], and requests slices by
//! plane and index, receiving encoded PNG bytes in return. There is no I/O,
//! no shared state, and no thread affinity; many slice requests may run
//! concurrently against the same volume.
//!
//! ## Supported Files
//!
//! - Classic TIFF (magic 42), little- or big-endian
//! - Uncompressed (compression tag = 1), 8 bits per sample, single channel
//! - Strip-based storage, one strip per page
//!
//! Compressed, tiled, multi-sample, or non-8-bit files are rejected with a
//! typed [`DecodeError`]; no partial volume is ever returned.
//!
//! ## Architecture
//!
//! - [`mod@format`] - TIFF header/IFD parsing and the volume decoder
//! - [`slice`] - Plane parsing, cross-section extraction, PNG encoding
//! - [`volume`] - The immutable decoded volume
//! - [`io`] - Endian helpers and the bounds-checked byte cursor
//! - [`error`] - Decode and slice error taxonomies
//!
//! ## Example
//!
//! ```no_run
//! use tiff_volume::{decode_volume, Plane, slice_volume};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("stack.tif")?;
//!
//! let volume = decode_volume(&bytes)?;
//! println!(
//!     "{}x{}x{} volume",
//!     volume.width(),
//!     volume.height(),
//!     volume.depth()
//! );
//!
//! // Horizontal cross-section at y = 10, encoded as PNG
//! let png = slice_volume(&volume, Plane::Xz, 10)?;
//! std::fs::write("slice.png", &png)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod format;
pub mod io;
pub mod slice;
pub mod volume;

// Re-export commonly used types
pub use error::{DecodeError, SliceError};
pub use format::tiff::{
    decode_volume, ByteOrder, Compression, FieldType, TiffHeader, TiffTag, IFD_ENTRY_SIZE,
    TIFF_HEADER_SIZE,
};
pub use format::is_tiff_header;
pub use slice::{slice_volume, Plane, PngSliceEncoder, Slicer};
pub use volume::Volume;

use thiserror::Error;

/// Errors that can occur when decoding a TIFF stack into a volume.
///
/// All variants are terminal: a failed decode yields no `Volume` at all.
/// A single malformed page aborts the whole decode rather than returning a
/// shorter volume, which would break the `samples.len() == w*h*d` invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input is too small to contain a classic TIFF header
    #[error("truncated header: need at least 8 bytes, got {0}")]
    TruncatedHeader(usize),

    /// First two bytes are not "II" or "MM"
    #[error("invalid byte order marks: expected 0x4949 (II) or 0x4D4D (MM), got 0x{0:04X}")]
    InvalidByteOrder(u16),

    /// Magic number is not 42
    #[error("invalid magic number: expected 42, got {0}")]
    InvalidMagicNumber(u16),

    /// Page declares a compression scheme other than uncompressed (1)
    #[error("unsupported compression: {0} (only uncompressed is supported)")]
    UnsupportedCompression(u16),

    /// Page declares a sample depth other than 8 bits
    #[error("unsupported bit depth: {0} (only 8-bit grayscale is supported)")]
    UnsupportedBitDepth(u32),

    /// An interpreted tag's value does not fit inline in the 4-byte
    /// value/offset field, or uses a field type we cannot read as a scalar.
    ///
    /// The decoder never dereferences the value/offset field as a file
    /// offset; files that need the indirection are rejected here instead of
    /// being mis-parsed.
    #[error("unsupported field encoding for tag {tag}: type {field_type} with count {count} does not fit inline")]
    UnsupportedFieldEncoding {
        tag: u16,
        field_type: u16,
        count: u32,
    },

    /// A read ran past the end of the input buffer
    #[error("truncated data: requested {requested} bytes at offset {offset}, buffer is {size}")]
    TruncatedData {
        offset: u64,
        requested: u64,
        size: u64,
    },
}

/// Errors that can occur when extracting a cross-section from a volume.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SliceError {
    /// The slicer has no volume loaded
    #[error("no volume loaded")]
    NoVolumeLoaded,

    /// The requested plane is not "xz" or "yz" (case-insensitive)
    #[error("invalid plane {0:?}: expected \"xz\" or \"yz\"")]
    InvalidPlane(String),

    /// The slice index is outside the valid range for the plane's fixed axis
    #[error("slice index {index} out of bounds for axis of length {limit}")]
    IndexOutOfBounds { index: i64, limit: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {message}")]
    Encode { message: String },
}

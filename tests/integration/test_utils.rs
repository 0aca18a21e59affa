//! Shared helpers for integration tests.
//!
//! Provides a hand-assembled classic-TIFF builder so tests can produce
//! multi-page grayscale stacks in either byte order, plus knobs for
//! declaring unsupported compression or bit depth on individual pages.

/// Byte order for generated test files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrderType {
    LittleEndian,
    BigEndian,
}

/// One page of a generated TIFF stack.
#[derive(Debug, Clone)]
pub struct PageSpec {
    pub width: u32,
    pub height: u32,
    pub bits_per_sample: u32,
    pub compression: u32,
    pub samples: Vec<u8>,
}

impl PageSpec {
    /// A well-formed uncompressed 8-bit grayscale page.
    pub fn gray8(width: u32, height: u32, samples: Vec<u8>) -> Self {
        assert_eq!(samples.len(), (width * height) as usize);
        PageSpec {
            width,
            height,
            bits_per_sample: 8,
            compression: 1,
            samples,
        }
    }

    pub fn with_compression(mut self, compression: u32) -> Self {
        self.compression = compression;
        self
    }

    pub fn with_bits_per_sample(mut self, bits: u32) -> Self {
        self.bits_per_sample = bits;
        self
    }
}

fn put_u16(data: &mut Vec<u8>, order: ByteOrderType, value: u16) {
    match order {
        ByteOrderType::LittleEndian => data.extend_from_slice(&value.to_le_bytes()),
        ByteOrderType::BigEndian => data.extend_from_slice(&value.to_be_bytes()),
    }
}

fn put_u32(data: &mut Vec<u8>, order: ByteOrderType, value: u32) {
    match order {
        ByteOrderType::LittleEndian => data.extend_from_slice(&value.to_le_bytes()),
        ByteOrderType::BigEndian => data.extend_from_slice(&value.to_be_bytes()),
    }
}

/// Write one 12-byte IFD entry with a single inline scalar value.
///
/// SHORT values occupy the first 2 bytes of the value/offset field (in file
/// byte order) with zero padding after, per the TIFF layout.
fn put_entry(data: &mut Vec<u8>, order: ByteOrderType, tag: u16, field_type: u16, value: u32) {
    put_u16(data, order, tag);
    put_u16(data, order, field_type);
    put_u32(data, order, 1); // count
    match field_type {
        3 => {
            put_u16(data, order, value as u16);
            data.extend_from_slice(&[0, 0]);
        }
        _ => put_u32(data, order, value),
    }
}

const ENTRIES_PER_PAGE: u32 = 7;
const IFD_LEN: u32 = 2 + ENTRIES_PER_PAGE * 12 + 4;

/// Build a complete classic TIFF stack.
///
/// Layout: 8-byte header, then for each page an IFD immediately followed by
/// its strip data, with each IFD's next pointer chaining to the following
/// page (0 for the last). An empty page list yields a header whose first
/// IFD offset is 0.
pub fn build_tiff(order: ByteOrderType, pages: &[PageSpec]) -> Vec<u8> {
    let mut data = Vec::new();

    match order {
        ByteOrderType::LittleEndian => data.extend_from_slice(b"II"),
        ByteOrderType::BigEndian => data.extend_from_slice(b"MM"),
    }
    put_u16(&mut data, order, 42);
    let first_ifd = if pages.is_empty() { 0 } else { 8 };
    put_u32(&mut data, order, first_ifd);

    let mut ifd_offset = 8u32;
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(ifd_offset as usize, data.len());

        let strip_offset = ifd_offset + IFD_LEN;
        let page_end = strip_offset + page.samples.len() as u32;
        let next_ifd = if i + 1 < pages.len() { page_end } else { 0 };

        put_u16(&mut data, order, ENTRIES_PER_PAGE as u16);
        put_entry(&mut data, order, 256, 4, page.width); // ImageWidth (LONG)
        put_entry(&mut data, order, 257, 4, page.height); // ImageLength (LONG)
        put_entry(&mut data, order, 258, 3, page.bits_per_sample); // BitsPerSample (SHORT)
        put_entry(&mut data, order, 259, 3, page.compression); // Compression (SHORT)
        put_entry(&mut data, order, 273, 4, strip_offset); // StripOffsets (LONG)
        put_entry(&mut data, order, 278, 3, page.height); // RowsPerStrip (SHORT)
        put_entry(&mut data, order, 279, 4, page.samples.len() as u32); // StripByteCounts (LONG)
        put_u32(&mut data, order, next_ifd);

        data.extend_from_slice(&page.samples);
        ifd_offset = page_end;
    }

    data
}

/// Build a single-page little-endian grayscale TIFF.
pub fn build_single_page(width: u32, height: u32, samples: Vec<u8>) -> Vec<u8> {
    build_tiff(
        ByteOrderType::LittleEndian,
        &[PageSpec::gray8(width, height, samples)],
    )
}

/// Decode a PNG and return `(width, height, rgb_bytes)`.
pub fn decode_png_rgb(png: &[u8]) -> (u32, u32, Vec<u8>) {
    let img = image::load_from_memory(png)
        .expect("slice output should be a decodable PNG")
        .to_rgb8();
    let (w, h) = img.dimensions();
    (w, h, img.into_raw())
}

/// The gray channel values of a PNG, asserting R == G == B per pixel.
pub fn decode_png_gray(png: &[u8]) -> (u32, u32, Vec<u8>) {
    let (w, h, rgb) = decode_png_rgb(png);
    let gray = rgb
        .chunks_exact(3)
        .map(|px| {
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
            px[0]
        })
        .collect();
    (w, h, gray)
}

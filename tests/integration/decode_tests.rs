//! Volume decoding integration tests.
//!
//! Covers the spec-level decode properties: round-trip shape, multi-page
//! accumulation and page-major ordering, normalization, byte-order
//! handling, and the rejection cases.

use tiff_volume::{decode_volume, is_tiff_header, DecodeError};

use super::test_utils::{build_single_page, build_tiff, ByteOrderType, PageSpec};

// =============================================================================
// Shape and Ordering
// =============================================================================

#[test]
fn test_single_page_round_trip_shape() {
    let tiff = build_single_page(5, 3, vec![42; 15]);
    let volume = decode_volume(&tiff).unwrap();

    assert_eq!(volume.width(), 5);
    assert_eq!(volume.height(), 3);
    assert_eq!(volume.depth(), 1);
    assert_eq!(volume.samples().len(), 15);
}

#[test]
fn test_multi_page_accumulation() {
    let pages: Vec<PageSpec> = (0..4)
        .map(|z| PageSpec::gray8(3, 2, vec![z as u8 * 10; 6]))
        .collect();
    let tiff = build_tiff(ByteOrderType::LittleEndian, &pages);

    let volume = decode_volume(&tiff).unwrap();
    assert_eq!(volume.depth(), 4);
    assert_eq!(volume.samples().len(), 4 * 3 * 2);

    // Page-major: all of page 0 precedes all of page 1
    for z in 0..4u32 {
        let expected = z as f32 * 10.0 / 255.0;
        for &sample in &volume.samples()[(z as usize * 6)..((z as usize + 1) * 6)] {
            assert!((sample - expected).abs() < 1e-6);
        }
    }
    assert_eq!(volume.sample_at(0, 0, 3), 30.0 / 255.0);
}

#[test]
fn test_samples_preserve_file_order_within_page() {
    let tiff = build_single_page(2, 2, vec![1, 2, 3, 4]);
    let volume = decode_volume(&tiff).unwrap();

    assert_eq!(volume.sample_at(0, 0, 0), 1.0 / 255.0);
    assert_eq!(volume.sample_at(1, 0, 0), 2.0 / 255.0);
    assert_eq!(volume.sample_at(0, 1, 0), 3.0 / 255.0);
    assert_eq!(volume.sample_at(1, 1, 0), 4.0 / 255.0);
}

#[test]
fn test_normalization() {
    let tiff = build_single_page(3, 1, vec![0, 128, 255]);
    let volume = decode_volume(&tiff).unwrap();

    assert_eq!(volume.samples()[0], 0.0);
    assert!((volume.samples()[1] - 0.502).abs() < 1e-3);
    assert_eq!(volume.samples()[2], 1.0);
}

// =============================================================================
// Byte Order
// =============================================================================

#[test]
fn test_big_endian_decode_matches_little_endian() {
    let pages = [
        PageSpec::gray8(2, 3, vec![10, 20, 30, 40, 50, 60]),
        PageSpec::gray8(2, 3, vec![70, 80, 90, 100, 110, 120]),
    ];
    let le = decode_volume(&build_tiff(ByteOrderType::LittleEndian, &pages)).unwrap();
    let be = decode_volume(&build_tiff(ByteOrderType::BigEndian, &pages)).unwrap();

    assert_eq!(le, be);
    assert_eq!(be.width(), 2);
    assert_eq!(be.height(), 3);
    assert_eq!(be.depth(), 2);
}

#[test]
fn test_is_tiff_header_on_generated_files() {
    assert!(is_tiff_header(&build_single_page(1, 1, vec![0])));
    assert!(is_tiff_header(&build_tiff(ByteOrderType::BigEndian, &[])));
    assert!(!is_tiff_header(b"not a tiff"));
}

// =============================================================================
// Empty and Degenerate Files
// =============================================================================

#[test]
fn test_zero_first_ifd_offset_yields_empty_volume() {
    let tiff = build_tiff(ByteOrderType::LittleEndian, &[]);
    let volume = decode_volume(&tiff).unwrap();

    assert_eq!(volume.depth(), 0);
    assert_eq!(volume.samples().len(), 0);
    assert!(volume.is_empty());
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn test_short_buffer_rejected() {
    for len in 0..8 {
        let bytes = vec![0x49; len];
        assert_eq!(
            decode_volume(&bytes),
            Err(DecodeError::TruncatedHeader(len)),
            "buffer of {} bytes must fail with TruncatedHeader",
            len
        );
    }
}

#[test]
fn test_invalid_byte_order_rejected() {
    let bytes = [0x58, 0x58, 0x2A, 0x00, 0x08, 0x00, 0x00, 0x00];
    assert_eq!(
        decode_volume(&bytes),
        Err(DecodeError::InvalidByteOrder(0x5858))
    );
}

#[test]
fn test_wrong_magic_rejected() {
    // Correct byte order marks, magic 43 instead of 42
    let mut tiff = build_single_page(1, 1, vec![0]);
    tiff[2] = 43;
    assert_eq!(decode_volume(&tiff), Err(DecodeError::InvalidMagicNumber(43)));
}

#[test]
fn test_unsupported_compression_rejected() {
    let pages = [PageSpec::gray8(2, 2, vec![0; 4]).with_compression(5)];
    let tiff = build_tiff(ByteOrderType::LittleEndian, &pages);

    assert_eq!(
        decode_volume(&tiff),
        Err(DecodeError::UnsupportedCompression(5))
    );
}

#[test]
fn test_compressed_page_anywhere_fails_whole_decode() {
    // A valid first page does not rescue a compressed second page;
    // no partial volume is returned.
    let pages = [
        PageSpec::gray8(2, 2, vec![1, 2, 3, 4]),
        PageSpec::gray8(2, 2, vec![5, 6, 7, 8]).with_compression(7),
    ];
    let tiff = build_tiff(ByteOrderType::LittleEndian, &pages);

    assert_eq!(
        decode_volume(&tiff),
        Err(DecodeError::UnsupportedCompression(7))
    );
}

#[test]
fn test_unsupported_bit_depth_rejected() {
    let pages = [PageSpec::gray8(2, 2, vec![0; 4]).with_bits_per_sample(16)];
    let tiff = build_tiff(ByteOrderType::LittleEndian, &pages);

    assert_eq!(
        decode_volume(&tiff),
        Err(DecodeError::UnsupportedBitDepth(16))
    );
}

#[test]
fn test_truncated_strip_rejected() {
    let mut tiff = build_single_page(4, 4, (0..16).collect());
    tiff.truncate(tiff.len() - 5);

    assert!(matches!(
        decode_volume(&tiff),
        Err(DecodeError::TruncatedData { .. })
    ));
}

#[test]
fn test_truncated_ifd_rejected() {
    // Cut the file in the middle of the IFD entry table
    let tiff = build_single_page(2, 2, vec![0; 4]);
    let truncated = &tiff[..8 + 2 + 3 * 12 + 5];

    assert!(matches!(
        decode_volume(truncated),
        Err(DecodeError::TruncatedData { .. })
    ));
}

//! PNG slice encoder.
//!
//! This module rasterizes an extracted grayscale cross-section into a
//! standalone PNG image.
//!
//! # Design Decisions
//!
//! - **RGB expansion**: each normalized gray sample is replicated across the
//!   R, G, and B channels (alpha implicitly opaque) to satisfy the encoder's
//!   expected pixel format.
//!
//! - **Lossless output**: slices are encoded as PNG so repeated extraction
//!   of the same slice is byte-for-byte reproducible and values survive
//!   round-trips exactly.
//!
//! - **No caching**: every call encodes from scratch; callers that need
//!   caching own it.

use bytes::Bytes;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::error::SliceError;

// =============================================================================
// PNG Encoder
// =============================================================================

/// Encoder turning normalized grayscale samples into PNG bytes.
///
/// # Example
///
/// ```
/// use tiff_volume::PngSliceEncoder;
///
/// let encoder = PngSliceEncoder::new();
/// let png = encoder.encode(&[0.0, 1.0, 0.5, 0.25], 2, 2).unwrap();
/// assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PngSliceEncoder {
    // Stateless; the struct leaves room for encoder settings later
}

impl PngSliceEncoder {
    /// Create a new PNG slice encoder.
    pub fn new() -> Self {
        Self {}
    }

    /// Encode `width * height` normalized samples (row-major) as an RGB PNG.
    ///
    /// Each sample is clamped to `0.0..=1.0`, scaled to `0..=255`, and
    /// written to all three color channels.
    ///
    /// # Errors
    ///
    /// Returns `SliceError::Encode` if the PNG encoder fails, including when
    /// the sample count does not match `width * height`.
    pub fn encode(&self, samples: &[f32], width: u32, height: u32) -> Result<Bytes, SliceError> {
        let expected = width as usize * height as usize;
        if samples.len() != expected {
            return Err(SliceError::Encode {
                message: format!(
                    "expected {} samples for a {}x{} image, got {}",
                    expected,
                    width,
                    height,
                    samples.len()
                ),
            });
        }

        let mut raw = Vec::with_capacity(samples.len() * 3);
        for &sample in samples {
            let value = (sample.clamp(0.0, 1.0) * 255.0).round() as u8;
            raw.extend_from_slice(&[value, value, value]);
        }

        let mut output = Vec::new();
        PngEncoder::new(&mut output)
            .write_image(&raw, width, height, ExtendedColorType::Rgb8)
            .map_err(|e| SliceError::Encode {
                message: e.to_string(),
            })?;

        Ok(Bytes::from(output))
    }
}

// =============================================================================
// Tests
// =============================================================================

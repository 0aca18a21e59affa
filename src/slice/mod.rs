//! Axis-aligned cross-section extraction.
//!
//! A decoded [`Volume`] supports exactly two cross-section orientations:
//!
//! - **xz** (fixed `y`): a `width x depth` image where output pixel `(x, z)`
//!   is the volume sample at `(x, y, z)`. A horizontal cross-section viewed
//!   from the side.
//! - **yz** (fixed `x`): a `height x depth` image where output pixel `(y, z)`
//!   is the volume sample at `(x, y, z)`.
//!
//! Slicing is pure, read-only index arithmetic over the flat sample buffer;
//! every call re-extracts and re-encodes from scratch. The output is a PNG
//! of exactly the stated size, with no downsampling or interpolation.
//!
//! # Components
//!
//! - [`Plane`]: the two supported orientations, parsed case-insensitively
//! - [`slice_volume`]: extract-and-encode against a borrowed volume
//! - [`Slicer`]: session holder for the load-then-slice lifecycle
//! - [`PngSliceEncoder`]: grayscale samples to PNG bytes

mod encoder;

pub use encoder::PngSliceEncoder;

use bytes::Bytes;
use tracing::debug;

use crate::error::SliceError;
use crate::volume::Volume;

// =============================================================================
// Plane
// =============================================================================

/// A cross-section orientation through the volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plane {
    /// Fixed `y`: output is `width x depth`
    Xz,
    /// Fixed `x`: output is `height x depth`
    Yz,
}

impl Plane {
    /// Parse a plane identifier, case-insensitively.
    ///
    /// # Errors
    /// Any value other than `"xz"`/`"yz"` fails with
    /// [`SliceError::InvalidPlane`].
    pub fn parse(s: &str) -> Result<Self, SliceError> {
        if s.eq_ignore_ascii_case("xz") {
            Ok(Plane::Xz)
        } else if s.eq_ignore_ascii_case("yz") {
            Ok(Plane::Yz)
        } else {
            Err(SliceError::InvalidPlane(s.to_string()))
        }
    }

    /// The canonical lowercase identifier.
    pub const fn as_str(self) -> &'static str {
        match self {
            Plane::Xz => "xz",
            Plane::Yz => "yz",
        }
    }
}

impl std::str::FromStr for Plane {
    type Err = SliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plane::parse(s)
    }
}

// =============================================================================
// Slicing
// =============================================================================

/// Extract a cross-section from `volume` and encode it as PNG.
///
/// The slice index runs along the plane's fixed axis: `[0, height)` for
/// [`Plane::Xz`], `[0, width)` for [`Plane::Yz`]. The index is signed so
/// out-of-range negative requests are rejected rather than unrepresentable.
///
/// # Errors
///
/// - `IndexOutOfBounds` if `index` is outside the valid range
/// - `Encode` if PNG encoding fails
pub fn slice_volume(volume: &Volume, plane: Plane, index: i64) -> Result<Bytes, SliceError> {
    let (out_width, out_height, samples) = extract_plane(volume, plane, index)?;

    debug!(
        plane = plane.as_str(),
        index, out_width, out_height, "extracted slice"
    );

    PngSliceEncoder::new().encode(&samples, out_width, out_height)
}

/// Extract the raw normalized samples of a cross-section, row-major.
///
/// Returns `(width, height, samples)` of the output image. The projections
/// must agree with the decode layout `z*W*H + y*W + x`; this is the single
/// place a transposition would silently corrupt output.
fn extract_plane(
    volume: &Volume,
    plane: Plane,
    index: i64,
) -> Result<(u32, u32, Vec<f32>), SliceError> {
    let width = volume.width();
    let height = volume.height();
    let depth = volume.depth();

    match plane {
        Plane::Xz => {
            let y = check_index(index, height)?;
            let mut samples = Vec::with_capacity(width as usize * depth as usize);
            for z in 0..depth {
                for x in 0..width {
                    samples.push(volume.sample_at(x, y, z));
                }
            }
            Ok((width, depth, samples))
        }
        Plane::Yz => {
            let x = check_index(index, width)?;
            let mut samples = Vec::with_capacity(height as usize * depth as usize);
            for z in 0..depth {
                for y in 0..height {
                    samples.push(volume.sample_at(x, y, z));
                }
            }
            Ok((height, depth, samples))
        }
    }
}

fn check_index(index: i64, limit: u32) -> Result<u32, SliceError> {
    if index < 0 || index >= limit as i64 {
        return Err(SliceError::IndexOutOfBounds { index, limit });
    }
    Ok(index as u32)
}

// =============================================================================
// Slicer
// =============================================================================

/// Session holder for the load-then-slice lifecycle.
///
/// Holds at most one decoded volume; slicing without a loaded volume fails
/// with [`SliceError::NoVolumeLoaded`]. The volume is replaced wholesale on
/// the next load and never mutated, so repeated slice calls against the same
/// loaded volume are independent.
#[derive(Debug, Clone, Default)]
pub struct Slicer {
    volume: Option<Volume>,
}

impl Slicer {
    /// Create a slicer with no volume loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slicer holding `volume`.
    pub fn with_volume(volume: Volume) -> Self {
        Slicer {
            volume: Some(volume),
        }
    }

    /// Load a volume, replacing any previously loaded one.
    pub fn load(&mut self, volume: Volume) {
        self.volume = Some(volume);
    }

    /// Discard the loaded volume, if any.
    pub fn clear(&mut self) {
        self.volume = None;
    }

    /// The currently loaded volume.
    pub fn volume(&self) -> Option<&Volume> {
        self.volume.as_ref()
    }

    /// Extract a cross-section from the loaded volume as PNG bytes.
    ///
    /// The plane identifier is parsed case-insensitively.
    ///
    /// # Errors
    ///
    /// - `NoVolumeLoaded` if no volume has been loaded
    /// - `InvalidPlane` if `plane` is not `"xz"` or `"yz"`
    /// - `IndexOutOfBounds` / `Encode` as for [`slice_volume`]
    pub fn slice(&self, plane: &str, index: i64) -> Result<Bytes, SliceError> {
        let volume = self.volume.as_ref().ok_or(SliceError::NoVolumeLoaded)?;
        let plane = Plane::parse(plane)?;
        slice_volume(volume, plane, index)
    }
}

// =============================================================================
// Tests
// =============================================================================

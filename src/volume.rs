//! The decoded 3D grayscale volume.

/// A dense 3D grayscale volume decoded from a multi-page TIFF stack.
///
/// Samples are normalized intensities in `0.0..=1.0`, stored as one flat
/// page-major buffer: the sample at `(x, y, z)` lives at index
/// `z * width * height + y * width + x`. A flat buffer with computed strides
/// keeps slicing a linear scan with no intermediate allocation.
///
/// A `Volume` is immutable once constructed and upholds
/// `samples.len() == width * height * depth`; decoding either yields a
/// complete volume or fails, never a partial one.
#[derive(Debug, Clone, PartialEq)]
pub struct Volume {
    width: u32,
    height: u32,
    depth: u32,
    samples: Vec<f32>,
}

impl Volume {
    /// Construct a volume from pre-normalized samples.
    ///
    /// Returns `None` if `samples.len()` does not equal
    /// `width * height * depth`.
    pub fn from_samples(width: u32, height: u32, depth: u32, samples: Vec<f32>) -> Option<Self> {
        let expected = width as usize * height as usize * depth as usize;
        if samples.len() != expected {
            return None;
        }
        Some(Volume {
            width,
            height,
            depth,
            samples,
        })
    }

    /// Construct a volume from decoded pages.
    ///
    /// The decoder guarantees the sample count matches the accumulated page
    /// reads; dimensions are taken from the first page without re-validation
    /// against later pages.
    pub(crate) fn from_pages(width: u32, height: u32, depth: u32, samples: Vec<f32>) -> Self {
        Volume {
            width,
            height,
            depth,
            samples,
        }
    }

    /// An empty volume (no pages decoded).
    pub(crate) fn empty() -> Self {
        Volume {
            width: 0,
            height: 0,
            depth: 0,
            samples: Vec::new(),
        }
    }

    /// Page width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Page height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of decoded pages.
    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The flat page-major sample buffer.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of samples in one page.
    #[inline]
    pub fn page_len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the volume contains no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The normalized intensity at `(x, y, z)`.
    ///
    /// # Panics
    /// Panics if any coordinate is outside the volume dimensions.
    #[inline]
    pub fn sample_at(&self, x: u32, y: u32, z: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height && z < self.depth);
        let index =
            z as usize * self.page_len() + y as usize * self.width as usize + x as usize;
        self.samples[index]
    }
}

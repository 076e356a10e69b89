/// Perspective divide and the mapping from normalized device coordinates to pixels
use crate::error::GeometryError;
use crate::geometry::{NdcPoint, PixelPoint, Point3};

/// Perspective divide with a focal length of 1.
///
/// `point.z` must be strictly positive. Callers guarantee this by keeping
/// solids inside [`crate::transform::FORWARD_OFFSET`].
pub fn project(point: Point3<f32>) -> NdcPoint {
    debug_assert!(
        point.z > 0.0,
        "projected point must lie in front of the viewer, got z = {}",
        point.z
    );
    NdcPoint::new(point.x / point.z, point.y / point.z)
}

/// Output surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Result<Self, GeometryError> {
        if width == 0 || height == 0 {
            return Err(GeometryError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Map [-1, 1] to [0, width] x [0, height], flipping y so rows grow downward
    pub fn to_pixel(&self, ndc: NdcPoint) -> PixelPoint {
        PixelPoint::new(
            (ndc.x + 1.0) / 2.0 * self.width as f32,
            (1.0 - (ndc.y + 1.0) / 2.0) * self.height as f32,
        )
    }

    /// Inverse of [`Viewport::to_pixel`]
    pub fn from_pixel(&self, pixel: PixelPoint) -> NdcPoint {
        NdcPoint::new(
            pixel.x / self.width as f32 * 2.0 - 1.0,
            (1.0 - pixel.y / self.height as f32) * 2.0 - 1.0,
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

/// Point and segment types for each stage of the pipeline
pub use nalgebra::Point3;

/// A point in normalized device coordinates, [-1, 1] on both axes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NdcPoint {
    pub x: f32,
    pub y: f32,
}

impl NdcPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A point in pixel coordinates, [0, width] x [0, height], y growing downward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A line segment in pixel space, ready to hand to a line sink
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: PixelPoint,
    pub b: PixelPoint,
}

impl Segment {
    pub fn new(a: PixelPoint, b: PixelPoint) -> Self {
        Self { a, b }
    }

    /// Endpoints as `(x1, y1, x2, y2)`
    pub fn coords(&self) -> (f32, f32, f32, f32) {
        (self.a.x, self.a.y, self.b.x, self.b.y)
    }
}

/// Per-axis rotations and the forward translation applied before projection
use nalgebra::{Rotation3, Unit, Vector3};

use crate::geometry::Point3;

/// Distance every solid is pushed along +z before the perspective divide.
/// Solids must stay strictly inside this radius.
pub const FORWARD_OFFSET: f32 = 1.0;

/// Coordinate axis to rotate about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    fn unit(self) -> Unit<Vector3<f32>> {
        match self {
            Axis::X => Vector3::x_axis(),
            Axis::Y => Vector3::y_axis(),
            Axis::Z => Vector3::z_axis(),
        }
    }
}

/// Right-handed rotation of `point` by `angle` radians about `axis`
pub fn rotate_axis(point: Point3<f32>, angle: f32, axis: Axis) -> Point3<f32> {
    Rotation3::from_axis_angle(&axis.unit(), angle) * point
}

pub fn rotate_x(point: Point3<f32>, angle: f32) -> Point3<f32> {
    rotate_axis(point, angle, Axis::X)
}

pub fn rotate_y(point: Point3<f32>, angle: f32) -> Point3<f32> {
    rotate_axis(point, angle, Axis::Y)
}

pub fn rotate_z(point: Point3<f32>, angle: f32) -> Point3<f32> {
    rotate_axis(point, angle, Axis::Z)
}

/// Rotate about y, then x, then z, all by the same angle.
///
/// The order is part of the animation: other orders give a different tumble.
pub fn orient(point: Point3<f32>, angle: f32) -> Point3<f32> {
    let point = rotate_y(point, angle);
    let point = rotate_x(point, angle);
    rotate_z(point, angle)
}

/// Push `point` in front of the viewer by [`FORWARD_OFFSET`]
pub fn translate_forward(point: Point3<f32>) -> Point3<f32> {
    Point3::new(point.x, point.y, point.z + FORWARD_OFFSET)
}

/// Solids drawn by the wireframe renderer: a sampled sphere and a cube
use std::f32::consts::PI;

use crate::error::GeometryError;
use crate::geometry::Point3;

/// A latitude/longitude-sampled sphere with the y axis as its polar axis.
///
/// Points are stored row-major: latitude index `i` in `0..stacks`, longitude
/// index `j` in `0..slices`, flattened as `i * slices + j`. The first and last
/// rows collapse onto the poles.
#[derive(Debug, Clone)]
pub struct Sphere {
    stacks: usize,
    slices: usize,
    radius: f32,
    points: Vec<Point3<f32>>,
}

impl Sphere {
    pub fn new(stacks: usize, slices: usize, radius: f32) -> Result<Self, GeometryError> {
        if stacks < 2 {
            return Err(GeometryError::TooFewStacks(stacks));
        }
        if slices < 3 {
            return Err(GeometryError::TooFewSlices(slices));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidRadius(radius));
        }

        let mut points = Vec::with_capacity(stacks * slices);
        for i in 0..stacks {
            // Latitude from the north pole (0) to the south pole (PI)
            let phi = PI * i as f32 / (stacks - 1) as f32;
            let (sin_phi, cos_phi) = phi.sin_cos();

            for j in 0..slices {
                let theta = 2.0 * PI * j as f32 / slices as f32;
                let (sin_theta, cos_theta) = theta.sin_cos();

                points.push(Point3::new(
                    radius * sin_phi * cos_theta,
                    radius * cos_phi,
                    radius * sin_phi * sin_theta,
                ));
            }
        }

        Ok(Self {
            stacks,
            slices,
            radius,
            points,
        })
    }

    pub fn stacks(&self) -> usize {
        self.stacks
    }

    pub fn slices(&self) -> usize {
        self.slices
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn points(&self) -> &[Point3<f32>] {
        &self.points
    }

    /// The sample at latitude `i`, longitude `j`
    pub fn point(&self, i: usize, j: usize) -> Point3<f32> {
        self.points[i * self.slices + j]
    }

    /// Points of latitude ring `i`, in longitude order
    pub fn parallel(&self, i: usize) -> impl Iterator<Item = Point3<f32>> + '_ {
        let start = i * self.slices;
        self.points[start..start + self.slices].iter().copied()
    }

    /// Points at longitude `j`, from the north pole to the south pole
    pub fn meridian(&self, j: usize) -> impl Iterator<Item = Point3<f32>> + '_ {
        (0..self.stacks).map(move |i| self.point(i, j))
    }

    pub fn bounding_radius(&self) -> f32 {
        self.radius
    }
}

/// Front, back, top and bottom. The side faces are left out of the default
/// wireframe.
const FACES: [[usize; 4]; 4] = [
    [0, 1, 2, 3], // front
    [4, 5, 6, 7], // back
    [0, 1, 5, 4], // top
    [2, 3, 7, 6], // bottom
];

const SIDE_FACES: [[usize; 4]; 2] = [
    [0, 3, 7, 4], // right
    [1, 2, 6, 5], // left
];

/// An axis-aligned cube centered at the origin
#[derive(Debug, Clone)]
pub struct Cube {
    half_extent: f32,
    vertices: [Point3<f32>; 8],
    faces: Vec<[usize; 4]>,
}

impl Cube {
    pub fn new(half_extent: f32) -> Result<Self, GeometryError> {
        if !half_extent.is_finite() || half_extent <= 0.0 {
            return Err(GeometryError::InvalidExtent(half_extent));
        }

        let h = half_extent;
        let vertices = [
            Point3::new(h, h, h),
            Point3::new(-h, h, h),
            Point3::new(-h, -h, h),
            Point3::new(h, -h, h),
            Point3::new(h, h, -h),
            Point3::new(-h, h, -h),
            Point3::new(-h, -h, -h),
            Point3::new(h, -h, -h),
        ];

        Ok(Self {
            half_extent,
            vertices,
            faces: FACES.to_vec(),
        })
    }

    /// Also draw the left and right faces
    pub fn with_side_faces(mut self) -> Self {
        if self.faces.len() == FACES.len() {
            self.faces.extend_from_slice(&SIDE_FACES);
        }
        self
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    pub fn vertices(&self) -> &[Point3<f32>; 8] {
        &self.vertices
    }

    pub fn faces(&self) -> &[[usize; 4]] {
        &self.faces
    }

    /// The four edges of `face` as vertex pairs, wrapping the last corner back
    /// to the first
    pub fn face_edges(face: &[usize; 4]) -> [(usize, usize); 4] {
        std::array::from_fn(|k| (face[k], face[(k + 1) % 4]))
    }

    /// Distance from the center to a corner
    pub fn bounding_radius(&self) -> f32 {
        self.half_extent * 3.0_f32.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_grid_size() {
        let sphere = Sphere::new(10, 12, 0.175).unwrap();
        assert_eq!(sphere.points().len(), 120);
        assert_eq!(sphere.parallel(3).count(), 12);
        assert_eq!(sphere.meridian(5).count(), 10);
    }

    #[test]
    fn test_sphere_poles_collapse() {
        let sphere = Sphere::new(10, 12, 0.5).unwrap();
        for j in 0..12 {
            let north = sphere.point(0, j);
            let south = sphere.point(9, j);
            assert!(north.x.abs() < 1e-6 && north.z.abs() < 1e-6);
            assert!((north.y - 0.5).abs() < 1e-6);
            assert!(south.x.abs() < 1e-6 && south.z.abs() < 1e-6);
            assert!((south.y + 0.5).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sphere_points_on_surface() {
        let sphere = Sphere::new(7, 9, 0.25).unwrap();
        for p in sphere.points() {
            assert!((p.coords.norm() - 0.25).abs() < 1e-6);
        }
    }

    #[test]
    fn test_sphere_equator_longitudes() {
        let sphere = Sphere::new(3, 4, 1.0).unwrap();
        // Row 1 of 3 sits on the equator
        let ring: Vec<_> = sphere.parallel(1).collect();
        assert!((ring[0] - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-6);
        assert!((ring[1] - Point3::new(0.0, 0.0, 1.0)).norm() < 1e-6);
        assert!((ring[2] - Point3::new(-1.0, 0.0, 0.0)).norm() < 1e-6);
        assert!((ring[3] - Point3::new(0.0, 0.0, -1.0)).norm() < 1e-6);
    }

    #[test]
    fn test_meridian_matches_grid() {
        let sphere = Sphere::new(5, 6, 0.2).unwrap();
        let meridian: Vec<_> = sphere.meridian(2).collect();
        for (i, p) in meridian.iter().enumerate() {
            assert_eq!(*p, sphere.point(i, 2));
        }
    }

    #[test]
    fn test_sphere_rejects_bad_dimensions() {
        assert_eq!(Sphere::new(1, 12, 0.1).unwrap_err(), GeometryError::TooFewStacks(1));
        assert_eq!(Sphere::new(10, 2, 0.1).unwrap_err(), GeometryError::TooFewSlices(2));
        assert!(matches!(
            Sphere::new(10, 12, 0.0),
            Err(GeometryError::InvalidRadius(_))
        ));
        assert!(matches!(
            Sphere::new(10, 12, f32::NAN),
            Err(GeometryError::InvalidRadius(_))
        ));
    }

    #[test]
    fn test_cube_default_faces() {
        let cube = Cube::new(0.3).unwrap();
        assert_eq!(cube.faces().len(), 4);
        assert_eq!(cube.faces()[0], [0, 1, 2, 3]);
        assert_eq!(cube.faces()[3], [2, 3, 7, 6]);
        for face in cube.faces() {
            assert!(face.iter().all(|&idx| idx < cube.vertices().len()));
        }
    }

    #[test]
    fn test_cube_side_faces() {
        let cube = Cube::new(0.3).unwrap().with_side_faces().with_side_faces();
        assert_eq!(cube.faces().len(), 6);
    }

    #[test]
    fn test_face_edges_wrap() {
        let edges = Cube::face_edges(&[4, 5, 6, 7]);
        assert_eq!(edges, [(4, 5), (5, 6), (6, 7), (7, 4)]);
    }

    #[test]
    fn test_cube_bounding_radius() {
        let cube = Cube::new(0.3).unwrap();
        let farthest = cube
            .vertices()
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0_f32, f32::max);
        assert!((cube.bounding_radius() - farthest).abs() < 1e-6);
        assert!(Cube::new(-1.0).is_err());
    }
}

/// Per-frame wireframe generation: rotate, translate, project, connect
use crate::config::SceneConfig;
use crate::error::GeometryError;
use crate::geometry::{PixelPoint, Point3, Segment};
use crate::projection::{project, Viewport};
use crate::solid::{Cube, Sphere};
use crate::transform::{orient, translate_forward, FORWARD_OFFSET};

/// Direction a solid turns relative to the shared animation angle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Forward,
    Reverse,
}

impl Spin {
    pub fn apply(self, angle: f32) -> f32 {
        match self {
            Spin::Forward => angle,
            Spin::Reverse => -angle,
        }
    }
}

/// Receives pixel-space line segments, one call per segment
pub trait LineSink {
    fn draw_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);
}

impl LineSink for Vec<Segment> {
    fn draw_segment(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.push(Segment::new(PixelPoint::new(x1, y1), PixelPoint::new(x2, y2)));
    }
}

/// Carry one object-space point all the way to pixel space
pub fn pipeline(point: Point3<f32>, angle: f32, spin: Spin, viewport: &Viewport) -> PixelPoint {
    let rotated = orient(point, spin.apply(angle));
    viewport.to_pixel(project(translate_forward(rotated)))
}

/// Line segments for one frame, grouped by topology
#[derive(Debug, Clone, Default)]
pub struct Wireframe {
    /// One closed loop per latitude ring
    pub parallels: Vec<Vec<Segment>>,
    /// One open chain per longitude, pole to pole
    pub meridians: Vec<Vec<Segment>>,
    /// Four edges per drawn cube face
    pub cube_faces: Vec<[Segment; 4]>,
}

impl Wireframe {
    pub fn segment_count(&self) -> usize {
        self.parallels.iter().map(Vec::len).sum::<usize>()
            + self.meridians.iter().map(Vec::len).sum::<usize>()
            + self.cube_faces.len() * 4
    }

    /// All segments in draw order: parallels, meridians, cube faces
    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.parallels
            .iter()
            .flatten()
            .chain(self.meridians.iter().flatten())
            .chain(self.cube_faces.iter().flatten())
    }
}

/// The sphere and cube sharing one viewport
#[derive(Debug, Clone)]
pub struct Scene {
    sphere: Sphere,
    cube: Cube,
    viewport: Viewport,
}

impl Scene {
    /// Build a scene, rejecting any solid that would cross the projection
    /// plane at some orientation
    pub fn new(sphere: Sphere, cube: Cube, viewport: Viewport) -> Result<Self, GeometryError> {
        check_depth("sphere", sphere.bounding_radius())?;
        check_depth("cube", cube.bounding_radius())?;

        log::debug!(
            "Scene: sphere {}x{} r={}, cube h={} ({} faces), viewport {}x{}",
            sphere.stacks(),
            sphere.slices(),
            sphere.radius(),
            cube.half_extent(),
            cube.faces().len(),
            viewport.width(),
            viewport.height()
        );

        let scene = Self {
            sphere,
            cube,
            viewport,
        };
        log::debug!("Scene: {} segments per frame", scene.segments_per_frame());
        Ok(scene)
    }

    pub fn from_config(config: &SceneConfig) -> Result<Self, GeometryError> {
        let sphere = Sphere::new(
            config.sphere.stacks,
            config.sphere.slices,
            config.sphere.radius,
        )?;
        let mut cube = Cube::new(config.cube.half_extent)?;
        if config.cube.side_faces {
            cube = cube.with_side_faces();
        }
        let viewport = Viewport::new(config.viewport.width, config.viewport.height)?;
        Self::new(sphere, cube, viewport)
    }

    pub fn sphere(&self) -> &Sphere {
        &self.sphere
    }

    pub fn cube(&self) -> &Cube {
        &self.cube
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn segments_per_frame(&self) -> usize {
        let stacks = self.sphere.stacks();
        let slices = self.sphere.slices();
        stacks * slices + slices * (stacks - 1) + self.cube.faces().len() * 4
    }

    pub fn wireframe(&self, angle: f32) -> Wireframe {
        Wireframe {
            parallels: self.parallels(angle),
            meridians: self.meridians(angle),
            cube_faces: self.cube_faces(angle),
        }
    }

    /// Every segment of the frame at `angle`, in draw order
    pub fn render_frame(&self, angle: f32) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.segments_per_frame());
        self.draw(angle, &mut segments);
        segments
    }

    /// Hand every segment of the frame at `angle` to `sink`
    pub fn draw<S: LineSink + ?Sized>(&self, angle: f32, sink: &mut S) {
        let wireframe = self.wireframe(angle);
        for segment in wireframe.segments() {
            let (x1, y1, x2, y2) = segment.coords();
            sink.draw_segment(x1, y1, x2, y2);
        }
    }

    fn parallels(&self, angle: f32) -> Vec<Vec<Segment>> {
        (0..self.sphere.stacks())
            .map(|i| {
                let ring: Vec<PixelPoint> = self
                    .sphere
                    .parallel(i)
                    .map(|p| pipeline(p, angle, Spin::Forward, &self.viewport))
                    .collect();
                closed_loop(&ring)
            })
            .collect()
    }

    fn meridians(&self, angle: f32) -> Vec<Vec<Segment>> {
        (0..self.sphere.slices())
            .map(|j| {
                let chain: Vec<PixelPoint> = self
                    .sphere
                    .meridian(j)
                    .map(|p| pipeline(p, angle, Spin::Forward, &self.viewport))
                    .collect();
                open_chain(&chain)
            })
            .collect()
    }

    fn cube_faces(&self, angle: f32) -> Vec<[Segment; 4]> {
        let vertices = self.cube.vertices();
        self.cube
            .faces()
            .iter()
            .map(|face| {
                Cube::face_edges(face).map(|(a, b)| {
                    Segment::new(
                        pipeline(vertices[a], angle, Spin::Reverse, &self.viewport),
                        pipeline(vertices[b], angle, Spin::Reverse, &self.viewport),
                    )
                })
            })
            .collect()
    }
}

fn check_depth(solid: &'static str, extent: f32) -> Result<(), GeometryError> {
    if extent < FORWARD_OFFSET {
        return Ok(());
    }
    log::warn!(
        "Rejecting {}: extent {} reaches the projection plane at {}",
        solid,
        extent,
        FORWARD_OFFSET
    );
    Err(GeometryError::BeyondProjectionPlane {
        solid,
        extent,
        offset: FORWARD_OFFSET,
    })
}

/// Connect each point to the next, and the last back to the first
fn closed_loop(points: &[PixelPoint]) -> Vec<Segment> {
    let n = points.len();
    (0..n)
        .map(|k| Segment::new(points[k], points[(k + 1) % n]))
        .collect()
}

/// Connect each point to the next, without closing the chain
fn open_chain(points: &[PixelPoint]) -> Vec<Segment> {
    points
        .windows(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect()
}

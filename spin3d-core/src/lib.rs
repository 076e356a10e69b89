/// spin3d Core Library - Wireframe geometry pipeline
///
/// Generates the point sets of a sampled sphere and a cube, rotates them by
/// an animation angle, projects them to pixel space and connects them into
/// line segments. Drawing the segments is left to a [`LineSink`].

pub mod animation;
pub mod config;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod projection;
pub mod solid;
pub mod transform;

// Re-export commonly used types
pub use animation::{advance, Animation};
pub use config::SceneConfig;
pub use error::GeometryError;
pub use frame::{pipeline, LineSink, Scene, Spin, Wireframe};
pub use geometry::{NdcPoint, PixelPoint, Point3, Segment};
pub use projection::{project, Viewport};
pub use solid::{Cube, Sphere};
pub use transform::{orient, rotate_axis, translate_forward, Axis, FORWARD_OFFSET};

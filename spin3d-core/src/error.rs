/// Construction-time errors for solids, viewports and scenes
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("sphere needs at least 2 stacks, got {0}")]
    TooFewStacks(usize),

    #[error("sphere needs at least 3 slices, got {0}")]
    TooFewSlices(usize),

    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f32),

    #[error("cube half-extent must be positive and finite, got {0}")]
    InvalidExtent(f32),

    #[error("viewport must be at least 1x1 pixels, got {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    /// A solid reaches the projection plane once translated forward,
    /// which would put some vertex at depth <= 0.
    #[error("{solid} extends {extent} from its center, must stay below the forward offset {offset}")]
    BeyondProjectionPlane {
        solid: &'static str,
        extent: f32,
        offset: f32,
    },
}

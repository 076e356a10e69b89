//! Scene configuration
//!
//! Plain data describing the viewport, both solids and the spin rate.
//! Every section falls back to its defaults, so partial overrides are fine.

use serde::{Deserialize, Serialize};

use crate::animation::DEFAULT_RATE;

/// Everything needed to build a [`crate::Scene`] and its animation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Spin rate in radians per second
    pub angular_rate: f32,
    /// Output surface size in pixels
    pub viewport: ViewportConfig,
    /// Sampled sphere
    pub sphere: SphereConfig,
    /// Cube
    pub cube: CubeConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            angular_rate: DEFAULT_RATE,
            viewport: ViewportConfig::default(),
            sphere: SphereConfig::default(),
            cube: CubeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Latitude rings, poles included
    pub stacks: usize,
    /// Longitude samples per ring
    pub slices: usize,
    pub radius: f32,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            stacks: 20,
            slices: 20,
            radius: 0.175,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeConfig {
    pub half_extent: f32,
    /// Draw the left and right faces as well
    pub side_faces: bool,
}

impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            half_extent: 0.3,
            side_faces: false,
        }
    }
}

//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. Built-in defaults
//! 2. `config/default.toml`
//! 3. `config/user.toml` (gitignored, user overrides)
//! 4. Environment variables (`SPIN3D_SECTION__KEY`)

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use spin3d_core::SceneConfig;
use std::path::Path;
use thiserror::Error;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Solids, viewport and spin rate
    #[serde(default)]
    pub scene: SceneConfig,
    /// Terminal colors
    #[serde(default)]
    pub colors: ColorConfig,
    /// Render loop settings
    #[serde(default)]
    pub terminal: TerminalConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from the `config` directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // SPIN3D_SCENE__SPHERE__STACKS=12 -> scene.sphere.stacks = 12
        figment = figment.merge(Env::prefixed("SPIN3D_").split("__"));

        figment.extract().map_err(ConfigError::from)
    }
}

/// RGB colors for the terminal canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    pub background: [u8; 3],
    pub foreground: [u8; 3],
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: [20, 20, 20],
            foreground: [156, 174, 255],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Frame rate the render loop sleeps towards
    pub target_fps: u32,
    /// Show the FPS / controls line on the first row
    pub show_overlay: bool,
    /// Terminal cell height divided by cell width, used to keep the
    /// viewport's proportions on screen
    pub cell_aspect: f32,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            target_fps: 30,
            show_overlay: true,
            cell_aspect: crate::canvas::DEFAULT_CELL_ASPECT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Default log filter (error, warn, info, debug, trace); `RUST_LOG` wins
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug, Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(#[source] Box<figment::Error>);

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError(Box::new(e))
    }
}

//! Game configuration resource.
//!
//! Settings loaded from an INI file. Defaults are safe to start with, and
//! every missing key keeps its current value.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 60
//!
//! [time]
//! time_scale = 1.0
//!
//! [assets]
//! images = ./images.json
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::error::{EngineError, EngineResult, ensure_positive};

/// Default safe values for startup
const DEFAULT_WIDTH: u32 = 800;
const DEFAULT_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_TIME_SCALE: f64 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
///
/// Changes made while the game runs are picked up by
/// [`apply_gameconfig_changes`].
///
/// [`apply_gameconfig_changes`]: crate::systems::gameconfig::apply_gameconfig_changes
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Logical screen width in pixels.
    pub width: u32,
    /// Logical screen height in pixels.
    pub height: u32,
    /// Frames per second used by the fixed-step runner.
    pub target_fps: u32,
    /// Multiplier applied to every frame delta.
    pub time_scale: f64,
    /// JSON image manifest, see [`ImageStore`](crate::resources::imagestore::ImageStore).
    pub images: Option<PathBuf>,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            time_scale: DEFAULT_TIME_SCALE,
            images: None,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    pub fn load_from_file(&mut self) -> EngineResult<()> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| EngineError::Config(format!("Failed to load config file: {}", e)))?;
        self.apply_ini(&config)
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> EngineResult<()> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| EngineError::Config(format!("Failed to parse config: {}", e)))?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> EngineResult<()> {
        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            if fps == 0 {
                return Err(EngineError::Config("target_fps must be at least 1".into()));
            }
            self.target_fps = fps as u32;
        }

        // [time] section
        if let Some(scale) = config.getfloat("time", "time_scale").ok().flatten() {
            self.time_scale = ensure_positive("time_scale", scale)
                .map_err(|e| EngineError::Config(e.to_string()))?;
        }

        // [assets] section
        if let Some(images) = config.get("assets", "images") {
            self.images = Some(PathBuf::from(images));
        }

        info!(
            "Loaded config: {}x{}, fps={}, time_scale={}, images={:?}",
            self.width, self.height, self.target_fps, self.time_scale, self.images
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> EngineResult<()> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.width.to_string()));
        config.set("window", "height", Some(self.height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [time] section
        config.set("time", "time_scale", Some(self.time_scale.to_string()));

        // [assets] section
        if let Some(images) = &self.images {
            config.set("assets", "images", Some(images.display().to_string()));
        }

        config
            .write(&self.config_path)
            .map_err(|e| EngineError::Config(format!("Failed to save config file: {}", e)))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Set the logical screen size.
    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Seconds per frame of the fixed-step runner.
    pub fn frame_time(&self) -> f64 {
        1.0 / f64::from(self.target_fps.max(1))
    }
}

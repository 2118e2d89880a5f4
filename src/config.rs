//! Startup configuration
//!
//! Uses RON (Rusty Object Notation) so the file stays hand-editable.
//! Every field is optional; missing ones take the built-in defaults.

use crate::rasterizer::{Color, FillMethod, RasterSettings, Shading, HEIGHT, WIDTH};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default config file, looked up in the working directory
pub const CONFIG_FILE: &str = "murom.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub title: String,
    /// Framebuffer size in pixels
    pub width: usize,
    pub height: usize,
    /// Integer upscale factor for the window
    pub scale: u32,
    /// Clear color as RGB
    pub background: [u8; 3],
    pub fill: FillMethod,
    pub shading: Shading,
    pub vertex_markers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Murom".to_string(),
            width: WIDTH,
            height: HEIGHT,
            scale: 4,
            background: [92, 131, 181],
            fill: FillMethod::HalfSpace,
            shading: Shading::VertexColor,
            vertex_markers: true,
        }
    }
}

impl Config {
    pub fn background_color(&self) -> Color {
        let [r, g, b] = self.background;
        Color::new(r, g, b)
    }

    pub fn raster_settings(&self) -> RasterSettings {
        RasterSettings {
            fill: self.fill,
            shading: self.shading,
            vertex_marker: if self.vertex_markers { Some(Color::RED) } else { None },
        }
    }

    /// Clamp values that would produce an unusable window or buffer
    fn sanitized(mut self) -> Self {
        self.width = self.width.clamp(1, 4096);
        self.height = self.height.clamp(1, 4096);
        self.scale = self.scale.clamp(1, 16);
        self
    }
}

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
    Serialize(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::Serialize(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse a config from a RON string
pub fn config_from_str(s: &str) -> Result<Config, ConfigError> {
    let config: Config = ron::from_str(s)?;
    Ok(config.sanitized())
}

/// Load a config from a RON file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let contents = fs::read_to_string(path)?;
    config_from_str(&contents)
}

/// Load the config at `path`, falling back to defaults
///
/// A missing file is expected and only logged; a broken one is reported.
pub fn load_or_default<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    match load_config(path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            config
        }
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("no config at {}, using defaults", path.display());
            Config::default()
        }
        Err(e) => {
            log::warn!("ignoring config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Save a config to a RON file
pub fn save_config<P: AsRef<Path>>(config: &Config, path: P) -> Result<(), ConfigError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(2)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, contents)?;
    Ok(())
}

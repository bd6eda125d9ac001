use std::fs;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use image::Rgba;
use meshwire_core::{PolygonMode, RenderMode, RenderOptions, DEFAULT_SCALE};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, ValueEnum, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeSetting {
    /// Draw every vertex as a single pixel
    Points,
    /// Draw triangle outlines
    #[default]
    Wireframe,
}

impl From<ModeSetting> for RenderMode {
    fn from(mode: ModeSetting) -> Self {
        match mode {
            ModeSetting::Points => RenderMode::Points,
            ModeSetting::Wireframe => RenderMode::Wireframe,
        }
    }
}

#[derive(Clone, Copy, ValueEnum, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PolygonSetting {
    /// Outline only the first triangle of each face
    #[default]
    FirstTriangle,
    /// Outline every triangle of a fan around the first corner
    Fan,
}

impl From<PolygonSetting> for PolygonMode {
    fn from(mode: PolygonSetting) -> Self {
        match mode {
            PolygonSetting::FirstTriangle => PolygonMode::FirstTriangle,
            PolygonSetting::Fan => PolygonMode::Fan,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Input settings
    #[serde(default)]
    pub input: InputConfig,
    /// Rasterization parameters
    #[serde(default)]
    pub render: RenderConfig,
    /// Output settings
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// OBJ model to render
    pub mesh: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Pixels per model unit
    pub scale: f32,
    /// Points or wireframe
    pub mode: ModeSetting,
    /// Handling of faces with more than three corners
    pub polygon_mode: PolygonSetting,
    /// Draw color as RGBA
    pub color: [u8; 4],
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// PNG file to write
    pub path: PathBuf,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            mesh: PathBuf::from("../models/stanford_bunny_simplified.obj"),
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            width: 512,
            height: 512,
            scale: DEFAULT_SCALE,
            mode: ModeSetting::Wireframe,
            polygon_mode: PolygonSetting::FirstTriangle,
            color: [255, 255, 255, 255],
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            path: PathBuf::from("output.png"),
        }
    }
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
        let config_str = fs::read_to_string(config_path)?;
        Config::parse(&config_str, config_path)
    }

    /// Parse config text, picking the format from the path's extension
    pub fn parse(config_str: &str, config_path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
        let config: Config = match config_path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(config_str)?,
            Some("toml") => toml::from_str(config_str)?,
            _ => return Err("Unsupported config file format. Use .json or .toml".into()),
        };
        Ok(config)
    }

    pub fn save_default(config_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let config = Config::default();
        let config_str = match config_path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(&config)?,
            _ => toml::to_string_pretty(&config)?,
        };

        let mut file = File::create(config_path)?;
        file.write_all(config_str.as_bytes())?;
        println!("Generated default configuration file: {}", config_path.display());
        Ok(())
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.render.width,
            height: self.render.height,
            scale: self.render.scale,
            mode: self.render.mode.into(),
            polygon_mode: self.render.polygon_mode.into(),
            color: Rgba(self.render.color),
        }
    }
}

/// Meshwire - render an OBJ mesh as points or wireframe into a PNG
///
/// With no arguments it renders `../models/stanford_bunny_simplified.obj`
/// to `output.png` on a 512x512 canvas.
use std::path::PathBuf;
use std::process;

use clap::Parser;
use log::LevelFilter;
use meshwire_cli::config::{ModeSetting, PolygonSetting};
use meshwire_cli::{App, Config};
use meshwire_core::RenderError;
use simple_logger::SimpleLogger;

#[derive(Parser, Debug)]
#[command(name = "meshwire")]
#[command(about = "Rasterize an OBJ mesh as points or wireframe into a PNG image")]
#[command(version)]
struct Args {
    /// OBJ model to render
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// PNG file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file path (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate default configuration file and exit
    #[arg(long)]
    generate_config: bool,

    /// Canvas width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Pixels per model unit
    #[arg(long)]
    scale: Option<f32>,

    /// What to draw for the mesh
    #[arg(long)]
    mode: Option<ModeSetting>,

    /// How faces with more than three corners are outlined
    #[arg(long)]
    polygon_mode: Option<PolygonSetting>,

    /// Verbose output
    #[arg(long)]
    verbose: bool,
}

impl Args {
    /// Override config values with the ones given on the command line
    fn apply(&self, config: &mut Config) {
        if let Some(input) = &self.input {
            config.input.mesh = input.clone();
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(width) = self.width {
            config.render.width = width;
        }
        if let Some(height) = self.height {
            config.render.height = height;
        }
        if let Some(scale) = self.scale {
            config.render.scale = scale;
        }
        if let Some(mode) = self.mode {
            config.render.mode = mode;
        }
        if let Some(polygon_mode) = self.polygon_mode {
            config.render.polygon_mode = polygon_mode;
        }
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = SimpleLogger::new().with_level(level).init() {
        eprintln!("Failed to initialise logging: {}", e);
    }

    // Handle config generation
    if args.generate_config {
        let config_path = args
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from("meshwire.toml"));
        if let Err(e) = Config::save_default(&config_path) {
            eprintln!("Failed to write {}: {}", config_path.display(), e);
            process::exit(1);
        }
        return;
    }

    let mut config = match &args.config {
        Some(config_path) => match Config::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load {}: {}", config_path.display(), e);
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    args.apply(&mut config);

    let app = App::new(config);
    match app.run() {
        Ok(summary) => {
            println!(
                "Rendered {} vertices / {} faces to {}",
                summary.vertices,
                summary.faces,
                app.config().output.path.display()
            );
        }
        Err(RenderError::Mesh(e)) => {
            eprintln!("{}: {}", app.config().input.mesh.display(), e);
            process::exit(1);
        }
        Err(e) => {
            eprintln!("{}", e);
            process::exit(e.exit_code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_keeps_defaults() {
        let args = Args::parse_from(["meshwire"]);
        let mut config = Config::default();
        args.apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_arguments_override_config() {
        let args = Args::parse_from([
            "meshwire",
            "--input",
            "teapot.obj",
            "-o",
            "teapot.png",
            "--width",
            "256",
            "--scale",
            "120",
            "--mode",
            "points",
            "--polygon-mode",
            "fan",
        ]);
        let mut config = Config::default();
        args.apply(&mut config);

        assert_eq!(config.input.mesh, PathBuf::from("teapot.obj"));
        assert_eq!(config.output.path, PathBuf::from("teapot.png"));
        assert_eq!(config.render.width, 256);
        assert_eq!(config.render.height, 512);
        assert_eq!(config.render.scale, 120.0);
        assert_eq!(config.render.mode, ModeSetting::Points);
        assert_eq!(config.render.polygon_mode, PolygonSetting::Fan);
    }
}

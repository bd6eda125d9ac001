/// Command-line frontend: renders a configured OBJ mesh to a PNG file
use log::info;
use meshwire_core::{pipeline, ImageEncoder, PngEncoder, RenderError, RenderSummary};

pub mod config;

pub use config::Config;

/// One configured render job
pub struct App<E = PngEncoder> {
    config: Config,
    encoder: E,
}

impl App<PngEncoder> {
    pub fn new(config: Config) -> Self {
        Self::with_encoder(config, PngEncoder)
    }
}

impl<E: ImageEncoder> App<E> {
    pub fn with_encoder(config: Config, encoder: E) -> Self {
        Self { config, encoder }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self) -> Result<RenderSummary, RenderError> {
        let options = self.config.render_options();
        info!(
            "rendering {} at {}x{} (scale {}, {:?})",
            self.config.input.mesh.display(),
            options.width,
            options.height,
            options.scale,
            options.mode
        );
        pipeline::run(
            &self.config.input.mesh,
            &self.config.output.path,
            &options,
            &self.encoder,
        )
    }
}

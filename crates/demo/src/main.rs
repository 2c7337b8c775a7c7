//! wgpu demo - renders a triangle, or a glTF model, into a window.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use common::{Color, DemoError, Outcome};
use demo::{Application, DemoConfig};
use model::Model;
use window::{WindowBackend, WindowFlags, WindowSystemFactory};

/// wgpu demo - renders a triangle or a glTF model
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// glTF or GLB model to render instead of the triangle
    #[arg(long)]
    model: Option<String>,

    /// Window width
    #[arg(long, default_value = "800")]
    width: u32,

    /// Window height
    #[arg(long, default_value = "600")]
    height: u32,

    /// Window title
    #[arg(long, default_value = "hello")]
    title: String,

    /// Start fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Make the window non-resizable
    #[arg(long)]
    no_resize: bool,

    /// Prefer a low-power GPU
    #[arg(long)]
    low_power: bool,

    /// Clear colour as RRGGBB or RRGGBBAA hex
    #[arg(long, default_value = "f3597c")]
    clear_color: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn flags(&self) -> WindowFlags {
        let mut flags = WindowFlags::empty();
        flags.set(WindowFlags::RESIZABLE, !self.no_resize);
        flags.set(WindowFlags::FULLSCREEN, self.fullscreen);
        flags
    }

    fn to_config(&self) -> Outcome<DemoConfig, DemoError> {
        Color::parse_hex(&self.clear_color)
            .ok_or(DemoError::config(format!(
                "invalid clear colour {:?}",
                self.clear_color
            )))
            .map(|clear_color| {
                let mut config = DemoConfig::new()
                    .with_title(&self.title)
                    .with_size(self.width, self.height)
                    .with_flags(self.flags())
                    .with_clear_color(clear_color)
                    .with_low_power(self.low_power);
                if let Some(path) = &self.model {
                    config = config.with_model(path);
                }
                config
            })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("wgpu demo v{}", demo::VERSION);

    let config = args.to_config().into_result()?;

    let mut app = Application::new(config.clone());
    if let Some(path) = &config.model_path {
        info!("Loading model: {}", path.display());
        let model = Model::from_path(path)
            .map_err(DemoError::model)
            .into_result()?
            .normalized();
        info!("Model loaded: {} triangles", model.triangle_count());
        app = app.with_model(model);
    }

    let window_system =
        WindowSystemFactory::create(WindowBackend::Winit).expect("cannot create window system");

    if window_system.run(&mut app).is_err() {
        anyhow::bail!("event loop exited with an error");
    }

    info!("Demo shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default() {
        let args = Args::parse_from(["wgpu-demo"]);
        assert!(args.model.is_none());
        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.title, "hello");
        assert_eq!(args.flags(), WindowFlags::RESIZABLE);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_to_config() {
        let args = Args::parse_from([
            "wgpu-demo",
            "--model",
            "box.glb",
            "--fullscreen",
            "--no-resize",
            "--clear-color",
            "000000ff",
        ]);
        let config = args.to_config().unwrap();

        assert_eq!(config.window.flags, WindowFlags::FULLSCREEN);
        assert_eq!(config.clear_color, Color::BLACK);
        assert_eq!(
            config.model_path.as_deref(),
            Some(std::path::Path::new("box.glb"))
        );
    }

    #[test]
    fn test_args_default_clear_color() {
        let config = Args::parse_from(["wgpu-demo"]).to_config().unwrap();
        assert_eq!(config.clear_color, Color::CORAL_PINK);
    }

    #[test]
    fn test_args_invalid_clear_color() {
        let args = Args::parse_from(["wgpu-demo", "--clear-color", "pink"]);
        assert!(args.to_config().is_err());
    }
}

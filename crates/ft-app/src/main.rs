use anyhow::Result;
use clap::Parser;
use ft_core::config::{self, SceneConfig};

pub mod app;
pub mod cli;

fn main() -> Result<()> {
    // 1. Parse CLI
    let cli = cli::Cli::parse();

    // 2. Initialize logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Resolve the scene and apply CLI overrides
    let scene = resolve_scene(&cli)?;

    // 4. Terminal up, run, terminal down (always restored, even on error)
    let terminal = ratatui::init();
    let result = app::App::new(scene).run(terminal);
    ratatui::restore();

    result
}

/// Load the scene file, fall back to the built-in scene when the default
/// path does not exist, and apply CLI overrides. Overrides are validated too:
/// `--depth` may not exceed the recursion cap.
fn resolve_scene(cli: &cli::Cli) -> Result<SceneConfig> {
    let mut scene = if cli.scene.exists() {
        config::load_scene(&cli.scene)?
    } else {
        log::warn!(
            "scene file not found: {}. Using the built-in scene.",
            cli.scene.display()
        );
        SceneConfig::default()
    };

    if let Some(depth) = cli.depth {
        for spec in &mut scene.triangles {
            spec.depth = depth;
        }
    }
    if let Some(glyph) = cli.glyph {
        for spec in &mut scene.triangles {
            spec.glyph = glyph;
        }
    }
    if cli.no_color {
        scene.color_enabled = false;
    }

    scene.validate()?;
    Ok(scene)
}

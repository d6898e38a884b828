use std::path::PathBuf;

use clap::Parser;

/// fracterm — Sierpinski triangles in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Scene description file (TOML). Falls back to built-in scene if absent.
    #[arg(short, long, default_value = "config/scene.toml")]
    pub scene: PathBuf,

    /// Override the recursion depth of every triangle in the scene.
    #[arg(long)]
    pub depth: Option<u32>,

    /// Override the border glyph of every triangle in the scene.
    #[arg(long)]
    pub glyph: Option<char>,

    /// Disable truecolor output.
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cli = Cli::parse_from(["fracterm"]);
        assert_eq!(cli.scene, PathBuf::from("config/scene.toml"));
        assert!(cli.depth.is_none());
        assert!(!cli.no_color);
        assert_eq!(cli.log_level, "warn");
    }

    #[test]
    fn overrides_parse() {
        let cli = Cli::parse_from(["fracterm", "--depth", "3", "--glyph", "#", "--no-color"]);
        assert_eq!(cli.depth, Some(3));
        assert_eq!(cli.glyph, Some('#'));
        assert!(cli.no_color);
    }
}

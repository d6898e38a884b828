/// TUI presentation for fracterm.
///
/// Writes the rasterized cell grid straight into a ratatui buffer and lays
/// out the banner text around it.

pub mod canvas;
pub mod ui;

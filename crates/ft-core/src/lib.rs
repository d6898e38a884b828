/// Shared types and configuration for fracterm.
///
/// This crate contains the geometry value types, the plot surface
/// abstraction, and the scene configuration used across the workspace.

pub mod config;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod surface;

pub use config::SceneConfig;
pub use error::CoreError;
pub use geometry::{Point, Triangle};
pub use grid::{Cell, CellGrid};
pub use surface::{Pen, PlotSurface};

/// Integer-only rasterization for fracterm.
///
/// `line` converts integer segment endpoints into exact cell coverage;
/// `sierpinski` recursively subdivides a triangle and draws its borders
/// through the line rasterizer.

pub mod line;
pub mod sierpinski;

pub use line::rasterize;
pub use sierpinski::generate;

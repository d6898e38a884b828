use crate::geometry::Point;

/// Glyph plus truecolor foreground, carried through the rasterizer untouched.
///
/// The core never interprets a pen; it is an opaque token the target surface
/// understands.
///
/// # Example
/// ```
/// use ft_core::surface::Pen;
/// let pen = Pen::new('◆', (0, 255, 255));
/// assert_eq!(pen.glyph, '◆');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pen {
    /// Character written into each visited cell.
    pub glyph: char,
    /// Foreground color (RGB).
    pub color: (u8, u8, u8),
}

impl Pen {
    /// Create a pen from a glyph and an RGB color.
    #[must_use]
    pub const fn new(glyph: char, color: (u8, u8, u8)) -> Self {
        Self { glyph, color }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self::new('◆', (255, 255, 255))
    }
}

/// A 2D discrete drawing surface receiving per-cell writes.
///
/// This is the explicit handle passed into the rasterizer and the fractal
/// generator in place of any process-wide current-screen singleton.
///
/// CONTRACT: `plot` may be called with coordinates outside the surface; the
/// implementor must clip or ignore them, never panic. The core does not query
/// bounds and does not read back prior contents.
///
/// # Example
/// ```
/// use ft_core::geometry::Point;
/// use ft_core::surface::{Pen, PlotSurface};
///
/// struct Count(usize);
/// impl PlotSurface for Count {
///     fn plot(&mut self, _p: Point, _pen: Pen) { self.0 += 1; }
/// }
/// ```
pub trait PlotSurface {
    /// Write `pen` at `p`. Side effect only.
    fn plot(&mut self, p: Point, pen: Pen);
}

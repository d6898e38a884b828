use crate::geometry::Point;
use crate::surface::{Pen, PlotSurface};

/// Single cell of the output grid.
///
/// # Example
/// ```
/// use ft_core::grid::Cell;
/// let cell = Cell::default();
/// assert_eq!(cell.ch, ' ');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Character to display.
    pub ch: char,
    /// Foreground color (RGB).
    pub fg: (u8, u8, u8),
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: (0, 0, 0),
        }
    }
}

/// Character grid the fractal is rasterized into.
///
/// Flat row-major cell array. Writes outside the grid are silently dropped;
/// the rasterizer may legitimately request off-surface coordinates.
///
/// # Example
/// ```
/// use ft_core::geometry::Point;
/// use ft_core::grid::CellGrid;
/// use ft_core::surface::{Pen, PlotSurface};
///
/// let mut grid = CellGrid::new(80, 24);
/// grid.plot(Point::new(0, 0), Pen::new('#', (255, 0, 0)));
/// assert_eq!(grid.get(0, 0).ch, '#');
/// ```
#[derive(Clone)]
pub struct CellGrid {
    /// Flat array of cells, row-major.
    pub cells: Vec<Cell>,
    /// Width in characters.
    pub width: u16,
    /// Height in characters.
    pub height: u16,
}

impl CellGrid {
    /// Create a grid of empty cells.
    ///
    /// # Example
    /// ```
    /// use ft_core::grid::CellGrid;
    /// let grid = CellGrid::new(80, 24);
    /// assert_eq!(grid.cells.len(), 80 * 24);
    /// ```
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            cells: vec![Cell::default(); width as usize * height as usize],
            width,
            height,
        }
    }

    /// Cell reference at position (x, y).
    ///
    /// # Panics
    /// Panics if (x, y) is outside the grid.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> &Cell {
        &self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Reset all cells to empty.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = Cell::default();
        }
    }
}

impl PlotSurface for CellGrid {
    /// Write `pen` at `p`, ignoring out-of-bounds coordinates.
    #[inline]
    fn plot(&mut self, p: Point, pen: Pen) {
        if p.x < 0 || p.y < 0 || p.x >= i32::from(self.width) || p.y >= i32::from(self.height) {
            return;
        }
        let idx = p.y as usize * self.width as usize + p.x as usize;
        self.cells[idx] = Cell {
            ch: pen.glyph,
            fg: pen.color,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plot_writes_in_bounds() {
        let mut grid = CellGrid::new(10, 10);
        grid.plot(Point::new(5, 5), Pen::new('#', (1, 2, 3)));
        assert_eq!(grid.get(5, 5).ch, '#');
        assert_eq!(grid.get(5, 5).fg, (1, 2, 3));
    }

    #[test]
    fn plot_clips_out_of_bounds() {
        let mut grid = CellGrid::new(4, 4);
        let before = grid.cells.clone();
        grid.plot(Point::new(-1, 0), Pen::default());
        grid.plot(Point::new(0, -1), Pen::default());
        grid.plot(Point::new(4, 0), Pen::default());
        grid.plot(Point::new(0, 4), Pen::default());
        grid.plot(Point::new(1000, 1000), Pen::default());
        assert_eq!(grid.cells, before);
    }

    #[test]
    fn clear_resets_cells() {
        let mut grid = CellGrid::new(3, 3);
        grid.plot(Point::new(1, 1), Pen::new('@', (255, 255, 255)));
        grid.clear();
        assert_eq!(grid.get(1, 1).ch, ' ');
    }
}

use ft_core::grid::CellGrid;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;

/// Write a `CellGrid` directly into a `ratatui::Buffer`.
///
/// No Canvas widget — direct cell writes, clamped to the intersection of the
/// grid and `area`. Empty cells are skipped so the terminal background shows
/// through untouched.
///
/// # Example
/// ```
/// use ft_core::grid::CellGrid;
/// use ft_render::canvas::render_grid;
/// use ratatui::buffer::Buffer;
/// use ratatui::layout::Rect;
///
/// let area = Rect::new(0, 0, 10, 5);
/// let mut buf = Buffer::empty(area);
/// let grid = CellGrid::new(10, 5);
/// render_grid(&mut buf, area, &grid, true);
/// ```
pub fn render_grid(buf: &mut Buffer, area: Rect, grid: &CellGrid, color_enabled: bool) {
    for cy in 0..grid.height.min(area.height) {
        for cx in 0..grid.width.min(area.width) {
            let cell = grid.get(cx, cy);
            if cell.ch == ' ' {
                continue;
            }
            let buf_x = area.x + cx;
            let buf_y = area.y + cy;

            if let Some(buf_cell) = buf.cell_mut((buf_x, buf_y)) {
                buf_cell.set_char(cell.ch);
                if color_enabled {
                    buf_cell.set_fg(Color::Rgb(cell.fg.0, cell.fg.1, cell.fg.2));
                } else {
                    buf_cell.set_fg(Color::Reset);
                }
            }
        }
    }
}

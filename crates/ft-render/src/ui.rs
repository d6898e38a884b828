use ft_core::grid::CellGrid;
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};

use crate::canvas;

/// Title line shown above the figure.
pub const TITLE: &str = "Sierpinski triangle";
/// Exit hint shown under the title.
pub const EXIT_HINT: &str = "Hit <ENTER> to exit";

/// Draw the full UI: canvas over the whole frame, banner lines on top.
pub fn draw(frame: &mut Frame, grid: &CellGrid, color_enabled: bool) {
    let area = frame.area();
    let buf = frame.buffer_mut();

    canvas::render_grid(buf, area, grid, color_enabled);

    draw_centered(buf, area, 1, TITLE, Style::default().add_modifier(Modifier::BOLD));
    draw_centered(buf, area, 4, EXIT_HINT, Style::default().add_modifier(Modifier::DIM));
}

/// Write `text` horizontally centered on row `y` of `area`.
fn draw_centered(buf: &mut Buffer, area: Rect, y: u16, text: &str, style: Style) {
    if y >= area.height {
        return;
    }
    let len = text.chars().count() as u16;
    let x = area.x + area.width.saturating_sub(len) / 2;
    buf.set_stringn(x, area.y + y, text, usize::from(area.width), style);
}

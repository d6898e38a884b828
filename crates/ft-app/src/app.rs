use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ft_core::config::SceneConfig;
use ft_core::grid::CellGrid;
use ft_raster::sierpinski::generate;
use ft_render::ui;
use ratatui::DefaultTerminal;

/// Rasterize every triangle of the scene into a grid of the given size.
///
/// Triangles falling partly (or wholly) outside the grid are clipped by the
/// grid itself; the generator never queries bounds.
#[must_use]
pub fn render_scene(scene: &SceneConfig, width: u16, height: u16) -> CellGrid {
    let mut grid = CellGrid::new(width, height);
    for spec in &scene.triangles {
        generate(&mut grid, spec.triangle(), spec.depth, spec.pen());
    }
    grid
}

/// Application state: the resolved scene, rendered once per terminal size.
pub struct App {
    scene: SceneConfig,
}

impl App {
    /// Build the app from a validated scene.
    #[must_use]
    pub fn new(scene: SceneConfig) -> Self {
        Self { scene }
    }

    /// Draw the scene, then block until the user quits.
    ///
    /// The fractal is evaluated to completion before anything is presented;
    /// afterwards the loop only wakes on input. A resize redraws at the new
    /// size, Enter / Esc / q exits.
    ///
    /// # Errors
    /// Propagates terminal draw/flush and event-read failures.
    pub fn run(&mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            terminal.draw(|frame| {
                let area = frame.area();
                let grid = render_scene(&self.scene, area.width, area.height);
                ui::draw(frame, &grid, self.scene.color_enabled);
            })?;

            // Blocking read: single-threaded, no timers, no frame pacing.
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q') => return Ok(()),
                    _ => {}
                },
                Event::Resize(w, h) => {
                    log::debug!("terminal resized to {w}x{h}, re-rendering");
                }
                _ => {}
            }
        }
    }
}

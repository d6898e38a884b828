use ft_core::geometry::Triangle;
use ft_core::surface::{Pen, PlotSurface};

use crate::line::rasterize;

/// Draw the Sierpinski approximation of `triangle` at `depth` onto `surface`.
///
/// `depth == 0` returns without plotting anything at all: edges are drawn
/// only by calls returning from `depth > 0`, so the visible figure at depth d
/// consists of `3 * (3^d - 1) / 2` borders. Each recursive level subdivides
/// into the three corner triangles, recurses, then draws the current
/// triangle's own three borders — children first, so a parent border lands on
/// top of the coincident child borders, deterministically.
///
/// Termination is bounded by `depth` alone; the recursion never allocates and
/// holds at most `depth` frames live.
///
/// # Example
/// ```
/// use ft_core::geometry::{Point, Triangle};
/// use ft_core::grid::CellGrid;
/// use ft_core::surface::Pen;
/// use ft_raster::sierpinski::generate;
///
/// let mut grid = CellGrid::new(60, 40);
/// let t = Triangle::new(Point::new(30, 0), Point::new(0, 30), Point::new(59, 30));
/// generate(&mut grid, t, 3, Pen::new('◆', (0, 255, 255)));
/// assert_eq!(grid.get(30, 0).ch, '◆');
/// ```
pub fn generate<S: PlotSurface>(surface: &mut S, triangle: Triangle, depth: u32, pen: Pen) {
    if depth == 0 {
        return;
    }

    for child in triangle.subdivide() {
        generate(surface, child, depth - 1, pen);
    }

    for (from, to) in triangle.edges() {
        rasterize(surface, from, to, pen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ft_core::geometry::Point;

    /// Test surface counting plot calls.
    #[derive(Default)]
    struct Counter {
        plots: usize,
    }

    impl PlotSurface for Counter {
        fn plot(&mut self, _p: Point, _pen: Pen) {
            self.plots += 1;
        }
    }

    fn sample_triangle() -> Triangle {
        Triangle::new(Point::new(0, 50), Point::new(25, 0), Point::new(50, 50))
    }

    fn plot_count(triangle: Triangle, depth: u32) -> usize {
        let mut counter = Counter::default();
        generate(&mut counter, triangle, depth, Pen::default());
        counter.plots
    }

    /// Reference plot count: every level draws its own three borders after
    /// recursing, nothing at depth 0.
    fn expected_plots(triangle: Triangle, depth: u32) -> usize {
        if depth == 0 {
            return 0;
        }
        let mut total: usize = triangle
            .subdivide()
            .iter()
            .map(|child| expected_plots(*child, depth - 1))
            .sum();
        let mut edge_counter = Counter::default();
        for (from, to) in triangle.edges() {
            rasterize(&mut edge_counter, from, to, Pen::default());
        }
        total += edge_counter.plots;
        total
    }

    #[test]
    fn depth_zero_plots_nothing() {
        assert_eq!(plot_count(sample_triangle(), 0), 0);
    }

    #[test]
    fn depth_one_draws_exactly_the_three_borders() {
        let triangle = sample_triangle();
        let mut borders_only = Counter::default();
        for (from, to) in triangle.edges() {
            rasterize(&mut borders_only, from, to, Pen::default());
        }
        assert_eq!(plot_count(triangle, 1), borders_only.plots);
    }

    #[test]
    fn plot_count_follows_recursive_edge_accounting() {
        let triangle = sample_triangle();
        for depth in 0..=4 {
            assert_eq!(
                plot_count(triangle, depth),
                expected_plots(triangle, depth),
                "depth {depth}"
            );
        }
    }

    #[test]
    fn edge_count_is_three_times_geometric_sum() {
        // E(d) = 3 + 3*E(d-1), E(0) = 0, i.e. 3 * (3^d - 1) / 2.
        fn edges(triangle: Triangle, depth: u32) -> usize {
            if depth == 0 {
                return 0;
            }
            triangle
                .subdivide()
                .iter()
                .map(|child| edges(*child, depth - 1))
                .sum::<usize>()
                + 3
        }
        let triangle = sample_triangle();
        for depth in 0..=6u32 {
            let closed_form = 3 * (3usize.pow(depth) - 1) / 2;
            assert_eq!(edges(triangle, depth), closed_form, "depth {depth}");
        }
    }

    #[test]
    fn plot_count_grows_strictly_with_depth() {
        let triangle = sample_triangle();
        let mut prev = plot_count(triangle, 0);
        for depth in 1..=5 {
            let count = plot_count(triangle, depth);
            assert!(count > prev, "no growth from depth {} to {depth}", depth - 1);
            prev = count;
        }
    }

    #[test]
    fn borders_land_on_grid() {
        use ft_core::grid::CellGrid;
        let mut grid = CellGrid::new(51, 51);
        generate(&mut grid, sample_triangle(), 2, Pen::new('#', (255, 255, 255)));
        // All three outer vertices are border cells at depth >= 1.
        assert_eq!(grid.get(0, 50).ch, '#');
        assert_eq!(grid.get(25, 0).ch, '#');
        assert_eq!(grid.get(50, 50).ch, '#');
    }
}

use ft_core::geometry::Point;
use ft_core::surface::{Pen, PlotSurface};

/// Rasterize the segment from `p0` to `p1` inclusive onto `surface`.
///
/// Integer-only incremental algorithm with a repeated-subtraction decision
/// accumulator: the major axis advances one cell per iteration, and the minor
/// axis advances whenever the accumulator (seeded with the major delta) has
/// been drained to zero or below by subtracting the minor delta. Which of two
/// diagonally adjacent cells wins a tie is part of the visual contract —
/// sibling fractal borders must land on identical cells.
///
/// Endpoints are canonically ordered before scanning, so `(p0, p1)` and
/// `(p1, p0)` cover the identical cell set (not necessarily in the same
/// order). The eight direction octants collapse into one shallow and one
/// steep mapping over a single scan.
///
/// A zero-length segment plots exactly one cell. Axis-aligned segments never
/// step the minor axis.
///
/// # Example
/// ```
/// use ft_core::geometry::Point;
/// use ft_core::grid::CellGrid;
/// use ft_core::surface::Pen;
/// use ft_raster::line::rasterize;
///
/// let mut grid = CellGrid::new(10, 10);
/// rasterize(&mut grid, Point::new(0, 0), Point::new(3, 3), Pen::new('#', (255, 255, 255)));
/// assert_eq!(grid.get(2, 2).ch, '#');
/// assert_eq!(grid.get(2, 1).ch, ' ');
/// ```
pub fn rasterize<S: PlotSurface>(surface: &mut S, p0: Point, p1: Point, pen: Pen) {
    // Canonical endpoint order: scan left to right (top to bottom on ties).
    // The accumulator is anchored at the canonical start, which makes cell
    // coverage independent of argument order.
    let (p0, p1) = if (p1.x, p1.y) < (p0.x, p0.y) {
        (p1, p0)
    } else {
        (p0, p1)
    };

    let dx = p1.x - p0.x; // >= 0 after ordering
    let dy = p1.y - p0.y;
    let sy = dy.signum();

    if dx >= dy.abs() {
        // Shallow: x is the major axis, y steps by sy on accumulator drain.
        scan(dx, dy.abs(), |maj, min| {
            surface.plot(Point::new(p0.x + maj, p0.y + sy * min), pen);
        });
    } else {
        // Steep: y is the major axis (direction sy), x only ever grows.
        scan(dy.abs(), dx, |maj, min| {
            surface.plot(Point::new(p0.x + min, p0.y + sy * maj), pen);
        });
    }
}

/// One-octant accumulator walk, `dmaj >= dmin >= 0`.
///
/// Emits `(major, minor)` offsets from the anchor endpoint, one per major
/// step, `dmaj + 1` in total. When `dmin == 0` the accumulator never drains
/// past its seed, so the minor offset the caller applies stays zero (the
/// degenerate `dmaj == 0` emission is neutralized by the caller's zero sign).
fn scan(dmaj: i32, dmin: i32, mut emit: impl FnMut(i32, i32)) {
    let mut dec = dmaj;
    let mut min = 0;
    for maj in 0..=dmaj {
        if dec <= 0 {
            dec += dmaj;
            min += 1;
        }
        emit(maj, min);
        dec -= dmin;
    }
}

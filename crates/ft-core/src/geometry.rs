use serde::{Deserialize, Serialize};

/// A coordinate on the integer cell grid.
///
/// Pure value type, no identity beyond its coordinates.
///
/// # Example
/// ```
/// use ft_core::geometry::Point;
/// let p = Point::new(3, 4);
/// assert_eq!(p.x, 3);
/// assert_eq!(p.y, 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Point {
    /// Column, growing rightwards.
    pub x: i32,
    /// Row, growing downwards (terminal convention).
    pub y: i32,
}

impl Point {
    /// Create a point from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Midpoint of `self` and `other` with floor-division averaging.
    ///
    /// Floor (not truncation toward zero, not rounding) keeps sibling
    /// triangles tiling exactly: the same two vertices always map to the
    /// same midpoint cell, at every recursion level, on both sides of zero.
    ///
    /// # Example
    /// ```
    /// use ft_core::geometry::Point;
    /// let m = Point::new(0, 0).midpoint(Point::new(5, 3));
    /// assert_eq!(m, Point::new(2, 1));
    /// // Floor, not truncation: (-3 + 0) / 2 floors to -2.
    /// let m = Point::new(-3, 0).midpoint(Point::new(0, 0));
    /// assert_eq!(m, Point::new(-2, 0));
    /// ```
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x).div_euclid(2),
            y: (self.y + other.y).div_euclid(2),
        }
    }
}

/// An ordered vertex triple.
///
/// Orientation (which vertex is top/left/right) is fixed by the caller and
/// preserved through subdivision, so the vertex-to-edge mapping stays
/// consistent across recursive calls.
///
/// # Example
/// ```
/// use ft_core::geometry::{Point, Triangle};
/// let t = Triangle::new(Point::new(65, 0), Point::new(0, 65), Point::new(130, 65));
/// assert_eq!(t.edges()[0], (t.a, t.b));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    /// First vertex.
    pub a: Point,
    /// Second vertex.
    pub b: Point,
    /// Third vertex.
    pub c: Point,
}

impl Triangle {
    /// Create a triangle from its three vertices.
    #[must_use]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// The three borders A–B, B–C, C–A.
    #[must_use]
    pub const fn edges(&self) -> [(Point, Point); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// The three half-scale corner triangles.
    ///
    /// Each child keeps one original vertex and replaces the other two with
    /// the adjacent edge midpoints. Midpoints are recomputed per call rather
    /// than cached; `Point::midpoint` guarantees they agree between siblings.
    ///
    /// # Example
    /// ```
    /// use ft_core::geometry::{Point, Triangle};
    /// let t = Triangle::new(Point::new(0, 0), Point::new(4, 0), Point::new(0, 4));
    /// let [ta, tb, tc] = t.subdivide();
    /// assert_eq!(ta.a, t.a);
    /// assert_eq!(tb.b, t.b);
    /// assert_eq!(tc.c, t.c);
    /// ```
    #[must_use]
    pub fn subdivide(&self) -> [Self; 3] {
        let mab = self.a.midpoint(self.b);
        let mbc = self.b.midpoint(self.c);
        let mca = self.c.midpoint(self.a);
        [
            Self::new(self.a, mab, mca),
            Self::new(mab, self.b, mbc),
            Self::new(mca, mbc, self.c),
        ]
    }
}

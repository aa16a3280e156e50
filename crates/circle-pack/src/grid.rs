//! Collision lookup against already placed circles.
//!
//! [`Occupancy`] is the seam the placement primitive checks candidates
//! through. A plain slice answers by scanning every circle; [`SpatialGrid`]
//! buckets circles by center cell so a query only visits cells within reach
//! of the candidate. Both give the same answer for the same circles.

use crate::geometry::{Canvas, PlacedCircle, circles_overlap};

/// Upper bound on grid columns/rows, so tiny circles on a huge canvas do
/// not allocate millions of empty cells.
const MAX_CELLS_PER_AXIS: usize = 256;

/// Answers whether a candidate circle would collide with existing ones.
pub trait Occupancy {
    /// True if a circle at `(x, y)` with `radius` comes closer than
    /// `min_distance` to any existing circle.
    fn collides(&self, x: f64, y: f64, radius: f64, min_distance: f64) -> bool;
}

impl Occupancy for [PlacedCircle] {
    fn collides(&self, x: f64, y: f64, radius: f64, min_distance: f64) -> bool {
        self.iter()
            .any(|c| circles_overlap(x, y, radius, c.x, c.y, c.radius, min_distance))
    }
}

impl Occupancy for Vec<PlacedCircle> {
    fn collides(&self, x: f64, y: f64, radius: f64, min_distance: f64) -> bool {
        self.as_slice().collides(x, y, radius, min_distance)
    }
}

/// Uniform grid of circle indices keyed by center cell.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f64,
    cols: usize,
    rows: usize,
    cells: Vec<Vec<usize>>,
    circles: Vec<PlacedCircle>,
    max_radius: f64,
}

impl SpatialGrid {
    /// Create an empty grid covering `canvas`.
    ///
    /// `cell_size` is a hint; it is raised when needed to respect the
    /// per-axis cell cap. Any positive size gives correct answers, a size
    /// near the largest circle diameter plus the gap gives the fewest visits.
    pub fn new(canvas: Canvas, cell_size: f64) -> Self {
        let longest = canvas.width.max(canvas.height);
        let floor = longest / MAX_CELLS_PER_AXIS as f64;
        let cell_size = if cell_size.is_finite() && cell_size > floor {
            cell_size
        } else {
            floor
        };
        let cell_size = if cell_size > 0.0 { cell_size } else { 1.0 };

        let cols = ((canvas.width / cell_size).ceil() as usize).clamp(1, MAX_CELLS_PER_AXIS);
        let rows = ((canvas.height / cell_size).ceil() as usize).clamp(1, MAX_CELLS_PER_AXIS);

        Self {
            cell_size,
            cols,
            rows,
            cells: vec![Vec::new(); cols * rows],
            circles: Vec::new(),
            max_radius: 0.0,
        }
    }

    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Grid dimensions as (columns, rows).
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }

    /// Circles in insertion order.
    pub fn circles(&self) -> &[PlacedCircle] {
        &self.circles
    }

    pub fn into_circles(self) -> Vec<PlacedCircle> {
        self.circles
    }

    pub fn insert(&mut self, circle: PlacedCircle) {
        let col = Self::axis_cell(circle.x, self.cell_size, self.cols);
        let row = Self::axis_cell(circle.y, self.cell_size, self.rows);
        self.max_radius = self.max_radius.max(circle.radius);
        self.cells[row * self.cols + col].push(self.circles.len());
        self.circles.push(circle);
    }

    /// Cell index along one axis, clamped onto the grid.
    ///
    /// Clamping keeps out-of-canvas circles in the border cells, which stays
    /// correct because the mapping is monotone.
    #[inline]
    fn axis_cell(v: f64, cell_size: f64, n: usize) -> usize {
        let idx = (v / cell_size).floor();
        if idx <= 0.0 {
            0
        } else {
            (idx as usize).min(n - 1)
        }
    }
}

impl Occupancy for SpatialGrid {
    fn collides(&self, x: f64, y: f64, radius: f64, min_distance: f64) -> bool {
        if self.circles.is_empty() {
            return false;
        }

        let reach = radius + self.max_radius + min_distance;
        let col_lo = Self::axis_cell(x - reach, self.cell_size, self.cols);
        let col_hi = Self::axis_cell(x + reach, self.cell_size, self.cols);
        let row_lo = Self::axis_cell(y - reach, self.cell_size, self.rows);
        let row_hi = Self::axis_cell(y + reach, self.cell_size, self.rows);

        for row in row_lo..=row_hi {
            for col in col_lo..=col_hi {
                let hit = self.cells[row * self.cols + col].iter().any(|&i| {
                    let c = &self.circles[i];
                    circles_overlap(x, y, radius, c.x, c.y, c.radius, min_distance)
                });
                if hit {
                    return true;
                }
            }
        }
        false
    }
}

//! Geometry types and predicates for circle placement.
//!
//! Everything here is pure: no state, no randomness except through an
//! explicitly passed generator in [`Region::sample`].

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::PackError;

/// A 2D point with x,y coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// The rectangular drawing area. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

impl Canvas {
    #[inline]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Both dimensions finite and strictly positive.
    pub fn is_valid(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// One circle "type": how big, how many, and what color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleSpec {
    pub diameter: f64,
    pub count: usize,
    pub color: String,
}

impl CircleSpec {
    pub fn new(diameter: f64, count: usize, color: impl Into<String>) -> Self {
        Self {
            diameter,
            count,
            color: color.into(),
        }
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }
}

/// Parses `DIAMETER:COUNT:COLOR`, e.g. `100:5:#FF0000`.
///
/// The color is everything after the second colon, so color encodings that
/// contain colons of their own survive intact.
impl FromStr for CircleSpec {
    type Err = PackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PackError::InvalidSpec(s.to_string());

        let mut parts = s.splitn(3, ':');
        let diameter = parts
            .next()
            .and_then(|d| d.trim().parse::<f64>().ok())
            .ok_or_else(invalid)?;
        let count = parts
            .next()
            .and_then(|c| c.trim().parse::<usize>().ok())
            .ok_or_else(invalid)?;
        let color = parts
            .next()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .ok_or_else(invalid)?;

        Ok(Self::new(diameter, count, color))
    }
}

/// A circle that has been given a position on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedCircle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
}

impl PlacedCircle {
    pub fn new(x: f64, y: f64, radius: f64, color: impl Into<String>) -> Self {
        Self {
            x,
            y,
            radius,
            color: color.into(),
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }
}

/// Rectangle of legal centers for a circle of a given radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Region {
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Draw a center uniformly from `[min_x, max_x) × [min_y, max_y)`.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        let x = self.min_x + rng.random::<f64>() * self.width();
        let y = self.min_y + rng.random::<f64>() * self.height();
        Point::new(x, y)
    }
}

/// True iff the two circles are closer than `r1 + r2 + min_distance`.
///
/// Exact equality is not an overlap: circles separated by precisely the
/// required gap are accepted.
#[inline]
pub fn circles_overlap(x1: f64, y1: f64, r1: f64, x2: f64, y2: f64, r2: f64, min_distance: f64) -> bool {
    (x2 - x1).hypot(y2 - y1) < r1 + r2 + min_distance
}

/// True iff the circle lies inside `[margin, width - margin] × [margin, height - margin]`.
#[inline]
pub fn within_bounds(x: f64, y: f64, r: f64, width: f64, height: f64, margin: f64) -> bool {
    x - r >= margin && x + r <= width - margin && y - r >= margin && y + r <= height - margin
}

/// Rectangle of legal centers for a circle of `radius` on `canvas`.
///
/// Returns `None` when the circle plus both margins does not strictly fit
/// in either dimension; no center could ever be sampled in that case.
pub fn placement_region(radius: f64, canvas: Canvas, edge_margin: f64) -> Option<Region> {
    let inset = edge_margin + radius;
    // Written negated so NaN lands on the degenerate side.
    if !(2.0 * inset < canvas.width && 2.0 * inset < canvas.height) {
        return None;
    }

    Some(Region {
        min_x: inset,
        min_y: inset,
        max_x: canvas.width - inset,
        max_y: canvas.height - inset,
    })
}

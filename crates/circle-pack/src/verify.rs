//! Layout checking.
//!
//! Reports every circle that leaves the margin band and every pair closer
//! than the required gap. Used by the tests and by `circle-pack verify` on
//! exported files, where values may have gone through a text round trip.

use std::fmt;

use crate::config::PlacementConfig;
use crate::geometry::{Canvas, PlacedCircle};

/// Slack allowed before a measurement counts as a violation.
pub const TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// Circle `index` crosses the edge margin.
    OutOfBounds { index: usize },
    /// Circles `first` and `second` are `distance` apart but need `required`.
    Overlap {
        first: usize,
        second: usize,
        distance: f64,
        required: f64,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::OutOfBounds { index } => {
                write!(f, "circle {} crosses the edge margin", index)
            }
            Violation::Overlap { first, second, distance, required } => write!(
                f,
                "circles {} and {} are {:.3} apart, need at least {:.3}",
                first, second, distance, required
            ),
        }
    }
}

/// Check `circles` against the margin and spacing in `config`.
///
/// Pairwise, so quadratic in the number of circles.
pub fn check_layout(canvas: Canvas, circles: &[PlacedCircle], config: &PlacementConfig) -> Vec<Violation> {
    let mut violations = Vec::new();
    let m = config.edge_margin;

    for (index, c) in circles.iter().enumerate() {
        let inside = c.x - c.radius >= m - TOLERANCE
            && c.x + c.radius <= canvas.width - m + TOLERANCE
            && c.y - c.radius >= m - TOLERANCE
            && c.y + c.radius <= canvas.height - m + TOLERANCE;
        if !inside {
            violations.push(Violation::OutOfBounds { index });
        }
    }

    for (first, a) in circles.iter().enumerate() {
        for (offset, b) in circles[first + 1..].iter().enumerate() {
            let distance = a.center().distance(b.center());
            let required = a.radius + b.radius + config.min_distance;
            if distance < required - TOLERANCE {
                violations.push(Violation::Overlap {
                    first,
                    second: first + 1 + offset,
                    distance,
                    required,
                });
            }
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(edge_margin: f64, min_distance: f64) -> PlacementConfig {
        PlacementConfig::default()
            .with_edge_margin(edge_margin)
            .with_min_distance(min_distance)
    }

    #[test]
    fn clean_layout_has_no_violations() {
        let circles = vec![
            PlacedCircle::new(50.0, 50.0, 20.0, "a"),
            PlacedCircle::new(110.0, 50.0, 20.0, "b"),
        ];
        assert!(check_layout(Canvas::new(200.0, 100.0), &circles, &config(10.0, 20.0)).is_empty());
    }

    #[test]
    fn flags_margin_crossing() {
        let circles = vec![
            PlacedCircle::new(15.0, 50.0, 10.0, "a"),
            PlacedCircle::new(100.0, 50.0, 10.0, "b"),
        ];
        let violations = check_layout(Canvas::new(200.0, 100.0), &circles, &config(10.0, 0.0));
        assert_eq!(violations, vec![Violation::OutOfBounds { index: 0 }]);
    }

    #[test]
    fn flags_close_pairs_with_indices() {
        let circles = vec![
            PlacedCircle::new(50.0, 50.0, 10.0, "a"),
            PlacedCircle::new(150.0, 50.0, 10.0, "b"),
            PlacedCircle::new(70.0, 50.0, 10.0, "c"),
        ];
        let violations = check_layout(Canvas::new(200.0, 100.0), &circles, &config(0.0, 5.0));
        assert_eq!(violations.len(), 1);
        match &violations[0] {
            Violation::Overlap { first, second, distance, required } => {
                assert_eq!((*first, *second), (0, 2));
                assert_eq!(*distance, 20.0);
                assert_eq!(*required, 25.0);
            }
            other => panic!("unexpected violation {:?}", other),
        }
        assert!(violations[0].to_string().contains("circles 0 and 2"));
    }

    #[test]
    fn tolerance_absorbs_rounding() {
        let circles = vec![
            PlacedCircle::new(10.0 - 1e-12, 50.0, 10.0, "a"),
        ];
        assert!(check_layout(Canvas::new(100.0, 100.0), &circles, &config(0.0, 0.0)).is_empty());
    }
}

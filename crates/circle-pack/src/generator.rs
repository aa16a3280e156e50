//! Pattern generation: turn circle types into a collision-free layout.
//!
//! Each request is flattened into individual circle instances, shuffled so
//! no size class is systematically placed last, then placed one at a time
//! against the circles accepted so far. Circles that cannot be placed are
//! dropped; the gap between requested and placed is the caller's signal
//! that the canvas was too crowded.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PlacementConfig;
use crate::error::PackError;
use crate::geometry::{Canvas, CircleSpec, PlacedCircle};
use crate::grid::SpatialGrid;
use crate::placement::try_place_circle;

/// Result of one generation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub canvas: Canvas,
    /// Accepted circles in placement-attempt order.
    pub circles: Vec<PlacedCircle>,
    /// Total circle instances asked for across all specs.
    pub requested: usize,
}

impl Layout {
    #[inline]
    pub fn placed(&self) -> usize {
        self.circles.len()
    }

    /// How many requested circles were left out.
    #[inline]
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.circles.len())
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.shortfall() == 0
    }
}

/// Sum of `count` over all specs.
pub fn requested_total(specs: &[CircleSpec]) -> usize {
    specs.iter().fold(0usize, |acc, s| acc.saturating_add(s.count))
}

/// Check a request up front so bad input is reported instead of quietly
/// producing an empty layout.
pub fn validate_request(
    canvas: Canvas,
    specs: &[CircleSpec],
    config: &PlacementConfig,
) -> Result<(), PackError> {
    if !canvas.is_valid() {
        return Err(PackError::InvalidCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }

    for (index, spec) in specs.iter().enumerate() {
        if !(spec.diameter.is_finite() && spec.diameter > 0.0) {
            return Err(PackError::InvalidDiameter {
                index,
                diameter: spec.diameter,
            });
        }
    }

    config.validate()
}

/// Generate a layout for `specs` on `canvas`.
///
/// Non-deterministic unless `rng` is seeded. Never fails for valid input;
/// a crowded canvas yields a partial layout.
pub fn generate_layout<R: Rng + ?Sized>(
    canvas: Canvas,
    specs: &[CircleSpec],
    config: &PlacementConfig,
    rng: &mut R,
) -> Result<Layout, PackError> {
    validate_request(canvas, specs, config)?;

    let requested = requested_total(specs);

    let mut instances: Vec<(f64, &str)> = specs
        .iter()
        .flat_map(|spec| std::iter::repeat_n((spec.radius(), spec.color.as_str()), spec.count))
        .collect();
    instances.shuffle(rng);

    let max_radius = specs.iter().map(CircleSpec::radius).fold(0.0, f64::max);
    let mut accepted = SpatialGrid::new(canvas, 2.0 * max_radius + config.min_distance);

    for (radius, color) in instances {
        if let Some(circle) = try_place_circle(radius, color, &accepted, canvas, config, rng) {
            accepted.insert(circle);
        }
    }

    let circles = accepted.into_circles();
    debug!(
        requested,
        placed = circles.len(),
        width = canvas.width,
        height = canvas.height,
        "generated layout"
    );

    Ok(Layout {
        canvas,
        circles,
        requested,
    })
}

/// Generate circle positions with the default attempt budget.
///
/// Convenience form of [`generate_layout`] that returns only the placed
/// circles; compare its length to [`requested_total`] to detect a shortfall.
pub fn generate_pattern<R: Rng + ?Sized>(
    canvas: Canvas,
    specs: &[CircleSpec],
    edge_margin: f64,
    min_distance: f64,
    rng: &mut R,
) -> Result<Vec<PlacedCircle>, PackError> {
    let config = PlacementConfig::default()
        .with_edge_margin(edge_margin)
        .with_min_distance(min_distance);
    generate_layout(canvas, specs, &config, rng).map(|layout| layout.circles)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn empty_specs_give_empty_layout() {
        let mut rng = StdRng::seed_from_u64(0);
        let layout =
            generate_layout(Canvas::new(100.0, 100.0), &[], &PlacementConfig::default(), &mut rng).unwrap();
        assert!(layout.circles.is_empty());
        assert_eq!(layout.requested, 0);
        assert!(layout.is_complete());
    }

    #[test]
    fn zero_count_spec_requests_nothing() {
        let specs = vec![CircleSpec::new(10.0, 0, "red")];
        let mut rng = StdRng::seed_from_u64(0);
        let circles = generate_pattern(Canvas::new(100.0, 100.0), &specs, 0.0, 0.0, &mut rng).unwrap();
        assert!(circles.is_empty());
    }

    #[test]
    fn colors_and_radii_come_from_specs() {
        let specs = vec![
            CircleSpec::new(20.0, 3, "#111111"),
            CircleSpec::new(10.0, 4, "#222222"),
        ];
        let mut rng = StdRng::seed_from_u64(8);
        let circles = generate_pattern(Canvas::new(400.0, 400.0), &specs, 10.0, 5.0, &mut rng).unwrap();

        assert_eq!(circles.len(), 7);
        assert_eq!(circles.iter().filter(|c| c.color == "#111111" && c.radius == 10.0).count(), 3);
        assert_eq!(circles.iter().filter(|c| c.color == "#222222" && c.radius == 5.0).count(), 4);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let specs = vec![CircleSpec::new(40.0, 10, "blue"), CircleSpec::new(15.0, 10, "green")];
        let canvas = Canvas::new(300.0, 300.0);
        let config = PlacementConfig::default().with_min_distance(5.0);

        let a = generate_layout(canvas, &specs, &config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = generate_layout(canvas, &specs, &config, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn shortfall_counts_dropped_circles() {
        let specs = vec![CircleSpec::new(200.0, 3, "red")];
        let mut rng = StdRng::seed_from_u64(1);
        let layout =
            generate_layout(Canvas::new(100.0, 100.0), &specs, &PlacementConfig::default(), &mut rng).unwrap();
        assert_eq!(layout.placed(), 0);
        assert_eq!(layout.requested, 3);
        assert_eq!(layout.shortfall(), 3);
        assert!(!layout.is_complete());
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let good = vec![CircleSpec::new(10.0, 1, "red")];

        assert!(matches!(
            generate_pattern(Canvas::new(0.0, 100.0), &good, 0.0, 0.0, &mut rng),
            Err(PackError::InvalidCanvas { .. })
        ));
        assert!(matches!(
            generate_pattern(Canvas::new(f64::NAN, 100.0), &good, 0.0, 0.0, &mut rng),
            Err(PackError::InvalidCanvas { .. })
        ));
        assert_eq!(
            generate_pattern(
                Canvas::new(100.0, 100.0),
                &[CircleSpec::new(10.0, 1, "a"), CircleSpec::new(-4.0, 2, "b")],
                0.0,
                0.0,
                &mut rng
            ),
            Err(PackError::InvalidDiameter { index: 1, diameter: -4.0 })
        );
        assert_eq!(
            generate_pattern(Canvas::new(100.0, 100.0), &good, -1.0, 0.0, &mut rng),
            Err(PackError::InvalidEdgeMargin(-1.0))
        );
        assert_eq!(
            generate_pattern(Canvas::new(100.0, 100.0), &good, 0.0, -2.0, &mut rng),
            Err(PackError::InvalidMinDistance(-2.0))
        );
    }

    #[test]
    fn requested_total_sums_counts() {
        let specs = vec![CircleSpec::new(1.0, 3, "a"), CircleSpec::new(2.0, 4, "b")];
        assert_eq!(requested_total(&specs), 7);
        assert_eq!(requested_total(&[]), 0);
    }
}

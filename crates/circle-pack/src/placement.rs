//! Single-circle placement by rejection sampling.

use rand::Rng;

use crate::config::PlacementConfig;
use crate::geometry::{Canvas, PlacedCircle, placement_region, within_bounds};
use crate::grid::Occupancy;

/// Try to find a spot for one circle.
///
/// Draws up to `config.max_attempts` centers uniformly from the legal
/// region and returns the first one that stays inside the margins and keeps
/// `config.min_distance` clear of everything in `existing`. Returns `None`
/// when every attempt collides, or immediately (without drawing from `rng`)
/// when the circle cannot fit on the canvas at all.
pub fn try_place_circle<O, R>(
    radius: f64,
    color: &str,
    existing: &O,
    canvas: Canvas,
    config: &PlacementConfig,
    rng: &mut R,
) -> Option<PlacedCircle>
where
    O: Occupancy + ?Sized,
    R: Rng + ?Sized,
{
    let region = placement_region(radius, canvas, config.edge_margin)?;

    for _ in 0..config.max_attempts {
        let p = region.sample(rng);

        // Redundant with the region, but float rounding can nudge a sample
        // a hair past the margin.
        if !within_bounds(p.x, p.y, radius, canvas.width, canvas.height, config.edge_margin) {
            continue;
        }

        if !existing.collides(p.x, p.y, radius, config.min_distance) {
            return Some(PlacedCircle::new(p.x, p.y, radius, color));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};

    use crate::grid::SpatialGrid;

    /// Wraps an RNG and counts how many values were drawn.
    struct CountingRng {
        inner: StdRng,
        draws: usize,
    }

    impl CountingRng {
        fn new(seed: u64) -> Self {
            Self { inner: StdRng::seed_from_u64(seed), draws: 0 }
        }
    }

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            self.draws += 1;
            self.inner.next_u32()
        }

        fn next_u64(&mut self) -> u64 {
            self.draws += 1;
            self.inner.next_u64()
        }

        fn fill_bytes(&mut self, dst: &mut [u8]) {
            self.draws += 1;
            self.inner.fill_bytes(dst)
        }
    }

    #[test]
    fn places_on_empty_canvas() {
        let canvas = Canvas::new(800.0, 600.0);
        let config = PlacementConfig::default();
        let mut rng = StdRng::seed_from_u64(1);
        let existing: Vec<PlacedCircle> = Vec::new();

        let c = try_place_circle(50.0, "#FF0000", &existing, canvas, &config, &mut rng).unwrap();
        assert_eq!(c.radius, 50.0);
        assert_eq!(c.color, "#FF0000");
        assert!(within_bounds(c.x, c.y, c.radius, 800.0, 600.0, 20.0));
    }

    #[test]
    fn degenerate_region_fails_without_sampling() {
        let canvas = Canvas::new(100.0, 100.0);
        let config = PlacementConfig::default().with_max_attempts(1_000_000);
        let mut rng = CountingRng::new(3);
        let existing: Vec<PlacedCircle> = Vec::new();

        let placed = try_place_circle(100.0, "red", &existing, canvas, &config, &mut rng);
        assert!(placed.is_none());
        assert_eq!(rng.draws, 0, "no samples should be drawn for an impossible circle");
    }

    #[test]
    fn exhausts_attempts_when_canvas_is_full() {
        // A circle reaching past every corner leaves no legal center.
        let canvas = Canvas::new(200.0, 200.0);
        let config = PlacementConfig::default()
            .with_edge_margin(0.0)
            .with_min_distance(0.0)
            .with_max_attempts(25);
        let existing = vec![PlacedCircle::new(100.0, 100.0, 150.0, "black")];
        let mut rng = CountingRng::new(4);

        assert!(try_place_circle(10.0, "red", &existing, canvas, &config, &mut rng).is_none());
        assert!(rng.draws >= 25, "every attempt should have been used");
    }

    #[test]
    fn respects_min_distance_to_existing() {
        let canvas = Canvas::new(400.0, 400.0);
        let config = PlacementConfig::default().with_min_distance(30.0);
        let existing = vec![PlacedCircle::new(200.0, 200.0, 40.0, "blue")];
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..200 {
            if let Some(c) = try_place_circle(20.0, "red", &existing, canvas, &config, &mut rng) {
                assert!(c.center().distance(existing[0].center()) >= 90.0);
            }
        }
    }

    #[test]
    fn grid_and_slice_place_identically() {
        let canvas = Canvas::new(500.0, 500.0);
        let config = PlacementConfig::default().with_min_distance(10.0);
        let mut grid = SpatialGrid::new(canvas, 60.0);
        let mut flat: Vec<PlacedCircle> = Vec::new();
        let mut rng_a = StdRng::seed_from_u64(11);
        let mut rng_b = StdRng::seed_from_u64(11);

        for i in 0..40 {
            let radius = if i % 2 == 0 { 25.0 } else { 15.0 };
            let a = try_place_circle(radius, "c", &grid, canvas, &config, &mut rng_a);
            let b = try_place_circle(radius, "c", &flat, canvas, &config, &mut rng_b);
            assert_eq!(a, b);
            if let Some(c) = a {
                grid.insert(c.clone());
                flat.push(c);
            }
        }
    }
}

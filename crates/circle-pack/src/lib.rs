//! # circle-pack
//!
//! Randomized placement of non-overlapping circles on a rectangular canvas.
//!
//! A request is a canvas plus a list of circle types (diameter, count,
//! color). [`generate_layout`] expands the types into individual circles,
//! shuffles them, and places each one by rejection sampling against the
//! circles accepted so far. Circles that cannot be fitted are left out; the
//! returned [`Layout`] reports how many were requested and how many landed.
//!
//! Randomness is always passed in, so a seeded generator replays the exact
//! same layout:
//!
//! ```
//! use circle_pack::{Canvas, CircleSpec, PlacementConfig, generate_layout};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let specs = vec![CircleSpec::new(100.0, 5, "#FF0000")];
//! let mut rng = StdRng::seed_from_u64(7);
//! let layout = generate_layout(Canvas::new(800.0, 600.0), &specs, &PlacementConfig::default(), &mut rng)?;
//! assert!(layout.placed() <= layout.requested);
//! # Ok::<(), circle_pack::PackError>(())
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod placement;
pub mod record;
pub mod svg;
pub mod verify;

// Re-export common types at crate root for convenience.
pub use config::PlacementConfig;
pub use error::PackError;
pub use generator::{Layout, generate_layout, generate_pattern, requested_total, validate_request};
pub use geometry::{Canvas, CircleSpec, PlacedCircle, Point, Region, circles_overlap, placement_region, within_bounds};
pub use grid::{Occupancy, SpatialGrid};
pub use placement::try_place_circle;
pub use record::{PatternRecord, RecordError};
pub use svg::{SvgError, SvgStyle, layout_to_svg, read_svg_layout};
pub use verify::{Violation, check_layout};

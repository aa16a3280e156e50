//! CLI command implementations.
//!
//! - `generate` - Place circles and export the pattern
//! - `render` - Export a saved pattern record again
//! - `verify` - Check a layout for overlaps and margin violations
//! - `benchmark` - Time repeated generation runs

pub mod benchmark;
pub mod common;
pub mod generate;
pub mod recipe;
pub mod render;
pub mod verify;

pub use benchmark::{BenchmarkArgs, cmd_benchmark};
pub use generate::{GenerateArgs, cmd_generate};
pub use render::{RenderArgs, cmd_render};
pub use verify::{VerifyArgs, cmd_verify};

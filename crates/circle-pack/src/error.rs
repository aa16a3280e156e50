//! Error type for rejected placement requests.
//!
//! Failing to place an individual circle is not an error; the generator
//! simply leaves it out. These variants cover inputs that would make a
//! generated layout meaningless and are raised before any sampling happens.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackError {
    #[error("invalid canvas {width}x{height}: dimensions must be finite and positive")]
    InvalidCanvas { width: f64, height: f64 },

    #[error("circle type {index}: diameter {diameter} must be finite and positive")]
    InvalidDiameter { index: usize, diameter: f64 },

    #[error("edge margin {0} must be finite and non-negative")]
    InvalidEdgeMargin(f64),

    #[error("minimum distance {0} must be finite and non-negative")]
    InvalidMinDistance(f64),

    #[error("max attempts per circle must be at least 1")]
    ZeroAttempts,

    #[error("invalid circle spec '{0}': expected DIAMETER:COUNT:COLOR")]
    InvalidSpec(String),
}

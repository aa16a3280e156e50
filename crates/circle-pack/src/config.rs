//! Placement settings shared by the generator and the layout checker.

use serde::{Deserialize, Serialize};

use crate::error::PackError;

/// Gap kept clear between every circle and the canvas edge.
pub const DEFAULT_EDGE_MARGIN: f64 = 20.0;

/// Gap kept clear between any two circles.
pub const DEFAULT_MIN_DISTANCE: f64 = 20.0;

/// Random samples drawn for one circle before giving up on it.
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;

/// Tunables for a placement pass.
///
/// Missing fields fall back to the defaults when deserialized, so a recipe
/// may specify only the values it cares about.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub edge_margin: f64,
    pub min_distance: f64,
    pub max_attempts: usize,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            edge_margin: DEFAULT_EDGE_MARGIN,
            min_distance: DEFAULT_MIN_DISTANCE,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PlacementConfig {
    pub fn with_edge_margin(mut self, edge_margin: f64) -> Self {
        self.edge_margin = edge_margin;
        self
    }

    pub fn with_min_distance(mut self, min_distance: f64) -> Self {
        self.min_distance = min_distance;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Reject negative or non-finite gaps and a zero attempt budget.
    pub fn validate(&self) -> Result<(), PackError> {
        if !(self.edge_margin.is_finite() && self.edge_margin >= 0.0) {
            return Err(PackError::InvalidEdgeMargin(self.edge_margin));
        }
        if !(self.min_distance.is_finite() && self.min_distance >= 0.0) {
            return Err(PackError::InvalidMinDistance(self.min_distance));
        }
        if self.max_attempts == 0 {
            return Err(PackError::ZeroAttempts);
        }
        Ok(())
    }
}

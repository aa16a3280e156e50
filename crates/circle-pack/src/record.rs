//! Saved pattern records.
//!
//! The record is what a persistence layer stores for a pattern: the request
//! that produced it and the exact circle positions, so a saved pattern can be
//! shown again without regenerating. Field names are camelCase on the wire.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::generator::{Layout, requested_total};
use crate::geometry::{Canvas, CircleSpec, PlacedCircle};

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read or write pattern record: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid pattern record JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternRecord {
    pub name: String,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub circles: Vec<CircleSpec>,
    /// Older records may only carry the request.
    #[serde(default)]
    pub placed_circles: Vec<PlacedCircle>,
    /// Absent on records saved without a timestamp; never filled in on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl PatternRecord {
    /// Capture a generated layout together with the specs that produced it.
    pub fn from_layout(name: impl Into<String>, specs: &[CircleSpec], layout: &Layout) -> Self {
        Self {
            name: name.into(),
            canvas_width: layout.canvas.width,
            canvas_height: layout.canvas.height,
            circles: specs.to_vec(),
            placed_circles: layout.circles.clone(),
            created_at: Some(Utc::now()),
        }
    }

    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.canvas_width, self.canvas_height)
    }

    pub fn requested(&self) -> usize {
        requested_total(&self.circles)
    }

    pub fn to_json(&self) -> Result<String, RecordError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RecordError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), RecordError> {
        fs::write(path.as_ref(), self.to_json()?)?;
        Ok(())
    }
}

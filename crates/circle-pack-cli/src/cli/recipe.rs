//! Pattern recipes.
//!
//! A recipe is a YAML file describing a whole pattern request: canvas,
//! circle types, placement settings and optionally a seed. Command-line
//! flags override whatever the recipe sets.
//!
//! ```yaml
//! name: confetti
//! canvas:
//!   width: 800
//!   height: 600
//!   background: "#fdf6e3"
//! placement:
//!   edge_margin: 20
//!   min_distance: 10
//! circles:
//!   - { diameter: 100, count: 5, color: "#E63946" }
//!   - { diameter: 40, count: 30, color: "#2A9D8F" }
//! seed: 42
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use circle_pack::{CircleSpec, PlacementConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub canvas: RecipeCanvas,

    /// Missing fields fall back to the placement defaults.
    #[serde(default)]
    pub placement: PlacementConfig,

    #[serde(default)]
    pub circles: Vec<CircleSpec>,

    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCanvas {
    #[serde(default)]
    pub width: Option<f64>,

    #[serde(default)]
    pub height: Option<f64>,

    #[serde(default = "default_background")]
    pub background: String,
}

impl Default for RecipeCanvas {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            background: default_background(),
        }
    }
}

fn default_name() -> String {
    "pattern".to_string()
}

pub fn default_background() -> String {
    "#ffffff".to_string()
}

impl Recipe {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read recipe {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("failed to parse recipe {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_recipe() {
        let recipe = Recipe::from_yaml(
            r##"
name: confetti
description: two sizes
canvas:
  width: 800
  height: 600
  background: "#fdf6e3"
placement:
  edge_margin: 10
  min_distance: 5
  max_attempts: 80
circles:
  - { diameter: 100, count: 5, color: "#E63946" }
  - diameter: 40
    count: 30
    color: "#2A9D8F"
seed: 42
"##,
        )
        .unwrap();

        assert_eq!(recipe.name, "confetti");
        assert_eq!(recipe.description.as_deref(), Some("two sizes"));
        assert_eq!(recipe.canvas.width, Some(800.0));
        assert_eq!(recipe.canvas.height, Some(600.0));
        assert_eq!(recipe.canvas.background, "#fdf6e3");
        assert_eq!(
            recipe.placement,
            PlacementConfig::default()
                .with_edge_margin(10.0)
                .with_min_distance(5.0)
                .with_max_attempts(80)
        );
        assert_eq!(recipe.circles.len(), 2);
        assert_eq!(recipe.circles[1], CircleSpec::new(40.0, 30, "#2A9D8F"));
        assert_eq!(recipe.seed, Some(42));
    }

    #[test]
    fn minimal_recipe_uses_defaults() {
        let recipe = Recipe::from_yaml("canvas: { width: 300, height: 200 }\n").unwrap();
        assert_eq!(recipe.name, "pattern");
        assert_eq!(recipe.canvas.background, "#ffffff");
        assert_eq!(recipe.placement, PlacementConfig::default());
        assert!(recipe.circles.is_empty());
        assert_eq!(recipe.seed, None);
    }

    #[test]
    fn rejects_malformed_yaml() {
        assert!(Recipe::from_yaml("circles: [{ diameter: big }]").is_err());
    }
}

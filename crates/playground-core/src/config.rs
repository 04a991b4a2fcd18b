//! Driver configuration: the literal values used for the demonstrated person.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::person::Person;

pub const DEFAULT_NAME: &str = "Jim";
pub const DEFAULT_HEIGHT: f64 = 64.0;
pub const DEFAULT_FAVORITE_FOOD: &str = "Pasta";

/// Values the driver uses to construct its one [`Person`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_height")]
    pub height: f64,
    #[serde(default = "default_favorite_food")]
    pub favorite_food: String,
}

fn default_name() -> String {
    DEFAULT_NAME.into()
}
fn default_height() -> f64 {
    DEFAULT_HEIGHT
}
fn default_favorite_food() -> String {
    DEFAULT_FAVORITE_FOOD.into()
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.into(),
            height: DEFAULT_HEIGHT,
            favorite_food: DEFAULT_FAVORITE_FOOD.into(),
        }
    }
}

impl DriverConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file.
    pub fn load(config_path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(config_path)?;
        let config = Self::from_json(&raw)?;
        info!("Loaded driver config from {}", config_path.display());
        Ok(config)
    }

    pub fn person(&self) -> Person {
        Person::new(self.name.clone(), self.height, self.favorite_food.clone())
    }
}

//! Person record with a derived multi-line summary.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::describe::PrettyDescription;

/// A person with a name, a height, and a favorite food.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub height: f64,
    pub favorite_food: String,
}

impl Person {
    /// Store the given values verbatim.
    pub fn new(name: impl Into<String>, height: f64, favorite_food: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            height,
            favorite_food: favorite_food.into(),
        }
    }

    /// Three-line summary of this person.
    ///
    /// Height keeps its fractional digit even when integral (`64.0`).
    pub fn description(&self) -> String {
        format!(
            "Name: {} \nHeight: {:?} \nFavorite Food: {}",
            self.name, self.height, self.favorite_food
        )
    }
}

impl PrettyDescription for Person {
    fn description(&self) -> String {
        Person::description(self)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Person::description(self))
    }
}

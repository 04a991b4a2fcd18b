//! Animal record. Same shape as [`Person`](crate::Person), but without the
//! [`PrettyDescription`](crate::PrettyDescription) capability.
//!
//! ```compile_fail
//! use playground_core::{Animal, PrettyDescription};
//!
//! let rex = Animal::new("Rex", 30.0, "Bones");
//! let things: Vec<Box<dyn PrettyDescription>> = vec![Box::new(rex)];
//! ```

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    pub height: f64,
    pub favorite_food: String,
}

impl Animal {
    pub fn new(name: impl Into<String>, height: f64, favorite_food: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            height,
            favorite_food: favorite_food.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Person;

    #[test]
    fn test_same_values_as_person() {
        let animal = Animal::new("Jim", 64.0, "Pasta");
        let person = Person::new("Jim", 64.0, "Pasta");
        assert_eq!(animal.name, person.name);
        assert_eq!(animal.height, person.height);
        assert_eq!(animal.favorite_food, person.favorite_food);
    }
}

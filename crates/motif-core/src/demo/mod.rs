//! The demo unit abstraction -- named, independently runnable pattern
//! examples and the registry that holds them.

mod registry;
mod trait_def;

use std::fmt;
use std::str::FromStr;

pub use registry::{DemoRegistry, RegistryError};
pub use trait_def::Demo;

/// The three classic pattern groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Creational,
    Structural,
    Behavioral,
}

impl Category {
    /// The fixed catalogue run order.
    pub const ALL: [Category; 3] = [
        Category::Creational,
        Category::Structural,
        Category::Behavioral,
    ];

    /// Capitalized label used in category banners.
    pub fn label(self) -> &'static str {
        match self {
            Category::Creational => "Creational",
            Category::Structural => "Structural",
            Category::Behavioral => "Behavioral",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Creational => "creational",
            Category::Structural => "structural",
            Category::Behavioral => "behavioral",
        };
        f.write_str(name)
    }
}

/// Error returned when a category name cannot be parsed.
#[derive(Debug, thiserror::Error)]
#[error("unknown category {0:?} (expected creational, structural, or behavioral)")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "creational" => Ok(Category::Creational),
            "structural" => Ok(Category::Structural),
            "behavioral" => Ok(Category::Behavioral),
            other => Err(ParseCategoryError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn run_order_is_creational_structural_behavioral() {
        assert_eq!(
            Category::ALL,
            [
                Category::Creational,
                Category::Structural,
                Category::Behavioral
            ]
        );
    }

    #[test]
    fn display_and_parse_round_trip() {
        for category in Category::ALL {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "Behavioral".parse::<Category>().unwrap(),
            Category::Behavioral
        );
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "decorative".parse::<Category>().unwrap_err();
        assert!(err.to_string().contains("decorative"));
    }
}

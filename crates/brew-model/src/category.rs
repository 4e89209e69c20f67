//! Ingredient categories.
//!
//! Source files live in directories named after the plural category
//! (`fermentables/`, `hops/`, `yeasts/`). The helpers here resolve that
//! convention so validators can take an explicit [`Category`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{ModelError, Result};

/// Entity category of an ingredient source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Grains, malt extracts, sugars and syrups.
    Fermentable,
    /// Hop varieties.
    Hop,
    /// Yeast strains.
    Yeast,
}

impl Category {
    /// All categories in canonical order.
    pub const ALL: [Category; 3] = [Category::Fermentable, Category::Hop, Category::Yeast];

    /// Returns the singular lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fermentable => "fermentable",
            Category::Hop => "hop",
            Category::Yeast => "yeast",
        }
    }

    /// Returns the plural directory name used by source trees.
    pub fn directory_name(&self) -> &'static str {
        match self {
            Category::Fermentable => "fermentables",
            Category::Hop => "hops",
            Category::Yeast => "yeasts",
        }
    }

    /// Parses a singular category name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            "fermentable" => Ok(Category::Fermentable),
            "hop" => Ok(Category::Hop),
            "yeast" => Ok(Category::Yeast),
            _ => Err(ModelError::UnknownCategory {
                name: name.to_string(),
            }),
        }
    }

    /// Resolves a directory name, singular or plural, to a category.
    pub fn from_directory_name(name: &str) -> Result<Self> {
        let lowered = name.trim().to_lowercase();
        let singular = singularize(&lowered);
        Self::from_name(singular).map_err(|_| ModelError::UnknownCategory {
            name: name.to_string(),
        })
    }

    /// Resolves the category of a file from its immediate parent directory.
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let dir_name = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|name| name.to_str())
            .ok_or_else(|| ModelError::NoParentDirectory {
                path: path.to_path_buf(),
            })?;
        Self::from_directory_name(dir_name)
    }
}

/// Strips a regular `-s` plural suffix.
fn singularize(word: &str) -> &str {
    if word.ends_with("ss") {
        return word;
    }
    word.strip_suffix('s').unwrap_or(word)
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_directory_name_plural() {
        assert_eq!(
            Category::from_directory_name("fermentables").unwrap(),
            Category::Fermentable
        );
        assert_eq!(Category::from_directory_name("hops").unwrap(), Category::Hop);
        assert_eq!(
            Category::from_directory_name("Yeasts").unwrap(),
            Category::Yeast
        );
    }

    #[test]
    fn test_from_directory_name_singular() {
        assert_eq!(Category::from_directory_name("hop").unwrap(), Category::Hop);
        assert_eq!(
            Category::from_directory_name("yeast").unwrap(),
            Category::Yeast
        );
    }

    #[test]
    fn test_from_directory_name_unknown() {
        let err = Category::from_directory_name("adjuncts").unwrap_err();
        assert_eq!(err.to_string(), "unknown category: adjuncts");
    }

    #[test]
    fn test_from_csv_path() {
        let path = Path::new("data/hops/us.csv");
        assert_eq!(Category::from_csv_path(path).unwrap(), Category::Hop);

        let bare = Path::new("us.csv");
        assert!(Category::from_csv_path(bare).is_err());
    }

    #[test]
    fn test_directory_name_round_trips() {
        for category in Category::ALL {
            assert_eq!(
                Category::from_directory_name(category.directory_name()).unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(Category::Fermentable.to_string(), "fermentable");
        assert_eq!("HOP".parse::<Category>().unwrap(), Category::Hop);
    }
}

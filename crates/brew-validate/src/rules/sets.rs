//! Fixed value sets.

pub const ORIGINS: &[&str] = &[
    "Australia",
    "Belgium",
    "Canada",
    "Czech Republic",
    "France",
    "Germany",
    "New Zealand",
    "Poland",
    "Slovenia",
    "South Africa",
    "United Kingdom",
    "USA",
];

pub const FERMENTABLE_TYPES: &[&str] = &["Grain", "Malt Extract", "Sugar", "Syrup"];

pub const FERMENTABLE_GRAIN_TYPES: &[&str] =
    &["Base", "Kilned", "Crystal", "Roasted", "Special", "Adjunct"];

pub const YEAST_TYPES: &[&str] = &["Ale", "Belgian", "German Ale", "Kveik", "Lager", "Special"];

/// Fermentable types that come from a named supplier.
pub(crate) const SUPPLIED_FERMENTABLES: &[&str] = &["Grain", "Malt Extract"];

/// Fermentable types with an origin and a grain type.
pub(crate) const GRAIN: &[&str] = &["Grain"];

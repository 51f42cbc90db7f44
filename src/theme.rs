//! Closed enumerations: themes, entity categories, and name modifiers.
//!
//! Each set is a plain Rust enum, so the typed API cannot receive an
//! out-of-set value. The string boundary (CLI arguments, config) goes
//! through `FromStr`, which rejects unknown values with
//! `NameGenError::InvalidParameter` listing the valid options.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::NameGenError;

/// A naming-convention style determining which fragment pools are used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Cyberpunk,
    Elves,
    Orcs,
}

impl Theme {
    pub fn all() -> &'static [Theme] {
        &[Theme::Cyberpunk, Theme::Elves, Theme::Orcs]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Theme::Cyberpunk => "cyberpunk",
            Theme::Elves => "elves",
            Theme::Orcs => "orcs",
        }
    }
}

/// NPC name modifier. Neutral pools are distinct, not a blend of the others.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Neutral,
}

impl Gender {
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female, Gender::Neutral]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }
}

/// Building name modifier; absent means the generic building pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildingType {
    Residential,
    Commercial,
    Industrial,
    Government,
    Entertainment,
    Medical,
    Educational,
}

impl BuildingType {
    pub fn all() -> &'static [BuildingType] {
        &[
            BuildingType::Residential,
            BuildingType::Commercial,
            BuildingType::Industrial,
            BuildingType::Government,
            BuildingType::Entertainment,
            BuildingType::Medical,
            BuildingType::Educational,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            BuildingType::Residential => "residential",
            BuildingType::Commercial => "commercial",
            BuildingType::Industrial => "industrial",
            BuildingType::Government => "government",
            BuildingType::Entertainment => "entertainment",
            BuildingType::Medical => "medical",
            BuildingType::Educational => "educational",
        }
    }
}

/// The kind of entity a name is generated for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Npc,
    Building,
    City,
    District,
    Street,
    Faction,
}

impl EntityCategory {
    pub fn all() -> &'static [EntityCategory] {
        &[
            EntityCategory::Npc,
            EntityCategory::Building,
            EntityCategory::City,
            EntityCategory::District,
            EntityCategory::Street,
            EntityCategory::Faction,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntityCategory::Npc => "npc",
            EntityCategory::Building => "building",
            EntityCategory::City => "city",
            EntityCategory::District => "district",
            EntityCategory::Street => "street",
            EntityCategory::Faction => "faction",
        }
    }
}

/// Case-insensitive lookup against a closed value set.
fn parse_closed<T: Copy>(
    parameter: &'static str,
    input: &str,
    values: &'static [T],
    name: fn(&T) -> &'static str,
) -> Result<T, NameGenError> {
    let wanted = input.trim();
    values
        .iter()
        .find(|v| name(v).eq_ignore_ascii_case(wanted))
        .copied()
        .ok_or_else(|| NameGenError::invalid_parameter(parameter, input, values.iter().map(name)))
}

impl FromStr for Theme {
    type Err = NameGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed("theme", s, Theme::all(), Theme::name)
    }
}

impl FromStr for Gender {
    type Err = NameGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed("gender", s, Gender::all(), Gender::name)
    }
}

impl FromStr for BuildingType {
    type Err = NameGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed("building type", s, BuildingType::all(), BuildingType::name)
    }
}

impl FromStr for EntityCategory {
    type Err = NameGenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_closed("category", s, EntityCategory::all(), EntityCategory::name)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for EntityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for theme in Theme::all() {
            assert_eq!(theme.name().parse::<Theme>().unwrap(), *theme);
        }
        for gender in Gender::all() {
            assert_eq!(gender.name().parse::<Gender>().unwrap(), *gender);
        }
        for bt in BuildingType::all() {
            assert_eq!(bt.name().parse::<BuildingType>().unwrap(), *bt);
        }
        for cat in EntityCategory::all() {
            assert_eq!(cat.name().parse::<EntityCategory>().unwrap(), *cat);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("CyberPunk".parse::<Theme>().unwrap(), Theme::Cyberpunk);
        assert_eq!(" ELVES ".parse::<Theme>().unwrap(), Theme::Elves);
        assert_eq!("Male".parse::<Gender>().unwrap(), Gender::Male);
    }

    #[test]
    fn test_parse_rejects_unknown_values() {
        let err = "steampunk".parse::<Theme>().unwrap_err();
        match err {
            NameGenError::InvalidParameter { parameter, value, expected } => {
                assert_eq!(parameter, "theme");
                assert_eq!(value, "steampunk");
                assert!(expected.contains("cyberpunk"));
                assert!(expected.contains("elves"));
                assert!(expected.contains("orcs"));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        assert!("tower".parse::<BuildingType>().is_err());
        assert!("robot".parse::<Gender>().is_err());
        assert!("spaceship".parse::<EntityCategory>().is_err());
    }
}

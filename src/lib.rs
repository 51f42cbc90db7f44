//! Deterministic themed name generation library
//!
//! Composes NPC, building, city, district, street, and faction names from
//! per-theme fragment pools. Same seed, same call sequence, same names;
//! no name repeats within a session.

pub mod composer;
pub mod data;
pub mod error;
pub mod generator;
pub mod rng;
pub mod theme;

pub use data::{ThemeDefinition, ThemeSet};
pub use error::NameGenError;
pub use generator::{NameGenerator, MAX_ATTEMPTS};
pub use theme::{BuildingType, EntityCategory, Gender, Theme};

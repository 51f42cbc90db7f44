//! Error types for name generation.

use thiserror::Error;

use crate::theme::{EntityCategory, Theme};

/// Errors surfaced by the public generation API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameGenError {
    /// A string value fell outside one of the closed enumerations.
    ///
    /// Detected before any RNG draw; no generator state is touched.
    #[error("invalid {parameter} '{value}': expected one of {expected}")]
    InvalidParameter {
        parameter: &'static str,
        value: String,
        expected: String,
    },

    /// The retry budget ran out without producing an unseen name.
    ///
    /// The documented remedy is `reset_session()` or a different seed.
    #[error(
        "name pool exhausted for {category} names in the {theme} theme after {attempts} attempts; \
         call reset_session() or construct a generator with a different seed"
    )]
    PoolExhausted {
        category: EntityCategory,
        theme: Theme,
        attempts: u32,
    },
}

impl NameGenError {
    /// Build an `InvalidParameter` error listing the valid options.
    pub fn invalid_parameter<I>(parameter: &'static str, value: &str, options: I) -> Self
    where
        I: IntoIterator<Item = &'static str>,
    {
        let expected = options.into_iter().collect::<Vec<_>>().join(", ");
        Self::InvalidParameter {
            parameter,
            value: value.to_string(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_lists_options() {
        let err = NameGenError::invalid_parameter("theme", "steampunk", ["cyberpunk", "elves", "orcs"]);
        let msg = format!("{}", err);
        assert!(msg.contains("steampunk"));
        assert!(msg.contains("cyberpunk, elves, orcs"));
    }

    #[test]
    fn test_pool_exhausted_names_remedy() {
        let err = NameGenError::PoolExhausted {
            category: EntityCategory::Faction,
            theme: Theme::Orcs,
            attempts: 1000,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("faction"));
        assert!(msg.contains("orcs"));
        assert!(msg.contains("1000"));
        assert!(msg.contains("reset_session"));
    }
}

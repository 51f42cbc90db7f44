//! Name generation orchestrator.
//!
//! A `NameGenerator` owns its seed, its draw sequence, and the set of names
//! it has already returned. Every public operation runs the bounded
//! retry-until-unique loop over the composer; the theme data itself is
//! shared read-only between instances.

use std::collections::HashSet;
use std::sync::Arc;

use crate::composer;
use crate::data::{ThemeDefinition, ThemeSet};
use crate::error::NameGenError;
use crate::rng::RandomSequence;
use crate::theme::{BuildingType, EntityCategory, Gender, Theme};

/// Retry budget per generate call.
///
/// A hard cap, not adaptive: it does not scale with pool size, so small
/// fragment pools combined with many prior generations exhaust quickly.
pub const MAX_ATTEMPTS: u32 = 1000;

pub struct NameGenerator {
    seed: u64,
    rng: RandomSequence,
    returned: HashSet<String>,
    total_attempts: u64,
    themes: Arc<ThemeSet>,
}

impl NameGenerator {
    /// Generator with an entropy-drawn seed, retrievable via `seed()`.
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// Generator with an explicit seed over the bundled theme data.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_theme_set(seed, ThemeSet::shared())
    }

    /// Generator over injected theme data (custom fragment sets, test
    /// doubles).
    pub fn with_theme_set(seed: u64, themes: Arc<ThemeSet>) -> Self {
        Self {
            seed,
            rng: RandomSequence::from_seed(seed),
            returned: HashSet::new(),
            total_attempts: 0,
            themes,
        }
    }

    /// The seed in effect for this instance.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw attempts made in the current session, failed retries included.
    pub fn session_attempts(&self) -> u64 {
        self.total_attempts
    }

    /// Re-seed the draw sequence from the original seed and forget every
    /// returned name. Subsequent calls replay the outputs of a fresh
    /// instance constructed with the same seed.
    pub fn reset_session(&mut self) {
        self.rng = RandomSequence::from_seed(self.seed);
        self.returned.clear();
        self.total_attempts = 0;
    }

    pub fn npc_name(&mut self, theme: Theme, gender: Option<Gender>) -> Result<String, NameGenError> {
        // An omitted gender is drawn through the sequence, so the implied
        // choice replays with the seed like everything else.
        let gender = match gender {
            Some(g) => g,
            None => self.draw_gender(),
        };
        self.unique(EntityCategory::Npc, theme, |def, rng| {
            composer::npc(def, gender, rng)
        })
    }

    pub fn building_name(
        &mut self,
        theme: Theme,
        building_type: Option<BuildingType>,
    ) -> Result<String, NameGenError> {
        self.unique(EntityCategory::Building, theme, |def, rng| {
            composer::building(def, building_type, rng)
        })
    }

    pub fn city_name(&mut self, theme: Theme) -> Result<String, NameGenError> {
        self.unique(EntityCategory::City, theme, composer::city)
    }

    pub fn district_name(&mut self, theme: Theme) -> Result<String, NameGenError> {
        self.unique(EntityCategory::District, theme, composer::district)
    }

    pub fn street_name(&mut self, theme: Theme) -> Result<String, NameGenError> {
        self.unique(EntityCategory::Street, theme, composer::street)
    }

    pub fn faction_name(&mut self, theme: Theme) -> Result<String, NameGenError> {
        self.unique(EntityCategory::Faction, theme, composer::faction)
    }

    /// Tri-way pick driven by two coin flips.
    fn draw_gender(&mut self) -> Gender {
        if self.rng.next_bool() {
            if self.rng.next_bool() {
                Gender::Male
            } else {
                Gender::Female
            }
        } else {
            Gender::Neutral
        }
    }

    /// Retry-until-unique loop shared by every generate operation.
    ///
    /// Failed attempts are not rolled back: exhaustion consumes sequence
    /// progress, and later calls continue from the advanced cursor.
    fn unique<F>(
        &mut self,
        category: EntityCategory,
        theme: Theme,
        mut compose: F,
    ) -> Result<String, NameGenError>
    where
        F: FnMut(&ThemeDefinition, &mut RandomSequence) -> String,
    {
        let themes = Arc::clone(&self.themes);
        let def = themes.definition(theme);

        for _ in 0..MAX_ATTEMPTS {
            self.total_attempts += 1;
            let candidate = compose(def, &mut self.rng);
            if !self.returned.contains(&candidate) {
                self.returned.insert(candidate.clone());
                return Ok(candidate);
            }
        }

        Err(NameGenError::PoolExhausted {
            category,
            theme,
            attempts: MAX_ATTEMPTS,
        })
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

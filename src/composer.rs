//! Candidate name synthesis.
//!
//! Pure composition: each fragment draw is a single `next_index` call
//! against the relevant pool, and fragments join by the theme's fixed
//! template. No randomness beyond fragment selection, and no uniqueness
//! checking; that is the orchestrator's responsibility.

use crate::data::{CompoundPools, CompoundRule, NpcStyle, ThemeDefinition};
use crate::rng::RandomSequence;
use crate::theme::{BuildingType, Gender};

pub fn npc(def: &ThemeDefinition, gender: Gender, rng: &mut RandomSequence) -> String {
    let given = pick(rng, def.npc_pool(gender));
    match def.npc_style {
        NpcStyle::GivenOnly => given.to_string(),
        NpcStyle::GivenSurname | NpcStyle::GivenEpithet => {
            let second = pick(rng, &def.npc_second);
            format!("{} {}", given, second)
        }
    }
}

pub fn building(
    def: &ThemeDefinition,
    building_type: Option<BuildingType>,
    rng: &mut RandomSequence,
) -> String {
    let root = pick(rng, def.building_pool(building_type));
    let suffix = pick(rng, &def.building_suffixes);
    format!("{} {}", root, suffix)
}

pub fn city(def: &ThemeDefinition, rng: &mut RandomSequence) -> String {
    compound(&def.city, rng)
}

pub fn district(def: &ThemeDefinition, rng: &mut RandomSequence) -> String {
    compound(&def.district, rng)
}

pub fn street(def: &ThemeDefinition, rng: &mut RandomSequence) -> String {
    let descriptor = pick(rng, &def.street_descriptors);
    let suffix = pick(rng, &def.street_suffixes);
    format!("{} {}", descriptor, suffix)
}

pub fn faction(def: &ThemeDefinition, rng: &mut RandomSequence) -> String {
    let descriptor = pick(rng, &def.faction_descriptors);
    let org = pick(rng, &def.faction_orgs);
    format!("{} {}", descriptor, org)
}

fn compound(pools: &CompoundPools, rng: &mut RandomSequence) -> String {
    let first = pick(rng, &pools.first);
    let second = pick(rng, &pools.second);
    match pools.rule {
        CompoundRule::Fused => format!("{}{}", first, second),
        CompoundRule::WordPair => format!("{} {}", first, second),
    }
}

/// Draw one fragment from a pool.
fn pick<'a>(rng: &mut RandomSequence, pool: &'a [String]) -> &'a str {
    &pool[rng.next_index(pool.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ThemeSet;
    use crate::theme::Theme;

    fn well_formed(name: &str) {
        assert!(!name.is_empty());
        assert_eq!(name.trim(), name, "untrimmed: '{}'", name);
        assert!(!name.contains("  "), "double space in '{}'", name);
    }

    #[test]
    fn test_all_categories_compose_well_formed_names() {
        let set = ThemeSet::standard();
        for theme in Theme::all() {
            let def = set.definition(*theme);
            let mut rng = RandomSequence::from_seed(42);

            for _ in 0..50 {
                for gender in Gender::all() {
                    well_formed(&npc(def, *gender, &mut rng));
                }
                well_formed(&building(def, None, &mut rng));
                for bt in BuildingType::all() {
                    well_formed(&building(def, Some(*bt), &mut rng));
                }
                well_formed(&city(def, &mut rng));
                well_formed(&district(def, &mut rng));
                well_formed(&street(def, &mut rng));
                well_formed(&faction(def, &mut rng));
            }
        }
    }

    #[test]
    fn test_fused_cities_have_no_space() {
        let set = ThemeSet::standard();
        let def = set.definition(Theme::Elves);
        let mut rng = RandomSequence::from_seed(7);
        for _ in 0..20 {
            let name = city(def, &mut rng);
            assert!(!name.contains(' '), "elvish city should fuse: '{}'", name);
        }
    }

    #[test]
    fn test_word_pair_streets_have_one_space() {
        let set = ThemeSet::standard();
        let def = set.definition(Theme::Cyberpunk);
        let mut rng = RandomSequence::from_seed(7);
        for _ in 0..20 {
            let name = street(def, &mut rng);
            assert_eq!(name.matches(' ').count(), 1, "street: '{}'", name);
        }
    }

    #[test]
    fn test_synthesis_is_deterministic() {
        let set = ThemeSet::standard();
        let def = set.definition(Theme::Orcs);

        let mut a = RandomSequence::from_seed(99);
        let mut b = RandomSequence::from_seed(99);
        for _ in 0..30 {
            assert_eq!(npc(def, Gender::Female, &mut a), npc(def, Gender::Female, &mut b));
            assert_eq!(faction(def, &mut a), faction(def, &mut b));
        }
    }
}

//! Theme fragment data.
//!
//! A `ThemeDefinition` holds every fragment pool one theme needs: gendered
//! NPC pools, typed building pools, compound pools for cities and
//! districts, and descriptor/suffix pools for streets and factions. The
//! bundled definitions are built once by `ThemeSet::standard()`, validated
//! complete, and shared read-only across generator instances.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

use crate::theme::{BuildingType, Gender, Theme};

/// How a theme assembles NPC names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NpcStyle {
    /// Given name followed by a family name ("Jax Mercer").
    GivenSurname,
    /// A single given name ("Aelindra").
    GivenOnly,
    /// Given name followed by a deed epithet ("Grak Skullsnapper").
    GivenEpithet,
}

/// How two fragments combine into a compound place name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundRule {
    /// Concatenated with no separator ("Sil" + "anor" -> "Silanor").
    Fused,
    /// Joined with a single space ("Neo" + "Avalon" -> "Neo Avalon").
    WordPair,
}

/// Two fragment pools plus the rule that joins a draw from each.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CompoundPools {
    pub first: Vec<String>,
    pub second: Vec<String>,
    pub rule: CompoundRule,
}

/// Complete fragment data for one theme.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub theme: Theme,

    // --- NPC ---
    pub npc_style: NpcStyle,
    pub npc_male: Vec<String>,
    pub npc_female: Vec<String>,
    pub npc_neutral: Vec<String>,
    /// Surnames or epithets; empty only for `NpcStyle::GivenOnly`.
    pub npc_second: Vec<String>,

    // --- Buildings ---
    pub building_generic: Vec<String>,
    pub building_residential: Vec<String>,
    pub building_commercial: Vec<String>,
    pub building_industrial: Vec<String>,
    pub building_government: Vec<String>,
    pub building_entertainment: Vec<String>,
    pub building_medical: Vec<String>,
    pub building_educational: Vec<String>,
    /// Suffix words appended to every building root ("Tower", "Hall").
    pub building_suffixes: Vec<String>,

    // --- Places ---
    pub city: CompoundPools,
    pub district: CompoundPools,

    // --- Streets ---
    pub street_descriptors: Vec<String>,
    pub street_suffixes: Vec<String>,

    // --- Factions ---
    pub faction_descriptors: Vec<String>,
    pub faction_orgs: Vec<String>,
}

impl ThemeDefinition {
    /// Bundled definition for a theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Cyberpunk => Self::cyberpunk(),
            Theme::Elves => Self::elves(),
            Theme::Orcs => Self::orcs(),
        }
    }

    /// Given-name pool for a gender.
    pub fn npc_pool(&self, gender: Gender) -> &[String] {
        match gender {
            Gender::Male => &self.npc_male,
            Gender::Female => &self.npc_female,
            Gender::Neutral => &self.npc_neutral,
        }
    }

    /// Building root pool for a type; `None` selects the generic pool.
    pub fn building_pool(&self, building_type: Option<BuildingType>) -> &[String] {
        match building_type {
            None => &self.building_generic,
            Some(BuildingType::Residential) => &self.building_residential,
            Some(BuildingType::Commercial) => &self.building_commercial,
            Some(BuildingType::Industrial) => &self.building_industrial,
            Some(BuildingType::Government) => &self.building_government,
            Some(BuildingType::Entertainment) => &self.building_entertainment,
            Some(BuildingType::Medical) => &self.building_medical,
            Some(BuildingType::Educational) => &self.building_educational,
        }
    }

    /// Check that every pool a composition can reach is populated.
    ///
    /// An empty pool is a data defect, caught at load time rather than
    /// surfaced to generate calls.
    pub fn validate(&self) {
        let theme = self.theme;
        let check = |pool: &[String], what: &str| {
            assert!(
                !pool.is_empty(),
                "theme '{}' has no {} fragments",
                theme,
                what
            );
        };

        for gender in Gender::all() {
            check(self.npc_pool(*gender), gender.name());
        }
        if self.npc_style != NpcStyle::GivenOnly {
            check(&self.npc_second, "npc second-component");
        }

        check(&self.building_generic, "generic building");
        for bt in BuildingType::all() {
            check(self.building_pool(Some(*bt)), bt.name());
        }
        check(&self.building_suffixes, "building suffix");

        check(&self.city.first, "city prefix");
        check(&self.city.second, "city root");
        check(&self.district.first, "district root");
        check(&self.district.second, "district suffix");

        check(&self.street_descriptors, "street descriptor");
        check(&self.street_suffixes, "street suffix");
        check(&self.faction_descriptors, "faction descriptor");
        check(&self.faction_orgs, "faction organization");
    }

    fn cyberpunk() -> Self {
        Self {
            theme: Theme::Cyberpunk,
            npc_style: NpcStyle::GivenSurname,
            npc_male: strs(&[
                "Jax", "Kaz", "Dex", "Silas", "Viktor", "Enzo", "Cole", "Dante",
                "Ryker", "Marcus", "Hideo", "Sergei", "Niko", "Rhett", "Ash", "Osiris",
            ]),
            npc_female: strs(&[
                "Nyx", "Vex", "Mira", "Sable", "Juno", "Kira", "Rhea", "Nova",
                "Ivy", "Lux", "Anya", "Suki", "Dara", "Zola", "Echo", "Raven",
            ]),
            npc_neutral: strs(&[
                "Zero", "Glitch", "Proxy", "Cipher", "Static", "Vector", "Pixel", "Onyx",
                "Binary", "Flux", "Ghost", "Wire", "Socket", "Drift", "Patch", "Neon",
            ]),
            npc_second: strs(&[
                "Kurosaki", "Voss", "Mercer", "Takeda", "Draven", "Okafor", "Castellan", "Novak",
                "Reyes", "Sato", "Winters", "Kessler", "Moreau", "Zhang", "Petrov", "Calloway",
            ]),
            building_generic: strs(&[
                "Apex", "Helix", "Vertex", "Obsidian", "Chrome", "Nexus", "Zenith", "Catalyst",
            ]),
            building_residential: strs(&[
                "Skyline", "Vertigo", "Cobalt", "Arcadia", "Lumen", "Horizon",
            ]),
            building_commercial: strs(&[
                "Axiom", "Paragon", "Sterling", "Quantum", "Vortex", "Meridian",
            ]),
            building_industrial: strs(&[
                "Forge", "Piston", "Crucible", "Dynamo", "Gearworks", "Smelter",
            ]),
            building_government: strs(&[
                "Unity", "Sentinel", "Charter", "Tribunal", "Mandate", "Concord",
            ]),
            building_entertainment: strs(&[
                "Mirage", "Pulse", "Voltage", "Afterglow", "Siren", "Eclipse",
            ]),
            building_medical: strs(&[
                "Mercy", "Lifeline", "Vitalis", "Trauma", "Serenity", "Remedy",
            ]),
            building_educational: strs(&[
                "Minerva", "Beacon", "Archive", "Praxis", "Lyceum", "Turing",
            ]),
            building_suffixes: strs(&[
                "Tower", "Plaza", "Complex", "Spire", "Arcology", "Hub", "Block", "Center",
            ]),
            city: CompoundPools {
                first: strs(&["Neo", "New", "Greater", "Lower", "Port", "Old"]),
                second: strs(&[
                    "Avalon", "Kowloon", "Shinkai", "Varga", "Eden", "Halcyon", "Kiroshi", "Meridia",
                ]),
                rule: CompoundRule::WordPair,
            },
            district: CompoundPools {
                first: strs(&[
                    "Chrome", "Neon", "Rust", "Circuit", "Shadow", "Static", "Mercury", "Cinder",
                ]),
                second: strs(&["Sector", "Quarter", "Grid", "Zone", "Ward", "Row"]),
                rule: CompoundRule::WordPair,
            },
            street_descriptors: strs(&[
                "Razor", "Halogen", "Binary", "Synth", "Holo", "Flicker", "Relay", "Vapor",
            ]),
            street_suffixes: strs(&[
                "Street", "Avenue", "Boulevard", "Alley", "Row", "Drive",
            ]),
            faction_descriptors: strs(&[
                "Crimson", "Obsidian", "Silent", "Chrome", "Midnight", "Neon", "Iron", "Phantom",
            ]),
            faction_orgs: strs(&[
                "Syndicate", "Cartel", "Collective", "Consortium", "Combine", "Network",
            ]),
        }
    }

    fn elves() -> Self {
        Self {
            theme: Theme::Elves,
            npc_style: NpcStyle::GivenOnly,
            npc_male: strs(&[
                "Aelar", "Thalion", "Erevan", "Faelar", "Caladrel", "Ivellios", "Laucian", "Mindartis",
                "Soveliss", "Galinndan", "Riardon", "Quarion", "Elandor", "Sylvar", "Tharivol", "Arannis",
            ]),
            npc_female: strs(&[
                "Aelindra", "Sariel", "Naivara", "Quelenna", "Shanairra", "Thia", "Vadania", "Valanthe",
                "Xanaphia", "Keyleth", "Althaea", "Bethrynna", "Caelynn", "Drusilia", "Enna", "Liara",
            ]),
            npc_neutral: strs(&[
                "Faen", "Sylrien", "Vaeril", "Aerendyl", "Nimloth", "Cithrel", "Lorsan", "Teliandre",
                "Myriil", "Saelethil", "Arlen", "Yathlas", "Ithrien", "Oleandre", "Wyn", "Cailu",
            ]),
            npc_second: Vec::new(),
            building_generic: strs(&[
                "Moonpetal", "Silverbough", "Starfall", "Dawnlight", "Willowshade", "Everbloom",
            ]),
            building_residential: strs(&[
                "Fernbrook", "Mosshaven", "Briarwind", "Larkspur", "Thistledown", "Gladewatch",
            ]),
            building_commercial: strs(&[
                "Goldleaf", "Amberdew", "Silkthread", "Honeyvale", "Gemflower", "Tradewind",
            ]),
            building_industrial: strs(&[
                "Ironbark", "Stoneweave", "Glasswing", "Forgeleaf", "Timberfall", "Loomsong",
            ]),
            building_government: strs(&[
                "Highcourt", "Elderseat", "Crownleaf", "Oathstone", "Lawgrove", "Sunthrone",
            ]),
            building_entertainment: strs(&[
                "Harpsong", "Revelwood", "Glimmerveil", "Moonfeast", "Starweave", "Laughingbrook",
            ]),
            building_medical: strs(&[
                "Lifebloom", "Healingdew", "Soothewind", "Mendleaf", "Restwater", "Purelight",
            ]),
            building_educational: strs(&[
                "Loreleaf", "Scrollwood", "Wisdomvale", "Runesong", "Starlore", "Inkbloom",
            ]),
            building_suffixes: strs(&[
                "Hall", "Bower", "Lodge", "Spire", "Sanctum", "Pavilion",
            ]),
            city: CompoundPools {
                first: strs(&["Sil", "Ael", "Thal", "Cel", "Gal", "Lor", "Elen", "Myth"]),
                second: strs(&["anor", "wen", "oth", "ion", "arion", "thil", "mere", "dor"]),
                rule: CompoundRule::Fused,
            },
            district: CompoundPools {
                first: strs(&[
                    "Moonlit", "Silverleaf", "Starlit", "Dewfall", "Amberlight", "Whispering",
                ]),
                second: strs(&["Ward", "Terrace", "Gardens", "Court", "Glade", "Crescent"]),
                rule: CompoundRule::WordPair,
            },
            street_descriptors: strs(&[
                "Starpetal", "Willowwind", "Dawnmist", "Songbrook", "Fernlight", "Petalfall",
                "Moonbeam", "Silverdew",
            ]),
            street_suffixes: strs(&[
                "Path", "Way", "Walk", "Lane", "Crossing", "Promenade",
            ]),
            faction_descriptors: strs(&[
                "Emerald", "Silver", "Twilight", "Verdant", "Starlit", "Ancient", "Moonlit", "Golden",
            ]),
            faction_orgs: strs(&[
                "Council", "Court", "Circle", "Conclave", "Covenant", "Order",
            ]),
        }
    }

    fn orcs() -> Self {
        Self {
            theme: Theme::Orcs,
            npc_style: NpcStyle::GivenEpithet,
            npc_male: strs(&[
                "Grak", "Thokk", "Urzog", "Krug", "Morg", "Zug", "Drog", "Gnash",
                "Bolg", "Ruk", "Skarn", "Thrag", "Vrog", "Gorzag", "Mukk", "Ragash",
            ]),
            npc_female: strs(&[
                "Ushka", "Grisha", "Morna", "Zagra", "Ketza", "Ulga", "Brakka", "Shelza",
                "Vorka", "Yazga", "Murgla", "Ogra", "Drusza", "Hakra", "Snaga", "Wurgha",
            ]),
            npc_neutral: strs(&[
                "Gnarl", "Husk", "Fang", "Scar", "Grit", "Maul", "Rend", "Snarl",
                "Crag", "Shard", "Thorn", "Brand", "Gouge", "Rasp", "Flint", "Stub",
            ]),
            npc_second: strs(&[
                "Skullsnapper", "Bonecrusher", "Ironjaw", "Blooddrinker", "Rockbiter", "Wolfeater",
                "Spinebreaker", "Ashmaw", "Gutripper", "Stonefist", "Fleshrender", "Doomhowler",
            ]),
            building_generic: strs(&[
                "Blackfang", "Ironhide", "Bonepile", "Ragefire", "Grimrock", "Bloodhowl",
            ]),
            building_residential: strs(&[
                "Mudbrick", "Hidebound", "Furpile", "Smokevent", "Bonehearth", "Packrest",
            ]),
            building_commercial: strs(&[
                "Scrapheap", "Tuskbarter", "Lootpile", "Hagglefang", "Bonecoin", "Pelttrade",
            ]),
            building_industrial: strs(&[
                "Slagforge", "Hammerfall", "Ironmelt", "Coalfang", "Anvilrock", "Smokebelch",
            ]),
            building_government: strs(&[
                "Warthrone", "Chiefseat", "Ironbanner", "Skulltally", "Lawclub", "Oathfire",
            ]),
            building_entertainment: strs(&[
                "Brawlpit", "Grogswill", "Drumfire", "Roastspit", "Howlfest", "Betfang",
            ]),
            building_medical: strs(&[
                "Bonesetter", "Herbgrinder", "Toothpuller", "Woundstitch", "Sludgebrew", "Leechtub",
            ]),
            building_educational: strs(&[
                "Warlore", "Runescar", "Tuskscript", "Elderfire", "Drumtale", "Bloodrite",
            ]),
            building_suffixes: strs(&[
                "Den", "Pit", "Hold", "Hall", "Hut", "Kraal",
            ]),
            city: CompoundPools {
                first: strs(&["Gor", "Mok", "Zug", "Krag", "Urz", "Grim", "Bol", "Skar"]),
                second: strs(&["gash", "mar", "fang", "zakh", "duum", "grod", "rok", "thul"]),
                rule: CompoundRule::Fused,
            },
            district: CompoundPools {
                first: strs(&["Blood", "Skull", "Ash", "Rot", "War", "Bone", "Rust", "Maggot"]),
                second: strs(&["Pit", "Yard", "Warren", "Mound", "Sprawl", "Hollow"]),
                rule: CompoundRule::WordPair,
            },
            street_descriptors: strs(&[
                "Mud", "Gore", "Tusk", "Gristle", "Smoke", "Gravel", "Snout", "Club",
            ]),
            street_suffixes: strs(&[
                "Road", "Track", "Way", "Path", "Run", "Crawl",
            ]),
            faction_descriptors: strs(&[
                "Redfang", "Blackblood", "Ironhowl", "Bonegrind", "Ashtusk", "Stormjaw",
                "Gorefist", "Thunderhide",
            ]),
            faction_orgs: strs(&[
                "Horde", "Clan", "Warband", "Tribe", "Legion", "Mob",
            ]),
        }
    }
}

/// Immutable collection with one definition per theme.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeSet {
    definitions: Vec<ThemeDefinition>,
}

impl ThemeSet {
    /// Build a set from explicit definitions, validating completeness.
    ///
    /// Panics if a theme is missing or any reachable pool is empty; a
    /// partial theme set is a construction-time defect.
    pub fn new(definitions: Vec<ThemeDefinition>) -> Self {
        let set = Self { definitions };
        set.validate();
        set
    }

    /// The bundled definitions for all themes.
    pub fn standard() -> Self {
        Self::new(
            Theme::all()
                .iter()
                .map(|theme| ThemeDefinition::for_theme(*theme))
                .collect(),
        )
    }

    /// Process-wide shared copy of the standard set, built on first use.
    pub fn shared() -> Arc<ThemeSet> {
        static SHARED: OnceLock<Arc<ThemeSet>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(ThemeSet::standard())).clone()
    }

    pub fn definition(&self, theme: Theme) -> &ThemeDefinition {
        self.definitions
            .iter()
            .find(|d| d.theme == theme)
            .expect("theme set validated complete at construction")
    }

    fn validate(&self) {
        for theme in Theme::all() {
            let def = self
                .definitions
                .iter()
                .find(|d| d.theme == *theme)
                .unwrap_or_else(|| panic!("theme set is missing data for theme '{}'", theme));
            def.validate();
        }
    }
}

/// Helper to convert &[&str] to Vec<String>.
fn strs(slice: &[&str]) -> Vec<String> {
    slice.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_is_complete() {
        let set = ThemeSet::standard();
        for theme in Theme::all() {
            let def = set.definition(*theme);
            assert_eq!(def.theme, *theme);
            for gender in Gender::all() {
                assert!(!def.npc_pool(*gender).is_empty());
            }
            assert!(!def.building_pool(None).is_empty());
            for bt in BuildingType::all() {
                assert!(!def.building_pool(Some(*bt)).is_empty());
            }
        }
    }

    #[test]
    fn test_fragments_contain_no_stray_whitespace() {
        // Composed names are joined with single spaces, so fragments must
        // not carry their own.
        let set = ThemeSet::standard();
        for theme in Theme::all() {
            let def = set.definition(*theme);
            let pools: Vec<&[String]> = vec![
                &def.npc_male,
                &def.npc_female,
                &def.npc_neutral,
                &def.npc_second,
                &def.building_generic,
                &def.building_suffixes,
                &def.city.first,
                &def.city.second,
                &def.district.first,
                &def.district.second,
                &def.street_descriptors,
                &def.street_suffixes,
                &def.faction_descriptors,
                &def.faction_orgs,
            ];
            for pool in pools {
                for fragment in pool {
                    assert_eq!(fragment.trim(), fragment, "untrimmed fragment: '{}'", fragment);
                    assert!(
                        !fragment.contains(' '),
                        "multi-word fragment in {}: '{}'",
                        theme,
                        fragment
                    );
                }
            }
        }
    }

    #[test]
    #[should_panic(expected = "missing data")]
    fn test_partial_set_rejected() {
        ThemeSet::new(vec![ThemeDefinition::for_theme(Theme::Cyberpunk)]);
    }

    #[test]
    #[should_panic(expected = "no male fragments")]
    fn test_empty_pool_rejected() {
        let mut def = ThemeDefinition::for_theme(Theme::Orcs);
        def.npc_male.clear();
        def.validate();
    }
}

use clap::Parser;

use name_forge::{
    BuildingType, EntityCategory, Gender, NameGenError, NameGenerator, Theme,
};

#[derive(Parser, Debug)]
#[command(name = "name_forge")]
#[command(about = "Generate themed names for NPCs, buildings, cities, districts, streets, and factions")]
struct Args {
    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Theme: cyberpunk, elves, orcs
    #[arg(short, long, default_value = "cyberpunk")]
    theme: String,

    /// Entity category: npc, building, city, district, street, faction
    #[arg(short, long, default_value = "npc")]
    category: String,

    /// Number of names to generate
    #[arg(short = 'n', long, default_value = "10")]
    count: u32,

    /// NPC gender: male, female, neutral (drawn from the seed if not specified)
    #[arg(short, long)]
    gender: Option<String>,

    /// Building type: residential, commercial, industrial, government,
    /// entertainment, medical, educational (generic if not specified)
    #[arg(short, long)]
    building_type: Option<String>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), NameGenError> {
    let theme: Theme = args.theme.parse()?;
    let category: EntityCategory = args.category.parse()?;
    let gender: Option<Gender> = args.gender.as_deref().map(str::parse).transpose()?;
    let building_type: Option<BuildingType> =
        args.building_type.as_deref().map(str::parse).transpose()?;

    let mut generator = match args.seed {
        Some(seed) => NameGenerator::with_seed(seed),
        None => NameGenerator::new(),
    };

    println!(
        "Generating {} {} name(s) in the {} theme with seed {}",
        args.count,
        category,
        theme,
        generator.seed()
    );

    for _ in 0..args.count {
        let name = match category {
            EntityCategory::Npc => generator.npc_name(theme, gender)?,
            EntityCategory::Building => generator.building_name(theme, building_type)?,
            EntityCategory::City => generator.city_name(theme)?,
            EntityCategory::District => generator.district_name(theme)?,
            EntityCategory::Street => generator.street_name(theme)?,
            EntityCategory::Faction => generator.faction_name(theme)?,
        };
        println!("  {}", name);
    }

    Ok(())
}

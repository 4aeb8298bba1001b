use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use terrain_synth::ascii::{self, AsciiMode};
use terrain_synth::stats::GridStats;
#[cfg(test)]
use terrain_synth::SettingsError;
use terrain_synth::{TerrainSettings, TerrainSynthesizer, GRID_SIZE};

#[derive(Parser, Debug)]
#[command(name = "terrain_synth")]
#[command(about = "Generate seeded noise terrain with biomes, trees and villages")]
struct Args {
    /// Load settings from a JSON file (flags below override it)
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Random seed (uses random seed if not specified)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Noise scale in cells (larger = broader features)
    #[arg(long)]
    scale: Option<f64>,

    /// Number of noise octaves
    #[arg(short, long)]
    octaves: Option<u32>,

    /// Amplitude decay per octave
    #[arg(long)]
    persistence: Option<f64>,

    /// Frequency growth per octave
    #[arg(long)]
    lacunarity: Option<f64>,

    /// Exponent applied to the normalized height
    #[arg(long)]
    height_multiplier: Option<f64>,

    /// Tree density on grassland (0.0-1.0)
    #[arg(long)]
    tree_density: Option<f64>,

    /// Building density inside villages (0.0-1.0)
    #[arg(long)]
    village_density: Option<f64>,

    /// Skip trees and villages
    #[arg(long)]
    no_structures: bool,

    /// Grid size in cells per side
    #[arg(short = 'n', long, default_value_t = GRID_SIZE)]
    size: usize,

    /// Print the grid as JSON to stdout instead of the summary
    #[arg(long)]
    json: bool,

    /// Print an ASCII preview of the grid
    #[arg(long, value_enum)]
    ascii: Option<View>,

    /// Use 24-bit ANSI colors for the biome preview
    #[arg(long)]
    color: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum View {
    Biome,
    Height,
    Villages,
}

impl From<View> for AsciiMode {
    fn from(view: View) -> Self {
        match view {
            View::Biome => AsciiMode::Biome,
            View::Height => AsciiMode::Height,
            View::Villages => AsciiMode::Villages,
        }
    }
}

fn resolve_settings(args: &Args) -> terrain_synth::Result<TerrainSettings> {
    let mut settings = match &args.settings {
        Some(path) => TerrainSettings::read(path)?,
        None => TerrainSettings::default(),
    };

    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    if let Some(scale) = args.scale {
        settings.scale = scale;
    }
    if let Some(octaves) = args.octaves {
        settings.octaves = octaves;
    }
    if let Some(persistence) = args.persistence {
        settings.persistence = persistence;
    }
    if let Some(lacunarity) = args.lacunarity {
        settings.lacunarity = lacunarity;
    }
    if let Some(exponent) = args.height_multiplier {
        settings.height_multiplier = exponent;
    }
    if let Some(density) = args.tree_density {
        settings.tree_density = density;
    }
    if let Some(density) = args.village_density {
        settings.village_density = density;
    }
    if args.no_structures {
        settings.show_structures = false;
    }

    settings.validate()?;
    Ok(settings)
}

fn run(args: &Args) -> terrain_synth::Result<()> {
    let settings = resolve_settings(args)?;
    let mut synthesizer = TerrainSynthesizer::new(args.size);

    if args.json {
        let grid = synthesizer.synthesize(&settings);
        println!("{}", grid.to_json()?);
        return Ok(());
    }

    println!("Generating terrain with seed: {}", settings.seed);
    println!("Grid size: {}x{}", args.size, args.size);
    println!(
        "Noise: scale {}, {} octaves, persistence {}, lacunarity {}, exponent {}",
        settings.scale, settings.octaves, settings.persistence, settings.lacunarity,
        settings.height_multiplier
    );

    let grid = synthesizer.synthesize(&settings);
    print!("{}", GridStats::from_grid(&grid).summary());

    if let Some(view) = args.ascii {
        let mode = AsciiMode::from(view);
        println!();
        if args.color && mode == AsciiMode::Biome {
            print!("{}", ascii::render_colored_ascii_map(&grid));
        } else {
            print!("{}", ascii::render_ascii_map(&grid, mode));
        }
        if mode == AsciiMode::Biome {
            print!("{}", ascii::legend());
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_settings(name: &str, json: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}.json", name, std::process::id()));
        std::fs::write(&path, json).unwrap();
        path
    }

    fn resolve(argv: &[&str]) -> terrain_synth::Result<TerrainSettings> {
        let args = Args::parse_from(std::iter::once("terrain_synth").chain(argv.iter().copied()));
        resolve_settings(&args)
    }

    #[test]
    fn test_flag_replaces_invalid_file_value() {
        let path = write_settings("cli_bad_scale", r#"{ "seed": 42, "scale": 0 }"#);
        let path_arg = path.to_str().unwrap();

        let settings = resolve(&["--settings", path_arg, "--scale", "30", "-n", "10"]).unwrap();
        assert_eq!(settings.scale, 30.0);
        assert_eq!(settings.seed, 42);

        // Without the override the resolved value is still rejected
        assert!(matches!(
            resolve(&["--settings", path_arg]),
            Err(terrain_synth::Error::Settings(SettingsError::InvalidScale(_)))
        ));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_flag_overrides_file_value() {
        let json = r#"{ "seed": 7, "octaves": 6, "treeDensity": 0.5 }"#;
        let path = write_settings("cli_octaves", json);
        let path_arg = path.to_str().unwrap();

        let settings = resolve(&["--settings", path_arg, "--octaves", "2", "--seed", "9"]).unwrap();

        assert_eq!(settings.octaves, 2);
        assert_eq!(settings.seed, 9);
        assert_eq!(settings.tree_density, 0.5);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_file_value_overrides_default() {
        let json = r#"{ "seed": 3, "lacunarity": 2.5, "villageDensity": 0.7 }"#;
        let path = write_settings("cli_file", json);
        let settings = resolve(&["--settings", path.to_str().unwrap()]).unwrap();

        assert_eq!(settings.seed, 3);
        assert_eq!(settings.lacunarity, 2.5);
        assert_eq!(settings.village_density, 0.7);
        // Untouched fields keep their defaults
        assert_eq!(settings.scale, 30.0);
        assert_eq!(settings.octaves, 4);
        assert!(settings.show_structures);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_no_structures_flag_wins() {
        let path = write_settings("cli_structures", r#"{ "seed": 1, "showStructures": true }"#);
        let settings = resolve(&["--settings", path.to_str().unwrap(), "--no-structures"]).unwrap();
        assert!(!settings.show_structures);
        std::fs::remove_file(&path).unwrap();

        let settings = resolve(&["--seed", "5", "--no-structures"]).unwrap();
        assert!(!settings.show_structures);
        assert_eq!(settings.seed, 5);
    }

    #[test]
    fn test_invalid_flag_is_rejected() {
        assert!(matches!(
            resolve(&["--tree-density", "1.5"]),
            Err(terrain_synth::Error::Settings(SettingsError::DensityOutOfRange { .. }))
        ));
    }
}

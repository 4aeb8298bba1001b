//! ASCII rendering of terrain grids
//!
//! A terminal preview for debugging: one character per cell, with structures drawn over the
//! biome character and optional 24-bit ANSI color taken from the biome table.

use crate::biomes::BiomeType;
use crate::structures::StructureType;
use crate::world::TerrainGrid;

/// ASCII rendering modes
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AsciiMode {
    /// Biome characters with structures on top
    Biome,
    /// Elevation gradient
    Height,
    /// Settlement territory
    Villages,
}

impl AsciiMode {
    pub fn name(&self) -> &'static str {
        match self {
            AsciiMode::Biome => "Biome",
            AsciiMode::Height => "Height",
            AsciiMode::Villages => "Villages",
        }
    }

    pub fn all() -> &'static [AsciiMode] {
        &[AsciiMode::Biome, AsciiMode::Height, AsciiMode::Villages]
    }
}

/// Get ASCII character for a biome
pub fn biome_char(biome: BiomeType) -> char {
    match biome {
        BiomeType::DeepOcean => '~',
        BiomeType::Ocean => '.',
        BiomeType::Beach => ',',
        BiomeType::Grassland => '"',
        BiomeType::Forest => 'T',
        BiomeType::Mountain => '^',
        BiomeType::Snow => '*',
    }
}

/// Character for a structure, `None` when nothing stands on the cell
pub fn structure_char(structure: StructureType) -> Option<char> {
    match structure {
        StructureType::None => None,
        StructureType::Tree => Some('t'),
        StructureType::Building => Some('h'),
        StructureType::Tower => Some('I'),
    }
}

/// Get ASCII character for elevation (0.0-1.0)
pub fn height_char(height: f32) -> char {
    const RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];
    let idx = (height.clamp(0.0, 1.0) * (RAMP.len() - 1) as f32).round() as usize;
    RAMP[idx]
}

fn cell_char(grid: &TerrainGrid, x: usize, y: usize, mode: AsciiMode) -> char {
    match mode {
        AsciiMode::Biome => structure_char(grid.structure_at(x, y))
            .unwrap_or_else(|| biome_char(grid.biome_at(x, y).biome)),
        AsciiMode::Height => height_char(grid.height_at(x, y)),
        AsciiMode::Villages => {
            if grid.is_village(x, y) {
                '#'
            } else {
                '.'
            }
        }
    }
}

/// Render the grid as plain ASCII, one line per row.
pub fn render_ascii_map(grid: &TerrainGrid, mode: AsciiMode) -> String {
    let mut result = String::with_capacity((grid.size + 1) * grid.size);

    for y in 0..grid.size {
        for x in 0..grid.size {
            result.push(cell_char(grid, x, y, mode));
        }
        result.push('\n');
    }

    result
}

/// Format a string with ANSI true color (24-bit) - foreground and background
pub fn ansi_colored(text: &str, fg: [u8; 3], bg: [u8; 3]) -> String {
    format!(
        "\x1b[38;2;{};{};{}m\x1b[48;2;{};{};{}m{}\x1b[0m",
        fg[0], fg[1], fg[2],
        bg[0], bg[1], bg[2],
        text
    )
}

/// Black or white, whichever reads better on `bg`
fn contrast_color(bg: [u8; 3]) -> [u8; 3] {
    let [r, g, b] = bg;
    let brightness = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
    if brightness > 128 {
        [0, 0, 0]
    } else {
        [255, 255, 255]
    }
}

/// Render the biome view with the biome colors as cell backgrounds.
pub fn render_colored_ascii_map(grid: &TerrainGrid) -> String {
    let mut result = String::new();

    for y in 0..grid.size {
        for x in 0..grid.size {
            let bg = grid.biome_at(x, y).color;
            let ch = cell_char(grid, x, y, AsciiMode::Biome);
            result.push_str(&ansi_colored(&ch.to_string(), contrast_color(bg), bg));
        }
        result.push('\n');
    }

    result
}

/// Generate legend for biome and structure characters
pub fn legend() -> String {
    let mut legend = String::from("=== LEGEND ===\n");
    for biome in BiomeType::all() {
        legend.push_str(&format!("  {} {}\n", biome_char(biome), biome.label()));
    }
    for &structure in StructureType::all() {
        if let Some(ch) = structure_char(structure) {
            legend.push_str(&format!("  {} {}\n", ch, structure));
        }
    }
    legend
}

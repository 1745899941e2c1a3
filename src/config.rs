//! Canvas and brush defaults.

use serde::{Deserialize, Serialize};

use crate::color::Color;

pub use crate::history::HISTORY_CAPACITY;

/// File name (without extension) used when exporting
pub const DEFAULT_EXPORT_NAME: &str = "my-doodle";

/// Colors offered in the palette
pub const PALETTE: [&str; 18] = [
    "#000000", // Black
    "#ffffff", // White
    "#ef4444", // Red
    "#3b82f6", // Blue
    "#22c55e", // Green
    "#eab308", // Yellow
    "#a855f7", // Purple
    "#f97316", // Orange
    "#ec4899", // Pink
    "#06b6d4", // Cyan
    "#84cc16", // Lime
    "#f59e0b", // Amber
    "#8b5cf6", // Violet
    "#10b981", // Emerald
    "#f43f5e", // Rose
    "#6366f1", // Indigo
    "#64748b", // Slate
    "#78716c", // Stone
];

/// Parsed palette; entries that fail to parse are skipped.
pub fn palette() -> Vec<Color> {
    PALETTE.iter().filter_map(|hex| Color::from_hex(hex).ok()).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Color,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Color::WHITE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrushSettings {
    pub default_size: u32,
    pub min_size: u32,
    pub max_size: u32,
    pub default_color: Color,
}

impl Default for BrushSettings {
    fn default() -> Self {
        Self {
            default_size: 10,
            min_size: 1,
            max_size: 50,
            default_color: Color::BLACK,
        }
    }
}

impl BrushSettings {
    pub fn clamp_size(&self, size: u32) -> u32 {
        size.clamp(self.min_size, self.max_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_parses() {
        let colors = palette();
        assert_eq!(colors.len(), PALETTE.len());
        assert_eq!(colors[2], Color::rgb(0xef, 0x44, 0x44));
    }

    #[test]
    fn test_clamp_size() {
        let brush = BrushSettings::default();
        assert_eq!(brush.clamp_size(0), 1);
        assert_eq!(brush.clamp_size(25), 25);
        assert_eq!(brush.clamp_size(500), 50);
    }
}

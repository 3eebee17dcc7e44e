//! Neon display colors
//!
//! Tiles and tower blocks cycle through a short palette by index.

use serde::{Deserialize, Serialize};

/// An sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `#RRGGBB` form, as canvas toolkits expect
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Normalized RGBA for GPU-style consumers
    pub fn to_rgba_f32(self, alpha: f32) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            alpha,
        ]
    }
}

pub const DEEP_PURPLE: Color = Color::rgb(0x4B, 0x00, 0xFF);
pub const HOT_MAGENTA: Color = Color::rgb(0xE6, 0x00, 0xFF);
pub const GOLDEN_YELLOW: Color = Color::rgb(0xFF, 0xC2, 0x00);

// UI accents
pub const ELECTRIC_BLUE: Color = Color::rgb(0x00, 0xFF, 0xFF);
pub const LIME_GREEN: Color = Color::rgb(0x32, 0xCD, 0x32);
pub const ORANGE: Color = Color::rgb(0xFF, 0x45, 0x00);
pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);
pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

/// Palette used for tiles and tower blocks
pub const NEON_PALETTE: [Color; 3] = [DEEP_PURPLE, HOT_MAGENTA, GOLDEN_YELLOW];

/// Palette color for an index (wraps)
#[inline]
pub fn color_by_index(index: usize) -> Color {
    NEON_PALETTE[index % NEON_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_by_index_wraps() {
        assert_eq!(color_by_index(0), DEEP_PURPLE);
        assert_eq!(color_by_index(2), GOLDEN_YELLOW);
        assert_eq!(color_by_index(3), DEEP_PURPLE);
        assert_eq!(color_by_index(11), GOLDEN_YELLOW);
    }

    #[test]
    fn test_hex() {
        assert_eq!(DEEP_PURPLE.to_hex(), "#4B00FF");
        assert_eq!(LIME_GREEN.to_hex(), "#32CD32");
    }

    #[test]
    fn test_rgba() {
        let rgba = WHITE.to_rgba_f32(0.5);
        assert_eq!(rgba, [1.0, 1.0, 1.0, 0.5]);
    }
}

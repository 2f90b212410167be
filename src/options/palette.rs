//! Series color palette.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema,
)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    #[serde(default = "opaque")]
    pub a: u8,
}

const fn opaque() -> u8 {
    255
}

impl Color {
    /// Create a fully opaque color.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    #[must_use]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Neutral gray returned when a palette has no colors configured.
const FALLBACK: Color = Color::from_rgb(128, 128, 128);

/// Material design palette, in series order.
const MATERIAL_DESIGN: [Color; 15] = [
    Color::from_rgb(0x21, 0x96, 0xF3), // blue
    Color::from_rgb(0xF4, 0x43, 0x36), // red
    Color::from_rgb(0x9C, 0x27, 0xB0), // purple
    Color::from_rgb(0x67, 0x3A, 0xB7), // deep purple
    Color::from_rgb(0x3F, 0x51, 0xB5), // indigo
    Color::from_rgb(0x03, 0xA9, 0xF4), // light blue
    Color::from_rgb(0x00, 0xBC, 0xD4), // cyan
    Color::from_rgb(0x00, 0x96, 0x88), // teal
    Color::from_rgb(0x4C, 0xAF, 0x50), // green
    Color::from_rgb(0x8B, 0xC3, 0x4A), // light green
    Color::from_rgb(0xCD, 0xDC, 0x39), // lime
    Color::from_rgb(0xFF, 0xEB, 0x3B), // yellow
    Color::from_rgb(0xFF, 0xC1, 0x07), // amber
    Color::from_rgb(0xFF, 0x98, 0x00), // orange
    Color::from_rgb(0xFF, 0x57, 0x22), // deep orange
];

/// Ordered sequence of series colors.
///
/// Series pick their default color by index; the palette cycles when a
/// chart holds more series than configured colors. Mutable only through
/// configuration calls on the registry.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Palette {
    /// Colors in series order.
    pub colors: Vec<Color>,
}

impl Palette {
    /// Create an empty palette.
    #[must_use]
    pub const fn new() -> Self {
        Self { colors: Vec::new() }
    }

    /// The material design palette.
    #[must_use]
    pub fn material_design() -> Self {
        Self {
            colors: MATERIAL_DESIGN.to_vec(),
        }
    }

    /// Default color for the series at `index`, cycling through the
    /// configured colors. Falls back to neutral gray when the palette is
    /// empty.
    #[must_use]
    pub fn color_for(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return FALLBACK;
        }
        self.colors[index % self.colors.len()]
    }

    /// Number of configured colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no colors are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_palette_falls_back_to_gray() {
        let palette = Palette::new();
        assert_eq!(palette.color_for(0), FALLBACK);
        assert_eq!(palette.color_for(7), FALLBACK);
    }

    #[test]
    fn color_for_cycles_modulo_len() {
        let palette = Palette {
            colors: vec![
                Color::from_rgb(1, 0, 0),
                Color::from_rgb(0, 1, 0),
                Color::from_rgb(0, 0, 1),
            ],
        };
        assert_eq!(palette.color_for(0), palette.color_for(3));
        assert_eq!(palette.color_for(2), palette.color_for(5));
        assert_eq!(palette.color_for(1), Color::from_rgb(0, 1, 0));
    }

    #[test]
    fn material_palette_starts_with_blue() {
        let palette = Palette::material_design();
        assert_eq!(palette.color_for(0), Color::from_rgb(0x21, 0x96, 0xF3));
        assert_eq!(palette.len(), 15);
    }

    #[test]
    fn alpha_defaults_to_opaque_in_toml() {
        let color: Color = toml::from_str("r = 10\ng = 20\nb = 30").unwrap();
        assert_eq!(color, Color::from_rgb(10, 20, 30));
    }
}

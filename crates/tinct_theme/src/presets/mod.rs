//! Built-in brand presets
//!
//! A preset is a complete [`Palette`] reachable by a stable id, suitable for
//! settings screens and demos. Every preset keeps the neutral slots of the
//! built-in palette and replaces the brand slots, so text and backgrounds
//! stay legible no matter which brand is active.

use std::fmt;

use tinct_core::Color;

use crate::palette::{Palette, Scheme};

/// Catalog of built-in brand palettes
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum BrandPreset {
    /// House default: blue brand over system neutrals
    Tinct,
    /// Deep blue
    Ocean,
    /// Green
    Forest,
    /// Red
    Scarlet,
    /// Purple
    Grape,
}

impl BrandPreset {
    /// Stable identifier
    pub fn id(&self) -> &'static str {
        match self {
            BrandPreset::Tinct => "tinct",
            BrandPreset::Ocean => "ocean",
            BrandPreset::Forest => "forest",
            BrandPreset::Scarlet => "scarlet",
            BrandPreset::Grape => "grape",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            BrandPreset::Tinct => "Tinct",
            BrandPreset::Ocean => "Ocean",
            BrandPreset::Forest => "Forest",
            BrandPreset::Scarlet => "Scarlet",
            BrandPreset::Grape => "Grape",
        }
    }

    /// All presets, in catalog order
    pub fn all() -> &'static [BrandPreset] {
        &[
            BrandPreset::Tinct,
            BrandPreset::Ocean,
            BrandPreset::Forest,
            BrandPreset::Scarlet,
            BrandPreset::Grape,
        ]
    }

    /// Look up a preset by its stable id
    pub fn from_id(id: &str) -> Option<BrandPreset> {
        BrandPreset::all().iter().find(|p| p.id() == id).copied()
    }

    /// The preset's palette
    pub fn palette(&self) -> Palette {
        match self {
            BrandPreset::Tinct => Palette::default(),
            BrandPreset::Ocean => brand_palette(BrandColors {
                light_primary: Color::rgb(0.07, 0.46, 0.98),
                light_secondary: Color::rgb(0.33, 0.60, 1.00),
                dark_primary: Color::rgb(0.18, 0.56, 1.00),
                dark_secondary: Color::rgb(0.44, 0.70, 1.00),
            }),
            BrandPreset::Forest => brand_palette(BrandColors {
                light_primary: Color::rgb(0.09, 0.62, 0.33),
                light_secondary: Color::rgb(0.21, 0.72, 0.45),
                dark_primary: Color::rgb(0.17, 0.74, 0.42),
                dark_secondary: Color::rgb(0.30, 0.82, 0.55),
            }),
            BrandPreset::Scarlet => brand_palette(BrandColors {
                light_primary: Color::rgb(0.86, 0.16, 0.16),
                light_secondary: Color::rgb(0.96, 0.28, 0.28),
                dark_primary: Color::rgb(0.95, 0.27, 0.27),
                dark_secondary: Color::rgb(0.98, 0.44, 0.44),
            }),
            BrandPreset::Grape => brand_palette(BrandColors {
                light_primary: Color::rgb(0.42, 0.27, 0.85),
                light_secondary: Color::rgb(0.56, 0.41, 0.98),
                dark_primary: Color::rgb(0.56, 0.41, 0.98),
                dark_secondary: Color::rgb(0.67, 0.53, 1.00),
            }),
        }
    }
}

impl fmt::Display for BrandPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

struct BrandColors {
    light_primary: Color,
    light_secondary: Color,
    dark_primary: Color,
    dark_secondary: Color,
}

/// Brand slots over the default neutral slots. Dark keeps white on-primary
/// text; brand fills are tuned to carry it in both appearances.
fn brand_palette(brand: BrandColors) -> Palette {
    let base = Palette::default();
    Palette {
        light: Scheme {
            brand_primary: brand.light_primary,
            brand_secondary: brand.light_secondary,
            primary_fill: brand.light_primary,
            surface: Color::WHITE,
            ..base.light
        },
        dark: Scheme {
            brand_primary: brand.dark_primary,
            brand_secondary: brand.dark_secondary,
            primary_fill: brand.dark_primary,
            on_primary: Color::WHITE,
            ..base.dark
        },
    }
}

//! Brand color palettes
//!
//! A [`Palette`] is a light/dark [`Scheme`] pair for one brand. Schemes are
//! plain data with every slot filled by construction, so semantic resolution
//! is total and cannot fail. Partial schemes do not exist: re-branding
//! replaces the palette wholesale through the token store.

use tinct_core::Color;

use crate::platform::Appearance;

/// One complete set of semantic color slots for a single appearance
#[derive(Clone, Debug, PartialEq)]
pub struct Scheme {
    // Brand
    pub brand_primary: Color,
    pub brand_secondary: Color,

    // Backgrounds
    pub background_primary: Color,
    pub background_secondary: Color,
    pub surface: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_disabled: Color,

    // Chrome
    pub separator: Color,
    pub primary_fill: Color,
    pub on_primary: Color,

    // Status
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

/// A light/dark scheme pair for one brand
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub light: Scheme,
    pub dark: Scheme,
}

impl Palette {
    pub fn new(light: Scheme, dark: Scheme) -> Self {
        Self { light, dark }
    }

    /// Scheme for the given appearance
    pub fn scheme(&self, appearance: Appearance) -> &Scheme {
        match appearance {
            Appearance::Light => &self.light,
            Appearance::Dark => &self.dark,
        }
    }
}

impl Default for Palette {
    /// Built-in blue brand. Neutral slots follow the platform system palette
    /// in its light/dark sRGB forms.
    fn default() -> Self {
        Self {
            light: Scheme {
                brand_primary: Color::rgb(0.10, 0.45, 0.95),
                brand_secondary: Color::rgb(0.12, 0.75, 0.65),
                background_primary: Color::WHITE,
                background_secondary: Color::from_hex(0xF2F2F7),
                surface: Color::from_hex(0xF2F2F7),
                text_primary: Color::BLACK,
                text_secondary: Color::from_hex(0x3C3C43).with_alpha(0.6),
                text_disabled: Color::from_hex(0x3C3C43).with_alpha(0.3),
                separator: Color::from_hex(0x3C3C43).with_alpha(0.29),
                primary_fill: Color::rgb(0.10, 0.45, 0.95),
                on_primary: Color::WHITE,
                success: Color::from_hex(0x34C759),
                warning: Color::from_hex(0xFF9500),
                error: Color::from_hex(0xFF3B30),
            },
            dark: Scheme {
                brand_primary: Color::rgb(0.25, 0.60, 1.00),
                brand_secondary: Color::rgb(0.16, 0.85, 0.75),
                background_primary: Color::BLACK,
                background_secondary: Color::from_hex(0x1C1C1E),
                surface: Color::from_hex(0x2C2C2E),
                text_primary: Color::WHITE,
                text_secondary: Color::from_hex(0xEBEBF5).with_alpha(0.6),
                text_disabled: Color::from_hex(0xEBEBF5).with_alpha(0.3),
                separator: Color::from_hex(0x545458).with_alpha(0.65),
                primary_fill: Color::rgb(0.25, 0.60, 1.00),
                on_primary: Color::BLACK,
                success: Color::from_hex(0x30D158),
                warning: Color::from_hex(0xFF9F0A),
                error: Color::from_hex(0xFF453A),
            },
        }
    }
}

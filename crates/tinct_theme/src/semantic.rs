//! Semantic color resolution
//!
//! Components name colors by role ("text primary", "separator") instead of by
//! value. A role resolves against the active palette and the live appearance
//! at read time; nothing here is cached, so resolved colors always reflect
//! the current palette and the current OS appearance.

use tinct_core::Color;

use crate::palette::{Palette, Scheme};
use crate::platform::Appearance;

/// Role-based color keys for dynamic slot access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SemanticColor {
    BrandPrimary,
    BrandSecondary,
    BackgroundPrimary,
    BackgroundSecondary,
    Surface,
    TextPrimary,
    TextSecondary,
    TextDisabled,
    Separator,
    PrimaryFill,
    OnPrimary,
    Success,
    Warning,
    Error,
}

impl SemanticColor {
    /// Every semantic role, for iteration
    pub const ALL: [SemanticColor; 14] = [
        SemanticColor::BrandPrimary,
        SemanticColor::BrandSecondary,
        SemanticColor::BackgroundPrimary,
        SemanticColor::BackgroundSecondary,
        SemanticColor::Surface,
        SemanticColor::TextPrimary,
        SemanticColor::TextSecondary,
        SemanticColor::TextDisabled,
        SemanticColor::Separator,
        SemanticColor::PrimaryFill,
        SemanticColor::OnPrimary,
        SemanticColor::Success,
        SemanticColor::Warning,
        SemanticColor::Error,
    ];

    /// Resolve this role against a palette for the given appearance
    pub fn resolve(self, palette: &Palette, appearance: Appearance) -> Color {
        palette.scheme(appearance).get(self)
    }
}

impl Scheme {
    /// Get a slot value by semantic key
    pub fn get(&self, slot: SemanticColor) -> Color {
        match slot {
            SemanticColor::BrandPrimary => self.brand_primary,
            SemanticColor::BrandSecondary => self.brand_secondary,
            SemanticColor::BackgroundPrimary => self.background_primary,
            SemanticColor::BackgroundSecondary => self.background_secondary,
            SemanticColor::Surface => self.surface,
            SemanticColor::TextPrimary => self.text_primary,
            SemanticColor::TextSecondary => self.text_secondary,
            SemanticColor::TextDisabled => self.text_disabled,
            SemanticColor::Separator => self.separator,
            SemanticColor::PrimaryFill => self.primary_fill,
            SemanticColor::OnPrimary => self.on_primary,
            SemanticColor::Success => self.success,
            SemanticColor::Warning => self.warning,
            SemanticColor::Error => self.error,
        }
    }
}

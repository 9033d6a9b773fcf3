//! Theme identity
//!
//! A [`Theme`] is a named snapshot of a [`ThemeStyle`] plus the palette that
//! was active when it was selected. The style decides the presentation mode
//! pushed onto host windows; the palette decides the brand colors.

use std::fmt;

use crate::palette::Palette;
use crate::platform::AppearanceOverride;

/// User-selectable appearance style
#[derive(Clone, Debug, PartialEq)]
pub enum ThemeStyle {
    /// Follow the OS appearance
    System,
    /// Force light presentation
    Light,
    /// Force dark presentation
    Dark,
    /// Bespoke brand palette; presentation still follows the OS
    Custom(Palette),
}

impl ThemeStyle {
    /// Stable tag used for persistence
    pub fn id(&self) -> &'static str {
        match self {
            ThemeStyle::System => "system",
            ThemeStyle::Light => "light",
            ThemeStyle::Dark => "dark",
            ThemeStyle::Custom(_) => "custom",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeStyle::System => "System",
            ThemeStyle::Light => "Light",
            ThemeStyle::Dark => "Dark",
            ThemeStyle::Custom(_) => "Custom Brand",
        }
    }

    /// Window presentation this style asks the host for
    pub fn appearance_override(&self) -> AppearanceOverride {
        match self {
            ThemeStyle::System | ThemeStyle::Custom(_) => AppearanceOverride::Auto,
            ThemeStyle::Light => AppearanceOverride::Light,
            ThemeStyle::Dark => AppearanceOverride::Dark,
        }
    }
}

impl fmt::Display for ThemeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A selected theme: style plus the palette captured at selection time
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub style: ThemeStyle,
    pub palette: Palette,
}

impl Theme {
    pub fn new(style: ThemeStyle, palette: Palette) -> Self {
        Self {
            name: style.display_name(),
            style,
            palette,
        }
    }
}

impl Default for Theme {
    /// System style with the built-in brand
    fn default() -> Self {
        Theme::new(ThemeStyle::System, Palette::default())
    }
}

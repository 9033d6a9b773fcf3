//! Theme and design-token runtime for Tinct
//!
//! Everything visual flows from two sources: a brand [`Palette`] (a complete
//! light/dark [`Scheme`] pair) and the non-color token families (spacing,
//! radii, elevation, typography, motion) held in the [`TokenStore`].
//! Components never hard-code values; they name a [`SemanticColor`] role or
//! a token and resolve it at read time against the live OS appearance.
//!
//! The [`ThemeManager`] orchestrates switches between [`ThemeStyle`]s,
//! persists the selection, and drives the declarative binding layer: an
//! attribute bound once via [`ThemeManager::bind`] is rewritten on every
//! subsequent theme change for as long as its owner lives.
//!
//! # Quick start
//!
//! ```
//! use std::sync::{Arc, Mutex};
//!
//! use tinct_core::Color;
//! use tinct_theme::{SemanticColor, ThemeManager, ThemeStyle};
//!
//! struct Badge {
//!     fill: Mutex<Color>,
//! }
//!
//! let manager = ThemeManager::new();
//! manager.restore_if_needed();
//!
//! let badge = Arc::new(Badge {
//!     fill: Mutex::new(Color::BLACK),
//! });
//!
//! // Runs once now, and again after every theme change.
//! manager.bind(
//!     &badge,
//!     |theme| theme.color(SemanticColor::PrimaryFill),
//!     |badge, color| *badge.fill.lock().unwrap() = color,
//! );
//!
//! manager.switch_to(ThemeStyle::Dark);
//! ```

pub mod binder;
pub mod manager;
pub mod palette;
pub mod persist;
pub mod platform;
pub mod presets;
pub mod semantic;
pub mod store;
pub mod theme;
pub mod tokens;

pub use binder::{BindingId, ComponentStyle, StyleRegistry, ThemeValue};
pub use manager::{ThemeManager, ThemeReader};
pub use palette::{Palette, Scheme};
pub use persist::{FileSelectionStore, MemorySelectionStore, PersistError, SelectionStore};
pub use platform::{Appearance, AppearanceOverride, NullHost, ThemeHost};
pub use presets::BrandPreset;
pub use semantic::SemanticColor;
pub use store::{TokenStore, TokenUpdate};
pub use theme::{Theme, ThemeStyle};
pub use tokens::{
    AnimationTokens, DurationToken, EasingToken, ElevationSpec, ElevationToken, ElevationTokens,
    FontChoice, FontFamily, FontSpec, FontWeight, RadiusToken, RadiusTokens, SpacingToken,
    SpacingTokens, TypeStyle,
};

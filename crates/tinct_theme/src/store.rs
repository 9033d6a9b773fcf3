//! Central token store
//!
//! One process-wide bag of configured token values: the active palette plus
//! every non-color family. Configuration is a partial update: only the
//! families present in the [`TokenUpdate`] are replaced, the rest keep their
//! current values.
//!
//! Configuring the store is deliberately silent. It mutates state and emits
//! no change notification; announcing changes is the
//! [`ThemeManager`](crate::ThemeManager)'s job. Callers that mutate the store
//! directly own the follow-up
//! [`renotify`](crate::ThemeManager::renotify) call.

use std::sync::RwLock;

use crate::palette::Palette;
use crate::tokens::{
    AnimationTokens, ElevationTokens, FontFamily, RadiusToken, RadiusTokens, SpacingToken,
    SpacingTokens,
};

/// Partial token reconfiguration. Unset families are left untouched.
#[derive(Clone, Debug, Default)]
pub struct TokenUpdate {
    palette: Option<Palette>,
    font_family: Option<FontFamily>,
    spacing: Option<SpacingTokens>,
    radii: Option<RadiusTokens>,
    elevation: Option<ElevationTokens>,
    animations: Option<AnimationTokens>,
}

impl TokenUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    pub fn font_family(mut self, font_family: FontFamily) -> Self {
        self.font_family = Some(font_family);
        self
    }

    pub fn spacing(mut self, spacing: SpacingTokens) -> Self {
        self.spacing = Some(spacing);
        self
    }

    pub fn radii(mut self, radii: RadiusTokens) -> Self {
        self.radii = Some(radii);
        self
    }

    pub fn elevation(mut self, elevation: ElevationTokens) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn animations(mut self, animations: AnimationTokens) -> Self {
        self.animations = Some(animations);
        self
    }
}

/// Live token values for the process
pub struct TokenStore {
    palette: RwLock<Palette>,
    font_family: RwLock<FontFamily>,
    spacing: RwLock<SpacingTokens>,
    radii: RwLock<RadiusTokens>,
    elevation: RwLock<ElevationTokens>,
    animations: RwLock<AnimationTokens>,
}

impl TokenStore {
    /// Store with the built-in defaults for every family
    pub fn new() -> Self {
        Self {
            palette: RwLock::new(Palette::default()),
            font_family: RwLock::new(FontFamily::system()),
            spacing: RwLock::new(SpacingTokens::default()),
            radii: RwLock::new(RadiusTokens::default()),
            elevation: RwLock::new(ElevationTokens::default()),
            animations: RwLock::new(AnimationTokens::default()),
        }
    }

    /// Apply a partial update. Silent: no notification is emitted.
    pub fn configure(&self, update: TokenUpdate) {
        if let Some(palette) = update.palette {
            *self.palette.write().expect("palette lock poisoned") = palette;
        }
        if let Some(font_family) = update.font_family {
            *self.font_family.write().expect("font family lock poisoned") = font_family;
        }
        if let Some(spacing) = update.spacing {
            *self.spacing.write().expect("spacing lock poisoned") = spacing;
        }
        if let Some(radii) = update.radii {
            *self.radii.write().expect("radii lock poisoned") = radii;
        }
        if let Some(elevation) = update.elevation {
            *self.elevation.write().expect("elevation lock poisoned") = elevation;
        }
        if let Some(animations) = update.animations {
            *self.animations.write().expect("animations lock poisoned") = animations;
        }
    }

    pub fn palette(&self) -> Palette {
        self.palette.read().expect("palette lock poisoned").clone()
    }

    pub fn font_family(&self) -> FontFamily {
        self.font_family
            .read()
            .expect("font family lock poisoned")
            .clone()
    }

    pub fn spacing(&self) -> SpacingTokens {
        *self.spacing.read().expect("spacing lock poisoned")
    }

    /// Single spacing value by token
    pub fn spacing_value(&self, token: SpacingToken) -> f32 {
        self.spacing().get(token)
    }

    pub fn radii(&self) -> RadiusTokens {
        *self.radii.read().expect("radii lock poisoned")
    }

    /// Single radius value by token
    pub fn radius(&self, token: RadiusToken) -> f32 {
        self.radii().get(token)
    }

    pub fn elevation(&self) -> ElevationTokens {
        *self.elevation.read().expect("elevation lock poisoned")
    }

    pub fn animations(&self) -> AnimationTokens {
        *self.animations.read().expect("animations lock poisoned")
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::FontChoice;

    #[test]
    fn test_fresh_store_serves_defaults() {
        let store = TokenStore::new();
        assert_eq!(store.palette(), Palette::default());
        assert_eq!(store.spacing(), SpacingTokens::default());
        assert_eq!(store.radius(RadiusToken::M), 10.0);
    }

    #[test]
    fn test_partial_update_leaves_other_families() {
        let store = TokenStore::new();
        let tighter = SpacingTokens {
            m: 12.0,
            ..SpacingTokens::default()
        };
        store.configure(TokenUpdate::new().spacing(tighter));

        assert_eq!(store.spacing_value(SpacingToken::M), 12.0);
        assert_eq!(store.palette(), Palette::default());
        assert_eq!(store.radii(), RadiusTokens::default());
    }

    #[test]
    fn test_update_replaces_multiple_families() {
        let store = TokenStore::new();
        let family = FontFamily {
            sans: FontChoice::Custom("Inter".to_string()),
            mono: FontChoice::System,
        };
        let rounder = RadiusTokens {
            m: 12.0,
            ..RadiusTokens::default()
        };
        store.configure(TokenUpdate::new().font_family(family.clone()).radii(rounder));

        assert_eq!(store.font_family(), family);
        assert_eq!(store.radius(RadiusToken::M), 12.0);
        assert_eq!(store.animations(), AnimationTokens::default());
    }
}

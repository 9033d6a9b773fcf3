//! Elevation (shadow) tokens

use tinct_core::Color;

/// Elevation level identifiers, flat to most raised
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ElevationToken {
    Level0,
    Level1,
    Level2,
    Level3,
    Level4,
}

/// Shadow parameters for one elevation level
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationSpec {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub opacity: f32,
    pub color: Color,
}

impl ElevationSpec {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, opacity: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            opacity,
            color,
        }
    }

    /// No shadow at all
    pub const fn none() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0, Color::TRANSPARENT)
    }
}

/// Five-step elevation ramp
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElevationTokens {
    pub level0: ElevationSpec,
    pub level1: ElevationSpec,
    pub level2: ElevationSpec,
    pub level3: ElevationSpec,
    pub level4: ElevationSpec,
}

impl ElevationTokens {
    /// Get a shadow spec by token
    pub fn get(&self, token: ElevationToken) -> ElevationSpec {
        match token {
            ElevationToken::Level0 => self.level0,
            ElevationToken::Level1 => self.level1,
            ElevationToken::Level2 => self.level2,
            ElevationToken::Level3 => self.level3,
            ElevationToken::Level4 => self.level4,
        }
    }

    /// Get a shadow spec by numeric level. Out-of-range levels fall back to
    /// level 0 (flat), so callers can pass raw integers safely.
    pub fn level(&self, level: u8) -> ElevationSpec {
        match level {
            1 => self.level1,
            2 => self.level2,
            3 => self.level3,
            4 => self.level4,
            _ => self.level0,
        }
    }
}

impl Default for ElevationTokens {
    fn default() -> Self {
        Self {
            level0: ElevationSpec::none(),
            level1: ElevationSpec::new(0.0, 1.0, 3.0, 0.10, Color::BLACK),
            level2: ElevationSpec::new(0.0, 3.0, 6.0, 0.12, Color::BLACK),
            level3: ElevationSpec::new(0.0, 8.0, 16.0, 0.18, Color::BLACK),
            level4: ElevationSpec::new(0.0, 12.0, 24.0, 0.22, Color::BLACK),
        }
    }
}

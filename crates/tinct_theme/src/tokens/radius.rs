//! Corner radius tokens

/// Radius token identifiers
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    S,
    M,
    L,
    Xl,
}

/// Corner radius scale, in points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadiusTokens {
    pub s: f32,
    pub m: f32,
    pub l: f32,
    pub xl: f32,
}

impl RadiusTokens {
    /// Get a radius value by token
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::S => self.s,
            RadiusToken::M => self.m,
            RadiusToken::L => self.l,
            RadiusToken::Xl => self.xl,
        }
    }

    /// Capsule radius for a control of the given height. Never negative.
    pub fn pill(&self, height: f32) -> f32 {
        (height / 2.0).max(0.0)
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            s: 6.0,
            m: 10.0,
            l: 14.0,
            xl: 20.0,
        }
    }
}

//! Spacing scale tokens

/// Spacing token identifiers
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xxs,
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

/// Layout spacing scale, in points
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpacingTokens {
    pub xxs: f32,
    pub xs: f32,
    pub s: f32,
    pub m: f32,
    pub l: f32,
    pub xl: f32,
    pub xxl: f32,
}

impl SpacingTokens {
    /// Get a spacing value by token
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xxs => self.xxs,
            SpacingToken::Xs => self.xs,
            SpacingToken::S => self.s,
            SpacingToken::M => self.m,
            SpacingToken::L => self.l,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xxs: 4.0,
            xs: 8.0,
            s: 12.0,
            m: 16.0,
            l: 24.0,
            xl: 32.0,
            xxl: 40.0,
        }
    }
}

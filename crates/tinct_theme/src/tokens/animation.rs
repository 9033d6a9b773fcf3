//! Motion tokens

use std::time::Duration;

use tinct_core::Easing;

/// Duration token identifiers
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum DurationToken {
    UltraFast,
    Fast,
    Normal,
    Slow,
}

/// Easing token identifiers
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum EasingToken {
    /// House default for most transitions
    Default,
    EaseIn,
    EaseOut,
    Linear,
}

/// Standard durations and easing curves for themed transitions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationTokens {
    pub ultra_fast: Duration,
    pub fast: Duration,
    pub normal: Duration,
    pub slow: Duration,
    pub easing_default: Easing,
    pub easing_in: Easing,
    pub easing_out: Easing,
    pub easing_linear: Easing,
}

impl AnimationTokens {
    /// Get a duration by token
    pub fn duration(&self, token: DurationToken) -> Duration {
        match token {
            DurationToken::UltraFast => self.ultra_fast,
            DurationToken::Fast => self.fast,
            DurationToken::Normal => self.normal,
            DurationToken::Slow => self.slow,
        }
    }

    /// Get an easing curve by token
    pub fn easing(&self, token: EasingToken) -> Easing {
        match token {
            EasingToken::Default => self.easing_default,
            EasingToken::EaseIn => self.easing_in,
            EasingToken::EaseOut => self.easing_out,
            EasingToken::Linear => self.easing_linear,
        }
    }
}

impl Default for AnimationTokens {
    fn default() -> Self {
        Self {
            ultra_fast: Duration::from_millis(120),
            fast: Duration::from_millis(200),
            normal: Duration::from_millis(300),
            slow: Duration::from_millis(500),
            easing_default: Easing::EaseInOut,
            easing_in: Easing::EaseIn,
            easing_out: Easing::EaseOut,
            easing_linear: Easing::Linear,
        }
    }
}

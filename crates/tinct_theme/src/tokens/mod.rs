//! Design token families
//!
//! Non-color tokens live here, one file per family. Each family is a plain
//! struct of values plus a token enum for dynamic lookup; the configured
//! values are held by the [`TokenStore`](crate::store::TokenStore).

mod animation;
mod elevation;
mod radius;
mod spacing;
mod typography;

pub use animation::{AnimationTokens, DurationToken, EasingToken};
pub use elevation::{ElevationSpec, ElevationToken, ElevationTokens};
pub use radius::{RadiusToken, RadiusTokens};
pub use spacing::{SpacingToken, SpacingTokens};
pub use typography::{FontChoice, FontFamily, FontSpec, FontWeight, TypeStyle};

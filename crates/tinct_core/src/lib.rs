//! Tinct Core Primitives
//!
//! This crate provides the foundational value types shared across the Tinct
//! UI kit:
//!
//! - **Colors**: Linear-space RGBA with hex constructors and interpolation
//! - **Easing**: Timing-curve descriptions (Core Animation style beziers)
//! - **Main-turn dispatch**: A deferred work queue drained once per
//!   host main-loop turn
//!
//! # Example
//!
//! ```rust
//! use tinct_core::Color;
//!
//! let brand = Color::from_hex(0x1A73E8);
//! let faded = brand.with_alpha(0.4);
//! let mid = Color::lerp(&Color::WHITE, &brand, 0.5);
//! assert!(mid.r < 1.0 && mid.a == 1.0);
//! let _ = faded;
//! ```

pub mod color;
pub mod easing;
pub mod queue;

pub use color::Color;
pub use easing::Easing;
pub use queue::MainQueue;

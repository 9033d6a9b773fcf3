//! Host platform seam
//!
//! The theme core never talks to a windowing system directly. Hosts implement
//! [`ThemeHost`] to answer two questions: what is the OS appearance right now,
//! and how do we force light/dark presentation onto live windows. Appearance
//! is queried at resolution time and never cached, so a system-level dark mode
//! flip is visible to resolvers even when the theme store has not changed.

/// Current OS appearance mode
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum Appearance {
    Light,
    Dark,
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

/// Forced presentation target for host windows
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AppearanceOverride {
    /// Follow the OS appearance (clears any forced presentation)
    Auto,
    Light,
    Dark,
}

/// Collaborator interface to the host windowing layer.
///
/// `apply_override` is best-effort: hosts with no live windows simply ignore
/// the call. When a forced presentation lands (or the OS appearance changes),
/// the host is expected to call
/// [`ThemeManager::appearance_changed`](crate::ThemeManager::appearance_changed)
/// so bindings re-resolve against the new appearance.
pub trait ThemeHost: Send + Sync {
    /// Live OS appearance, queried at resolution time
    fn appearance(&self) -> Appearance;

    /// Force light/dark/auto presentation on all live top-level windows
    fn apply_override(&self, target: AppearanceOverride);
}

/// Host stub for headless use and tests.
///
/// Always reports light appearance and discards overrides, so forced styles
/// have no visible effect until a real host is installed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullHost;

impl ThemeHost for NullHost {
    fn appearance(&self) -> Appearance {
        Appearance::Light
    }

    fn apply_override(&self, _target: AppearanceOverride) {}
}

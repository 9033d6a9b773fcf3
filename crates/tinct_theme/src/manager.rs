//! Theme orchestration
//!
//! [`ThemeManager`] owns the single source of truth for the active theme and
//! runs every switch end to end: resolve the target palette, swap the current
//! [`Theme`], push the palette into the [`TokenStore`], schedule the host
//! window restyle on the main queue, persist the selection, and re-resolve
//! all bindings.
//!
//! The manager is built for injection: construct one per app (or per test)
//! and pass it to whoever needs it. A process-wide instance is opt-in via
//! [`ThemeManager::install`] for hosts that want ambient access.
//!
//! Consumers never receive a theme payload to hold on to. Change broadcasts
//! re-run each binding's resolve closure against a fresh [`ThemeReader`], so
//! every resolved value reflects the palette and OS appearance at that
//! instant.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock, RwLock};

use tinct_core::{Color, MainQueue};

use crate::binder::{
    BindingFn, BindingId, BindingOutcome, BindingRegistry, ComponentStyle, StyleRegistry,
    ThemeValue,
};
use crate::palette::Palette;
use crate::persist::SelectionStore;
use crate::platform::{Appearance, NullHost, ThemeHost};
use crate::semantic::SemanticColor;
use crate::store::{TokenStore, TokenUpdate};
use crate::theme::{Theme, ThemeStyle};
use crate::tokens::{
    AnimationTokens, ElevationTokens, FontFamily, FontSpec, RadiusTokens, SpacingTokens, TypeStyle,
};

static GLOBAL: OnceLock<ThemeManager> = OnceLock::new();

/// Owner of the active theme, the token store, and all bindings
pub struct ThemeManager {
    current: RwLock<Theme>,
    tokens: TokenStore,
    bindings: BindingRegistry,
    styles: StyleRegistry,
    host: RwLock<Arc<dyn ThemeHost>>,
    main_queue: Arc<MainQueue>,
    selection_store: RwLock<Option<Arc<dyn SelectionStore>>>,
    persists_selection: AtomicBool,
}

impl ThemeManager {
    // ========== Construction ==========

    /// Manager with the default theme and a [`NullHost`]
    pub fn new() -> Self {
        Self::with_host(Arc::new(NullHost))
    }

    /// Manager wired to a real host platform
    pub fn with_host(host: Arc<dyn ThemeHost>) -> Self {
        Self {
            current: RwLock::new(Theme::default()),
            tokens: TokenStore::new(),
            bindings: BindingRegistry::new(),
            styles: StyleRegistry::new(),
            host: RwLock::new(host),
            main_queue: Arc::new(MainQueue::new()),
            selection_store: RwLock::new(None),
            persists_selection: AtomicBool::new(true),
        }
    }

    /// Install a process-wide instance. The first call wins; later calls
    /// keep the original and drop their argument.
    pub fn install(manager: ThemeManager) -> &'static ThemeManager {
        if GLOBAL.set(manager).is_err() {
            tracing::debug!("ThemeManager::install - already installed, keeping first instance");
        }
        ThemeManager::global()
    }

    /// The installed process-wide instance.
    ///
    /// # Panics
    ///
    /// Panics if [`ThemeManager::install`] has not been called.
    pub fn global() -> &'static ThemeManager {
        GLOBAL
            .get()
            .expect("ThemeManager not installed. Call ThemeManager::install() at startup.")
    }

    /// The installed instance, or `None` before installation
    pub fn try_global() -> Option<&'static ThemeManager> {
        GLOBAL.get()
    }

    // ========== Collaborators ==========

    /// Replace the host platform. Bindings are not re-resolved; call
    /// [`renotify`](Self::renotify) if the new host reports a different
    /// appearance.
    pub fn set_host(&self, host: Arc<dyn ThemeHost>) {
        *self.host.write().expect("host lock poisoned") = host;
    }

    /// Install backing storage for the persisted selection
    pub fn set_selection_store(&self, store: Arc<dyn SelectionStore>) {
        *self
            .selection_store
            .write()
            .expect("selection store lock poisoned") = Some(store);
    }

    /// Toggle selection persistence (on by default)
    pub fn set_persists_selection(&self, persists: bool) {
        self.persists_selection.store(persists, Ordering::Relaxed);
    }

    pub fn persists_selection(&self) -> bool {
        self.persists_selection.load(Ordering::Relaxed)
    }

    // ========== Accessors ==========

    /// Snapshot of the current theme
    pub fn current(&self) -> Theme {
        self.current.read().expect("theme lock poisoned").clone()
    }

    /// Style of the current theme
    pub fn current_style(&self) -> ThemeStyle {
        self.current
            .read()
            .expect("theme lock poisoned")
            .style
            .clone()
    }

    /// Live OS appearance as reported by the host
    pub fn appearance(&self) -> Appearance {
        self.host.read().expect("host lock poisoned").appearance()
    }

    /// The token store. Public for advanced partial updates; mutations made
    /// here are silent, see [`configure_tokens`](Self::configure_tokens).
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Queue the host drains on its main/UI turn
    pub fn main_queue(&self) -> Arc<MainQueue> {
        Arc::clone(&self.main_queue)
    }

    /// Read-only view for resolvers
    pub fn reader(&self) -> ThemeReader<'_> {
        ThemeReader { manager: self }
    }

    // ========== Switching ==========

    /// Switch styles keeping the current palette, restyling host windows.
    /// See [`switch_to_with`](Self::switch_to_with).
    pub fn switch_to(&self, style: ThemeStyle) {
        self.switch_to_with(style, None, true);
    }

    /// Switch the active theme.
    ///
    /// The target palette is taken from the style itself for
    /// [`ThemeStyle::Custom`], from `palette` when given, and otherwise kept
    /// from the current theme, so a plain style change never resets brand
    /// colors. The swap, token-store update, and binding broadcast are
    /// synchronous; only the host window restyle is deferred to the main
    /// queue. The selection tag is persisted best-effort when persistence is
    /// enabled and a store is installed.
    pub fn switch_to_with(
        &self,
        style: ThemeStyle,
        palette: Option<Palette>,
        apply_to_host_windows: bool,
    ) {
        let target = {
            let mut current = self.current.write().expect("theme lock poisoned");
            let target = match &style {
                ThemeStyle::Custom(custom) => custom.clone(),
                _ => palette.unwrap_or_else(|| current.palette.clone()),
            };
            let theme = Theme::new(style.clone(), target.clone());
            tracing::debug!(
                "ThemeManager::switch_to - switching from {} to {}",
                current.name,
                theme.name
            );
            *current = theme;
            target
        };

        self.tokens.configure(TokenUpdate::new().palette(target));

        if apply_to_host_windows {
            self.enqueue_restyle(&style);
        }

        if self.persists_selection() {
            self.persist_selection(&style);
        }

        self.broadcast();
    }

    /// Re-apply a previously persisted selection, typically once at startup.
    ///
    /// Replays a switch minus persistence and broadcast. A persisted
    /// `"custom"` tag carries no palette data and leaves the current theme
    /// untouched; unknown tags are logged and ignored.
    pub fn restore_if_needed(&self) {
        if !self.persists_selection() {
            return;
        }
        let loaded = {
            let store = self
                .selection_store
                .read()
                .expect("selection store lock poisoned");
            match store.as_ref() {
                Some(store) => store.load(),
                None => return,
            }
        };
        let tag = match loaded {
            Ok(Some(tag)) => tag,
            Ok(None) => return,
            Err(err) => {
                tracing::warn!(
                    "ThemeManager::restore_if_needed - failed to read selection: {err}"
                );
                return;
            }
        };
        match tag.as_str() {
            "system" => self.restore_style(ThemeStyle::System),
            "light" => self.restore_style(ThemeStyle::Light),
            "dark" => self.restore_style(ThemeStyle::Dark),
            "custom" => {
                tracing::debug!(
                    "ThemeManager::restore_if_needed - custom selection has no palette data, keeping current theme"
                );
            }
            other => {
                tracing::warn!(
                    "ThemeManager::restore_if_needed - unknown selection tag {other:?}"
                );
            }
        }
    }

    // ========== Token configuration ==========

    /// Apply a partial token update with no notification. Bindings keep
    /// their last-resolved values until the next broadcast; pair with
    /// [`renotify`](Self::renotify) to make the change visible.
    pub fn configure_tokens(&self, update: TokenUpdate) {
        self.tokens.configure(update);
    }

    /// Apply a partial token update and re-resolve all bindings
    pub fn configure_tokens_and_notify(&self, update: TokenUpdate) {
        self.tokens.configure(update);
        self.broadcast();
    }

    // ========== Notification ==========

    /// Re-resolve every binding against the current state
    pub fn renotify(&self) {
        tracing::debug!("ThemeManager::renotify - re-resolving all bindings");
        self.broadcast();
    }

    /// Host callback for OS appearance changes (dark mode flips, forced
    /// overrides landing). Re-resolves every binding.
    pub fn appearance_changed(&self) {
        tracing::debug!("ThemeManager::appearance_changed - host appearance changed");
        self.broadcast();
    }

    // ========== Bindings ==========

    /// Tie one attribute of `owner` to a theme-derived value.
    ///
    /// `resolve` reads the value from a [`ThemeReader`], `write` stores it
    /// into the owner. The pair runs once immediately and again on every
    /// broadcast until `owner` is dropped; the owner is held weakly, so the
    /// binding never extends its lifetime.
    pub fn bind<O, T, R, W>(&self, owner: &Arc<O>, resolve: R, write: W) -> BindingId
    where
        O: Send + Sync + 'static,
        T: 'static,
        R: Fn(ThemeReader<'_>) -> T + Send + Sync + 'static,
        W: Fn(&O, T) + Send + Sync + 'static,
    {
        let weak = Arc::downgrade(owner);
        let binding: Arc<BindingFn> = Arc::new(move |theme| match weak.upgrade() {
            Some(owner) => {
                write(&owner, resolve(theme));
                BindingOutcome::Applied
            }
            None => BindingOutcome::OwnerGone,
        });
        self.attach(binding)
    }

    /// [`bind`](Self::bind) with a prebuilt [`ThemeValue`] as the resolver
    pub fn bind_value<O, T, W>(&self, owner: &Arc<O>, value: &ThemeValue<T>, write: W) -> BindingId
    where
        O: Send + Sync + 'static,
        T: 'static,
        W: Fn(&O, T) + Send + Sync + 'static,
    {
        let value = value.clone();
        self.bind(owner, move |theme| value.resolve(theme), write)
    }

    /// Remove a binding explicitly. Returns `false` if it was already gone.
    pub fn unbind(&self, id: BindingId) -> bool {
        self.bindings.remove(id)
    }

    /// Number of registered bindings, dead ones included until the next sweep
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }

    /// Apply a component style to one instance, creating a binding that
    /// restyles it on every broadcast
    pub fn apply_style<C>(&self, component: &Arc<C>, style: &ComponentStyle<C>) -> BindingId
    where
        C: Send + Sync + 'static,
    {
        let style = style.clone();
        let weak = Arc::downgrade(component);
        let binding: Arc<BindingFn> = Arc::new(move |theme| match weak.upgrade() {
            Some(component) => {
                style.apply(&component, theme);
                BindingOutcome::Applied
            }
            None => BindingOutcome::OwnerGone,
        });
        self.attach(binding)
    }

    /// Register a named component style for later application
    pub fn register_style<C: 'static>(&self, name: impl Into<String>, style: ComponentStyle<C>) {
        self.styles.register(name, style);
    }

    /// Look up a registered component style
    pub fn style<C: 'static>(&self, name: &str) -> Option<ComponentStyle<C>> {
        self.styles.get(name)
    }

    /// Apply a registered style by name; `None` if no style with that name
    /// exists for `C`
    pub fn apply_named_style<C>(&self, component: &Arc<C>, name: &str) -> Option<BindingId>
    where
        C: Send + Sync + 'static,
    {
        let style = self.styles.get::<C>(name)?;
        Some(self.apply_style(component, &style))
    }

    // ========== Internals ==========

    fn attach(&self, binding: Arc<BindingFn>) -> BindingId {
        let id = self.bindings.insert(Arc::clone(&binding));
        // Initial paint
        (*binding)(self.reader());
        id
    }

    fn enqueue_restyle(&self, style: &ThemeStyle) {
        let host = Arc::clone(&*self.host.read().expect("host lock poisoned"));
        let target = style.appearance_override();
        self.main_queue.dispatch(move || host.apply_override(target));
    }

    fn persist_selection(&self, style: &ThemeStyle) {
        let store = self
            .selection_store
            .read()
            .expect("selection store lock poisoned");
        if let Some(store) = store.as_ref() {
            if let Err(err) = store.save(style.id()) {
                tracing::warn!("ThemeManager::switch_to - failed to persist selection: {err}");
            }
        }
    }

    fn broadcast(&self) {
        self.bindings.broadcast(self.reader());
    }

    fn restore_style(&self, style: ThemeStyle) {
        let palette = {
            let mut current = self.current.write().expect("theme lock poisoned");
            let palette = current.palette.clone();
            *current = Theme::new(style.clone(), palette.clone());
            palette
        };
        self.tokens.configure(TokenUpdate::new().palette(palette));
        self.enqueue_restyle(&style);
        tracing::debug!(
            "ThemeManager::restore_if_needed - restored {} selection",
            style.id()
        );
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ThemeManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeManager")
            .field("current", &self.current.read().expect("theme lock poisoned").name)
            .field("bindings", &self.bindings.len())
            .finish_non_exhaustive()
    }
}

/// Read-only view of the active theme and tokens.
///
/// Handed to every resolve closure. Values are read fresh on each call from
/// the token store and the live host appearance; nothing is cached, so a
/// reader is always current no matter when the closure runs.
#[derive(Clone, Copy)]
pub struct ThemeReader<'a> {
    manager: &'a ThemeManager,
}

impl ThemeReader<'_> {
    /// Snapshot of the current theme
    pub fn theme(&self) -> Theme {
        self.manager.current()
    }

    /// Current theme style
    pub fn style(&self) -> ThemeStyle {
        self.manager.current_style()
    }

    /// Active palette from the token store
    pub fn palette(&self) -> Palette {
        self.manager.tokens.palette()
    }

    /// Live OS appearance
    pub fn appearance(&self) -> Appearance {
        self.manager.appearance()
    }

    pub fn is_dark(&self) -> bool {
        self.appearance().is_dark()
    }

    /// Resolve a semantic color role against the active palette and live
    /// appearance
    pub fn color(&self, slot: SemanticColor) -> Color {
        slot.resolve(&self.palette(), self.appearance())
    }

    pub fn font_family(&self) -> FontFamily {
        self.manager.tokens.font_family()
    }

    /// Materialize a type role against the configured families
    pub fn font(&self, style: TypeStyle) -> FontSpec {
        style.spec(&self.font_family())
    }

    pub fn spacing(&self) -> SpacingTokens {
        self.manager.tokens.spacing()
    }

    pub fn radii(&self) -> RadiusTokens {
        self.manager.tokens.radii()
    }

    pub fn elevation(&self) -> ElevationTokens {
        self.manager.tokens.elevation()
    }

    pub fn animations(&self) -> AnimationTokens {
        self.manager.tokens.animations()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::AppearanceOverride;
    use crate::presets::BrandPreset;
    use std::sync::Mutex;

    struct RecordingHost {
        appearance: Mutex<Appearance>,
        overrides: Mutex<Vec<AppearanceOverride>>,
    }

    impl RecordingHost {
        fn new(initial: Appearance) -> Self {
            Self {
                appearance: Mutex::new(initial),
                overrides: Mutex::new(Vec::new()),
            }
        }
    }

    impl ThemeHost for RecordingHost {
        fn appearance(&self) -> Appearance {
            *self.appearance.lock().unwrap()
        }

        fn apply_override(&self, target: AppearanceOverride) {
            self.overrides.lock().unwrap().push(target);
            let mut appearance = self.appearance.lock().unwrap();
            *appearance = match target {
                AppearanceOverride::Light => Appearance::Light,
                AppearanceOverride::Dark => Appearance::Dark,
                AppearanceOverride::Auto => *appearance,
            };
        }
    }

    #[test]
    fn test_switch_updates_current_and_store() {
        let manager = ThemeManager::new();
        let ocean = BrandPreset::Ocean.palette();

        manager.switch_to(ThemeStyle::Custom(ocean.clone()));

        assert_eq!(manager.current().palette, ocean);
        assert_eq!(manager.tokens().palette(), ocean);
        assert_eq!(manager.current().name, "Custom Brand");
    }

    #[test]
    fn test_style_change_keeps_palette() {
        let manager = ThemeManager::new();
        let grape = BrandPreset::Grape.palette();

        manager.switch_to(ThemeStyle::Custom(grape.clone()));
        manager.switch_to(ThemeStyle::Light);

        assert_eq!(manager.current_style(), ThemeStyle::Light);
        assert_eq!(manager.current().palette, grape);
        assert_eq!(manager.tokens().palette(), grape);
    }

    #[test]
    fn test_palette_override_argument() {
        let manager = ThemeManager::new();
        let forest = BrandPreset::Forest.palette();

        manager.switch_to_with(ThemeStyle::Dark, Some(forest.clone()), false);

        assert_eq!(manager.current_style(), ThemeStyle::Dark);
        assert_eq!(manager.current().palette, forest);
    }

    #[test]
    fn test_appearance_is_read_live() {
        let host = Arc::new(RecordingHost::new(Appearance::Light));
        let manager = ThemeManager::with_host(host.clone());

        assert_eq!(
            manager.reader().color(SemanticColor::BackgroundPrimary),
            Color::WHITE
        );

        // OS flips dark mode; no switch happened.
        *host.appearance.lock().unwrap() = Appearance::Dark;
        assert_eq!(
            manager.reader().color(SemanticColor::BackgroundPrimary),
            Color::BLACK
        );
    }

    #[test]
    fn test_host_restyle_is_deferred() {
        let host = Arc::new(RecordingHost::new(Appearance::Light));
        let manager = ThemeManager::with_host(host.clone());

        manager.switch_to(ThemeStyle::Dark);
        assert!(host.overrides.lock().unwrap().is_empty());

        assert_eq!(manager.main_queue().drain(), 1);
        assert_eq!(
            *host.overrides.lock().unwrap(),
            vec![AppearanceOverride::Dark]
        );
        assert_eq!(host.appearance(), Appearance::Dark);
    }

    #[test]
    fn test_switch_without_host_restyle() {
        let host = Arc::new(RecordingHost::new(Appearance::Light));
        let manager = ThemeManager::with_host(host.clone());

        manager.switch_to_with(ThemeStyle::Dark, None, false);

        assert!(manager.main_queue().is_empty());
        assert!(host.overrides.lock().unwrap().is_empty());
    }

    #[test]
    fn test_configure_tokens_bypasses_theme() {
        let manager = ThemeManager::new();
        let grape = BrandPreset::Grape.palette();

        manager.configure_tokens(TokenUpdate::new().palette(grape.clone()));

        assert_eq!(manager.tokens().palette(), grape);
        // The theme snapshot is untouched by a direct token update.
        assert_eq!(manager.current().palette, Palette::default());
    }

    #[test]
    fn test_install_keeps_first_instance() {
        let first = ThemeManager::install(ThemeManager::new());
        first.switch_to_with(ThemeStyle::Dark, None, false);

        let second = ThemeManager::install(ThemeManager::new());

        assert!(std::ptr::eq(first, second));
        assert_eq!(ThemeManager::global().current_style(), ThemeStyle::Dark);
        assert!(ThemeManager::try_global().is_some());
    }
}

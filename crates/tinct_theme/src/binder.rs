//! Declarative theme bindings
//!
//! A binding ties one attribute of one owner to a theme-derived value: a
//! resolve closure reads the current theme through a [`ThemeReader`], a write
//! closure pushes the result into the owner. Bindings run once at
//! registration (initial paint) and once per change broadcast after that.
//!
//! Owners are held weakly. A binding whose owner has been dropped is inert
//! and is swept out of the registry on the next broadcast, so dropping the
//! last strong reference to an owner is all the cleanup a caller ever does.
//! A resolver that panics is isolated: the panic is caught and logged, the
//! remaining bindings still run, and the registry stays usable.

use std::any::TypeId;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, RwLock};

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use tinct_core::Color;

use crate::manager::ThemeReader;
use crate::semantic::SemanticColor;
use crate::tokens::{FontSpec, RadiusToken, SpacingToken, TypeStyle};

new_key_type! {
    /// Handle to one registered binding
    pub struct BindingId;
}

/// What happened when a binding ran
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BindingOutcome {
    Applied,
    OwnerGone,
}

pub(crate) type BindingFn = dyn Fn(ThemeReader<'_>) -> BindingOutcome + Send + Sync;

/// Live set of theme bindings
pub(crate) struct BindingRegistry {
    bindings: RwLock<SlotMap<BindingId, Arc<BindingFn>>>,
}

impl BindingRegistry {
    pub(crate) fn new() -> Self {
        Self {
            bindings: RwLock::new(SlotMap::with_key()),
        }
    }

    pub(crate) fn insert(&self, binding: Arc<BindingFn>) -> BindingId {
        self.bindings
            .write()
            .expect("binding registry lock poisoned")
            .insert(binding)
    }

    pub(crate) fn remove(&self, id: BindingId) -> bool {
        self.bindings
            .write()
            .expect("binding registry lock poisoned")
            .remove(id)
            .is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.bindings
            .read()
            .expect("binding registry lock poisoned")
            .len()
    }

    /// Re-run every binding. Bindings execute outside the registry lock, so
    /// a resolver may register further bindings without deadlocking.
    pub(crate) fn broadcast(&self, reader: ThemeReader<'_>) {
        let entries: Vec<(BindingId, Arc<BindingFn>)> = {
            let bindings = self.bindings.read().expect("binding registry lock poisoned");
            bindings.iter().map(|(id, f)| (id, Arc::clone(f))).collect()
        };
        if entries.is_empty() {
            return;
        }
        tracing::trace!(
            "BindingRegistry::broadcast - re-resolving {} bindings",
            entries.len()
        );

        let mut dead = Vec::new();
        for (id, binding) in entries {
            match catch_unwind(AssertUnwindSafe(|| (*binding)(reader))) {
                Ok(BindingOutcome::Applied) => {}
                Ok(BindingOutcome::OwnerGone) => dead.push(id),
                Err(_) => {
                    tracing::warn!(
                        "BindingRegistry::broadcast - resolver for binding {id:?} panicked"
                    );
                }
            }
        }

        if !dead.is_empty() {
            tracing::trace!(
                "BindingRegistry::broadcast - sweeping {} dead bindings",
                dead.len()
            );
            let mut bindings = self
                .bindings
                .write()
                .expect("binding registry lock poisoned");
            for id in dead {
                bindings.remove(id);
            }
        }
    }
}

// ========== Reusable values ==========

/// A reusable resolve closure producing one theme-derived value.
///
/// Values are cheap handles (clone shares the closure) meant to be declared
/// once and bound to many owners via
/// [`ThemeManager::bind_value`](crate::ThemeManager::bind_value).
pub struct ThemeValue<T> {
    resolve: Arc<dyn Fn(ThemeReader<'_>) -> T + Send + Sync>,
}

impl<T> ThemeValue<T> {
    pub fn new(resolve: impl Fn(ThemeReader<'_>) -> T + Send + Sync + 'static) -> Self {
        Self {
            resolve: Arc::new(resolve),
        }
    }

    pub fn resolve(&self, reader: ThemeReader<'_>) -> T {
        (*self.resolve)(reader)
    }
}

impl<T> Clone for ThemeValue<T> {
    fn clone(&self) -> Self {
        Self {
            resolve: Arc::clone(&self.resolve),
        }
    }
}

impl ThemeValue<Color> {
    /// Value of one semantic color role
    pub fn semantic(slot: SemanticColor) -> Self {
        Self::new(move |theme| theme.color(slot))
    }
}

impl ThemeValue<f32> {
    /// Value of one spacing token
    pub fn spacing(token: SpacingToken) -> Self {
        Self::new(move |theme| theme.spacing().get(token))
    }

    /// Value of one radius token
    pub fn radius(token: RadiusToken) -> Self {
        Self::new(move |theme| theme.radii().get(token))
    }
}

impl ThemeValue<FontSpec> {
    /// Materialized font for one type role
    pub fn type_style(style: TypeStyle) -> Self {
        Self::new(move |theme| theme.font(style))
    }
}

// ========== Component styles ==========

/// A named, reusable restyle function for one component type.
///
/// Where a [`ThemeValue`] drives a single attribute, a component style
/// restyles a whole component in one closure. Applying a style to an
/// instance creates a binding exactly like a single-attribute bind.
pub struct ComponentStyle<C: ?Sized> {
    apply: Arc<dyn Fn(&C, ThemeReader<'_>) + Send + Sync>,
}

impl<C: ?Sized> ComponentStyle<C> {
    pub fn new(apply: impl Fn(&C, ThemeReader<'_>) + Send + Sync + 'static) -> Self {
        Self {
            apply: Arc::new(apply),
        }
    }

    pub fn apply(&self, component: &C, reader: ThemeReader<'_>) {
        (*self.apply)(component, reader)
    }
}

impl<C: ?Sized> Clone for ComponentStyle<C> {
    fn clone(&self) -> Self {
        Self {
            apply: Arc::clone(&self.apply),
        }
    }
}

/// Component styles registered by `(component type, name)`
#[derive(Default)]
pub struct StyleRegistry {
    styles: RwLock<FxHashMap<TypeId, FxHashMap<String, Box<dyn std::any::Any + Send + Sync>>>>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a style under a name. Re-registering a name replaces the
    /// previous style; bindings already created keep the style they captured.
    pub fn register<C: 'static>(&self, name: impl Into<String>, style: ComponentStyle<C>) {
        self.styles
            .write()
            .expect("style registry lock poisoned")
            .entry(TypeId::of::<C>())
            .or_default()
            .insert(name.into(), Box::new(style));
    }

    /// Look up a registered style for component type `C`
    pub fn get<C: 'static>(&self, name: &str) -> Option<ComponentStyle<C>> {
        let styles = self.styles.read().expect("style registry lock poisoned");
        styles
            .get(&TypeId::of::<C>())
            .and_then(|per_type| per_type.get(name))
            .and_then(|style| style.downcast_ref::<ComponentStyle<C>>())
            .cloned()
    }
}

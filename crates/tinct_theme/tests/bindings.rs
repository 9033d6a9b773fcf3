use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tinct_core::Color;
use tinct_theme::{
    BrandPreset, ComponentStyle, RadiusToken, SemanticColor, ThemeManager, ThemeStyle, ThemeValue,
    TypeStyle,
};

#[derive(Default)]
struct Label {
    color: Mutex<Color>,
    background: Mutex<Color>,
}

impl Label {
    fn color(&self) -> Color {
        *self.color.lock().unwrap()
    }

    fn background(&self) -> Color {
        *self.background.lock().unwrap()
    }
}

#[test]
fn bind_paints_once_immediately() {
    let manager = ThemeManager::new();
    let label = Arc::new(Label::default());

    let resolves = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&resolves);
    manager.bind(
        &label,
        move |theme| {
            counter.fetch_add(1, Ordering::SeqCst);
            theme.color(SemanticColor::TextPrimary)
        },
        |label, color| *label.color.lock().unwrap() = color,
    );

    assert_eq!(resolves.load(Ordering::SeqCst), 1);
    assert_eq!(label.color(), Color::BLACK);
}

#[test]
fn multiple_bindings_on_one_owner_are_independent() {
    let manager = ThemeManager::new();
    let label = Arc::new(Label::default());

    manager.bind(
        &label,
        |theme| theme.color(SemanticColor::BrandPrimary),
        |label, color| *label.color.lock().unwrap() = color,
    );
    let background_id = manager.bind(
        &label,
        |theme| theme.color(SemanticColor::BrandSecondary),
        |label, color| *label.background.lock().unwrap() = color,
    );
    assert_eq!(manager.binding_count(), 2);

    // Removing one binding must not disturb the other.
    manager.unbind(background_id);
    assert_eq!(manager.binding_count(), 1);
    let frozen_background = label.background();

    let ocean = BrandPreset::Ocean.palette();
    manager.switch_to(ThemeStyle::Custom(ocean.clone()));

    assert_eq!(label.color(), ocean.light.brand_primary);
    assert_eq!(label.background(), frozen_background);
}

#[test]
fn unbind_reports_whether_binding_existed() {
    let manager = ThemeManager::new();
    let label = Arc::new(Label::default());

    let id = manager.bind(
        &label,
        |theme| theme.color(SemanticColor::TextPrimary),
        |label, color| *label.color.lock().unwrap() = color,
    );

    assert!(manager.unbind(id));
    assert!(!manager.unbind(id), "second unbind of the same id is a no-op");
}

#[test]
fn dropped_owner_makes_binding_inert_and_swept() {
    let manager = ThemeManager::new();
    let label = Arc::new(Label::default());

    manager.bind(
        &label,
        |theme| theme.color(SemanticColor::TextPrimary),
        |label, color| *label.color.lock().unwrap() = color,
    );
    assert_eq!(manager.binding_count(), 1);

    drop(label);

    // Broadcast must not touch the dead owner, and sweeps it out.
    manager.switch_to(ThemeStyle::Dark);
    assert_eq!(manager.binding_count(), 0);
}

#[test]
fn panicking_resolver_does_not_poison_other_bindings() {
    let manager = ThemeManager::new();
    let healthy = Arc::new(Label::default());
    let faulty = Arc::new(Label::default());

    manager.bind(
        &healthy,
        |theme| theme.color(SemanticColor::BrandPrimary),
        |label, color| *label.color.lock().unwrap() = color,
    );

    let armed = Arc::new(Mutex::new(false));
    let armed_flag = Arc::clone(&armed);
    manager.bind(
        &faulty,
        move |theme| {
            if *armed_flag.lock().unwrap() {
                panic!("resolver bug");
            }
            theme.color(SemanticColor::BrandPrimary)
        },
        |label, color| *label.color.lock().unwrap() = color,
    );
    *armed.lock().unwrap() = true;

    let ocean = BrandPreset::Ocean.palette();
    manager.switch_to(ThemeStyle::Custom(ocean.clone()));
    assert_eq!(healthy.color(), ocean.light.brand_primary);

    // The registry stays usable after the panic.
    let grape = BrandPreset::Grape.palette();
    manager.switch_to(ThemeStyle::Custom(grape.clone()));
    assert_eq!(healthy.color(), grape.light.brand_primary);
}

#[test]
fn theme_value_catalog_resolves_current_tokens() {
    let manager = ThemeManager::new();
    let reader = manager.reader();

    let brand = ThemeValue::semantic(SemanticColor::BrandPrimary);
    assert_eq!(brand.resolve(reader), Color::rgb(0.10, 0.45, 0.95));

    let radius = ThemeValue::radius(RadiusToken::M);
    assert_eq!(radius.resolve(reader), 10.0);

    let body = ThemeValue::type_style(TypeStyle::Body);
    assert_eq!(body.resolve(reader).size, 17.0);
}

#[test]
fn bind_value_drives_attribute_like_bind() {
    let manager = ThemeManager::new();
    let label = Arc::new(Label::default());

    let on_primary = ThemeValue::semantic(SemanticColor::OnPrimary);
    manager.bind_value(&label, &on_primary, |label, color| {
        *label.color.lock().unwrap() = color;
    });

    assert_eq!(label.color(), Color::WHITE);
}

#[derive(Default)]
struct Chip {
    background: Mutex<Color>,
    corner_radius: Mutex<f32>,
}

#[test]
fn named_style_restyles_every_instance() {
    let manager = ThemeManager::new();

    manager.register_style(
        "destructive",
        ComponentStyle::new(|chip: &Chip, theme| {
            *chip.background.lock().unwrap() = theme.color(SemanticColor::Error);
            *chip.corner_radius.lock().unwrap() = theme.radii().get(RadiusToken::S);
        }),
    );

    let first = Arc::new(Chip::default());
    let second = Arc::new(Chip::default());
    assert!(manager.apply_named_style(&first, "destructive").is_some());
    assert!(manager.apply_named_style(&second, "destructive").is_some());
    assert!(manager.apply_named_style(&first, "missing").is_none());

    let light_error = Color::from_hex(0xFF3B30);
    assert_eq!(*first.background.lock().unwrap(), light_error);
    assert_eq!(*second.background.lock().unwrap(), light_error);
    assert_eq!(*first.corner_radius.lock().unwrap(), 6.0);

    // A palette change restyles both instances through their bindings.
    let mut palette = BrandPreset::Scarlet.palette();
    palette.light.error = Color::rgb(0.50, 0.00, 0.00);
    manager.switch_to(ThemeStyle::Custom(palette));

    assert_eq!(
        *first.background.lock().unwrap(),
        Color::rgb(0.50, 0.00, 0.00)
    );
    assert_eq!(
        *second.background.lock().unwrap(),
        *first.background.lock().unwrap()
    );
}

#[test]
fn styles_are_scoped_to_component_type() {
    struct Banner;

    let manager = ThemeManager::new();
    manager.register_style(
        "accent",
        ComponentStyle::new(|chip: &Chip, theme| {
            *chip.background.lock().unwrap() = theme.color(SemanticColor::BrandPrimary);
        }),
    );

    let banner = Arc::new(Banner);
    assert!(
        manager.apply_named_style(&banner, "accent").is_none(),
        "a Chip style must not apply to a Banner"
    );
    assert!(manager.style::<Chip>("accent").is_some());
}

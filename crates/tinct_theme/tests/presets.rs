use tinct_core::Color;
use tinct_theme::{Appearance, BrandPreset, SemanticColor};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = BrandPreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["forest", "grape", "ocean", "scarlet", "tinct"]);
}

#[test]
fn preset_ids_round_trip() {
    for preset in BrandPreset::all() {
        assert_eq!(
            BrandPreset::from_id(preset.id()),
            Some(*preset),
            "Preset {:?} should be reachable by its id",
            preset
        );
    }
    assert_eq!(BrandPreset::from_id("neon"), None);
}

#[test]
fn presets_have_distinct_brands() {
    let fills: Vec<Color> = BrandPreset::all()
        .iter()
        .map(|p| p.palette().light.primary_fill)
        .collect();

    for (i, a) in fills.iter().enumerate() {
        for b in &fills[i + 1..] {
            assert_ne!(a, b, "every preset should have its own light primary fill");
        }
    }
}

#[test]
fn presets_have_distinct_light_and_dark_fills() {
    for preset in BrandPreset::all() {
        let palette = preset.palette();
        assert_ne!(
            palette.light.primary_fill, palette.dark.primary_fill,
            "Preset {:?} should adjust its fill for dark backgrounds",
            preset
        );
    }
}

#[test]
fn presets_keep_neutral_slots_legible() {
    for preset in BrandPreset::all() {
        let palette = preset.palette();
        for appearance in [Appearance::Light, Appearance::Dark] {
            let text = SemanticColor::TextPrimary.resolve(&palette, appearance);
            let background = SemanticColor::BackgroundPrimary.resolve(&palette, appearance);
            assert_ne!(
                text, background,
                "preset={preset:?} appearance={appearance:?}"
            );
        }
    }
}

#[test]
fn preset_fill_matches_brand_primary() {
    for preset in BrandPreset::all() {
        let palette = preset.palette();
        assert_eq!(
            palette.light.primary_fill, palette.light.brand_primary,
            "Preset {:?} light fill should match its brand primary",
            preset
        );
        assert_eq!(
            palette.dark.primary_fill, palette.dark.brand_primary,
            "Preset {:?} dark fill should match its brand primary",
            preset
        );
    }
}

#[test]
fn ocean_uses_documented_brand_values() {
    let palette = BrandPreset::Ocean.palette();
    assert_eq!(palette.light.brand_primary, Color::rgb(0.07, 0.46, 0.98));
    assert_eq!(palette.dark.primary_fill, Color::rgb(0.18, 0.56, 1.00));
}

#[test]
fn display_names_are_capitalized() {
    for preset in BrandPreset::all() {
        let name = preset.to_string();
        assert!(
            name.chars().next().unwrap().is_uppercase(),
            "Preset {:?} display name {:?}",
            preset,
            name
        );
    }
}

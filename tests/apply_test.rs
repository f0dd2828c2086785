//! Preset application tests
//!
//! Verify the fill-gap merge: caller values win, presets fill the rest,
//! and unknown caller fields pass through.

use pretty_assertions::assert_eq;
use serde_json::json;

use logo_presets::options::{
    apply_preset_to_compile_options, apply_preset_to_gen_options, CompileOptions, GenOptions,
};
use logo_presets::presets::{built_in_presets, Category, LogoType, PresetRecord, PromptVariant};

fn compile_preset() -> PresetRecord {
    PresetRecord::new("test", "Test", "Test preset", Category::Industry)
        .with_style("geometric")
        .with_logo_type(LogoType::Symbol)
        .with_variant(PromptVariant::ObjectForward)
        .with_checkpoint("flux1-dev.safetensors")
        .with_negatives(["organic", "hand drawn"])
}

fn gen_preset() -> PresetRecord {
    PresetRecord::new("test", "Test", "Test preset", Category::Industry)
        .with_checkpoint("flux1-dev.safetensors")
        .with_model("black-forest-labs/FLUX.1-Dev")
        .with_sampler("euler", "simple")
        .with_guidance(3.5, 30)
        .with_size(1024, 1024)
}

// ============================================================================
// Compile options
// ============================================================================

#[test]
fn test_compile_fills_gaps_from_preset() {
    let result = apply_preset_to_compile_options(&compile_preset(), CompileOptions::default());
    assert_eq!(result.style.as_deref(), Some("geometric"));
    assert_eq!(result.logo_type, Some(LogoType::Symbol));
    assert_eq!(result.variant, Some(PromptVariant::ObjectForward));
    assert_eq!(result.checkpoint.as_deref(), Some("flux1-dev.safetensors"));
    assert_eq!(
        result.extra_negatives,
        Some(vec!["organic".to_string(), "hand drawn".to_string()])
    );
}

#[test]
fn test_compile_preserves_user_overrides() {
    let user = CompileOptions {
        style: Some("brutalist".to_string()),
        checkpoint: Some("sdxl_base.safetensors".to_string()),
        ..Default::default()
    };
    let result = apply_preset_to_compile_options(&compile_preset(), user);
    assert_eq!(result.style.as_deref(), Some("brutalist"));
    assert_eq!(result.checkpoint.as_deref(), Some("sdxl_base.safetensors"));
    // Preset fills what user didn't set
    assert_eq!(result.logo_type, Some(LogoType::Symbol));
}

#[test]
fn test_compile_merges_negatives_with_dedup() {
    let user = CompileOptions {
        extra_negatives: Some(vec!["hand drawn".to_string(), "cartoon".to_string()]),
        ..Default::default()
    };
    let result = apply_preset_to_compile_options(&compile_preset(), user);
    assert_eq!(
        result.extra_negatives,
        Some(vec![
            "organic".to_string(),
            "hand drawn".to_string(),
            "cartoon".to_string(),
        ])
    );
}

#[test]
fn test_compile_preserves_extra_user_properties() {
    let user = CompileOptions::from_value(json!({
        "includeTierB": true,
        "tierABudget": 72
    }))
    .unwrap();
    let result = apply_preset_to_compile_options(&compile_preset(), user);
    assert_eq!(result.extra.get("includeTierB"), Some(&json!(true)));
    assert_eq!(result.extra.get("tierABudget"), Some(&json!(72)));
}

#[test]
fn test_compile_json_null_counts_as_absent() {
    let user = CompileOptions::from_value(json!({ "style": null, "variant": "both" })).unwrap();
    let result = apply_preset_to_compile_options(&compile_preset(), user);
    assert_eq!(result.style.as_deref(), Some("geometric"));
    assert_eq!(result.variant, Some(PromptVariant::Both));
}

#[test]
fn test_compile_fill_law_holds_for_every_builtin() {
    for preset in built_in_presets() {
        let result = apply_preset_to_compile_options(preset, CompileOptions::default());
        assert_eq!(result.style, preset.style);
        assert_eq!(result.logo_type, preset.logo_type);
        assert_eq!(result.variant, preset.variant);
        assert_eq!(result.checkpoint, preset.checkpoint);
        assert_eq!(
            result.extra_negatives,
            Some(preset.extra_negatives.clone().unwrap_or_default())
        );
    }
}

#[test]
fn test_compile_user_style_always_wins() {
    for preset in built_in_presets() {
        let user = CompileOptions {
            style: Some("pixel art".to_string()),
            ..Default::default()
        };
        let result = apply_preset_to_compile_options(preset, user);
        assert_eq!(result.style.as_deref(), Some("pixel art"));
    }
}

#[test]
fn test_compile_merged_json_shape() {
    let user = CompileOptions::from_value(json!({
        "logoType": "wordmark",
        "extraNegatives": ["cartoon"],
        "brand": "Acme"
    }))
    .unwrap();
    let merged = apply_preset_to_compile_options(&compile_preset(), user)
        .to_value()
        .unwrap();
    assert_eq!(
        merged,
        json!({
            "style": "geometric",
            "logoType": "wordmark",
            "variant": "object-forward",
            "extraNegatives": ["organic", "hand drawn", "cartoon"],
            "checkpoint": "flux1-dev.safetensors",
            "brand": "Acme"
        })
    );
}

// ============================================================================
// Generation options
// ============================================================================

#[test]
fn test_gen_fills_gaps_from_preset() {
    let result = apply_preset_to_gen_options(&gen_preset(), GenOptions::default());
    assert_eq!(result.checkpoint.as_deref(), Some("flux1-dev.safetensors"));
    assert_eq!(result.model.as_deref(), Some("black-forest-labs/FLUX.1-Dev"));
    assert_eq!(result.sampler.as_deref(), Some("euler"));
    assert_eq!(result.scheduler.as_deref(), Some("simple"));
    assert_eq!(result.cfg, Some(3.5));
    assert_eq!(result.steps, Some(30.0));
    assert_eq!(result.width, Some(1024.0));
    assert_eq!(result.height, Some(1024.0));
}

#[test]
fn test_gen_preserves_user_overrides() {
    let user = GenOptions {
        cfg: Some(5.0),
        steps: Some(20.0),
        width: Some(512.0),
        ..Default::default()
    };
    let result = apply_preset_to_gen_options(&gen_preset(), user);
    assert_eq!(result.cfg, Some(5.0));
    assert_eq!(result.steps, Some(20.0));
    assert_eq!(result.width, Some(512.0));
    // Preset fills what user didn't set
    assert_eq!(result.height, Some(1024.0));
    assert_eq!(result.model.as_deref(), Some("black-forest-labs/FLUX.1-Dev"));
}

#[test]
fn test_gen_preserves_extra_user_properties() {
    let user = GenOptions::from_value(json!({
        "backend": "comfyui",
        "variants": 4,
        "seed": 42
    }))
    .unwrap();
    let result = apply_preset_to_gen_options(&gen_preset(), user);
    assert_eq!(result.extra.get("backend"), Some(&json!("comfyui")));
    assert_eq!(result.extra.get("variants"), Some(&json!(4)));
    assert_eq!(result.extra.get("seed"), Some(&json!(42)));
}

#[test]
fn test_gen_absent_everywhere_stays_absent() {
    let preset = PresetRecord::new("bare", "Bare", "Nothing set", Category::Custom);
    let result = apply_preset_to_gen_options(&preset, GenOptions::default());
    assert_eq!(result, GenOptions::default());
}

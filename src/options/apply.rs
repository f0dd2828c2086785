//! Preset application.
//!
//! Merges preset values into compile and generation options. A field the
//! caller set (even to an empty string, zero, or an empty list) always wins;
//! the preset only fills fields that are `None`.

use std::collections::HashSet;

use super::types::{CompileOptions, GenOptions};
use crate::presets::PresetRecord;

/// Apply a preset to compile options.
///
/// `extra_negatives` is always set in the result: preset negatives first,
/// then the caller's, with exact duplicates dropped.
pub fn apply_preset_to_compile_options(
    preset: &PresetRecord,
    user_options: CompileOptions,
) -> CompileOptions {
    let CompileOptions {
        style,
        logo_type,
        variant,
        extra_negatives,
        checkpoint,
        extra,
    } = user_options;

    CompileOptions {
        style: style.or_else(|| preset.style.clone()),
        logo_type: logo_type.or_else(|| preset.logo_type.clone()),
        variant: variant.or_else(|| preset.variant.clone()),
        extra_negatives: Some(merge_negatives(
            preset.extra_negatives.as_deref(),
            extra_negatives.as_deref(),
        )),
        checkpoint: checkpoint.or_else(|| preset.checkpoint.clone()),
        extra,
    }
}

/// Apply a preset to generation options.
pub fn apply_preset_to_gen_options(preset: &PresetRecord, user_options: GenOptions) -> GenOptions {
    let GenOptions {
        checkpoint,
        model,
        sampler,
        scheduler,
        cfg,
        steps,
        width,
        height,
        extra,
    } = user_options;

    GenOptions {
        checkpoint: checkpoint.or_else(|| preset.checkpoint.clone()),
        model: model.or_else(|| preset.model.clone()),
        sampler: sampler.or_else(|| preset.sampler.clone()),
        scheduler: scheduler.or_else(|| preset.scheduler.clone()),
        cfg: cfg.or(preset.cfg),
        steps: steps.or(preset.steps),
        width: width.or(preset.width),
        height: height.or(preset.height),
        extra,
    }
}

/// Concatenate negatives, keeping the first occurrence of each phrase.
fn merge_negatives(preset_neg: Option<&[String]>, user_neg: Option<&[String]>) -> Vec<String> {
    let mut seen = HashSet::new();
    preset_neg
        .unwrap_or_default()
        .iter()
        .chain(user_neg.unwrap_or_default())
        .filter(|n| seen.insert(*n))
        .cloned()
        .collect()
}

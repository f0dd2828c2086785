//! Preset lookup and user preset file loading.
//!
//! Built-in presets always come first. User presets from a JSON file are
//! appended in file order. Nothing is cached: every call that takes a path
//! reads the file again.

use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use super::builtins::built_in_presets;
use super::types::{Category, PresetRecord, PresetSummary, PRESET_FILE_VERSION};
use crate::error::{PresetError, PresetResult};

/// List all available presets.
///
/// Includes the built-in catalog and, when a path is given, the user presets
/// from that file. Ids are not deduplicated across the two sources.
///
/// # Errors
/// Propagates any [`PresetError`] from [`load_user_presets`].
pub fn list_presets(user_preset_path: Option<&Path>) -> PresetResult<Vec<PresetRecord>> {
    let mut all = built_in_presets().to_vec();
    if let Some(path) = user_preset_path {
        all.extend(load_user_presets(path)?);
    }
    Ok(all)
}

/// Load a single preset by ID.
///
/// Matching is exact and case-sensitive. Returns `Ok(None)` when no preset
/// has the given ID; a built-in wins over a user preset with the same ID.
pub fn load_preset(id: &str, user_preset_path: Option<&Path>) -> PresetResult<Option<PresetRecord>> {
    let found = list_presets(user_preset_path)?
        .into_iter()
        .find(|p| p.id == id);
    if found.is_none() {
        debug!(preset_id = id, "Preset not found");
    }
    Ok(found)
}

/// List brief summaries of all available presets, in lookup order.
pub fn list_preset_summaries(
    user_preset_path: Option<&Path>,
) -> PresetResult<Vec<PresetSummary>> {
    Ok(list_presets(user_preset_path)?
        .iter()
        .map(PresetRecord::to_summary)
        .collect())
}

/// List presets in a single category.
pub fn list_presets_by_category(
    category: &Category,
    user_preset_path: Option<&Path>,
) -> PresetResult<Vec<PresetRecord>> {
    Ok(list_presets(user_preset_path)?
        .into_iter()
        .filter(|p| &p.category == category)
        .collect())
}

/// Load user-defined presets from a JSON file.
///
/// The file must follow the [`PresetFile`](super::PresetFile) schema with
/// `version: 1`.
///
/// # Errors
/// - [`PresetError::ReadFile`] if the file cannot be read
/// - [`PresetError::Parse`] if the content is not JSON
/// - [`PresetError::UnsupportedVersion`] if `version` is not 1
/// - [`PresetError::InvalidPresetsArray`] if `presets` is not an array
/// - [`PresetError::InvalidRecord`] if an entry cannot be read as a preset
pub fn load_user_presets(path: impl AsRef<Path>) -> PresetResult<Vec<PresetRecord>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "Reading user preset file");

    let raw = std::fs::read_to_string(path).map_err(|source| PresetError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&raw).map_err(|source| PresetError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let presets = presets_from_document(document).inspect_err(|e| {
        warn!(path = %path.display(), error = %e, "Rejected user preset file");
    })?;

    info!(
        path = %path.display(),
        count = presets.len(),
        "Loaded user presets"
    );
    Ok(presets)
}

/// Parse user presets from an in-memory JSON document.
///
/// Applies the same envelope checks as [`load_user_presets`]. JSON syntax
/// errors are reported as [`PresetError::Parse`] with an empty path.
pub fn parse_user_presets(json: &str) -> PresetResult<Vec<PresetRecord>> {
    let document: Value = serde_json::from_str(json).map_err(|source| PresetError::Parse {
        path: Default::default(),
        source,
    })?;
    presets_from_document(document)
}

fn presets_from_document(document: Value) -> PresetResult<Vec<PresetRecord>> {
    let version = document.get("version");
    if !version.is_some_and(is_supported_version) {
        return Err(PresetError::UnsupportedVersion {
            found: version.map_or_else(|| "undefined".to_string(), Value::to_string),
        });
    }

    let entries = match document {
        Value::Object(mut map) => match map.remove("presets") {
            Some(Value::Array(entries)) => entries,
            _ => return Err(PresetError::InvalidPresetsArray),
        },
        _ => return Err(PresetError::InvalidPresetsArray),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<PresetRecord>(entry)
                .map_err(|source| PresetError::InvalidRecord { index, source })
        })
        .collect()
}

fn is_supported_version(version: &Value) -> bool {
    match version.as_u64() {
        Some(v) => v == PRESET_FILE_VERSION,
        None => version.as_f64() == Some(PRESET_FILE_VERSION as f64),
    }
}

//! Generation preset catalog and loading.
//!
//! This module provides:
//! - `PresetRecord`: A named bundle of compile and backend overrides
//! - `built_in_presets`: The fixed built-in catalog
//! - `list_presets` / `load_preset`: Lookup across built-in and user presets
//! - `load_user_presets`: Reading user preset files

mod builtins;
mod loader;
mod types;

pub use builtins::*;
pub use loader::{
    list_preset_summaries, list_presets, list_presets_by_category, load_preset, load_user_presets,
    parse_user_presets,
};
pub use types::*;

//! Option shapes and fill-gap merging of presets into them.
//!
//! This module provides:
//! - `CompileOptions` / `GenOptions`: Open option objects with typed known fields
//! - `apply_preset_to_compile_options` / `apply_preset_to_gen_options`: Pure merges

mod apply;
mod types;

pub use apply::{apply_preset_to_compile_options, apply_preset_to_gen_options};
pub use types::{CompileOptions, GenOptions};

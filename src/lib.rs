//! # Logo Presets
//!
//! Curated generation presets for logo image pipelines. Skip the tuning,
//! start generating.
//!
//! ## Features
//!
//! - **Built-in Catalog**: Eight industry presets covering style, logo type,
//!   negatives, checkpoint, sampler and guidance settings
//! - **User Presets**: Extra presets loaded from a versioned JSON file
//! - **Fill-gap Merging**: Presets fill only the options a caller left unset
//!
//! ## Flow
//!
//! ```text
//! load_preset(id, user_file?) → PresetRecord
//!                                    ↓
//!     apply_preset_to_{compile,gen}_options(preset, user_options)
//!                                    ↓
//!                       prompt compiler / image backend
//! ```
//!
//! ## Example
//!
//! ```
//! use logo_presets::options::{apply_preset_to_compile_options, CompileOptions};
//! use logo_presets::presets::load_preset;
//!
//! let preset = load_preset("tech-startup", None)?.expect("built-in preset");
//! let user = CompileOptions {
//!     style: Some("brutalist".to_string()),
//!     ..Default::default()
//! };
//! let merged = apply_preset_to_compile_options(&preset, user);
//! assert_eq!(merged.style.as_deref(), Some("brutalist"));
//! assert_eq!(merged.logo_type, preset.logo_type);
//! # Ok::<(), logo_presets::PresetError>(())
//! ```

#![warn(missing_docs)]

/// Configuration loaded from the environment.
pub mod config;
/// Error types and result aliases.
pub mod error;
/// Tracing subscriber setup.
pub mod logging;
/// Compile and generation option shapes and preset merging.
pub mod options;
/// Preset records, the built-in catalog, and the loader.
pub mod presets;

pub use config::Config;
pub use error::{ErrorKind, PresetError, PresetResult};
pub use logging::init_logging;
pub use options::{
    apply_preset_to_compile_options, apply_preset_to_gen_options, CompileOptions, GenOptions,
};
pub use presets::{
    built_in_presets, list_preset_summaries, list_presets, load_preset, load_user_presets,
    Category, LogoType, PresetFile, PresetRecord, PresetSummary, PromptVariant,
};

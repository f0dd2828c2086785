//! Loose option shapes consumed by the external pipeline.
//!
//! Known fields are typed; anything else the caller sets is kept in `extra`
//! and passed through merges untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::presets::{LogoType, PromptVariant};

/// Prompt compiler options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompileOptions {
    /// Style name passed to the compiler.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Logo type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_type: Option<LogoType>,
    /// Prompt variant ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<PromptVariant>,
    /// Extra negative phrases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_negatives: Option<Vec<String>>,
    /// Checkpoint file (ComfyUI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<String>,
    /// Caller fields unrelated to presets.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Image generation backend options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenOptions {
    /// Checkpoint file (ComfyUI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<String>,
    /// Hosted model ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Sampler name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampler: Option<String>,
    /// Scheduler name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<String>,
    /// CFG scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfg: Option<f64>,
    /// Diffusion steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<f64>,
    /// Image width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Image height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Caller fields unrelated to presets.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CompileOptions {
    /// Decode compile options from a loose JSON object.
    ///
    /// `null` on a known field is treated as absent.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Encode back into a JSON object, omitting absent known fields.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Set a pass-through field.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

impl GenOptions {
    /// Decode generation options from a loose JSON object.
    ///
    /// `null` on a known field is treated as absent.
    pub fn from_value(value: Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }

    /// Encode back into a JSON object, omitting absent known fields.
    pub fn to_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    /// Set a pass-through field.
    pub fn with_extra(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

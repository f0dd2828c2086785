//! Data types for generation presets.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Schema version accepted in user preset files.
pub const PRESET_FILE_VERSION: u64 = 1;

/// Logo type understood by the prompt compiler.
///
/// Unknown strings from user files are kept in [`LogoType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LogoType {
    /// Text-only mark.
    Wordmark,
    /// Icon with no text.
    Symbol,
    /// Icon plus text.
    Combination,
    /// Text enclosed in a badge or crest.
    Emblem,
    /// Initials-based mark.
    Lettermark,
    /// Any value outside the known set.
    Other(String),
}

impl LogoType {
    /// All known logo types.
    pub const KNOWN: [LogoType; 5] = [
        LogoType::Wordmark,
        LogoType::Symbol,
        LogoType::Combination,
        LogoType::Emblem,
        LogoType::Lettermark,
    ];

    /// Wire name of the logo type.
    pub fn as_str(&self) -> &str {
        match self {
            LogoType::Wordmark => "wordmark",
            LogoType::Symbol => "symbol",
            LogoType::Combination => "combination",
            LogoType::Emblem => "emblem",
            LogoType::Lettermark => "lettermark",
            LogoType::Other(s) => s,
        }
    }
}

impl From<String> for LogoType {
    fn from(s: String) -> Self {
        match s.as_str() {
            "wordmark" => LogoType::Wordmark,
            "symbol" => LogoType::Symbol,
            "combination" => LogoType::Combination,
            "emblem" => LogoType::Emblem,
            "lettermark" => LogoType::Lettermark,
            _ => LogoType::Other(s),
        }
    }
}

impl From<LogoType> for String {
    fn from(t: LogoType) -> Self {
        match t {
            LogoType::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LogoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prompt variant ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PromptVariant {
    /// Subject first, then composition.
    ObjectForward,
    /// Composition first, then subject.
    CompositionForward,
    /// Generate both orderings.
    Both,
    /// Any value outside the known set.
    Other(String),
}

impl PromptVariant {
    /// Wire name of the variant.
    pub fn as_str(&self) -> &str {
        match self {
            PromptVariant::ObjectForward => "object-forward",
            PromptVariant::CompositionForward => "composition-forward",
            PromptVariant::Both => "both",
            PromptVariant::Other(s) => s,
        }
    }
}

impl From<String> for PromptVariant {
    fn from(s: String) -> Self {
        match s.as_str() {
            "object-forward" => PromptVariant::ObjectForward,
            "composition-forward" => PromptVariant::CompositionForward,
            "both" => PromptVariant::Both,
            _ => PromptVariant::Other(s),
        }
    }
}

impl From<PromptVariant> for String {
    fn from(v: PromptVariant) -> Self {
        match v {
            PromptVariant::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PromptVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Preset category for grouping.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    /// Tuned for a business vertical.
    Industry,
    /// Tuned for a visual look.
    Aesthetic,
    /// User-defined.
    #[default]
    Custom,
    /// Any value outside the known set.
    Other(String),
}

impl Category {
    /// Wire name of the category.
    pub fn as_str(&self) -> &str {
        match self {
            Category::Industry => "industry",
            Category::Aesthetic => "aesthetic",
            Category::Custom => "custom",
            Category::Other(s) => s,
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        match s.as_str() {
            "industry" => Category::Industry,
            "aesthetic" => Category::Aesthetic,
            "custom" => Category::Custom,
            _ => Category::Other(s),
        }
    }
}

impl From<Category> for String {
    fn from(c: Category) -> Self {
        match c {
            Category::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generation preset bundles the tuning knobs for a use case.
///
/// Every field except the identity fields is optional; presets only
/// override what they care about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetRecord {
    /// Unique slug (e.g., "tech-startup").
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    /// Human-readable name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// One-line description.
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Category for grouping. Absent or null in a user file means custom.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: Category,

    // Compiler-layer overrides
    /// Preferred style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Preferred logo type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_type: Option<LogoType>,
    /// Preferred composition.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composition: Option<String>,
    /// Extra negative phrases to inject.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_negatives: Option<Vec<String>>,
    /// Preferred prompt variant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<PromptVariant>,

    // Backend-layer overrides
    /// Recommended checkpoint (ComfyUI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<String>,
    /// Hosted model ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Sampler (ComfyUI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sampler: Option<String>,
    /// Scheduler (ComfyUI).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduler: Option<String>,
    /// CFG scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cfg: Option<f64>,
    /// Diffusion steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<f64>,
    /// Image width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Image height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Unrecognized fields from a user preset file, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Treat an explicit JSON `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Format for user preset files (.json).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetFile {
    /// Schema version (currently 1).
    pub version: u64,
    /// Custom presets in file order.
    pub presets: Vec<PresetRecord>,
}

impl PresetFile {
    /// Wrap presets in a version 1 envelope.
    pub fn new(presets: Vec<PresetRecord>) -> Self {
        Self {
            version: PRESET_FILE_VERSION,
            presets,
        }
    }
}

/// Brief preset summary for listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetSummary {
    /// Preset identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Category.
    pub category: Category,
}

impl PresetRecord {
    /// Create a preset with identity fields only.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category,
            style: None,
            logo_type: None,
            composition: None,
            extra_negatives: None,
            variant: None,
            checkpoint: None,
            model: None,
            sampler: None,
            scheduler: None,
            cfg: None,
            steps: None,
            width: None,
            height: None,
            extra: Map::new(),
        }
    }

    /// Create a summary from the full preset.
    pub fn to_summary(&self) -> PresetSummary {
        PresetSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
        }
    }

    /// Set the style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    /// Set the logo type.
    pub fn with_logo_type(mut self, logo_type: LogoType) -> Self {
        self.logo_type = Some(logo_type);
        self
    }

    /// Set the composition.
    pub fn with_composition(mut self, composition: impl Into<String>) -> Self {
        self.composition = Some(composition.into());
        self
    }

    /// Set the extra negative phrases.
    pub fn with_negatives<I, S>(mut self, negatives: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_negatives = Some(negatives.into_iter().map(Into::into).collect());
        self
    }

    /// Set the prompt variant.
    pub fn with_variant(mut self, variant: PromptVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Set the checkpoint.
    pub fn with_checkpoint(mut self, checkpoint: impl Into<String>) -> Self {
        self.checkpoint = Some(checkpoint.into());
        self
    }

    /// Set the hosted model ID.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set sampler and scheduler together.
    pub fn with_sampler(mut self, sampler: impl Into<String>, scheduler: impl Into<String>) -> Self {
        self.sampler = Some(sampler.into());
        self.scheduler = Some(scheduler.into());
        self
    }

    /// Set CFG scale and step count.
    pub fn with_guidance(mut self, cfg: f64, steps: u32) -> Self {
        self.cfg = Some(cfg);
        self.steps = Some(f64::from(steps));
        self
    }

    /// Set output dimensions.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = Some(f64::from(width));
        self.height = Some(f64::from(height));
        self
    }
}

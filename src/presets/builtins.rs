//! Built-in generation presets for common logo use cases.

use std::sync::LazyLock;

use super::types::{Category, LogoType, PresetRecord, PromptVariant};

const FLUX_DEV: &str = "flux1-dev.safetensors";
const FLUX_DEV_MODEL: &str = "black-forest-labs/FLUX.1-dev";
const FLUX_SCHNELL: &str = "flux1-schnell.safetensors";
const FLUX_SCHNELL_MODEL: &str = "black-forest-labs/FLUX.1-schnell";
const SDXL_BASE: &str = "sd_xl_base_1.0.safetensors";

static BUILT_IN_PRESETS: LazyLock<Vec<PresetRecord>> = LazyLock::new(|| {
    vec![
        tech_startup_preset(),
        luxury_brand_preset(),
        gaming_preset(),
        healthcare_preset(),
        fintech_preset(),
        creative_agency_preset(),
        saas_preset(),
        e_commerce_preset(),
    ]
});

/// The built-in catalog, in display order.
///
/// Built on first access and never mutated afterwards.
pub fn built_in_presets() -> &'static [PresetRecord] {
    &BUILT_IN_PRESETS
}

/// Clean geometric symbol for technology startups.
pub fn tech_startup_preset() -> PresetRecord {
    PresetRecord::new(
        "tech-startup",
        "Tech Startup",
        "Clean geometric symbol with bold shapes, built for app icons and favicons",
        Category::Industry,
    )
    .with_style("geometric")
    .with_logo_type(LogoType::Symbol)
    .with_composition("centered")
    .with_negatives(["organic", "hand drawn", "vintage", "ornate"])
    .with_variant(PromptVariant::ObjectForward)
    .with_checkpoint(FLUX_DEV)
    .with_model(FLUX_DEV_MODEL)
    .with_sampler("euler", "simple")
    .with_guidance(3.5, 28)
    .with_size(1024, 1024)
}

/// Refined serif emblem for premium brands.
///
/// Uses SDXL with a high CFG scale so fine ornament detail holds.
pub fn luxury_brand_preset() -> PresetRecord {
    PresetRecord::new(
        "luxury-brand",
        "Luxury Brand",
        "Refined emblem with serif lettering and fine ornament detail",
        Category::Industry,
    )
    .with_style("elegant")
    .with_logo_type(LogoType::Emblem)
    .with_composition("symmetrical")
    .with_negatives(["cartoon", "clip art", "neon", "playful", "low detail"])
    .with_variant(PromptVariant::CompositionForward)
    .with_checkpoint(SDXL_BASE)
    .with_sampler("dpmpp_2m", "karras")
    .with_guidance(7.5, 40)
    .with_size(1024, 1024)
}

/// High-energy mascot-style marks, tuned for fast iteration.
///
/// Schnell is distilled: few steps, guidance near 1.
pub fn gaming_preset() -> PresetRecord {
    PresetRecord::new(
        "gaming",
        "Gaming",
        "Aggressive, high-contrast emblem for esports teams and game studios",
        Category::Industry,
    )
    .with_style("bold")
    .with_logo_type(LogoType::Emblem)
    .with_composition("dynamic")
    .with_negatives(["corporate", "muted colors", "pastel"])
    .with_variant(PromptVariant::Both)
    .with_checkpoint(FLUX_SCHNELL)
    .with_model(FLUX_SCHNELL_MODEL)
    .with_sampler("euler", "simple")
    .with_guidance(1.0, 4)
    .with_size(1024, 1024)
}

/// Calm, trustworthy combination marks for healthcare.
pub fn healthcare_preset() -> PresetRecord {
    PresetRecord::new(
        "healthcare",
        "Healthcare",
        "Soft, trustworthy combination mark with rounded forms",
        Category::Industry,
    )
    .with_style("minimal")
    .with_logo_type(LogoType::Combination)
    .with_composition("balanced")
    .with_negatives(["aggressive", "sharp spikes", "dark", "blood"])
    .with_variant(PromptVariant::ObjectForward)
    .with_checkpoint(FLUX_DEV)
    .with_model(FLUX_DEV_MODEL)
    .with_sampler("euler", "simple")
    .with_guidance(3.5, 28)
    .with_size(1024, 1024)
}

/// Precise lettermark for finance and payments.
pub fn fintech_preset() -> PresetRecord {
    PresetRecord::new(
        "fintech",
        "Fintech",
        "Precise lettermark that reads as secure and modern",
        Category::Industry,
    )
    .with_style("corporate")
    .with_logo_type(LogoType::Lettermark)
    .with_composition("centered")
    .with_negatives(["playful", "cartoon", "grunge"])
    .with_variant(PromptVariant::ObjectForward)
    .with_checkpoint(FLUX_DEV)
    .with_model(FLUX_DEV_MODEL)
    .with_sampler("euler", "beta")
    .with_guidance(4.0, 30)
    .with_size(1024, 1024)
}

/// Expressive marks for studios and agencies.
pub fn creative_agency_preset() -> PresetRecord {
    PresetRecord::new(
        "creative-agency",
        "Creative Agency",
        "Expressive, experimental wordmark with playful typography",
        Category::Industry,
    )
    .with_style("abstract")
    .with_logo_type(LogoType::Wordmark)
    .with_composition("asymmetrical")
    .with_negatives(["generic", "stock", "clip art"])
    .with_variant(PromptVariant::CompositionForward)
    .with_checkpoint(SDXL_BASE)
    .with_sampler("dpmpp_2m_sde", "karras")
    .with_guidance(6.0, 35)
    .with_size(1216, 832)
}

/// Flat combination mark for software products.
pub fn saas_preset() -> PresetRecord {
    PresetRecord::new(
        "saas",
        "SaaS",
        "Friendly flat combination mark that scales from favicon to landing page",
        Category::Industry,
    )
    .with_style("flat")
    .with_logo_type(LogoType::Combination)
    .with_composition("horizontal")
    .with_negatives(["photorealistic", "3d render", "gradient mesh"])
    .with_variant(PromptVariant::ObjectForward)
    .with_checkpoint(FLUX_DEV)
    .with_model(FLUX_DEV_MODEL)
    .with_sampler("euler", "simple")
    .with_guidance(3.5, 24)
    .with_size(1216, 832)
}

/// Retail-ready wordmarks that survive small sizes.
pub fn e_commerce_preset() -> PresetRecord {
    PresetRecord::new(
        "e-commerce",
        "E-Commerce",
        "Approachable wordmark that stays legible on packaging and storefronts",
        Category::Industry,
    )
    .with_style("modern")
    .with_logo_type(LogoType::Wordmark)
    .with_composition("horizontal")
    .with_negatives(["illegible text", "thin strokes", "busy background"])
    .with_variant(PromptVariant::ObjectForward)
    .with_checkpoint(FLUX_DEV)
    .with_model(FLUX_DEV_MODEL)
    .with_sampler("euler", "simple")
    .with_guidance(3.0, 24)
    .with_size(1216, 832)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn find(id: &str) -> &'static PresetRecord {
        built_in_presets()
            .iter()
            .find(|p| p.id == id)
            .unwrap_or_else(|| panic!("missing builtin {}", id))
    }

    #[test]
    fn test_catalog_has_eight_presets() {
        assert_eq!(built_in_presets().len(), 8);
    }

    #[test]
    fn test_catalog_ids_unique() {
        let ids: HashSet<_> = built_in_presets().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), built_in_presets().len());
    }

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = built_in_presets().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "tech-startup",
                "luxury-brand",
                "gaming",
                "healthcare",
                "fintech",
                "creative-agency",
                "saas",
                "e-commerce",
            ]
        );
    }

    #[test]
    fn test_catalog_required_fields() {
        for preset in built_in_presets() {
            assert!(!preset.id.is_empty());
            assert!(!preset.name.is_empty(), "{} has no name", preset.id);
            assert!(!preset.description.is_empty(), "{} has no description", preset.id);
            assert_eq!(preset.category, Category::Industry);
            assert!(
                preset.style.as_deref().is_some_and(|s| !s.is_empty()),
                "{} has no style",
                preset.id
            );
            let logo_type = preset.logo_type.as_ref().expect("logo type");
            assert!(LogoType::KNOWN.contains(logo_type));
            assert!(preset.extra.is_empty());
        }
    }

    #[test]
    fn test_catalog_positive_cfg_and_steps() {
        for preset in built_in_presets() {
            if let Some(cfg) = preset.cfg {
                assert!(cfg > 0.0, "{} cfg must be positive", preset.id);
            }
            if let Some(steps) = preset.steps {
                assert!(steps > 0.0, "{} steps must be positive", preset.id);
            }
        }
    }

    #[test]
    fn test_gaming_uses_low_steps() {
        let gaming = find("gaming");
        assert!(gaming.steps.unwrap() <= 4.0);
        assert!(gaming.cfg.unwrap() <= 1.0);
    }

    #[test]
    fn test_luxury_uses_high_cfg() {
        assert!(find("luxury-brand").cfg.unwrap() >= 7.0);
    }

    #[test]
    fn test_catalog_is_shared() {
        let a = built_in_presets().as_ptr();
        let b = built_in_presets().as_ptr();
        assert_eq!(a, b);
    }
}

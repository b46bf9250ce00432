use crate::error::BrunnError;
use crate::rules::schema::{
    AgricultureRule, DrinkingRule, ExtendedRuleSet, IndustryRule, SimpleRuleSet,
};
use rust_decimal::Decimal;

/// Available predefined rule sets.
pub const PRESETS: &[&str] = &["manual", "screening"];

/// A loaded preset, either flavor.
#[derive(Debug, Clone)]
pub enum Preset {
    Manual(SimpleRuleSet),
    Screening(ExtendedRuleSet),
}

/// The default manual spot-check rule set.
pub fn manual() -> SimpleRuleSet {
    SimpleRuleSet {
        name: "Manual spot-check".into(),
        version: "1.0".into(),
        description: Some(
            "Single-sample usage classification from potability, pH and hardness".into(),
        ),
        ph_min: Decimal::new(65, 1),
        ph_max: Decimal::new(85, 1),
        hardness_max: Decimal::from(300),
    }
}

/// The default batch screening rule set.
pub fn screening() -> ExtendedRuleSet {
    ExtendedRuleSet {
        name: "Batch screening".into(),
        version: "1.0".into(),
        description: Some(
            "Independent drinking/agriculture/industry suitability checks for uploaded tables"
                .into(),
        ),
        drinking: DrinkingRule {
            ph_min: Decimal::new(65, 1),
            ph_max: Decimal::new(85, 1),
        },
        agriculture: AgricultureRule {
            ph_min: Decimal::from(6),
            sulfate_max: Decimal::from(400),
            conductivity_max: Decimal::from(3000),
        },
        industry: IndustryRule {
            hardness_max: Decimal::from(500),
            conductivity_max: Decimal::from(5000),
        },
    }
}

/// Load a predefined rule set by name.
pub fn load_preset(name: &str) -> Result<Preset, BrunnError> {
    match name {
        "manual" => Ok(Preset::Manual(manual())),
        "screening" => Ok(Preset::Screening(screening())),
        _ => Err(BrunnError::RuleSetInvalid(format!(
            "unknown preset '{}'. Available: {}",
            name,
            PRESETS.join(", ")
        ))),
    }
}

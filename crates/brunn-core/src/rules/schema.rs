use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Rule set for the manual spot-check path.
///
/// One mutually-exclusive category per sample: a potable sample is
/// Drinking, otherwise pH and hardness decide between Agriculture and
/// Industrial. All bounds are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimpleRuleSet {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    pub ph_min: Decimal,
    pub ph_max: Decimal,
    pub hardness_max: Decimal,
}

/// Drinking criterion of the extended rule set: pH window plus the
/// model's potability prediction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkingRule {
    pub ph_min: Decimal,
    pub ph_max: Decimal,
}

/// Agriculture criterion of the extended rule set.
///
/// Note the pH floor: 6.0 here against the simple rule set's 6.5. The
/// source material uses both values; regulatory-grade batch screening and
/// the manual spot-check are treated as distinct domains, so the two are
/// kept as separate, independently named rule sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgricultureRule {
    pub ph_min: Decimal,
    pub sulfate_max: Decimal,
    pub conductivity_max: Decimal,
}

/// Industry criterion of the extended rule set. Reads hardness and
/// conductivity only; pH is deliberately not consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryRule {
    pub hardness_max: Decimal,
    pub conductivity_max: Decimal,
}

/// Rule set for batch screening: three independent suitability criteria,
/// each evaluated on its own, none short-circuiting another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtendedRuleSet {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: Option<String>,
    pub drinking: DrinkingRule,
    pub agriculture: AgricultureRule,
    pub industry: IndustryRule,
}

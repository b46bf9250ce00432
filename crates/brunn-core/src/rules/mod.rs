pub mod builtin;
pub mod schema;

use crate::error::BrunnError;
use rust_decimal::Decimal;
use schema::{ExtendedRuleSet, SimpleRuleSet};
use std::path::Path;

/// Load a simple (manual) rule set from a JSON file.
pub fn load_simple(path: &Path) -> Result<SimpleRuleSet, BrunnError> {
    let content = read_rule_file(path)?;
    let ruleset: SimpleRuleSet =
        serde_json::from_str(&content).map_err(|e| BrunnError::RuleSetLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_simple(&ruleset)?;
    Ok(ruleset)
}

/// Load an extended (screening) rule set from a JSON file.
pub fn load_extended(path: &Path) -> Result<ExtendedRuleSet, BrunnError> {
    let content = read_rule_file(path)?;
    let ruleset: ExtendedRuleSet =
        serde_json::from_str(&content).map_err(|e| BrunnError::RuleSetLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    validate_extended(&ruleset)?;
    Ok(ruleset)
}

/// Parse a simple rule set from a JSON string (no file path context).
pub fn parse_simple_str(json: &str) -> Result<SimpleRuleSet, BrunnError> {
    let ruleset: SimpleRuleSet = serde_json::from_str(json).map_err(BrunnError::Json)?;
    validate_simple(&ruleset)?;
    Ok(ruleset)
}

/// Parse an extended rule set from a JSON string (no file path context).
pub fn parse_extended_str(json: &str) -> Result<ExtendedRuleSet, BrunnError> {
    let ruleset: ExtendedRuleSet = serde_json::from_str(json).map_err(BrunnError::Json)?;
    validate_extended(&ruleset)?;
    Ok(ruleset)
}

fn read_rule_file(path: &Path) -> Result<String, BrunnError> {
    std::fs::read_to_string(path).map_err(|e| BrunnError::RuleSetLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Validate that a simple rule set is well-formed.
pub fn validate_simple(ruleset: &SimpleRuleSet) -> Result<(), BrunnError> {
    if ruleset.name.is_empty() {
        return Err(BrunnError::RuleSetInvalid("name must not be empty".into()));
    }
    check_ph_window(ruleset.ph_min, ruleset.ph_max)?;
    check_threshold("hardness_max", ruleset.hardness_max)?;
    Ok(())
}

/// Validate that an extended rule set is well-formed.
pub fn validate_extended(ruleset: &ExtendedRuleSet) -> Result<(), BrunnError> {
    if ruleset.name.is_empty() {
        return Err(BrunnError::RuleSetInvalid("name must not be empty".into()));
    }
    check_ph_window(ruleset.drinking.ph_min, ruleset.drinking.ph_max)?;
    check_ph_bound("agriculture.ph_min", ruleset.agriculture.ph_min)?;
    check_threshold("agriculture.sulfate_max", ruleset.agriculture.sulfate_max)?;
    check_threshold(
        "agriculture.conductivity_max",
        ruleset.agriculture.conductivity_max,
    )?;
    check_threshold("industry.hardness_max", ruleset.industry.hardness_max)?;
    check_threshold(
        "industry.conductivity_max",
        ruleset.industry.conductivity_max,
    )?;
    Ok(())
}

fn check_ph_window(min: Decimal, max: Decimal) -> Result<(), BrunnError> {
    check_ph_bound("ph_min", min)?;
    check_ph_bound("ph_max", max)?;
    if min > max {
        return Err(BrunnError::RuleSetInvalid(format!(
            "ph_min {min} exceeds ph_max {max}"
        )));
    }
    Ok(())
}

fn check_ph_bound(label: &str, value: Decimal) -> Result<(), BrunnError> {
    if value < Decimal::ZERO || value > Decimal::from(14) {
        return Err(BrunnError::RuleSetInvalid(format!(
            "{label} {value} outside the pH scale [0, 14]"
        )));
    }
    Ok(())
}

fn check_threshold(label: &str, value: Decimal) -> Result<(), BrunnError> {
    if value < Decimal::ZERO {
        return Err(BrunnError::RuleSetInvalid(format!(
            "{label} must not be negative (got {value})"
        )));
    }
    Ok(())
}

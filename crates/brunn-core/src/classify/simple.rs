use crate::error::BrunnError;
use crate::model::{UsageCategory, WaterSample};
use crate::rules::schema::SimpleRuleSet;

/// Assign the dominant usage category under the simple rule set.
///
/// First matching rule wins, evaluated top to bottom:
/// 1. potable -> Drinking
/// 2. pH within [ph_min, ph_max] and hardness <= hardness_max -> Agriculture
/// 3. otherwise -> Industrial
///
/// All bounds are inclusive. Requires `ph`, `hardness` and `potability`.
pub fn classify_simple(
    sample: &WaterSample,
    rules: &SimpleRuleSet,
) -> Result<UsageCategory, BrunnError> {
    sample.validate()?;
    let potable = sample.require_potability()?;
    let ph = sample.require_ph()?;
    let hardness = sample.require_hardness()?;

    if potable {
        return Ok(UsageCategory::Drinking);
    }
    if ph >= rules.ph_min && ph <= rules.ph_max && hardness <= rules.hardness_max {
        return Ok(UsageCategory::Agriculture);
    }
    Ok(UsageCategory::Industrial)
}

/// Drinkability predicate: the potability label, nothing else.
///
/// Evaluated on its own, not derived from [`classify_simple`]'s chosen
/// category; a Drinking-classified sample and this predicate can disagree
/// with the agriculture predicate holding at the same time.
pub fn is_drinkable(sample: &WaterSample) -> Result<bool, BrunnError> {
    sample.validate()?;
    sample.require_potability()
}

/// Agriculture suitability predicate: pH window and hardness cap.
///
/// Also evaluated independently of the category assignment.
pub fn is_agriculture_suitable(
    sample: &WaterSample,
    rules: &SimpleRuleSet,
) -> Result<bool, BrunnError> {
    sample.validate()?;
    let ph = sample.require_ph()?;
    let hardness = sample.require_hardness()?;
    Ok(ph >= rules.ph_min && ph <= rules.ph_max && hardness <= rules.hardness_max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::builtin;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn sample(ph: Decimal, hardness: Decimal, potable: bool) -> WaterSample {
        WaterSample {
            ph: Some(ph),
            hardness: Some(hardness),
            potability: Some(potable),
            ..Default::default()
        }
    }

    #[test]
    fn test_potable_wins_regardless_of_ph_and_hardness() {
        let rules = builtin::manual();
        // Values far outside the agriculture window: potability still wins.
        let s = sample(dec!(2.0), dec!(450), true);
        assert_eq!(classify_simple(&s, &rules).unwrap(), UsageCategory::Drinking);
    }

    #[test]
    fn test_agriculture_window() {
        let rules = builtin::manual();
        let s = sample(dec!(7.0), dec!(150), false);
        assert_eq!(
            classify_simple(&s, &rules).unwrap(),
            UsageCategory::Agriculture
        );
    }

    #[test]
    fn test_industrial_fallback() {
        let rules = builtin::manual();
        let s = sample(dec!(5.0), dec!(600), false);
        assert_eq!(
            classify_simple(&s, &rules).unwrap(),
            UsageCategory::Industrial
        );
    }

    #[test]
    fn test_boundaries_inclusive() {
        let rules = builtin::manual();
        assert_eq!(
            classify_simple(&sample(dec!(6.5), dec!(300), false), &rules).unwrap(),
            UsageCategory::Agriculture
        );
        assert_eq!(
            classify_simple(&sample(dec!(8.5), dec!(300), false), &rules).unwrap(),
            UsageCategory::Agriculture
        );
    }

    #[test]
    fn test_just_below_ph_floor_is_industrial() {
        let rules = builtin::manual();
        assert_eq!(
            classify_simple(&sample(dec!(6.49), dec!(150), false), &rules).unwrap(),
            UsageCategory::Industrial
        );
    }

    #[test]
    fn test_hardness_above_cap_is_industrial() {
        let rules = builtin::manual();
        assert_eq!(
            classify_simple(&sample(dec!(7.0), dec!(300.1), false), &rules).unwrap(),
            UsageCategory::Industrial
        );
    }

    #[test]
    fn test_predicates_independent_of_category() {
        let rules = builtin::manual();
        // Classified Drinking, yet the agriculture predicate still holds:
        // predicates are evaluated on the sample, not on the category.
        let s = sample(dec!(7.0), dec!(150), true);
        assert_eq!(classify_simple(&s, &rules).unwrap(), UsageCategory::Drinking);
        assert!(is_drinkable(&s).unwrap());
        assert!(is_agriculture_suitable(&s, &rules).unwrap());
    }

    #[test]
    fn test_missing_potability_fails() {
        let rules = builtin::manual();
        let s = WaterSample {
            ph: Some(dec!(7.0)),
            hardness: Some(dec!(150)),
            ..Default::default()
        };
        assert!(matches!(
            classify_simple(&s, &rules),
            Err(BrunnError::MissingField {
                field: "potability"
            })
        ));
    }

    #[test]
    fn test_out_of_domain_ph_fails_before_classification() {
        let rules = builtin::manual();
        let s = sample(dec!(15), dec!(150), true);
        assert!(matches!(
            classify_simple(&s, &rules),
            Err(BrunnError::Validation { field: "ph", .. })
        ));
    }
}

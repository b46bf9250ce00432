use crate::error::BrunnError;
use crate::model::{UsageVerdict, WaterSample};
use crate::rules::schema::ExtendedRuleSet;

/// Evaluate the three extended suitability criteria for one sample.
///
/// `predicted_potable` is the external model's label for this sample; the
/// rule set never inspects the model itself. The three booleans are
/// computed independently from immutable inputs, so evaluation order
/// cannot change the result:
/// - drinking: pH within the drinking window AND predicted potable
/// - agriculture: pH >= floor, sulfate and conductivity under their caps
/// - industry: hardness and conductivity under their caps (no pH check)
///
/// Requires `ph`, `hardness`, `sulfate` and `conductivity`.
pub fn classify_extended(
    sample: &WaterSample,
    predicted_potable: bool,
    rules: &ExtendedRuleSet,
) -> Result<UsageVerdict, BrunnError> {
    sample.validate()?;
    let ph = sample.require_ph()?;
    let hardness = sample.require_hardness()?;
    let sulfate = sample.require_sulfate()?;
    let conductivity = sample.require_conductivity()?;

    let drinking_suitable =
        ph >= rules.drinking.ph_min && ph <= rules.drinking.ph_max && predicted_potable;

    let agriculture_suitable = ph >= rules.agriculture.ph_min
        && sulfate <= rules.agriculture.sulfate_max
        && conductivity <= rules.agriculture.conductivity_max;

    let industry_suitable = hardness <= rules.industry.hardness_max
        && conductivity <= rules.industry.conductivity_max;

    Ok(UsageVerdict {
        drinking_suitable,
        agriculture_suitable,
        industry_suitable,
    })
}

use crate::error::BrunnError;
use crate::model::WaterSample;
use rust_decimal::Decimal;

/// A potability prediction for one sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub potable: bool,
    /// Reported probability of potability. Carried through for display;
    /// no rule consumes it.
    pub probability: f64,
}

/// Capability interface over the external potability model.
///
/// The classifier treats the model as an opaque per-sample function and
/// never inspects its internals (feature engineering, scaling and the
/// like are the model pipeline's concern). Tests inject deterministic
/// stubs through this trait.
pub trait PotabilityModel {
    fn predict(&self, sample: &WaterSample) -> Result<Prediction, BrunnError>;

    /// Short model identifier for logs and output.
    fn name(&self) -> &str;
}

/// Built-in heuristic: potable iff pH falls within the drinking window.
///
/// This mirrors how the manual entry form labels samples when no trained
/// model is on hand.
#[derive(Debug, Clone)]
pub struct PhRangeModel {
    ph_min: Decimal,
    ph_max: Decimal,
}

impl PhRangeModel {
    pub fn new() -> Self {
        PhRangeModel {
            ph_min: Decimal::new(65, 1),
            ph_max: Decimal::new(85, 1),
        }
    }
}

impl Default for PhRangeModel {
    fn default() -> Self {
        Self::new()
    }
}

impl PotabilityModel for PhRangeModel {
    fn predict(&self, sample: &WaterSample) -> Result<Prediction, BrunnError> {
        let ph = sample.require_ph()?;
        let potable = ph >= self.ph_min && ph <= self.ph_max;
        Ok(Prediction {
            potable,
            probability: if potable { 1.0 } else { 0.0 },
        })
    }

    fn name(&self) -> &str {
        "ph-range"
    }
}

/// Available built-in model names.
pub const MODELS: &[&str] = &["ph-range"];

/// Resolve a model by name.
///
/// An unknown name is a `ModelUnavailable` hard failure: extended
/// classification cannot proceed without a model, while simple
/// classification never calls this.
pub fn load_model(name: &str) -> Result<Box<dyn PotabilityModel>, BrunnError> {
    match name {
        "ph-range" => Ok(Box::new(PhRangeModel::new())),
        _ => Err(BrunnError::ModelUnavailable(format!(
            "unknown model '{}'. Available: {}",
            name,
            MODELS.join(", ")
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample_with_ph(ph: Decimal) -> WaterSample {
        WaterSample {
            ph: Some(ph),
            ..Default::default()
        }
    }

    #[test]
    fn test_ph_range_potable_inside_window() {
        let model = PhRangeModel::new();
        let p = model.predict(&sample_with_ph(dec!(7.2))).unwrap();
        assert!(p.potable);
        assert_eq!(p.probability, 1.0);
    }

    #[test]
    fn test_ph_range_not_potable_outside_window() {
        let model = PhRangeModel::new();
        let p = model.predict(&sample_with_ph(dec!(5.0))).unwrap();
        assert!(!p.potable);
        assert_eq!(p.probability, 0.0);
    }

    #[test]
    fn test_ph_range_boundaries_inclusive() {
        let model = PhRangeModel::new();
        assert!(model.predict(&sample_with_ph(dec!(6.5))).unwrap().potable);
        assert!(model.predict(&sample_with_ph(dec!(8.5))).unwrap().potable);
    }

    #[test]
    fn test_ph_range_requires_ph() {
        let model = PhRangeModel::new();
        assert!(matches!(
            model.predict(&WaterSample::default()),
            Err(BrunnError::MissingField { field: "ph" })
        ));
    }

    #[test]
    fn test_load_known_model() {
        let model = load_model("ph-range").unwrap();
        assert_eq!(model.name(), "ph-range");
    }

    #[test]
    fn test_load_unknown_model_is_unavailable() {
        assert!(matches!(
            load_model("gradient-boost"),
            Err(BrunnError::ModelUnavailable(_))
        ));
    }
}

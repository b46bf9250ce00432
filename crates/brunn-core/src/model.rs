use crate::error::BrunnError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One water sample, as entered manually or read from one table row.
///
/// Every field is optional at construction time: which fields must be
/// present depends on the rule set being applied, and that check happens
/// at classification time. A missing field is never defaulted to zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WaterSample {
    /// Acidity/alkalinity, dimensionless, 0..=14.
    pub ph: Option<Decimal>,
    /// Calcium/magnesium content, mg/L.
    pub hardness: Option<Decimal>,
    /// Total dissolved solids, ppm.
    pub solids: Option<Decimal>,
    /// Disinfectant residue, ppm.
    pub chloramines: Option<Decimal>,
    /// Sulfate content, ppm.
    pub sulfate: Option<Decimal>,
    /// Electrical conductivity, uS/cm.
    pub conductivity: Option<Decimal>,
    pub organic_carbon: Option<Decimal>,
    pub trihalomethanes: Option<Decimal>,
    pub turbidity: Option<Decimal>,
    /// Ground-truth potability label, where the source table carries one.
    pub potability: Option<bool>,
}

impl WaterSample {
    /// Check every present field against its declared domain.
    ///
    /// pH must lie in [0, 14]; all other measurements must be
    /// non-negative. Absent fields pass (presence requirements belong to
    /// the rule set, not the sample).
    pub fn validate(&self) -> Result<(), BrunnError> {
        if let Some(ph) = self.ph {
            if ph < Decimal::ZERO || ph > Decimal::from(14) {
                return Err(BrunnError::Validation {
                    field: "ph",
                    value: ph.to_string(),
                    reason: "outside [0, 14]".into(),
                });
            }
        }

        let non_negative = [
            ("hardness", self.hardness),
            ("solids", self.solids),
            ("chloramines", self.chloramines),
            ("sulfate", self.sulfate),
            ("conductivity", self.conductivity),
            ("organic_carbon", self.organic_carbon),
            ("trihalomethanes", self.trihalomethanes),
            ("turbidity", self.turbidity),
        ];
        for (field, value) in non_negative {
            if let Some(v) = value {
                if v < Decimal::ZERO {
                    return Err(BrunnError::Validation {
                        field,
                        value: v.to_string(),
                        reason: "negative".into(),
                    });
                }
            }
        }

        Ok(())
    }

    pub fn require_ph(&self) -> Result<Decimal, BrunnError> {
        self.ph.ok_or(BrunnError::MissingField { field: "ph" })
    }

    pub fn require_hardness(&self) -> Result<Decimal, BrunnError> {
        self.hardness
            .ok_or(BrunnError::MissingField { field: "hardness" })
    }

    pub fn require_sulfate(&self) -> Result<Decimal, BrunnError> {
        self.sulfate
            .ok_or(BrunnError::MissingField { field: "sulfate" })
    }

    pub fn require_conductivity(&self) -> Result<Decimal, BrunnError> {
        self.conductivity.ok_or(BrunnError::MissingField {
            field: "conductivity",
        })
    }

    pub fn require_potability(&self) -> Result<bool, BrunnError> {
        self.potability
            .ok_or(BrunnError::MissingField { field: "potability" })
    }
}

/// Dominant licensed use for a sample under the simple rule set.
/// Mutually exclusive, first matching rule wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UsageCategory {
    Drinking,
    Agriculture,
    Industrial,
}

impl UsageCategory {
    /// Short usage description for display.
    pub fn blurb(&self) -> &'static str {
        match self {
            UsageCategory::Drinking => "Safe for human consumption",
            UsageCategory::Agriculture => "Suitable for irrigation",
            UsageCategory::Industrial => "Used for cooling, cleaning, etc.",
        }
    }
}

impl fmt::Display for UsageCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageCategory::Drinking => write!(f, "Drinking"),
            UsageCategory::Agriculture => write!(f, "Agriculture"),
            UsageCategory::Industrial => write!(f, "Industrial"),
        }
    }
}

/// Extended rule set result: three independent suitability verdicts.
/// Not mutually exclusive; any subset can hold at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageVerdict {
    pub drinking_suitable: bool,
    pub agriculture_suitable: bool,
    pub industry_suitable: bool,
}

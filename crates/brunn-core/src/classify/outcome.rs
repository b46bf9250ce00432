use crate::model::{UsageCategory, UsageVerdict, WaterSample};
use serde::{Deserialize, Serialize};

/// One successfully screened batch row (extended rule set).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningRow {
    /// Zero-based index in the input table, so results can be merged back
    /// in input order even if rows were evaluated out of order.
    pub row_index: usize,
    pub sample: WaterSample,
    /// The external model's potability label for this row.
    pub predicted_potable: bool,
    /// The model's reported probability of potability.
    pub probability: f64,
    pub verdict: UsageVerdict,
}

/// One successfully surveyed row of a labeled dataset (simple rule set).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyRow {
    pub row_index: usize,
    /// Mutually exclusive usage category.
    pub category: UsageCategory,
    /// Companion predicates, evaluated independently of the category.
    pub drinkable: bool,
    pub agriculture_suitable: bool,
}

/// A row that could not be classified. The batch continues past it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowFailure {
    pub row_index: usize,
    pub error: String,
}

/// Plain counts over the successfully screened rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub potable_count: usize,
    pub non_potable_count: usize,
    pub drinking_safe_count: usize,
    pub agriculture_safe_count: usize,
    pub industry_safe_count: usize,
}

impl BatchSummary {
    /// Tally a screening batch. `potable_count + non_potable_count` always
    /// equals the number of rows; the three suitability counts are
    /// independent of each other.
    pub fn from_rows(rows: &[ScreeningRow]) -> Self {
        let mut summary = BatchSummary::default();
        for row in rows {
            if row.predicted_potable {
                summary.potable_count += 1;
            } else {
                summary.non_potable_count += 1;
            }
            if row.verdict.drinking_suitable {
                summary.drinking_safe_count += 1;
            }
            if row.verdict.agriculture_suitable {
                summary.agriculture_safe_count += 1;
            }
            if row.verdict.industry_suitable {
                summary.industry_safe_count += 1;
            }
        }
        summary
    }
}

/// Usage category counts over a surveyed dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsageBreakdown {
    pub drinking: usize,
    pub agriculture: usize,
    pub industrial: usize,
}

impl UsageBreakdown {
    pub fn from_rows(rows: &[SurveyRow]) -> Self {
        let mut breakdown = UsageBreakdown::default();
        for row in rows {
            match row.category {
                UsageCategory::Drinking => breakdown.drinking += 1,
                UsageCategory::Agriculture => breakdown.agriculture += 1,
                UsageCategory::Industrial => breakdown.industrial += 1,
            }
        }
        breakdown
    }
}

/// Full result of screening one uploaded table with the extended rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreeningOutcome {
    pub rows: Vec<ScreeningRow>,
    pub failures: Vec<RowFailure>,
    pub summary: BatchSummary,
}

/// Full result of surveying a labeled dataset with the simple rule set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurveyOutcome {
    pub rows: Vec<SurveyRow>,
    pub failures: Vec<RowFailure>,
    pub breakdown: UsageBreakdown,
    /// Ground-truth label distribution over the surveyed rows.
    pub potable_count: usize,
    pub non_potable_count: usize,
}

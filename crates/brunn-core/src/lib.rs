pub mod classify;
pub mod error;
pub mod model;
pub mod parsing;
pub mod predict;
pub mod rules;

use classify::outcome::{
    BatchSummary, RowFailure, ScreeningOutcome, ScreeningRow, SurveyOutcome, SurveyRow,
    UsageBreakdown,
};
use error::BrunnError;
use model::{UsageCategory, WaterSample};
use parsing::SampleTable;
use predict::PotabilityModel;
use rules::schema::{ExtendedRuleSet, SimpleRuleSet};
use serde::{Deserialize, Serialize};

/// Result of a manual single-sample check: the mutually exclusive usage
/// category plus the two independently evaluated display predicates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    pub category: UsageCategory,
    pub drinkable: bool,
    pub agriculture_suitable: bool,
}

/// Classify one manually entered sample against the simple rule set.
///
/// Fails fast: any validation or missing-field error is returned
/// directly, nothing is partially populated.
pub fn check_sample(
    sample: &WaterSample,
    rules: &SimpleRuleSet,
) -> Result<CheckResult, BrunnError> {
    let category = classify::classify_simple(sample, rules)?;
    let drinkable = classify::is_drinkable(sample)?;
    let agriculture_suitable = classify::is_agriculture_suitable(sample, rules)?;
    Ok(CheckResult {
        category,
        drinkable,
        agriculture_suitable,
    })
}

/// Screen an uploaded CSV table with the extended rule set.
///
/// The schema check runs first: a table missing any required feature
/// column aborts before any row is classified. Per-row validation errors
/// fail only that row; the batch continues and failed row indices are
/// reported alongside the results. A model failure aborts the whole
/// batch, since no row can be screened without a prediction.
pub fn screen_csv(
    text: &str,
    model: &dyn PotabilityModel,
    rules: &ExtendedRuleSet,
) -> Result<ScreeningOutcome, BrunnError> {
    let table = parsing::parse_table(text)?;
    parsing::header::check_required(&table.columns, parsing::header::SCREENING_COLUMNS)?;

    let mut rows = Vec::new();
    let mut failures = Vec::new();
    for row_index in 0..table.row_count() {
        match screen_row(&table, row_index, model, rules) {
            Ok(row) => rows.push(row),
            Err(err @ BrunnError::ModelUnavailable(_)) => return Err(err),
            Err(err) => failures.push(RowFailure {
                row_index,
                error: err.to_string(),
            }),
        }
    }

    let summary = BatchSummary::from_rows(&rows);
    Ok(ScreeningOutcome {
        rows,
        failures,
        summary,
    })
}

fn screen_row(
    table: &SampleTable,
    row_index: usize,
    model: &dyn PotabilityModel,
    rules: &ExtendedRuleSet,
) -> Result<ScreeningRow, BrunnError> {
    let sample = table.sample(row_index)?;
    sample.validate()?;
    let prediction = model.predict(&sample)?;
    let verdict = classify::classify_extended(&sample, prediction.potable, rules)?;
    Ok(ScreeningRow {
        row_index,
        sample,
        predicted_potable: prediction.potable,
        probability: prediction.probability,
        verdict,
    })
}

/// Survey a labeled dataset CSV with the simple rule set.
///
/// Same isolation policy as [`screen_csv`]: schema problems abort before
/// any row, bad rows are skipped and reported, good rows are counted into
/// the usage breakdown and the potable/non-potable split.
pub fn survey_csv(text: &str, rules: &SimpleRuleSet) -> Result<SurveyOutcome, BrunnError> {
    let table = parsing::parse_table(text)?;
    parsing::header::check_required(&table.columns, parsing::header::SURVEY_COLUMNS)?;

    let mut rows = Vec::new();
    let mut failures = Vec::new();
    for row_index in 0..table.row_count() {
        match survey_row(&table, row_index, rules) {
            Ok(row) => rows.push(row),
            Err(err) => failures.push(RowFailure {
                row_index,
                error: err.to_string(),
            }),
        }
    }

    let breakdown = UsageBreakdown::from_rows(&rows);
    let potable_count = rows.iter().filter(|r| r.drinkable).count();
    let non_potable_count = rows.len() - potable_count;
    Ok(SurveyOutcome {
        rows,
        failures,
        breakdown,
        potable_count,
        non_potable_count,
    })
}

fn survey_row(
    table: &SampleTable,
    row_index: usize,
    rules: &SimpleRuleSet,
) -> Result<SurveyRow, BrunnError> {
    let sample = table.sample(row_index)?;
    let category = classify::classify_simple(&sample, rules)?;
    let drinkable = classify::is_drinkable(&sample)?;
    let agriculture_suitable = classify::is_agriculture_suitable(&sample, rules)?;
    Ok(SurveyRow {
        row_index,
        category,
        drinkable,
        agriculture_suitable,
    })
}

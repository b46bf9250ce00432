use crate::error::BrunnError;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Canonical column names, matching the `WaterSample` fields.
pub const PH: &str = "ph";
pub const HARDNESS: &str = "hardness";
pub const SOLIDS: &str = "solids";
pub const CHLORAMINES: &str = "chloramines";
pub const SULFATE: &str = "sulfate";
pub const CONDUCTIVITY: &str = "conductivity";
pub const ORGANIC_CARBON: &str = "organic_carbon";
pub const TRIHALOMETHANES: &str = "trihalomethanes";
pub const TURBIDITY: &str = "turbidity";
pub const POTABILITY: &str = "potability";

/// Columns a labeled-dataset survey needs: the simple rule set reads pH,
/// hardness and the ground-truth label.
pub const SURVEY_COLUMNS: &[&str] = &[PH, HARDNESS, POTABILITY];

/// Columns an uploaded screening table must carry: the full feature
/// vector the prediction model was trained on.
pub const SCREENING_COLUMNS: &[&str] = &[
    PH,
    HARDNESS,
    SOLIDS,
    CHLORAMINES,
    SULFATE,
    CONDUCTIVITY,
    ORGANIC_CARBON,
    TRIHALOMETHANES,
    TURBIDITY,
];

/// Normalize a raw column name to its canonical key.
///
/// Lowercases, collapses runs of non-alphanumeric characters to single
/// underscores, then resolves known aliases. Column naming varies across
/// exports ("ph", "pH", "Organic_carbon", "Organic_Carbon", ...); the
/// classifier should not care.
pub fn normalize_column(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();

    let mut normalized = String::with_capacity(lower.len());
    let mut prev_underscore = true; // skip leading separators
    for c in lower.chars() {
        if c.is_ascii_alphanumeric() {
            normalized.push(c);
            prev_underscore = false;
        } else if !prev_underscore {
            normalized.push('_');
            prev_underscore = true;
        }
    }
    if normalized.ends_with('_') {
        normalized.pop();
    }

    match ALIASES.get(normalized.as_str()) {
        Some(canonical) => canonical.to_string(),
        None => normalized,
    }
}

/// Check that every required column is present (post-normalization).
/// All missing columns are reported at once, before any row is touched.
pub fn check_required(columns: &[String], required: &[&str]) -> Result<(), BrunnError> {
    let mut missing: Vec<String> = required
        .iter()
        .filter(|req| !columns.iter().any(|c| c == *req))
        .map(|req| req.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        missing.sort();
        Err(BrunnError::SchemaMismatch { missing })
    }
}

static ALIASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Spellings seen in the wild for the survey dataset schema
    m.insert("ph_value", PH);
    m.insert("hardness_mg_l", HARDNESS);
    m.insert("total_dissolved_solids", SOLIDS);
    m.insert("tds", SOLIDS);
    m.insert("chloramine", CHLORAMINES);
    m.insert("sulphate", SULFATE);
    m.insert("electrical_conductivity", CONDUCTIVITY);
    m.insert("ec", CONDUCTIVITY);
    m.insert("toc", ORGANIC_CARBON);
    m.insert("organic_carbon_ppm", ORGANIC_CARBON);
    m.insert("thm", TRIHALOMETHANES);
    m.insert("thms", TRIHALOMETHANES);
    m.insert("potable", POTABILITY);

    m
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_case_insensitive() {
        assert_eq!(normalize_column("pH"), "ph");
        assert_eq!(normalize_column("Hardness"), "hardness");
        assert_eq!(normalize_column("Organic_carbon"), "organic_carbon");
        assert_eq!(normalize_column("Organic_Carbon"), "organic_carbon");
    }

    #[test]
    fn test_normalize_separators() {
        assert_eq!(normalize_column("Organic Carbon"), "organic_carbon");
        assert_eq!(normalize_column("  Organic--Carbon  "), "organic_carbon");
    }

    #[test]
    fn test_aliases() {
        assert_eq!(normalize_column("Sulphate"), "sulfate");
        assert_eq!(normalize_column("TDS"), "solids");
        assert_eq!(normalize_column("Potable"), "potability");
    }

    #[test]
    fn test_unknown_column_passes_through() {
        assert_eq!(normalize_column("Sample ID"), "sample_id");
    }

    #[test]
    fn test_check_required_ok() {
        let columns: Vec<String> = SCREENING_COLUMNS.iter().map(|s| s.to_string()).collect();
        assert!(check_required(&columns, SCREENING_COLUMNS).is_ok());
    }

    #[test]
    fn test_check_required_reports_all_missing_sorted() {
        let columns = vec!["ph".to_string(), "hardness".to_string()];
        let err =
            check_required(&columns, &["ph", "turbidity", "hardness", "sulfate"]).unwrap_err();
        match err {
            BrunnError::SchemaMismatch { missing } => {
                assert_eq!(missing, vec!["sulfate", "turbidity"]);
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }
}

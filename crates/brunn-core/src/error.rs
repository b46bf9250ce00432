use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum BrunnError {
    #[error("invalid {field}: {value} ({reason})")]
    Validation {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("missing required field '{field}'")]
    MissingField { field: &'static str },

    #[error("table is missing required columns: {}", .missing.join(", "))]
    SchemaMismatch { missing: Vec<String> },

    #[error("prediction model unavailable: {0}")]
    ModelUnavailable(String),

    #[error("failed to parse table: {0}")]
    Parse(String),

    #[error("failed to load rule set from {path}: {reason}")]
    RuleSetLoad { path: PathBuf, reason: String },

    #[error("invalid rule set: {0}")]
    RuleSetInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

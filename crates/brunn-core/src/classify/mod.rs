pub mod extended;
pub mod outcome;
pub mod simple;

pub use extended::classify_extended;
pub use outcome::{
    BatchSummary, RowFailure, ScreeningOutcome, ScreeningRow, SurveyOutcome, SurveyRow,
    UsageBreakdown,
};
pub use simple::{classify_simple, is_agriculture_suitable, is_drinkable};

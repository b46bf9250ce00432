use brunn_core::classify::outcome::{ScreeningOutcome, SurveyOutcome};
use rust_decimal::Decimal;

pub fn print_screening(
    outcome: &ScreeningOutcome,
    ruleset_name: &str,
    model_name: &str,
    show_all: bool,
) {
    println!("=== {} (model: {}) ===\n", ruleset_name, model_name);

    if show_all && !outcome.rows.is_empty() {
        println!(
            "  {:>4}  {:>6}  {:>8}  {:>8}  {:>8}  {:^7}  {:^5}  {:^5}  {:^5}",
            "row", "pH", "hardness", "sulfate", "cond", "potable", "drink", "agri", "ind"
        );
        for row in &outcome.rows {
            println!(
                "  {:>4}  {:>6}  {:>8}  {:>8}  {:>8}  {:^7}  {:^5}  {:^5}  {:^5}",
                row.row_index,
                fmt_opt(row.sample.ph),
                fmt_opt(row.sample.hardness),
                fmt_opt(row.sample.sulfate),
                fmt_opt(row.sample.conductivity),
                yes_no(row.predicted_potable),
                yes_no(row.verdict.drinking_suitable),
                yes_no(row.verdict.agriculture_suitable),
                yes_no(row.verdict.industry_suitable),
            );
        }
        println!();
    }

    let s = &outcome.summary;
    println!("  Rows screened:        {}", outcome.rows.len());
    println!("  Potable:              {}", s.potable_count);
    println!("  Non-potable:          {}", s.non_potable_count);
    println!("  Safe for drinking:    {}", s.drinking_safe_count);
    println!("  Safe for agriculture: {}", s.agriculture_safe_count);
    println!("  Safe for industry:    {}", s.industry_safe_count);

    print_failures(&outcome.failures);
}

pub fn print_survey(outcome: &SurveyOutcome, ruleset_name: &str, show_all: bool) {
    println!("=== {} ===\n", ruleset_name);

    if show_all && !outcome.rows.is_empty() {
        println!(
            "  {:>4}  {:<12}  {:^9}  {:^5}",
            "row", "category", "drinkable", "agri"
        );
        for row in &outcome.rows {
            println!(
                "  {:>4}  {:<12}  {:^9}  {:^5}",
                row.row_index,
                row.category.to_string(),
                yes_no(row.drinkable),
                yes_no(row.agriculture_suitable),
            );
        }
        println!();
    }

    println!("  Rows surveyed:  {}", outcome.rows.len());
    println!("  Drinking:       {}", outcome.breakdown.drinking);
    println!("  Agriculture:    {}", outcome.breakdown.agriculture);
    println!("  Industrial:     {}", outcome.breakdown.industrial);
    println!(
        "  Potable / non:  {} / {}",
        outcome.potable_count, outcome.non_potable_count
    );

    print_failures(&outcome.failures);
}

fn print_failures(failures: &[brunn_core::classify::outcome::RowFailure]) {
    if failures.is_empty() {
        return;
    }
    println!("\n  {} row(s) could not be classified:", failures.len());
    for failure in failures {
        println!("    row {}: {}", failure.row_index, failure.error);
    }
}

fn fmt_opt(value: Option<Decimal>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

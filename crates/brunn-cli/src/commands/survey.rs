use brunn_core::error::BrunnError;
use brunn_core::rules;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    rule_file: Option<PathBuf>,
    output_format: &str,
    show_all: bool,
) -> Result<(), BrunnError> {
    let ruleset = match rule_file {
        Some(path) => rules::load_simple(&path)?,
        None => rules::builtin::manual(),
    };

    let text = std::fs::read_to_string(&input_file)?;
    let outcome = brunn_core::survey_csv(&text, &ruleset)?;

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print_survey(&outcome, &ruleset.name, show_all),
    }

    Ok(())
}

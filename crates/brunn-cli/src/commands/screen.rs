use brunn_core::error::BrunnError;
use brunn_core::predict;
use brunn_core::rules;
use std::path::PathBuf;

use crate::output;

pub fn run(
    input_file: PathBuf,
    model_name: &str,
    rule_file: Option<PathBuf>,
    output_format: &str,
    show_all: bool,
) -> Result<(), BrunnError> {
    let ruleset = match rule_file {
        Some(path) => rules::load_extended(&path)?,
        None => rules::builtin::screening(),
    };

    let model = predict::load_model(model_name)?;
    let text = std::fs::read_to_string(&input_file)?;

    let outcome = brunn_core::screen_csv(&text, model.as_ref(), &ruleset)?;

    match output_format {
        "json" => output::json::print(&outcome)?,
        _ => output::table::print_screening(&outcome, &ruleset.name, model.name(), show_all),
    }

    Ok(())
}

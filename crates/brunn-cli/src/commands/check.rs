use brunn_core::error::BrunnError;
use brunn_core::model::WaterSample;
use brunn_core::predict::{PhRangeModel, PotabilityModel};
use brunn_core::rules;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::output;

pub struct CheckArgs {
    pub ph: Decimal,
    pub hardness: Decimal,
    pub solids: Option<Decimal>,
    pub chloramines: Option<Decimal>,
    pub sulfate: Option<Decimal>,
    pub conductivity: Option<Decimal>,
    pub potable: Option<bool>,
}

pub fn run(
    args: CheckArgs,
    rule_file: Option<PathBuf>,
    output_format: &str,
) -> Result<(), BrunnError> {
    let ruleset = match rule_file {
        Some(path) => rules::load_simple(&path)?,
        None => rules::builtin::manual(),
    };

    let mut sample = WaterSample {
        ph: Some(args.ph),
        hardness: Some(args.hardness),
        solids: args.solids,
        chloramines: args.chloramines,
        sulfate: args.sulfate,
        conductivity: args.conductivity,
        potability: args.potable,
        ..Default::default()
    };

    // No label supplied: fall back to the pH-range heuristic, the same
    // derivation the manual entry form uses.
    let mut derived_label = None;
    if sample.potability.is_none() {
        let model = PhRangeModel::new();
        let prediction = model.predict(&sample)?;
        sample.potability = Some(prediction.potable);
        derived_label = Some(model.name().to_string());
    }

    let result = brunn_core::check_sample(&sample, &ruleset)?;

    match output_format {
        "json" => output::json::print(&result)?,
        _ => {
            println!(
                "Water usage:  {} - {}.",
                result.category,
                result.category.blurb()
            );
            println!(
                "Drinking:     {}",
                if result.drinkable { "yes" } else { "no" }
            );
            println!(
                "Agriculture:  {}",
                if result.agriculture_suitable {
                    "yes"
                } else {
                    "no"
                }
            );
            if let Some(model_name) = derived_label {
                println!("(potability label derived via the {model_name} heuristic)");
            }
        }
    }

    Ok(())
}

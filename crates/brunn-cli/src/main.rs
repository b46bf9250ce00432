mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "brunn",
    version,
    about = "Water usage classification tool for potability survey data"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check one manually entered sample against the simple rule set
    Check {
        /// pH value, 0 to 14
        #[arg(long)]
        ph: Decimal,

        /// Hardness (mg/L)
        #[arg(long)]
        hardness: Decimal,

        /// Total dissolved solids (ppm)
        #[arg(long)]
        solids: Option<Decimal>,

        /// Chloramines (ppm)
        #[arg(long)]
        chloramines: Option<Decimal>,

        /// Sulfate (ppm)
        #[arg(long)]
        sulfate: Option<Decimal>,

        /// Conductivity (uS/cm)
        #[arg(long)]
        conductivity: Option<Decimal>,

        /// Known potability label; derived from pH when omitted
        #[arg(long)]
        potable: Option<bool>,

        /// Custom JSON rule file (simple rule set)
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,
    },
    /// Screen an uploaded CSV with the extended rule set and a model
    Screen {
        /// Path to CSV file with the nine feature columns
        input_file: PathBuf,

        /// Prediction model to use
        #[arg(short, long, default_value = "ph-range")]
        model: String,

        /// Custom JSON rule file (extended rule set)
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// List every row, not just the summary
        #[arg(long)]
        show_all: bool,
    },
    /// Survey a labeled dataset CSV with the simple rule set
    Survey {
        /// Path to CSV file with ph, Hardness and Potability columns
        input_file: PathBuf,

        /// Custom JSON rule file (simple rule set)
        #[arg(short, long = "rules", value_name = "FILE")]
        rules: Option<PathBuf>,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// List every row, not just the breakdown
        #[arg(long)]
        show_all: bool,
    },
    /// Manage and inspect rule sets
    Rules {
        #[command(subcommand)]
        action: RulesAction,
    },
}

#[derive(Subcommand)]
enum RulesAction {
    /// List predefined rule sets
    List,
    /// Explain a rule set in plain language
    Explain {
        /// Preset name (e.g., "manual")
        preset: String,
    },
    /// Validate a custom rule file
    Validate {
        /// Path to JSON rule file
        file: PathBuf,

        /// Which rule set schema the file should match
        #[arg(short, long, value_enum, default_value = "extended")]
        kind: RuleKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RuleKind {
    Simple,
    Extended,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            ph,
            hardness,
            solids,
            chloramines,
            sulfate,
            conductivity,
            potable,
            rules,
            output,
        } => commands::check::run(
            commands::check::CheckArgs {
                ph,
                hardness,
                solids,
                chloramines,
                sulfate,
                conductivity,
                potable,
            },
            rules,
            &output,
        ),
        Commands::Screen {
            input_file,
            model,
            rules,
            output,
            show_all,
        } => commands::screen::run(input_file, &model, rules, &output, show_all),
        Commands::Survey {
            input_file,
            rules,
            output,
            show_all,
        } => commands::survey::run(input_file, rules, &output, show_all),
        Commands::Rules { action } => match action {
            RulesAction::List => commands::rules::list(),
            RulesAction::Explain { preset } => commands::rules::explain(&preset),
            RulesAction::Validate { file, kind } => match kind {
                RuleKind::Simple => commands::rules::validate_simple(&file),
                RuleKind::Extended => commands::rules::validate_extended(&file),
            },
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

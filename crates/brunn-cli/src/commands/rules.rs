use brunn_core::error::BrunnError;
use brunn_core::rules::builtin::{self, Preset};
use std::path::Path;

pub fn list() -> Result<(), BrunnError> {
    println!("Available predefined rule sets:\n");
    for name in builtin::PRESETS {
        match builtin::load_preset(name)? {
            Preset::Manual(rs) => {
                println!("  {:<10} {} (v{})", name, rs.name, rs.version);
                if let Some(ref desc) = rs.description {
                    println!("             {}", desc);
                }
            }
            Preset::Screening(rs) => {
                println!("  {:<10} {} (v{})", name, rs.name, rs.version);
                if let Some(ref desc) = rs.description {
                    println!("             {}", desc);
                }
            }
        }
        println!();
    }
    Ok(())
}

pub fn explain(preset: &str) -> Result<(), BrunnError> {
    match builtin::load_preset(preset)? {
        Preset::Manual(rs) => {
            println!("{} (version {})\n", rs.name, rs.version);
            if let Some(ref desc) = rs.description {
                println!("{}\n", desc);
            }
            println!("Each sample gets exactly one category; the first matching");
            println!("rule wins:\n");
            println!("  1. Potable label set          -> Drinking");
            println!(
                "  2. pH in [{}, {}] and hardness <= {}  -> Agriculture",
                rs.ph_min, rs.ph_max, rs.hardness_max
            );
            println!("  3. Anything else              -> Industrial\n");
            println!("All bounds are inclusive. The drinking and agriculture");
            println!("display predicates are evaluated independently of the");
            println!("category, so a Drinking sample can still read as suitable");
            println!("for irrigation.");
        }
        Preset::Screening(rs) => {
            println!("{} (version {})\n", rs.name, rs.version);
            if let Some(ref desc) = rs.description {
                println!("{}\n", desc);
            }
            println!("Each row gets three independent yes/no verdicts; none of");
            println!("them excludes another:\n");
            println!(
                "  Drinking:     pH in [{}, {}] and the model predicts potable",
                rs.drinking.ph_min, rs.drinking.ph_max
            );
            println!(
                "  Agriculture:  pH >= {}, sulfate <= {}, conductivity <= {}",
                rs.agriculture.ph_min, rs.agriculture.sulfate_max, rs.agriculture.conductivity_max
            );
            println!(
                "  Industry:     hardness <= {}, conductivity <= {}",
                rs.industry.hardness_max, rs.industry.conductivity_max
            );
            println!();
            println!("Note: the industry check reads no pH and the agriculture");
            println!(
                "check reads no hardness. The agriculture pH floor ({}) is",
                rs.agriculture.ph_min
            );
            println!("looser than the manual rule set's; the two sets are kept");
            println!("separate on purpose.");
        }
    }
    Ok(())
}

pub fn validate_simple(file: &Path) -> Result<(), BrunnError> {
    let rs = brunn_core::rules::load_simple(file)?;
    println!(
        "OK: '{}' (v{}) is a valid simple rule set",
        rs.name, rs.version
    );
    Ok(())
}

pub fn validate_extended(file: &Path) -> Result<(), BrunnError> {
    let rs = brunn_core::rules::load_extended(file)?;
    println!(
        "OK: '{}' (v{}) is a valid extended rule set",
        rs.name, rs.version
    );
    Ok(())
}

use brunn_core::error::BrunnError;
use serde::Serialize;

pub fn print<T: Serialize>(value: &T) -> Result<(), BrunnError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

pub mod header;
pub mod values;

use crate::error::BrunnError;
use crate::model::WaterSample;

/// A parsed CSV table: normalized column names plus raw record cells.
/// Cell parsing into `WaterSample` fields happens per row so that one bad
/// cell fails one row, not the table.
#[derive(Debug, Clone)]
pub struct SampleTable {
    pub columns: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl SampleTable {
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    fn cell<'a>(&self, record: &'a [String], name: &str) -> Option<&'a str> {
        self.column_index(name).map(|i| record[i].as_str())
    }

    /// Build a `WaterSample` from one record.
    ///
    /// Absent columns and missing-value cells leave the field `None`;
    /// unparseable cells produce a `Validation` error naming the field.
    pub fn sample(&self, row_index: usize) -> Result<WaterSample, BrunnError> {
        let record = self
            .records
            .get(row_index)
            .ok_or_else(|| BrunnError::Parse(format!("row {} out of range", row_index)))?;

        if record.len() != self.columns.len() {
            return Err(BrunnError::Parse(format!(
                "row {} has {} fields, expected {}",
                row_index,
                record.len(),
                self.columns.len()
            )));
        }

        let mut sample = WaterSample {
            ph: self.decimal_field(record, header::PH)?,
            hardness: self.decimal_field(record, header::HARDNESS)?,
            solids: self.decimal_field(record, header::SOLIDS)?,
            chloramines: self.decimal_field(record, header::CHLORAMINES)?,
            sulfate: self.decimal_field(record, header::SULFATE)?,
            conductivity: self.decimal_field(record, header::CONDUCTIVITY)?,
            organic_carbon: self.decimal_field(record, header::ORGANIC_CARBON)?,
            trihalomethanes: self.decimal_field(record, header::TRIHALOMETHANES)?,
            turbidity: self.decimal_field(record, header::TURBIDITY)?,
            potability: None,
        };

        if let Some(cell) = self.cell(record, header::POTABILITY) {
            sample.potability =
                values::parse_potability_cell(cell).map_err(|_| BrunnError::Validation {
                    field: header::POTABILITY,
                    value: cell.trim().to_string(),
                    reason: "not a 0/1 or true/false label".into(),
                })?;
        }

        Ok(sample)
    }

    fn decimal_field(
        &self,
        record: &[String],
        name: &'static str,
    ) -> Result<Option<rust_decimal::Decimal>, BrunnError> {
        match self.cell(record, name) {
            None => Ok(None),
            Some(cell) => {
                values::parse_decimal_cell(cell).map_err(|_| BrunnError::Validation {
                    field: name,
                    value: cell.trim().to_string(),
                    reason: "not a number".into(),
                })
            }
        }
    }
}

/// Parse CSV text into a `SampleTable`.
///
/// The first non-blank line is the header; its names are normalized via
/// [`header::normalize_column`]. Blank lines elsewhere are skipped.
/// Fields may be double-quoted; doubled quotes inside a quoted field
/// escape a literal quote.
pub fn parse_table(text: &str) -> Result<SampleTable, BrunnError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let header_line = lines
        .next()
        .ok_or_else(|| BrunnError::Parse("empty table: no header line".into()))?;

    let columns: Vec<String> = split_record(header_line)
        .iter()
        .map(|c| header::normalize_column(c))
        .collect();

    if columns.iter().all(|c| c.is_empty()) {
        return Err(BrunnError::Parse("header line has no column names".into()));
    }

    let records: Vec<Vec<String>> = lines.map(|line| split_record(line)).collect();

    Ok(SampleTable { columns, records })
}

/// Split one CSV line into fields, honoring double quotes.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_split_plain_record() {
        assert_eq!(split_record("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(split_record(r#""a,b",c"#), vec!["a,b", "c"]);
    }

    #[test]
    fn test_split_escaped_quote() {
        assert_eq!(split_record(r#""say ""hi""",x"#), vec![r#"say "hi""#, "x"]);
    }

    #[test]
    fn test_split_trailing_empty_field() {
        assert_eq!(split_record("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_parse_table_normalizes_header() {
        let table = parse_table("pH,Hardness,Potability\n7.0,150,1\n").unwrap();
        assert_eq!(table.columns, vec!["ph", "hardness", "potability"]);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_parse_table_skips_blank_lines() {
        let table = parse_table("ph,hardness\n\n7.0,150\n\n6.0,200\n").unwrap();
        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn test_empty_input_is_parse_error() {
        assert!(matches!(parse_table("  \n \n"), Err(BrunnError::Parse(_))));
    }

    #[test]
    fn test_sample_from_row() {
        let table = parse_table("pH,Hardness,Sulfate,Potability\n7.2,150,200,1\n").unwrap();
        let s = table.sample(0).unwrap();
        assert_eq!(s.ph, Some(dec!(7.2)));
        assert_eq!(s.hardness, Some(dec!(150)));
        assert_eq!(s.sulfate, Some(dec!(200)));
        assert_eq!(s.potability, Some(true));
        assert_eq!(s.turbidity, None);
    }

    #[test]
    fn test_missing_cell_stays_none() {
        let table = parse_table("ph,hardness,sulfate\n7.2,150,\n").unwrap();
        let s = table.sample(0).unwrap();
        assert_eq!(s.sulfate, None);
    }

    #[test]
    fn test_bad_cell_names_field() {
        let table = parse_table("ph,hardness\nseven,150\n").unwrap();
        match table.sample(0).unwrap_err() {
            BrunnError::Validation { field, value, .. } => {
                assert_eq!(field, "ph");
                assert_eq!(value, "seven");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_ragged_row_is_error() {
        let table = parse_table("ph,hardness\n7.0\n").unwrap();
        assert!(matches!(table.sample(0), Err(BrunnError::Parse(_))));
    }
}

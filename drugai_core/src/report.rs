//! Rendering calculator results as text, JSON or CSV.

use crate::{ClearanceTable, Error, Result, CLEARANCE_DISCLAIMER};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// Output format for calculator results
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Format {
    #[default]
    Text,
    Json,
    Csv,
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            other => Err(Error::Other(format!(
                "Unknown format: {} (expected text, json or csv)",
                other
            ))),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Format::Text => "text",
            Format::Json => "json",
            Format::Csv => "csv",
        };
        f.write_str(name)
    }
}

#[derive(Serialize)]
struct BmiRecord<'a> {
    bmi: &'a str,
}

/// Write a BMI result (possibly empty) in the given format
pub fn write_bmi<W: Write>(out: &mut W, bmi: &str, format: Format) -> Result<()> {
    match format {
        Format::Text => writeln!(out, "Your BMI is: {}", bmi)?,
        Format::Json => {
            serde_json::to_writer(&mut *out, &BmiRecord { bmi })?;
            writeln!(out)?;
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            writer.serialize(BmiRecord { bmi })?;
            writer.flush()?;
        }
    }
    Ok(())
}

/// Write a clearance table in the given format
///
/// The disclaimer is only part of the text format.
pub fn write_clearance<W: Write>(
    out: &mut W,
    table: &ClearanceTable,
    format: Format,
    show_disclaimer: bool,
) -> Result<()> {
    match format {
        Format::Text => {
            for entry in table {
                writeln!(out, "{} - {}", entry.percentage, entry.time)?;
            }
            if show_disclaimer {
                writeln!(out)?;
                writeln!(out, "{}", CLEARANCE_DISCLAIMER)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, table)?;
            writeln!(out)?;
        }
        Format::Csv => {
            let mut writer = csv::Writer::from_writer(&mut *out);
            for entry in table {
                writer.serialize(entry)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

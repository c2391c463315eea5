//! Output formatting for CLI results

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod display;
pub mod formatters;
pub mod json;
pub mod table;

/// Render rows as a table or as JSON tagged with the path that produced them
pub fn format_rows<T>(rows: &[T], path: Option<&str>, format: OutputFormat) -> Result<String>
where
    T: tabled::Tabled + Serialize,
{
    match format {
        OutputFormat::Table => Ok(table::format_table(rows)),
        OutputFormat::Json => Ok(json::format_json(rows, path)?),
    }
}

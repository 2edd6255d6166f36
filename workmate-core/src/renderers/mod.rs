/// Renderers for report results
///
/// Each renderer turns a report's column labels and ranked rows into the
/// text written to standard output.
pub mod csv;
pub mod json;
pub mod table;

pub use self::csv::render_csv;
pub use self::json::render_json;
pub use self::table::render_table;

use crate::report::ReportColumns;
use crate::types::{OutputFormat, ResultRow};
use crate::WorkmateResult;

/// Render rows in the requested format
pub fn render(format: OutputFormat, columns: &ReportColumns, rows: &[ResultRow]) -> WorkmateResult<String> {
    match format {
        OutputFormat::Table => Ok(render_table(columns, rows)),
        OutputFormat::Json => render_json(columns, rows),
        OutputFormat::Csv => render_csv(columns, rows),
    }
}

/// CSV renderer for report results
use crate::report::ReportColumns;
use crate::types::ResultRow;
use crate::{WorkmateError, WorkmateResult};

/// Render rows as CSV with a `rank,<key>,<value>` header
pub fn render_csv(columns: &ReportColumns, rows: &[ResultRow]) -> WorkmateResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(["rank", columns.key.as_str(), columns.value.as_str()])
        .map_err(serialization)?;
    for row in rows {
        writer
            .write_record([row.rank.to_string(), row.key.clone(), row.formatted_value()])
            .map_err(serialization)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| WorkmateError::Serialization(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| WorkmateError::Serialization(e.to_string()))
}

fn serialization(err: csv::Error) -> WorkmateError {
    WorkmateError::Serialization(err.to_string())
}

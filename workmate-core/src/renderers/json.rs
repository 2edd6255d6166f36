/// JSON renderer for report results
use crate::report::ReportColumns;
use crate::types::ResultRow;
use crate::WorkmateResult;
use serde_json::{json, Map, Value};

/// Render rows as a JSON array of `{rank, <key>, <value>}` objects
pub fn render_json(columns: &ReportColumns, rows: &[ResultRow]) -> WorkmateResult<String> {
    let objects: Vec<Value> = rows
        .iter()
        .map(|row| {
            let mut object = Map::new();
            object.insert("rank".to_string(), json!(row.rank));
            object.insert(columns.key.clone(), json!(row.key));
            object.insert(columns.value.clone(), json!(row.value));
            Value::Object(object)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&objects)?)
}

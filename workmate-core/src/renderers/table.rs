/// Bordered text table renderer
use crate::report::ReportColumns;
use crate::types::ResultRow;
use comfy_table::presets::ASCII_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table};

/// Create a table with our preferred styling
pub fn create_standard_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Render rows as a bordered table with a `("", key, value)` header
pub fn render_table(columns: &ReportColumns, rows: &[ResultRow]) -> String {
    let mut table = create_standard_table();
    table.set_header(columns.headers());

    for row in rows {
        table.add_row(vec![
            row.rank.to_string(),
            row.key.clone(),
            row.formatted_value(),
        ]);
    }

    // Rank and value are numeric
    for index in [0, 2] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    table.to_string()
}

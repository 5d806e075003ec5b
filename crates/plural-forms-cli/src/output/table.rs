//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use plural_forms::CategoryList;

/// One locale's row in the category table.
pub struct LocaleRow<'a> {
    /// Locale as requested (or the table key when listing everything).
    pub locale: &'a str,
    /// Table key that served the locale.
    pub resolved: &'a str,
    pub categories: &'a CategoryList,
}

/// Format category lists as an ASCII table, one column per form index.
pub fn format_category_table(rows: &[LocaleRow<'_>]) -> Table {
    let width = rows.iter().map(|row| row.categories.len()).max().unwrap_or(0);

    let mut header = vec!["Locale".to_string(), "Forms".to_string()];
    header.extend((0..width).map(|index| index.to_string()));

    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);

    for row in rows {
        let locale = if row.locale == row.resolved {
            row.locale.to_string()
        } else {
            format!("{} -> {}", row.locale, row.resolved)
        };
        let mut cells = vec![locale, row.categories.len().to_string()];
        cells.extend(row.categories.names().into_iter().map(str::to_string));
        table.add_row(cells);
    }

    table
}

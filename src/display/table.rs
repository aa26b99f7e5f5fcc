//! Table rendering on top of `tabled`

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Render rows as a rounded table, or `empty` when there are none
pub fn render_table<T: Tabled>(rows: Vec<T>, empty: &str) -> String {
    if rows.is_empty() {
        return empty.to_string();
    }

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

//! Human-readable rendering of a grouped diff.

use crate::diff::model::GroupCountTable;
use diffgroup_core_types::schema::{COLUMN_COUNT, COLUMN_GROUP, COLUMN_INDICES};

/// Render a [`GroupCountTable`] as an aligned text table.
///
/// ```text
/// group  count  indices
/// ---------------------
/// [B]        2  [1, 2]
/// [C]        1  [3]
/// ```
///
/// Informational only; the structured table is the source of truth.
pub fn render_summary(table: &GroupCountTable) -> String {
    if table.is_empty() {
        return "No differing rows.\n".to_string();
    }

    let rows: Vec<(String, String, String)> = table
        .iter()
        .map(|g| {
            (
                g.group.to_string(),
                g.count.to_string(),
                format_indices(&g.indices),
            )
        })
        .collect();

    let group_w = width(COLUMN_GROUP, rows.iter().map(|r| &r.0));
    let count_w = width(COLUMN_COUNT, rows.iter().map(|r| &r.1));
    let indices_w = width(COLUMN_INDICES, rows.iter().map(|r| &r.2));

    let mut out = String::new();
    out.push_str(&format!(
        "{:<group_w$}  {:>count_w$}  {}\n",
        COLUMN_GROUP, COLUMN_COUNT, COLUMN_INDICES
    ));
    out.push_str(&"-".repeat(group_w + count_w + indices_w + 4));
    out.push('\n');
    for (group, count, indices) in &rows {
        out.push_str(&format!("{:<group_w$}  {:>count_w$}  {}\n", group, count, indices));
    }
    out
}

fn width<'a>(header: &str, cells: impl Iterator<Item = &'a String>) -> usize {
    cells.map(|c| c.len()).fold(header.len(), usize::max)
}

fn format_indices(indices: &[usize]) -> String {
    let parts: Vec<String> = indices.iter().map(|i| i.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

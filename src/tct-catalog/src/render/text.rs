//! Plain-text table output, aligned by display width.

use unicode_width::UnicodeWidthStr;

use super::FeatureTable;

const COLUMN_GAP: &str = " | ";

pub(super) fn table(table: &FeatureTable) -> String {
    let rows: Vec<[String; 8]> = table
        .rows()
        .iter()
        .map(|row| row.cells().map(single_line))
        .collect();

    let header = *table.header();
    let mut widths = header.map(|label| label.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(rule.join("-+-").trim_end());
    out.push('\n');
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 8]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        let cell = cell.as_ref();
        line.push_str(cell);
        line.extend(std::iter::repeat_n(' ', width.saturating_sub(cell.width())));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

// Cells must not break the row layout.
fn single_line(cell: &str) -> String {
    cell.split(['\r', '\n']).collect::<Vec<_>>().join(" ")
}

//! HTML table output.

use std::fmt::Write;

use super::{FeatureRow, FeatureTable, LinkCell};

const COLUMNS_CELL_STYLE: &str = "width: 200px";

/// Escape text for use in HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub(super) fn table(table: &FeatureTable) -> String {
    let mut out = String::new();
    out.push_str("<table>\n  <thead>\n    <tr>\n");
    for label in table.header() {
        let _ = writeln!(out, "      <th>{}</th>", escape_html(label));
    }
    out.push_str("    </tr>\n  </thead>\n  <tbody>\n");
    for row in table.rows() {
        push_row(&mut out, row);
    }
    out.push_str("  </tbody>\n</table>\n");
    out
}

fn push_row(out: &mut String, row: &FeatureRow) {
    out.push_str("    <tr>\n");
    push_cell(out, "feature-name", None, &row.name);
    push_cell(out, "desc", None, &row.description);
    push_cell(out, "norm", Some(COLUMNS_CELL_STYLE), &row.columns);
    push_cell(out, "norm", Some(COLUMNS_CELL_STYLE), &row.file);
    push_cell(out, "norm", None, &row.level);
    push_cell(out, "norm", None, &row.semantic_grouping);
    push_cell(out, "desc", None, &row.references);
    let _ = writeln!(out, "      <td class=\"norm\">{}</td>", link(&row.wiki_link));
    out.push_str("    </tr>\n");
}

fn push_cell(out: &mut String, class: &str, style: Option<&str>, text: &str) {
    match style {
        Some(style) => {
            let _ = writeln!(
                out,
                "      <td class=\"{class}\" style=\"{style}\">{}</td>",
                escape_html(text)
            );
        }
        None => {
            let _ = writeln!(out, "      <td class=\"{class}\">{}</td>", escape_html(text));
        }
    }
}

// An inert link carries no href.
fn link(cell: &LinkCell) -> String {
    let href = cell
        .href
        .as_deref()
        .map(|href| format!(" href=\"{}\"", escape_html(href)))
        .unwrap_or_default();
    format!(
        "<a{href} target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape_html(&cell.label)
    )
}

//! Projection of a [`FeatureCatalog`] into a fixed eight-column table.
//!
//! [`render`] is pure: it never fails, never mutates the catalog, and gives
//! every absent field a defined display value. The header row is fixed and
//! independent of catalog content.

mod html;
mod text;

pub use html::escape_html;

use crate::model::{FeatureCatalog, FeatureRecord};

/// Header labels, in display order.
pub const HEADERS: [&str; 8] = [
    "Feature",
    "Description",
    "Columns",
    "File",
    "Level",
    "Semantic Grouping",
    "References",
    "Wiki Link",
];

/// Shown in the Columns cell when a record lists no columns.
pub const COLUMNS_PLACEHOLDER: &str = "N/A";

/// Separator between column names.
pub const COLUMNS_SEPARATOR: &str = ", ";

/// Hyperlink cell. `href` is `None` for an inert link.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkCell {
    pub href: Option<String>,
    pub label: String,
}

impl LinkCell {
    fn from_target(target: Option<&str>) -> Self {
        match target {
            Some(url) => Self {
                href: Some(url.to_string()),
                label: url.to_string(),
            },
            None => Self::default(),
        }
    }

    pub fn is_inert(&self) -> bool {
        self.href.is_none()
    }
}

/// One rendered data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRow {
    pub name: String,
    pub description: String,
    pub columns: String,
    pub file: String,
    pub level: String,
    pub semantic_grouping: String,
    pub references: String,
    pub wiki_link: LinkCell,
}

impl FeatureRow {
    pub fn from_record(record: &FeatureRecord) -> Self {
        let columns = match &record.columns {
            Some(columns) => columns.join(COLUMNS_SEPARATOR),
            None => COLUMNS_PLACEHOLDER.to_string(),
        };

        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            columns,
            file: record.file.clone().unwrap_or_default(),
            level: record.level.clone().unwrap_or_default(),
            semantic_grouping: record.semantic_grouping.clone().unwrap_or_default(),
            references: record.references.clone().unwrap_or_default(),
            wiki_link: LinkCell::from_target(record.wiki_link.as_deref()),
        }
    }

    /// Display text of each cell, in [`HEADERS`] order.
    pub fn cells(&self) -> [&str; 8] {
        [
            self.name.as_str(),
            self.description.as_str(),
            self.columns.as_str(),
            self.file.as_str(),
            self.level.as_str(),
            self.semantic_grouping.as_str(),
            self.references.as_str(),
            self.wiki_link.label.as_str(),
        ]
    }
}

/// Rendered table: fixed header plus one row per catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureTable {
    rows: Vec<FeatureRow>,
}

impl FeatureTable {
    pub fn header(&self) -> &'static [&'static str; 8] {
        &HEADERS
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn to_html(&self) -> String {
        html::table(self)
    }

    pub fn to_text(&self) -> String {
        text::table(self)
    }
}

/// Render a catalog. Rows follow catalog iteration order.
pub fn render(catalog: &FeatureCatalog) -> FeatureTable {
    FeatureTable {
        rows: catalog.iter().map(FeatureRow::from_record).collect(),
    }
}

//! Feature catalog data model.
//!
//! The endpoint returns a JSON object keyed by feature name. Values are
//! third-party maintained and loosely shaped, so every field except the name
//! is optional and decoded leniently: a field of an unexpected type reads as
//! absent instead of failing the whole document.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::CatalogResult;

/// One named feature's metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureRecord {
    /// Catalog key. Never empty.
    pub name: String,
    pub description: String,
    pub columns: Option<Vec<String>>,
    pub file: Option<String>,
    pub level: Option<String>,
    pub semantic_grouping: Option<String>,
    pub references: Option<String>,
    pub wiki_link: Option<String>,
}

impl FeatureRecord {
    /// Create a record with only a name and description.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Decode a catalog value. Values that are not objects yield a record
    /// with every optional field absent.
    pub fn from_value(name: impl Into<String>, value: &Value) -> Self {
        Self {
            name: name.into(),
            description: text_field(value, "description").unwrap_or_default(),
            columns: columns_field(value),
            file: text_field(value, "file"),
            level: text_field(value, "level"),
            semantic_grouping: text_field(value, "semantic_grouping"),
            references: text_field(value, "references"),
            wiki_link: text_field(value, "wiki_link"),
        }
    }

    pub fn with_columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.columns = Some(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = Some(level.into());
        self
    }

    pub fn with_semantic_grouping(mut self, grouping: impl Into<String>) -> Self {
        self.semantic_grouping = Some(grouping.into());
        self
    }

    pub fn with_references(mut self, references: impl Into<String>) -> Self {
        self.references = Some(references.into());
        self
    }

    pub fn with_wiki_link(mut self, link: impl Into<String>) -> Self {
        self.wiki_link = Some(link.into());
        self
    }
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn columns_field(value: &Value) -> Option<Vec<String>> {
    match value.get("columns")? {
        Value::Array(items) => Some(items.iter().map(column_name).collect()),
        Value::String(single) => Some(vec![single.clone()]),
        _ => None,
    }
}

fn column_name(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Ordered mapping from feature name to record.
///
/// Iteration follows the order of the source document. A repeated key keeps
/// its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "IndexMap<String, Value>")]
pub struct FeatureCatalog {
    records: IndexMap<String, FeatureRecord>,
}

impl FeatureCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a response body. The top level must be a JSON object.
    pub fn from_json_slice(body: &[u8]) -> CatalogResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn from_json_str(body: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// Insert or replace a record. Replacing keeps the original position.
    /// Records with an empty name are ignored.
    pub fn insert(&mut self, record: FeatureRecord) {
        if record.name.is_empty() {
            tracing::warn!("Ignoring feature record with an empty name");
            return;
        }
        self.records.insert(record.name.clone(), record);
    }

    pub fn get(&self, name: &str) -> Option<&FeatureRecord> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &FeatureRecord> {
        self.records.values()
    }

    /// Feature names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

impl From<IndexMap<String, Value>> for FeatureCatalog {
    fn from(entries: IndexMap<String, Value>) -> Self {
        entries
            .iter()
            .map(|(name, value)| FeatureRecord::from_value(name.as_str(), value))
            .collect()
    }
}

impl FromIterator<FeatureRecord> for FeatureCatalog {
    fn from_iter<T: IntoIterator<Item = FeatureRecord>>(iter: T) -> Self {
        let mut catalog = Self::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

impl<'a> IntoIterator for &'a FeatureCatalog {
    type Item = &'a FeatureRecord;
    type IntoIter = indexmap::map::Values<'a, String, FeatureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_record() {
        let catalog = FeatureCatalog::from_json_str(
            r#"{
                "positivity_bert": {
                    "description": "Sentiment of each message",
                    "columns": ["positive_bert", "negative_bert"],
                    "file": "get_sentiment.py",
                    "level": "Utterance",
                    "semantic_grouping": "Emotion",
                    "references": "Hugging Face (2021)",
                    "wiki_link": "https://example.org/wiki/positivity"
                }
            }"#,
        )
        .unwrap();

        let record = catalog.get("positivity_bert").unwrap();
        assert_eq!(
            record,
            &FeatureRecord::new("positivity_bert", "Sentiment of each message")
                .with_columns(["positive_bert", "negative_bert"])
                .with_file("get_sentiment.py")
                .with_level("Utterance")
                .with_semantic_grouping("Emotion")
                .with_references("Hugging Face (2021)")
                .with_wiki_link("https://example.org/wiki/positivity")
        );
    }

    #[test]
    fn test_order_follows_document() {
        let catalog =
            FeatureCatalog::from_json_str(r#"{"zeta": {}, "alpha": {}, "mid": {}}"#).unwrap();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_duplicate_key_keeps_first_position_last_value() {
        let catalog = FeatureCatalog::from_json_str(
            r#"{"a": {"description": "first"}, "b": {}, "a": {"description": "second"}}"#,
        )
        .unwrap();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(catalog.get("a").unwrap().description, "second");
    }

    #[test]
    fn test_missing_fields_are_absent() {
        let catalog = FeatureCatalog::from_json_str(r#"{"bare": {}}"#).unwrap();
        assert_eq!(catalog.get("bare").unwrap(), &FeatureRecord::new("bare", ""));
    }

    #[test]
    fn test_non_object_values_become_empty_records() {
        let catalog =
            FeatureCatalog::from_json_str(r#"{"n": null, "s": "text", "x": [1, 2]}"#).unwrap();
        assert_eq!(catalog.len(), 3);
        for record in &catalog {
            assert_eq!(record.description, "");
            assert!(record.columns.is_none());
        }
    }

    #[test]
    fn test_mistyped_fields_are_lenient() {
        let catalog = FeatureCatalog::from_json_str(
            r#"{"f": {
                "description": 42,
                "columns": ["a", null, 3, {"k": 1}],
                "file": {"nested": true},
                "level": false,
                "wiki_link": null
            }}"#,
        )
        .unwrap();
        let record = catalog.get("f").unwrap();
        assert_eq!(record.description, "42");
        assert_eq!(
            record.columns.as_deref(),
            Some(&["a".to_string(), String::new(), "3".to_string(), r#"{"k":1}"#.to_string()][..])
        );
        assert_eq!(record.file, None);
        assert_eq!(record.level.as_deref(), Some("false"));
        assert_eq!(record.wiki_link, None);
    }

    #[test]
    fn test_string_columns_is_single_column() {
        let catalog = FeatureCatalog::from_json_str(r#"{"f": {"columns": "only"}}"#).unwrap();
        assert_eq!(
            catalog.get("f").unwrap().columns,
            Some(vec!["only".to_string()])
        );
    }

    #[test]
    fn test_empty_key_dropped() {
        let catalog = FeatureCatalog::from_json_str(r#"{"": {}, "kept": {}}"#).unwrap();
        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["kept"]);
    }

    #[test]
    fn test_top_level_must_be_object() {
        for body in ["[]", "null", "\"catalog\"", "7"] {
            let err = FeatureCatalog::from_json_str(body).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "body {body}");
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = FeatureCatalog::from_json_slice(b"<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn test_empty_object_is_empty_catalog() {
        let catalog = FeatureCatalog::from_json_str("{}").unwrap();
        assert!(catalog.is_empty());
    }
}

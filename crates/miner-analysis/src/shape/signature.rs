//! Depth-bounded, dot-qualified field signatures.
//!
//! A nested record is expanded into `parent.child` paths while depth budget
//! remains; dates, arrays, scalars and null are always leaves. The result is
//! sorted and deduplicated, so two records with the same field structure get
//! byte-identical signatures whatever order their fields were inserted in.

use std::fmt;

use miner_core::config::ShapeConfig;
use miner_core::constants::{DEFAULT_MAX_DEPTH, SHAPE_KEY_SEPARATOR};
use miner_core::Record;
use serde::{Deserialize, Serialize};

/// Sorted, distinct leaf field paths of one record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldSignature(Vec<String>);

impl FieldSignature {
    /// Build a signature from arbitrary paths, normalizing order and duplicates.
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut paths: Vec<String> = paths.into_iter().map(Into::into).collect();
        paths.sort();
        paths.dedup();
        Self(paths)
    }

    pub fn paths(&self) -> &[String] {
        &self.0
    }

    pub fn into_paths(self) -> Vec<String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical display key: the paths joined with `,`. Not unique when a
    /// field name itself contains `,`.
    pub fn key(&self) -> String {
        self.0.join(SHAPE_KEY_SEPARATOR)
    }
}

impl fmt::Display for FieldSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

/// Computes signatures with a fixed depth budget.
#[derive(Debug, Clone, Copy)]
pub struct ShapeInferencer {
    max_depth: usize,
}

impl Default for ShapeInferencer {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ShapeInferencer {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn from_config(config: &ShapeConfig) -> Self {
        Self::new(config.effective_max_depth())
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn signature(&self, record: &Record) -> FieldSignature {
        signature_with_depth(record, self.max_depth)
    }
}

/// Signature with the default depth of 2.
pub fn signature_of(record: &Record) -> FieldSignature {
    signature_with_depth(record, DEFAULT_MAX_DEPTH)
}

/// Signature with an explicit depth budget. A budget of 1 or less expands nothing.
pub fn signature_with_depth(record: &Record, max_depth: usize) -> FieldSignature {
    FieldSignature::from_paths(leaf_paths(record, max_depth))
}

fn leaf_paths(record: &Record, depth: usize) -> Vec<String> {
    record
        .fields()
        .flat_map(|(name, value)| match value.as_record() {
            Some(nested) if depth > 1 => leaf_paths(nested, depth - 1)
                .into_iter()
                .map(|child| format!("{name}.{child}"))
                .collect(),
            _ => vec![name.to_string()],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        Record::from_json(value).unwrap()
    }

    fn paths(sig: &FieldSignature) -> Vec<&str> {
        sig.paths().iter().map(String::as_str).collect()
    }

    #[test]
    fn empty_record_has_empty_signature() {
        let sig = signature_of(&Record::new());
        assert!(sig.is_empty());
        assert_eq!(sig.key(), "");
    }

    #[test]
    fn one_level_of_nesting_is_expanded() {
        let sig = signature_of(&record(json!({"a": 1, "b": {"c": 2, "d": 3}})));
        assert_eq!(paths(&sig), ["a", "b.c", "b.d"]);
    }

    #[test]
    fn nesting_past_the_budget_collapses() {
        let sig = signature_of(&record(json!({"a": 1, "b": {"c": {"d": 2}}})));
        assert_eq!(paths(&sig), ["a", "b.c"]);
    }

    #[test]
    fn arrays_and_dates_are_leaves() {
        let sig = signature_with_depth(
            &record(json!({"a": [1, 2, 3], "when": {"$date": 1000}, "tags": [{"x": 1}]})),
            5,
        );
        assert_eq!(paths(&sig), ["a", "tags", "when"]);
    }

    #[test]
    fn null_is_a_leaf() {
        let sig = signature_of(&record(json!({"owner": null})));
        assert_eq!(paths(&sig), ["owner"]);
    }

    #[test]
    fn depth_one_expands_nothing() {
        let sig = signature_with_depth(&record(json!({"b": {"c": 1}})), 1);
        assert_eq!(paths(&sig), ["b"]);
    }

    #[test]
    fn deeper_budget_expands_further() {
        let sig = signature_with_depth(&record(json!({"a": {"b": {"c": 1}}})), 3);
        assert_eq!(paths(&sig), ["a.b.c"]);
    }

    #[test]
    fn empty_nested_record_contributes_no_paths() {
        let sig = signature_of(&record(json!({"a": 1, "meta": {}})));
        assert_eq!(paths(&sig), ["a"]);
    }

    #[test]
    fn literal_dotted_name_and_nested_path_do_not_duplicate() {
        let sig = signature_of(&record(json!({"a.b": 1, "a": {"b": 2}})));
        assert_eq!(paths(&sig), ["a.b"]);
    }

    #[test]
    fn value_types_do_not_affect_signature() {
        let first = signature_of(&record(json!({"a": 1, "b": {"c": "x"}})));
        let second = signature_of(&record(json!({"a": "one", "b": {"c": null}})));
        assert_eq!(first, second);
    }

    #[test]
    fn key_is_comma_joined() {
        let sig = signature_of(&record(json!({"name": "x", "profile": {"age": 3}})));
        assert_eq!(sig.key(), "name,profile.age");
        assert_eq!(sig.to_string(), "name, profile.age");
    }
}

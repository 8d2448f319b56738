//! Snapshot value types. Built once per scan and never mutated afterwards.

use serde::Serialize;

use crate::profile::ShapeFrequencyTable;

/// One collection at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionSnapshot {
    pub name: String,
    /// Count the host reported. May differ from `shapes.total()` when records
    /// changed between counting and reading, or when some were malformed.
    pub record_count: usize,
    pub shapes: ShapeFrequencyTable,
}

impl CollectionSnapshot {
    /// A collection is shown as loaded when it holds any records.
    pub fn has_records(&self) -> bool {
        self.record_count > 0
    }

    /// Number of distinct shapes, when there is more than one.
    pub fn unique_field_sets(&self) -> Option<usize> {
        self.shapes
            .is_non_uniform()
            .then(|| self.shapes.distinct_shapes())
    }

    /// Panel line: `<n> Records`, plus `<k> Unique Field Sets` when non-uniform.
    pub fn summary(&self) -> String {
        let mut out = format!("{} Records", self.record_count);
        if let Some(k) = self.unique_field_sets() {
            out.push_str(&format!("  {k} Unique Field Sets"));
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateSnapshot {
    pub name: String,
    pub loaded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionSnapshot {
    pub name: String,
    pub ready: bool,
    /// Parameters rendered to strings, in order. Undefined renders as `undefined`.
    pub params: Vec<String>,
}

impl SubscriptionSnapshot {
    /// `Param Values: a,b`, or `None` when there are no parameters.
    pub fn params_line(&self) -> Option<String> {
        if self.params.is_empty() {
            None
        } else {
            Some(format!("Param Values: {}", self.params.join(",")))
        }
    }
}

/// Everything observed in one scan.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FullSnapshot {
    /// Sorted by name, ordinal and case-sensitive.
    pub collections: Vec<CollectionSnapshot>,
    /// Sorted by name.
    pub templates: Vec<TemplateSnapshot>,
    /// In host registry order.
    pub subscriptions: Vec<SubscriptionSnapshot>,
}

impl FullSnapshot {
    pub fn collection(&self, name: &str) -> Option<&CollectionSnapshot> {
        self.collections.iter().find(|c| c.name == name)
    }

    pub fn template(&self, name: &str) -> Option<&TemplateSnapshot> {
        self.templates.iter().find(|t| t.name == name)
    }

    pub fn subscription(&self, name: &str) -> Option<&SubscriptionSnapshot> {
        self.subscriptions.iter().find(|s| s.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty() && self.templates.is_empty() && self.subscriptions.is_empty()
    }
}

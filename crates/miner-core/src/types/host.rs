//! Host-side entities other than records: views, templates, subscriptions.

use serde::{Deserialize, Serialize};

use super::record::ParamValue;

/// A rendered view in the host's live view tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewNode {
    pub name: Option<String>,
    pub parent: Option<Box<ViewNode>>,
}

impl ViewNode {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            parent: None,
        }
    }

    pub fn with_parent(mut self, parent: ViewNode) -> Self {
        self.parent = Some(Box::new(parent));
        self
    }

    /// Name of the immediate parent view, if it has one.
    pub fn parent_name(&self) -> Option<&str> {
        self.parent.as_ref().and_then(|p| p.name.as_deref())
    }
}

/// A template definition from the host's template registry.
///
/// `None` for helpers or event maps means the template exposes no such table
/// at all, which is reported differently from an empty one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateDef {
    /// The view name the host assigns, usually `Template.<name>`.
    pub view_name: String,
    pub helpers: Option<Vec<String>>,
    pub event_maps: Option<Vec<Vec<String>>>,
}

/// An active subscription on the host's connection.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionInfo {
    pub name: String,
    pub ready: bool,
    pub params: Vec<ParamValue>,
}

//! A host read from a JSON capture of a page's runtime state.
//!
//! ```json
//! {
//!   "present": true,
//!   "globals":   { "Posts": { "kind": "collection", "documents": [ ... ] },
//!                  "jQuery": { "kind": "other" } },
//!   "namespace": { "users": { "kind": "collection", "documents": [ ... ] } },
//!   "templates": { "postItem": { "kind": "template", "view_name": "Template.postItem",
//!                                "helpers": [" title"], "event_maps": [["click a"]] } },
//!   "views":     [ { "name": "Template.postItem", "parent": { "name": "with" } } ],
//!   "subscriptions": [ { "name": "posts", "ready": true, "params": [10, { "$undefined": true }] } ]
//! }
//! ```
//!
//! A collection may carry an explicit `count` differing from its documents,
//! which reproduces a host that changed between counting and reading.

use std::path::Path;

use miner_core::errors::{CaptureError, HostError};
use miner_core::{
    HostCollection, HostEntry, HostObject, HostRegistries, ParamValue, Record, RecordRead,
    SubscriptionInfo, TemplateDef, ViewNode,
};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A collection as captured: raw documents plus an optional reported count.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CapturedCollection {
    #[serde(skip)]
    pub name: String,
    pub documents: Vec<Value>,
    pub count: Option<usize>,
}

impl HostCollection for CapturedCollection {
    fn count(&self) -> Result<usize, HostError> {
        Ok(self.count.unwrap_or(self.documents.len()))
    }

    fn fetch(&self) -> Result<Vec<RecordRead>, HostError> {
        Ok(self
            .documents
            .iter()
            .enumerate()
            .map(|(index, doc)| {
                Record::from_json(doc.clone()).map_err(|reason| HostError::MalformedRecord {
                    collection: self.name.clone(),
                    index,
                    reason,
                })
            })
            .collect())
    }
}

/// A tagged registry entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CapturedObject {
    Collection(CapturedCollection),
    Template(TemplateDef),
    Other,
}

impl CapturedObject {
    fn as_host_object(&self) -> HostObject<'_> {
        match self {
            Self::Collection(c) => HostObject::Collection(c),
            Self::Template(t) => HostObject::Template(t),
            Self::Other => HostObject::Other,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawCapture {
    #[serde(default = "default_present")]
    present: bool,
    #[serde(default)]
    globals: Map<String, Value>,
    #[serde(default)]
    namespace: Map<String, Value>,
    #[serde(default)]
    templates: Map<String, Value>,
    #[serde(default)]
    views: Vec<ViewNode>,
    #[serde(default)]
    subscriptions: Vec<RawSubscription>,
}

fn default_present() -> bool {
    true
}

#[derive(Debug, Deserialize)]
struct RawSubscription {
    name: String,
    #[serde(default)]
    ready: bool,
    #[serde(default)]
    params: Vec<Value>,
}

/// An in-memory host built from a capture document.
#[derive(Debug, Clone, Default)]
pub struct CapturedHost {
    pub present: bool,
    pub globals: Vec<(String, CapturedObject)>,
    pub namespace: Vec<(String, CapturedObject)>,
    pub templates: Vec<(String, CapturedObject)>,
    pub views: Vec<ViewNode>,
    pub subscriptions: Vec<SubscriptionInfo>,
}

impl CapturedHost {
    pub fn from_json_str(json: &str) -> Result<Self, CaptureError> {
        let raw: RawCapture = serde_json::from_str(json)?;
        Self::from_raw(raw)
    }

    pub fn from_value(value: Value) -> Result<Self, CaptureError> {
        let raw: RawCapture = serde_json::from_value(value)?;
        Self::from_raw(raw)
    }

    pub fn load(path: &Path) -> Result<Self, CaptureError> {
        let content = std::fs::read_to_string(path).map_err(|source| CaptureError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    fn from_raw(raw: RawCapture) -> Result<Self, CaptureError> {
        let subscriptions = raw
            .subscriptions
            .into_iter()
            .map(|s| {
                if s.name.is_empty() {
                    return Err(CaptureError::Invalid {
                        message: "subscription without a name".to_string(),
                    });
                }
                Ok(SubscriptionInfo {
                    name: s.name,
                    ready: s.ready,
                    params: s.params.into_iter().map(ParamValue::from_json).collect(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            present: raw.present,
            globals: parse_objects("globals", raw.globals)?,
            namespace: parse_objects("namespace", raw.namespace)?,
            templates: parse_objects("templates", raw.templates)?,
            views: raw.views,
            subscriptions,
        })
    }
}

fn parse_objects(
    section: &str,
    map: Map<String, Value>,
) -> Result<Vec<(String, CapturedObject)>, CaptureError> {
    map.into_iter()
        .map(|(name, value)| {
            let mut object: CapturedObject =
                serde_json::from_value(value).map_err(|e| CaptureError::Invalid {
                    message: format!("{section}.{name}: {e}"),
                })?;
            if let CapturedObject::Collection(c) = &mut object {
                c.name = name.clone();
            }
            Ok((name, object))
        })
        .collect()
}

fn entries(objects: &[(String, CapturedObject)]) -> Vec<HostEntry<'_>> {
    objects
        .iter()
        .map(|(name, object)| HostEntry::new(name.as_str(), object.as_host_object()))
        .collect()
}

impl HostRegistries for CapturedHost {
    fn probe(&self) -> Result<(), HostError> {
        if self.present {
            Ok(())
        } else {
            Err(HostError::MissingCapability {
                reason: "capture holds no Meteor runtime".to_string(),
            })
        }
    }

    fn global_objects(&self) -> Result<Vec<HostEntry<'_>>, HostError> {
        Ok(entries(&self.globals))
    }

    fn namespace_objects(&self) -> Result<Vec<HostEntry<'_>>, HostError> {
        Ok(entries(&self.namespace))
    }

    fn template_registry(&self) -> Result<Vec<HostEntry<'_>>, HostError> {
        Ok(entries(&self.templates))
    }

    fn live_views(&self) -> Result<Vec<ViewNode>, HostError> {
        Ok(self.views.clone())
    }

    fn subscriptions(&self) -> Result<Vec<Result<SubscriptionInfo, HostError>>, HostError> {
        Ok(self.subscriptions.iter().cloned().map(Ok).collect())
    }
}

impl CapturedHost {
    /// Look up a captured collection by its reported name (namespace entries
    /// carry the namespace prefix).
    pub fn collection(&self, name: &str) -> Option<&CapturedCollection> {
        let namespaced = name
            .strip_prefix(miner_core::constants::NAMESPACE_PREFIX)
            .and_then(|bare| find_collection(&self.namespace, bare));
        namespaced.or_else(|| find_collection(&self.globals, name))
    }
}

fn find_collection<'a>(objects: &'a [(String, CapturedObject)], name: &str) -> Option<&'a CapturedCollection> {
    objects.iter().find_map(|(n, o)| match o {
        CapturedObject::Collection(c) if n == name => Some(c),
        _ => None,
    })
}

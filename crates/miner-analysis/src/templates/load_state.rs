//! Which templates are currently instantiated in the live view tree.

use miner_core::config::TemplateConfig;
use miner_core::{HostEntry, HostObject, TemplateDef, ViewNode};

/// Remove the template prefix from a view name, if present.
pub fn strip_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or(name)
}

/// Sorted, distinct template names found in the live view tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedTemplates {
    names: Vec<String>,
}

impl LoadedTemplates {
    /// Collect every view's name and its immediate parent's name, keep those
    /// carrying `prefix`, strip it, then sort and deduplicate.
    pub fn from_views(views: &[ViewNode], prefix: &str) -> Self {
        let mut names: Vec<String> = views
            .iter()
            .flat_map(|view| [view.name.as_deref(), view.parent_name()])
            .flatten()
            .filter_map(|name| name.strip_prefix(prefix))
            .map(str::to_string)
            .collect();
        names.sort();
        names.dedup();
        Self { names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names
            .binary_search_by(|n| n.as_str().cmp(name))
            .is_ok()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// A registry template that survives the denylist.
#[derive(Debug, Clone, Copy)]
pub struct KnownTemplate<'a> {
    /// Registry name with the template prefix stripped.
    pub name: &'a str,
    pub def: &'a TemplateDef,
}

/// Templates from the registry, minus non-templates and denylisted names,
/// sorted by stripped name.
pub fn known_templates<'a>(
    registry: &'a [HostEntry<'a>],
    config: &TemplateConfig,
) -> Vec<KnownTemplate<'a>> {
    let prefix = config.effective_prefix();
    let mut known: Vec<KnownTemplate<'a>> = registry
        .iter()
        .filter_map(|entry| match entry.object {
            HostObject::Template(def) => Some(KnownTemplate {
                name: strip_prefix(&entry.name, prefix),
                def,
            }),
            _ => None,
        })
        .filter(|t| !config.is_ignored(t.name))
        .collect();
    known.sort_by(|a, b| a.name.cmp(b.name));
    known
}

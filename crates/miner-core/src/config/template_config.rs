//! Template registry filtering configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{IGNORED_TEMPLATES, INTERNAL_MEMBER_NAMES, TEMPLATE_PREFIX};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TemplateConfig {
    /// View-name prefix identifying user templates. Default: "Template.".
    pub prefix: Option<String>,
    /// Template names ignored in addition to the built-in denylist.
    pub extra_ignored: Vec<String>,
    /// Helper/event names hidden from template details. Default: has, get, set.
    pub internal_members: Option<Vec<String>>,
}

impl TemplateConfig {
    pub fn effective_prefix(&self) -> &str {
        self.prefix.as_deref().unwrap_or(TEMPLATE_PREFIX)
    }

    /// Whether a registry name is on the built-in denylist or the configured one.
    pub fn is_ignored(&self, name: &str) -> bool {
        IGNORED_TEMPLATES.contains(&name) || self.extra_ignored.iter().any(|n| n == name)
    }

    /// Whether a helper or event name is host plumbing rather than user code.
    pub fn is_internal_member(&self, name: &str) -> bool {
        match &self.internal_members {
            Some(names) => names.iter().any(|n| n == name),
            None => INTERNAL_MEMBER_NAMES.contains(&name),
        }
    }
}

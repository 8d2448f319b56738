//! Helper and event-handler listing for one template.

use std::fmt::Write;

use miner_core::config::TemplateConfig;
use miner_core::TemplateDef;
use serde::Serialize;

use super::load_state::strip_prefix;

/// Helper names and event selectors of one template.
///
/// `None` means the template has no such table; an empty list means it has
/// one but every entry was internal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDetail {
    pub name: String,
    pub helpers: Option<Vec<String>>,
    pub events: Option<Vec<String>>,
}

impl TemplateDetail {
    pub fn from_def(registry_name: &str, def: &TemplateDef, config: &TemplateConfig) -> Self {
        let prefix = config.effective_prefix();
        let name = if def.view_name.is_empty() {
            strip_prefix(registry_name, prefix)
        } else {
            strip_prefix(&def.view_name, prefix)
        };

        let helpers = def
            .helpers
            .as_ref()
            .map(|names| visible_members(names.iter(), config));
        let events = def
            .event_maps
            .as_ref()
            .map(|maps| visible_members(maps.iter().flatten(), config));

        Self {
            name: name.to_string(),
            helpers,
            events,
        }
    }

    pub fn header(&self) -> String {
        format!("Template {}", self.name)
    }

    /// Two labeled lists, `Helpers` and `Event Map`, one entry per line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header());
        render_list(&mut out, "Helpers", self.helpers.as_deref());
        render_list(&mut out, "Event Map", self.events.as_deref());
        out
    }
}

fn visible_members<'a, I>(names: I, config: &TemplateConfig) -> Vec<String>
where
    I: Iterator<Item = &'a String>,
{
    names
        .filter(|n| !config.is_internal_member(n))
        .map(|n| n.trim_start_matches(' ').to_string())
        .collect()
}

fn render_list(out: &mut String, label: &str, items: Option<&[String]>) {
    let _ = writeln!(out, "{label}");
    match items {
        Some(items) => {
            for item in items {
                let _ = writeln!(out, "  {item}");
            }
        }
        None => {
            let _ = writeln!(out, "  None");
        }
    }
}

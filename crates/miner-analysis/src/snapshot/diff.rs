//! Differences between consecutive snapshots, for redrawing only what changed.

use miner_core::{FxHashMap, FxHashSet};
use serde::Serialize;

use super::types::FullSnapshot;

/// A collection present in both snapshots whose count or shapes moved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionChange {
    pub name: String,
    pub old_count: usize,
    pub new_count: usize,
    pub old_shapes: usize,
    pub new_shapes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SnapshotDiff {
    pub collections_added: Vec<String>,
    pub collections_removed: Vec<String>,
    pub collections_changed: Vec<CollectionChange>,
    pub templates_added: Vec<String>,
    pub templates_removed: Vec<String>,
    /// Templates whose load state flipped, with the new state.
    pub templates_toggled: Vec<(String, bool)>,
    pub subscriptions_added: Vec<String>,
    pub subscriptions_removed: Vec<String>,
    /// Subscriptions whose readiness flipped, with the new state.
    pub subscriptions_toggled: Vec<(String, bool)>,
    /// Subscriptions whose rendered parameters changed, with the new values.
    pub subscriptions_params_changed: Vec<(String, Vec<String>)>,
}

impl SnapshotDiff {
    pub fn between(prev: &FullSnapshot, next: &FullSnapshot) -> Self {
        let mut diff = Self::default();

        let old: FxHashMap<&str, _> = prev.collections.iter().map(|c| (c.name.as_str(), c)).collect();
        let new: FxHashMap<&str, _> = next.collections.iter().map(|c| (c.name.as_str(), c)).collect();
        for c in &next.collections {
            match old.get(c.name.as_str()) {
                None => diff.collections_added.push(c.name.clone()),
                Some(before) if before.record_count != c.record_count || before.shapes != c.shapes => {
                    diff.collections_changed.push(CollectionChange {
                        name: c.name.clone(),
                        old_count: before.record_count,
                        new_count: c.record_count,
                        old_shapes: before.shapes.distinct_shapes(),
                        new_shapes: c.shapes.distinct_shapes(),
                    });
                }
                Some(_) => {}
            }
        }
        diff.collections_removed = removed(prev.collections.iter().map(|c| c.name.as_str()), &new);

        let old: FxHashMap<&str, bool> = prev.templates.iter().map(|t| (t.name.as_str(), t.loaded)).collect();
        let new: FxHashMap<&str, bool> = next.templates.iter().map(|t| (t.name.as_str(), t.loaded)).collect();
        toggles(
            next.templates.iter().map(|t| (t.name.as_str(), t.loaded)),
            &old,
            &mut diff.templates_added,
            &mut diff.templates_toggled,
        );
        diff.templates_removed = removed(prev.templates.iter().map(|t| t.name.as_str()), &new);

        let old: FxHashMap<&str, bool> = prev.subscriptions.iter().map(|s| (s.name.as_str(), s.ready)).collect();
        let new: FxHashMap<&str, bool> = next.subscriptions.iter().map(|s| (s.name.as_str(), s.ready)).collect();
        toggles(
            next.subscriptions.iter().map(|s| (s.name.as_str(), s.ready)),
            &old,
            &mut diff.subscriptions_added,
            &mut diff.subscriptions_toggled,
        );
        diff.subscriptions_removed = removed(prev.subscriptions.iter().map(|s| s.name.as_str()), &new);

        let old: FxHashMap<&str, &[String]> =
            prev.subscriptions.iter().map(|s| (s.name.as_str(), s.params.as_slice())).collect();
        let mut seen = FxHashSet::default();
        for s in &next.subscriptions {
            let Some(&before) = old.get(s.name.as_str()) else {
                continue;
            };
            if before != s.params.as_slice() && seen.insert(s.name.as_str()) {
                diff.subscriptions_params_changed.push((s.name.clone(), s.params.clone()));
            }
        }

        diff
    }

    pub fn is_empty(&self) -> bool {
        self.collections_added.is_empty()
            && self.collections_removed.is_empty()
            && self.collections_changed.is_empty()
            && self.templates_added.is_empty()
            && self.templates_removed.is_empty()
            && self.templates_toggled.is_empty()
            && self.subscriptions_added.is_empty()
            && self.subscriptions_removed.is_empty()
            && self.subscriptions_toggled.is_empty()
            && self.subscriptions_params_changed.is_empty()
    }
}

fn toggles<'a>(
    next: impl Iterator<Item = (&'a str, bool)>,
    old: &FxHashMap<&str, bool>,
    added: &mut Vec<String>,
    toggled: &mut Vec<(String, bool)>,
) {
    for (name, state) in next {
        match old.get(name) {
            None => {
                if !added.iter().any(|a| a == name) {
                    added.push(name.to_string());
                }
            }
            Some(&before) if before != state => toggled.push((name.to_string(), state)),
            Some(_) => {}
        }
    }
}

fn removed<'a, V>(prev: impl Iterator<Item = &'a str>, next: &FxHashMap<&str, V>) -> Vec<String> {
    let mut seen = FxHashSet::default();
    prev.filter(|name| !next.contains_key(name) && seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// The last snapshot handed to the presentation layer.
///
/// Each new snapshot fully replaces the previous one; the returned diff says
/// what to redraw.
#[derive(Debug, Default)]
pub struct RenderState {
    current: Option<FullSnapshot>,
}

impl RenderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&FullSnapshot> {
        self.current.as_ref()
    }

    pub fn apply(&mut self, next: FullSnapshot) -> SnapshotDiff {
        let empty = FullSnapshot::default();
        let diff = SnapshotDiff::between(self.current.as_ref().unwrap_or(&empty), &next);
        self.current = Some(next);
        diff
    }
}

//! Snapshot Reporter against hand-written hosts with injected inconsistencies.

use std::cell::Cell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use miner_analysis::driver::{DriverError, Poller};
use miner_analysis::snapshot::{CollectionDetail, SnapshotReporter};
use miner_core::errors::{EntityKind, HostError};
use miner_core::events::types::EntrySkippedEvent;
use miner_core::{
    HostCollection, HostEntry, HostObject, HostRegistries, MinerConfig, ParamValue, FieldValue,
    Record, RecordRead, SnapshotEventHandler, SubscriptionInfo, TemplateDef, ViewNode,
};
use serde_json::json;

// ─── Fakes ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct FakeCollection {
    reported: Option<usize>,
    records: Vec<RecordRead>,
    vanish_on_fetch: bool,
    fetches: Cell<usize>,
}

impl FakeCollection {
    fn with_docs(docs: Vec<serde_json::Value>) -> Self {
        Self {
            records: docs
                .into_iter()
                .map(|d| Ok(Record::from_json(d).unwrap()))
                .collect(),
            ..Default::default()
        }
    }
}

impl HostCollection for FakeCollection {
    fn count(&self) -> Result<usize, HostError> {
        Ok(self.reported.unwrap_or(self.records.len()))
    }

    fn fetch(&self) -> Result<Vec<RecordRead>, HostError> {
        self.fetches.set(self.fetches.get() + 1);
        if self.vanish_on_fetch {
            return Err(HostError::Vanished {
                kind: EntityKind::Collection,
                name: "gone".to_string(),
            });
        }
        Ok(self.records.clone())
    }
}

#[derive(Default)]
struct FakeHost {
    globals: Vec<(String, FakeCollection)>,
    namespace: Vec<(String, FakeCollection)>,
    templates: Vec<(String, TemplateDef)>,
    views: Vec<ViewNode>,
    subscriptions: Vec<Result<SubscriptionInfo, HostError>>,
    templates_unavailable: bool,
}

fn entries(objects: &[(String, FakeCollection)]) -> Vec<HostEntry<'_>> {
    objects
        .iter()
        .map(|(n, c)| HostEntry::new(n.as_str(), HostObject::Collection(c)))
        .collect()
}

impl HostRegistries for FakeHost {
    fn probe(&self) -> Result<(), HostError> {
        Ok(())
    }

    fn global_objects(&self) -> Result<Vec<HostEntry<'_>>, HostError> {
        let mut out = entries(&self.globals);
        out.push(HostEntry::new("navigator", HostObject::Other));
        Ok(out)
    }

    fn namespace_objects(&self) -> Result<Vec<HostEntry<'_>>, HostError> {
        Ok(entries(&self.namespace))
    }

    fn template_registry(&self) -> Result<Vec<HostEntry<'_>>, HostError> {
        if self.templates_unavailable {
            return Err(HostError::RegistryUnavailable {
                registry: "Template".to_string(),
                reason: "mid-reload".to_string(),
            });
        }
        Ok(self
            .templates
            .iter()
            .map(|(n, d)| HostEntry::new(n.as_str(), HostObject::Template(d)))
            .collect())
    }

    fn live_views(&self) -> Result<Vec<ViewNode>, HostError> {
        Ok(self.views.clone())
    }

    fn subscriptions(&self) -> Result<Vec<Result<SubscriptionInfo, HostError>>, HostError> {
        Ok(self.subscriptions.clone())
    }
}

#[derive(Default)]
struct CountingHandler {
    skipped: AtomicUsize,
    completed: AtomicUsize,
}

impl SnapshotEventHandler for CountingHandler {
    fn on_entry_skipped(&self, _event: &EntrySkippedEvent) {
        self.skipped.fetch_add(1, Ordering::SeqCst);
    }

    fn on_scan_complete(&self, _event: &miner_core::events::types::ScanCompleteEvent) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

fn template(view_name: &str) -> TemplateDef {
    TemplateDef {
        view_name: view_name.to_string(),
        ..Default::default()
    }
}

fn reporter() -> SnapshotReporter {
    SnapshotReporter::new(&MinerConfig::default())
}

// ═══════════════════════════════════════════════════════════════════════════
// COLLECTIONS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn collections_sorted_ordinally_with_namespace_prefix() {
    let host = FakeHost {
        globals: vec![
            ("posts".to_string(), FakeCollection::default()),
            ("Comments".to_string(), FakeCollection::default()),
            ("Posts".to_string(), FakeCollection::default()),
        ],
        namespace: vec![("users".to_string(), FakeCollection::default())],
        ..Default::default()
    };
    let snap = reporter().take_snapshot(&host);
    let names: Vec<&str> = snap.collections.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Comments", "Meteor.users", "Posts", "posts"]);
}

#[test]
fn empty_collection_is_not_enumerated() {
    let host = FakeHost {
        globals: vec![("Empty".to_string(), FakeCollection::default())],
        ..Default::default()
    };
    let snap = reporter().take_snapshot(&host);
    let empty = snap.collection("Empty").unwrap();
    assert_eq!(empty.record_count, 0);
    assert!(empty.shapes.is_empty());
    assert_eq!(host.globals[0].1.fetches.get(), 0);
}

#[test]
fn shapes_are_profiled_per_collection() {
    let host = FakeHost {
        globals: vec![(
            "Posts".to_string(),
            FakeCollection::with_docs(vec![
                json!({"_id": "1", "title": "a", "author": {"name": "x", "id": 1}}),
                json!({"_id": "2", "title": "b", "author": {"name": "y", "id": 2}}),
                json!({"_id": "3", "title": "c"}),
            ]),
        )],
        ..Default::default()
    };
    let snap = reporter().take_snapshot(&host);
    let posts = snap.collection("Posts").unwrap();
    assert_eq!(posts.record_count, 3);
    assert_eq!(posts.shapes.get("_id,author.id,author.name,title"), Some(2));
    assert_eq!(posts.shapes.get("_id,title"), Some(1));
    assert_eq!(posts.unique_field_sets(), Some(2));

    let detail = CollectionDetail::from_snapshot(posts);
    assert_eq!(detail.shapes[0].count, 2);
    assert_eq!(detail.shapes[0].fields, ["_id", "author.id", "author.name", "title"]);
}

#[test]
fn vanished_collection_is_omitted_and_scan_continues() {
    let host = FakeHost {
        globals: vec![
            (
                "Gone".to_string(),
                FakeCollection {
                    reported: Some(4),
                    vanish_on_fetch: true,
                    ..Default::default()
                },
            ),
            ("Kept".to_string(), FakeCollection::with_docs(vec![json!({"a": 1})])),
        ],
        ..Default::default()
    };
    let handler = CountingHandler::default();
    let snap = reporter().take_snapshot_with_events(&host, &handler);
    assert!(snap.collection("Gone").is_none());
    assert_eq!(snap.collection("Kept").unwrap().record_count, 1);
    assert_eq!(handler.skipped.load(Ordering::SeqCst), 1);
    assert_eq!(handler.completed.load(Ordering::SeqCst), 1);
}

#[test]
fn malformed_records_are_excluded_from_counts() {
    let mut posts = FakeCollection::with_docs(vec![json!({"a": 1}), json!({"a": 2})]);
    posts.records.push(Err(HostError::MalformedRecord {
        collection: "Posts".to_string(),
        index: 2,
        reason: "getter threw".to_string(),
    }));
    let host = FakeHost {
        globals: vec![("Posts".to_string(), posts)],
        ..Default::default()
    };
    let handler = CountingHandler::default();
    let snap = reporter().take_snapshot_with_events(&host, &handler);
    let posts = snap.collection("Posts").unwrap();
    assert_eq!(posts.record_count, 3);
    assert_eq!(posts.shapes.total(), 2);
    assert_eq!(handler.skipped.load(Ordering::SeqCst), 1);
}

#[test]
fn transient_undercount_is_tolerated() {
    let host = FakeHost {
        globals: vec![(
            "Live".to_string(),
            FakeCollection {
                reported: Some(1),
                ..FakeCollection::with_docs(vec![json!({"a": 1}), json!({"b": 1}), json!({"c": 1})])
            },
        )],
        ..Default::default()
    };
    let snap = reporter().take_snapshot(&host);
    let live = snap.collection("Live").unwrap();
    assert_eq!(live.record_count, 1);
    assert_eq!(live.shapes.total(), 3);
}

// ═══════════════════════════════════════════════════════════════════════════
// TEMPLATES
// ═══════════════════════════════════════════════════════════════════════════

fn template_host() -> FakeHost {
    FakeHost {
        templates: vec![
            ("postItem".to_string(), template("Template.postItem")),
            ("postsList".to_string(), template("Template.postsList")),
            ("notFound".to_string(), template("Template.notFound")),
            ("__body__".to_string(), template("Template.__body__")),
            ("atForm".to_string(), template("Template.atForm")),
        ],
        views: vec![
            ViewNode::named("Template.postItem").with_parent(ViewNode::named("Template.postsList")),
            ViewNode::named("Template.__body__"),
            ViewNode::named("Template.atForm"),
        ],
        ..Default::default()
    }
}

#[test]
fn template_load_state_follows_view_tree() {
    let snap = reporter().take_snapshot(&template_host());
    let states: Vec<(&str, bool)> = snap
        .templates
        .iter()
        .map(|t| (t.name.as_str(), t.loaded))
        .collect();
    assert_eq!(
        states,
        [("notFound", false), ("postItem", true), ("postsList", true)]
    );
}

#[test]
fn denylisted_templates_never_reported() {
    let snap = reporter().take_snapshot(&template_host());
    assert!(snap.template("__body__").is_none());
    assert!(snap.template("atForm").is_none());
}

#[test]
fn configured_denylist_extends_builtin() {
    let config = MinerConfig::from_toml("[templates]\nextra_ignored = [\"notFound\"]\n").unwrap();
    let snap = SnapshotReporter::new(&config).take_snapshot(&template_host());
    assert!(snap.template("notFound").is_none());
    assert!(snap.template("postItem").is_some());
}

#[test]
fn unavailable_template_registry_yields_no_templates() {
    let mut host = template_host();
    host.templates_unavailable = true;
    host.globals = vec![("Posts".to_string(), FakeCollection::with_docs(vec![json!({"a": 1})]))];
    let snap = reporter().take_snapshot(&host);
    assert!(snap.templates.is_empty());
    assert_eq!(snap.collections.len(), 1);
}

#[test]
fn template_detail_lookup() {
    let mut host = template_host();
    host.templates[0].1.helpers = Some(vec![" title".to_string(), "set".to_string()]);
    let detail = reporter().template_detail(&host, "postItem").unwrap().unwrap();
    assert_eq!(detail.helpers.as_deref(), Some(&["title".to_string()][..]));
    assert!(detail.events.is_none());
    assert!(reporter().template_detail(&host, "__body__").unwrap().is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// SUBSCRIPTIONS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn subscriptions_recorded_verbatim() {
    let host = FakeHost {
        subscriptions: vec![
            Ok(SubscriptionInfo {
                name: "posts".to_string(),
                ready: true,
                params: vec![
                    ParamValue::Value(FieldValue::from_json(json!(10))),
                    ParamValue::Undefined,
                    ParamValue::Value(FieldValue::from_json(json!("recent"))),
                ],
            }),
            Err(HostError::Vanished {
                kind: EntityKind::Subscription,
                name: "comments".to_string(),
            }),
            Ok(SubscriptionInfo {
                name: "userData".to_string(),
                ready: false,
                params: Vec::new(),
            }),
        ],
        ..Default::default()
    };
    let snap = reporter().take_snapshot(&host);
    assert_eq!(snap.subscriptions.len(), 2);
    let posts = snap.subscription("posts").unwrap();
    assert!(posts.ready);
    assert_eq!(posts.params, ["10", "undefined", "recent"]);
    let user = snap.subscription("userData").unwrap();
    assert!(!user.ready);
    assert!(user.params_line().is_none());
}

// ═══════════════════════════════════════════════════════════════════════════
// REPEATABILITY & LIFECYCLE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn repeated_scans_are_structurally_equal() {
    let mut host = template_host();
    host.globals = vec![(
        "Posts".to_string(),
        FakeCollection::with_docs(vec![json!({"a": 1}), json!({"a": 1, "b": {"c": 1}})]),
    )];
    let reporter = reporter();
    let first = reporter.take_snapshot(&host);
    for _ in 0..5 {
        assert_eq!(reporter.take_snapshot(&host), first);
    }
}

struct AbsentHost;

impl HostRegistries for AbsentHost {
    fn probe(&self) -> Result<(), HostError> {
        Err(HostError::MissingCapability {
            reason: "no Meteor global".to_string(),
        })
    }
    fn global_objects(&self) -> Result<Vec<HostEntry<'_>>, HostError> {
        unreachable!("absent host must not be scanned")
    }
    fn namespace_objects(&self) -> Result<Vec<HostEntry<'_>>, HostError> {
        unreachable!("absent host must not be scanned")
    }
    fn template_registry(&self) -> Result<Vec<HostEntry<'_>>, HostError> {
        unreachable!("absent host must not be scanned")
    }
    fn live_views(&self) -> Result<Vec<ViewNode>, HostError> {
        unreachable!("absent host must not be scanned")
    }
    fn subscriptions(&self) -> Result<Vec<Result<SubscriptionInfo, HostError>>, HostError> {
        unreachable!("absent host must not be scanned")
    }
}

#[test]
fn missing_host_never_starts_poller() {
    let result = Poller::attach(
        AbsentHost,
        reporter(),
        Duration::from_millis(10),
        |_s: miner_analysis::snapshot::FullSnapshot| {},
    );
    assert!(matches!(
        result,
        Err(DriverError::Host(HostError::MissingCapability { .. }))
    ));
}

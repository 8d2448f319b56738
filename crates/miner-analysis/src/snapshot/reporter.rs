//! Snapshot Reporter: reads every registry and builds a [`FullSnapshot`].
//!
//! Each call is independent and holds no state across scans. Failures local to
//! one collection, template or subscription drop that entry and the scan
//! carries on; nothing short of a missing host is surfaced as an error.

use std::time::Instant;

use chrono::Utc;
use miner_core::config::TemplateConfig;
use miner_core::constants::NAMESPACE_PREFIX;
use miner_core::errors::{EntityKind, HostError};
use miner_core::events::handler::NoOpHandler;
use miner_core::events::types::{EntrySkippedEvent, ScanCompleteEvent, ScanStartedEvent};
use miner_core::{HostCollection, HostEntry, HostObject, HostRegistries, MinerConfig, SnapshotEventHandler};

use super::types::{CollectionSnapshot, FullSnapshot, SubscriptionSnapshot, TemplateSnapshot};
use crate::profile::{CollectionProfiler, ShapeFrequencyTable};
use crate::shape::ShapeInferencer;
use crate::templates::{known_templates, LoadedTemplates, TemplateDetail};

/// Builds snapshots from a host. Cheap to clone; carries configuration only.
#[derive(Debug, Clone, Default)]
pub struct SnapshotReporter {
    profiler: CollectionProfiler,
    templates: TemplateConfig,
}

impl SnapshotReporter {
    pub fn new(config: &MinerConfig) -> Self {
        Self {
            profiler: CollectionProfiler::new(ShapeInferencer::from_config(&config.shape)),
            templates: config.templates.clone(),
        }
    }

    /// One scan with no event observer.
    pub fn take_snapshot(&self, host: &dyn HostRegistries) -> FullSnapshot {
        self.take_snapshot_with_events(host, &NoOpHandler)
    }

    /// One scan, reporting skipped entries to `events`.
    pub fn take_snapshot_with_events(
        &self,
        host: &dyn HostRegistries,
        events: &dyn SnapshotEventHandler,
    ) -> FullSnapshot {
        let start = Instant::now();
        events.on_scan_started(&ScanStartedEvent {
            started_at: Utc::now(),
        });

        let mut scan = Scan {
            events,
            skipped: 0,
        };
        let collections = self.scan_collections(host, &mut scan);
        let templates = self.scan_templates(host, &mut scan);
        let subscriptions = scan_subscriptions(host, &mut scan);

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            collections = collections.len(),
            templates = templates.len(),
            subscriptions = subscriptions.len(),
            skipped = scan.skipped,
            duration_ms,
            "snapshot complete"
        );
        events.on_scan_complete(&ScanCompleteEvent {
            collections: collections.len(),
            templates: templates.len(),
            subscriptions: subscriptions.len(),
            skipped: scan.skipped,
            duration_ms,
        });

        FullSnapshot {
            collections,
            templates,
            subscriptions,
        }
    }

    /// Detail payload for one template, looked up by stripped name.
    /// Denylisted and unknown templates give `None`.
    pub fn template_detail(
        &self,
        host: &dyn HostRegistries,
        name: &str,
    ) -> Result<Option<TemplateDetail>, HostError> {
        let registry = host.template_registry()?;
        Ok(known_templates(&registry, &self.templates)
            .into_iter()
            .find(|t| t.name == name)
            .map(|t| TemplateDetail::from_def(t.name, t.def, &self.templates)))
    }

    fn scan_collections(&self, host: &dyn HostRegistries, scan: &mut Scan<'_>) -> Vec<CollectionSnapshot> {
        let mut out = Vec::new();

        let globals = scan.registry(EntityKind::Collection, "global", host.global_objects());
        self.profile_entries(&globals, "", scan, &mut out);
        let namespaced = scan.registry(EntityKind::Collection, "namespace", host.namespace_objects());
        self.profile_entries(&namespaced, NAMESPACE_PREFIX, scan, &mut out);

        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    fn profile_entries(
        &self,
        entries: &[HostEntry<'_>],
        prefix: &str,
        scan: &mut Scan<'_>,
        out: &mut Vec<CollectionSnapshot>,
    ) {
        for entry in entries {
            let HostObject::Collection(collection) = entry.object else {
                continue;
            };
            let name = format!("{prefix}{}", entry.name);
            match self.profile_collection(&name, collection, scan) {
                Ok(snapshot) => out.push(snapshot),
                Err(error) => scan.skip(EntityKind::Collection, &name, error),
            }
        }
    }

    fn profile_collection(
        &self,
        name: &str,
        collection: &dyn HostCollection,
        scan: &mut Scan<'_>,
    ) -> Result<CollectionSnapshot, HostError> {
        let record_count = collection.count()?;
        if record_count == 0 {
            return Ok(CollectionSnapshot {
                name: name.to_string(),
                record_count,
                shapes: ShapeFrequencyTable::new(),
            });
        }

        let outcome = self.profiler.profile_reads(collection.fetch()?);
        for error in outcome.malformed {
            // The collection stays; only the record is dropped.
            scan.skip(EntityKind::Collection, name, error);
        }
        if outcome.table.total() != record_count {
            tracing::debug!(
                collection = name,
                counted = record_count,
                profiled = outcome.table.total(),
                "collection changed during scan"
            );
        }
        Ok(CollectionSnapshot {
            name: name.to_string(),
            record_count,
            shapes: outcome.table,
        })
    }

    fn scan_templates(&self, host: &dyn HostRegistries, scan: &mut Scan<'_>) -> Vec<TemplateSnapshot> {
        let registry = scan.registry(EntityKind::Template, "template", host.template_registry());
        if registry.is_empty() {
            return Vec::new();
        }
        let views = scan.registry(EntityKind::View, "view", host.live_views());
        let loaded = LoadedTemplates::from_views(&views, self.templates.effective_prefix());

        known_templates(&registry, &self.templates)
            .into_iter()
            .map(|t| TemplateSnapshot {
                name: t.name.to_string(),
                loaded: loaded.contains(t.name),
            })
            .collect()
    }
}

fn scan_subscriptions(host: &dyn HostRegistries, scan: &mut Scan<'_>) -> Vec<SubscriptionSnapshot> {
    scan.registry(EntityKind::Subscription, "subscription", host.subscriptions())
        .into_iter()
        .filter_map(|read| match read {
            Ok(sub) => Some(SubscriptionSnapshot {
                params: sub.params.iter().map(|p| p.render()).collect(),
                name: sub.name,
                ready: sub.ready,
            }),
            Err(error) => {
                let name = match &error {
                    HostError::Vanished { name, .. } => name.clone(),
                    _ => String::new(),
                };
                scan.skip(EntityKind::Subscription, &name, error);
                None
            }
        })
        .collect()
}

/// Per-call bookkeeping for skipped entries.
struct Scan<'e> {
    events: &'e dyn SnapshotEventHandler,
    skipped: usize,
}

impl Scan<'_> {
    fn skip(&mut self, kind: EntityKind, name: &str, error: HostError) {
        tracing::warn!(kind = %kind, name, error = %error, "entry skipped");
        self.skipped += 1;
        self.events.on_entry_skipped(&EntrySkippedEvent {
            kind,
            name: name.to_string(),
            error,
        });
    }

    /// Unwrap a registry listing; an unreadable registry contributes nothing.
    fn registry<T>(&mut self, kind: EntityKind, registry: &str, read: Result<Vec<T>, HostError>) -> Vec<T> {
        read.unwrap_or_else(|error| {
            self.skip(kind, registry, error);
            Vec::new()
        })
    }
}

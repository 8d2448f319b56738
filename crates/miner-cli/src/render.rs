//! Text rendering of snapshots and diffs.

use std::fmt::Write;

use miner_analysis::snapshot::{FullSnapshot, SnapshotDiff};
use owo_colors::OwoColorize;

/// Paint `text` with `style` only when color output is enabled.
fn paint(text: &str, color: bool, style: fn(&str) -> String) -> String {
    if color {
        style(text)
    } else {
        text.to_string()
    }
}

fn green(s: &str) -> String {
    s.green().to_string()
}

fn grey(s: &str) -> String {
    s.bright_black().to_string()
}

fn red(s: &str) -> String {
    s.red().to_string()
}

/// The summary panel. Unless `show_all`, empty collections and templates
/// that are not rendered are hidden.
pub fn panel(snapshot: &FullSnapshot, show_all: bool, color: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Meteor Miner");

    let _ = writeln!(out, "Collections");
    for c in &snapshot.collections {
        if !show_all && !c.has_records() {
            continue;
        }
        let style = if c.has_records() { green } else { grey };
        let _ = writeln!(out, "  {}  {}", paint(&c.name, color, style), c.summary());
    }

    let _ = writeln!(out, "Subscriptions");
    for s in &snapshot.subscriptions {
        let style = if s.ready { green } else { red };
        match s.params_line() {
            Some(params) => {
                let _ = writeln!(out, "  {}  {}", paint(&s.name, color, style), params);
            }
            None => {
                let _ = writeln!(out, "  {}", paint(&s.name, color, style));
            }
        }
    }

    let _ = writeln!(out, "Templates");
    for t in &snapshot.templates {
        if !show_all && !t.loaded {
            continue;
        }
        let style = if t.loaded { green } else { grey };
        let _ = writeln!(out, "  {}", paint(&t.name, color, style));
    }
    out
}

/// One line per change, `+` added, `-` removed, `~` changed.
pub fn diff(diff: &SnapshotDiff) -> String {
    let mut out = String::new();
    for name in &diff.collections_added {
        let _ = writeln!(out, "+ collection {name}");
    }
    for name in &diff.collections_removed {
        let _ = writeln!(out, "- collection {name}");
    }
    for change in &diff.collections_changed {
        let _ = writeln!(
            out,
            "~ collection {}: {} -> {} records, {} -> {} shapes",
            change.name, change.old_count, change.new_count, change.old_shapes, change.new_shapes
        );
    }
    for name in &diff.templates_added {
        let _ = writeln!(out, "+ template {name}");
    }
    for name in &diff.templates_removed {
        let _ = writeln!(out, "- template {name}");
    }
    for (name, loaded) in &diff.templates_toggled {
        let state = if *loaded { "loaded" } else { "not loaded" };
        let _ = writeln!(out, "~ template {name}: {state}");
    }
    for name in &diff.subscriptions_added {
        let _ = writeln!(out, "+ subscription {name}");
    }
    for name in &diff.subscriptions_removed {
        let _ = writeln!(out, "- subscription {name}");
    }
    for (name, ready) in &diff.subscriptions_toggled {
        let state = if *ready { "ready" } else { "not ready" };
        let _ = writeln!(out, "~ subscription {name}: {state}");
    }
    for (name, params) in &diff.subscriptions_params_changed {
        let _ = writeln!(out, "~ subscription {name}: Param Values: {}", params.join(","));
    }
    out
}

//! Per-collection detail payload: shapes with their record counts.

use std::fmt::Write;

use serde::Serialize;

use super::types::CollectionSnapshot;

/// `text` when `n == 1`, otherwise `text` + "s".
pub fn plural(n: usize, text: &str) -> String {
    if n == 1 {
        text.to_string()
    } else {
        format!("{text}s")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeLine {
    pub count: usize,
    pub fields: Vec<String>,
}

/// Shapes of one collection ready for listing, most common first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionDetail {
    pub name: String,
    pub shapes: Vec<ShapeLine>,
}

impl CollectionDetail {
    pub fn from_snapshot(snapshot: &CollectionSnapshot) -> Self {
        let mut entries = snapshot.shapes.sorted();
        // Stable sort keeps signature order among equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        let shapes = entries
            .into_iter()
            .map(|shape| ShapeLine {
                count: shape.count,
                fields: shape.signature.into_paths(),
            })
            .collect();
        Self {
            name: snapshot.name.clone(),
            shapes,
        }
    }

    pub fn header(&self) -> String {
        format!("Field Details for {}", self.name)
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.header());
        for line in &self.shapes {
            let _ = writeln!(out, "{} {}:", line.count, plural(line.count, "record"));
            let _ = writeln!(out, "  {}", line.fields.join(", "));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ShapeFrequencyTable;
    use crate::shape::FieldSignature;

    #[test]
    fn plural_forms() {
        assert_eq!(plural(1, "record"), "record");
        assert_eq!(plural(0, "record"), "records");
        assert_eq!(plural(7, "record"), "records");
    }

    #[test]
    fn detail_orders_by_count_then_key() {
        let mut shapes = ShapeFrequencyTable::new();
        shapes.record(FieldSignature::from_paths(["b"]));
        shapes.record(FieldSignature::from_paths(["a"]));
        shapes.record(FieldSignature::from_paths(["_id", "title"]));
        shapes.record(FieldSignature::from_paths(["_id", "title"]));
        let snap = CollectionSnapshot {
            name: "Posts".to_string(),
            record_count: 4,
            shapes,
        };
        let detail = CollectionDetail::from_snapshot(&snap);
        let counts: Vec<usize> = detail.shapes.iter().map(|s| s.count).collect();
        assert_eq!(counts, [2, 1, 1]);
        assert_eq!(detail.shapes[1].fields, ["a"]);
        assert_eq!(
            detail.render(),
            "Field Details for Posts\n2 records:\n  _id, title\n1 record:\n  a\n1 record:\n  b\n"
        );
    }
}

//! The record model: arbitrarily shaped values read out of host collections.
//!
//! Records arrive as JSON captured from the host. The host's extended-JSON
//! conventions are honored on the way in: `{"$date": ...}` becomes a date and
//! `{"$undefined": true}` marks an undefined subscription parameter.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde_json::{Map, Number, Value};

use super::collections::FxHashMap;

const DATE_KEY: &str = "$date";
const UNDEFINED_KEY: &str = "$undefined";

/// A single field value inside a record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<FieldValue>),
    Object(Record),
}

impl FieldValue {
    /// Convert a JSON value, recognizing extended-JSON dates.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from_json).collect()),
            Value::Object(map) => match ejson_date(&map) {
                Some(date) => Self::Date(date),
                None => Self::Object(Record::from_map(map)),
            },
        }
    }

    /// The nested record, if this value is one. Dates and arrays are not.
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Object(record) => Some(record),
            _ => None,
        }
    }

    /// Render the value the way the host's `toString` would.
    pub fn to_host_string(&self) -> String {
        match self {
            Self::Null => "null".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => render_number(n),
            Self::String(s) => s.clone(),
            Self::Date(d) => d.to_rfc3339_opts(SecondsFormat::Millis, true),
            Self::Array(items) => items
                .iter()
                .map(|item| match item {
                    // Array join renders null holes as empty.
                    Self::Null => String::new(),
                    other => other.to_host_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Self::Object(_) => "[object Object]".to_string(),
        }
    }
}

/// An arbitrarily shaped record: own field names mapped to values.
///
/// Field order is not preserved; nothing downstream may depend on it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: FxHashMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a top-level JSON value. Only objects can be enumerated as records.
    pub fn from_json(value: Value) -> Result<Self, String> {
        match value {
            Value::Object(map) => {
                if ejson_date(&map).is_some() {
                    return Err("value is a date, not a record".to_string());
                }
                Ok(Self::from_map(map))
            }
            Value::Null => Err("value is null".to_string()),
            Value::Array(_) => Err("value is an array".to_string()),
            other => Err(format!("value is a scalar ({other})")),
        }
    }

    fn from_map(map: Map<String, Value>) -> Self {
        map.into_iter()
            .map(|(k, v)| (k, FieldValue::from_json(v)))
            .collect()
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Own fields, in no particular order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A subscription parameter, which may be explicitly undefined.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Undefined,
    Value(FieldValue),
}

impl ParamValue {
    pub fn from_json(value: Value) -> Self {
        if let Value::Object(map) = &value {
            if map.len() == 1 && map.get(UNDEFINED_KEY) == Some(&Value::Bool(true)) {
                return Self::Undefined;
            }
        }
        Self::Value(FieldValue::from_json(value))
    }

    /// String form for display; undefined renders as the literal marker.
    pub fn render(&self) -> String {
        match self {
            Self::Undefined => crate::constants::UNDEFINED_MARKER.to_string(),
            Self::Value(v) => v.to_host_string(),
        }
    }
}

fn ejson_date(map: &Map<String, Value>) -> Option<DateTime<Utc>> {
    if map.len() != 1 {
        return None;
    }
    match map.get(DATE_KEY)? {
        Value::Number(n) => {
            let millis = n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))?;
            Utc.timestamp_millis_opt(millis).single()
        }
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|d| d.with_timezone(&Utc)),
        _ => None,
    }
}

fn render_number(n: &Number) -> String {
    let Some(f) = n.as_f64().filter(|_| n.is_f64()) else {
        return n.to_string();
    };
    // Host number formatting switches to exponent form outside [1e-6, 1e21).
    if f != 0.0 && (f.abs() >= 1e21 || f.abs() < 1e-6) {
        let sci = format!("{f:e}");
        return match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => sci,
        };
    }
    if f.fract() == 0.0 && f.abs() < 1e15 {
        return format!("{}", f as i64);
    }
    format!("{f}")
}

// SPDX-License-Identifier: Apache-2.0

use serde_json::{Map, Number, Value};

/// An upstream record whose shape is unknown until runtime.
///
/// Accessors are total: a missing key, a `null` value or a non-object payload
/// all read as "absent" and never panic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRecord(Map<String, Value>);

impl RawRecord {
    /// Non-object values become an empty record.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(map) => Self(map.clone()),
            _ => Self::default(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a dotted path (`basicInfo.policyNumber`, `people.0.firstName`).
    /// Numeric segments index into arrays. `null` is treated as absent.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        if current.is_null() {
            None
        } else {
            Some(current)
        }
    }

    /// First candidate path holding a defined value, rendered as text.
    #[must_use]
    pub fn first_text(&self, candidates: &[&str]) -> Option<String> {
        candidates
            .iter()
            .find_map(|path| self.get(path))
            .map(value_text)
    }

    /// Same as [`RawRecord::first_text`] but defaults to the empty string.
    #[must_use]
    pub fn text_or_empty(&self, candidates: &[&str]) -> String {
        self.first_text(candidates).unwrap_or_default()
    }

    #[must_use]
    pub fn array(&self, path: &str) -> &[Value] {
        match self.get(path) {
            Some(Value::Array(items)) => items,
            _ => &[],
        }
    }
}

/// Renders any JSON value as display text: strings verbatim, numbers the way
/// a browser prints them, containers as compact JSON.
#[must_use]
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        other => other.to_string(),
    }
}

/// Integral floats drop their fraction (`100.0` reads `100`).
fn number_text(n: &Number) -> String {
    if n.is_i64() || n.is_u64() {
        return n.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

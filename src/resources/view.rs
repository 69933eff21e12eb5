//! Rows from derived, read-only view endpoints.
//!
//! The backend is not consistent about key spelling on these projections: the
//! same column shows up as `registrationNo`, `registration` or `Registration`
//! depending on the endpoint. Rows therefore stay untyped and are read
//! through [`ViewKey`]s that know every accepted spelling. A hit on anything
//! but the canonical key is logged so the drift stays visible.

use std::collections::HashSet;
use std::sync::OnceLock;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One column of a view, by its canonical camelCase key plus known aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewKey {
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
}

impl ViewKey {
    pub const fn new(canonical: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { canonical, aliases }
    }

    /// Header text for a table column: `dailyRate` -> `Daily Rate`.
    pub fn title(&self) -> String {
        title_case(self.canonical)
    }

    /// Every spelling tried, canonical first.
    fn candidates(&self) -> Vec<String> {
        let mut keys = vec![self.canonical.to_string()];
        let derived = [title_case(self.canonical), capitalize(self.canonical)];
        for key in derived
            .into_iter()
            .chain(self.aliases.iter().map(|a| a.to_string()))
        {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewRow(Map<String, Value>);

impl ViewRow {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Value for `key` under whichever spelling the server used.
    pub fn get(&self, key: &ViewKey) -> Option<&Value> {
        for (i, candidate) in key.candidates().iter().enumerate() {
            if let Some(value) = self.0.get(candidate) {
                if i > 0 && first_sighting(key.canonical, candidate) {
                    tracing::warn!(
                        canonical = key.canonical,
                        found = %candidate,
                        "View row uses a non-canonical key"
                    );
                }
                return Some(value);
            }
        }
        None
    }

    /// Display text for `key`; missing and null values render as empty.
    pub fn text(&self, key: &ViewKey) -> String {
        match self.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn i64(&self, key: &ViewKey) -> Option<i64> {
        match self.get(key)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn f64(&self, key: &ViewKey) -> Option<f64> {
        match self.get(key)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// True the first time a non-canonical spelling of `canonical` is seen, so a
/// long view warns once per column instead of once per cell.
fn first_sighting(canonical: &'static str, found: &str) -> bool {
    static SEEN: OnceLock<Mutex<HashSet<(&'static str, String)>>> = OnceLock::new();
    SEEN.get_or_init(Default::default)
        .lock()
        .insert((canonical, found.to_string()))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out
}

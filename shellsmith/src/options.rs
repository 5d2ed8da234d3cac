//! Option sets: the user-entered values for one tool's form
//!
//! An [`OptionSet`] is a plain map from field name to [`OptionValue`]. It is
//! never validated on insertion; instead [`OptionSet::resolve`] normalises it
//! against the tool's field definitions right before synthesis, so synthesis
//! always sees a complete, well-typed set.

use crate::error::{Result, SmithError};
use crate::types::{FieldDef, FieldType, OptionValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::trace;

/// Field names are kebab-case; `_` is accepted as an alias for `-`.
fn normalize_key(key: &str) -> String {
    key.trim().replace('_', "-")
}

/// Parse the usual spellings of a boolean.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

/// The current values of one tool's form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionSet {
    values: BTreeMap<String, OptionValue>,
}

impl OptionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The page-load state: every field at its default.
    pub fn defaults_for(fields: &[FieldDef]) -> Self {
        let values = fields
            .iter()
            .map(|f| (f.name.clone(), f.default.clone()))
            .collect();
        Self { values }
    }

    /// Builder-style insert.
    pub fn with(mut self, name: &str, value: impl Into<OptionValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<OptionValue>) {
        self.values.insert(normalize_key(name), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&OptionValue> {
        self.values.get(&normalize_key(name))
    }

    /// Text value of a field, or `""` when unset or not text.
    pub fn text(&self, name: &str) -> &str {
        self.get(name)
            .and_then(OptionValue::as_text)
            .unwrap_or("")
    }

    /// Boolean value of a field, `false` when unset or not a boolean.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name)
            .and_then(OptionValue::as_bool)
            .unwrap_or(false)
    }

    pub fn number(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(OptionValue::as_number)
    }

    /// Overlay `other` on top of this set; values in `other` win.
    pub fn merge(mut self, other: &OptionSet) -> Self {
        for (k, v) in &other.values {
            self.values.insert(k.clone(), v.clone());
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &OptionValue)> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Normalise this set against a tool's fields.
    ///
    /// Missing and blank values take the field default, mistyped values are
    /// coerced where possible (and defaulted otherwise), numbers are clamped
    /// into range, unknown select choices are defaulted and values for
    /// undeclared fields are dropped. The result is idempotent under a second
    /// `resolve` with the same fields.
    pub fn resolve(&self, fields: &[FieldDef]) -> OptionSet {
        let mut values = BTreeMap::new();
        for field in fields {
            let value = match self.values.get(&field.name) {
                Some(value) => coerce(field, value),
                None => field.default.clone(),
            };
            values.insert(field.name.clone(), value);
        }
        for name in self.values.keys() {
            if !values.contains_key(name) {
                trace!(field = %name, "dropping value for undeclared field");
            }
        }
        OptionSet { values }
    }

    /// Strictly parse a `key=value` assignment for one of `fields`.
    ///
    /// A bare `key` naming a boolean field means `key=true`.
    pub fn parse_assignment(
        tool: &str,
        fields: &[FieldDef],
        input: &str,
    ) -> Result<(String, OptionValue)> {
        let (key, raw) = match input.split_once('=') {
            Some((key, raw)) => (normalize_key(key), Some(raw)),
            None => (normalize_key(input), None),
        };
        if key.is_empty() {
            return Err(SmithError::MalformedAssignment {
                input: input.to_string(),
            });
        }

        let field = fields
            .iter()
            .find(|f| f.name == key)
            .ok_or_else(|| SmithError::UnknownField {
                tool: tool.to_string(),
                field: key.clone(),
            })?;

        let invalid = |raw: &str, expected: String| SmithError::InvalidValue {
            field: key.clone(),
            value: raw.to_string(),
            expected,
        };

        let raw = match (raw, &field.type_) {
            (Some(raw), _) => raw,
            (None, FieldType::Boolean) => return Ok((key, OptionValue::Bool(true))),
            (None, _) => {
                return Err(SmithError::MalformedAssignment {
                    input: input.to_string(),
                })
            }
        };

        let value = match &field.type_ {
            FieldType::Text => OptionValue::Text(raw.to_string()),
            FieldType::Boolean => parse_bool(raw)
                .map(OptionValue::Bool)
                .ok_or_else(|| invalid(raw, "a boolean (true/false)".to_string()))?,
            FieldType::Number { min, max } => {
                let expected = match (min, max) {
                    (Some(lo), Some(hi)) => format!("an integer between {lo} and {hi}"),
                    (Some(lo), None) => format!("an integer of at least {lo}"),
                    (None, Some(hi)) => format!("an integer of at most {hi}"),
                    (None, None) => "an integer".to_string(),
                };
                let n = raw
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| invalid(raw, expected.clone()))?;
                if field.clamp(n) != n {
                    return Err(invalid(raw, expected));
                }
                OptionValue::Number(n)
            }
            FieldType::Select { options } => {
                let choice = raw.trim();
                if !field.type_.has_choice(choice) {
                    let choices: Vec<&str> = options.iter().map(|o| o.value.as_str()).collect();
                    return Err(invalid(raw, format!("one of {}", choices.join(", "))));
                }
                OptionValue::Text(choice.to_string())
            }
        };

        Ok((key, value))
    }
}

fn coerce(field: &FieldDef, value: &OptionValue) -> OptionValue {
    let coerced = match (&field.type_, value) {
        (FieldType::Text, OptionValue::Text(s)) if field.is_blank(s) => None,
        (FieldType::Text, OptionValue::Text(s)) => Some(OptionValue::Text(s.clone())),
        (FieldType::Text, other) => Some(OptionValue::Text(other.to_string())),

        (FieldType::Boolean, OptionValue::Bool(b)) => Some(OptionValue::Bool(*b)),
        (FieldType::Boolean, OptionValue::Number(n)) => Some(OptionValue::Bool(*n != 0)),
        (FieldType::Boolean, OptionValue::Text(s)) => parse_bool(s).map(OptionValue::Bool),

        (FieldType::Number { .. }, OptionValue::Number(n)) => {
            Some(OptionValue::Number(field.clamp(*n)))
        }
        (FieldType::Number { .. }, OptionValue::Text(s)) => s
            .trim()
            .parse::<i64>()
            .ok()
            .map(|n| OptionValue::Number(field.clamp(n))),
        (FieldType::Number { .. }, OptionValue::Bool(_)) => None,

        (FieldType::Select { .. }, other) => {
            let choice = other.to_string();
            let choice = choice.trim();
            field
                .type_
                .has_choice(choice)
                .then(|| OptionValue::Text(choice.to_string()))
        }
    };

    coerced.unwrap_or_else(|| {
        trace!(field = %field.name, value = %value, "value replaced by field default");
        field.default.clone()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> Vec<FieldDef> {
        vec![
            FieldDef::text("file", "output.txt"),
            FieldDef::boolean("recursive", false),
            FieldDef::number("owner", 7, Some(0), Some(7)),
            FieldDef::select("mode", &["create", "append"], "create"),
        ]
    }

    #[test]
    fn test_defaults_for_populates_every_field() {
        let set = OptionSet::defaults_for(&fields());
        assert_eq!(set.len(), 4);
        assert_eq!(set.text("file"), "output.txt");
        assert!(!set.flag("recursive"));
        assert_eq!(set.number("owner"), Some(7));
        assert_eq!(set.text("mode"), "create");
    }

    #[test]
    fn test_blank_text_falls_back_to_default() {
        let set = OptionSet::new().with("file", "   ").resolve(&fields());
        assert_eq!(set.text("file"), "output.txt");
    }

    #[test]
    fn test_underscore_keys_are_normalized() {
        let set = OptionSet::new().with("group_only", true).with("max_depth", 2i64);
        assert!(set.flag("group-only"));
        assert!(set.flag("group_only"));
        assert_eq!(set.get("group_only"), Some(&OptionValue::Bool(true)));
        assert_eq!(set.number("max_depth"), Some(2));
    }

    #[test]
    fn test_resolve_coerces_and_clamps() {
        let set = OptionSet::new()
            .with("recursive", "yes")
            .with("owner", "12")
            .with("mode", "truncate")
            .with("bogus", "x")
            .resolve(&fields());
        assert!(set.flag("recursive"));
        assert_eq!(set.number("owner"), Some(7));
        assert_eq!(set.text("mode"), "create");
        assert!(set.get("bogus").is_none());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let once = OptionSet::new()
            .with("owner", -3i64)
            .with("file", "")
            .resolve(&fields());
        assert_eq!(once.resolve(&fields()), once);
    }

    #[test]
    fn test_merge_overlays_values() {
        let base = OptionSet::new().with("file", "a.txt").with("recursive", false);
        let merged = base.merge(&OptionSet::new().with("recursive", true));
        assert_eq!(merged.text("file"), "a.txt");
        assert!(merged.flag("recursive"));
    }

    #[test]
    fn test_parse_assignment_accepts_typed_values() {
        let f = fields();
        assert_eq!(
            OptionSet::parse_assignment("t", &f, "owner=6").unwrap(),
            ("owner".to_string(), OptionValue::Number(6))
        );
        assert_eq!(
            OptionSet::parse_assignment("t", &f, "recursive").unwrap(),
            ("recursive".to_string(), OptionValue::Bool(true))
        );
        assert_eq!(
            OptionSet::parse_assignment("t", &f, "file=a=b.txt").unwrap(),
            ("file".to_string(), OptionValue::Text("a=b.txt".into()))
        );
    }

    #[test]
    fn test_parse_assignment_rejects_bad_input() {
        let f = fields();
        assert!(matches!(
            OptionSet::parse_assignment("t", &f, "nope=1"),
            Err(SmithError::UnknownField { .. })
        ));
        assert!(matches!(
            OptionSet::parse_assignment("t", &f, "owner=8"),
            Err(SmithError::InvalidValue { .. })
        ));
        assert!(matches!(
            OptionSet::parse_assignment("t", &f, "mode=truncate"),
            Err(SmithError::InvalidValue { .. })
        ));
        assert!(matches!(
            OptionSet::parse_assignment("t", &f, "file"),
            Err(SmithError::MalformedAssignment { .. })
        ));
        assert!(matches!(
            OptionSet::parse_assignment("t", &f, "=x"),
            Err(SmithError::MalformedAssignment { .. })
        ));
    }

    #[test]
    fn test_parse_bool_spellings() {
        assert_eq!(parse_bool("ON"), Some(true));
        assert_eq!(parse_bool(" no "), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}

//! Core field types for tool forms.
//!
//! All types serialize to/from JSON or YAML via serde. A field definition
//! describes one named, typed input of a tool's form together with the value
//! it starts with and falls back to when left blank.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single option in a select field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectOption {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SelectOption {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    pub fn labelled(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
        }
    }
}

/// The type of a field; it determines what shape the value takes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Boolean,
    Select {
        options: Vec<SelectOption>,
    },
    Number {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<i64>,
    },
}

impl FieldType {
    /// Short human name used in listings and error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Boolean => "boolean",
            FieldType::Select { .. } => "select",
            FieldType::Number { .. } => "number",
        }
    }

    /// Whether `value` is one of this select field's options.
    ///
    /// Always false for non-select fields.
    pub fn has_choice(&self, value: &str) -> bool {
        match self {
            FieldType::Select { options } => options.iter().any(|o| o.value == value),
            _ => false,
        }
    }
}

/// A value held by an option set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl OptionValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OptionValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            OptionValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            OptionValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(b) => write!(f, "{b}"),
            OptionValue::Number(n) => write!(f, "{n}"),
            OptionValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        OptionValue::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        OptionValue::Text(value)
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        OptionValue::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        OptionValue::Number(value)
    }
}

/// A field definition: the complete schema for a single form input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldDef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub type_: FieldType,
    /// Initial value, also substituted when the field is unset or blank.
    pub default: OptionValue,
    /// Whitespace is significant: only an empty value counts as blank.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub verbatim: bool,
}

impl FieldDef {
    pub fn text(name: &str, default: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            type_: FieldType::Text,
            default: OptionValue::Text(default.to_string()),
            verbatim: false,
        }
    }

    pub fn boolean(name: &str, default: bool) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            type_: FieldType::Boolean,
            default: OptionValue::Bool(default),
            verbatim: false,
        }
    }

    pub fn number(name: &str, default: i64, min: Option<i64>, max: Option<i64>) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            type_: FieldType::Number { min, max },
            default: OptionValue::Number(default),
            verbatim: false,
        }
    }

    /// A select field. The default must be one of `choices`.
    pub fn select(name: &str, choices: &[&str], default: &str) -> Self {
        debug_assert!(choices.contains(&default), "default must be a choice");
        Self {
            name: name.to_string(),
            description: None,
            type_: FieldType::Select {
                options: choices.iter().map(|c| SelectOption::new(*c)).collect(),
            },
            default: OptionValue::Text(default.to_string()),
            verbatim: false,
        }
    }

    pub fn describe(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Treat whitespace-only values as real input (delimiters, separators).
    pub fn verbatim(mut self) -> Self {
        self.verbatim = true;
        self
    }

    /// Whether `raw` counts as "left blank" for this field.
    pub fn is_blank(&self, raw: &str) -> bool {
        if self.verbatim {
            raw.is_empty()
        } else {
            raw.trim().is_empty()
        }
    }

    /// Clamp a number into this field's range. Non-number fields pass through.
    pub fn clamp(&self, value: i64) -> i64 {
        match self.type_ {
            FieldType::Number { min, max } => {
                let value = min.map_or(value, |m| value.max(m));
                max.map_or(value, |m| value.min(m))
            }
            _ => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_type_select_yaml_round_trip() {
        let ft = FieldType::Select {
            options: vec![SelectOption::new("curl"), SelectOption::labelled("wget", "GNU wget")],
        };
        let yaml = serde_yaml_ng::to_string(&ft).unwrap();
        assert!(yaml.contains("kind: select"));
        let parsed: FieldType = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(ft, parsed);
    }

    #[test]
    fn option_value_untagged_json() {
        let values: Vec<OptionValue> = serde_json::from_str(r#"[true, 7, "x"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                OptionValue::Bool(true),
                OptionValue::Number(7),
                OptionValue::Text("x".into())
            ]
        );
    }

    #[test]
    fn number_field_clamps_into_range() {
        let field = FieldDef::number("owner", 7, Some(0), Some(7));
        assert_eq!(field.clamp(9), 7);
        assert_eq!(field.clamp(-2), 0);
        assert_eq!(field.clamp(4), 4);
    }

    #[test]
    fn open_ended_number_is_not_clamped_above() {
        let field = FieldDef::number("count", 10, Some(1), None);
        assert_eq!(field.clamp(500), 500);
        assert_eq!(field.clamp(0), 1);
    }

    #[test]
    fn select_choice_lookup() {
        let field = FieldDef::select("mode", &["zip", "unzip"], "zip");
        assert!(field.type_.has_choice("unzip"));
        assert!(!field.type_.has_choice("tar"));
        assert!(!FieldType::Text.has_choice("zip"));
    }

    #[test]
    fn verbatim_fields_keep_whitespace() {
        let delimiter = FieldDef::text("delimiter", "\t").verbatim();
        assert!(!delimiter.is_blank(" "));
        assert!(delimiter.is_blank(""));
        assert!(FieldDef::text("file", "a.txt").is_blank("  "));
    }

    #[test]
    fn field_def_json_shape() {
        let field = FieldDef::boolean("recursive", false).describe("Recurse into directories");
        let json = serde_json::to_value(&field).unwrap();
        assert_eq!(json["type"]["kind"], "boolean");
        assert_eq!(json["default"], false);
        assert_eq!(json["description"], "Recurse into directories");
    }
}

//! Typed configuration for the `smith` CLI

use serde::{Deserialize, Serialize};
use shellsmith::{OptionSet, OptionValue};
use std::collections::BTreeMap;

/// Settings merged from config files and `SMITH_*` environment variables.
///
/// ```toml
/// copy = true
/// format = "json"
///
/// [presets.rsync]
/// user = "deploy"
/// host = "backup.lan"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmithConfig {
    /// Copy every generated command to the clipboard
    pub copy: bool,
    /// Default output format (`table`, `json` or `yaml`)
    pub format: Option<String>,
    /// Per-tool field values applied before command-line assignments
    pub presets: BTreeMap<String, BTreeMap<String, OptionValue>>,
}

impl SmithConfig {
    /// Preset values for `tool`.
    ///
    /// Tool and field keys written with `_` (as environment variables must
    /// be) match their kebab-case names.
    pub fn presets_for(&self, tool: &str) -> OptionSet {
        let mut options = OptionSet::new();
        for (name, fields) in &self.presets {
            if name.replace('_', "-") != tool {
                continue;
            }
            for (field, value) in fields {
                options.set(field, value.clone());
            }
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_for_normalizes_keys() {
        let mut fields = BTreeMap::new();
        fields.insert("print_fields".to_string(), OptionValue::from("1 2"));
        let mut presets = BTreeMap::new();
        presets.insert("sed_awk".to_string(), fields);
        let config = SmithConfig {
            presets,
            ..Default::default()
        };

        let options = config.presets_for("sed-awk");
        assert_eq!(options.text("print-fields"), "1 2");
        assert!(config.presets_for("chmod").is_empty());
    }

    #[test]
    fn test_deserializes_mixed_value_types() {
        let config: SmithConfig = serde_json::from_value(serde_json::json!({
            "copy": true,
            "presets": { "chmod": { "owner": 6, "target": "run.sh" } }
        }))
        .unwrap();

        assert!(config.copy);
        assert_eq!(config.format, None);
        let chmod = config.presets_for("chmod");
        assert_eq!(chmod.number("owner"), Some(6));
        assert_eq!(chmod.text("target"), "run.sh");
    }
}

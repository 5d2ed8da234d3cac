//! Tool registry for command synthesis
//!
//! Each command family implements [`ToolSpec`]; the [`ToolRegistry`] maps a
//! tool name to its implementation so callers dispatch by name instead of
//! branching on a mode string.
//!
//! # Creating New Tools
//!
//! 1. Create a unit struct implementing [`ToolSpec`]
//! 2. Declare the form fields with their defaults in `fields()`
//! 3. Implement `synthesize()` as a pure function of the resolved option set
//! 4. Register the tool in [`ToolRegistry::with_builtin_tools`]
//!
//! ```rust
//! use shellsmith::{CommandLine, FieldDef, OptionSet, ToolFamily, ToolSpec};
//!
//! struct Uptime;
//!
//! impl ToolSpec for Uptime {
//!     fn name(&self) -> &'static str {
//!         "uptime"
//!     }
//!
//!     fn description(&self) -> &'static str {
//!         "Show how long the system has been running"
//!     }
//!
//!     fn family(&self) -> ToolFamily {
//!         ToolFamily::SystemInfo
//!     }
//!
//!     fn fields(&self) -> Vec<FieldDef> {
//!         vec![FieldDef::boolean("pretty", true)]
//!     }
//!
//!     fn synthesize(&self, options: &OptionSet) -> String {
//!         CommandLine::new("uptime").arg_if(options.flag("pretty"), "-p").render()
//!     }
//! }
//!
//! let generated = Uptime.generate(&OptionSet::new());
//! assert_eq!(generated.command, "uptime -p");
//! ```

use crate::error::{Result, SmithError};
use crate::options::OptionSet;
use crate::tools;
use crate::types::FieldDef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// The broad area a tool belongs to, used to group listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolFamily {
    FileOps,
    TextProcessing,
    Networking,
    Archiving,
    ServiceManagement,
    SystemInfo,
}

impl ToolFamily {
    pub const ALL: [ToolFamily; 6] = [
        ToolFamily::FileOps,
        ToolFamily::TextProcessing,
        ToolFamily::Networking,
        ToolFamily::Archiving,
        ToolFamily::ServiceManagement,
        ToolFamily::SystemInfo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolFamily::FileOps => "file-ops",
            ToolFamily::TextProcessing => "text-processing",
            ToolFamily::Networking => "networking",
            ToolFamily::Archiving => "archiving",
            ToolFamily::ServiceManagement => "service-management",
            ToolFamily::SystemInfo => "system-info",
        }
    }
}

impl fmt::Display for ToolFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ToolFamily {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ToolFamily::ALL
            .into_iter()
            .find(|family| family.as_str() == s)
            .ok_or_else(|| format!("unknown tool family '{s}'"))
    }
}

/// A derived note shown next to a generated command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    pub label: String,
    pub value: String,
}

impl Annotation {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The result of synthesizing one tool's option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCommand {
    pub tool: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl fmt::Display for GeneratedCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command)
    }
}

/// A command family: its form fields and its synthesis rule.
///
/// `synthesize` must be a pure, total function of the option set. It is
/// normally handed a set already passed through [`OptionSet::resolve`], but
/// must not panic on an unresolved one either.
pub trait ToolSpec: Send + Sync {
    /// Unique registry name, kebab-case (e.g. `curl-wget`).
    fn name(&self) -> &'static str;

    /// One-line human description.
    fn description(&self) -> &'static str;

    fn family(&self) -> ToolFamily;

    /// The recognised fields, in form order.
    fn fields(&self) -> Vec<FieldDef>;

    /// Render the command text for a resolved option set.
    fn synthesize(&self, options: &OptionSet) -> String;

    /// Derived notes for a resolved option set. None by default.
    fn annotations(&self, _options: &OptionSet) -> Vec<Annotation> {
        Vec::new()
    }

    /// Resolve `options` against this tool's fields and synthesize.
    fn generate(&self, options: &OptionSet) -> GeneratedCommand {
        let resolved = options.resolve(&self.fields());
        GeneratedCommand {
            tool: self.name().to_string(),
            command: self.synthesize(&resolved),
            annotations: self.annotations(&resolved),
        }
    }
}

/// Registry mapping tool names to implementations.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Box<dyn ToolSpec>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry holding every built-in tool
    pub fn with_builtin_tools() -> Self {
        let mut registry = Self::new();
        tools::register_builtin_tools(&mut registry);
        debug!("Registered {} built-in tools", registry.len());
        registry
    }

    /// Register a tool, replacing any tool with the same name
    pub fn register<T: ToolSpec + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&dyn ToolSpec> {
        self.tools.get(name).map(|tool| tool.as_ref())
    }

    /// Look a tool up, failing with the list of known names
    pub fn require(&self, name: &str) -> Result<&dyn ToolSpec> {
        self.get(name).ok_or_else(|| SmithError::UnknownTool {
            name: name.to_string(),
            available: self.names().join(", "),
        })
    }

    /// All tool names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.tools.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// All tools sorted by family, then name
    pub fn tools(&self) -> Vec<&dyn ToolSpec> {
        let mut tools: Vec<&dyn ToolSpec> = self.tools.values().map(|t| t.as_ref()).collect();
        tools.sort_by_key(|t| (t.family(), t.name()));
        tools
    }

    /// Tools of one family, sorted by name
    pub fn by_family(&self, family: ToolFamily) -> Vec<&dyn ToolSpec> {
        self.tools()
            .into_iter()
            .filter(|t| t.family() == family)
            .collect()
    }

    /// Generate the command for tool `name`.
    ///
    /// Fails only when the tool is unknown.
    pub fn generate(&self, name: &str, options: &OptionSet) -> Result<GeneratedCommand> {
        let tool = self.require(name)?;
        let generated = tool.generate(options);
        debug!(tool = name, command = %generated.command, "synthesized command");
        Ok(generated)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command_line::CommandLine;

    struct Probe;

    impl ToolSpec for Probe {
        fn name(&self) -> &'static str {
            "probe"
        }

        fn description(&self) -> &'static str {
            "test tool"
        }

        fn family(&self) -> ToolFamily {
            ToolFamily::SystemInfo
        }

        fn fields(&self) -> Vec<FieldDef> {
            vec![FieldDef::text("target", "here")]
        }

        fn synthesize(&self, options: &OptionSet) -> String {
            CommandLine::new("probe").arg(options.text("target")).render()
        }
    }

    #[test]
    fn test_registry_creation() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_and_generate() {
        let mut registry = ToolRegistry::new();
        registry.register(Probe);
        let generated = registry
            .generate("probe", &OptionSet::new().with("target", ""))
            .unwrap();
        assert_eq!(generated.command, "probe here");
        assert_eq!(generated.tool, "probe");
        assert_eq!(generated.to_string(), "probe here");
    }

    #[test]
    fn test_unknown_tool_lists_available_names() {
        let mut registry = ToolRegistry::new();
        registry.register(Probe);
        let err = registry.generate("nope", &OptionSet::new()).unwrap_err();
        assert_eq!(
            err,
            SmithError::UnknownTool {
                name: "nope".into(),
                available: "probe".into()
            }
        );
    }

    #[test]
    fn test_family_parse_round_trip() {
        for family in ToolFamily::ALL {
            assert_eq!(family.as_str().parse::<ToolFamily>().unwrap(), family);
        }
        assert!("gardening".parse::<ToolFamily>().is_err());
    }

    #[test]
    fn test_builtin_registry_groups_by_family() {
        let registry = ToolRegistry::with_builtin_tools();
        let total: usize = ToolFamily::ALL
            .into_iter()
            .map(|f| registry.by_family(f).len())
            .sum();
        assert_eq!(total, registry.len());
        let names: Vec<&str> = registry
            .by_family(ToolFamily::Archiving)
            .iter()
            .map(|t| t.name())
            .collect();
        assert_eq!(names, vec!["zip-unzip"]);
    }
}

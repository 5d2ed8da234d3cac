//! Shared state for one CLI invocation

use serde::Serialize;
use shellsmith::ToolRegistry;
use shellsmith_config::SmithConfig;

use crate::cli::OutputFormat;
use crate::error::CliResult;

/// Everything a command needs: the loaded configuration, the tool registry
/// and the effective output format.
pub struct CliContext {
    pub config: SmithConfig,
    pub registry: ToolRegistry,
    pub format: OutputFormat,
}

impl CliContext {
    /// The `--format` flag wins over the configured format.
    pub fn new(config: SmithConfig, format: Option<OutputFormat>) -> Self {
        let format = format
            .or_else(|| {
                config
                    .format
                    .as_deref()
                    .and_then(|f| <OutputFormat as clap::ValueEnum>::from_str(f, true).ok())
            })
            .unwrap_or_default();
        Self {
            config,
            registry: ToolRegistry::with_builtin_tools(),
            format,
        }
    }

    /// Render `value` as JSON or YAML according to the output format.
    ///
    /// Returns `None` for the table format, which each command renders itself.
    pub fn render_structured<T: Serialize>(&self, value: &T) -> CliResult<Option<String>> {
        match self.format {
            OutputFormat::Json => Ok(Some(serde_json::to_string_pretty(value)?)),
            OutputFormat::Yaml => Ok(Some(serde_yaml_ng::to_string(value)?)),
            OutputFormat::Table => Ok(None),
        }
    }
}

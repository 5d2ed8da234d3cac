//! `smith gen <tool>` - synthesize a command.
//!
//! Values are layered field defaults, then configured presets, then `-s`
//! assignments, and resolved once before synthesis.

use shellsmith::{GeneratedCommand, OptionSet, ToolSpec};
use tracing::{debug, info, warn};

use crate::clipboard::copy_to_clipboard;
use crate::context::CliContext;
use crate::error::CliResult;

/// Options of one `gen` invocation.
#[derive(Debug, Default)]
pub struct GenerateRequest<'a> {
    pub tool: &'a str,
    pub assignments: &'a [String],
    pub copy: bool,
    pub no_presets: bool,
    pub explain: bool,
}

/// Build the unresolved option set for `tool`.
///
/// Assignments are parsed strictly; presets from configuration are applied
/// leniently and unknown preset fields are only logged.
pub fn build_options(
    context: &CliContext,
    tool: &dyn ToolSpec,
    assignments: &[String],
    no_presets: bool,
) -> CliResult<OptionSet> {
    let fields = tool.fields();
    let mut options = OptionSet::defaults_for(&fields);

    if !no_presets {
        let presets = context.config.presets_for(tool.name());
        for (name, _) in presets.iter() {
            if !fields.iter().any(|f| &f.name == name) {
                warn!(tool = tool.name(), field = %name, "ignoring preset for unknown field");
            }
        }
        debug!(tool = tool.name(), count = presets.len(), "applying presets");
        options = options.merge(&presets);
    }

    for assignment in assignments {
        let (name, value) = OptionSet::parse_assignment(tool.name(), &fields, assignment)?;
        options.set(&name, value);
    }
    Ok(options)
}

/// Plain-text rendering: the command, then `# label: value` notes when asked.
pub fn render_text(generated: &GeneratedCommand, explain: bool) -> String {
    let mut out = generated.command.trim_end().to_string();
    if explain && !generated.annotations.is_empty() {
        out.push('\n');
        for note in &generated.annotations {
            out.push_str(&format!("\n# {}: {}", note.label, note.value));
        }
    }
    out
}

pub fn run_generate(context: &CliContext, request: &GenerateRequest<'_>) -> CliResult<()> {
    let tool = context.registry.require(request.tool)?;
    let options = build_options(context, tool, request.assignments, request.no_presets)?;
    let generated = context.registry.generate(tool.name(), &options)?;

    match context.render_structured(&generated)? {
        Some(output) => println!("{output}"),
        None => println!("{}", render_text(&generated, request.explain)),
    }

    if request.copy || context.config.copy {
        match copy_to_clipboard(&generated.command) {
            Ok(()) => info!("Copied to clipboard"),
            Err(e) => warn!("Could not copy to clipboard: {e}"),
        }
    }
    Ok(())
}

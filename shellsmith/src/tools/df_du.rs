//! Disk usage with `df` (filesystems) and `du` (directories)

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

pub struct DfDuTool;

impl DfDuTool {
    fn df(options: &OptionSet) -> CommandLine {
        CommandLine::new("df")
            .arg_if(options.flag("human"), "-h")
            .arg_if(options.flag("show-type"), "-T")
            .arg(options.text("path").trim())
    }

    fn du(options: &OptionSet) -> CommandLine {
        let human = options.flag("human");
        let depth = options.number("max-depth").unwrap_or(0);
        let path = match options.text("path").trim() {
            "" => ".",
            p => p,
        };

        let cmd = CommandLine::new("du")
            .arg_if(human, "-h")
            .arg_if(options.flag("summarize"), "-s")
            .arg_if(depth > 0, format!("--max-depth={depth}"))
            .arg(path);

        if options.flag("sort") {
            cmd.pipe(CommandLine::new("sort").arg(if human { "-h" } else { "-n" }))
        } else {
            cmd
        }
    }
}

impl ToolSpec for DfDuTool {
    fn name(&self) -> &'static str {
        "df-du"
    }

    fn description(&self) -> &'static str {
        "Report filesystem space (df) or directory sizes (du)"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::SystemInfo
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("mode", &["df", "du"], "df"),
            FieldDef::boolean("human", true).describe("Human-readable sizes"),
            FieldDef::boolean("show-type", false).describe("df only, print filesystem type"),
            FieldDef::boolean("summarize", false).describe("du only, one total per argument"),
            FieldDef::number("max-depth", 0, Some(0), None).describe("du only, 0 leaves it unset"),
            FieldDef::boolean("sort", false).describe("du only, sort by size"),
            FieldDef::text("path", "").describe("Optional for df; du uses . when empty"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        match options.text("mode") {
            "du" => Self::du(options),
            _ => Self::df(options),
        }
        .render()
    }
}

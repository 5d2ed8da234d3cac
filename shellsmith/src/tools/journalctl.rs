//! `journalctl` log queries
//!
//! One primary filter (unit, time window, boot or priority) plus the
//! follow/reverse/output modifiers.

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::quote::escape_double_quotes;
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

const OUTPUTS: [&str; 6] = ["short", "short-iso", "json", "json-pretty", "verbose", "cat"];

pub struct JournalctlTool;

impl ToolSpec for JournalctlTool {
    fn name(&self) -> &'static str {
        "journalctl"
    }

    fn description(&self) -> &'static str {
        "Query the systemd journal by unit, time, boot or priority"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::ServiceManagement
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("filter", &["service", "time", "boot", "priority"], "service"),
            FieldDef::text("unit", "nginx.service"),
            FieldDef::text("since", "1 hour ago").describe("Any systemd.time expression"),
            FieldDef::text("boot-offset", "").describe("e.g. -1 for the previous boot"),
            FieldDef::number("priority", 3, Some(0), Some(7)).describe("0 emerg .. 7 debug"),
            FieldDef::boolean("follow", false),
            FieldDef::boolean("reverse", false).describe("Newest entries first"),
            FieldDef::select("output", &OUTPUTS, "short"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let cmd = CommandLine::new("journalctl");
        let cmd = match options.text("filter") {
            "time" => cmd.arg("-S").arg(format!(
                "\"{}\"",
                escape_double_quotes(options.text("since").trim())
            )),
            "boot" => cmd.arg("-b").arg(options.text("boot-offset").trim()),
            "priority" => cmd
                .arg("-p")
                .arg(options.number("priority").unwrap_or(3).clamp(0, 7).to_string()),
            _ => cmd.arg("-u").arg(options.text("unit").trim()),
        };

        let output = options.text("output");
        cmd.arg_if(options.flag("follow"), "-f")
            .arg_if(options.flag("reverse"), "-r")
            .arg_if(OUTPUTS.contains(&output) && output != "short", "-o")
            .arg_if(OUTPUTS.contains(&output) && output != "short", output)
            .render()
    }
}

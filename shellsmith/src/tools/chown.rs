//! `chown` / `chgrp`

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

pub struct ChownTool;

impl ToolSpec for ChownTool {
    fn name(&self) -> &'static str {
        "chown"
    }

    fn description(&self) -> &'static str {
        "Change file owner and group (chown/chgrp)"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::FileOps
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::text("owner", "user"),
            FieldDef::text("group", "").describe("Optional; required when changing the group only"),
            FieldDef::text("path", "."),
            FieldDef::boolean("recursive", false),
            FieldDef::boolean("group-only", false).describe("Use chgrp instead of chown"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let group = options.text("group").trim();
        let recursive = options.flag("recursive");

        let cmd = if options.flag("group-only") {
            let group = if group.is_empty() { "group" } else { group };
            CommandLine::sudo("chgrp")
                .arg_if(recursive, "-R")
                .arg(group)
        } else {
            let owner = if group.is_empty() {
                options.text("owner").to_string()
            } else {
                format!("{}:{group}", options.text("owner"))
            };
            CommandLine::sudo("chown")
                .arg_if(recursive, "-R")
                .arg(owner)
        };

        cmd.arg(options.text("path")).render()
    }
}

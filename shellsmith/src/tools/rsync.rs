//! `rsync` transfers in push, pull or local direction

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::quote::is_absolute;
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

pub struct RsyncTool;

impl RsyncTool {
    fn remote(options: &OptionSet, path: &str) -> String {
        let user = options.text("user").trim();
        let host = options.text("host").trim();
        if user.is_empty() {
            format!("{host}:{path}")
        } else {
            format!("{user}@{host}:{path}")
        }
    }
}

impl ToolSpec for RsyncTool {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn description(&self) -> &'static str {
        "Synchronise files locally or with a remote host over ssh"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::Networking
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("direction", &["push", "pull", "local"], "push"),
            FieldDef::text("source", "./data/"),
            FieldDef::text("destination", "/srv/backup/"),
            FieldDef::text("user", "").describe("Remote login, omitted when empty"),
            FieldDef::text("host", "example.com"),
            FieldDef::boolean("archive", true).describe("-a: keep permissions, times and links"),
            FieldDef::boolean("delete", false).describe("Remove files missing from the source"),
            FieldDef::boolean("progress", false),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let source = options.text("source").trim();
        let destination = options.text("destination").trim();
        let direction = options.text("direction");
        let local = direction == "local";

        let (src, dst) = match direction {
            "pull" => (Self::remote(options, source), destination.to_string()),
            "local" => (source.to_string(), destination.to_string()),
            _ => (source.to_string(), Self::remote(options, destination)),
        };

        let elevated = !local || is_absolute(source) || is_absolute(destination);
        CommandLine::sudo_if(elevated, "rsync")
            .arg(if options.flag("archive") { "-avz" } else { "-rz" })
            .arg_if(!local, "-e")
            .arg_if(!local, "ssh")
            .arg_if(options.flag("delete"), "--delete")
            .arg_if(options.flag("progress"), "--progress")
            .arg(src)
            .arg(dst)
            .render()
    }
}

//! Local account management (`useradd`, `usermod`, `passwd`, ...)

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

const ACTIONS: [&str; 8] = [
    "add",
    "delete",
    "passwd",
    "add-to-group",
    "lock",
    "unlock",
    "groups",
    "info",
];

pub struct UserTool;

impl ToolSpec for UserTool {
    fn name(&self) -> &'static str {
        "user"
    }

    fn description(&self) -> &'static str {
        "Create, delete, lock and inspect local user accounts"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::SystemInfo
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("action", &ACTIONS, "add"),
            FieldDef::text("username", "newuser"),
            FieldDef::text("group", "sudo").describe("add-to-group only"),
            FieldDef::boolean("create-home", true).describe("add only"),
            FieldDef::text("shell", "/bin/bash").describe("add only, login shell"),
            FieldDef::boolean("remove-home", false).describe("delete only"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let username = options.text("username").trim();

        let cmd = match options.text("action") {
            "delete" => CommandLine::sudo("userdel").arg_if(options.flag("remove-home"), "-r"),
            "passwd" => CommandLine::sudo("passwd"),
            "add-to-group" => CommandLine::sudo("usermod")
                .arg("-aG")
                .arg(options.text("group").trim()),
            "lock" => CommandLine::sudo("usermod").arg("-L"),
            "unlock" => CommandLine::sudo("usermod").arg("-U"),
            "groups" => CommandLine::new("groups"),
            "info" => CommandLine::new("id"),
            _ => CommandLine::sudo("useradd")
                .arg_if(options.flag("create-home"), "-m")
                .option("-s", options.text("shell").trim()),
        };
        cmd.arg(username).render()
    }
}

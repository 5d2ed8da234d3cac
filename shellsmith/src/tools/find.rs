//! `find` with name, type and time filters and one terminal action

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::quote::single_quote;
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

pub struct FindTool;

/// Words placed between `-exec` and `{}`.
///
/// A command holding single quotes runs through `sh -c` so its quotes can be
/// escaped inside one single-quoted script; the match arrives as `$1`.
fn exec_words(command: &str) -> Vec<String> {
    if command.contains('\'') {
        vec![
            "sh".to_string(),
            "-c".to_string(),
            single_quote(&format!("{command} \"$1\"")),
            "sh".to_string(),
        ]
    } else {
        vec![command.to_string()]
    }
}

/// `-mtime 7` means exactly 7 days; users almost always mean "older than".
fn signed_time(value: &str) -> String {
    if value.starts_with('+') || value.starts_with('-') {
        value.to_string()
    } else {
        format!("+{value}")
    }
}

impl ToolSpec for FindTool {
    fn name(&self) -> &'static str {
        "find"
    }

    fn description(&self) -> &'static str {
        "Search for files by name, type and age, then print, delete or exec"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::FileOps
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::text("directory", "."),
            FieldDef::text("name", "").describe("Case-insensitive glob, e.g. *.log"),
            FieldDef::select("type", &["any", "f", "d", "l"], "any"),
            FieldDef::select("time-field", &["mtime", "ctime", "atime"], "mtime"),
            FieldDef::text("time-value", "").describe("Days; +N older, -N newer, N alone means +N"),
            FieldDef::select("action", &["print", "delete", "exec"], "print"),
            FieldDef::text("exec-command", "").describe("exec only, run once per match"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let name = options.text("name").trim();
        let file_type = options.text("type");
        let time_value = options.text("time-value").trim();
        let exec_command = options.text("exec-command").trim();

        let cmd = CommandLine::new("find")
            .arg(options.text("directory").trim())
            .arg_if(!name.is_empty(), "-iname")
            .arg_if(!name.is_empty(), single_quote(name))
            .arg_if(matches!(file_type, "f" | "d" | "l"), "-type")
            .arg_if(matches!(file_type, "f" | "d" | "l"), file_type)
            .arg_if(!time_value.is_empty(), format!("-{}", options.text("time-field")))
            .arg_if(!time_value.is_empty(), signed_time(time_value));

        let cmd = match options.text("action") {
            "delete" => cmd.arg("-delete"),
            "exec" if !exec_command.is_empty() => cmd
                .arg("-exec")
                .args(exec_words(exec_command))
                .arg("{}")
                .arg("\\;"),
            _ => cmd.arg("-print"),
        };
        cmd.render()
    }
}

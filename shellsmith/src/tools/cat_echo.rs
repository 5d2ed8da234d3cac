//! `echo` into files and `cat` concatenation

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::quote::{escape_double_quotes, split_list};
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

pub struct CatEchoTool;

impl CatEchoTool {
    fn echo(options: &OptionSet, redirect: &str) -> CommandLine {
        let text = options.text("text");
        // `\n` here is the two characters typed by the user, not a newline.
        let interprets_escapes = text.contains("\\n");
        CommandLine::new("echo")
            .arg_if(interprets_escapes, "-e")
            .arg(format!("\"{}\"", escape_double_quotes(text)))
            .arg(redirect)
            .arg(options.text("target"))
    }
}

impl ToolSpec for CatEchoTool {
    fn name(&self) -> &'static str {
        "cat-echo"
    }

    fn description(&self) -> &'static str {
        "Create, append to or concatenate files with echo and cat"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::FileOps
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("mode", &["create", "append", "concatenate"], "create"),
            FieldDef::text("text", "").describe("Text to write; \\n enables echo -e"),
            FieldDef::text("files", "file1.txt file2.txt").describe("Files to concatenate"),
            FieldDef::text("target", "output.txt").describe("Destination file"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        match options.text("mode") {
            "append" => Self::echo(options, ">>"),
            "concatenate" => CommandLine::new("cat")
                .args(split_list(options.text("files")))
                .arg(">")
                .arg(options.text("target")),
            _ => Self::echo(options, ">"),
        }
        .render()
    }
}

//! Stream editing with `sed` substitutions and `awk` field printing
//!
//! Both scripts are emitted inside single quotes, so every user-supplied
//! piece that lands in the script is passed through
//! [`escape_single_quotes`](crate::quote::escape_single_quotes).

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::quote::{escape_single_quotes, single_quote, split_list};
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

pub struct SedAwkTool;

/// `1 3 $NF` → `$1, $3, $NF`
fn awk_fields(list: &str) -> String {
    let fields: Vec<String> = split_list(list)
        .into_iter()
        .map(|f| {
            if f.starts_with('$') {
                f.to_string()
            } else {
                format!("${f}")
            }
        })
        .collect();
    if fields.is_empty() {
        "$0".to_string()
    } else {
        fields.join(", ")
    }
}

impl SedAwkTool {
    fn sed(options: &OptionSet) -> CommandLine {
        let mut flags = String::new();
        if options.flag("global") {
            flags.push('g');
        }
        if options.flag("ignore-case") {
            flags.push('i');
        }
        let script = format!(
            "s/{}/{}/{}",
            options.text("pattern"),
            options.text("replacement"),
            flags
        );

        CommandLine::new("sed")
            .arg_if(options.flag("in-place"), "-i.bak")
            .arg(single_quote(&script))
            .arg(options.text("file").trim())
    }

    fn awk(options: &OptionSet) -> CommandLine {
        let separator = match options.text("separator") {
            "" => " ",
            s => s,
        };
        let condition = options.text("condition").trim();
        let program = format!(
            "{}{{ print {} }}",
            if condition.is_empty() {
                String::new()
            } else {
                format!("{condition} ")
            },
            awk_fields(options.text("print-fields"))
        );

        CommandLine::new("awk")
            .arg(format!("-F'{}'", escape_single_quotes(separator)))
            .arg(single_quote(&program))
            .arg(options.text("file").trim())
    }
}

impl ToolSpec for SedAwkTool {
    fn name(&self) -> &'static str {
        "sed-awk"
    }

    fn description(&self) -> &'static str {
        "Substitute text with sed or print selected columns with awk"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::TextProcessing
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("mode", &["sed", "awk"], "sed"),
            FieldDef::text("pattern", "pattern").describe("sed only, regex to replace"),
            FieldDef::text("replacement", "")
                .verbatim()
                .describe("sed only, empty deletes the match"),
            FieldDef::boolean("global", true).describe("sed only, replace every match on a line"),
            FieldDef::boolean("ignore-case", false).describe("sed only"),
            FieldDef::boolean("in-place", false).describe("sed only, edit the file keeping a .bak"),
            FieldDef::text("separator", " ")
                .verbatim()
                .describe("awk only, field separator"),
            FieldDef::text("condition", "").describe("awk only, e.g. $3 > 100"),
            FieldDef::text("print-fields", "").describe("awk only, e.g. 1 3; all when empty"),
            FieldDef::text("file", "file.txt"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        match options.text("mode") {
            "awk" => Self::awk(options),
            _ => Self::sed(options),
        }
        .render()
    }
}

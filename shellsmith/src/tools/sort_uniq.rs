//! `sort`, optionally piped into `uniq`

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

pub struct SortUniqTool;

impl ToolSpec for SortUniqTool {
    fn name(&self) -> &'static str {
        "sort-uniq"
    }

    fn description(&self) -> &'static str {
        "Sort lines and optionally filter or count duplicates with uniq"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::TextProcessing
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::text("file", "file.txt"),
            FieldDef::boolean("reverse", false),
            FieldDef::boolean("numeric", false),
            FieldDef::boolean("ignore-case", false),
            FieldDef::boolean("human", false).describe("Compare sizes such as 2K or 1G"),
            FieldDef::text("key", "").describe("Sort key, e.g. 2 or 2,2"),
            FieldDef::select("uniq", &["none", "unique", "duplicates", "count"], "none")
                .describe("Pipe the sorted output through uniq"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let sort = CommandLine::new("sort")
            .arg_if(options.flag("reverse"), "-r")
            .arg_if(options.flag("numeric"), "-n")
            .arg_if(options.flag("ignore-case"), "-f")
            .arg_if(options.flag("human"), "-h")
            .option("-k", options.text("key").trim())
            .arg(options.text("file").trim());

        let uniq_flag = match options.text("uniq") {
            "unique" => "-u",
            "duplicates" => "-d",
            "count" => "-c",
            _ => return sort.render(),
        };
        sort.pipe(CommandLine::new("uniq").arg(uniq_flag)).render()
    }
}

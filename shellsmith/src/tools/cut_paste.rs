//! Column extraction with `cut` and column joining with `paste`

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::quote::{single_quote, split_list};
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

pub struct CutPasteTool;

impl ToolSpec for CutPasteTool {
    fn name(&self) -> &'static str {
        "cut-paste"
    }

    fn description(&self) -> &'static str {
        "Extract fields with cut or merge files line by line with paste"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::TextProcessing
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("mode", &["cut", "paste"], "cut"),
            FieldDef::text("delimiter", "\t")
                .verbatim()
                .describe("Field delimiter, a tab when left empty"),
            FieldDef::text("fields", "1").describe("cut only, e.g. 1,3 or 2-4"),
            FieldDef::text("file", "file.txt").describe("cut only"),
            FieldDef::text("files", "file1.txt file2.txt").describe("paste only"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let delimiter = match options.text("delimiter") {
            "" => "\t",
            d => d,
        };

        let cmd = match options.text("mode") {
            "paste" => CommandLine::new("paste")
                .arg("-d")
                .arg(single_quote(delimiter))
                .args(split_list(options.text("files"))),
            _ => CommandLine::new("cut")
                .arg("-d")
                .arg(single_quote(delimiter))
                .arg("-f")
                .arg(options.text("fields").trim())
                .arg(options.text("file")),
        };
        cmd.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_defaults_to_tab() {
        let options = OptionSet::new().with("delimiter", "");
        assert_eq!(
            CutPasteTool.generate(&options).command,
            "cut -d '\t' -f 1 file.txt"
        );
    }

    #[test]
    fn test_cut_with_comma() {
        let options = OptionSet::new()
            .with("delimiter", ",")
            .with("fields", "1,3")
            .with("file", "users.csv");
        assert_eq!(
            CutPasteTool.generate(&options).command,
            "cut -d ',' -f 1,3 users.csv"
        );
    }

    #[test]
    fn test_space_delimiter_is_kept() {
        let options = OptionSet::new().with("delimiter", " ");
        assert_eq!(
            CutPasteTool.generate(&options).command,
            "cut -d ' ' -f 1 file.txt"
        );
    }

    #[test]
    fn test_paste_joins_files() {
        let options = OptionSet::new()
            .with("mode", "paste")
            .with("delimiter", ":")
            .with("files", "names.txt ages.txt");
        assert_eq!(
            CutPasteTool.generate(&options).command,
            "paste -d ':' names.txt ages.txt"
        );
    }
}

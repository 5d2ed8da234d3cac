//! Create archives with `zip`, extract them with `unzip`

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::quote::split_list;
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

pub struct ZipUnzipTool;

impl ToolSpec for ZipUnzipTool {
    fn name(&self) -> &'static str {
        "zip-unzip"
    }

    fn description(&self) -> &'static str {
        "Compress files into a zip archive or extract one"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::Archiving
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("mode", &["zip", "unzip"], "zip"),
            FieldDef::text("archive", "archive.zip"),
            FieldDef::text("targets", ".").describe("zip only, files or folders to add"),
            FieldDef::boolean("verbose", false),
            FieldDef::boolean("encrypt", false).describe("Prompt for a password"),
            FieldDef::boolean("recursive", true).describe("zip only, descend into folders"),
            FieldDef::boolean("overwrite", false).describe("unzip only, replace without asking"),
            FieldDef::text("destination", "").describe("unzip only, extract into this folder"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let archive = options.text("archive").trim();

        let cmd = match options.text("mode") {
            "unzip" => CommandLine::new("unzip")
                .arg_if(options.flag("verbose"), "-v")
                .arg_if(options.flag("encrypt"), "-e")
                .arg_if(options.flag("overwrite"), "-o")
                .arg(archive)
                .option("-d", options.text("destination").trim()),
            _ => CommandLine::new("zip")
                .arg_if(options.flag("verbose"), "-v")
                .arg_if(options.flag("encrypt"), "-e")
                .arg_if(options.flag("recursive"), "-r")
                .arg(archive)
                .args(split_list(options.text("targets"))),
        };
        cmd.render()
    }
}

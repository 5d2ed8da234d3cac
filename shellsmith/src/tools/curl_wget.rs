//! HTTP downloads with `curl` or `wget`

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::quote::{collapse_whitespace, single_quote};
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

const METHODS: [&str; 6] = ["GET", "POST", "PUT", "PATCH", "DELETE", "HEAD"];

/// Methods that carry a request body.
const BODY_METHODS: [&str; 3] = ["POST", "PUT", "PATCH"];

pub struct CurlWgetTool;

impl CurlWgetTool {
    fn curl(options: &OptionSet) -> CommandLine {
        let method = options.text("method");
        let header = options.text("header").trim();
        let data = options.text("data");
        let sends_body = BODY_METHODS.contains(&method) && !data.trim().is_empty();

        CommandLine::new("curl")
            .option("-X", if method == "GET" { "" } else { method })
            .arg_if(!header.is_empty(), "-H")
            .arg_if(!header.is_empty(), single_quote(header))
            .arg_if(sends_body, "-d")
            .arg_if(sends_body, single_quote(data))
            .option("-o", options.text("output").trim())
            .arg(options.text("url").trim())
    }

    fn wget(options: &OptionSet) -> CommandLine {
        let rate = options.text("limit-rate").trim();
        CommandLine::new("wget")
            .args(if options.flag("recursive") {
                vec!["-r", "-l", "10"]
            } else {
                Vec::new()
            })
            .arg_if(!rate.is_empty(), format!("--limit-rate={rate}"))
            .option("-O", options.text("output").trim())
            .arg(options.text("url").trim())
    }
}

impl ToolSpec for CurlWgetTool {
    fn name(&self) -> &'static str {
        "curl-wget"
    }

    fn description(&self) -> &'static str {
        "Fetch URLs with curl (methods, headers, data) or wget (recursive, rate limits)"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::Networking
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("client", &["curl", "wget"], "curl"),
            FieldDef::text("url", "https://example.com"),
            FieldDef::select("method", &METHODS, "GET").describe("curl only"),
            FieldDef::text("header", "").describe("curl only, e.g. Content-Type: application/json"),
            FieldDef::text("data", "").describe("curl only; sent for POST, PUT and PATCH"),
            FieldDef::text("output", "").describe("Write the response to this file"),
            FieldDef::boolean("recursive", false).describe("wget only, depth 10"),
            FieldDef::text("limit-rate", "").describe("wget only, e.g. 200k"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let cmd = match options.text("client") {
            "wget" => Self::wget(options),
            _ => Self::curl(options),
        };
        collapse_whitespace(&cmd.render())
    }
}

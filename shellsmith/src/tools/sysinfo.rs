//! One-shot system information queries

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

const TOPICS: [&str; 10] = [
    "os",
    "kernel",
    "cpu",
    "memory",
    "disk",
    "uptime",
    "hostname",
    "network",
    "processes",
    "logged-in",
];

pub struct SysinfoTool;

impl ToolSpec for SysinfoTool {
    fn name(&self) -> &'static str {
        "sysinfo"
    }

    fn description(&self) -> &'static str {
        "Look up OS, hardware, network and process information"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::SystemInfo
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("topic", &TOPICS, "os"),
            FieldDef::number("count", 10, Some(1), None)
                .describe("processes only, how many to list"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let cmd = match options.text("topic") {
            "kernel" => CommandLine::new("uname").arg("-a"),
            "cpu" => CommandLine::new("lscpu"),
            "memory" => CommandLine::new("free").arg("-h"),
            "disk" => CommandLine::new("df").arg("-h"),
            "uptime" => CommandLine::new("uptime").arg("-p"),
            "hostname" => CommandLine::new("hostnamectl"),
            "network" => CommandLine::new("ip").args(["addr", "show"]),
            "processes" => {
                let count = options.number("count").unwrap_or(10).max(1);
                CommandLine::new("ps")
                    .args(["aux", "--sort=-%mem"])
                    .pipe(CommandLine::new("head").arg("-n").arg(count.to_string()))
            }
            "logged-in" => CommandLine::new("who"),
            _ => CommandLine::new("cat").arg("/etc/os-release"),
        };
        cmd.render()
    }
}

//! `docker-compose` stack commands

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

const ACTIONS: [&str; 10] = [
    "up", "down", "start", "stop", "restart", "logs", "ps", "build", "pull", "exec",
];

pub struct DockerComposeTool;

impl ToolSpec for DockerComposeTool {
    fn name(&self) -> &'static str {
        "docker-compose"
    }

    fn description(&self) -> &'static str {
        "Manage a Compose stack: up, down, logs, exec and friends"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::ServiceManagement
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("action", &ACTIONS, "up"),
            FieldDef::text("file", "").describe("Compose file, default lookup when empty"),
            FieldDef::text("service", "").describe("Limit to one service; required by exec"),
            FieldDef::boolean("detach", true).describe("up only"),
            FieldDef::boolean("build", false).describe("up only, rebuild images first"),
            FieldDef::boolean("volumes", false).describe("down only, also remove volumes"),
            FieldDef::boolean("follow", false).describe("logs only"),
            FieldDef::text("command", "sh").describe("exec only"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let service = options.text("service").trim();
        let action = options.text("action");
        let action = if ACTIONS.contains(&action) { action } else { "up" };

        let cmd = CommandLine::new("docker-compose")
            .option("-f", options.text("file").trim())
            .arg(action);

        let cmd = match action {
            "up" => cmd
                .arg_if(options.flag("detach"), "-d")
                .arg_if(options.flag("build"), "--build")
                .arg(service),
            "down" => cmd.arg_if(options.flag("volumes"), "-v"),
            "logs" => cmd.arg_if(options.flag("follow"), "-f").arg(service),
            "exec" => cmd
                .arg(if service.is_empty() { "app" } else { service })
                .arg(options.text("command").trim()),
            _ => cmd.arg(service),
        };
        cmd.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_detached_by_default() {
        assert_eq!(
            DockerComposeTool.generate(&OptionSet::new()).command,
            "docker-compose up -d"
        );
    }

    #[test]
    fn test_up_with_file_build_and_service() {
        let options = OptionSet::new()
            .with("file", "compose.prod.yml")
            .with("build", true)
            .with("service", "api");
        assert_eq!(
            DockerComposeTool.generate(&options).command,
            "docker-compose -f compose.prod.yml up -d --build api"
        );
    }

    #[test]
    fn test_down_removes_volumes() {
        let options = OptionSet::new().with("action", "down").with("volumes", true);
        assert_eq!(
            DockerComposeTool.generate(&options).command,
            "docker-compose down -v"
        );
    }

    #[test]
    fn test_logs_follow_one_service() {
        let options = OptionSet::new()
            .with("action", "logs")
            .with("follow", true)
            .with("service", "worker");
        assert_eq!(
            DockerComposeTool.generate(&options).command,
            "docker-compose logs -f worker"
        );
    }

    #[test]
    fn test_exec_falls_back_to_app_service() {
        let options = OptionSet::new().with("action", "exec");
        assert_eq!(
            DockerComposeTool.generate(&options).command,
            "docker-compose exec app sh"
        );
    }
}

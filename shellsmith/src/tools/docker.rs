//! Everyday `docker` container and image commands
//!
//! Each action maps to a fixed template that interpolates the container,
//! image or command fields.

use crate::command_line::CommandLine;
use crate::options::OptionSet;
use crate::registry::{ToolFamily, ToolSpec};
use crate::types::FieldDef;

const ACTIONS: [&str; 14] = [
    "ps", "ps-all", "images", "run", "start", "stop", "restart", "rm", "rmi", "logs", "exec",
    "pull", "build", "prune",
];

pub struct DockerTool;

impl ToolSpec for DockerTool {
    fn name(&self) -> &'static str {
        "docker"
    }

    fn description(&self) -> &'static str {
        "Run, inspect and clean up Docker containers and images"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::ServiceManagement
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::select("action", &ACTIONS, "ps"),
            FieldDef::text("container", "my-container"),
            FieldDef::text("image", "nginx:latest"),
            FieldDef::text("ports", "").describe("run only, e.g. 8080:80"),
            FieldDef::boolean("detach", true).describe("run only"),
            FieldDef::boolean("follow", false).describe("logs only"),
            FieldDef::text("command", "/bin/sh").describe("exec only"),
            FieldDef::text("context", ".").describe("build only"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let container = options.text("container").trim();
        let image = options.text("image").trim();
        let docker = || CommandLine::new("docker");

        let cmd = match options.text("action") {
            "ps-all" => docker().arg("ps").arg("-a"),
            "images" => docker().arg("images"),
            "run" => docker()
                .arg("run")
                .arg_if(options.flag("detach"), "-d")
                .option("--name", container)
                .option("-p", options.text("ports").trim())
                .arg(image),
            action @ ("start" | "stop" | "restart" | "rm") => docker().arg(action).arg(container),
            "rmi" => docker().arg("rmi").arg(image),
            "logs" => docker()
                .arg("logs")
                .arg_if(options.flag("follow"), "-f")
                .arg(container),
            "exec" => docker()
                .arg("exec")
                .arg("-it")
                .arg(container)
                .arg(options.text("command").trim()),
            "pull" => docker().arg("pull").arg(image),
            "build" => docker()
                .arg("build")
                .arg("-t")
                .arg(image)
                .arg(options.text("context").trim()),
            "prune" => docker().args(["system", "prune", "-f"]),
            _ => docker().arg("ps"),
        };
        cmd.render()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ps", "docker ps")]
    #[case("ps-all", "docker ps -a")]
    #[case("images", "docker images")]
    #[case("run", "docker run -d --name my-container nginx:latest")]
    #[case("stop", "docker stop my-container")]
    #[case("rm", "docker rm my-container")]
    #[case("rmi", "docker rmi nginx:latest")]
    #[case("logs", "docker logs my-container")]
    #[case("exec", "docker exec -it my-container /bin/sh")]
    #[case("pull", "docker pull nginx:latest")]
    #[case("build", "docker build -t nginx:latest .")]
    #[case("prune", "docker system prune -f")]
    fn test_action_templates(#[case] action: &str, #[case] expected: &str) {
        let options = OptionSet::new().with("action", action);
        assert_eq!(DockerTool.generate(&options).command, expected);
    }

    #[test]
    fn test_run_with_ports_in_foreground() {
        let options = OptionSet::new()
            .with("action", "run")
            .with("detach", false)
            .with("container", "web")
            .with("ports", "8080:80")
            .with("image", "httpd:2.4");
        assert_eq!(
            DockerTool.generate(&options).command,
            "docker run --name web -p 8080:80 httpd:2.4"
        );
    }

    #[test]
    fn test_follow_logs() {
        let options = OptionSet::new()
            .with("action", "logs")
            .with("follow", true)
            .with("container", "db");
        assert_eq!(DockerTool.generate(&options).command, "docker logs -f db");
    }
}

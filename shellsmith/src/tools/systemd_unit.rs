//! systemd `.service` unit files
//!
//! Unlike the other tools this one renders a multi-line file rather than a
//! command. The install location is reported as an annotation.

use crate::options::OptionSet;
use crate::registry::{Annotation, ToolFamily, ToolSpec};
use crate::types::FieldDef;
use heck::ToKebabCase;

pub struct SystemdUnitTool;

impl SystemdUnitTool {
    fn unit_name(options: &OptionSet) -> String {
        match options.text("service-name").trim().to_kebab_case() {
            name if name.is_empty() => "my-service".to_string(),
            name => name,
        }
    }
}

impl ToolSpec for SystemdUnitTool {
    fn name(&self) -> &'static str {
        "systemd-unit"
    }

    fn description(&self) -> &'static str {
        "Write a systemd service unit for a long-running program"
    }

    fn family(&self) -> ToolFamily {
        ToolFamily::ServiceManagement
    }

    fn fields(&self) -> Vec<FieldDef> {
        vec![
            FieldDef::text("service-name", "my-service"),
            FieldDef::text("description", "").describe("Defaults to 'Service for <name>'"),
            FieldDef::text("exec-start", "").describe("Defaults to /usr/local/bin/<name>"),
            FieldDef::text("user", "").describe("Run as this account, root when empty"),
            FieldDef::select("restart", &["always", "on-failure", "no"], "on-failure"),
        ]
    }

    fn synthesize(&self, options: &OptionSet) -> String {
        let name = options.text("service-name").trim();
        let unit = Self::unit_name(options);

        let description = match options.text("description").trim() {
            "" => format!("Service for {name}"),
            d => d.to_string(),
        };
        let exec_start = match options.text("exec-start").trim() {
            "" => format!("/usr/local/bin/{unit}"),
            e => e.to_string(),
        };
        let user = match options.text("user").trim() {
            "" => String::new(),
            u => format!("User={u}\n"),
        };
        let restart = match options.text("restart") {
            "" => "on-failure",
            r => r,
        };

        format!(
            "[Unit]\n\
             Description={description}\n\
             After=network.target\n\
             \n\
             [Service]\n\
             Type=simple\n\
             {user}\
             WorkingDirectory=/opt/{unit}\n\
             ExecStart={exec_start}\n\
             Restart={restart}\n\
             RestartSec=5\n\
             \n\
             [Install]\n\
             WantedBy=multi-user.target\n"
        )
    }

    fn annotations(&self, options: &OptionSet) -> Vec<Annotation> {
        let unit = Self::unit_name(options);
        vec![
            Annotation::new("install-path", format!("/etc/systemd/system/{unit}.service")),
            Annotation::new(
                "enable",
                format!("sudo systemctl daemon-reload && sudo systemctl enable --now {unit}"),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_unit_file() {
        let generated = SystemdUnitTool.generate(&OptionSet::new());
        assert_eq!(
            generated.command,
            "[Unit]\n\
             Description=Service for my-service\n\
             After=network.target\n\
             \n\
             [Service]\n\
             Type=simple\n\
             WorkingDirectory=/opt/my-service\n\
             ExecStart=/usr/local/bin/my-service\n\
             Restart=on-failure\n\
             RestartSec=5\n\
             \n\
             [Install]\n\
             WantedBy=multi-user.target\n"
        );
        assert_eq!(generated.annotations[0].label, "install-path");
        assert_eq!(
            generated.annotations[0].value,
            "/etc/systemd/system/my-service.service"
        );
    }

    #[test]
    fn test_working_directory_is_kebab_cased() {
        let options = OptionSet::new()
            .with("service-name", "Metrics Exporter")
            .with("exec-start", "/usr/bin/exporter --port 9100")
            .with("user", "metrics")
            .with("restart", "always");
        let generated = SystemdUnitTool.generate(&options);
        let unit = generated.command;

        assert!(unit.contains("Description=Service for Metrics Exporter\n"));
        assert!(unit.contains("User=metrics\nWorkingDirectory=/opt/metrics-exporter\n"));
        assert!(unit.contains("ExecStart=/usr/bin/exporter --port 9100\n"));
        assert!(unit.contains("Restart=always\n"));
        assert_eq!(
            generated.annotations[0].value,
            "/etc/systemd/system/metrics-exporter.service"
        );
    }

    #[test]
    fn test_explicit_description_wins() {
        let options = OptionSet::new().with("description", "Nightly report mailer");
        assert!(SystemdUnitTool
            .generate(&options)
            .command
            .contains("Description=Nightly report mailer\n"));
    }
}

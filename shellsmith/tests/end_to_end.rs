//! End-to-end synthesis through the public registry API

use rstest::rstest;
use shellsmith::{OptionSet, OptionValue, SmithError, ToolFamily, ToolRegistry};

#[rstest]
#[case::chown(
    "chown",
    &[("owner", "john_doe"), ("group", "webdev"), ("path", "/var/www/html/project"), ("recursive", "true")],
    "sudo chown -R john_doe:webdev /var/www/html/project"
)]
#[case::sed(
    "sed-awk",
    &[("pattern", "old_text"), ("replacement", "new_text"), ("file", "log_file.txt"), ("global", "true"), ("ignore_case", "false"), ("in_place", "false")],
    "sed 's/old_text/new_text/g' log_file.txt"
)]
#[case::curl_post(
    "curl-wget",
    &[("method", "POST"), ("url", "https://api.example.com/items"), ("header", "Content-Type: application/json"), ("data", "{\"a\":1}")],
    "curl -X POST -H 'Content-Type: application/json' -d '{\"a\":1}' https://api.example.com/items"
)]
#[case::curl_get_drops_data(
    "curl-wget",
    &[("data", "ignored")],
    "curl https://example.com"
)]
#[case::wget_recursive(
    "curl-wget",
    &[("client", "wget"), ("recursive", "yes"), ("limit-rate", "200k"), ("output", "site.html")],
    "wget -r -l 10 --limit-rate=200k -O site.html https://example.com"
)]
#[case::find_exec(
    "find",
    &[("directory", "/tmp"), ("type", "f"), ("time-value", "7"), ("action", "exec"), ("exec-command", "rm -f")],
    "find /tmp -type f -mtime +7 -exec rm -f {} \\;"
)]
#[case::rsync_pull(
    "rsync",
    &[("direction", "pull"), ("host", "backup.lan"), ("source", "/data/"), ("destination", "./restore/")],
    "sudo rsync -avz -e ssh backup.lan:/data/ ./restore/"
)]
#[case::awk(
    "sed-awk",
    &[("mode", "awk"), ("separator", ":"), ("print-fields", "1 7"), ("file", "/etc/passwd")],
    "awk -F':' '{ print $1, $7 }' /etc/passwd"
)]
#[case::blank_text_takes_default(
    "zip-unzip",
    &[("archive", "   "), ("targets", "")],
    "zip -r archive.zip ."
)]
#[case::bad_number_takes_default(
    "chmod",
    &[("owner", "seven"), ("group", "4"), ("other", "12")],
    "chmod 747 file.txt"
)]
fn test_generate(#[case] tool: &str, #[case] pairs: &[(&str, &str)], #[case] expected: &str) {
    let registry = ToolRegistry::with_builtin_tools();
    let options = pairs
        .iter()
        .fold(OptionSet::new(), |options, (k, v)| options.with(k, *v));
    assert_eq!(registry.generate(tool, &options).unwrap().command, expected);
}

#[test]
fn test_unknown_tool_lists_available_tools() {
    let registry = ToolRegistry::with_builtin_tools();
    let err = registry.generate("tar", &OptionSet::new()).unwrap_err();
    match &err {
        SmithError::UnknownTool { name, available } => {
            assert_eq!(name, "tar");
            assert!(available.contains("zip-unzip"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("unknown tool 'tar'"));
}

#[test]
fn test_strict_parsing_rejects_what_resolution_forgives() {
    let registry = ToolRegistry::with_builtin_tools();
    let chmod = registry.require("chmod").unwrap();
    let fields = chmod.fields();

    assert!(matches!(
        OptionSet::parse_assignment("chmod", &fields, "owner=9"),
        Err(SmithError::InvalidValue { .. })
    ));
    assert!(matches!(
        OptionSet::parse_assignment("chmod", &fields, "sticky=true"),
        Err(SmithError::UnknownField { .. })
    ));
    assert_eq!(
        OptionSet::parse_assignment("chmod", &fields, "owner=6").unwrap(),
        ("owner".to_string(), OptionValue::Number(6))
    );

    let lenient = OptionSet::new().with("owner", 9i64);
    assert_eq!(chmod.generate(&lenient).command, "chmod 755 file.txt");
}

#[test]
fn test_bare_boolean_assignment_means_true() {
    let registry = ToolRegistry::with_builtin_tools();
    let fields = registry.require("sort-uniq").unwrap().fields();
    assert_eq!(
        OptionSet::parse_assignment("sort-uniq", &fields, "reverse").unwrap(),
        ("reverse".to_string(), OptionValue::Bool(true))
    );
}

#[test]
fn test_families_partition_the_registry() {
    let registry = ToolRegistry::with_builtin_tools();
    let total: usize = ToolFamily::ALL
        .iter()
        .map(|family| registry.by_family(*family).len())
        .sum();
    assert_eq!(total, registry.len());
    assert!(registry
        .by_family(ToolFamily::Archiving)
        .iter()
        .any(|t| t.name() == "zip-unzip"));
}

#[test]
fn test_generated_command_serializes_annotations() {
    let registry = ToolRegistry::with_builtin_tools();
    let generated = registry
        .generate("systemd-unit", &OptionSet::new().with("service-name", "api"))
        .unwrap();
    let json = serde_json::to_value(&generated).unwrap();

    assert_eq!(json["tool"], "systemd-unit");
    assert_eq!(
        json["annotations"][0]["value"],
        "/etc/systemd/system/api.service"
    );
    assert_eq!(generated.to_string(), generated.command);
}

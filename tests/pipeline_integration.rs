use std::fs;

use auditfuse::{run_full_pipeline, AuditfuseConfig, PipelineError};

const OPENSCAP_SAMPLE: &str = r#"{
    "rules": {
        "xccdf_rule_service_telnet_disabled": {
            "title": "Disable telnet service",
            "severity": "high",
            "description": "The telnet service transmits credentials in cleartext.",
            "rationale": "Cleartext protocols expose credentials on the wire.",
            "result": "fail"
        },
        "xccdf_rule_sshd_root_login": {
            "title": "Disable SSH root login",
            "severity": "medium",
            "description": "Direct root login over SSH should be disabled.",
            "rationale": "Root logins remove accountability.",
            "result": "fail"
        },
        "xccdf_rule_aide_installed": {
            "title": "Install AIDE",
            "severity": "medium",
            "description": "File integrity monitoring should be installed.",
            "rationale": "Detects unauthorized changes.",
            "result": "pass"
        }
    }
}"#;

const LYNIS_SAMPLE: &str = r#"{
    "details[]": [
        {
            "id": "NETW-3200",
            "service": "telnet",
            "description": {"desc": "unused service running", "value": "enabled", "prefval": "disabled"}
        },
        {
            "id": "BOOT-5122",
            "service": "grub",
            "description": {"field": "password", "desc": "no boot loader password set"}
        }
    ],
    "suggestion[]": [
        {"id": "SSH-7408", "severity": "medium", "description": "Disable PermitRootLogin in sshd_config"},
        {"id": "FINT-4350", "severity": "low", "description": "Install a file integrity tool such as AIDE"}
    ]
}"#;

fn config_in(dir: &std::path::Path) -> AuditfuseConfig {
    let openscap = dir.join("openscap-report.json");
    let lynis = dir.join("lynis-report.json");
    fs::write(&openscap, OPENSCAP_SAMPLE).expect("write openscap sample");
    fs::write(&lynis, LYNIS_SAMPLE).expect("write lynis sample");

    let yaml = format!(
        r#"
version: "1.0"
inputs:
  openscap_report: "{}"
  lynis_report: "{}"
report:
  output_path: "{}"
"#,
        openscap.display(),
        lynis.display(),
        dir.join("audit-report.html").display(),
    );
    AuditfuseConfig::from_yaml(&yaml).expect("valid config")
}

#[test]
fn full_pipeline_covers_every_finding() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());

    let outcome = run_full_pipeline(&config).expect("pipeline succeeds");

    // Conservation: all 3 rules and all 4 candidates accounted for.
    assert_eq!(outcome.pairs + outcome.unpaired_rules, 3);
    assert_eq!(
        outcome.pairs + outcome.unpaired_details + outcome.unpaired_suggestions,
        4
    );

    let html = fs::read_to_string(&outcome.output_path).expect("report written");
    assert!(html.contains("<h1>Audit Report</h1>"));
    assert!(html.contains("Total Findings:"));
}

#[test]
fn pipeline_runs_against_redb_backend() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = config_in(dir.path());
    config.store.backend = "redb".into();
    config.store.redb_path = Some(dir.path().join("reports.redb").display().to_string());
    config.validate().expect("config stays valid");

    let outcome = run_full_pipeline(&config).expect("pipeline succeeds");
    assert!(outcome.output_path.exists());
    assert!(dir.path().join("reports.redb").exists());
}

#[test]
fn report_ids_advance_across_runs_on_shared_storage() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = config_in(dir.path());
    config.store.backend = "redb".into();
    config.store.redb_path = Some(dir.path().join("reports.redb").display().to_string());

    let first = run_full_pipeline(&config).expect("first run");
    let second = run_full_pipeline(&config).expect("second run");
    assert_eq!(second.report_id, first.report_id + 1);
}

#[test]
fn missing_scanner_report_fails_before_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut config = config_in(dir.path());
    config.inputs.openscap_report = dir.path().join("nope.json").display().to_string();

    let result = run_full_pipeline(&config);
    assert!(matches!(result, Err(PipelineError::Findings(_))));
    assert!(!dir.path().join("audit-report.html").exists());
}

#[test]
fn malformed_scanner_report_fails_before_output() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path());
    fs::write(dir.path().join("lynis-report.json"), "{broken").expect("overwrite with junk");

    let result = run_full_pipeline(&config);
    assert!(matches!(result, Err(PipelineError::Findings(_))));
    assert!(!dir.path().join("audit-report.html").exists());
}

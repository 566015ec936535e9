use std::path::Path;

use assert_cmd::Command;
use covenant_analysis::scanner::hasher::sha256_reader;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const IMPL: &str = "Diamond-Phase1-Implementation";
const CANONICAL: &str = "Diamond-Certification-Website-Specification.md";
const CANONICAL_BODY: &str = "# Canonical specification\n";
const ARTIFACT_BODY: &str = "Outcome Classification: DETERMINISTIC_COMPLIANCE\n";

fn write(root: &Path, relative: &str, body: &str) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, body).unwrap();
}

fn compliant_root() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), CANONICAL, CANONICAL_BODY);
    write(dir.path(), &format!("{IMPL}/verification/RUN.md"), ARTIFACT_BODY);
    write(dir.path(), &format!("{IMPL}/README.md"), "Static pages.\n");
    dir
}

fn cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("covenant").unwrap();
    for key in [
        "COVENANT_IMPLEMENTATION_DIR",
        "COVENANT_LEDGER_PATH",
        "COVENANT_CANONICAL_PATH",
        "COVENANT_NEGATION_WINDOW",
        "COVENANT_OUTPUT_DIR",
        "COVENANT_REPORT_TIMESTAMP",
    ] {
        cmd.env_remove(key);
    }
    let digest = sha256_reader(CANONICAL_BODY.as_bytes(), 4096).unwrap();
    cmd.current_dir(cwd)
        .env("COVENANT_CANONICAL_DIGEST", digest)
        .env("COVENANT_LOG", "off");
    cmd
}

fn report(dir: &Path) -> serde_json::Value {
    let text = std::fs::read_to_string(dir.join("governance-report.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn compliant_tree_exits_zero() {
    let dir = compliant_root();
    cmd(dir.path())
        .assert()
        .success()
        .stdout(contains("[RULE 1] Checking verification singularity..."))
        .stdout(contains("  -> DETERMINISTIC_COMPLIANCE: Phase-1 boundaries respected"))
        .stdout(contains("FINAL OUTCOME: DETERMINISTIC_COMPLIANCE"));

    let report = report(dir.path());
    assert_eq!(report["outcome"], "DETERMINISTIC_COMPLIANCE");
    assert_eq!(report["checks"].as_object().unwrap().len(), 4);
    assert!(!dir.path().join("governance-violations.json").exists());
}

#[test]
fn prohibited_language_exits_one_with_ledger() {
    let dir = compliant_root();
    write(dir.path(), &format!("{IMPL}/README.md"), "Our flawless system.\n");
    cmd(dir.path())
        .assert()
        .code(1)
        .stdout(contains("Found 1 prohibited language violations"));

    let ledger: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join("governance-violations.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(ledger[0]["category"], "hype");
    assert_eq!(ledger[0]["match"], "flawless system");
}

#[test]
fn inside_implementation_directory_uses_parent_root() {
    let dir = compliant_root();
    let inner = dir.path().join(IMPL);
    cmd(&inner).assert().success();
    // Artifacts land in the working directory, not the root.
    assert!(inner.join("governance-report.json").is_file());
}

#[test]
fn pinned_timestamp_written_verbatim() {
    let dir = compliant_root();
    cmd(dir.path())
        .args(["--timestamp", "2025-12-19T00:00:00Z"])
        .assert()
        .success();
    assert_eq!(report(dir.path())["timestamp"], "2025-12-19T00:00:00Z");
}

#[test]
fn only_restricts_the_report() {
    let dir = compliant_root();
    std::fs::remove_file(dir.path().join(CANONICAL)).unwrap();
    cmd(dir.path())
        .args(["--only", "canonical-immutability"])
        .assert()
        .code(1)
        .stdout(contains("NO_DETERMINISTIC_OUTCOME: Canonical artifact not found"));

    let report = report(dir.path());
    let checks = report["checks"].as_object().unwrap();
    assert_eq!(checks.len(), 1);
    assert!(checks.contains_key("canonical_immutability"));
}

#[test]
fn unknown_rule_rejected() {
    let dir = compliant_root();
    cmd(dir.path())
        .args(["--only", "rule-five"])
        .assert()
        .failure()
        .stderr(contains("unknown rule"));
}

#[test]
fn print_config_emits_toml() {
    let dir = compliant_root();
    cmd(dir.path())
        .arg("--print-config")
        .assert()
        .success()
        .stdout(contains("[integrity]"))
        .stdout(contains("chunk_size = 4096"));
    assert!(!dir.path().join("governance-report.json").exists());
}

#[test]
fn unwritable_output_exits_one() {
    let dir = compliant_root();
    std::fs::write(dir.path().join("blocked"), "").unwrap();
    cmd(dir.path())
        .args(["--output-dir", "blocked"])
        .assert()
        .code(1)
        .stderr(contains("failed to write governance artifacts"));
}

#[test]
fn invalid_digest_is_config_error() {
    let dir = compliant_root();
    cmd(dir.path())
        .args(["--canonical-digest", "abc"])
        .assert()
        .failure()
        .stderr(contains("integrity.expected_digest"));
}

#[test]
fn json_format_echoes_report() {
    let dir = compliant_root();
    cmd(dir.path())
        .args(["--format", "json", "--timestamp", "2025-12-19T00:00:00Z"])
        .assert()
        .success()
        .stdout(contains(r#""timestamp": "2025-12-19T00:00:00Z""#));
}

#[test]
fn unknown_format_rejected_before_run() {
    let dir = compliant_root();
    cmd(dir.path())
        .args(["--format", "xml"])
        .assert()
        .code(1)
        .stderr(contains("unknown report format 'xml'"));
    assert!(!dir.path().join("governance-report.json").exists());
}

#[test]
fn console_format_plain_when_piped() {
    let dir = compliant_root();
    cmd(dir.path())
        .args(["--format", "console"])
        .assert()
        .success()
        .stdout(contains("✓ [RULE 1] verification_singularity: DETERMINISTIC_COMPLIANCE"))
        .stdout(contains("\x1b[").not());
}

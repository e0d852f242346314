//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BANK: &str = "assets/questoes.json";

fn bqnexus() -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("bqnexus").unwrap();
    cmd.env_remove("BQNEXUS_DATA_URL")
        .env_remove("BQNEXUS_DATA_PATH")
        .env("HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

#[test]
fn help_output() {
    bqnexus()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Medical question bank filter and notebook generator",
        ));
}

#[test]
fn count_with_defaults() {
    bqnexus()
        .args(["count", "--data", BANK])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn count_with_errors_included() {
    bqnexus()
        .args(["count", "--data", BANK, "--errors", "true"])
        .assert()
        .success()
        .stdout("6\n");
}

#[test]
fn count_with_both_status_flags_off_is_zero() {
    bqnexus()
        .args(["count", "--data", BANK, "--unanswered", "false"])
        .assert()
        .success()
        .stdout("0\n");
}

#[test]
fn count_restricted_to_module() {
    bqnexus()
        .args(["count", "--data", BANK, "--errors", "true"])
        .args(["--module", "Módulo 10"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn repeated_module_toggles_off() {
    bqnexus()
        .args(["count", "--data", BANK])
        .args(["--module", "Módulo 10", "--module", "Módulo 10"])
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn modules_are_in_ordinal_order() {
    bqnexus()
        .args(["modules", "--data", BANK])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"(?s)Módulo 1\n.*Módulo 2\n.*Módulo 3\n.*Módulo 10\n")
                .unwrap(),
        );
}

#[test]
fn modules_for_other_cycle() {
    bqnexus()
        .args(["modules", "--data", BANK, "--cycle", "clinico"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ciclo Clínico"))
        .stdout(predicate::str::contains("Módulo 13"))
        .stdout(predicate::str::contains("Módulo 1\n").not());
}

#[test]
fn modules_empty_state() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("questoes.json");
    std::fs::write(
        &bank,
        r#"[{"ciclo": "Ciclo Básico", "modulo": "Módulo 1", "modalidade": "PBL", "status": "Erro"}]"#,
    )
    .unwrap();

    bqnexus()
        .arg("modules")
        .arg("--data")
        .arg(&bank)
        .args(["--cycle", "internato"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No modules available"));
}

#[test]
fn summary_text() {
    bqnexus()
        .args(["summary", "--data", BANK])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total questions: 17"))
        .stdout(predicate::str::contains("Questions found: 4"))
        .stdout(predicate::str::contains("Generate: enabled"));
}

#[test]
fn summary_json() {
    let output = bqnexus()
        .args(["summary", "--data", BANK, "--format", "json"])
        .args(["--cycle", "internato", "--modality", "tradicional"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total_questions"], 17);
    assert_eq!(value["filtered_count"], 0);
    assert_eq!(value["can_generate"], false);
    assert_eq!(value["modules"], serde_json::json!(["Módulo 19", "Módulo 20"]));
}

#[test]
fn generate_clamps_to_available() {
    bqnexus()
        .args(["generate", "--data", BANK])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Notebook generated: 4 question(s) from Ciclo Básico (PBL).",
        ));
}

#[test]
fn generate_clamps_quantity_into_range() {
    bqnexus()
        .args(["generate", "--data", BANK, "--errors", "true"])
        .args(["--quantity", "20", "--adjust", "-50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 question(s)"));
}

#[test]
fn generate_disabled_when_nothing_matches() {
    bqnexus()
        .args(["generate", "--data", BANK])
        .args(["--cycle", "internato", "--modality", "tradicional"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nothing to generate"));
}

#[test]
fn missing_bank_fails_to_load() {
    bqnexus()
        .args(["count", "--data", "no_such_bank.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question bank not loaded"));
}

#[test]
fn invalid_cycle_is_rejected() {
    bqnexus()
        .args(["count", "--data", BANK, "--cycle", "residencia"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown cycle"));
}

#[test]
fn validate_sample_bank() {
    bqnexus()
        .args(["validate", "--data", BANK])
        .assert()
        .success()
        .stdout(predicate::str::contains("Question bank: 17 questions"))
        .stdout(predicate::str::contains("Question bank valid."));
}

#[test]
fn validate_reports_warnings() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("questoes.json");
    std::fs::write(
        &bank,
        r#"[
            {"ciclo": "Ciclo Básico", "modulo": "Anatomia", "modalidade": "PBL", "status": "Erro"},
            {"ciclo": "Ciclo Clínico", "modulo": "Anatomia", "modalidade": "PBL", "status": "Erro"}
        ]"#,
    )
    .unwrap();

    bqnexus()
        .arg("validate")
        .arg("--data")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("has no ordinal"))
        .stdout(predicate::str::contains("appears in several cycles"))
        .stdout(predicate::str::contains("'Internato' has no questions"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn unrecognised_records_still_load() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("questoes.json");
    std::fs::write(
        &bank,
        r#"[
            {"ciclo": "Ciclo Básico", "modulo": "Módulo 1", "modalidade": "PBL", "status": "Nao Respondida"},
            {"ciclo": "Ciclo Básico", "modulo": "Módulo 1", "modalidade": "Híbrido", "status": "Nao Respondida"}
        ]"#,
    )
    .unwrap();

    bqnexus()
        .arg("count")
        .arg("--data")
        .arg(&bank)
        .assert()
        .success()
        .stdout("1\n");

    bqnexus()
        .arg("validate")
        .arg("--data")
        .arg(&bank)
        .assert()
        .success()
        .stdout(predicate::str::contains("Question bank: 2 questions"))
        .stdout(predicate::str::contains("[#1] WARNING: unknown modality: Híbrido"));
}

#[test]
fn debug_logging_follows_rust_log() {
    bqnexus()
        .args(["count", "--data", BANK])
        .env("RUST_LOG", "bqnexus_core=debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("filtered count"));
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    bqnexus()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created bqnexus.toml"))
        .stdout(predicate::str::contains("Created data/questoes.json"));

    assert!(dir.path().join("bqnexus.toml").exists());
    assert!(dir.path().join("data/questoes.json").exists());

    // The generated config and bank work together.
    bqnexus()
        .current_dir(dir.path())
        .arg("count")
        .assert()
        .success()
        .stdout("4\n");
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    bqnexus()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    bqnexus()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn config_defaults_apply() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");
    std::fs::write(
        &config,
        "[defaults]\ncycle = \"Ciclo Clínico\"\nerrors = true\n",
    )
    .unwrap();

    bqnexus()
        .args(["count", "--data", BANK])
        .arg("--config")
        .arg(&config)
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn global_config_is_read_from_home() {
    let home = TempDir::new().unwrap();
    let config_dir = home.path().join(".config").join("bqnexus");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[defaults]\nerrors = true\n").unwrap();

    bqnexus()
        .env("HOME", home.path())
        .args(["count", "--data", BANK])
        .assert()
        .success()
        .stdout("6\n");
}

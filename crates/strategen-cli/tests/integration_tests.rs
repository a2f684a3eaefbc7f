//! Integration tests for the strategen binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SCHEMA: &str = r#"{
    "global_settings": {
        "root_namespace_domain": "Shop.Domain",
        "root_namespace_api": "Shop.Api",
        "paths": {
            "entities": "Domain/Entities",
            "interfaces": "Domain/Interfaces",
            "implementations": "Domain/Services",
            "ioc": "Api/IoC"
        }
    },
    "entities": [
        {
            "name": "Order",
            "properties": [
                {"name": "Id", "type": "Guid"},
                {"name": "CreatedAt", "type": "DateTime?"}
            ]
        }
    ],
    "contexts": [
        {
            "context_name": "OrderFilter",
            "target_entity": "Order",
            "strategies": [
                {"property_ref": "Id", "logic_type": "GenericEquality"},
                {"property_ref": "CreatedAt", "logic_type": "DateTime"}
            ]
        }
    ]
}"#;

fn strategen() -> Command {
    let mut cmd = Command::cargo_bin("strategen").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

fn write_schema(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("schema.json");
    fs::write(&path, SCHEMA).unwrap();
    path
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_flag() {
    strategen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("validate"));
}

#[test]
fn version_flag() {
    strategen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_args_shows_help_and_fails() {
    strategen().assert().failure().code(2);
}

// ── generate ──────────────────────────────────────────────────────────────────

#[test]
fn generate_writes_the_full_tree() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp);
    let out = temp.path().join("generated");

    strategen()
        .args(["generate", schema.to_str().unwrap(), "--out"])
        .arg(&out)
        .arg("--yes")
        .assert()
        .success();

    assert!(out.join("Domain/Entities/Order.cs").exists());
    assert!(out.join("Domain/Interfaces/IOrderFilterStrategy.cs").exists());
    assert!(
        out.join("Domain/Services/OrderFilterStrategies/IdOrderFilterStrategy.cs")
            .exists()
    );
    assert!(out.join("Api/IoC/DomainServiceInjector.cs").exists());
}

#[test]
fn generate_from_stdin() {
    let temp = TempDir::new().unwrap();
    let out = temp.path().join("generated");

    strategen()
        .args(["generate", "-", "--out"])
        .arg(&out)
        .write_stdin(SCHEMA)
        .assert()
        .success();

    assert!(out.join("Domain/Entities/Order.cs").exists());
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp);
    let out = temp.path().join("generated");

    strategen()
        .args(["generate", schema.to_str().unwrap(), "--dry-run", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("Order.cs"));

    assert!(!out.exists());
}

#[test]
fn gen_alias_behaves_like_generate() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp);
    let out = temp.path().join("generated");

    strategen()
        .args(["gen", schema.to_str().unwrap(), "--yes", "--out"])
        .arg(&out)
        .assert()
        .success();

    assert!(out.join("Domain/Entities/Order.cs").exists());
}

#[test]
fn quiet_generate_prints_nothing() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp);
    let out = temp.path().join("generated");

    strategen()
        .args(["--quiet", "generate", schema.to_str().unwrap(), "--yes", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn unknown_logic_kind_is_reported_but_not_fatal() {
    let temp = TempDir::new().unwrap();
    let schema_text = SCHEMA.replace("\"DateTime\"", "\"SoundexMatch\"");
    let schema = temp.path().join("schema.json");
    fs::write(&schema, schema_text).unwrap();
    let out = temp.path().join("generated");

    strategen()
        .args(["generate", schema.to_str().unwrap(), "--yes", "--out"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("SoundexMatch"));

    // The unrecognized strategy's file is simply absent.
    assert!(
        !out.join("Domain/Services/OrderFilterStrategies/CreatedAtOrderFilterStrategy.cs")
            .exists()
    );
    assert!(
        out.join("Domain/Services/OrderFilterStrategies/IdOrderFilterStrategy.cs")
            .exists()
    );
}

// ── failure modes ─────────────────────────────────────────────────────────────

#[test]
fn missing_out_flag_falls_back_to_config_default() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp);
    let config = temp.path().join("config.toml");
    let out = temp.path().join("from-config");
    fs::write(
        &config,
        format!("[generate]\ndefault_out = {:?}\n", out.to_str().unwrap()),
    )
    .unwrap();

    strategen()
        .arg("--config")
        .arg(&config)
        .args(["generate", schema.to_str().unwrap(), "--yes"])
        .assert()
        .success();

    assert!(out.join("Domain/Entities/Order.cs").exists());
}

#[test]
fn missing_out_with_no_config_default_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp);
    let config = temp.path().join("config.toml");
    fs::write(&config, "").unwrap();

    strategen()
        .arg("--config")
        .arg(&config)
        .args(["generate", schema.to_str().unwrap(), "--yes"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--out"));
}

#[test]
fn missing_schema_file_exits_with_not_found() {
    let temp = TempDir::new().unwrap();

    strategen()
        .args(["generate", "no-such-schema.json", "--yes", "--out"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn empty_schema_is_a_user_error() {
    let temp = TempDir::new().unwrap();
    let schema = temp.path().join("schema.json");
    fs::write(&schema, "   ").unwrap();

    strategen()
        .args(["generate", schema.to_str().unwrap(), "--yes", "--out"])
        .arg(temp.path().join("generated"))
        .assert()
        .failure()
        .code(2);
}

#[test]
fn malformed_schema_is_a_user_error_with_suggestions() {
    let temp = TempDir::new().unwrap();
    let schema = temp.path().join("schema.json");
    fs::write(&schema, "{not json").unwrap();

    strategen()
        .args(["generate", schema.to_str().unwrap(), "--yes", "--out"])
        .arg(temp.path().join("generated"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Suggestions:"));
}

// ── validate ──────────────────────────────────────────────────────────────────

#[test]
fn validate_accepts_a_good_schema() {
    let temp = TempDir::new().unwrap();
    let schema = write_schema(&temp);

    strategen()
        .args(["validate", schema.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("valid schema"));
}

#[test]
fn validate_warns_but_succeeds_on_unknown_logic_kind() {
    let temp = TempDir::new().unwrap();
    let schema_text = SCHEMA.replace("\"DateTime\"", "\"SoundexMatch\"");
    let schema = temp.path().join("schema.json");
    fs::write(&schema, schema_text).unwrap();

    strategen()
        .args(["validate", schema.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("SoundexMatch"))
        .stdout(predicate::str::contains("will be skipped"));
}

#[test]
fn validate_rejects_malformed_json() {
    strategen()
        .args(["validate", "-"])
        .write_stdin("{oops")
        .assert()
        .failure()
        .code(2);
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_writes_a_usable_starter_schema() {
    let temp = TempDir::new().unwrap();
    let schema = temp.path().join("strategen.json");

    strategen()
        .arg("init")
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::str::contains("starter schema"));

    // The starter schema validates and generates cleanly.
    let out = temp.path().join("generated");
    strategen()
        .args(["generate", schema.to_str().unwrap(), "--yes", "--out"])
        .arg(&out)
        .assert()
        .success();
    assert!(out.join("MyApp.Api/IoC/DomainServiceInjector.cs").exists());
}

#[test]
fn init_refuses_to_clobber_without_force() {
    let temp = TempDir::new().unwrap();
    let schema = temp.path().join("strategen.json");
    fs::write(&schema, "keep me").unwrap();

    strategen()
        .arg("init")
        .arg(&schema)
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&schema).unwrap(), "keep me");

    strategen()
        .args(["init", "--force"])
        .arg(&schema)
        .assert()
        .success();
    assert_ne!(fs::read_to_string(&schema).unwrap(), "keep me");
}

// ── completions & config ──────────────────────────────────────────────────────

#[test]
fn shell_completions() {
    strategen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
fn config_list_prints_toml() {
    strategen()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[output]"));
}

#[test]
fn config_get_known_key() {
    strategen()
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("output.format ="));
}

#[test]
fn config_get_unknown_key_is_a_config_error() {
    strategen()
        .args(["config", "get", "no.such.key"])
        .assert()
        .failure()
        .code(4);
}

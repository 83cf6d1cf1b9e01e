use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

const SCENARIO: &str = "makefile:
  variables:
    DEBUG: \"1\"
  executables:
    myapp:
      template: app
      sources: [main.cpp, util.cpp]
      libraries: { wx: [core, base] }
";

const SCENARIO_XML: &str = "<?xml version=\"1.0\" ?>
<makefile>
    <set var=\"DEBUG\">1</set>
    <exe id=\"myapp\" template=\"app\" template_append=\"\" cond=\"\">
        <sources>
            main.cpp
            util.cpp
        </sources>
        <wx-lib>core</wx-lib>
        <wx-lib>base</wx-lib>
    </exe>
</makefile>
";

fn yaml2bkl() -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("yaml2bkl")?;
    cmd.env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn test_converts_file_to_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("makefile.yaml");
    fs::write(&input, SCENARIO)?;

    yaml2bkl()?
        .arg(&input)
        .assert()
        .success()
        .stdout(SCENARIO_XML)
        .stderr(predicate::str::is_empty());
    Ok(())
}

#[test]
fn test_missing_file_fails_without_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("absent.yaml");

    yaml2bkl()?
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not found").and(predicate::str::contains("absent.yaml")));
    Ok(())
}

#[test]
fn test_malformed_yaml_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("broken.yaml");
    fs::write(&input, "makefile:\n  variables: [a, b\n")?;

    yaml2bkl()?
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid yaml"));
    Ok(())
}

#[test]
fn test_schema_error_fails() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("shape.yaml");
    fs::write(&input, "makefile:\n  conditions: { if: x }\n")?;

    yaml2bkl()?
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("makefile.conditions"));
    Ok(())
}

#[test]
fn test_missing_argument_prints_usage() -> Result<(), Box<dyn std::error::Error>> {
    yaml2bkl()?
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
    Ok(())
}

#[test]
fn test_extra_argument_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
    yaml2bkl()?.args(["a.yaml", "b.yaml"]).assert().code(1);
    Ok(())
}

#[test]
fn test_help_succeeds() -> Result<(), Box<dyn std::error::Error>> {
    yaml2bkl()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("INPUT"));
    Ok(())
}

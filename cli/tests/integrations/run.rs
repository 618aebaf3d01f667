use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn microlisp() -> Command {
    Command::cargo_bin("microlisp").unwrap()
}

#[test]
fn test_cli_tokens() {
    microlisp()
        .arg("tokens")
        .arg(" ( somef ) ")
        .assert()
        .success()
        .stdout("OPEN (\nATOM somef\nCLOSE )\n");
}

#[test]
fn test_cli_parse_prints_ast() {
    microlisp()
        .arg("parse")
        .arg("(if   (env a)\n 1 2.5)")
        .assert()
        .success()
        .stdout("(if (env a) 1 2.5)\n");
}

#[test]
fn test_cli_parse_json() {
    microlisp()
        .arg("parse")
        .arg("(not true)")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "expression""#))
        .stdout(predicate::str::contains(r#""type": "bool""#));
}

#[test]
fn test_cli_parse_error_is_rendered() {
    microlisp()
        .arg("parse")
        .arg("(and true")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected end of expression"))
        .stderr(predicate::str::contains("add the missing `)`"));
}

#[test]
fn test_cli_parse_error_with_non_ascii_program() {
    microlisp()
        .arg("parse")
        .arg("(ééé) x")
        .assert()
        .failure()
        .stderr(predicate::str::contains("too many tokens"))
        .stderr(predicate::str::contains("remove everything after the first complete form"));
}

#[test]
fn test_cli_parse_max_depth() {
    let program = format!("{}true{}", "(not ".repeat(150), ")".repeat(150));
    microlisp()
        .arg("parse")
        .arg(&program)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_expression_depth"));
    microlisp()
        .arg("parse")
        .arg(&program)
        .arg("--max-depth")
        .arg("200")
        .assert()
        .success();
}

#[test]
fn test_cli_eval_with_vars() {
    microlisp()
        .arg("eval")
        .arg("(and (env door_open) (not (env alarm_armed)))")
        .arg("--var")
        .arg("door_open=true")
        .arg("--var")
        .arg("alarm_armed=false")
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_cli_eval_with_env_file() {
    let temp_dir = TempDir::new().unwrap();
    let env_file = temp_dir.path().join("env.json");
    fs::write(
        &env_file,
        r#"{ "risk": 0.25, "override": false, "label": "ok" }"#,
    )
    .unwrap();

    microlisp()
        .arg("eval")
        .arg("(if (env override) 0.0 (fnot (env risk)))")
        .arg("--env")
        .arg(&env_file)
        .assert()
        .success()
        .stdout("0.75\n");
}

#[test]
fn test_cli_var_overrides_env_file() {
    let temp_dir = TempDir::new().unwrap();
    let env_file = temp_dir.path().join("env.json");
    fs::write(&env_file, r#"{ "flag": false }"#).unwrap();

    microlisp()
        .arg("eval")
        .arg("(env flag)")
        .arg("--env")
        .arg(&env_file)
        .arg("--var")
        .arg("flag=true")
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_cli_eval_program_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let program = temp_dir.path().join("rule.lisp");
    fs::write(&program, "(or\n  (env a)\n  (env b))\n").unwrap();

    microlisp()
        .arg("eval")
        .arg("--file")
        .arg(&program)
        .arg("--var")
        .arg("a=false")
        .arg("--var")
        .arg("b=true")
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_cli_eval_error_value_fails() {
    microlisp()
        .arg("eval")
        .arg("(env missing)")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Environment key `missing' not found"));
}

#[test]
fn test_cli_eval_max_depth() {
    microlisp()
        .arg("eval")
        .arg("(not (not (not true)))")
        .arg("--max-depth")
        .arg("2")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_expression_depth"));
}

#[test]
fn test_cli_eval_json_output() {
    microlisp()
        .arg("eval")
        .arg("(fand 0.5 0.25)")
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""type": "float""#))
        .stdout(predicate::str::contains("0.25"));
}

#[test]
fn test_cli_invalid_env_file() {
    let temp_dir = TempDir::new().unwrap();
    let env_file = temp_dir.path().join("env.json");
    fs::write(&env_file, "[1, 2, 3]").unwrap();

    microlisp()
        .arg("eval")
        .arg("(env a)")
        .arg("--env")
        .arg(&env_file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid environment file"));
}

#[test]
fn test_cli_requires_program() {
    microlisp().arg("eval").assert().failure();
}

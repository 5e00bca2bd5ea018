use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;

#[test]
fn compile_reads_stdin() {
    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("compile").write_stdin("(add 2 (subtract 4 2))");
    cmd.assert()
        .success()
        .stdout("add(2, subtract(4, 2))\n");
}

#[test]
fn compile_reads_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("program.sexp");
    fs::write(&path, "(add 1 2)\n(add 3 4)\n").unwrap();

    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("compile").arg(&path);
    cmd.assert()
        .success()
        .stdout("add(1, 2)\nadd(3, 4)\n");
}

#[test]
fn compile_dash_means_stdin() {
    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("compile").arg("-").write_stdin("(foo)");
    cmd.assert().success().stdout("foo()\n");
}

#[test]
fn compile_error_exits_nonzero() {
    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("compile").write_stdin("(add 2");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing its closing parenthesis"));
}

#[test]
fn strict_flag_rejects_unknown_characters() {
    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("compile").write_stdin("(add 2 #)");
    cmd.assert().success().stdout("add(2)\n");

    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("compile").arg("--strict").write_stdin("(add 2 #)");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized character '#'"));
}

#[test]
fn config_flag_layers_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[codegen]\nstatement_separator = \"; \"\n").unwrap();

    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("--config").arg(&config).arg("compile").write_stdin("(a) (b)");
    cmd.assert().success().stdout("a(); b()\n");
}

#[test]
fn local_config_is_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("parenc.toml"),
        "[codegen]\nargument_separator = \",\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.current_dir(dir.path())
        .arg("compile")
        .write_stdin("(add 1 2)");
    cmd.assert().success().stdout("add(1,2)\n");
}

#[test]
fn missing_config_file_is_an_error() {
    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("compile")
        .arg("--config")
        .arg("does-not-exist.toml")
        .write_stdin("(a)");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn inspect_defaults_to_target_treeviz() {
    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("inspect").write_stdin("(foo 1)");
    cmd.assert().success().stdout(
        predicate::str::contains("ExpressionStatement: foo")
            .and(predicate::str::contains("Identifier: foo")),
    );
}

#[test]
fn inspect_with_format() {
    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("inspect")
        .arg("--format")
        .arg("token-simple")
        .write_stdin("(foo 1)");
    cmd.assert()
        .success()
        .stdout("<paren:(><name:foo><number:1><paren:)>\n");
}

#[test]
fn inspect_rejects_unknown_format() {
    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("inspect").arg("-f").arg("code-json").write_stdin("(a)");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Format error"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("list-formats");
    cmd.assert().success().stdout(
        predicate::str::contains("token-simple")
            .and(predicate::str::contains("target-treeviz"))
            .and(predicate::str::contains("code-text")),
    );
}

#[test]
fn nesting_limit_comes_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("shallow.toml");
    fs::write(&config, "[parser]\nmax_depth = 2\n").unwrap();

    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("--config").arg(&config).arg("compile").write_stdin("(a (b 1))");
    cmd.assert().success().stdout("a(b(1))\n");

    let mut cmd = cargo_bin_cmd!("parenc");
    cmd.arg("--config")
        .arg(&config)
        .arg("compile")
        .write_stdin("(a (b (c)))");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("nested deeper than 2 levels"));
}

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

fn make_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock is before UNIX_EPOCH")
        .as_nanos();
    let pid = std::process::id();
    let dir = std::env::temp_dir().join(format!("argstore-integ-{prefix}-{pid}-{nanos}"));
    fs::create_dir_all(&dir).expect("failed to create temp dir");
    dir
}

fn argstore() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_argstore"));
    // Keep the caller's environment from changing the output format.
    cmd.env_remove("ARGSTORE_FORMAT").env_remove("RUST_LOG");
    cmd
}

fn run(args: &[&str]) -> Output {
    argstore()
        .args(args)
        .output()
        .expect("failed to run argstore")
}

fn stdout_of(args: &[&str]) -> String {
    let out = run(args);
    assert!(
        out.status.success(),
        "argstore {args:?} failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn help_works() {
    let stdout = stdout_of(&["--help"]);
    assert!(
        stdout.contains("argstore") && stdout.contains("dump") && stdout.contains("get"),
        "unexpected help output:\n{stdout}"
    );
}

#[test]
fn dump_shows_synthesized_negation() {
    let stdout = stdout_of(&["dump", "--", "-noubst", "--bar=12", "file.txt"]);
    assert_eq!(stdout, "-noubst=\n-bar=12\n-ubst=0\npositional file.txt\n");
}

#[test]
fn dump_json_has_values_and_multi_values() {
    let stdout = stdout_of(&["--format", "json", "dump", "--", "-a=1", "-a=2"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("dump output is not JSON");
    assert_eq!(json["values"]["-a"], "2");
    assert_eq!(json["multiValues"]["-a"], serde_json::json!(["1", "2"]));
    assert_eq!(json["positionals"], serde_json::json!([]));
}

#[test]
fn format_can_come_from_env() {
    let out = argstore()
        .env("ARGSTORE_FORMAT", "json")
        .args(["all", "-x", "--", "-x=1"])
        .output()
        .expect("failed to run argstore");
    assert!(out.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("all output is not JSON");
    assert_eq!(json, serde_json::json!(["1"]));
}

#[test]
fn positive_flag_beats_negation_in_either_order() {
    for argv in [["-ubst", "-noubst"], ["-noubst", "-ubst"]] {
        let mut args = vec!["get", "-ubst", "--as", "bool", "--"];
        args.extend(argv);
        assert_eq!(stdout_of(&args), "true\n", "argv {argv:?}");
    }
}

#[test]
fn bool_default_applies_only_when_absent() {
    assert_eq!(
        stdout_of(&["get", "-fo", "--as", "bool", "--default", "true", "--"]),
        "true\n"
    );
    assert_eq!(
        stdout_of(&["get", "-ubst", "--as", "bool", "--default", "true", "--", "-ubst=0"]),
        "false\n"
    );
}

#[test]
fn int_lookup_distinguishes_malformed_from_absent() {
    assert_eq!(
        stdout_of(&["get", "-ubst", "--as", "int", "--default", "1", "--", "-ubst=NaN"]),
        "0\n"
    );
    assert_eq!(
        stdout_of(&["get", "-ubst", "--as", "int", "--default", "1", "--"]),
        "1\n"
    );
}

#[test]
fn empty_value_overrides_string_default() {
    assert_eq!(
        stdout_of(&["get", "-ubst", "--default", "eleven", "--", "-ubst="]),
        "\n"
    );
    assert_eq!(
        stdout_of(&["get", "-ubst", "--default", "eleven", "--"]),
        "eleven\n"
    );
}

#[test]
fn get_json_reports_presence() {
    let stdout = stdout_of(&[
        "--format", "json", "get", "-bar", "--as", "int", "--", "--bar=12",
    ]);
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("get output is not JSON");
    assert_eq!(
        json,
        serde_json::json!({ "key": "-bar", "present": true, "value": 12 })
    );
}

#[test]
fn all_lists_every_occurrence() {
    assert_eq!(
        stdout_of(&["all", "-connect", "--", "-connect=a", "--connect=b", "-connect=a"]),
        "a\nb\na\n"
    );
}

#[test]
fn bad_int_default_is_an_error() {
    let out = run(&["get", "-x", "--as", "int", "--default", "lots", "--"]);
    assert!(!out.status.success(), "expected failure");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("not an integer"), "unexpected stderr:\n{stderr}");
}

#[test]
fn key_is_taken_positionally_in_either_dash_form() {
    assert_eq!(
        stdout_of(&["get", "-ubst", "--as", "bool", "--", "-ubst"]),
        "true\n"
    );
    assert_eq!(
        stdout_of(&["get", "--bar", "--as", "int", "--default", "-1", "--", "--bar=12"]),
        "12\n"
    );
    assert_eq!(stdout_of(&["all", "-x", "--", "-x=1", "-x=2"]), "1\n2\n");
}

#[test]
fn malformed_dotenv_is_reported_not_fatal() {
    let dir = make_temp_dir("bad-dotenv");
    fs::write(dir.join(".env"), "not a valid line\n").expect("failed to write .env");

    let out = argstore()
        .current_dir(&dir)
        .args(["get", "-x", "--default", "d", "--"])
        .output()
        .expect("failed to run argstore");
    assert!(
        out.status.success(),
        "argstore failed:\nstatus: {}\nstderr:\n{}",
        out.status,
        String::from_utf8_lossy(&out.stderr),
    );
    assert_eq!(String::from_utf8_lossy(&out.stdout), "d\n");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains(".env"), "expected a .env warning, got:\n{stderr}");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn dotenv_can_set_the_output_format() {
    let dir = make_temp_dir("format-dotenv");
    fs::write(dir.join(".env"), "ARGSTORE_FORMAT=json\n").expect("failed to write .env");

    let out = argstore()
        .current_dir(&dir)
        .args(["all", "-x", "--", "-x=1"])
        .output()
        .expect("failed to run argstore");
    assert!(out.status.success());
    let json: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("all output is not JSON");
    assert_eq!(json, serde_json::json!(["1"]));

    let _ = fs::remove_dir_all(&dir);
}

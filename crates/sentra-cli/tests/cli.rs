use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn sentra(dir: &TempDir) -> Command {
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "").unwrap();

    let mut cmd = Command::cargo_bin("sentra").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .arg("--log-file")
        .arg(dir.path().join("sentra.log"));
    cmd
}

#[allow(deprecated)]
fn run_help() -> String {
    let output = Command::cargo_bin("sentra")
        .unwrap()
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_main_help() {
    let help = run_help();
    insta::assert_snapshot!(help, @r"
Score the sentiment of text with a remote analysis service

Usage: sentra [OPTIONS]

Options:
      --config <CONFIG>              Config file (default: <config dir>/sentra/config.toml)
      --endpoint <ENDPOINT>          Base URL of the analysis service, e.g. http://localhost:8000
      --timeout-secs <TIMEOUT_SECS>  Request timeout in seconds (default: none)
      --log-level <LOG_LEVEL>        [possible values: error, warn, info, debug, trace]
      --log-file <LOG_FILE>          Log file (default: <data dir>/sentra/sentra.log)
  -h, --help                         Print help
  -V, --version                      Print version
");
}

#[test]
fn test_invalid_endpoint_fails_before_opening_terminal() {
    let dir = TempDir::new().unwrap();
    sentra(&dir)
        .args(["--endpoint", "not a url"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("invalid service configuration"));
}

#[test]
fn test_unsupported_scheme_is_rejected() {
    let dir = TempDir::new().unwrap();
    sentra(&dir)
        .args(["--endpoint", "ftp://localhost:8000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ftp"));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let dir = TempDir::new().unwrap();
    sentra(&dir)
        .args(["--timeout-secs", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_secs"));
}

#[test]
#[allow(deprecated)]
fn test_missing_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    Command::cargo_bin("sentra")
        .unwrap()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn test_malformed_config_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "[service\nendpoint = ").unwrap();

    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("sentra").unwrap();
    cmd.arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn validate_cmd() -> Command {
    Command::cargo_bin("validate_hex_address").unwrap()
}

#[test]
fn test_valid_addresses_exit_zero_silently() {
    validate_cmd()
        .args(["0x1A", "0xab", "0xAB", "0x0123456789abcdefABCDEF"])
        .assert()
        .code(0)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_single_invalid_address() {
    validate_cmd()
        .arg("zz")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("invalid hex address: zz\n");
}

#[test]
fn test_mixed_list_reports_only_invalid_entry() {
    validate_cmd()
        .args(["0x1A", "zz", "0xFF"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("invalid hex address: zz\n");
}

#[test]
fn test_uppercase_prefix_is_rejected() {
    validate_cmd()
        .args(["0XAB", "0xab", "0xAB"])
        .assert()
        .code(1)
        .stderr("invalid hex address: 0XAB\n");
}

#[test]
fn test_every_invalid_entry_is_reported_in_order() {
    validate_cmd()
        .args(["0x", "0x1", "", "0xg", " 0x1"])
        .assert()
        .code(1)
        .stderr(
            "invalid hex address: 0x\n\
             invalid hex address: \n\
             invalid hex address: 0xg\n\
             invalid hex address:  0x1\n",
        );
}

#[test]
fn test_no_arguments_is_usage_error() {
    validate_cmd()
        .assert()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no addresses supplied"))
        .stderr(predicate::str::contains("validate_hex_address <ADDRESS>"))
        .stderr(predicate::str::contains("invalid hex address").not());
}

#[test]
fn test_flag_like_arguments_are_candidates() {
    validate_cmd()
        .args(["--help", "-V", "0x1"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("invalid hex address: --help\ninvalid hex address: -V\n");
}

#[test]
fn test_repeated_runs_are_identical() {
    let args = ["0x1A", "zz", "0XFF", "#ff"];
    let first = validate_cmd().args(args).output().unwrap();
    let second = validate_cmd().args(args).output().unwrap();

    assert_eq!(first.status.code(), Some(1));
    assert_eq!(first.status.code(), second.status.code());
    assert_eq!(first.stdout, second.stdout);
    assert_eq!(first.stderr, second.stderr);
}

#[test]
fn test_double_dash_alone_is_invalid_address() {
    validate_cmd()
        .arg("--")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("invalid hex address: --\n");
}

#[test]
fn test_double_dash_before_valid_address_is_still_checked() {
    validate_cmd()
        .args(["--", "0x1"])
        .assert()
        .code(1)
        .stderr("invalid hex address: --\n");
}

#[cfg(unix)]
#[test]
fn test_non_utf8_argument_is_reported_not_usage_error() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    validate_cmd()
        .arg("0x1")
        .arg(OsStr::from_bytes(b"0x\xff"))
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr("invalid hex address: 0x\u{FFFD}\n");
}

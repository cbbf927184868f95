use assert_cmd::Command;
use predicates::prelude::*;

fn bintext() -> Command {
    Command::cargo_bin("bintext").unwrap()
}

#[test]
fn enc_base32_literal() {
    bintext()
        .args(["enc", "--codec", "base32", "-i", "foo"])
        .assert()
        .success()
        .stdout("MZXW6===\n");
}

#[test]
fn enc_base45_from_stdin() {
    bintext()
        .args(["enc", "--codec", "base45"])
        .write_stdin("AB")
        .assert()
        .success()
        .stdout("BB8\n");
}

#[test]
fn dec_base64url_unpadded() {
    bintext()
        .args(["dec", "--codec", "base64url", "-i", "SGVsbG8"])
        .assert()
        .success()
        .stdout("Hello");
}

#[test]
fn dec_strips_trailing_newline() {
    bintext()
        .args(["dec", "--codec", "hex"])
        .write_stdin("48656c6c6f\n")
        .assert()
        .success()
        .stdout("Hello");
}

#[test]
fn dec_invalid_exits_with_input_error() {
    bintext()
        .args(["dec", "--codec", "base45", "-i", ":::"])
        .assert()
        .code(10)
        .stderr(predicate::str::contains("exceeds maximum 65535"));
}

#[test]
fn dec_json_reports_failure() {
    bintext()
        .args(["dec", "--codec", "hex", "-i", "4a2", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"success\": false"))
        .stdout(predicate::str::contains("invalid_length"));
}

#[test]
fn dec_all_lists_successful_codecs() {
    bintext()
        .args(["dec", "--all", "-i", "MZXW6==="])
        .assert()
        .success()
        .stdout(predicate::str::contains("base32"))
        .stdout(predicate::str::contains("\"foo\""));
}

#[test]
fn conv_hex_to_base64url() {
    bintext()
        .args(["conv", "--from", "hex", "--to", "base64url", "-i", "fbff"])
        .assert()
        .success()
        .stdout("-_8\n");
}

#[test]
fn verify_valid_and_invalid() {
    bintext()
        .args(["verify", "--codec", "base32", "-i", "mzxw6==="])
        .assert()
        .success()
        .stdout("valid\n");

    bintext()
        .args(["verify", "--codec", "base64", "-i", "SGVsbG8"])
        .assert()
        .code(10)
        .stdout(predicate::str::starts_with("invalid:"));
}

#[test]
fn verify_non_empty() {
    bintext()
        .args(["verify", "--codec", "hex", "--non-empty"])
        .write_stdin("")
        .assert()
        .code(10)
        .stdout(predicate::str::contains("empty input"));
}

#[test]
fn unknown_codec() {
    bintext()
        .args(["enc", "--codec", "base58", "-i", "x"])
        .assert()
        .code(13)
        .stderr(predicate::str::contains("unsupported codec: base58"));
}

#[test]
fn list_and_info() {
    bintext()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("base45"))
        .stdout(predicate::str::contains("base64url"));

    bintext()
        .args(["info", "--codec", "b45", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\": \"base45\""));
}

#[test]
fn explain_points_at_bad_character() {
    bintext()
        .args(["explain", "--codec", "base64", "-i", "SGV*bG8="])
        .assert()
        .success()
        .stdout(predicate::str::contains("Status: INVALID"))
        .stdout(predicate::str::contains("Position: 3"))
        .stdout(predicate::str::contains("   ^"));
}

#[test]
fn verbose_logging_goes_to_stderr() {
    bintext()
        .args(["-vv", "enc", "--codec", "hex", "-i", "Hi"])
        .assert()
        .success()
        .stdout("4869\n")
        .stderr(predicate::str::contains("encoded 2 bytes as hex"));
}

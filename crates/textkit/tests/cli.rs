//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

const KEY: &str = "0123456789abcdef";

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env_remove("TEXTKIT_CIPHER_KEY")
        .env_remove("TEXTKIT_STRICT")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_of(args: &[&str]) -> String {
    let output = cmd().args(args).assert().success();
    String::from_utf8_lossy(&output.get_output().stdout).into_owned()
}

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("Options:"));
}

#[test]
fn long_help_lists_environment_variables() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TEXTKIT_CIPHER_KEY"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let stdout = stdout_of(&["info", "--json"]);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(json["config"]["cipher_key_set"], false);
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn multiple_verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

// =============================================================================
// Codec
// =============================================================================

#[test]
fn hash_of_empty_string() {
    cmd()
        .args(["hash", ""])
        .assert()
        .success()
        .stdout("d41d8cd98f00b204e9800998ecf8427e\n");
}

#[test]
fn hash_reads_stdin_and_strips_newline() {
    cmd()
        .arg("hash")
        .write_stdin("abc\n")
        .assert()
        .success()
        .stdout("900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn hash_json_names_operation() {
    let stdout = stdout_of(&["hash", "abc", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["operation"], "hash");
    assert_eq!(json["output"], "900150983cd24fb0d6963f7d28e17f72");
}

#[test]
fn encrypt_then_decrypt_round_trips() {
    let cipher = stdout_of(&["encrypt", "你好, world", "--key", KEY]);
    let cipher = cipher.trim_end();
    assert_ne!(cipher, "你好, world");

    cmd()
        .args(["decrypt", cipher, "--key", KEY])
        .assert()
        .success()
        .stdout("你好, world\n");
}

#[test]
fn encrypt_uses_key_from_environment() {
    let from_flag = stdout_of(&["encrypt", "hello", "--key", KEY]);
    cmd()
        .env("TEXTKIT_CIPHER_KEY", KEY)
        .args(["encrypt", "hello"])
        .assert()
        .success()
        .stdout(from_flag);
}

#[test]
fn encrypt_without_key_fails() {
    let tmp = tempfile::tempdir().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "encrypt", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no cipher key"));
}

#[test]
fn decrypt_garbage_falls_back_to_input() {
    cmd()
        .args(["decrypt", "not base64!", "--key", KEY])
        .assert()
        .success()
        .stdout("not base64!\n");
}

#[test]
fn strict_decrypt_garbage_fails() {
    cmd()
        .args(["decrypt", "not base64!", "--key", KEY, "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("decryption failed"));
}

#[test]
fn strict_encrypt_rejects_short_key() {
    cmd()
        .args(["encrypt", "hello", "--key", "short", "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("encryption failed"));
}

#[test]
fn url_encode_escapes_reserved_characters() {
    cmd()
        .args(["url-encode", "a b&c/中"])
        .assert()
        .success()
        .stdout("a%20b%26c%2F%E4%B8%AD\n");
}

#[test]
fn url_decode_reverses_encoding() {
    cmd()
        .args(["url-decode", "a%20b%26c%2F%E4%B8%AD"])
        .assert()
        .success()
        .stdout("a b&c/中\n");
}

#[test]
fn preprocess_url_escapes_plus_and_star_only() {
    cmd()
        .args(["preprocess-url", "a+b*c d"])
        .assert()
        .success()
        .stdout("a%2Bb%2Ac d\n");
}

// =============================================================================
// Formatting
// =============================================================================

#[test]
fn format_size_units() {
    assert_eq!(stdout_of(&["format-size", "512"]), "512bytes\n");
    assert_eq!(stdout_of(&["format-size", "1024"]), "1.00KB\n");
    assert_eq!(stdout_of(&["format-size", "1572864"]), "1.50MB\n");
}

#[test]
fn format_size_sentinel_at_one_tebibyte() {
    cmd()
        .args(["format-size", "1099511627776"])
        .assert()
        .success()
        .stdout("size: error\n");
}

#[test]
fn format_phone_groups_digits() {
    cmd()
        .args(["format-phone", "13912345678"])
        .assert()
        .success()
        .stdout("139 1234 5678\n");
}

#[test]
fn format_phone_wrong_length_prints_empty_line() {
    cmd()
        .args(["format-phone", "123"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn strict_format_phone_wrong_length_fails() {
    cmd()
        .args(["format-phone", "123", "--strict"])
        .assert()
        .failure();
}

#[test]
fn sort_keys_orders_numerically() {
    cmd()
        .args(["sort-keys", r#"{"10": true, "2": false, "-1": false}"#])
        .assert()
        .success()
        .stdout(
            "[{\"key\":\"-1\",\"value\":false},{\"key\":\"2\",\"value\":false},{\"key\":\"10\",\"value\":true}]\n",
        );
}

#[test]
fn sort_keys_empty_object_is_null() {
    cmd()
        .args(["sort-keys", "{}"])
        .assert()
        .success()
        .stdout("null\n");
}

#[test]
fn sort_keys_non_boolean_value_fails() {
    cmd()
        .args(["sort-keys", r#"{"1": "x"}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON object"));
}

#[test]
fn sort_keys_non_numeric_key_fails() {
    cmd()
        .args(["sort-keys", r#"{"1": 1, "abc": 2}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to sort keys"));
}

// =============================================================================
// Transforms
// =============================================================================

#[test]
fn reverse_by_code_point() {
    cmd()
        .args(["reverse", "中文ab"])
        .assert()
        .success()
        .stdout("ba文中\n");
}

#[test]
fn upper_and_lower_first() {
    assert_eq!(stdout_of(&["upper-first", "hello"]), "Hello\n");
    assert_eq!(stdout_of(&["lower-first", "World"]), "world\n");
}

#[test]
fn width_conversion() {
    assert_eq!(stdout_of(&["to-full-width", "AB 1"]), "ＡＢ\u{3000}１\n");
    assert_eq!(stdout_of(&["to-half-width", "ＡＢ\u{3000}１"]), "AB 1\n");
}

// =============================================================================
// Classify & Parse
// =============================================================================

#[test]
fn classify_json_reports_cjk() {
    let stdout = stdout_of(&["classify", "中文。", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["contains_cjk"], true);
    assert_eq!(json["blank"], false);
    assert_eq!(json["ideographs"], 2);
}

#[test]
fn classify_text_output() {
    cmd()
        .args(["--color", "never", "classify", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ASCII letters only: yes"));
}

#[test]
fn color_never_emits_no_escape_codes() {
    cmd()
        .args(["--color", "never", "classify", "中文"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
    cmd()
        .args(["--color", "never", "info"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn color_always_emits_escape_codes() {
    cmd()
        .args(["--color", "always", "classify", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}["));
}

#[test]
fn parse_int_with_default() {
    assert_eq!(stdout_of(&["parse", "42"]), "42\n");
    assert_eq!(stdout_of(&["parse", "x", "--default", "-7"]), "-7\n");
}

#[test]
fn parse_long_and_bool() {
    assert_eq!(
        stdout_of(&["parse", "9999999999", "--as", "long"]),
        "9999999999\n"
    );
    assert_eq!(stdout_of(&["parse", "TRUE", "--as", "bool"]), "true\n");
    assert_eq!(stdout_of(&["parse", "yes", "--as", "bool"]), "false\n");
}

// =============================================================================
// Input Handling
// =============================================================================

#[test]
fn oversized_stdin_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(".textkit.toml"), "max_input_bytes = 4\n").unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "reverse"])
        .write_stdin("too long")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn oversized_multibyte_stdin_reports_size_not_encoding() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(".textkit.toml"), "max_input_bytes = 4\n").unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "reverse"])
        .write_stdin("aaa中")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn stdin_at_limit_with_crlf_is_accepted() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(tmp.path().join(".textkit.toml"), "max_input_bytes = 3\n").unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "reverse"])
        .write_stdin("中\r\n")
        .assert()
        .success()
        .stdout("中\n");
}

#[test]
fn disabled_input_limit_accepts_large_input() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::write(
        tmp.path().join(".textkit.toml"),
        "max_input_bytes = 4\ndisable_input_limit = true\n",
    )
    .unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "reverse"])
        .write_stdin("abcdefgh")
        .assert()
        .success()
        .stdout("hgfedcba\n");
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

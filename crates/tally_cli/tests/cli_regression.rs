use std::io::{BufRead, BufReader, Write};
use std::process::Stdio;

use assert_cmd::Command;
use tempfile::NamedTempFile;

fn tally() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tally"))
}

fn temp_file(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

fn stdout_of(cmd: &mut Command) -> String {
    let out = cmd.output().unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    String::from_utf8(out.stdout).unwrap()
}

#[test]
fn usage_without_args() {
    let out = tally().output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage: tally"), "{stderr}");
}

#[test]
fn unknown_command_is_a_usage_error() {
    tally().arg("frobnicate").assert().code(2);
}

#[test]
fn prime_reports_each_number() {
    tally()
        .args(["prime", "2", "4", "17", "9", "-7"])
        .assert()
        .success()
        .stdout("2: true\n4: false\n17: true\n9: false\n-7: false\n");
}

#[test]
fn prime_requires_a_number() {
    tally().arg("prime").assert().code(2);
}

#[test]
fn primes_default_report_covers_zero_to_twenty_nine() {
    let stdout = stdout_of(tally().arg("primes"));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 30);
    assert_eq!(lines[0], "0: false");
    assert_eq!(lines[2], "2: true");
    assert_eq!(lines[29], "29: true");
}

#[test]
fn primes_count_uses_strictly_below() {
    tally()
        .args(["primes", "--upto", "1000", "--count"])
        .assert()
        .success()
        .stdout("primes below 1000: 168\n");
}

#[test]
fn top_lists_ranked_words() {
    let f = temp_file("The cat sat on the mat.\nThe cat ran!\n");
    tally()
        .args(["top", "-n", "2"])
        .arg(f.path())
        .assert()
        .success()
        .stdout("1. the (3)\n2. cat (2)\n");
}

#[test]
fn top_breaks_ties_alphabetically() {
    let f = temp_file("b a b a c");
    tally()
        .arg("top")
        .arg(f.path())
        .assert()
        .success()
        .stdout("1. a (2)\n2. b (2)\n3. c (1)\n");
}

#[test]
fn top_of_empty_file_prints_nothing() {
    let f = temp_file("");
    tally().arg("top").arg(f.path()).assert().success().stdout("");
}

#[test]
fn top_missing_file_fails_with_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let out = tally().arg("top").arg(&missing).output().unwrap();
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Read failed"), "{stderr}");
}

#[test]
fn stats_prints_aligned_summary() {
    let f = temp_file("2\n4\n4\n4\n5\n5\n7\n9\n");
    tally()
        .arg("stats")
        .arg(f.path())
        .assert()
        .success()
        .stdout(concat!(
            "      Min: 2\n",
            "   Median: 4.5\n",
            "      Max: 9\n",
            "      Sum: 40\n",
            "     Mean: 5\n",
            "Std. dev.: 2\n",
        ));
}

#[test]
fn stats_of_empty_file_is_a_domain_error() {
    let f = temp_file("\n\n");
    let out = tally().arg("stats").arg(f.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Empty sample"), "{stderr}");
}

#[test]
fn stats_rejects_bad_number() {
    let f = temp_file("1\ntwo\n");
    let out = tally().arg("stats").arg(f.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Line 2"), "{stderr}");
}

#[test]
fn stats_rejects_non_finite_values() {
    let f = temp_file("1\nnan\n3\n");
    let out = tally().arg("stats").arg(f.path()).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("index 1 is not a finite number"), "{stderr}");
}

#[test]
fn wc_prints_totals_for_several_files() {
    let a = temp_file("a b\nc\n");
    let b = temp_file("hello\n");
    let stdout = stdout_of(tally().arg("wc").arg(a.path()).arg(b.path()));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("2 3 6 "), "{stdout}");
    assert!(lines[1].starts_with("1 1 6 "), "{stdout}");
    assert_eq!(lines[2], "3 4 12 total");
}

#[test]
fn wc_single_file_has_no_total() {
    let a = temp_file("one two three");
    let stdout = stdout_of(tally().arg("wc").arg(a.path()));
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.starts_with("0 3 13 "), "{stdout}");
}

#[test]
fn long_lines_reports_offenders() {
    let f = temp_file(&format!("short\n{}\n", "abcdefghijklmnop"));
    let stdout = stdout_of(tally().args(["long-lines", "--max", "10"]).arg(f.path()));
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(':'), "{stdout}");
    assert_eq!(
        lines[1],
        "   over 10 chars on line 2, 16 chars, \"abcdefghij ...\""
    );
}

#[test]
fn long_lines_clean_file() {
    let f = temp_file("short\n");
    let stdout = stdout_of(tally().arg("long-lines").arg(f.path()));
    assert!(stdout.trim_end().ends_with(": no long lines"), "{stdout}");
}

#[test]
fn huge_primes_report_streams_and_stops_quietly_on_closed_pipe() {
    let mut child = std::process::Command::new(env!("CARGO_BIN_EXE_tally"))
        .args(["primes", "--upto", "100000000000"])
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    let stdout = child.stdout.take().unwrap();
    let first: Vec<String> = BufReader::new(stdout)
        .lines()
        .take(3)
        .map(|l| l.unwrap())
        .collect();
    assert_eq!(first, vec!["0: false", "1: false", "2: true"]);

    let out = child.wait_with_output().unwrap();
    assert!(out.status.success(), "{:?}", out.status);
    assert!(out.stderr.is_empty(), "{}", String::from_utf8_lossy(&out.stderr));
}

#[test]
fn log_level_debug_writes_to_stderr() {
    let f = temp_file("a b a\n");
    let out = tally()
        .env_remove("RUST_LOG")
        .args(["--log-level", "debug", "top"])
        .arg(f.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("DEBUG"), "{stderr}");
    assert!(stderr.contains("read 6 bytes"), "{stderr}");
    assert_eq!(String::from_utf8_lossy(&out.stdout), "1. a (2)\n2. b (1)\n");
}

#[test]
fn default_log_level_is_quiet() {
    let f = temp_file("a b a\n");
    let out = tally()
        .env_remove("RUST_LOG")
        .arg("top")
        .arg(f.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stderr.is_empty());
}

#[test]
fn rust_log_is_honored() {
    let f = temp_file("a b a\n");
    let out = tally()
        .env("RUST_LOG", "debug")
        .arg("top")
        .arg(f.path())
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("DEBUG"), "{stderr}");
}

#[test]
fn bad_log_level_is_a_usage_error() {
    tally()
        .args(["--log-level", "loud", "prime", "2"])
        .assert()
        .code(2);
}

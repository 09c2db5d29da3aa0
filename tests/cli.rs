use std::process::{Command, Output};

fn passgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_passgen"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run passgen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

/// The numbered password lines, with their numbers stripped.
fn passwords(output: &Output) -> Vec<(usize, String)> {
    stdout(output)
        .lines()
        .skip_while(|line| !line.is_empty())
        .skip(1)
        .map(|line| {
            let (number, password) = line.split_once(": ").unwrap();
            (number.parse().unwrap(), password.to_owned())
        })
        .collect()
}

#[test]
fn defaults_to_one_twelve_character_password() {
    let output = passgen(&[]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    let mut lines = out.lines();
    assert_eq!(lines.next(), Some("Generated password:"));
    assert_eq!(lines.next(), Some("Length: 12 characters"));
    assert_eq!(
        lines.next(),
        Some("Character sets: Uppercase, Lowercase, Numbers")
    );
    assert_eq!(
        lines.next(),
        Some("Excluded similar characters: 0, O, I, l, 1")
    );
    assert_eq!(lines.next(), Some(""));

    let passwords = passwords(&output);
    assert_eq!(passwords.len(), 1);
    assert_eq!(passwords[0].0, 1);
    assert_eq!(passwords[0].1.len(), 12);
    assert!(passwords[0].1.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn count_and_length() {
    let output = passgen(&["-c", "5", "-l", "10"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("Generated passwords:\nLength: 10 characters\n"));
    let passwords = passwords(&output);
    assert_eq!(passwords.len(), 5);
    for (index, (number, password)) in passwords.iter().enumerate() {
        assert_eq!(*number, index + 1);
        assert_eq!(password.len(), 10);
    }
}

#[test]
fn special_characters() {
    let output = passgen(&["-s", "-l", "4", "-c", "3"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output)
        .contains("Character sets: Uppercase, Lowercase, Numbers, Special characters\n"));
    for (_, password) in passwords(&output) {
        assert_eq!(password.len(), 4);
        assert!(password.chars().any(|c| !c.is_ascii_alphanumeric()));
    }
}

#[test]
fn length_too_short() {
    let output = passgen(&["-l", "2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(
        stderr(&output),
        "Error: Password length must be at least 3\n"
    );
}

#[test]
fn length_too_long() {
    let output = passgen(&["-l", "129"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot exceed 128"));
}

#[test]
fn special_needs_four_characters() {
    let output = passgen(&["-s", "-l", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(stderr(&output)
        .contains("Password length must be at least 4 when using special characters"));
}

#[test]
fn count_out_of_range() {
    for count in ["0", "101", "-2"] {
        let output = passgen(&["-c", count]);
        assert_eq!(output.status.code(), Some(1), "count {count}");
        assert!(output.stdout.is_empty());
        assert!(stderr(&output).starts_with("Error: Count"));
    }
}

#[test]
fn count_is_reported_before_special_length() {
    for args in [["-s", "-l", "3", "-c", "0"], ["-c", "0", "-s", "-l", "3"]] {
        let output = passgen(&args);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert_eq!(stderr(&output), "Error: Count must be at least 1\n");
    }
}

#[test]
fn non_numeric_length() {
    let output = passgen(&["-l", "twelve"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
}

#[test]
fn help_goes_to_stdout() {
    let output = passgen(&["-h"]);
    assert_eq!(output.status.code(), Some(0));
    let out = stdout(&output);
    assert!(out.starts_with("Usage: passgen [OPTIONS]\n"));
    assert!(out.contains("Examples:"));
    assert!(output.stderr.is_empty());
}

#[test]
fn unknown_flag_prints_usage() {
    let output = passgen(&["-x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Usage:"));
}

#[test]
fn separate_runs_differ() {
    let first = passwords(&passgen(&["-l", "16"]));
    let second = passwords(&passgen(&["-l", "16"]));
    assert_ne!(first, second);
}

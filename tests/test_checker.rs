//! Integration tests for the line-oriented address checker.

mod common;

use address_book_fields::{Address, AddressChecker, Config, OutputFormat, Unit};
use common::raw_address;
use std::io::Cursor;

fn run(config: &Config, input: &str) -> (address_book_fields::CheckSummary, String) {
    let checker = AddressChecker::new(config);
    let mut output = Vec::new();
    let summary = checker.run(Cursor::new(input), &mut output).unwrap();
    (summary, String::from_utf8(output).unwrap())
}

#[test]
fn test_run_json_reports_each_line() {
    let input = format!(
        "{}\n\n{}\n   \n{}\n",
        Address::EXAMPLE,
        "123, some street, 01-01, 520000",
        raw_address("7B", "Elm Road", "#2-3", "100200"),
    );

    let (summary, output) = run(&Config::default(), &input);

    assert_eq!(summary.checked, 3);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.invalid, 1);
    assert!(!summary.all_valid());

    let reports: Vec<serde_json::Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(reports.len(), 3);

    assert_eq!(reports[0]["valid"], true);
    assert_eq!(reports[0]["address"]["unit"], "#01-01");
    assert!(reports[0].get("error").is_none());

    assert_eq!(reports[1]["valid"], false);
    assert_eq!(reports[1]["error"], Unit::MESSAGE_CONSTRAINTS);

    assert_eq!(reports[2]["address"]["block"], "7B");
    assert_eq!(reports[2]["address"]["is_private"], false);
}

#[test]
fn test_run_text_format() {
    let config = Config {
        output_format: OutputFormat::Text,
        ..Config::default()
    };

    let (summary, output) = run(&config, &format!("{}\nnot an address\n", Address::EXAMPLE));

    assert_eq!(summary.checked, 2);
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with("OK      123, some street, #01-01, 520000"));
    assert!(lines[0].contains("postal_code=520000"));
    assert!(lines[1].starts_with("INVALID not an address"));
    assert!(lines[1].ends_with(Address::MESSAGE_ADDRESS_CONSTRAINTS));
}

#[test]
fn test_run_empty_input() {
    let (summary, output) = run(&Config::default(), "");
    assert_eq!(summary.checked, 0);
    assert!(summary.all_valid());
    assert!(output.is_empty());
}

#[test]
fn test_run_applies_privacy_flag() {
    let config = Config {
        mark_private: true,
        ..Config::default()
    };

    let (_, output) = run(&config, Address::EXAMPLE);
    let report: serde_json::Value = serde_json::from_str(output.trim()).unwrap();
    assert_eq!(report["address"]["is_private"], true);
}

#[test]
fn test_run_continues_past_non_utf8_line() {
    let mut input = Vec::new();
    input.extend_from_slice(Address::EXAMPLE.as_bytes());
    input.extend_from_slice(b"\n\xff\xfe, bad\n");
    input.extend_from_slice(Address::EXAMPLE.as_bytes());
    input.extend_from_slice(b"\n");

    let checker = AddressChecker::new(&Config::default());
    let mut output = Vec::new();
    let summary = checker.run(Cursor::new(input), &mut output).unwrap();

    assert_eq!(summary.checked, 3);
    assert_eq!(summary.valid, 2);
    assert_eq!(summary.invalid, 1);

    let reports: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0]["valid"], true);
    assert_eq!(reports[1]["valid"], false);
    assert_eq!(reports[1]["error"], "Line is not valid UTF-8");
    assert_eq!(reports[1]["input"], "\u{FFFD}\u{FFFD}, bad");
    assert_eq!(reports[2]["valid"], true);
}

#[test]
fn test_run_strips_crlf_line_endings() {
    let input = format!("{}\r\n{}\r\n", Address::EXAMPLE, Address::EXAMPLE);
    let (summary, output) = run(&Config::default(), &input);

    assert_eq!(summary.valid, 2);
    let report: serde_json::Value = serde_json::from_str(output.lines().next().unwrap()).unwrap();
    assert_eq!(report["input"], Address::EXAMPLE);
}

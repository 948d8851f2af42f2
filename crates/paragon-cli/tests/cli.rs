//! Integration tests for the paragon CLI.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const RECEIPT: &str = "\
WHOLE FOODS MARKET
123 Main St
Austin TX 78701
Rolled Oats 4.99
Whole Milk 3.49
Bananas 2.99
SUBTOTAL 11.47
TAX 0.00
TOTAL 11.47
";

#[test]
fn parse_emits_json_with_extracted_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    fs::write(&input, RECEIPT).unwrap();

    Command::cargo_bin("paragon")
        .unwrap()
        .arg("parse")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("WHOLE FOODS"))
        .stdout(predicate::str::contains("Rolled Oats"))
        .stdout(predicate::str::contains("Staples"));
}

#[test]
fn parse_csv_lists_one_row_per_item() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("receipt.txt");
    fs::write(&input, RECEIPT).unwrap();

    Command::cargo_bin("paragon")
        .unwrap()
        .args(["parse", "--format", "csv"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("name,quantity,price,category"))
        .stdout(predicate::str::contains("Bananas,,2.99,Produce"));
}

#[test]
fn parse_fails_on_missing_input() {
    Command::cargo_bin("paragon")
        .unwrap()
        .args(["parse", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn batch_writes_one_output_per_input() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");
    fs::write(dir.path().join("a.txt"), RECEIPT).unwrap();
    fs::write(dir.path().join("b.txt"), RECEIPT).unwrap();

    let pattern = dir.path().join("*.txt");

    Command::cargo_bin("paragon")
        .unwrap()
        .arg("batch")
        .arg(pattern.to_str().unwrap())
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success();

    assert!(out_dir.join("a.receipt.json").exists());
    assert!(out_dir.join("b.receipt.json").exists());
}

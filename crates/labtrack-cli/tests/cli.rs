//! Runs the CLI against dataset files on disk.

use std::io::Write;

use clap::Parser;
use labtrack_cli::{run, Cli};
use serde_json::Value;
use tempfile::NamedTempFile;

const DATASET: &str = r#"{
    "products": [
        { "id": 1, "name": "Product1", "code": "P1" },
        { "id": 2, "name": "Product2", "code": "P2", "active": false }
    ],
    "qcLabels": [
        { "id": 1, "labelCode": "L-1", "printed": true, "printedAt": "2024-01-15T09:00:00", "copies": 2 },
        { "id": 2, "labelCode": "L-2", "printed": false },
        { "id": 3, "labelCode": "L-3", "printed": true, "printedAt": "2024-01-16T10:30:00", "copies": 1 },
        { "id": 4, "labelCode": "L-4", "printed": false },
        { "id": 5, "labelCode": "L-5", "printed": true, "printedAt": "2024-01-15T17:45:00", "copies": 3 },
        { "id": 6, "labelCode": "L-6", "printed": false }
    ],
    "testResults": [
        {
            "id": 10, "testType": "tensile", "passed": true, "testedAt": "2024-01-15T08:00:00",
            "product": { "id": 1, "name": "Product1", "code": "P1" }
        },
        { "id": 11, "testType": "tensile", "passed": false, "testedAt": "2024-01-16T08:00:00" },
        {
            "id": 12, "testType": "impact", "passed": true, "testedAt": "2024-01-17T08:00:00",
            "product": { "id": 2, "name": "Product2", "code": "P2" }
        }
    ]
}"#;

fn dataset() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(DATASET.as_bytes()).unwrap();
    file
}

fn invoke(file: &NamedTempFile, args: &[&str]) -> anyhow::Result<Value> {
    let path = file.path().to_str().unwrap();
    let head = ["labtrack", "--data", path];
    let argv = head.iter().chain(args).copied();
    let cli = Cli::try_parse_from(argv)?;
    let mut out = Vec::new();
    run(&cli, &mut out)?;
    Ok(serde_json::from_slice(&out)?)
}

fn ids(value: &Value) -> Vec<i64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|record| record["id"].as_i64().unwrap())
        .collect()
}

#[test]
fn lists_everything_without_filters() {
    let file = dataset();
    let out = invoke(&file, &["qc-labels"]).unwrap();
    assert_eq!(ids(&out), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn invalid_bool_filter_prints_empty_array() {
    let file = dataset();
    let out = invoke(&file, &["qc-labels", "--filter", "printed=invalid"]).unwrap();
    assert_eq!(out, Value::Array(vec![]));
}

#[test]
fn filters_and_sorts() {
    let file = dataset();
    let out = invoke(
        &file,
        &["qc-labels", "-f", "printed=true", "--sort", "COPIES", "--desc"],
    )
    .unwrap();
    assert_eq!(ids(&out), vec![5, 1, 3]);
}

#[test]
fn date_filter_ignores_time() {
    let file = dataset();
    let out = invoke(&file, &["qc-labels", "--filter", "printedAt=2024-01-15"]).unwrap();
    assert_eq!(ids(&out), vec![1, 5]);
}

#[test]
fn navigation_filter_skips_missing_product() {
    let file = dataset();
    let out = invoke(&file, &["test-results", "--filter", "productName=Product1"]).unwrap();
    assert_eq!(ids(&out), vec![10]);

    let out = invoke(&file, &["test-results", "--sort", "productName"]).unwrap();
    assert_eq!(ids(&out), vec![11, 10, 12]);
}

#[test]
fn serializes_camel_case_records() {
    let file = dataset();
    let out = invoke(&file, &["products", "--filter", "active=false"]).unwrap();
    assert_eq!(out[0]["code"], "P2");
    assert_eq!(out[0]["createdAt"], "1970-01-01T00:00:00");
}

#[test]
fn unknown_filter_field_fails() {
    let file = dataset();
    let err = invoke(&file, &["products", "--filter", "colour=red"]).unwrap_err();
    assert!(format!("{err:#}").contains("unknown filter field 'colour'"));
}

#[test]
fn missing_dataset_fails_with_context() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let cli =
        Cli::try_parse_from(["labtrack", "--data", path.to_str().unwrap(), "products"]).unwrap();
    let err = run(&cli, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().starts_with("failed to load dataset"));
}

#[test]
fn fields_does_not_need_a_dataset() {
    let cli = Cli::try_parse_from(["labtrack", "test-results", "--fields"]).unwrap();
    let mut out = Vec::new();
    run(&cli, &mut out).unwrap();

    let fields: Value = serde_json::from_slice(&out).unwrap();
    let names: Vec<&str> = fields
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"productName"));
    assert!(names.contains(&"testedAt"));
    assert_eq!(fields[0]["name"], "id");
    assert!(fields[0].get("mode").is_none());
}

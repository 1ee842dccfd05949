//! End-to-end loading tests over real files.

use std::fs;
use std::path::{Path, PathBuf};

use eda_ingest::load;
use eda_model::{DataType, EdaError};
use tempfile::tempdir;

fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write file");
    path
}

#[test]
fn csv_round_trip_shape_and_types() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "people.csv",
        "Name,Age,Active,Joined\nalice,30,true,2023-05-01\nbob,25,false,2024-01-15\n",
    );
    let table = load(&path).expect("load csv");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 4);
    assert_eq!(table.names(), &["Name", "Age", "Active", "Joined"]);
    let dtypes = table.dtypes();
    assert_eq!(dtypes[0].1, DataType::Text);
    assert_eq!(dtypes[1].1, DataType::Numeric);
    assert_eq!(dtypes[2].1, DataType::Boolean);
    assert_eq!(dtypes[3].1, DataType::Datetime);
}

#[test]
fn csv_missing_markers_become_missing() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "gaps.csv", "a,b\n1,x\nNA,\n3,z\n");
    let table = load(&path).expect("load csv");
    assert_eq!(table.column("a").expect("a").missing_count(), 1);
    assert_eq!(table.column("b").expect("b").missing_count(), 1);
}

#[test]
fn empty_csv_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "empty.csv", "");
    let error = load(&path).expect_err("must reject");
    assert!(matches!(error, EdaError::EmptyFile { .. }));
}

#[test]
fn header_only_csv_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "header.csv", "a,b,c\n");
    let error = load(&path).expect_err("must reject");
    assert!(matches!(error, EdaError::EmptyFile { .. }));
}

#[test]
fn unsupported_format_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "notes.txt", "a,b\n1,2\n");
    let error = load(&path).expect_err("must reject");
    assert!(matches!(error, EdaError::UnsupportedFormat(tag) if tag == "plain"));
}

#[test]
fn json_records_load() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(
        dir.path(),
        "records.json",
        r#"[{"name": "alice", "score": 9.5}, {"name": "bob", "score": null}]"#,
    );
    let table = load(&path).expect("load json");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.names(), &["name", "score"]);
    let score = table.column("score").expect("score");
    assert_eq!(score.data_type(), DataType::Numeric);
    assert_eq!(score.missing_count(), 1);
}

#[test]
fn json_columnar_matches_record_shape() {
    let dir = tempdir().expect("tempdir");
    let records = write_file(
        dir.path(),
        "records.json",
        r#"[{"x": 1, "y": "a"}, {"x": 2, "y": "b"}, {"x": 3, "y": "c"}]"#,
    );
    let columnar = write_file(
        dir.path(),
        "columnar.json",
        r#"{"x": [1, 2, 3], "y": ["a", "b", "c"]}"#,
    );
    let from_records = load(&records).expect("load records");
    let from_columns = load(&columnar).expect("load columnar");
    assert_eq!(from_records.row_count(), from_columns.row_count());
    assert_eq!(from_records.names(), from_columns.names());
}

#[test]
fn empty_json_array_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "empty.json", "[]");
    let error = load(&path).expect_err("must reject");
    assert!(matches!(error, EdaError::EmptyFile { .. }));
}

#[test]
fn ragged_columnar_json_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "ragged.json", r#"{"x": [1, 2], "y": [1]}"#);
    let error = load(&path).expect_err("must reject");
    assert!(matches!(error, EdaError::Parse { format, .. } if format == "json"));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "broken.json", "[{\"a\": 1,]");
    let error = load(&path).expect_err("must reject");
    assert!(matches!(error, EdaError::Parse { format, .. } if format == "json"));
}

#[test]
fn scalar_json_is_a_parse_error() {
    let dir = tempdir().expect("tempdir");
    let path = write_file(dir.path(), "scalar.json", "42");
    let error = load(&path).expect_err("must reject");
    assert!(matches!(error, EdaError::Parse { format, .. } if format == "json"));
}

#[test]
fn xlsx_first_sheet_loads() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/people.xlsx");
    let table = load(&path).expect("load xlsx");
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.names(), &["Height", "Weight", "Name"]);
    let height = table.column("Height").expect("height");
    assert_eq!(height.data_type(), DataType::Numeric);
    assert_eq!(
        height.present_numeric(),
        vec![(0, 180.0), (1, 165.0)]
    );
    let name = table.column("Name").expect("name");
    assert_eq!(name.data_type(), DataType::Text);
}

//! Format inference precedence tests.

use std::fs;
use std::io::Write;

use eda_ingest::{FormatTag, infer_format};
use tempfile::tempdir;

#[test]
fn extension_wins_over_content() {
    // JSON content saved with a .csv extension: the extension-based MIME
    // lookup answers first, so the cheaper (wrong) tier wins.
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("records.csv");
    fs::write(&path, b"[{\"a\": 1}, {\"a\": 2}]").expect("write file");
    assert_eq!(infer_format(&path), FormatTag::Csv);
}

#[test]
fn zip_magic_sniffed_without_extension() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("workbook");
    let mut file = fs::File::create(&path).expect("create file");
    file.write_all(b"PK\x03\x04rest-of-archive").expect("write");
    assert_eq!(infer_format(&path), FormatTag::Xlsx);
}

#[test]
fn json_content_sniffed_without_extension() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("records");
    fs::write(&path, b"  [{\"a\": 1}]").expect("write file");
    assert_eq!(infer_format(&path), FormatTag::Json);
}

#[test]
fn unknown_extension_falls_back_to_tail() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("notes.scratch");
    fs::write(&path, b"plain text body").expect("write file");
    assert_eq!(infer_format(&path), FormatTag::Other("scratch".to_string()));
}

#[test]
fn txt_extension_is_not_loadable() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");
    fs::write(&path, b"a,b\n1,2\n").expect("write file");
    // text/plain subtype, never csv, even though the content is delimited
    assert_eq!(infer_format(&path), FormatTag::Other("plain".to_string()));
}

use eodata_protocol::encode_number;
use eodata_pub::{read_ecf, read_eif, read_enf, read_esf, DataError, PubData, PubKind};
use std::path::PathBuf;
use tempfile::TempDir;

fn number(buf: &mut Vec<u8>, value: u32, width: usize) {
    buf.extend_from_slice(&encode_number(value)[..width]);
}

fn header(buf: &mut Vec<u8>, tag: &str, total: u32) {
    buf.extend_from_slice(tag.as_bytes());
    number(buf, 12, 4);
    number(buf, total, 2);
    buf.push(0);
}

/// Minimal item: named, type Static, every stat zero
fn item(buf: &mut Vec<u8>, name: &str) {
    number(buf, name.len() as u32, 1);
    buf.extend_from_slice(name.as_bytes());
    buf.extend(std::iter::repeat(encode_number(0)[0]).take(58));
}

fn write_file(dir: &TempDir, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, data).unwrap();
    path
}

#[test]
fn reads_items_with_sequential_ids() {
    let dir = TempDir::new().unwrap();
    let mut data = Vec::new();
    header(&mut data, "EIF", 3);
    item(&mut data, "Gold");
    item(&mut data, "Bread");
    let path = write_file(&dir, "dat001.eif", &data);

    let items = read_eif(&path).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id.get(), 1);
    assert_eq!(items[0].name, "Gold");
    assert_eq!(items[1].id.get(), 2);
    assert_eq!(items[1].name, "Bread");
}

#[test]
fn rejects_wrong_tag() {
    let dir = TempDir::new().unwrap();
    let mut data = Vec::new();
    header(&mut data, "EIF", 3);
    item(&mut data, "Gold");
    item(&mut data, "Bread");
    let path = write_file(&dir, "dat001.eif", &data);

    let err = read_enf(&path).unwrap_err();
    assert!(matches!(err, DataError::FormatMismatch { .. }));
    assert!(!err.is_not_found());
}

#[test]
fn short_file_fails_without_partial_result() {
    let dir = TempDir::new().unwrap();
    let mut data = Vec::new();
    header(&mut data, "EIF", 3);
    item(&mut data, "Gold");
    let path = write_file(&dir, "dat001.eif", &data);

    let err = read_eif(&path).unwrap_err();
    assert!(matches!(err, DataError::TruncatedSource { .. }));
}

#[test]
fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = read_ecf(dir.path().join("dat001.ecf")).unwrap_err();
    assert!(err.is_not_found());

    let err = read_esf(dir.path().join("dsl001.esf")).unwrap_err();
    assert!(matches!(err, DataError::SourceUnavailable { .. }));
}

#[test]
fn loads_by_kind() {
    let dir = TempDir::new().unwrap();
    let mut data = Vec::new();
    header(&mut data, "EIF", 2);
    item(&mut data, "Gold");
    let path = write_file(&dir, "dat001.eif", &data);

    let kind = PubKind::from_extension(&path).unwrap();
    let loaded = PubData::load(kind, &path).unwrap();
    assert_eq!(loaded.kind(), PubKind::Item);
    assert_eq!(loaded.len(), 1);

    let json = serde_json::to_value(&loaded).unwrap();
    assert_eq!(json[0]["name"], "Gold");
    assert_eq!(json[0]["type"], "Static");
}

use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn repair_file_overwrites_in_place() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(broken_fn("getItem").as_bytes()).unwrap();

    let summary = repair_file(temp_file.path(), &Options::default()).unwrap();
    assert_eq!(summary.repaired, 1);
    assert_eq!(summary.skipped, 0);

    let content = std::fs::read_to_string(temp_file.path()).unwrap();
    assert_eq!(content, fixed_fn("getItem"));
}

#[test]
fn repair_file_missing_path_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.ts");
    let err = repair_file(&path, &Options::default()).unwrap_err();
    assert!(matches!(err, RepairError::Io { .. }));
}

#[test]
fn failed_pass_leaves_the_file_untouched() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let input = [
        "export async function removeAll(req, res) {",
        "    handleControllerError(error, res, ',",
        "    dangling()",
    ]
    .join("\n");
    temp_file.write_all(input.as_bytes()).unwrap();

    let err = repair_file(temp_file.path(), &Options::default()).unwrap_err();
    assert!(matches!(err, RepairError::UnterminatedRegion { .. }));

    let content = std::fs::read_to_string(temp_file.path()).unwrap();
    assert_eq!(content, input, "no partial write on failure");
}

#[test]
fn repair_to_writer_matches_repair_to_string() {
    let input = format!("{}\n{}", broken_fn("getItem"), broken_fn("removeItem"));
    let opts = Options::default();

    let mut buf: Vec<u8> = Vec::new();
    let summary = repair_to_writer(&input, &opts, &mut buf).unwrap();
    assert_eq!(summary.repaired, 2);

    let via_string = repair_to_string(&input, &opts).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), via_string);
}

use hyperlap_core::artifact::{read_node_lists, write_node_lists};
use hyperlap_core::errors::{ExportError, HyperlapError};

#[test]
fn node_lists_are_read_back_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edges.json");
    let lists = vec![vec![3, 4], vec![1, 2, 3], vec![9]];

    write_node_lists(&path, &lists).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[[3,4],[1,2,3],[9]]");
    assert_eq!(read_node_lists(&path).unwrap(), lists);
}

#[test]
fn missing_artifact_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_node_lists(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(
        err,
        HyperlapError::ExportError(ExportError::Read { .. })
    ));
}

#[test]
fn unwritable_destination_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing_dir").join("edges.json");
    let err = write_node_lists(&path, &[vec![1, 2]]).unwrap_err();
    assert!(matches!(
        err,
        HyperlapError::ExportError(ExportError::Write { .. })
    ));
}

#[test]
fn non_integer_labels_fail_to_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, r#"[["a", "b"]]"#).unwrap();
    assert!(matches!(
        read_node_lists(&path),
        Err(HyperlapError::SerializationError(_))
    ));
}

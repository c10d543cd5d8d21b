use thompson_lib::Nfa;

use super::dot::write_dot;

#[test]
fn writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ab.dot");
    let dot = Nfa::build("ab").unwrap().to_dot();

    write_dot(&path, &dot).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), dot);
}

#[test]
fn error_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("ab.dot");

    let err = write_dot(&path, "digraph {}\n").unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("no-such-dir"));
}

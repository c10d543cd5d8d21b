use std::io::Cursor;
use std::ops::ControlFlow;

use indoc::indoc;
use thompson_lib::Nfa;

use super::shell::{Shell, ShellArgs, ShellError};

fn shell(quiet: bool) -> Shell {
    Shell::new(ShellArgs {
        quiet,
        empty_marker: "$".to_string(),
        color: false,
    })
}

/// Run a quiet session over `script` and return everything it printed.
fn session(script: &str) -> String {
    let mut input = Cursor::new(script.as_bytes());
    let mut out = Vec::new();
    shell(true).run(&mut input, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn build_then_match() {
    let out = session(indoc! {"
        exp (a|b)*a
        mat abba
        mat ab
        mat a
    "});
    insta::assert_snapshot!(out, @r"
    match
    no match
    match
    ");
}

#[test]
fn default_automaton_accepts_only_empty_string() {
    let out = session("mat $\nmat a\n");
    insta::assert_snapshot!(out, @r"
    match
    no match
    ");
}

#[test]
fn unknown_commands() {
    let out = session("foo bar\n\n   \n");
    insta::assert_snapshot!(out, @r"
    Unknown command: foo
    Unknown command: (none)
    Unknown command: (none)
    ");
}

#[test]
fn missing_arguments_are_prompted() {
    let out = session("exp\nab\nmat\nab\n");
    assert_eq!(
        out,
        "Please enter a regular expression:Please enter a string to check:match\n"
    );
}

#[test]
fn prompted_empty_string_is_tested() {
    let out = session("exp a*\nmat\n\n");
    assert_eq!(out, "Please enter a string to check:match\n");
}

#[test]
fn carriage_returns_are_stripped() {
    let out = session("exp ab\r\nmat ab\r\n");
    assert_eq!(out, "match\n");
}

#[test]
fn end_stops_the_session() {
    let out = session("exp a\nend\nmat a\n");
    assert_eq!(out, "");
}

#[test]
fn malformed_expression_keeps_previous_automaton() {
    let out = session("exp a\nexp (a\nmat a\n");
    assert!(out.contains("missing closing `)`"));
    assert!(out.ends_with("match\n"));
    assert!(!out.ends_with("no match\n"));
}

#[test]
fn custom_empty_marker() {
    let mut sh = Shell::new(ShellArgs {
        quiet: true,
        empty_marker: "<empty>".to_string(),
        color: false,
    });
    let mut input = Cursor::new("exp a*\nmat <empty>\nmat $\n".as_bytes());
    let mut out = Vec::new();
    sh.run(&mut input, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "match\nno match\n");
}

#[test]
fn execute_reports_control_flow() {
    let mut sh = shell(true);
    let mut input = Cursor::new(&b""[..]);
    let mut out = Vec::new();

    let flow = sh.execute("exp ab", &mut input, &mut out).unwrap();
    assert_eq!(flow, ControlFlow::Continue(()));
    assert_eq!(*sh.nfa(), Nfa::build("ab").unwrap());

    let flow = sh.execute("end", &mut input, &mut out).unwrap();
    assert_eq!(flow, ControlFlow::Break(()));
}

#[test]
fn prompt_at_end_of_input_ends_session() {
    let mut sh = shell(true);
    let mut input = Cursor::new(&b""[..]);
    let mut out = Vec::new();
    let flow = sh.execute("mat", &mut input, &mut out).unwrap();
    assert_eq!(flow, ControlFlow::Break(()));
}

#[test]
fn dot_writes_current_automaton() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nfa.dot");

    let out = session(&format!("exp a|b\ndot {}\n", path.display()));

    assert_eq!(out, "");
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, Nfa::build("a|b").unwrap().to_dot());
}

#[test]
fn dot_path_can_be_prompted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prompted.dot");

    let out = session(&format!("dot\n{}\n", path.display()));

    assert_eq!(out, "Please enter a filepath to write the output to:");
    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, Nfa::empty().to_dot());
}

#[test]
fn dot_export_failure_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nfa.dot");

    let out = session(&format!("exp a\ndot {}\nmat a\n", path.display()));

    assert!(out.starts_with("Error while exporting .dot: cannot write "));
    assert!(out.ends_with("match\n"));

    let err = shell(true).export_dot(&path).unwrap_err();
    assert!(matches!(err, ShellError::Export { .. }));
}

#[test]
fn interactive_mode_prints_banner_and_menu() {
    let mut input = Cursor::new("end\n".as_bytes());
    let mut out = Vec::new();
    shell(false).run(&mut input, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.starts_with("Regular expression parsing"));
    assert_eq!(out.matches("Available operations:").count(), 1);
    assert!(out.contains(" - mat <string>\t\tCheck whether a string is accepted by automaton\n"));
}

#[test]
fn interactive_mode_ends_at_end_of_input() {
    let mut input = Cursor::new("mat $\n".as_bytes());
    let mut out = Vec::new();
    shell(false).run(&mut input, &mut out).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.matches("Available operations:").count(), 2);
}

#[test]
fn inline_expression_ignores_trailing_whitespace() {
    let mut sh = shell(true);
    let mut input = Cursor::new(&b""[..]);
    let mut out = Vec::new();

    sh.execute("exp ab \t", &mut input, &mut out).unwrap();
    assert_eq!(*sh.nfa(), Nfa::build("ab").unwrap());
    assert!(out.is_empty());

    sh.execute("mat ab ", &mut input, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "match\n");
}

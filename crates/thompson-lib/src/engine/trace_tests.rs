use thompson_core::Colors;

use crate::Nfa;

use super::{Matcher, PrintTracer, Verbosity};

fn trace(expr: &str, input: &str, verbosity: Verbosity) -> String {
    let nfa = Nfa::expect_valid(expr);
    let mut tracer = PrintTracer::new(&nfa, verbosity, Colors::OFF);
    let matched = Matcher::new(&nfa).is_match_traced(input, &mut tracer);
    assert_eq!(matched, nfa.is_match(input));
    tracer.render()
}

#[test]
fn default_verbosity_counts_states() {
    insta::assert_snapshot!(trace("(a|b)*a", "ba", Verbosity::Default), @r#"
    input "ba"
    start  6 states
    0 'b'  7 states
    1 'a'  8 states accepting
    match
    "#);
}

#[test]
fn verbose_lists_state_ids() {
    insta::assert_snapshot!(trace("(a|b)*a", "ba", Verbosity::Verbose), @r#"
    input "ba"
    start  {S6, S4, S7, S8, S0, S2}
    0 'b'  {S3, S5, S4, S7, S8, S0, S2}
    1 'a'  {S9, S1, S5, S4, S7, S8, S0, S2} accepting
    match
    "#);
}

#[test]
fn rejected_after_leaving_accept() {
    insta::assert_snapshot!(trace("(a|b)*a", "ab", Verbosity::Default), @r#"
    input "ab"
    start  6 states
    0 'a'  8 states accepting
    1 'b'  7 states
    no match
    "#);
}

#[test]
fn stuck_ends_early() {
    insta::assert_snapshot!(trace("a", "ca", Verbosity::Verbose), @r#"
    input "ca"
    start  {S0}
    0 'c'  stuck
    no match
    "#);
}

#[test]
fn empty_automaton() {
    insta::assert_snapshot!(trace("", "", Verbosity::Verbose), @r#"
    input ""
    start  ∅
    match
    "#);
    insta::assert_snapshot!(trace("", "a", Verbosity::Default), @r#"
    input "a"
    start  0 states
    0 'a'  stuck
    no match
    "#);
}

#[test]
fn positions_are_zero_padded() {
    let out = trace("a*", "aaaaaaaaaaaa", Verbosity::Default);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[2], "00 'a'  3 states accepting");
    assert_eq!(lines[13], "11 'a'  3 states accepting");
}

#[test]
fn single_state_is_singular() {
    let out = trace("ab", "", Verbosity::Default);
    assert!(out.contains("start  1 state\n"));
}

#[test]
fn colors_wrap_verdict() {
    let nfa = Nfa::expect_valid("a");
    let mut tracer = PrintTracer::new(&nfa, Verbosity::Default, Colors::ON);
    Matcher::new(&nfa).is_match_traced("a", &mut tracer);
    let last = tracer.lines().last().cloned().unwrap_or_default();
    assert_eq!(last, "\x1b[32mmatch\x1b[0m");
}

#[test]
fn space_symbol_is_spelled_out() {
    insta::assert_snapshot!(trace("a", "a b", Verbosity::Verbose), @r#"
    input "a b"
    start  {S0}
    0 'a'  {S1} accepting
    1 '\u{20}'  stuck
    no match
    "#);
}

use crate::Nfa;

use super::{EMPTY_INPUT_SENTINEL, Matcher, normalize_input};

#[track_caller]
fn check(expr: &str, accepted: &[&str], rejected: &[&str]) {
    let nfa = Nfa::expect_valid(expr);
    for input in accepted {
        assert!(nfa.is_match(input), "`{expr}` should match {input:?}");
    }
    for input in rejected {
        assert!(!nfa.is_match(input), "`{expr}` should not match {input:?}");
    }
}

#[test]
fn empty_automaton_accepts_only_empty_string() {
    check("", &[""], &["a", "ab"]);
}

#[test]
fn single_letter() {
    check("a", &["a"], &["", "b", "aa"]);
}

#[test]
fn alternation() {
    check("a|b", &["a", "b"], &["", "ab"]);
}

#[test]
fn concatenation() {
    check("ab", &["ab"], &["a", "ba", "abb"]);
}

#[test]
fn star() {
    check("a*", &["", "a", "aaaa"], &["b", "ab"]);
}

#[test]
fn starred_alternation_then_letter() {
    check("(a|b)*a", &["a", "ba", "abba"], &["", "b", "ab"]);
}

#[test]
fn nested_stars_terminate() {
    check("((a*)*)*", &["", "a", "aaaaaaaa"], &["b"]);
    check("(a*|b*)*c", &["c", "abbac"], &["", "ab"]);
}

#[test]
fn case_sensitive() {
    check("aB", &["aB"], &["ab", "AB"]);
}

#[test]
fn symbols_outside_the_alphabet_reject() {
    check("a*", &[], &["$", "a b", "á"]);
}

#[test]
fn repeated_calls_agree() {
    let nfa = Nfa::expect_valid("(a|b)*a");
    let matcher = Matcher::new(&nfa);
    for _ in 0..3 {
        assert!(matcher.is_match("abba"));
        assert!(!matcher.is_match("ab"));
    }
    assert_eq!(nfa, Nfa::expect_valid("(a|b)*a"));
}

#[test]
fn epsilon_closure_order() {
    let nfa = Nfa::expect_valid("(a|b)*a");
    let matcher = Matcher::new(&nfa);

    let start = matcher.start();
    assert_eq!(start.as_slice(), &[6, 4, 7, 8, 0, 2]);

    let after_b = matcher.step(&start, 'b');
    assert_eq!(after_b.as_slice(), &[3, 5, 4, 7, 8, 0, 2]);
    assert!(!matcher.is_accepting(&after_b));

    let after_a = matcher.step(&after_b, 'a');
    assert_eq!(after_a.as_slice(), &[9, 1, 5, 4, 7, 8, 0, 2]);
    assert!(matcher.is_accepting(&after_a));
}

#[test]
fn closure_of_symbol_state_is_itself() {
    let nfa = Nfa::expect_valid("ab");
    let matcher = Matcher::new(&nfa);
    assert_eq!(matcher.epsilon_closure([0]).as_slice(), &[0]);
    assert_eq!(matcher.epsilon_closure([1]).as_slice(), &[1, 2]);
}

#[test]
fn sentinel_means_empty_input() {
    let nfa = Nfa::expect_valid("a*");
    assert!(nfa.is_match(normalize_input("$", EMPTY_INPUT_SENTINEL)));
    assert!(!Nfa::expect_valid("a").is_match(normalize_input("$", EMPTY_INPUT_SENTINEL)));
    assert_eq!(normalize_input("#", "#"), "");
    assert_eq!(normalize_input("$$", EMPTY_INPUT_SENTINEL), "$$");
}

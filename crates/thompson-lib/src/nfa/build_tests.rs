//! Tests for NfaBuilder fragment combinators.

use super::*;

#[test]
fn letter_fragment() {
    let mut b = NfaBuilder::new();

    let frag = b.letter('x');

    assert_eq!(frag, Fragment::new(0, 1));
    insta::assert_snapshot!(b.finish(Some(frag)).dump(), @r"
    initial = S0
    accept = S1

    S0: 'x' → S1
    S1: ε → ∅
    ");
}

#[test]
fn concat_patches_exit_only() {
    let mut b = NfaBuilder::new();

    let x = b.letter('x');
    let y = b.letter('y');
    let frag = b.concat(x, y);

    assert_eq!(frag, Fragment::new(0, 3));
    assert_eq!(b.len(), 4);
}

#[test]
fn star_appends_split_and_stub() {
    let mut b = NfaBuilder::new();

    let x = b.letter('x');
    let frag = b.star(x);

    assert_eq!(frag, Fragment::new(2, 3));
    let nfa = b.finish(Some(frag));
    assert_eq!(nfa.state(1).successors().collect::<Vec<_>>(), vec![0, 3]);
    assert_eq!(nfa.state(2).successors().collect::<Vec<_>>(), vec![0, 3]);
}

#[test]
fn alternate_joins_both_exits() {
    let mut b = NfaBuilder::new();

    let x = b.letter('x');
    let y = b.letter('y');
    let frag = b.alternate(x, y);

    assert_eq!(frag, Fragment::new(4, 5));
    let nfa = b.finish(Some(frag));
    assert_eq!(nfa.state(1).out1, Some(5));
    assert_eq!(nfa.state(3).out1, Some(5));
    assert_eq!(*nfa.state(4), State::split(0, 2));
}

#[test]
fn next_id_tracks_length() {
    let mut b = NfaBuilder::new();
    assert!(b.is_empty());
    assert_eq!(b.next_id(), 0);

    let x = b.letter('x');
    b.star(x);

    assert_eq!(b.next_id(), 4);
}

#[test]
fn finish_without_root_is_empty() {
    let nfa = NfaBuilder::new().finish(None);
    assert!(nfa.is_empty());
    assert_eq!(nfa.accept(), None);
    assert_eq!(nfa, Nfa::empty());
}

use crate::utils::{
    format_state_list, format_state_set, format_symbol, quote_input, width_for_count,
};

#[test]
fn state_set_empty() {
    assert_eq!(format_state_set(&[]), "∅");
}

#[test]
fn state_set_keeps_order() {
    assert_eq!(format_state_set(&[4, 0, 2]), "{S4, S0, S2}");
    assert_eq!(format_state_set(&[7]), "{S7}");
}

#[test]
fn quote_plain_input() {
    assert_eq!(quote_input("abba"), "\"abba\"");
    assert_eq!(quote_input(""), "\"\"");
}

#[test]
fn quote_escapes_control_chars() {
    assert_eq!(quote_input("a\tb"), "\"a\\tb\"");
    assert_eq!(quote_input("say \"hi\""), "\"say \\\"hi\\\"\"");
}

#[test]
fn symbol_display() {
    assert_eq!(format_symbol('a'), "'a'");
    assert_eq!(format_symbol(' '), "'\\u{20}'");
    assert_eq!(format_symbol('\n'), "'\\n'");
}

#[test]
fn state_list_has_no_braces() {
    assert_eq!(format_state_list(&[1, 3]), "S1, S3");
    assert_eq!(format_state_list(&[]), "∅");
}

#[test]
fn index_width() {
    assert_eq!(width_for_count(0), 1);
    assert_eq!(width_for_count(1), 1);
    assert_eq!(width_for_count(10), 1);
    assert_eq!(width_for_count(11), 2);
    assert_eq!(width_for_count(101), 3);
}

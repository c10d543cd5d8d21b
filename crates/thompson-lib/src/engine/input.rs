/// Caller-facing stand-in for the empty string.
///
/// Some surfaces (a shell prompt, a positional argument) cannot carry an
/// empty value, so `$` is accepted in its place. It is not part of the
/// expression alphabet.
pub const EMPTY_INPUT_SENTINEL: &str = "$";

/// Map `sentinel` to the empty string; any other input passes through.
///
/// ```
/// use thompson_lib::{EMPTY_INPUT_SENTINEL, normalize_input};
///
/// assert_eq!(normalize_input("$", EMPTY_INPUT_SENTINEL), "");
/// assert_eq!(normalize_input("ab", EMPTY_INPUT_SENTINEL), "ab");
/// ```
pub fn normalize_input<'a>(input: &'a str, sentinel: &str) -> &'a str {
    if input == sentinel { "" } else { input }
}

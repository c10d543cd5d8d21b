/// Format a list of state ids as a set literal.
///
/// # Examples
/// ```
/// use thompson_core::utils::format_state_set;
/// assert_eq!(format_state_set(&[0, 2, 3]), "{S0, S2, S3}");
/// assert_eq!(format_state_set(&[]), "∅");
/// ```
pub fn format_state_set(ids: &[u32]) -> String {
    if ids.is_empty() {
        return "∅".to_string();
    }
    format!("{{{}}}", format_state_list(ids))
}

/// Comma-separated state ids without braces, `∅` when empty.
pub fn format_state_list(ids: &[u32]) -> String {
    if ids.is_empty() {
        return "∅".to_string();
    }
    let items: Vec<_> = ids.iter().map(|id| format!("S{}", id)).collect();
    items.join(", ")
}

/// Quote an input string for display, escaping control characters.
///
/// The empty string renders as `""` so it stays visible in logs.
///
/// # Examples
/// ```
/// use thompson_core::utils::quote_input;
/// assert_eq!(quote_input("ab"), "\"ab\"");
/// assert_eq!(quote_input(""), "\"\"");
/// ```
pub fn quote_input(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        out.extend(c.escape_debug());
    }
    out.push('"');
    out
}

/// Display a single input symbol, escaping anything that is not printable.
///
/// A space has no visible glyph, so it is spelled as its code point.
pub fn format_symbol(c: char) -> String {
    match c {
        c if c.is_ascii_graphic() => format!("'{}'", c),
        ' ' => format!("'{}'", c.escape_unicode()),
        c => format!("'{}'", c.escape_default()),
    }
}

/// Number of decimal digits needed to print `count - 1` (the largest index).
pub fn width_for_count(count: usize) -> usize {
    let max = count.saturating_sub(1);
    max.checked_ilog10().map_or(1, |d| d as usize + 1)
}

//! Terminal palette shared by the state table, the matcher trace and the
//! CLI verdicts.
//!
//! Symbols on consuming edges are blue and epsilon labels are dim. The
//! accepting state and `match` are green, while `stuck` and `no match` are
//! red.

/// ANSI escapes for each role, or empty strings when color is off.
///
/// Sticks to the basic 16-color codes so both light and dark terminals
/// stay readable.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Every field empty, so formatting with it adds nothing.
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    /// `ON` or `OFF`, as decided by the CLI's `--color` choice.
    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.blue.is_empty()
    }
}

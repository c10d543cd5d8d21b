//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.
//! The same definition is reused across commands, hidden (via `.hide(true)`)
//! where it has no effect.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use thompson_lib::EMPTY_INPUT_SENTINEL;

/// Expression text (positional).
pub fn expr_arg() -> Arg {
    Arg::new("expr")
        .value_name("EXPR")
        .required(true)
        .help("Regular expression (letters, `|`, `*`, parentheses)")
}

/// Single input string (positional).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .help("String to test (use the empty marker for the empty string)")
}

/// One or more input strings (positional).
pub fn inputs_arg() -> Arg {
    Arg::new("inputs")
        .value_name("INPUT")
        .required(true)
        .num_args(1..)
        .help("Strings to test (use the empty marker for the empty string)")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Stand-in for the empty string (--empty-marker).
pub fn empty_marker_arg() -> Arg {
    Arg::new("empty_marker")
        .long("empty-marker")
        .value_name("STR")
        .default_value(EMPTY_INPUT_SENTINEL)
        .help("Input value that means the empty string")
}

/// Verbosity level (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v lists state ids)")
}

/// Output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Suppress banner and menu (-q/--quiet).
pub fn quiet_arg() -> Arg {
    Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .help("Suppress banner and menu (for scripted input)")
}

/// Recursion limit for nested groups and branches (--recursion-limit).
pub fn recursion_limit_arg() -> Arg {
    Arg::new("recursion_limit")
        .long("recursion-limit")
        .value_name("N")
        .default_value("1024")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting of groups and alternation branches")
}

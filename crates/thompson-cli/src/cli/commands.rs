//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`. The
//! one-shot commands accept each other's runtime flags (`--empty-marker`,
//! `-v`, `--recursion-limit`) so a command line can be re-pointed at another
//! subcommand without edits; flags a command ignores are hidden from `--help`.

use clap::Command;

use super::args::*;

/// Add hidden matching args (for commands that never test input).
fn with_hidden_match_args(cmd: Command) -> Command {
    cmd.arg(empty_marker_arg().hide(true))
        .arg(verbose_arg().hide(true))
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("thompson")
        .about("Build, match and render Thompson NFAs for small regular expressions")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(check_command())
        .subcommand(dump_command())
        .subcommand(dot_command())
        .subcommand(match_command())
        .subcommand(trace_command())
        .subcommand(shell_command())
}

/// Validate an expression.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate an expression")
        .after_help(
            r#"EXAMPLES:
  thompson check '(a|b)*a'       # silent on success
  thompson check '(ab'           # prints diagnostics, exits 1"#,
        )
        .arg(expr_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg());

    with_hidden_match_args(cmd)
}

/// Print the state table.
pub fn dump_command() -> Command {
    let cmd = Command::new("dump")
        .about("Show the automaton's state table")
        .after_help(
            r#"EXAMPLES:
  thompson dump 'a*'                 # one line per state
  thompson dump 'a*' --format json   # serialized automaton"#,
        )
        .arg(expr_arg())
        .arg(format_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg());

    with_hidden_match_args(cmd)
}

/// Render Graphviz DOT.
pub fn dot_command() -> Command {
    let cmd = Command::new("dot")
        .about("Render the automaton as Graphviz DOT")
        .after_help(
            r#"EXAMPLES:
  thompson dot '(a|b)*a'               # DOT to stdout
  thompson dot '(a|b)*a' -o nfa.dot    # DOT to file
  thompson dot 'ab' | dot -Tsvg        # pipe into graphviz"#,
        )
        .arg(expr_arg())
        .arg(output_file_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg());

    with_hidden_match_args(cmd)
}

/// Test strings against an expression.
pub fn match_command() -> Command {
    Command::new("match")
        .about("Test strings against an expression")
        .after_help(
            r#"EXAMPLES:
  thompson match '(a|b)*a' abba ab     # one verdict per input
  thompson match 'a*' '$'              # `$` stands for the empty string
  thompson match 'a*' '' --empty-marker ''"#,
        )
        .arg(expr_arg())
        .arg(inputs_arg())
        .arg(empty_marker_arg())
        .arg(format_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
        .arg(verbose_arg().hide(true))
}

/// Trace a single match.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Trace matcher execution for debugging")
        .after_help(
            r#"EXAMPLES:
  thompson trace '(a|b)*a' ba          # reachable set sizes
  thompson trace '(a|b)*a' ba -v       # reachable state ids"#,
        )
        .arg(expr_arg())
        .arg(input_arg())
        .arg(empty_marker_arg())
        .arg(verbose_arg())
        .arg(recursion_limit_arg())
        .arg(color_arg())
}

/// Interactive command loop.
pub fn shell_command() -> Command {
    Command::new("shell")
        .about("Interactive shell: exp, dot, mat, end")
        .after_help(
            r#"COMMANDS:
  exp <expression>   Read in a regular expression
  dot <file>         Export the automaton as DOT
  mat <string>       Check whether a string is accepted
  end                Close the shell

EXAMPLES:
  thompson shell
  printf 'exp a*\nmat aaa\n' | thompson shell -q"#,
        )
        .arg(quiet_arg())
        .arg(empty_marker_arg())
        .arg(color_arg())
}

//! Interactive shell.
//!
//! Reads one command per line and keeps the current automaton between
//! commands. The loop is generic over its reader and writer so it can be
//! driven from stdin/stdout or from in-memory buffers.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

use thompson_lib::{Nfa, normalize_input};

use super::common::render_error;

const BANNER: &str = "Regular expression parsing with Thompson's construction";

const MENU: &str = "Available operations:
 - exp <expression>\tRead in regular expression
 - dot <filename>\tExport regular expression to dot-notation
 - mat <string>\t\tCheck whether a string is accepted by automaton
 - end\t\t\tClose the program
Please enter an operation. If applicable, you can immediately provide
an argument for the operation:";

const PROMPT_EXPRESSION: &str = "Please enter a regular expression:";
const PROMPT_PATH: &str = "Please enter a filepath to write the output to:";
const PROMPT_INPUT: &str = "Please enter a string to check:";

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Reading commands or writing responses failed; the session cannot go on.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// The DOT file could not be written; reported and the session continues.
    #[error("Error while exporting .dot: cannot write {}: {source}", .path.display())]
    Export { path: PathBuf, source: io::Error },
}

pub struct ShellArgs {
    pub quiet: bool,
    pub empty_marker: String,
    pub color: bool,
}

pub fn run(args: ShellArgs) {
    let mut shell = Shell::new(args);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    if let Err(e) = shell.run(&mut input, &mut output) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Session state: the current automaton plus display settings.
pub struct Shell {
    nfa: Nfa,
    quiet: bool,
    empty_marker: String,
    color: bool,
}

impl Shell {
    pub fn new(args: ShellArgs) -> Self {
        Self {
            nfa: Nfa::empty(),
            quiet: args.quiet,
            empty_marker: args.empty_marker,
            color: args.color,
        }
    }

    pub fn nfa(&self) -> &Nfa {
        &self.nfa
    }

    /// Run until `end` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<(), ShellError> {
        if !self.quiet {
            writeln!(out, "{}", BANNER)?;
        }

        loop {
            if !self.quiet {
                write!(out, "{}", MENU)?;
                out.flush()?;
            }
            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            if self.execute(&line, input, out)?.is_break() {
                return Ok(());
            }
        }
    }

    /// Execute one command line. Missing arguments are prompted for and
    /// read from `input`.
    pub fn execute<R: BufRead, W: Write>(
        &mut self,
        line: &str,
        input: &mut R,
        out: &mut W,
    ) -> Result<ControlFlow<()>, ShellError> {
        let line = strip_carriage_return(line);
        let (command, rest) = split_command(line);

        match command {
            "exp" => {
                let Some(expr) = argument(rest, PROMPT_EXPRESSION, input, out)? else {
                    return Ok(ControlFlow::Break(()));
                };
                self.load_expression(&expr, out)?;
            }
            "dot" => {
                let path = match rest.split_whitespace().next() {
                    Some(path) => path.to_string(),
                    None => match prompt(PROMPT_PATH, input, out)? {
                        Some(path) => path.trim().to_string(),
                        None => return Ok(ControlFlow::Break(())),
                    },
                };
                if let Err(e) = self.export_dot(Path::new(&path)) {
                    writeln!(out, "{}", e)?;
                }
            }
            "mat" => {
                let Some(text) = argument(rest, PROMPT_INPUT, input, out)? else {
                    return Ok(ControlFlow::Break(()));
                };
                let matched = self.nfa.is_match(normalize_input(&text, &self.empty_marker));
                writeln!(out, "{}", if matched { "match" } else { "no match" })?;
            }
            "end" => return Ok(ControlFlow::Break(())),
            "" => writeln!(out, "Unknown command: (none)")?,
            other => writeln!(out, "Unknown command: {}", other)?,
        }

        Ok(ControlFlow::Continue(()))
    }

    /// Replace the current automaton. A malformed expression leaves it untouched.
    fn load_expression<W: Write>(&mut self, expr: &str, out: &mut W) -> Result<(), ShellError> {
        match Nfa::build(expr) {
            Ok(nfa) => self.nfa = nfa,
            Err(err) => write!(out, "{}", render_error(expr, &err, self.color))?,
        }
        Ok(())
    }

    pub fn export_dot(&self, path: &Path) -> Result<(), ShellError> {
        std::fs::write(path, self.nfa.to_dot()).map_err(|source| ShellError::Export {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Inline argument (surrounding whitespace dropped) if present, otherwise
/// prompt for one. `None` at end of input.
fn argument<R: BufRead, W: Write>(
    rest: &str,
    message: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>, ShellError> {
    let rest = rest.trim();
    if !rest.is_empty() {
        return Ok(Some(rest.to_string()));
    }
    prompt(message, input, out)
}

fn prompt<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Option<String>, ShellError> {
    write!(out, "{}", message)?;
    out.flush()?;
    read_line(input)
}

/// Next line without its terminator, or `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, ShellError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(Some(strip_carriage_return(&line).to_string()))
}

/// Everything from the first `\r` on is dropped.
fn strip_carriage_return(line: &str) -> &str {
    match line.find('\r') {
        Some(index) => &line[..index],
        None => line,
    }
}

/// First word, and the remainder after the single separator that follows it.
fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest),
        None => (line, ""),
    }
}

//! Shared plumbing for the one-shot commands.

use thompson_lib::{Error, ExpressionBuilder, Nfa};

/// Output format for commands that can emit JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Expression plus the settings every command builds it with.
pub struct BuildArgs {
    pub expr: String,
    pub recursion_limit: u32,
    pub color: bool,
}

impl BuildArgs {
    pub fn build(&self) -> Result<Nfa, Error> {
        ExpressionBuilder::new(&self.expr)
            .recursion_limit(self.recursion_limit)
            .build()
    }

    /// Build, or print the failure to stderr and exit with status 1.
    pub fn build_or_exit(&self) -> Nfa {
        match self.build() {
            Ok(nfa) => nfa,
            Err(err) => {
                eprint!("{}", render_error(&self.expr, &err, self.color));
                std::process::exit(1);
            }
        }
    }
}

/// Annotated diagnostics for malformed expressions, a one-line error otherwise.
pub fn render_error(expr: &str, err: &Error, color: bool) -> String {
    match err.diagnostics() {
        Some(diagnostics) => {
            let rendered = diagnostics.render_colored(expr, color);
            format!("{}\n", rendered.trim_end())
        }
        None => format!("error: {}\n", err),
    }
}

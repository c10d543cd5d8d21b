//! Parser state and low-level token operations.

use super::lexer::{Token, TokenKind, token_text};
use crate::diagnostics::{DiagnosticKind, Diagnostics, Span};
use crate::nfa::{Fragment, Nfa, NfaBuilder};
use crate::{Error, Result};

/// Recursive-descent parser that emits automaton states as it goes.
///
/// Productions return `Option<Fragment>`: `None` means a diagnostic (or a
/// fatal error) was recorded and the caller should unwind with `?`. There is
/// no recovery; the first grammar violation ends the parse.
pub struct Parser<'src> {
    pub(super) source: &'src str,
    pub(super) tokens: Vec<Token>,
    pub(super) pos: usize,
    pub(super) builder: NfaBuilder,
    pub(super) diagnostics: Diagnostics,
    pub(super) depth: u32,
    recursion_limit: u32,
    fatal_error: Option<Error>,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            builder: NfaBuilder::new(),
            diagnostics: Diagnostics::new(),
            depth: 0,
            recursion_limit: super::DEFAULT_RECURSION_LIMIT,
            fatal_error: None,
        }
    }

    pub fn with_recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn parse(mut self) -> Result<Nfa> {
        let root = self.parse_root();
        self.finish(root)
    }

    fn finish(self, root: Option<Fragment>) -> Result<Nfa> {
        if let Some(err) = self.fatal_error {
            return Err(err);
        }
        if self.diagnostics.has_errors() {
            return Err(Error::MalformedExpression(self.diagnostics));
        }
        Ok(self.builder.finish(root))
    }

    pub(super) fn current(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos).map(|t| t.kind)
    }

    /// Span of the current token, or an empty span at end of input.
    pub(super) fn current_span(&self) -> Span {
        match self.tokens.get(self.pos) {
            Some(token) => token.span,
            None => Span::empty(self.eof_offset()),
        }
    }

    pub(super) fn current_text(&self) -> &'src str {
        match self.tokens.get(self.pos) {
            Some(token) => token_text(self.source, token),
            None => "",
        }
    }

    pub(super) fn eof_offset(&self) -> u32 {
        self.source.len() as u32
    }

    pub(super) fn eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current() == Some(kind)
    }

    pub(super) fn bump(&mut self) {
        debug_assert!(!self.eof(), "bump past end of input");
        self.pos += 1;
    }

    /// Consume the current token if it has the given kind.
    pub(super) fn eat(&mut self, kind: TokenKind) -> bool {
        if !self.currently_is(kind) {
            return false;
        }
        self.bump();
        true
    }

    pub(super) fn enter_recursion(&mut self) -> Option<()> {
        if self.depth >= self.recursion_limit {
            if self.fatal_error.is_none() {
                self.fatal_error = Some(Error::RecursionLimitExceeded);
            }
            return None;
        }
        self.depth += 1;
        Some(())
    }

    pub(super) fn exit_recursion(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Record a diagnostic and yield `None` so productions can bail with `?`.
    pub(super) fn error_msg<T>(
        &mut self,
        kind: DiagnosticKind,
        span: Span,
        message: impl Into<String>,
    ) -> Option<T> {
        self.diagnostics.report(kind, span).message(message).emit();
        None
    }

    /// `)` with no group to close. Suggests deleting it.
    pub(super) fn error_unmatched_close<T>(&mut self) -> Option<T> {
        let span = self.current_span();
        self.diagnostics
            .report(DiagnosticKind::UnexpectedToken, span)
            .message("unmatched `)`")
            .fix("remove the unmatched `)`", span, "")
            .emit();
        None
    }

    /// Input ended inside a group opened at `open`.
    pub(super) fn error_unclosed_group<T>(&mut self, open: Span) -> Option<T> {
        let eof = Span::empty(self.eof_offset());
        self.diagnostics
            .report(DiagnosticKind::UnclosedGroup, open.cover(eof))
            .related_to("group opened here", open)
            .fix("add closing `)`", eof, ")")
            .emit();
        None
    }

    /// A second `*` directly after a starred operand.
    pub(super) fn error_repeated_star<T>(&mut self) -> Option<T> {
        let span = self.current_span();
        self.diagnostics
            .report(DiagnosticKind::UnexpectedToken, span)
            .message("`*` cannot be repeated")
            .fix("remove the extra `*`", span, "")
            .emit();
        None
    }
}

//! Grammar productions.
//!
//! ```text
//! expr := term ('|' expr)?
//! term := fact term?
//! fact := lett '*'? | '(' expr ')' '*'?
//! lett := [A-Za-z]
//! ```
//!
//! Each production appends its states to the builder and returns the
//! resulting fragment. Only `expr` counts against the recursion limit since
//! every cycle in the grammar passes through it.

use super::core::Parser;
use super::lexer::{TokenKind, token_text};
use crate::diagnostics::{DiagnosticKind, Span};
use crate::nfa::Fragment;

impl Parser<'_> {
    /// Whole expression. `None` without diagnostics means empty input.
    pub fn parse_root(&mut self) -> Option<Fragment> {
        if self.report_invalid_characters() {
            return None;
        }
        if self.eof() {
            return None;
        }

        let root = self.parse_expr()?;

        match self.current() {
            None => Some(root),
            Some(TokenKind::ParenClose) => self.error_unmatched_close(),
            Some(TokenKind::Star) => self.error_repeated_star(),
            Some(kind) => self.error_msg(
                DiagnosticKind::UnexpectedToken,
                self.current_span(),
                format!("unexpected {} after expression", kind.describe()),
            ),
        }
    }

    /// One diagnostic per `Garbage` token. Returns true if any was found.
    fn report_invalid_characters(&mut self) -> bool {
        let garbage: Vec<_> = self
            .tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Garbage)
            .copied()
            .collect();

        for token in &garbage {
            let text = token_text(self.source, token).escape_debug().to_string();
            self.diagnostics
                .report(DiagnosticKind::InvalidCharacter, token.span)
                .message(text)
                .emit();
        }
        !garbage.is_empty()
    }

    fn parse_expr(&mut self) -> Option<Fragment> {
        self.enter_recursion()?;
        let result = self.parse_alternation();
        self.exit_recursion();
        result
    }

    fn parse_alternation(&mut self) -> Option<Fragment> {
        let left = self.parse_term()?;
        if !self.eat(TokenKind::Pipe) {
            return Some(left);
        }

        if matches!(
            self.current(),
            None | Some(TokenKind::Pipe) | Some(TokenKind::ParenClose)
        ) {
            return self.error_msg(
                DiagnosticKind::ExpectedExpression,
                self.current_span(),
                "nothing after `|`",
            );
        }

        let right = self.parse_expr()?;
        Some(self.builder.alternate(left, right))
    }

    /// Juxtaposed facts, folded left to right. Concatenation only patches
    /// edges, so the fold order does not change the emitted states.
    fn parse_term(&mut self) -> Option<Fragment> {
        let mut acc = self.parse_fact()?;
        while matches!(
            self.current(),
            Some(TokenKind::Letter) | Some(TokenKind::ParenOpen)
        ) {
            let next = self.parse_fact()?;
            acc = self.builder.concat(acc, next);
        }
        Some(acc)
    }

    fn parse_fact(&mut self) -> Option<Fragment> {
        let operand = match self.current() {
            Some(TokenKind::Letter) => self.parse_letter()?,
            Some(TokenKind::ParenOpen) => self.parse_group()?,
            Some(TokenKind::Star) => {
                return self.error_msg(
                    DiagnosticKind::ExpectedExpression,
                    self.current_span(),
                    "nothing to repeat before `*`",
                );
            }
            Some(TokenKind::Pipe) => {
                return self.error_msg(
                    DiagnosticKind::ExpectedExpression,
                    self.current_span(),
                    "nothing before `|`",
                );
            }
            Some(TokenKind::ParenClose) => return self.error_unmatched_close(),
            Some(TokenKind::Garbage) => {
                let text = self.current_text();
                return self.error_msg(DiagnosticKind::InvalidCharacter, self.current_span(), text);
            }
            None => {
                return self.error_msg(
                    DiagnosticKind::ExpectedExpression,
                    self.current_span(),
                    "input ended early",
                );
            }
        };

        if self.eat(TokenKind::Star) {
            return Some(self.builder.star(operand));
        }
        Some(operand)
    }

    fn parse_letter(&mut self) -> Option<Fragment> {
        let c = self.current_text().chars().next()?;
        self.bump();
        Some(self.builder.letter(c))
    }

    fn parse_group(&mut self) -> Option<Fragment> {
        let open = self.current_span();
        self.bump();

        match self.current() {
            None => return self.error_unclosed_group(open),
            Some(TokenKind::ParenClose) => {
                let span = Span::new(open.start, self.current_span().end);
                return self.error_msg(DiagnosticKind::ExpectedExpression, span, "empty group");
            }
            Some(_) => {}
        }

        let inner = self.parse_expr()?;

        match self.current() {
            Some(TokenKind::ParenClose) => {
                self.bump();
                Some(inner)
            }
            None => self.error_unclosed_group(open),
            Some(TokenKind::Star) => self.error_repeated_star(),
            Some(kind) => self.error_msg(
                DiagnosticKind::UnexpectedToken,
                self.current_span(),
                format!("expected `)`, found {}", kind.describe()),
            ),
        }
    }
}

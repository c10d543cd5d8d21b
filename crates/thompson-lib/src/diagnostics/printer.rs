//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Patch, Renderer, Snippet};

use super::{DiagnosticMessage, Diagnostics, Span};

/// Builder for rendering diagnostics with various options.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    source: Option<&'s str>,
    path: Option<&'s str>,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics) -> Self {
        Self {
            diagnostics,
            source: None,
            path: None,
            colored: false,
        }
    }

    pub fn source(mut self, source: &'s str) -> Self {
        self.source = Some(source);
        self
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let Some(source) = self.source else {
            return self.format_plain(w);
        };

        if self.diagnostics.is_empty() {
            return Ok(());
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            let report = self.report(source, diag);
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    /// One error group for the message, plus a help group when a fix exists.
    fn report<'a>(&self, source: &'a str, diag: &'a DiagnosticMessage) -> Vec<Group<'a>>
    where
        's: 'a,
    {
        let limit = source.len();
        // The title already carries the message; the caret stays unlabeled.
        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(caret_range(diag.span(), limit)));
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }
        for related in diag.related() {
            snippet = snippet.annotation(
                AnnotationKind::Context
                    .span(caret_range(related.span(), limit))
                    .label(related.message()),
            );
        }

        let mut groups = vec![Level::ERROR.primary_title(diag.message()).element(snippet)];
        if let Some(fix) = diag.fix() {
            // Fix spans may sit at end of input (insertions), so they are not widened.
            let patch = Patch::new(fix.span().range(), fix.replacement());
            groups.push(
                Level::HELP
                    .secondary_title(fix.description())
                    .element(Snippet::source(source).line_start(1).patch(patch)),
            );
        }
        groups
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.diagnostics.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", diag)?;
        }
        Ok(())
    }
}

/// Widen zero-width spans to one character so the caret has something to point at.
fn caret_range(span: Span, limit: usize) -> std::ops::Range<usize> {
    let start = span.start as usize;
    let end = span.end as usize;

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}

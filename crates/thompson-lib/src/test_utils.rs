use crate::nfa::Nfa;
use crate::{Error, ExpressionBuilder};

impl Nfa {
    #[track_caller]
    pub fn expect_valid(src: &str) -> Self {
        match Nfa::build(src) {
            Ok(nfa) => nfa,
            Err(err) => panic!("Expected valid expression `{src}`, got error:\n{}", describe(src, &err)),
        }
    }

    #[track_caller]
    pub fn expect_dump(src: &str) -> String {
        Self::expect_valid(src).dump()
    }

    /// Plain one-line-per-diagnostic form.
    #[track_caller]
    pub fn expect_invalid(src: &str) -> String {
        Self::expect_error(src).to_string_plain()
    }

    /// Source-annotated form, as the CLI prints it without colors.
    #[track_caller]
    pub fn expect_invalid_rendered(src: &str) -> String {
        let err = Self::expect_error(src);
        describe(src, &err)
    }

    #[track_caller]
    fn expect_error(src: &str) -> Error {
        match ExpressionBuilder::new(src).build() {
            Ok(nfa) => panic!("Expected invalid expression `{src}`, got:\n{}", nfa.dump()),
            Err(err) => err,
        }
    }
}

impl Error {
    fn to_string_plain(&self) -> String {
        match self.diagnostics() {
            Some(diagnostics) => diagnostics.to_string(),
            None => self.to_string(),
        }
    }
}

fn describe(src: &str, err: &Error) -> String {
    match err.diagnostics() {
        Some(diagnostics) => diagnostics.render(src),
        None => err.to_string(),
    }
}
